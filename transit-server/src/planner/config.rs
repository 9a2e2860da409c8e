//! Search configuration for the route finder.

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of stations settled by a single query.
    /// A query that needs more gives up with `SearchError::ExpansionLimit`.
    pub max_expansions: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_expansions: usize) -> Self {
        Self { max_expansions }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_expansions: 1_000_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_expansions, 1_000_000);
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(50);
        assert_eq!(config.max_expansions, 50);
    }
}
