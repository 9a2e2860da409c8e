//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::planner::SearchConfig;

/// Address to bind to.
pub const BIND_ADDR_VAR: &str = "TRANSIT_BIND_ADDR";

/// Optional path to a JSON network snapshot. The built-in seed is used when unset.
pub const NETWORK_PATH_VAR: &str = "TRANSIT_NETWORK_PATH";

/// Optional override for `SearchConfig::max_expansions`.
pub const MAX_EXPANSIONS_VAR: &str = "TRANSIT_MAX_EXPANSIONS";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Errors from reading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a socket address: {value}")]
    InvalidBindAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("{var} is not a positive integer: {value}")]
    InvalidMaxExpansions { var: &'static str, value: String },
}

/// Configuration for the route server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,

    /// Snapshot to load the network from, if any.
    pub network_path: Option<PathBuf>,

    /// Route search configuration.
    pub search: SearchConfig,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through a variable lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_value = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: bind_value.clone(),
                source,
            })?;

        let network_path = lookup(NETWORK_PATH_VAR)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let mut search = SearchConfig::default();
        if let Some(value) = lookup(MAX_EXPANSIONS_VAR) {
            search.max_expansions = match value.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidMaxExpansions {
                        var: MAX_EXPANSIONS_VAR,
                        value,
                    });
                }
            };
        }

        Ok(Self {
            bind_addr,
            network_path,
            search,
        })
    }
}
