//! Web layer for the route finder.
//!
//! Provides JSON endpoints for browsing stations and finding routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
