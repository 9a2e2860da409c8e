//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, error, warn};

use crate::network::NetworkError;
use crate::planner::{RouteFinder, SearchError};

use super::dto::*;
use super::state::AppState;

const DEFAULT_STATION_LIMIT: usize = 500;
const MAX_STATION_LIMIT: usize = 5000;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/stations/:name/neighbors", get(station_neighbors))
        .route("/api/route", get(find_route))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List stations, optionally filtered by a case-insensitive substring.
async fn list_stations(
    State(state): State<AppState>,
    Query(req): Query<StationListRequest>,
) -> Json<StationListResponse> {
    let limit = req
        .limit
        .unwrap_or(DEFAULT_STATION_LIMIT)
        .min(MAX_STATION_LIMIT);
    let needle = req
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    let stations = state
        .network
        .stations()
        .iter()
        .filter(|name| {
            needle
                .as_ref()
                .is_none_or(|n| name.to_lowercase().contains(n.as_str()))
        })
        .take(limit)
        .cloned()
        .collect();

    Json(StationListResponse {
        total: state.network.len(),
        stations,
    })
}

/// Direct neighbours of a station.
async fn station_neighbors(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<NeighborsResponse>, AppError> {
    let neighbors = state
        .network
        .neighbors(&name)
        .map_err(|e| match e {
            NetworkError::UnknownStation(_) => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        })?
        .into_iter()
        .map(|(station, minutes)| NeighborResult {
            station: station.to_string(),
            minutes: minutes.get(),
        })
        .collect();

    Ok(Json(NeighborsResponse {
        station: name,
        neighbors,
    }))
}

/// Quickest route between two stations.
async fn find_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let finder = RouteFinder::new(&state.network, &state.config);
    let result = finder.find(&req.from, &req.to)?;

    debug!(
        from = %req.from,
        to = %req.to,
        found = result.outcome.is_found(),
        settled = result.stations_settled,
        "route query answered"
    );

    Ok(Json(RouteResponse::from_outcome(
        &req.from,
        &req.to,
        &result.outcome,
    )))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::UnknownStation(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            SearchError::ExpansionLimit { .. } => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
