//! HTTP route handlers.

use std::path::Path;

use axum::{
    Json, Router,
    extract::{Path as UrlPath, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::domain::{Observation, Station, StationId};
use crate::ndbc::NdbcError;
use crate::stations;

use super::dto::ErrorResponse;
use super::state::AppState;

/// Message for any request with nothing to return.
const NO_DATA: &str = "No data available";

/// Create the application router.
///
/// Paths outside the API are served from `static_dir`.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/station/:id/data", get(station_data))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The full station registry.
async fn list_stations() -> Json<&'static [Station]> {
    Json(stations::all())
}

/// Latest observation for one station.
async fn station_data(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<String>,
) -> Result<Json<Observation>, AppError> {
    let station = StationId::parse(&id).map_err(|e| {
        debug!(%id, "{e}");
        AppError::BadRequest {
            message: "Invalid station ID".to_string(),
        }
    })?;

    if let Some(known) = stations::find(&station) {
        debug!(station = %station, name = known.name, "fetching registered station");
    }

    state
        .ndbc
        .latest_observation(&station)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound {
            message: NO_DATA.to_string(),
        })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    BadGateway { message: String },
}

impl From<NdbcError> for AppError {
    fn from(e: NdbcError) -> Self {
        match e {
            NdbcError::NotFound => AppError::NotFound {
                message: NO_DATA.to_string(),
            },
            _ => AppError::BadGateway {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
        };

        warn!(status = status.as_u16(), "{message}");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
