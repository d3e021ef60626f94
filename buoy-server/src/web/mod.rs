//! Web layer for the buoy server.
//!
//! Serves the station registry and per-station observations as JSON, and
//! hosts the companion front-end's static assets.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
