//! Application state for the web layer.

use std::sync::Arc;

use crate::ndbc::NdbcClient;

/// Shared application state.
///
/// The station registry is static, so the only shared service is the
/// upstream client.
#[derive(Clone)]
pub struct AppState {
    /// NDBC realtime report client
    pub ndbc: Arc<NdbcClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(ndbc: NdbcClient) -> Self {
        Self {
            ndbc: Arc::new(ndbc),
        }
    }
}
