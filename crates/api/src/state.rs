use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the store and config are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Record store.
    pub store: penalty_db::StorePool,
    /// Server configuration (auth gate, JWT settings).
    pub config: Arc<ServerConfig>,
}
