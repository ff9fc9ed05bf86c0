use std::sync::Arc;

use vanishvote_core::store::PollStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// In-memory poll store; sole owner of all poll state.
    pub store: Arc<PollStore>,
    /// Server configuration, loaded once at startup.
    pub config: Arc<ServerConfig>,
}
