pub mod health;
pub mod poll;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// POST /create-poll           create a poll, returns {id}
/// GET  /poll/{id}             poll snapshot
/// PUT  /poll/{id}/vote        cast a vote ({optionIndex})
/// PUT  /poll/{id}/comments    add a comment ({text})
/// PUT  /poll/{id}/like        like reaction
/// PUT  /poll/{id}/trending    trending reaction
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(poll::router())
}
