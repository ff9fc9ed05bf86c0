//! Route definitions for the poll lifecycle, mounted at `/api`.
//!
//! Paths match the browser client's calls exactly, including the
//! `create-poll` / `poll/{id}` split.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::poll;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create-poll", post(poll::create_poll))
        .route("/poll/{id}", get(poll::get_poll))
        .route("/poll/{id}/vote", put(poll::vote))
        .route("/poll/{id}/comments", put(poll::add_comment))
        .route("/poll/{id}/like", put(poll::like))
        .route("/poll/{id}/trending", put(poll::mark_trending))
}
