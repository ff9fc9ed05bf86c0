//! Handlers for the poll lifecycle endpoints.
//!
//! All poll state lives in the in-memory [`PollStore`]; each handler stamps
//! the request time once and passes it down so expiry is enforced at
//! request time, not only when the reaper sweeps.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vanishvote_core::poll::NewPoll;

use crate::error::AppResult;
use crate::state::AppState;

/// Response payload for poll creation: the shareable poll id.
#[derive(Debug, Serialize)]
pub struct CreatedPoll {
    pub id: Uuid,
}

/// Request payload for casting a vote.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub option_index: i64,
}

/// Request payload for adding a comment.
#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub text: String,
}

/// POST /api/create-poll
///
/// Validate the payload and persist a new poll. Returns `{"id": ...}`;
/// the client turns the id into a shareable link.
pub async fn create_poll(
    State(state): State<AppState>,
    Json(input): Json<NewPoll>,
) -> AppResult<impl IntoResponse> {
    let poll = state.store.create(input, Utc::now())?;

    tracing::info!(
        poll_id = %poll.id,
        kind = ?poll.kind,
        expires_at = %poll.expires_at,
        "Poll created"
    );

    Ok((StatusCode::CREATED, Json(CreatedPoll { id: poll.id })))
}

/// GET /api/poll/{id}
///
/// Full poll snapshot: question, options with tallies, reactions, and
/// comments. Expired polls 404 like absent ones.
pub async fn get_poll(
    State(state): State<AppState>,
    Path(poll_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let poll = state.store.get(poll_id, Utc::now())?;

    Ok(Json(poll))
}

/// PUT /api/poll/{id}/vote
///
/// Count one anonymous vote for the option at `optionIndex`. Votes are not
/// deduplicated per voter.
pub async fn vote(
    State(state): State<AppState>,
    Path(poll_id): Path<Uuid>,
    Json(input): Json<VoteRequest>,
) -> AppResult<impl IntoResponse> {
    let poll = state.store.vote(poll_id, input.option_index, Utc::now())?;

    tracing::debug!(poll_id = %poll.id, option_index = input.option_index, "Vote recorded");

    Ok(Json(poll))
}

/// PUT /api/poll/{id}/comments
///
/// Append one anonymous comment with a server-assigned timestamp.
pub async fn add_comment(
    State(state): State<AppState>,
    Path(poll_id): Path<Uuid>,
    Json(input): Json<CommentRequest>,
) -> AppResult<impl IntoResponse> {
    let poll = state.store.add_comment(poll_id, &input.text, Utc::now())?;

    tracing::debug!(poll_id = %poll.id, comments = poll.comments.len(), "Comment added");

    Ok(Json(poll))
}

/// PUT /api/poll/{id}/like
pub async fn like(
    State(state): State<AppState>,
    Path(poll_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let poll = state.store.like(poll_id, Utc::now())?;

    tracing::debug!(poll_id = %poll.id, likes = poll.likes, "Like recorded");

    Ok(Json(poll))
}

/// PUT /api/poll/{id}/trending
pub async fn mark_trending(
    State(state): State<AppState>,
    Path(poll_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let poll = state.store.mark_trending(poll_id, Utc::now())?;

    tracing::debug!(poll_id = %poll.id, trending = poll.trending, "Trending reaction recorded");

    Ok(Json(poll))
}
