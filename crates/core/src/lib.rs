//! Domain logic for the VanishVote poll service.
//!
//! Runtime-free: the poll model, creation validation, and the in-memory
//! [`store::PollStore`] that owns all poll state. The HTTP layer lives in
//! `vanishvote-api`.

pub mod error;
pub mod poll;
pub mod store;
