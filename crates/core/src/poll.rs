//! Poll data model and creation rules.
//!
//! A poll is a question with a fixed, index-addressed option list, a hard
//! expiration time, anonymous reaction counters, and an append-only comment
//! log. Everything here is plain data; ownership and mutation go through
//! [`crate::store::PollStore`].

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// Poll identifier. Random v4 so share links cannot be guessed or enumerated.
pub type PollId = Uuid;

/// Expiry horizons the service accepts, in hours.
pub const SUPPORTED_EXPIRY_HOURS: [u32; 3] = [1, 12, 24];

/// The two poll shapes the client can create. Both share the same
/// option-list representation; the kind only changes how the option list
/// is derived at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PollKind {
    #[serde(rename = "yes-no")]
    YesNo,
    #[serde(rename = "multiple-choice")]
    MultipleChoice,
}

/// One selectable choice, addressed by its position in the poll's list.
#[derive(Debug, Clone, Serialize)]
pub struct PollOption {
    pub text: String,
    pub votes: u64,
}

/// An anonymous comment. Immutable once appended.
#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub id: PollId,
    pub question: String,
    #[serde(rename = "type")]
    pub kind: PollKind,
    pub options: Vec<PollOption>,
    pub results_visible: bool,
    pub likes: u64,
    pub trending: u64,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Creation payload as submitted by the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPoll {
    pub question: String,
    #[serde(rename = "type")]
    pub kind: PollKind,
    #[serde(default)]
    pub options: Vec<String>,
    pub expires_in: u32,
    #[serde(default = "default_results_visible")]
    pub results_visible: bool,
}

fn default_results_visible() -> bool {
    true
}

impl Poll {
    /// Validate a creation payload and build the initial poll state.
    ///
    /// Yes/no polls always get the canonical `Yes`/`No` option pair; the
    /// browser client submits an unreliable options array for that kind.
    /// Multiple-choice option texts are trimmed and blank entries dropped
    /// before the minimum-count check.
    pub fn from_request(req: NewPoll, now: DateTime<Utc>) -> Result<Self, CoreError> {
        let question = req.question.trim().to_owned();
        if question.is_empty() {
            return Err(CoreError::Validation("question must not be empty".into()));
        }

        if !SUPPORTED_EXPIRY_HOURS.contains(&req.expires_in) {
            return Err(CoreError::Validation(format!(
                "expiresIn must be one of {SUPPORTED_EXPIRY_HOURS:?} hours, got {}",
                req.expires_in
            )));
        }

        let texts: Vec<String> = match req.kind {
            PollKind::YesNo => vec!["Yes".to_owned(), "No".to_owned()],
            PollKind::MultipleChoice => req
                .options
                .iter()
                .map(|o| o.trim())
                .filter(|o| !o.is_empty())
                .map(str::to_owned)
                .collect(),
        };
        if texts.len() < 2 {
            return Err(CoreError::Validation(
                "multiple-choice polls need at least two non-empty options".into(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            question,
            kind: req.kind,
            options: texts
                .into_iter()
                .map(|text| PollOption { text, votes: 0 })
                .collect(),
            results_visible: req.results_visible,
            likes: 0,
            trending: 0,
            comments: Vec::new(),
            created_at: now,
            expires_at: now + Duration::hours(i64::from(req.expires_in)),
        })
    }

    /// A poll is expired from the instant its expiration time is reached.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
