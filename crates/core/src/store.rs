//! In-memory owner of every live poll.
//!
//! The store is the sole mutator of poll state: handlers and the expiry
//! reaper both go through it. Lookups read-lock the outer map only long
//! enough to clone an entry handle; mutation then serializes on that
//! poll's own mutex, so concurrent writes to one poll never lose updates
//! and writes to different polls never block each other.
//!
//! Every operation takes the caller's `now` and enforces expiry itself.
//! The reaper sweep only reclaims memory; it never decides visibility, so
//! a write can never land on an expired poll just because the sweep has
//! not run yet.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use chrono::{DateTime, Utc};

use crate::error::CoreError;
use crate::poll::{Comment, NewPoll, Poll, PollId};

/// Map entry. `expires_at` never changes after creation and is kept
/// outside the mutex so expiry checks and the purge sweep read it without
/// contending with in-flight writes.
struct Entry {
    expires_at: DateTime<Utc>,
    poll: Mutex<Poll>,
}

pub struct PollStore {
    polls: RwLock<HashMap<PollId, Arc<Entry>>>,
}

fn poisoned() -> CoreError {
    CoreError::Internal("poll store lock poisoned".into())
}

impl PollStore {
    pub fn new() -> Self {
        Self {
            polls: RwLock::new(HashMap::new()),
        }
    }

    /// Validate a creation payload, persist the new poll, and return its
    /// initial snapshot (zero votes, zero reactions, no comments).
    pub fn create(&self, req: NewPoll, now: DateTime<Utc>) -> Result<Poll, CoreError> {
        let poll = Poll::from_request(req, now)?;
        let entry = Arc::new(Entry {
            expires_at: poll.expires_at,
            poll: Mutex::new(poll.clone()),
        });
        self.polls
            .write()
            .map_err(|_| poisoned())?
            .insert(poll.id, entry);
        Ok(poll)
    }

    /// Current snapshot of a live poll. Expired polls are indistinguishable
    /// from absent ones.
    pub fn get(&self, id: PollId, now: DateTime<Utc>) -> Result<Poll, CoreError> {
        self.with_poll(id, now, |poll| Ok(poll.clone()))
    }

    /// Count one vote for the option at `option_index`.
    ///
    /// Out-of-range indices (including negative ones) are rejected before
    /// any counter is touched.
    pub fn vote(&self, id: PollId, option_index: i64, now: DateTime<Utc>) -> Result<Poll, CoreError> {
        self.with_poll(id, now, |poll| {
            let len = poll.options.len();
            let idx = usize::try_from(option_index)
                .ok()
                .filter(|&i| i < len)
                .ok_or_else(|| {
                    CoreError::Validation(format!(
                        "optionIndex {option_index} out of range for {len} options"
                    ))
                })?;
            poll.options[idx].votes += 1;
            Ok(poll.clone())
        })
    }

    /// Append an anonymous comment with a server-assigned timestamp.
    pub fn add_comment(&self, id: PollId, text: &str, now: DateTime<Utc>) -> Result<Poll, CoreError> {
        self.with_poll(id, now, |poll| {
            let text = text.trim();
            if text.is_empty() {
                return Err(CoreError::Validation("comment must not be empty".into()));
            }
            poll.comments.push(Comment {
                text: text.to_owned(),
                timestamp: now,
            });
            Ok(poll.clone())
        })
    }

    /// Count one anonymous like. No upper bound, no deduplication.
    pub fn like(&self, id: PollId, now: DateTime<Utc>) -> Result<Poll, CoreError> {
        self.with_poll(id, now, |poll| {
            poll.likes += 1;
            Ok(poll.clone())
        })
    }

    /// Count one anonymous trending reaction.
    pub fn mark_trending(&self, id: PollId, now: DateTime<Utc>) -> Result<Poll, CoreError> {
        self.with_poll(id, now, |poll| {
            poll.trending += 1;
            Ok(poll.clone())
        })
    }

    /// Drop every poll whose expiration time is at or before `cutoff` and
    /// report how many were removed.
    pub fn purge_expired(&self, cutoff: DateTime<Utc>) -> Result<usize, CoreError> {
        let mut map = self.polls.write().map_err(|_| poisoned())?;
        let before = map.len();
        map.retain(|_, entry| entry.expires_at > cutoff);
        Ok(before - map.len())
    }

    /// Number of polls that are still live at `now`.
    pub fn active_polls(&self, now: DateTime<Utc>) -> usize {
        self.polls
            .read()
            .map(|map| map.values().filter(|e| e.expires_at > now).count())
            .unwrap_or(0)
    }

    /// Look up a live poll's entry and run `f` under its mutex.
    fn with_poll<T>(
        &self,
        id: PollId,
        now: DateTime<Utc>,
        f: impl FnOnce(&mut Poll) -> Result<T, CoreError>,
    ) -> Result<T, CoreError> {
        let entry = {
            let map = self.polls.read().map_err(|_| poisoned())?;
            map.get(&id).cloned().ok_or(CoreError::NotFound { id })?
        };
        if entry.expires_at <= now {
            return Err(CoreError::NotFound { id });
        }
        let mut poll = entry.poll.lock().map_err(|_| poisoned())?;
        f(&mut poll)
    }
}

impl Default for PollStore {
    fn default() -> Self {
        Self::new()
    }
}
