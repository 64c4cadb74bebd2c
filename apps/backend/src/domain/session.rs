//! Client-held session lifecycle for one (day, mode) pair.
//!
//! The server never stores sessions. This module is the reference state
//! machine a client persists locally: it owns the attempt list, the
//! finished/won flags, the duplicate/finished submission guards, the
//! attempt-count ceiling and the day rollover rule. Attempts are immutable
//! once recorded and are kept newest first.

use serde::{Deserialize, Serialize};

use crate::domain::compare::ColumnVerdicts;

/// Attempt ceiling used when no override is configured.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 15;

/// Version of the persisted envelope. Bump when `Attempt` or
/// `SessionState` change shape incompatibly.
pub const STORAGE_VERSION: u32 = 1;

const STORAGE_PREFIX: &str = "pokedle";

/// One scored guess: the guessed entry's attribute snapshot plus the
/// per-column verdicts it earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    pub id: i32,
    pub name: String,
    pub sprite: String,
    pub types: Vec<String>,
    pub habitat: String,
    pub color: String,
    pub gen: i16,
    pub evolution_stage: i16,
    pub height_dm: i32,
    pub weight_hg: i32,
    pub columns: ColumnVerdicts,
    pub is_correct: bool,
}

/// Lifecycle phase derived from the recorded attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Empty,
    InProgress,
    Finished { won: bool },
}

/// Why a submission was rejected without mutating the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionRejection {
    /// The session already finished for this (day, mode); wait for rollover.
    AlreadyFinished,
    /// The same entity id was already tried this session.
    AlreadyTried,
}

/// Per-(day, mode) game state as the client persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub day_key: String,
    pub mode: String,
    pub attempts: Vec<Attempt>,
    pub finished: bool,
    pub won: bool,
}

impl SessionState {
    pub fn new(day_key: impl Into<String>, mode: impl Into<String>) -> Self {
        Self {
            day_key: day_key.into(),
            mode: mode.into(),
            attempts: Vec::new(),
            finished: false,
            won: false,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.finished {
            SessionPhase::Finished { won: self.won }
        } else if self.attempts.is_empty() {
            SessionPhase::Empty
        } else {
            SessionPhase::InProgress
        }
    }

    /// Submission guards, checked before any network call or mutation.
    pub fn check_guess(&self, guess_id: i32) -> Result<(), SessionRejection> {
        if self.finished {
            return Err(SessionRejection::AlreadyFinished);
        }
        if self.attempts.iter().any(|a| a.id == guess_id) {
            return Err(SessionRejection::AlreadyTried);
        }
        Ok(())
    }

    /// Record a fully populated attempt.
    ///
    /// The attempt must only be constructed once comparison and enrichment
    /// data are both available; a rejected submission leaves the session
    /// untouched. Newest attempts go to the front.
    pub fn record(
        &mut self,
        attempt: Attempt,
        max_attempts: u32,
    ) -> Result<SessionPhase, SessionRejection> {
        self.check_guess(attempt.id)?;

        let won = attempt.is_correct;
        self.attempts.insert(0, attempt);

        if won {
            self.finished = true;
            self.won = true;
        } else if self.attempts.len() as u32 >= max_attempts {
            self.finished = true;
        }

        Ok(self.phase())
    }

    /// Day rollover: a differing day key yields a fresh empty session for
    /// the same mode. The superseded state stays persisted under its own
    /// storage key (mode dashboards read it for "already played" badges).
    pub fn for_day(self, day_key: &str) -> SessionState {
        if self.day_key == day_key {
            self
        } else {
            SessionState::new(day_key, self.mode)
        }
    }
}

/// Versioned persistence envelope.
///
/// One scheme, one key shape; unknown versions are treated as absent on
/// load rather than probed against legacy layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSession {
    pub version: u32,
    pub state: SessionState,
}

/// Storage key for one (day, mode) session.
pub fn storage_key(day_key: &str, mode: &str) -> String {
    format!("{STORAGE_PREFIX}:v{STORAGE_VERSION}:{day_key}:{mode}")
}

/// Serialize a session into its envelope.
pub fn save(state: &SessionState) -> Result<String, serde_json::Error> {
    serde_json::to_string(&SavedSession {
        version: STORAGE_VERSION,
        state: state.clone(),
    })
}

/// Deserialize a stored envelope.
///
/// Returns `None` for unparseable payloads or version mismatches; callers
/// start a fresh session in that case.
pub fn load(raw: &str) -> Option<SessionState> {
    let saved: SavedSession = serde_json::from_str(raw).ok()?;
    (saved.version == STORAGE_VERSION).then_some(saved.state)
}
