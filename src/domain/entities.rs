//! Domain entities. Pure data structures for the registration desk.
//!
//! Wire shapes (`WorkshopRecord`) are mapped into these by the catalog loader.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::RejectReason;

/// Difficulty level as published in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        };
        f.write_str(s)
    }
}

/// A workshop record exactly as the catalog source delivers it.
///
/// `start`/`end` are left as strings; the loader owns timestamp parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkshopRecord {
    pub id: String,
    pub title: String,
    pub level: Level,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

/// A scheduled workshop. Immutable after load, identified by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workshop {
    pub id: String,
    pub title: String,
    pub level: Level,
    pub description: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl Workshop {
    /// Both bounds, when the workshop has a full schedule.
    pub fn schedule(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

/// A user's claim on a workshop. Ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub user_name: String,
    pub workshop_id: String,
}

/// Inclusive interval during which new registrations are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationWindow {
    open_time: DateTime<Utc>,
    close_time: DateTime<Utc>,
}

impl RegistrationWindow {
    /// Returns `None` when `open_time` is after `close_time`.
    pub fn new(open_time: DateTime<Utc>, close_time: DateTime<Utc>) -> Option<Self> {
        (open_time <= close_time).then_some(Self {
            open_time,
            close_time,
        })
    }

    pub fn open_time(&self) -> DateTime<Utc> {
        self.open_time
    }

    pub fn close_time(&self) -> DateTime<Utc> {
        self.close_time
    }
}

/// Display status of a workshop relative to the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkshopStatus {
    Upcoming,
    StartingSoon,
    InProgress,
    Ended,
}

impl fmt::Display for WorkshopStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WorkshopStatus::Upcoming => "UPCOMING",
            WorkshopStatus::StartingSoon => "STARTING SOON",
            WorkshopStatus::InProgress => "IN PROGRESS",
            WorkshopStatus::Ended => "ENDED",
        };
        f.write_str(s)
    }
}

/// Whether the registration window is open at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowStatus {
    Open {
        open_time: DateTime<Utc>,
        close_time: DateTime<Utc>,
    },
    Closed {
        next_open: DateTime<Utc>,
    },
}

/// A registration awaiting confirmation before removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCancellation {
    pub index: usize,
    pub message: String,
}

/// Answer of the cancellation policy for one registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelDecision {
    Approved,
    Rejected(RejectReason),
}
