//! Domain errors. Used by ports and use cases.
//!
//! Registration and cancellation errors carry user-facing messages; the UI
//! shows their `Display` text verbatim.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Transport failure or non-success status from the catalog source.
    #[error("catalog source unreachable: {0}")]
    Unreachable(String),

    #[error("catalog payload is not a workshop list: {0}")]
    InvalidPayload(String),

    #[error("workshop {workshop_id}: invalid {field} timestamp {value:?}")]
    InvalidTimestamp {
        workshop_id: String,
        field: &'static str,
        value: String,
    },

    #[error("duplicate workshop id {0:?} in catalog")]
    DuplicateId(String),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegError {
    #[error("Registration period is closed.")]
    WindowClosed,

    #[error("Please enter your name.")]
    MissingName,

    #[error("Please select a workshop.")]
    MissingWorkshop,

    #[error("You already registered for this workshop.")]
    Duplicate,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelError {
    #[error("Registration not found.")]
    NotFound,
}

/// Why the cancellation policy refused a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    #[error("Registration not found.")]
    NotFound,

    #[error("This workshop has already ended and cannot be cancelled.")]
    CannotCancelPast,

    /// Error code the desk does not know about.
    #[error("Unknown error while cancelling.")]
    Unknown(String),
}

impl RejectReason {
    /// Wire code as the decision endpoint reports it.
    pub fn code(&self) -> &str {
        match self {
            RejectReason::NotFound => "NOT_FOUND",
            RejectReason::CannotCancelPast => "CANNOT_CANCEL_PAST",
            RejectReason::Unknown(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "NOT_FOUND" => RejectReason::NotFound,
            "CANNOT_CANCEL_PAST" => RejectReason::CannotCancelPast,
            other => RejectReason::Unknown(other.to_string()),
        }
    }
}

/// Failures outside the store's own taxonomy (adapters, UI, startup).
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("UI error: {0}")]
    Ui(String),
}
