//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod schedule;

pub use entities::{
    CancelDecision, Level, PendingCancellation, Registration, RegistrationWindow, WindowStatus,
    Workshop, WorkshopRecord, WorkshopStatus,
};
pub use errors::{CancelError, DomainError, LoadError, RegError, RejectReason};
pub use schedule::DisplayZone;
