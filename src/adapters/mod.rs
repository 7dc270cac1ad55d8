//! Infrastructure adapters. Implement ports.
//!
//! Catalog sources, cancellation policy, terminal UI. Map errors to domain errors.

pub mod catalog;
pub mod policy;
pub mod ui;
