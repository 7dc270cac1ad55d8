//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{CancelDecision, LoadError, Registration};

/// Read-only workshop data source.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the raw catalog body. Transport errors and non-success statuses map to
    /// `LoadError::Unreachable`; decoding is left to the loader.
    async fn fetch(&self) -> Result<String, LoadError>;

    /// Where the catalog comes from, for logs.
    fn describe(&self) -> String;
}

/// Decides whether a registration may be cancelled.
///
/// `None` means the pending slot no longer points at a registration.
pub trait CancelPolicy: Send + Sync {
    fn decide(&self, registration: Option<&Registration>) -> CancelDecision;
}
