//! Cancellation policy adapters. Implement CancelPolicy.

pub mod mock_cancel;

pub use mock_cancel::{CancelResponse, MockCancelPolicy};
