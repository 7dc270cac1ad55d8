//! Mock cancellation endpoint. A lookup table standing in for a real decision service.
//!
//! Answers in the endpoint's wire shape (`{ success, errorCode }`), which is then
//! mapped into a `CancelDecision`.

use crate::domain::{CancelDecision, Registration, RejectReason};
use crate::ports::CancelPolicy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Workshop refused by default: already past its cancellation deadline.
pub const DEFAULT_NON_CANCELLABLE: &str = "ws2";

/// Wire response of the cancellation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl CancelResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error_code: None,
        }
    }

    pub fn error(reason: &RejectReason) -> Self {
        Self {
            success: false,
            error_code: Some(reason.code().to_string()),
        }
    }
}

impl From<CancelResponse> for CancelDecision {
    fn from(res: CancelResponse) -> Self {
        if res.success {
            return CancelDecision::Approved;
        }
        let code = res.error_code.unwrap_or_default();
        CancelDecision::Rejected(RejectReason::from_code(&code))
    }
}

/// Refuses cancellation for a fixed set of workshop ids; approves everything else.
pub struct MockCancelPolicy {
    non_cancellable: HashSet<String>,
}

impl MockCancelPolicy {
    pub fn new<I, S>(non_cancellable: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            non_cancellable: non_cancellable.into_iter().map(Into::into).collect(),
        }
    }

    /// What the endpoint would answer for this registration.
    pub fn respond(&self, registration: Option<&Registration>) -> CancelResponse {
        match registration {
            None => CancelResponse::error(&RejectReason::NotFound),
            Some(r) if self.non_cancellable.contains(&r.workshop_id) => {
                CancelResponse::error(&RejectReason::CannotCancelPast)
            }
            Some(_) => CancelResponse::ok(),
        }
    }
}

impl Default for MockCancelPolicy {
    fn default() -> Self {
        Self::new([DEFAULT_NON_CANCELLABLE])
    }
}

impl CancelPolicy for MockCancelPolicy {
    fn decide(&self, registration: Option<&Registration>) -> CancelDecision {
        let res = self.respond(registration);
        debug!(success = res.success, code = ?res.error_code, "[MOCK] cancel endpoint");
        res.into()
    }
}
