//! Two-step cancellation: request, then confirm or dismiss.
//!
//! `Idle -> AwaitingConfirmation -> Idle`. At most one pending cancellation; a new
//! request replaces the old one. Both resolution paths clear the slot.

use crate::domain::{CancelDecision, PendingCancellation, Registration, RejectReason};
use crate::ports::CancelPolicy;
use crate::usecases::ledger::RegistrationLedger;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfirmState {
    #[default]
    Idle,
    AwaitingConfirmation(PendingCancellation),
}

#[derive(Debug, Default)]
pub struct CancellationConfirmer {
    state: ConfirmState,
}

impl CancellationConfirmer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ConfirmState {
        &self.state
    }

    pub fn pending(&self) -> Option<&PendingCancellation> {
        match &self.state {
            ConfirmState::Idle => None,
            ConfirmState::AwaitingConfirmation(p) => Some(p),
        }
    }

    /// Enter `AwaitingConfirmation`, replacing any earlier request.
    pub fn request(&mut self, index: usize, message: String) -> PendingCancellation {
        if let Some(prev) = self.pending() {
            debug!(previous = prev.index, index, "replacing pending cancellation");
        }
        let pending = PendingCancellation { index, message };
        self.state = ConfirmState::AwaitingConfirmation(pending.clone());
        pending
    }

    /// Resolve the pending cancellation through `policy`.
    ///
    /// Returns `Ok(None)` when nothing is pending (policy not consulted),
    /// `Ok(Some(removed))` on approval, `Err(reason)` on rejection.
    pub fn confirm(
        &mut self,
        ledger: &mut RegistrationLedger,
        policy: &dyn CancelPolicy,
    ) -> Result<Option<Registration>, RejectReason> {
        let ConfirmState::AwaitingConfirmation(pending) = std::mem::take(&mut self.state) else {
            return Ok(None);
        };

        match policy.decide(ledger.get(pending.index)) {
            CancelDecision::Approved => match ledger.remove(pending.index) {
                Some(removed) => {
                    info!(
                        index = pending.index,
                        user = %removed.user_name,
                        workshop = %removed.workshop_id,
                        "registration cancelled"
                    );
                    Ok(Some(removed))
                }
                None => {
                    warn!(index = pending.index, "approved cancellation for empty slot");
                    Err(RejectReason::NotFound)
                }
            },
            CancelDecision::Rejected(reason) => {
                warn!(index = pending.index, code = reason.code(), "cancellation rejected");
                Err(reason)
            }
        }
    }

    /// Back to `Idle` without consulting the policy. Valid in any state.
    pub fn dismiss(&mut self) {
        if let ConfirmState::AwaitingConfirmation(p) = &self.state {
            debug!(index = p.index, "cancellation dismissed");
        }
        self.state = ConfirmState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RegistrationWindow;
    use chrono::{DateTime, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Records calls; rejects workshop "ws2".
    #[derive(Default)]
    struct CountingPolicy {
        calls: AtomicUsize,
    }

    impl CancelPolicy for CountingPolicy {
        fn decide(&self, registration: Option<&Registration>) -> CancelDecision {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match registration {
                None => CancelDecision::Rejected(RejectReason::NotFound),
                Some(r) if r.workshop_id == "ws2" => {
                    CancelDecision::Rejected(RejectReason::CannotCancelPast)
                }
                Some(_) => CancelDecision::Approved,
            }
        }
    }

    fn ledger_with(pairs: &[(&str, &str)]) -> RegistrationLedger {
        let now: DateTime<Utc> = "2025-12-15T05:00:00Z".parse().unwrap();
        let window = RegistrationWindow::new(now, now).unwrap();
        let mut ledger = RegistrationLedger::new();
        for (user, ws) in pairs {
            ledger.register(user, ws, now, &window).unwrap();
        }
        ledger
    }

    #[test]
    fn test_request_replaces_pending() {
        let mut c = CancellationConfirmer::new();
        c.request(0, "first".to_string());
        c.request(2, "second".to_string());
        assert_eq!(
            c.state(),
            &ConfirmState::AwaitingConfirmation(PendingCancellation {
                index: 2,
                message: "second".to_string()
            })
        );
    }

    #[test]
    fn test_confirm_approved_removes_entry() {
        let mut ledger = ledger_with(&[("Alice", "ws1"), ("Bob", "ws3")]);
        let policy = CountingPolicy::default();
        let mut c = CancellationConfirmer::new();

        c.request(0, "Cancel registration for Alice?".to_string());
        let removed = c.confirm(&mut ledger, &policy).unwrap().unwrap();

        assert_eq!(removed.user_name, "Alice");
        assert_eq!(ledger.len(), 1);
        assert_eq!(c.state(), &ConfirmState::Idle);
    }

    #[test]
    fn test_confirm_rejected_keeps_ledger() {
        let mut ledger = ledger_with(&[("Alice", "ws2")]);
        let policy = CountingPolicy::default();
        let mut c = CancellationConfirmer::new();

        c.request(0, "Cancel registration for Alice?".to_string());
        assert_eq!(
            c.confirm(&mut ledger, &policy),
            Err(RejectReason::CannotCancelPast)
        );
        assert_eq!(ledger.len(), 1);
        assert_eq!(c.state(), &ConfirmState::Idle);
    }

    #[test]
    fn test_confirm_stale_index_not_found() {
        let mut ledger = ledger_with(&[("Alice", "ws1")]);
        let policy = CountingPolicy::default();
        let mut c = CancellationConfirmer::new();

        c.request(3, "stale".to_string());
        assert_eq!(c.confirm(&mut ledger, &policy), Err(RejectReason::NotFound));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_confirm_idle_skips_policy() {
        let mut ledger = ledger_with(&[("Alice", "ws1")]);
        let policy = CountingPolicy::default();
        let mut c = CancellationConfirmer::new();

        assert_eq!(c.confirm(&mut ledger, &policy), Ok(None));
        assert_eq!(policy.calls.load(Ordering::SeqCst), 0);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_dismiss_always_idle() {
        let mut ledger = ledger_with(&[("Alice", "ws1")]);
        let policy = CountingPolicy::default();
        let mut c = CancellationConfirmer::new();

        c.dismiss();
        assert_eq!(c.state(), &ConfirmState::Idle);

        c.request(0, "Cancel registration for Alice?".to_string());
        c.dismiss();
        assert_eq!(c.state(), &ConfirmState::Idle);
        assert_eq!(c.confirm(&mut ledger, &policy), Ok(None));
        assert_eq!(policy.calls.load(Ordering::SeqCst), 0);
        assert_eq!(ledger.len(), 1);
    }
}
