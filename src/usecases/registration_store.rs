//! Registration store. Owns the catalog, the ledger and the pending cancellation.
//!
//! Owned by the composition root and lent to the UI. Every user action replaces
//! the single notice line: failures set it, successes clear it.

use crate::domain::schedule::{self, DisplayZone};
use crate::domain::{
    CancelError, LoadError, PendingCancellation, RegError, Registration, RegistrationWindow,
    RejectReason, WindowStatus, Workshop, WorkshopStatus,
};
use crate::ports::CancelPolicy;
use crate::usecases::catalog_loader::CatalogLoader;
use crate::usecases::confirmer::{CancellationConfirmer, ConfirmState};
use crate::usecases::ledger::RegistrationLedger;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Notice shown when the catalog could not be loaded.
pub const LOAD_FAILED_NOTICE: &str = "Cannot load workshop list.";

pub struct RegistrationStore {
    workshops: Vec<Workshop>,
    ledger: RegistrationLedger,
    window: RegistrationWindow,
    zone: DisplayZone,
    confirmer: CancellationConfirmer,
    policy: Arc<dyn CancelPolicy>,
    notice: Option<String>,
}

impl RegistrationStore {
    /// Empty store. Call `load_catalog` once at startup to populate workshops.
    pub fn new(window: RegistrationWindow, zone: DisplayZone, policy: Arc<dyn CancelPolicy>) -> Self {
        Self {
            workshops: Vec::new(),
            ledger: RegistrationLedger::new(),
            window,
            zone,
            confirmer: CancellationConfirmer::new(),
            policy,
            notice: None,
        }
    }

    /// Replace the catalog with the loader's result. On failure the catalog is left empty.
    pub async fn load_catalog(&mut self, loader: &CatalogLoader) -> Result<usize, LoadError> {
        self.workshops.clear();
        match loader.load().await {
            Ok(workshops) => {
                self.workshops = workshops;
                self.notice = None;
                Ok(self.workshops.len())
            }
            Err(e) => {
                error!(error = %e, "failed to load workshops");
                self.notice = Some(LOAD_FAILED_NOTICE.to_string());
                Err(e)
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn set_workshops(&mut self, workshops: Vec<Workshop>) {
        self.workshops = workshops;
    }

    pub fn workshops(&self) -> &[Workshop] {
        &self.workshops
    }

    pub fn find_workshop(&self, id: &str) -> Option<&Workshop> {
        self.workshops.iter().find(|w| w.id == id)
    }

    /// Catalog title for a registration, or its raw workshop id when the workshop is gone.
    pub fn workshop_title<'a>(&'a self, registration: &'a Registration) -> &'a str {
        self.find_workshop(&registration.workshop_id)
            .map(|w| w.title.as_str())
            .unwrap_or(registration.workshop_id.as_str())
    }

    pub fn workshop_status(&self, workshop: &Workshop, now: DateTime<Utc>) -> WorkshopStatus {
        schedule::workshop_status(workshop, now)
    }

    pub fn registrations(&self) -> &[Registration] {
        self.ledger.as_slice()
    }

    pub fn window(&self) -> &RegistrationWindow {
        &self.window
    }

    pub fn zone(&self) -> &DisplayZone {
        &self.zone
    }

    pub fn window_status(&self, now: DateTime<Utc>) -> WindowStatus {
        schedule::window_status(now, &self.window)
    }

    /// Window status rendered in the display zone.
    pub fn window_message(&self, now: DateTime<Utc>) -> String {
        self.zone.window_message(&self.window_status(now))
    }

    /// Last user-facing message, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn register(
        &mut self,
        user_name: &str,
        workshop_id: &str,
        now: DateTime<Utc>,
    ) -> Result<(), RegError> {
        match self.ledger.register(user_name, workshop_id, now, &self.window) {
            Ok(()) => {
                info!(user = user_name.trim(), workshop = workshop_id, "registered");
                self.notice = None;
                Ok(())
            }
            Err(e) => {
                warn!(user = user_name.trim(), workshop = workshop_id, error = ?e, "registration rejected");
                self.notice = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Ask for confirmation before cancelling the registration at `index`.
    pub fn cancel(&mut self, index: usize) -> Result<PendingCancellation, CancelError> {
        let Some(registration) = self.ledger.get(index) else {
            warn!(index, len = self.ledger.len(), "cancel requested for missing registration");
            self.notice = Some(CancelError::NotFound.to_string());
            return Err(CancelError::NotFound);
        };
        let message = format!("Cancel registration for {}?", registration.user_name);
        Ok(self.confirmer.request(index, message))
    }

    pub fn confirm_state(&self) -> &ConfirmState {
        self.confirmer.state()
    }

    pub fn pending_cancellation(&self) -> Option<&PendingCancellation> {
        self.confirmer.pending()
    }

    /// Resolve the pending cancellation. `Ok(None)` when nothing was pending.
    pub fn confirm(&mut self) -> Result<Option<Registration>, RejectReason> {
        let result = self.confirmer.confirm(&mut self.ledger, self.policy.as_ref());
        match &result {
            Ok(Some(_)) => self.notice = None,
            Ok(None) => {}
            Err(reason) => self.notice = Some(reason.to_string()),
        }
        result
    }

    pub fn dismiss(&mut self) {
        self.confirmer.dismiss();
    }
}
