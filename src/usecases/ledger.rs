//! Registration ledger. Ordered, duplicate-free list of (user, workshop) pairs.
//!
//! Insertion order is the list position and the index used for cancellation.

use crate::domain::schedule::is_open;
use crate::domain::{RegError, Registration, RegistrationWindow};
use chrono::{DateTime, Utc};

#[derive(Debug, Default)]
pub struct RegistrationLedger {
    entries: Vec<Registration>,
}

impl RegistrationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a registration.
    ///
    /// Checks run in order and the first failure wins: window open, name present
    /// (after trimming), workshop selected, no identical pair already registered.
    pub fn register(
        &mut self,
        user_name: &str,
        workshop_id: &str,
        now: DateTime<Utc>,
        window: &RegistrationWindow,
    ) -> Result<(), RegError> {
        if !is_open(now, window) {
            return Err(RegError::WindowClosed);
        }
        let user_name = user_name.trim();
        if user_name.is_empty() {
            return Err(RegError::MissingName);
        }
        if workshop_id.is_empty() {
            return Err(RegError::MissingWorkshop);
        }
        if self.contains(user_name, workshop_id) {
            return Err(RegError::Duplicate);
        }
        self.entries.push(Registration {
            user_name: user_name.to_string(),
            workshop_id: workshop_id.to_string(),
        });
        Ok(())
    }

    pub fn contains(&self, user_name: &str, workshop_id: &str) -> bool {
        self.entries
            .iter()
            .any(|r| r.user_name == user_name && r.workshop_id == workshop_id)
    }

    pub fn get(&self, index: usize) -> Option<&Registration> {
        self.entries.get(index)
    }

    /// Remove the entry at `index`; later entries shift down by one.
    pub fn remove(&mut self, index: usize) -> Option<Registration> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Registration> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Registration] {
        &self.entries
    }
}
