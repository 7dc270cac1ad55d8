//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;
use crate::usecases::RegistrationStore;

/// Input port: UI drives the registration store until the user quits.
///
/// The store is owned by the composition root and lent for the whole session.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    async fn run(&self, store: &mut RegistrationStore) -> Result<(), DomainError>;
}
