//! Application use cases. Orchestrate domain logic via ports.

pub mod catalog_loader;
pub mod confirmer;
pub mod ledger;
pub mod registration_store;

pub use catalog_loader::CatalogLoader;
pub use confirmer::{CancellationConfirmer, ConfirmState};
pub use ledger::RegistrationLedger;
pub use registration_store::RegistrationStore;
