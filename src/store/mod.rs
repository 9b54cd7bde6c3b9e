//! src/store/mod.rs
mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::domain::Email;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// The store's uniqueness-violation signal: the email is already on the
    /// waitlist. Callers treat this as a success, not a failure.
    #[error("The email is already on the waitlist")]
    Duplicate,
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// Insert-only handle to the waitlist collection, keyed uniquely by email.
///
/// Passed in explicitly (rather than bound as a process-global client) so the
/// submission workflow can be exercised against a substitutable
/// implementation.
#[async_trait::async_trait]
pub trait WaitlistStore: Send + Sync {
    async fn insert(&self, email: &Email) -> Result<(), StoreError>;
}
