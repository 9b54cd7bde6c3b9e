//! src/store/memory.rs
use crate::domain::Email;
use crate::store::{StoreError, WaitlistStore};
use std::collections::HashSet;
use std::sync::Mutex;

/// In-process waitlist with the same uniqueness contract as [`PgStore`].
///
/// Backs the test suites and credential-free local runs.
///
/// [`PgStore`]: crate::store::PgStore
#[derive(Default)]
pub struct MemoryStore {
    emails: Mutex<HashSet<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, email: &str) -> bool {
        self.emails.lock().unwrap().contains(email)
    }

    pub fn len(&self) -> usize {
        self.emails.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl WaitlistStore for MemoryStore {
    async fn insert(&self, email: &Email) -> Result<(), StoreError> {
        let mut emails = self.emails.lock().unwrap();
        if emails.insert(email.as_ref().to_owned()) {
            Ok(())
        } else {
            Err(StoreError::Duplicate)
        }
    }
}
