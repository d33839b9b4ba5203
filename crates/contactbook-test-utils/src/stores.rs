// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory contact stores for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use contactbook_core::{
    Contact, ContactError, ContactId, ContactStore, HealthStatus, NewContact, PluginAdapter,
};

/// Contact store backed by a `Vec`, insertion ordered.
///
/// Counts calls so tests can assert that no store operation happened.
#[derive(Default)]
pub struct MemoryStore {
    contacts: Mutex<Vec<Contact>>,
    calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with existing records.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Mutex::new(contacts),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of store operations served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn snapshot(&self) -> Vec<Contact> {
        self.contacts.lock().await.clone()
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl PluginAdapter for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    async fn health_check(&self) -> Result<HealthStatus, ContactError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), ContactError> {
        Ok(())
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn insert(&self, contact: NewContact) -> Result<Contact, ContactError> {
        self.record_call();
        let contact = Contact::from_new(contact);
        self.contacts.lock().await.push(contact.clone());
        Ok(contact)
    }

    async fn list_all(&self) -> Result<Vec<Contact>, ContactError> {
        self.record_call();
        Ok(self.contacts.lock().await.clone())
    }

    async fn delete_by_id(&self, id: &ContactId) -> Result<bool, ContactError> {
        self.record_call();
        let mut contacts = self.contacts.lock().await;
        let before = contacts.len();
        contacts.retain(|c| &c.id != id);
        Ok(contacts.len() != before)
    }
}

/// Contact store whose every operation fails with a storage error.
#[derive(Default)]
pub struct FailingStore;

fn unavailable() -> ContactError {
    ContactError::storage(std::io::Error::other("store unavailable"))
}

#[async_trait]
impl PluginAdapter for FailingStore {
    fn name(&self) -> &str {
        "failing"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    async fn health_check(&self) -> Result<HealthStatus, ContactError> {
        Ok(HealthStatus::Unhealthy("store unavailable".to_string()))
    }

    async fn shutdown(&self) -> Result<(), ContactError> {
        Ok(())
    }
}

#[async_trait]
impl ContactStore for FailingStore {
    async fn insert(&self, _contact: NewContact) -> Result<Contact, ContactError> {
        Err(unavailable())
    }

    async fn list_all(&self) -> Result<Vec<Contact>, ContactError> {
        Err(unavailable())
    }

    async fn delete_by_id(&self, _id: &ContactId) -> Result<bool, ContactError> {
        Err(unavailable())
    }
}
