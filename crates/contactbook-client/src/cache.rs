// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client-side copy of the contact collection.
//!
//! Loaded once, then mutated locally: created records are prepended and
//! deleted ids removed, without re-fetching from the server.

use tracing::error;

use contactbook_core::{Contact, ContactId};

use crate::service::ContactApi;

pub const LOAD_FAILED: &str = "Failed to load contacts. Make sure the backend is running.";

#[derive(Debug, Clone)]
pub struct ContactsCache {
    contacts: Vec<Contact>,
    loading: bool,
    error: String,
}

impl Default for ContactsCache {
    fn default() -> Self {
        Self {
            contacts: Vec::new(),
            loading: true,
            error: String::new(),
        }
    }
}

impl ContactsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Load error text, empty when the last load succeeded.
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Fetch the full collection. On failure the previous contacts are kept.
    pub async fn load<A: ContactApi + ?Sized>(&mut self, api: &A) {
        self.loading = true;
        match api.list_all().await {
            Ok(contacts) => {
                self.contacts = contacts;
                self.error.clear();
            }
            Err(e) => {
                error!(error = %e, "failed to fetch contacts");
                self.error = LOAD_FAILED.to_string();
            }
        }
        self.loading = false;
    }

    pub fn add_contact(&mut self, contact: Contact) {
        self.contacts.insert(0, contact);
    }

    /// Removes every entry with this id.
    pub fn delete_contact(&mut self, id: &ContactId) {
        self.contacts.retain(|c| &c.id != id);
    }
}
