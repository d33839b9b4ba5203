// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistence trait for contact records.

use async_trait::async_trait;

use crate::error::ContactError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{Contact, ContactId, NewContact};

/// Durable collection of contact records.
///
/// Implementations assign `id` and `created_at` on insert and return records
/// from `list_all` in insertion order. There is no update operation.
#[async_trait]
pub trait ContactStore: PluginAdapter {
    /// Persists a new record and returns it with id and creation time set.
    async fn insert(&self, contact: NewContact) -> Result<Contact, ContactError>;

    /// Returns every record, oldest insert first.
    async fn list_all(&self) -> Result<Vec<Contact>, ContactError>;

    /// Removes a record. Returns whether one was removed.
    async fn delete_by_id(&self, id: &ContactId) -> Result<bool, ContactError>;
}
