// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the ContactStore trait.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use contactbook_config::model::StorageConfig;
use contactbook_core::{
    Contact, ContactError, ContactId, ContactStore, HealthStatus, NewContact, PluginAdapter,
};

use crate::database::{Database, map_tr_err};
use crate::queries;

/// SQLite-backed contact store.
///
/// The database is not opened until [`SqliteStorage::initialize`] is called;
/// every operation before that fails with a storage error.
pub struct SqliteStorage {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteStorage {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Open the database, apply PRAGMAs, and run migrations.
    pub async fn initialize(&self) -> Result<(), ContactError> {
        let db = Database::open(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| ContactError::Storage {
            source: "storage already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite contact store initialized");
        Ok(())
    }

    /// Checkpoint the WAL before the process exits.
    pub async fn close(&self) -> Result<(), ContactError> {
        self.db()?.checkpoint().await?;
        debug!("WAL checkpoint complete");
        Ok(())
    }

    fn db(&self) -> Result<&Database, ContactError> {
        self.db.get().ok_or_else(|| ContactError::Storage {
            source: "storage not initialized -- call initialize() first".into(),
        })
    }
}

#[async_trait]
impl PluginAdapter for SqliteStorage {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    async fn health_check(&self) -> Result<HealthStatus, ContactError> {
        self.db()?
            .connection()
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), ContactError> {
        if self.db.get().is_some() {
            self.close().await?;
        }
        Ok(())
    }
}

#[async_trait]
impl ContactStore for SqliteStorage {
    async fn insert(&self, contact: NewContact) -> Result<Contact, ContactError> {
        let contact = Contact::from_new(contact);
        queries::contacts::insert_contact(self.db()?, &contact).await?;
        info!(id = %contact.id, "contact created");
        Ok(contact)
    }

    async fn list_all(&self) -> Result<Vec<Contact>, ContactError> {
        queries::contacts::list_contacts(self.db()?).await
    }

    async fn delete_by_id(&self, id: &ContactId) -> Result<bool, ContactError> {
        let removed = queries::contacts::delete_contact(self.db()?, id).await?;
        if removed {
            info!(%id, "contact deleted");
        }
        Ok(removed)
    }
}
