// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact CRUD operations.

use contactbook_core::{Contact, ContactError, ContactId};
use rusqlite::{Row, params};

use crate::database::{Database, map_tr_err};

fn row_to_contact(row: &Row<'_>) -> Result<Contact, rusqlite::Error> {
    Ok(Contact {
        id: ContactId(row.get(0)?),
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        message: row.get(4)?,
        created_at: row.get(5)?,
    })
}

/// Insert a fully-formed record.
pub async fn insert_contact(db: &Database, contact: &Contact) -> Result<(), ContactError> {
    let contact = contact.clone();
    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            conn.execute(
                "INSERT INTO contacts (id, name, email, phone, message, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    contact.id.0,
                    contact.name,
                    contact.email,
                    contact.phone,
                    contact.message,
                    contact.created_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// All records in insertion order.
pub async fn list_contacts(db: &Database) -> Result<Vec<Contact>, ContactError> {
    db.connection()
        .call(|conn| -> Result<Vec<Contact>, rusqlite::Error> {
            let mut stmt = conn.prepare(
                "SELECT id, name, email, phone, message, created_at
                 FROM contacts ORDER BY rowid ASC",
            )?;
            let rows = stmt.query_map([], row_to_contact)?;
            rows.collect()
        })
        .await
        .map_err(map_tr_err)
}

/// Delete by id. Returns whether a row was removed.
pub async fn delete_contact(db: &Database, id: &ContactId) -> Result<bool, ContactError> {
    let id = id.0.clone();
    db.connection()
        .call(move |conn| -> Result<bool, rusqlite::Error> {
            let removed = conn.execute("DELETE FROM contacts WHERE id = ?1", params![id])?;
            Ok(removed > 0)
        })
        .await
        .map_err(map_tr_err)
}
