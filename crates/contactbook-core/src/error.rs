// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for Contactbook.

use thiserror::Error;

use crate::validation::FieldErrors;

/// The primary error type shared by the store, the API, and the client.
#[derive(Debug, Error)]
pub enum ContactError {
    /// Configuration errors (invalid values, unusable origins or URLs).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database open, query failure, migration).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A submitted contact failed field validation.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// No contact exists with the requested id.
    #[error("contact not found: {id}")]
    NotFound { id: String },

    /// HTTP transport or non-success status on the client side.
    #[error("http error: {message}")]
    Http {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ContactError {
    /// Wraps any error as a storage failure.
    pub fn storage<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage {
            source: Box::new(source),
        }
    }
}
