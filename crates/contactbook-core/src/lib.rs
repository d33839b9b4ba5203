// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Contactbook.
//!
//! Holds the contact record types, the [`ContactStore`] trait every
//! persistence backend implements, the field validation rules shared by the
//! form and the API, and the common error type.

pub mod error;
pub mod traits;
pub mod types;
pub mod validation;

pub use error::ContactError;
pub use traits::{ContactStore, PluginAdapter};
pub use types::{Contact, ContactId, HealthStatus, NewContact};
pub use validation::{FieldErrors, is_valid_email, validate_new_contact};
