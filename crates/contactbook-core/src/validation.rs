// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field validation shared by the form and the API.
//!
//! The email pattern is intentionally permissive: `local@domain.tld` with no
//! whitespace and no extra `@`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::types::NewContact;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const NAME_REQUIRED: &str = "Name is required";
pub const PHONE_REQUIRED: &str = "Phone is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email";

/// Per-field validation messages. `None` means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }

    /// Messages in form order: name, email, phone.
    pub fn messages(&self) -> Vec<&str> {
        [&self.name, &self.email, &self.phone]
            .into_iter()
            .filter_map(|m| m.as_deref())
            .collect()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

/// Empty email is valid; anything else must match the pattern.
pub fn is_valid_email(email: &str) -> bool {
    email.is_empty() || EMAIL_PATTERN.is_match(email)
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates raw field values the way the form does on submit.
pub fn validate_fields(name: &str, email: &str, phone: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if is_blank(name) {
        errors.name = Some(NAME_REQUIRED.to_string());
    }
    if is_blank(phone) {
        errors.phone = Some(PHONE_REQUIRED.to_string());
    }
    if !is_valid_email(email) {
        errors.email = Some(EMAIL_INVALID.to_string());
    }
    errors
}

/// Validates a create payload. Returns every failing field, not just the first.
pub fn validate_new_contact(contact: &NewContact) -> Result<(), FieldErrors> {
    let errors = validate_fields(
        &contact.name,
        contact.email.as_deref().unwrap_or(""),
        &contact.phone,
    );
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
