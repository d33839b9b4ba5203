// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact entry form state.
//!
//! A submission walks `Idle -> Submitting -> Succeeded | Failed`. Validation
//! runs first; an invalid form stays idle with per-field errors and never
//! reaches the API.

use strum::{Display, EnumString};
use tracing::warn;

use contactbook_core::validation::{self, FieldErrors};
use contactbook_core::{Contact, ContactError, NewContact};

use crate::service::ContactApi;

pub const SAVED_MESSAGE: &str = "Contact saved successfully!";
pub const SAVE_FAILED: &str = "Failed to save contact. Please try again.";

/// Editable form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    phone: String,
    message: String,
    errors: FieldErrors,
    submit_error: String,
    success_message: String,
    phase: SubmitPhase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    /// Updates a field, dropping its shown error and the success banner.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => {
                self.name = value;
                self.errors.name = None;
            }
            Field::Email => {
                self.email = value;
                self.errors.email = None;
            }
            Field::Phone => {
                self.phone = value;
                self.errors.phone = None;
            }
            Field::Message => self.message = value,
        }
        self.success_message.clear();
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submit_error(&self) -> &str {
        &self.submit_error
    }

    pub fn success_message(&self) -> &str {
        &self.success_message
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Whether the submit control is enabled for the current values.
    pub fn can_submit(&self) -> bool {
        !validation::is_blank(&self.name)
            && !validation::is_blank(&self.phone)
            && validation::is_valid_email(&self.email)
            && !self.is_submitting()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Sending..."
        } else {
            "Submit"
        }
    }

    /// Recomputes field errors. Replaces any previous submit error.
    pub fn validate(&mut self) -> bool {
        self.errors = validation::validate_fields(&self.name, &self.email, &self.phone);
        self.submit_error.clear();
        self.errors.is_empty()
    }

    fn payload(&self) -> NewContact {
        NewContact {
            name: self.name.clone(),
            email: Some(self.email.clone()).filter(|e| !e.is_empty()),
            phone: self.phone.clone(),
            message: Some(self.message.clone()).filter(|m| !m.is_empty()),
        }
    }

    /// Starts a submission and returns the payload to send.
    ///
    /// Returns `None` when a submission is already in flight or validation
    /// fails; the form is left idle with field errors in the latter case.
    pub fn begin_submit(&mut self) -> Option<NewContact> {
        if self.is_submitting() {
            return None;
        }
        if !self.validate() {
            self.phase = SubmitPhase::Idle;
            return None;
        }
        self.success_message.clear();
        self.phase = SubmitPhase::Submitting;
        Some(self.payload())
    }

    /// Applies the API result of a submission started with [`begin_submit`].
    ///
    /// [`begin_submit`]: ContactForm::begin_submit
    pub fn finish_submit(
        &mut self,
        result: Result<Contact, ContactError>,
        on_added: impl FnOnce(Contact),
    ) {
        match result {
            Ok(created) => {
                self.name.clear();
                self.email.clear();
                self.phone.clear();
                self.message.clear();
                self.success_message = SAVED_MESSAGE.to_string();
                self.phase = SubmitPhase::Succeeded;
                on_added(created);
            }
            Err(e) => {
                warn!(error = %e, "contact submission failed");
                self.submit_error = SAVE_FAILED.to_string();
                self.phase = SubmitPhase::Failed;
            }
        }
    }

    /// Validates and submits through `api`, reporting the created record to
    /// `on_added`.
    pub async fn submit<A: ContactApi + ?Sized>(
        &mut self,
        api: &A,
        on_added: impl FnOnce(Contact),
    ) -> SubmitPhase {
        let Some(payload) = self.begin_submit() else {
            return self.phase;
        };
        let result = api.create(&payload).await;
        self.finish_submit(result, on_added);
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ContactsCache;
    use crate::testing::{FakeApi, contact};
    use contactbook_core::validation::{EMAIL_INVALID, NAME_REQUIRED, PHONE_REQUIRED};

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Ada");
        form.set_field(Field::Email, "ada@example.com");
        form.set_field(Field::Phone, "555-0100");
        form.set_field(Field::Message, "hello");
        form
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("email".parse::<Field>().unwrap(), Field::Email);
        assert_eq!(Field::Message.to_string(), "message");
    }

    #[test]
    fn can_submit_tracks_values() {
        let mut form = ContactForm::new();
        assert!(!form.can_submit());
        form.set_field(Field::Name, "Ada");
        assert!(!form.can_submit());
        form.set_field(Field::Phone, "  ");
        assert!(!form.can_submit());
        form.set_field(Field::Phone, "1");
        assert!(form.can_submit());
        form.set_field(Field::Email, "bad-email");
        assert!(!form.can_submit());
        form.set_field(Field::Email, "");
        assert!(form.can_submit());
    }

    #[tokio::test]
    async fn invalid_form_makes_no_network_call() {
        let api = FakeApi::default();
        let mut form = ContactForm::new();
        form.set_field(Field::Email, "bad-email");

        let phase = form.submit(&api, |_| panic!("nothing created")).await;
        assert_eq!(phase, SubmitPhase::Idle);
        assert_eq!(api.calls(), 0);
        assert_eq!(form.errors().name.as_deref(), Some(NAME_REQUIRED));
        assert_eq!(form.errors().phone.as_deref(), Some(PHONE_REQUIRED));
        assert_eq!(form.errors().email.as_deref(), Some(EMAIL_INVALID));
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = ContactForm::new();
        assert!(!form.validate());
        form.set_field(Field::Name, "A");
        assert!(form.errors().name.is_none());
        assert_eq!(form.errors().phone.as_deref(), Some(PHONE_REQUIRED));
    }

    #[tokio::test]
    async fn success_resets_fields_and_prepends_to_cache() {
        let api = FakeApi::default();
        let mut cache = ContactsCache::new();
        cache.add_contact(contact("old", "Old"));
        let mut form = filled();

        let phase = form.submit(&api, |c| cache.add_contact(c)).await;
        assert_eq!(phase, SubmitPhase::Succeeded);
        assert_eq!(form.success_message(), SAVED_MESSAGE);
        for field in [Field::Name, Field::Email, Field::Phone, Field::Message] {
            assert_eq!(form.value(field), "");
        }
        assert_eq!(cache.contacts().len(), 2);
        assert_eq!(cache.contacts()[0].name, "Ada");
        assert_eq!(cache.contacts()[0].email.as_deref(), Some("ada@example.com"));
    }

    #[tokio::test]
    async fn success_banner_clears_on_next_edit() {
        let api = FakeApi::default();
        let mut form = filled();
        form.submit(&api, |_| {}).await;
        assert_eq!(form.success_message(), SAVED_MESSAGE);
        form.set_field(Field::Name, "B");
        assert_eq!(form.success_message(), "");
    }

    #[tokio::test]
    async fn failure_keeps_fields_and_collection() {
        let api = FakeApi::failing();
        let mut cache = ContactsCache::new();
        let mut form = filled();

        let phase = form.submit(&api, |c| cache.add_contact(c)).await;
        assert_eq!(phase, SubmitPhase::Failed);
        assert_eq!(form.submit_error(), SAVE_FAILED);
        assert_eq!(form.value(Field::Name), "Ada");
        assert_eq!(form.value(Field::Message), "hello");
        assert!(cache.contacts().is_empty());
        assert!(!form.is_submitting());
    }

    #[test]
    fn second_submission_refused_while_in_flight() {
        let mut form = filled();
        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.email.as_deref(), Some("ada@example.com"));
        assert!(form.is_submitting());
        assert!(!form.can_submit());
        assert_eq!(form.submit_label(), "Sending...");
        assert!(form.begin_submit().is_none());

        form.finish_submit(Err(ContactError::Internal("down".into())), |_| {});
        assert_eq!(form.submit_label(), "Submit");
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn empty_optional_fields_are_omitted_from_payload() {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Bob");
        form.set_field(Field::Phone, "1");
        let payload = form.begin_submit().unwrap();
        assert!(payload.email.is_none());
        assert!(payload.message.is_none());
    }
}
