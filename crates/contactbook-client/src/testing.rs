// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process `ContactApi` double for unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use contactbook_core::{Contact, ContactError, ContactId, NewContact};

use crate::service::{CREATE_FAILED, ContactApi, DELETE_FAILED, FETCH_FAILED};

pub(crate) fn at(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 10, minute, 0).unwrap()
}

pub(crate) fn contact(id: &str, name: &str) -> Contact {
    Contact {
        id: ContactId::from(id),
        name: name.to_string(),
        email: None,
        phone: "555".to_string(),
        message: None,
        created_at: at(0),
    }
}

#[derive(Default)]
pub(crate) struct FakeApi {
    contacts: Mutex<Vec<Contact>>,
    deleted: Mutex<Vec<ContactId>>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl FakeApi {
    pub(crate) fn with(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Mutex::new(contacts),
            ..Default::default()
        }
    }

    pub(crate) fn failing() -> Self {
        let api = Self::default();
        api.fail_all();
        api
    }

    pub(crate) fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub(crate) fn recover(&self) {
        self.failing.store(false, Ordering::SeqCst);
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn deleted(&self) -> Vec<ContactId> {
        self.deleted.lock().unwrap().clone()
    }

    fn check(&self, message: &str) -> Result<(), ContactError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(ContactError::Http {
                message: message.to_string(),
                source: None,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ContactApi for FakeApi {
    async fn list_all(&self) -> Result<Vec<Contact>, ContactError> {
        self.check(FETCH_FAILED)?;
        Ok(self.contacts.lock().unwrap().clone())
    }

    async fn create(&self, contact: &NewContact) -> Result<Contact, ContactError> {
        self.check(CREATE_FAILED)?;
        let created = Contact::from_new(contact.clone());
        self.contacts.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: &ContactId) -> Result<(), ContactError> {
        self.check(DELETE_FAILED)?;
        self.contacts.lock().unwrap().retain(|c| &c.id != id);
        self.deleted.lock().unwrap().push(id.clone());
        Ok(())
    }
}
