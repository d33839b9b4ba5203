// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client side of Contactbook.
//!
//! [`HttpContactService`] talks to the contact API; [`ContactsCache`],
//! [`ContactForm`] and [`ContactList`] hold the state a front end renders.

pub mod cache;
pub mod form;
pub mod list;
pub mod service;

#[cfg(test)]
pub(crate) mod testing;

pub use cache::ContactsCache;
pub use form::{ContactForm, Field, SubmitPhase};
pub use list::{ContactList, ContactRow, ListView, Prompt, SortOrder};
pub use service::{ContactApi, HttpContactService};
