// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact list view state: sort selection, sorted projection, and delete
//! confirmation with a single pending-delete slot.

use std::cmp::Ordering;

use chrono::{DateTime, Local, Utc};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::warn;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use contactbook_core::{Contact, ContactError, ContactId};

use crate::service::ContactApi;

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this contact?";
pub const DELETE_FAILED_ALERT: &str = "Failed to delete contact. Please try again.";
pub const EMPTY_STATE: &str = "No contacts yet. Add one above!";

/// Sort selection. Parses from and prints as the select keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
pub enum SortOrder {
    #[default]
    #[strum(serialize = "default")]
    Default,
    #[strum(serialize = "newest")]
    Newest,
    #[strum(serialize = "oldest")]
    Oldest,
    #[strum(serialize = "name-asc")]
    NameAsc,
    #[strum(serialize = "name-desc")]
    NameDesc,
    #[strum(serialize = "email-asc")]
    EmailAsc,
}

impl SortOrder {
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Default => "No Sorting",
            SortOrder::Newest => "Newest First",
            SortOrder::Oldest => "Oldest First",
            SortOrder::NameAsc => "Name (A-Z)",
            SortOrder::NameDesc => "Name (Z-A)",
            SortOrder::EmailAsc => "Email (A-Z)",
        }
    }

    /// `(key, label)` pairs in menu order.
    pub fn options() -> Vec<(String, &'static str)> {
        SortOrder::iter().map(|o| (o.to_string(), o.label())).collect()
    }
}

/// Natural-language string order, in tiers: base letters ignoring accents
/// and case, then accents (unaccented first), then lowercase before
/// uppercase, then code point.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| with_accents(a).cmp(with_accents(b)))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn with_accents(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_order(a: &str, b: &str) -> Ordering {
    a.chars()
        .zip(b.chars())
        .find(|(x, y)| x != y)
        .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        })
        .unwrap_or(Ordering::Equal)
}

/// Sorted view of `contacts`. Stable; the input is not reordered.
pub fn sort_contacts(contacts: &[Contact], order: SortOrder) -> Vec<&Contact> {
    let mut sorted: Vec<&Contact> = contacts.iter().collect();
    match order {
        SortOrder::Default => {}
        SortOrder::Newest => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => sorted.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::NameAsc => sorted.sort_by(|a, b| locale_compare(&a.name, &b.name)),
        SortOrder::NameDesc => sorted.sort_by(|a, b| locale_compare(&b.name, &a.name)),
        SortOrder::EmailAsc => {
            sorted.sort_by(|a, b| locale_compare(a.email_or_empty(), b.email_or_empty()))
        }
    }
    sorted
}

/// `2026-03-01 10:05` in local time.
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Confirmation and alert surface used by delete.
pub trait Prompt {
    fn confirm(&mut self, message: &str) -> bool;

    fn alert(&mut self, message: &str);
}

/// One presentational row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created: String,
    pub delete_label: &'static str,
    pub delete_disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Empty,
    Populated { count: usize, rows: Vec<ContactRow> },
}

#[derive(Debug, Clone, Default)]
pub struct ContactList {
    sort: SortOrder,
    deleting_id: Option<ContactId>,
}

impl ContactList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    pub fn set_sort(&mut self, order: SortOrder) {
        self.sort = order;
    }

    pub fn sorted<'a>(&self, contacts: &'a [Contact]) -> Vec<&'a Contact> {
        sort_contacts(contacts, self.sort)
    }

    pub fn deleting_id(&self) -> Option<&ContactId> {
        self.deleting_id.as_ref()
    }

    pub fn is_deleting(&self, id: &ContactId) -> bool {
        self.deleting_id.as_ref() == Some(id)
    }

    pub fn render_rows(&self, contacts: &[Contact]) -> Vec<ContactRow> {
        self.sorted(contacts)
            .into_iter()
            .map(|c| {
                let deleting = self.is_deleting(&c.id);
                ContactRow {
                    id: c.id.clone(),
                    name: c.name.clone(),
                    email: c.email.clone().unwrap_or_else(|| "-".to_string()),
                    phone: c.phone.clone(),
                    message: c.message.clone().unwrap_or_else(|| "-".to_string()),
                    created: format_date(&c.created_at),
                    delete_label: if deleting { "Deleting..." } else { "Delete" },
                    delete_disabled: deleting,
                }
            })
            .collect()
    }

    pub fn view(&self, contacts: &[Contact]) -> ListView {
        if contacts.is_empty() {
            ListView::Empty
        } else {
            ListView::Populated {
                count: contacts.len(),
                rows: self.render_rows(contacts),
            }
        }
    }

    /// Asks for confirmation and claims the pending-delete slot.
    ///
    /// Returns `false` when the user declines.
    pub fn begin_delete<P: Prompt + ?Sized>(&mut self, id: &ContactId, prompt: &mut P) -> bool {
        if !prompt.confirm(CONFIRM_DELETE) {
            return false;
        }
        self.deleting_id = Some(id.clone());
        true
    }

    /// Applies the API result and frees the pending-delete slot.
    pub fn finish_delete<P: Prompt + ?Sized>(
        &mut self,
        id: &ContactId,
        result: Result<(), ContactError>,
        prompt: &mut P,
        on_deleted: impl FnOnce(&ContactId),
    ) {
        match result {
            Ok(()) => on_deleted(id),
            Err(e) => {
                warn!(error = %e, %id, "contact delete failed");
                prompt.alert(DELETE_FAILED_ALERT);
            }
        }
        self.deleting_id = None;
    }

    /// Confirm, delete through `api`, then report the removed id.
    pub async fn delete<A, P>(
        &mut self,
        id: &ContactId,
        api: &A,
        prompt: &mut P,
        on_deleted: impl FnOnce(&ContactId),
    ) where
        A: ContactApi + ?Sized,
        P: Prompt + ?Sized,
    {
        if !self.begin_delete(id, prompt) {
            return;
        }
        let result = api.delete(id).await;
        self.finish_delete(id, result, prompt, on_deleted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ContactsCache;
    use crate::testing::{FakeApi, at, contact};

    #[derive(Default)]
    struct ScriptedPrompt {
        answer: bool,
        confirms: Vec<String>,
        alerts: Vec<String>,
    }

    impl ScriptedPrompt {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                ..Default::default()
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn confirm(&mut self, message: &str) -> bool {
            self.confirms.push(message.to_string());
            self.answer
        }

        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }
    }

    fn named(names: &[&str]) -> Vec<Contact> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| contact(&i.to_string(), n))
            .collect()
    }

    fn names<'a>(contacts: &[&'a Contact]) -> Vec<&'a str> {
        contacts.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn sort_keys_round_trip() {
        for key in ["default", "newest", "oldest", "name-asc", "name-desc", "email-asc"] {
            let order: SortOrder = key.parse().unwrap();
            assert_eq!(order.to_string(), key);
        }
        assert!("by-phone".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::default(), SortOrder::Default);
        assert_eq!(SortOrder::options()[0], ("default".to_string(), "No Sorting"));
    }

    #[test]
    fn locale_compare_orders_case_insensitively() {
        assert_eq!(locale_compare("alice", "Bob"), Ordering::Less);
        assert_eq!(locale_compare("Bob", "Carol"), Ordering::Less);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("abc", "abc"), Ordering::Equal);
        assert_eq!(locale_compare("", "a"), Ordering::Less);
    }

    #[test]
    fn accented_letters_sort_with_their_base_letter() {
        assert_eq!(locale_compare("Émile", "Zoe"), Ordering::Less);
        assert_eq!(locale_compare("Ärger", "Bach"), Ordering::Less);
        assert_eq!(locale_compare("emile", "émile"), Ordering::Less);
        assert_eq!(locale_compare("Emile", "émile"), Ordering::Less);

        let contacts = named(&["Zoe", "Émile", "adam"]);
        assert_eq!(
            names(&sort_contacts(&contacts, SortOrder::NameAsc)),
            ["adam", "Émile", "Zoe"]
        );
        assert_eq!(
            names(&sort_contacts(&contacts, SortOrder::NameDesc)),
            ["Zoe", "Émile", "adam"]
        );
    }

    #[test]
    fn name_sorts_are_locale_aware_and_reversed() {
        let contacts = named(&["Bob", "alice", "Carol"]);
        assert_eq!(
            names(&sort_contacts(&contacts, SortOrder::NameAsc)),
            ["alice", "Bob", "Carol"]
        );
        assert_eq!(
            names(&sort_contacts(&contacts, SortOrder::NameDesc)),
            ["Carol", "Bob", "alice"]
        );
    }

    #[test]
    fn default_keeps_input_order_and_does_not_mutate() {
        let contacts = named(&["Bob", "alice", "Carol"]);
        assert_eq!(
            names(&sort_contacts(&contacts, SortOrder::Default)),
            ["Bob", "alice", "Carol"]
        );
        let _ = sort_contacts(&contacts, SortOrder::NameAsc);
        assert_eq!(contacts[0].name, "Bob");
    }

    #[test]
    fn newest_is_reverse_of_oldest() {
        let mut contacts = named(&["a", "b", "c", "d"]);
        for (c, minute) in contacts.iter_mut().zip([7, 1, 30, 12]) {
            c.created_at = at(minute);
        }
        let newest = names(&sort_contacts(&contacts, SortOrder::Newest));
        let mut oldest = names(&sort_contacts(&contacts, SortOrder::Oldest));
        assert_eq!(newest, ["c", "d", "a", "b"]);
        oldest.reverse();
        assert_eq!(newest, oldest);
    }

    #[test]
    fn email_sort_treats_missing_as_empty() {
        let mut contacts = named(&["x", "y", "z"]);
        contacts[0].email = Some("zed@example.com".into());
        contacts[2].email = Some("Amy@example.com".into());
        assert_eq!(
            names(&sort_contacts(&contacts, SortOrder::EmailAsc)),
            ["y", "z", "x"]
        );
    }

    #[test]
    fn empty_collection_renders_empty_state() {
        let list = ContactList::new();
        assert_eq!(list.view(&[]), ListView::Empty);
    }

    #[test]
    fn rows_show_dash_for_missing_optional_fields() {
        let mut list = ContactList::new();
        list.set_sort(SortOrder::NameAsc);
        let mut contacts = named(&["Bob", "alice"]);
        contacts[0].message = Some("hi".into());

        let ListView::Populated { count, rows } = list.view(&contacts) else {
            panic!("expected rows");
        };
        assert_eq!(count, 2);
        assert_eq!(rows[0].name, "alice");
        assert_eq!(rows[0].email, "-");
        assert_eq!(rows[0].message, "-");
        assert_eq!(rows[1].message, "hi");
        assert_eq!(rows[1].delete_label, "Delete");
        assert!(!rows[1].delete_disabled);
    }

    #[tokio::test]
    async fn declined_confirmation_does_nothing() {
        let api = FakeApi::with(named(&["a"]));
        let mut prompt = ScriptedPrompt::answering(false);
        let mut list = ContactList::new();

        list.delete(&ContactId::from("0"), &api, &mut prompt, |_| {
            panic!("nothing deleted")
        })
        .await;
        assert_eq!(prompt.confirms, [CONFIRM_DELETE]);
        assert_eq!(api.calls(), 0);
        assert!(list.deleting_id().is_none());
    }

    #[tokio::test]
    async fn confirmed_delete_removes_from_cache() {
        let api = FakeApi::with(named(&["a", "b"]));
        let mut cache = ContactsCache::new();
        cache.load(&api).await;
        let mut prompt = ScriptedPrompt::answering(true);
        let mut list = ContactList::new();

        let id = ContactId::from("0");
        list.delete(&id, &api, &mut prompt, |id| cache.delete_contact(id))
            .await;
        assert_eq!(api.deleted(), [id]);
        assert_eq!(cache.contacts().len(), 1);
        assert!(prompt.alerts.is_empty());
        assert!(list.deleting_id().is_none());
    }

    #[tokio::test]
    async fn failed_delete_alerts_and_keeps_cache() {
        let api = FakeApi::with(named(&["a"]));
        let mut cache = ContactsCache::new();
        cache.load(&api).await;
        api.fail_all();
        let mut prompt = ScriptedPrompt::answering(true);
        let mut list = ContactList::new();

        list.delete(&ContactId::from("0"), &api, &mut prompt, |id| {
            cache.delete_contact(id)
        })
        .await;
        assert_eq!(prompt.alerts, [DELETE_FAILED_ALERT]);
        assert_eq!(cache.contacts().len(), 1);
        assert!(list.deleting_id().is_none());
    }

    #[test]
    fn pending_delete_marks_only_that_row() {
        let contacts = named(&["a", "b"]);
        let mut prompt = ScriptedPrompt::answering(true);
        let mut list = ContactList::new();
        let id = ContactId::from("1");

        assert!(list.begin_delete(&id, &mut prompt));
        assert!(list.is_deleting(&id));
        let rows = list.render_rows(&contacts);
        assert_eq!(rows[0].delete_label, "Delete");
        assert_eq!(rows[1].delete_label, "Deleting...");
        assert!(rows[1].delete_disabled);

        list.finish_delete(&id, Ok(()), &mut prompt, |_| {});
        assert!(!list.is_deleting(&id));
    }
}
