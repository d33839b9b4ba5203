// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact record types shared by the store, the API, and the client.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Store-assigned identifier of a contact record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub String);

impl ContactId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContactId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A persisted contact record.
///
/// Wire shape: `{"_id", "name", "email", "phone", "message", "createdAt"}`.
/// `id` is accepted in place of `_id` when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "_id", alias = "id")]
    pub id: ContactId,
    pub name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub email: Option<String>,
    pub phone: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Builds a record from a create payload, assigning id and creation time.
    pub fn from_new(new: NewContact) -> Self {
        let new = new.normalized();
        Self {
            id: ContactId::generate(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            message: new.message,
            created_at: Utc::now().trunc_subsecs(3),
        }
    }

    /// Email as sorted and displayed: absent email reads as the empty string.
    pub fn email_or_empty(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }
}

/// The create payload `{name, email?, phone, message?}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub message: Option<String>,
}

impl NewContact {
    /// Trims the required fields and drops empty optional ones.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.filter(|e| !e.is_empty()),
            phone: self.phone.trim().to_string(),
            message: self.message.filter(|m| !m.is_empty()),
        }
    }
}

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Degraded(String),
    Unhealthy(String),
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_serializes_with_mongo_style_id() {
        let contact = Contact {
            id: ContactId("abc".into()),
            name: "Ada".into(),
            email: None,
            phone: "555".into(),
            message: Some("hi".into()),
            created_at: "2026-01-01T00:00:00.000Z".parse().unwrap(),
        };
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["_id"], "abc");
        assert_eq!(json["createdAt"], "2026-01-01T00:00:00Z");
        assert!(json["email"].is_null());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn contact_accepts_plain_id_and_empty_strings() {
        let json = r#"{
            "id": "x1",
            "name": "Bob",
            "email": "",
            "phone": "1",
            "message": "",
            "createdAt": "2026-02-03T04:05:06.789Z"
        }"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.id.as_str(), "x1");
        assert!(contact.email.is_none());
        assert!(contact.message.is_none());
        assert_eq!(contact.email_or_empty(), "");
    }

    #[test]
    fn new_contact_tolerates_missing_optional_fields() {
        let new: NewContact = serde_json::from_str(r#"{"name":"A","phone":"1"}"#).unwrap();
        assert_eq!(new.name, "A");
        assert!(new.email.is_none());
        assert!(new.message.is_none());
    }

    #[test]
    fn normalized_trims_required_fields() {
        let new = NewContact {
            name: "  Ada  ".into(),
            email: Some(String::new()),
            phone: " 555 ".into(),
            message: Some(String::new()),
        }
        .normalized();
        assert_eq!(new.name, "Ada");
        assert_eq!(new.phone, "555");
        assert!(new.email.is_none());
        assert!(new.message.is_none());
    }

    #[test]
    fn from_new_assigns_distinct_ids() {
        let a = Contact::from_new(NewContact {
            name: "A".into(),
            phone: "1".into(),
            ..Default::default()
        });
        let b = Contact::from_new(NewContact {
            name: "A".into(),
            phone: "1".into(),
            ..Default::default()
        });
        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at.timestamp_subsec_nanos() % 1_000_000, 0);
    }
}
