// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP access to the contact API.

use async_trait::async_trait;
use tracing::debug;

use contactbook_config::model::ClientConfig;
use contactbook_core::{Contact, ContactError, ContactId, NewContact};

pub const FETCH_FAILED: &str = "Failed to fetch contacts";
pub const CREATE_FAILED: &str = "Failed to create contact";
pub const DELETE_FAILED: &str = "Failed to delete contact";

/// Remote contact operations used by the cache, form and list.
#[async_trait]
pub trait ContactApi: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Contact>, ContactError>;

    async fn create(&self, contact: &NewContact) -> Result<Contact, ContactError>;

    async fn delete(&self, id: &ContactId) -> Result<(), ContactError>;
}

/// [`ContactApi`] over HTTP at `{base_url}/api/contacts`.
///
/// Any non-2xx status is an error carrying one fixed message per operation;
/// error bodies are not read.
#[derive(Debug, Clone)]
pub struct HttpContactService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpContactService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_url.as_str())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn contacts_url(&self) -> String {
        format!("{}/api/contacts", self.base_url)
    }

    /// `{base_url}/api/contacts/{id}` with `id` encoded as a single path
    /// segment.
    fn record_url(&self, id: &ContactId) -> Result<reqwest::Url, ContactError> {
        let mut url = reqwest::Url::parse(&self.contacts_url()).map_err(|e| ContactError::Http {
            message: DELETE_FAILED.to_string(),
            source: Some(Box::new(e)),
        })?;
        url.path_segments_mut()
            .map_err(|()| ContactError::Http {
                message: DELETE_FAILED.to_string(),
                source: None,
            })?
            .push(id.as_str());
        Ok(url)
    }

    async fn send(
        request: reqwest::RequestBuilder,
        failure: &'static str,
    ) -> Result<reqwest::Response, ContactError> {
        let response = request.send().await.map_err(|e| ContactError::Http {
            message: failure.to_string(),
            source: Some(Box::new(e)),
        })?;

        let status = response.status();
        debug!(%status, "contact API responded");
        if !status.is_success() {
            return Err(ContactError::Http {
                message: failure.to_string(),
                source: None,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ContactApi for HttpContactService {
    async fn list_all(&self) -> Result<Vec<Contact>, ContactError> {
        let response = Self::send(self.client.get(self.contacts_url()), FETCH_FAILED).await?;
        response.json().await.map_err(|e| ContactError::Http {
            message: FETCH_FAILED.to_string(),
            source: Some(Box::new(e)),
        })
    }

    async fn create(&self, contact: &NewContact) -> Result<Contact, ContactError> {
        let request = self.client.post(self.contacts_url()).json(contact);
        let response = Self::send(request, CREATE_FAILED).await?;
        response.json().await.map_err(|e| ContactError::Http {
            message: CREATE_FAILED.to_string(),
            source: Some(Box::new(e)),
        })
    }

    async fn delete(&self, id: &ContactId) -> Result<(), ContactError> {
        let url = self.record_url(id)?;
        Self::send(self.client.delete(url), DELETE_FAILED).await?;
        Ok(())
    }
}
