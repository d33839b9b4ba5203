// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the contact API.
//!
//! One request maps to one store operation; nothing is cached here.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use contactbook_core::{
    Contact, ContactError, ContactId, HealthStatus, NewContact, validate_new_contact,
};

use crate::error::{ApiError, MessageBody};
use crate::server::GatewayState;

pub const LIVENESS_TEXT: &str = "Contact API is running";
pub const DELETED_MESSAGE: &str = "Contact deleted successfully";

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// GET /
pub async fn get_root() -> &'static str {
    LIVENESS_TEXT
}

/// GET /health
///
/// 200 when the store answers its health check, 503 otherwise.
pub async fn get_health(State(state): State<GatewayState>) -> impl IntoResponse {
    let (code, status) = match state.store.health_check().await {
        Ok(HealthStatus::Healthy) => (StatusCode::OK, "ok".to_string()),
        Ok(HealthStatus::Degraded(reason)) => (StatusCode::OK, format!("degraded: {reason}")),
        Ok(HealthStatus::Unhealthy(reason)) => {
            (StatusCode::SERVICE_UNAVAILABLE, format!("unhealthy: {reason}"))
        }
        Err(e) => (StatusCode::SERVICE_UNAVAILABLE, format!("unhealthy: {e}")),
    };
    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_secs: state.started_at.elapsed().as_secs(),
        }),
    )
}

/// GET /api/contacts
pub async fn list_contacts(
    State(state): State<GatewayState>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = state.store.list_all().await?;
    Ok(Json(contacts))
}

/// POST /api/contacts
///
/// 201 with the created record; 400 `{message}` when name or phone is blank
/// or a non-empty email does not look like an address.
pub async fn create_contact(
    State(state): State<GatewayState>,
    body: Result<Json<NewContact>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let Json(new) = body?;
    validate_new_contact(&new).map_err(ContactError::Validation)?;
    let created = state.store.insert(new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// DELETE /api/contacts/{id}
pub async fn delete_contact(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    let id = ContactId(id);
    if state.store.delete_by_id(&id).await? {
        Ok(Json(MessageBody::new(DELETED_MESSAGE)))
    } else {
        Err(ContactError::NotFound { id: id.0 }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_serializes() {
        let resp = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
            uptime_secs: 42,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"uptime_secs\":42"));
    }

    #[tokio::test]
    async fn root_is_plain_liveness_text() {
        assert_eq!(get_root().await, LIVENESS_TEXT);
    }
}
