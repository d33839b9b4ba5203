// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapping from `ContactError` to HTTP responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use contactbook_core::ContactError;

pub const NOT_FOUND_MESSAGE: &str = "Contact not found";
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// `{message}` body used for every error and for delete confirmations.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error returned from handlers.
#[derive(Debug)]
pub enum ApiError {
    Contact(ContactError),
    BadBody(JsonRejection),
}

impl From<ContactError> for ApiError {
    fn from(err: ContactError) -> Self {
        Self::Contact(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadBody(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadBody(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            ApiError::Contact(ContactError::Validation(errors)) => {
                (StatusCode::BAD_REQUEST, errors.to_string())
            }
            ApiError::Contact(ContactError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string())
            }
            ApiError::Contact(err) => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        };
        (status, Json(MessageBody::new(message))).into_response()
    }
}
