// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP API for Contactbook.
//!
//! Stateless handlers over an `Arc<dyn ContactStore>`: list, create, and
//! delete contacts, plus liveness and health endpoints.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::{ApiError, MessageBody};
pub use server::{GatewayState, bind, cors_layer, router, serve, start_server};
