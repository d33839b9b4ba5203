// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Contactbook integration tests.
//!
//! - [`MemoryStore`] / [`FailingStore`]: contact stores without SQLite
//! - [`TestServer`]: the real API router served on an ephemeral port

pub mod harness;
pub mod stores;

pub use harness::{TEST_ORIGIN, TestServer};
pub use stores::{FailingStore, MemoryStore};
