// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions.
//!
//! Backends implement [`PluginAdapter`] plus their capability trait and use
//! `#[async_trait]` so they can sit behind `Arc<dyn ...>`.

pub mod adapter;
pub mod store;

pub use adapter::PluginAdapter;
pub use store::ContactStore;
