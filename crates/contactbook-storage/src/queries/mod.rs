// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed query functions. Each accepts `&Database` and runs through its
//! single connection.

pub mod contacts;
