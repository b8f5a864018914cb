// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, namespace resolution and local identity.

pub mod client;
pub mod identity;
pub mod namespaces;

pub use client::create_client;
pub use identity::{local_hostname, name_or_hostname};
pub use namespaces::resolve_namespace;
