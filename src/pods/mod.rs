// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod lookup and restart.

pub mod client;
pub mod retry;

pub use client::PodClient;
pub use retry::{is_conflict, retry_on_conflict, RetryPolicy};
