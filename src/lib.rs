// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod error;
pub mod kubernetes;
pub mod pods;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use error::{PodError, Result};
pub use pods::PodClient;
pub use types::{Container, Pod, PodInfo};
