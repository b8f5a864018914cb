// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{NAMESPACE_PATH, RESTART_WAIT_TIMEOUT_SECS};
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Explicit namespace; when unset the service account namespace file is read
    pub namespace: Option<String>,
    pub namespace_file: PathBuf,
    pub restart_wait_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            namespace: None,
            namespace_file: PathBuf::from(NAMESPACE_PATH),
            restart_wait_timeout_secs: RESTART_WAIT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        let restart_wait_timeout_secs = match non_empty("RESTART_WAIT_TIMEOUT_SECS") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("RESTART_WAIT_TIMEOUT_SECS is not a number: {}", v))?,
            None => defaults.restart_wait_timeout_secs,
        };

        Ok(Config {
            namespace: non_empty("POD_NAMESPACE"),
            namespace_file: non_empty("NAMESPACE_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.namespace_file),
            restart_wait_timeout_secs,
        })
    }
}
