// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Local hostname lookup. Inside a pod the hostname is the pod name.

use crate::error::{PodError, Result};

pub fn local_hostname() -> Result<String> {
    hostname::get()
        .map_err(|e| PodError::HostnameError(e.to_string()))?
        .into_string()
        .map_err(|raw| PodError::HostnameError(format!("not valid UTF-8: {:?}", raw)))
}

/// The given pod name, or the local hostname when none is given
pub fn name_or_hostname(name: Option<&str>) -> Result<String> {
    match name.filter(|n| !n.is_empty()) {
        Some(n) => Ok(n.to_string()),
        None => local_hostname(),
    }
}
