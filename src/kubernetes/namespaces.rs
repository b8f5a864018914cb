// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace resolution

use crate::error::{PodError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

pub use crate::constants::NAMESPACE_PATH;

/// Resolve the namespace to operate in.
///
/// A non-empty explicit namespace wins. Otherwise the service account
/// namespace file at `path` is read and its contents trimmed.
pub fn resolve_namespace(explicit: Option<&str>, path: &Path) -> Result<String> {
    if let Some(namespace) = explicit.map(str::trim).filter(|ns| !ns.is_empty()) {
        debug!("Using explicit namespace {}", namespace);
        return Ok(namespace.to_string());
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PodError::NamespaceError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let namespace = contents.trim();
    if namespace.is_empty() {
        return Err(PodError::NamespaceError(format!(
            "Namespace file {} is empty",
            path.display()
        )));
    }

    debug!("Resolved namespace {} from {}", namespace, path.display());
    Ok(namespace.to_string())
}
