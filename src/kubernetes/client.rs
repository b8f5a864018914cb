// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation

use crate::error::{PodError, Result};
use kube::{Client, Config as KConfig};
use tracing::{debug, instrument};

/// Create a Kubernetes client using standard credential discovery.
///
/// Tries `KUBECONFIG`, then `~/.kube/config`, then the in-cluster service
/// account.
#[instrument]
pub async fn create_client() -> Result<Client> {
    let config = KConfig::infer()
        .await
        .map_err(|e| PodError::KubeconfigError(format!("Failed to infer config: {}", e)))?;

    debug!(
        "Using cluster {} (default namespace {})",
        config.cluster_url, config.default_namespace
    );

    Client::try_from(config)
        .map_err(|e| PodError::KubeconfigError(format!("Failed to create client: {}", e)))
}
