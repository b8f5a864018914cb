// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PodError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Namespace resolution failed: {0}")]
    NamespaceError(String),

    #[error("Failed to determine hostname: {0}")]
    HostnameError(String),

    #[error("unable to delete {name}: {source}")]
    RestartError {
        name: String,
        #[source]
        source: Box<PodError>,
    },

    #[error("Pod {0} has no UID, cannot tell when it is gone")]
    MissingUid(String),

    #[error("Waiting for pod failed: {0}")]
    WaitError(#[from] kube::runtime::wait::Error),

    #[error("Timed out after {secs}s waiting for pod {name} to be deleted")]
    Timeout { name: String, secs: u64 },
}

pub type Result<T> = std::result::Result<T, PodError>;
