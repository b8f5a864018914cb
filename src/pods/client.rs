// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespaced pod client: fetch a pod, restart it by deleting it.

use crate::config::Config;
use crate::error::{PodError, Result};
use crate::kubernetes::{create_client, name_or_hostname, resolve_namespace};
use crate::pods::retry::{retry_on_conflict, RetryPolicy};
use crate::types::Pod;
use k8s_openapi::api::core::v1::Pod as KubePod;
use kube::{
    api::DeleteParams,
    runtime::wait::{await_condition, conditions},
    Api, Client, ResourceExt,
};
use std::time::Duration;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct PodClient {
    client: Client,
    namespace: String,
    retry: RetryPolicy,
}

impl PodClient {
    pub fn new(client: Client, namespace: impl Into<String>) -> Self {
        Self {
            client,
            namespace: namespace.into(),
            retry: RetryPolicy::default(),
        }
    }

    /// Create a client with standard credential discovery and resolve the
    /// namespace from configuration.
    pub async fn try_from_config(config: &Config) -> Result<Self> {
        let namespace = resolve_namespace(config.namespace.as_deref(), &config.namespace_file)?;
        let client = create_client().await?;
        info!("Connected to Kubernetes cluster, namespace {}", namespace);
        Ok(Self::new(client, namespace))
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn api(&self) -> Api<KubePod> {
        Api::namespaced(self.client.clone(), &self.namespace)
    }

    /// Get a pod by name. Without a name the local hostname is used.
    #[instrument(skip(self), fields(namespace = %self.namespace))]
    pub async fn pod(&self, name: Option<&str>) -> Result<Pod> {
        let name = name_or_hostname(name)?;
        debug!("Getting pod {}/{}", self.namespace, name);

        let pod = self.api().get(&name).await?;
        Ok(Pod::new(pod))
    }

    /// Delete a pod so its controller recreates it.
    pub async fn restart_pod(&self, name: Option<&str>) -> Result<()> {
        self.delete_pod(name).await.map(|_| ())
    }

    /// Delete a pod and wait until the deleted instance is gone.
    ///
    /// Pods owned by a StatefulSet come back under the same name, so the
    /// wait keys on the UID of the deleted pod rather than its name.
    #[instrument(skip(self), fields(namespace = %self.namespace))]
    pub async fn restart_pod_and_wait(&self, name: Option<&str>, timeout: Duration) -> Result<()> {
        let deleted = self.delete_pod(name).await?;
        let name = deleted.name_any();
        // is_deleted("") matches every live pod
        let uid = deleted
            .uid()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| PodError::MissingUid(name.clone()))?;

        info!("Waiting up to {:?} for pod {} ({}) to go away", timeout, name, uid);

        let gone = await_condition(self.api(), &name, conditions::is_deleted(&uid));
        match tokio::time::timeout(timeout, gone).await {
            Ok(res) => {
                res?;
                info!("Pod {}/{} deleted", self.namespace, name);
                Ok(())
            }
            Err(_) => Err(PodError::Timeout {
                name,
                secs: timeout.as_secs(),
            }),
        }
    }

    /// Fetch then delete a pod, retrying on conflict. Returns the pod as it
    /// was just before deletion.
    #[instrument(skip(self), fields(namespace = %self.namespace))]
    async fn delete_pod(&self, name: Option<&str>) -> Result<KubePod> {
        let requested = name_or_hostname(name)?;
        let api = &self.api();
        let target = requested.as_str();

        let result = retry_on_conflict(&self.retry, move || async move {
            let pod = self.pod(Some(target)).await?.into_inner();
            api.delete(&pod.name_any(), &DeleteParams::default()).await?;
            Ok(pod)
        })
        .await;

        match result {
            Ok(pod) => {
                info!(
                    "Pod {}/{} deleted and will be recreated by its controller",
                    self.namespace, requested
                );
                Ok(pod)
            }
            Err(e) => Err(PodError::RestartError {
                name: requested,
                source: Box::new(e),
            }),
        }
    }
}
