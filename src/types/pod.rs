// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::conditions;
use crate::kubernetes::local_hostname;
use k8s_openapi::api::core::v1::Pod as KubePod;
use kube::ResourceExt;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single pod as returned by the API server
#[derive(Clone, Debug)]
pub struct Pod {
    pod: KubePod,
}

/// Name and image of one container in a pod
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Container {
    pub name: String,
    pub image: String,
}

/// Flat summary of a pod
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PodInfo {
    pub node: String,
    pub namespace: String,
    pub hostname: String,
    pub ready: bool,
    pub containers: Vec<Container>,
    pub labels: BTreeMap<String, String>,
}

impl From<KubePod> for Pod {
    fn from(pod: KubePod) -> Self {
        Self::new(pod)
    }
}

impl Pod {
    pub fn new(pod: KubePod) -> Self {
        Self { pod }
    }

    pub fn inner(&self) -> &KubePod {
        &self.pod
    }

    pub fn into_inner(self) -> KubePod {
        self.pod
    }

    /// Check if this pod is ready based on its status conditions
    pub fn ready(&self) -> bool {
        self.pod
            .status
            .as_ref()
            .and_then(|s| s.conditions.as_ref())
            .is_some_and(|conds| {
                conds
                    .iter()
                    .any(|c| c.type_ == conditions::READY && c.status == conditions::TRUE)
            })
    }

    pub fn info(&self) -> PodInfo {
        let spec = self.pod.spec.as_ref();

        let containers = spec
            .map(|s| {
                s.containers
                    .iter()
                    .map(|c| Container {
                        name: c.name.clone(),
                        image: c.image.clone().unwrap_or_default(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        // Objects built from a generateName template have no name yet
        let hostname = self
            .pod
            .metadata
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| local_hostname().unwrap_or_default());

        PodInfo {
            node: spec.and_then(|s| s.node_name.clone()).unwrap_or_default(),
            namespace: self.pod.namespace().unwrap_or_default(),
            hostname,
            ready: self.ready(),
            containers,
            labels: self.pod.labels().clone(),
        }
    }
}
