// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Retry of operations rejected with a 409 Conflict

use crate::constants::retry::{INTERVAL_MILLIS, STEPS};
use crate::error::{PodError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first
    pub steps: u32,
    pub interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            steps: STEPS,
            interval: Duration::from_millis(INTERVAL_MILLIS),
        }
    }
}

/// Check if an error is a Kubernetes 409 Conflict
pub fn is_conflict(err: &PodError) -> bool {
    match err {
        PodError::KubeError(kube::Error::Api(resp)) => resp.code == 409,
        _ => false,
    }
}

/// Run `op` until it succeeds, fails with a non-conflict error, or the
/// policy runs out of attempts. The last conflict error is returned on
/// exhaustion.
pub async fn retry_on_conflict<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let steps = policy.steps.max(1);
    let mut attempt = 1;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if is_conflict(&e) && attempt < steps => {
                warn!(
                    "Conflict on attempt {}/{}: {}, retrying in {:?}",
                    attempt, steps, e, policy.interval
                );
            }
            Err(e) => {
                debug!("Giving up after {} attempt(s)", attempt);
                return Err(e);
            }
        }

        sleep(policy.interval).await;
        attempt += 1;
    }
}
