// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Namespace file mounted into every pod by the service account admission
pub const NAMESPACE_PATH: &str = "/var/run/secrets/kubernetes.io/serviceaccount/namespace";

/// Pod condition type and status that mark a pod as ready
pub mod conditions {
    pub const READY: &str = "Ready";
    pub const TRUE: &str = "True";
}

/// Conflict retry configuration
pub mod retry {
    /// Total number of attempts before giving up
    pub const STEPS: u32 = 5;
    /// Delay between attempts in milliseconds
    pub const INTERVAL_MILLIS: u64 = 10;
}

/// Default time to wait for a restarted pod to disappear
pub const RESTART_WAIT_TIMEOUT_SECS: u64 = 60;
