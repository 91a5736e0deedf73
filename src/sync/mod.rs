// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Agent token synchronization to the hub.

pub mod manager;
pub mod reconciler;
pub mod secret;
pub mod token;

pub use manager::{SyncEvent, SyncManager, SyncManagerHandle, Trigger};
pub use reconciler::{error_policy, AgentTokenSynchronizer, SyncOutcome};
pub use secret::{build_cluster_secret, ClusterConfig};
