// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Activation of the agent token sync.

use crate::constants::{schedule, watch};
use crate::error::Result;
use crate::kubernetes::create_hub_client;
use crate::sync::{AgentTokenSynchronizer, SyncManager};
use crate::types::NamespacedName;
use crate::watchers::ServiceAccountWatcher;
use kube::{Client, Config as KConfig};
use std::time::Duration;
use tracing::{error, info};

/// Watches the agent service account and mirrors its token to the hub
pub struct AgentTokenController {
    local: Client,
    synchronizer: AgentTokenSynchronizer,
    watched: NamespacedName,
    resync_interval: Duration,
}

/// Create the agent token controller unless running standalone.
///
/// `local` talks to the managed cluster, `hub_config` to the hub, and `identity`
/// names the managed cluster. Returns `None` in standalone mode.
pub fn add(
    local: Client,
    hub_config: KConfig,
    identity: NamespacedName,
    standalone: bool,
) -> Result<Option<AgentTokenController>> {
    if standalone {
        info!("Running standalone, agent token sync disabled");
        return Ok(None);
    }

    let hub = create_hub_client(hub_config).map_err(|e| {
        error!("Failed to generate client to hub cluster: {}", e);
        e
    })?;

    info!("Adding agent token controller for {}", identity);

    Ok(Some(AgentTokenController {
        local: local.clone(),
        synchronizer: AgentTokenSynchronizer::new(local, hub, identity),
        watched: NamespacedName::new(watch::SERVICE_ACCOUNT_NAME, watch::SERVICE_ACCOUNT_NAMESPACE),
        resync_interval: Duration::from_secs(schedule::RESYNC_INTERVAL_SECS),
    }))
}

impl AgentTokenController {
    /// Trigger on a different service account
    pub fn watching(mut self, watched: NamespacedName) -> Self {
        self.watched = watched;
        self
    }

    pub fn resync_every(mut self, interval: Duration) -> Self {
        self.resync_interval = interval;
        self
    }

    pub fn watched(&self) -> &NamespacedName {
        &self.watched
    }

    /// Run the watcher and the sync manager until either stops
    pub async fn run(self) -> anyhow::Result<()> {
        let (sync_manager, sync_handle) =
            SyncManager::new(self.synchronizer, self.watched.clone(), self.resync_interval);
        let watcher = ServiceAccountWatcher::new(self.local, self.watched, sync_handle);

        tokio::try_join!(sync_manager.run(), watcher.run())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockService;

    fn hub_config() -> KConfig {
        KConfig::new("https://api.hub.example.com:6443".parse().unwrap())
    }

    #[tokio::test]
    async fn test_add_standalone_is_disabled() {
        let local = MockService::new();

        let controller = add(
            local.clone().into_client(),
            hub_config(),
            NamespacedName::new("cluster1", "cluster1-ns"),
            true,
        )
        .unwrap();

        assert!(controller.is_none());
        assert!(local.requests().is_empty());
    }

    #[tokio::test]
    async fn test_add_attached_uses_default_watch() {
        let controller = add(
            MockService::new().into_client(),
            hub_config(),
            NamespacedName::new("cluster1", "cluster1-ns"),
            false,
        )
        .unwrap()
        .unwrap();

        assert_eq!(
            controller.watched(),
            &NamespacedName::new(watch::SERVICE_ACCOUNT_NAME, watch::SERVICE_ACCOUNT_NAMESPACE)
        );
    }

    #[tokio::test]
    async fn test_watching_overrides_default() {
        let controller = add(
            MockService::new().into_client(),
            hub_config(),
            NamespacedName::new("cluster1", "cluster1-ns"),
            false,
        )
        .unwrap()
        .unwrap()
        .watching(NamespacedName::new("other-sa", "other-ns"))
        .resync_every(Duration::from_secs(60));

        assert_eq!(controller.watched(), &NamespacedName::new("other-sa", "other-ns"));
        assert_eq!(controller.resync_interval, Duration::from_secs(60));
    }
}
