// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ServiceAccount watcher - notifies the sync manager about the watched service account.

use crate::sync::{SyncEvent, SyncManagerHandle, Trigger};
use crate::types::NamespacedName;
use futures::StreamExt;
use k8s_openapi::api::core::v1::ServiceAccount;
use kube::{Api, Client};
use kube_runtime::{watcher, WatchStreamExt};
use tracing::{debug, info, warn};

/// Predicate selecting the single watched service account
#[derive(Debug, Clone)]
pub struct ServiceAccountFilter {
    watched: NamespacedName,
}

impl ServiceAccountFilter {
    pub fn new(watched: NamespacedName) -> Self {
        Self { watched }
    }

    pub fn matches(&self, sa: &ServiceAccount) -> bool {
        NamespacedName::of(sa).is_some_and(|key| key == self.watched)
    }

    /// Map a watch event to a sync event, `None` if it is not relevant.
    ///
    /// A completed relist always reconciles: an object deleted while the watch
    /// was disconnected produces no `Delete` event.
    pub fn sync_event(&self, event: watcher::Event<ServiceAccount>) -> Option<SyncEvent> {
        let (sa, trigger) = match event {
            watcher::Event::Apply(sa) | watcher::Event::InitApply(sa) => (sa, Trigger::Applied),
            watcher::Event::Delete(sa) => (sa, Trigger::Deleted),
            watcher::Event::InitDone => {
                return Some(SyncEvent::Reconcile {
                    key: self.watched.clone(),
                    trigger: Trigger::Relisted,
                })
            }
            watcher::Event::Init => return None,
        };

        if !self.matches(&sa) {
            return None;
        }

        Some(SyncEvent::Reconcile {
            key: self.watched.clone(),
            trigger,
        })
    }
}

pub struct ServiceAccountWatcher {
    client: Client,
    filter: ServiceAccountFilter,
    sync_handle: SyncManagerHandle,
}

impl ServiceAccountWatcher {
    pub fn new(client: Client, watched: NamespacedName, sync_handle: SyncManagerHandle) -> Self {
        Self {
            client,
            filter: ServiceAccountFilter::new(watched),
            sync_handle,
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let watched = &self.filter.watched;
        let service_accounts: Api<ServiceAccount> =
            Api::namespaced(self.client.clone(), &watched.namespace);
        let config = watcher::Config::default().fields(&format!("metadata.name={}", watched.name));

        info!("Watching service account {}", watched);

        let mut events = watcher(service_accounts, config).default_backoff().boxed();

        while let Some(event) = events.next().await {
            match event {
                Ok(event) => match self.filter.sync_event(event) {
                    Some(sync_event) => self.sync_handle.send(sync_event).await,
                    None => debug!("Ignoring watch event"),
                },
                Err(e) => warn!("Watch error: {}", e),
            }
        }

        warn!("Service account watch for {} ended", watched);
        Ok(())
    }
}
