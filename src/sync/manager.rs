// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Schedules reconciliations: watch events, periodic resync and fixed-delay retries.

use crate::constants::schedule;
use crate::sync::reconciler::{error_policy, AgentTokenSynchronizer};
use crate::types::NamespacedName;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info, instrument};

/// Why a reconciliation was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The watched service account was created or changed
    Applied,
    /// The watched service account was deleted
    Deleted,
    /// A failed reconciliation is being retried
    Retry,
    /// The watch finished a full relist
    Relisted,
}

/// Events sent to the SyncManager
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    Reconcile { key: NamespacedName, trigger: Trigger },
}

/// Handle to send events to the SyncManager
#[derive(Clone)]
pub struct SyncManagerHandle {
    event_tx: mpsc::Sender<SyncEvent>,
}

impl SyncManagerHandle {
    pub async fn send(&self, event: SyncEvent) {
        if let Err(e) = self.event_tx.send(event).await {
            error!("Failed to send event to SyncManager: {}", e);
        }
    }
}

/// Runs reconciliations one at a time for the watched service account.
pub struct SyncManager {
    synchronizer: AgentTokenSynchronizer,
    watched: NamespacedName,
    resync_interval: Duration,
    event_rx: mpsc::Receiver<SyncEvent>,
    handle: SyncManagerHandle,
    /// At most one retry is pending; a newer reconciliation replaces it
    pending_retry: Option<JoinHandle<()>>,
}

impl SyncManager {
    pub fn new(
        synchronizer: AgentTokenSynchronizer,
        watched: NamespacedName,
        resync_interval: Duration,
    ) -> (Self, SyncManagerHandle) {
        let (event_tx, event_rx) = mpsc::channel(schedule::EVENT_CHANNEL_CAPACITY);
        let handle = SyncManagerHandle { event_tx };

        let manager = Self {
            synchronizer,
            watched,
            resync_interval,
            event_rx,
            handle: handle.clone(),
            pending_retry: None,
        };

        (manager, handle)
    }

    /// Sync once, then reconcile on events and every resync interval.
    ///
    /// The manager keeps a sender for its own retries, so the event channel
    /// never closes and this only returns when the task is cancelled.
    pub async fn run(mut self) -> anyhow::Result<()> {
        info!(
            "SyncManager started for {}, performing initial sync...",
            self.synchronizer.identity()
        );
        let watched = self.watched.clone();
        self.reconcile(&watched).await;
        info!("Initial sync complete, listening for events...");

        let mut resync = interval_at(Instant::now() + self.resync_interval, self.resync_interval);
        resync.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                Some(event) = self.event_rx.recv() => self.handle_event(event).await,
                _ = resync.tick() => {
                    debug!("Periodic resync of {}", watched);
                    self.reconcile(&watched).await;
                }
            }
        }
    }

    async fn handle_event(&mut self, event: SyncEvent) {
        debug!("Handling event: {:?}", event);

        match event {
            SyncEvent::Reconcile { key, trigger } => {
                debug!("Reconcile of {} triggered by {:?}", key, trigger);
                self.reconcile(&key).await;
            }
        }
    }

    #[instrument(skip(self))]
    async fn reconcile(&mut self, key: &NamespacedName) {
        if let Some(pending) = self.pending_retry.take() {
            pending.abort();
        }

        match self.synchronizer.reconcile(key).await {
            Ok(outcome) => info!("Reconciled {}: {:?}", key, outcome),
            Err(e) => {
                let delay = error_policy(&e);
                debug!("Retrying {} in {}s", key, delay.as_secs());
                self.pending_retry = Some(self.schedule_retry(key.clone(), delay));
            }
        }
    }

    fn schedule_retry(&self, key: NamespacedName, delay: Duration) -> JoinHandle<()> {
        let handle = self.handle.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            handle
                .send(SyncEvent::Reconcile {
                    key,
                    trigger: Trigger::Retry,
                })
                .await;
        })
    }
}
