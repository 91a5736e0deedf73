// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{schedule, watch};
use crate::types::NamespacedName;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Managed cluster identity; the namespace is the cluster namespace on the hub
    pub identity: NamespacedName,
    /// Path to the kubeconfig of the hub cluster, not needed in standalone mode
    pub hub_kubeconfig: Option<PathBuf>,
    /// When true the agent is not attached to a hub and nothing is synced
    pub standalone: bool,
    /// Service account whose changes trigger reconciliation
    pub watched_service_account: NamespacedName,
    pub resync_interval: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let standalone = match lookup("STANDALONE") {
            Some(v) => v
                .parse::<bool>()
                .with_context(|| format!("STANDALONE must be true or false, got '{}'", v))?,
            None => false,
        };

        let name = lookup("CLUSTER_NAME").context("CLUSTER_NAME environment variable not set")?;
        let namespace = lookup("CLUSTER_NAMESPACE").unwrap_or_else(|| name.clone());

        let hub_kubeconfig = lookup("HUB_KUBECONFIG").map(PathBuf::from);
        if hub_kubeconfig.is_none() && !standalone {
            anyhow::bail!("HUB_KUBECONFIG environment variable not set");
        }

        let watched_service_account = NamespacedName::new(
            lookup("WATCH_SERVICE_ACCOUNT_NAME")
                .unwrap_or_else(|| watch::SERVICE_ACCOUNT_NAME.to_string()),
            lookup("WATCH_SERVICE_ACCOUNT_NAMESPACE")
                .unwrap_or_else(|| watch::SERVICE_ACCOUNT_NAMESPACE.to_string()),
        );

        let resync_secs = match lookup("RESYNC_INTERVAL_SECS") {
            Some(v) => v
                .parse::<u64>()
                .with_context(|| format!("RESYNC_INTERVAL_SECS must be a number, got '{}'", v))?,
            None => schedule::RESYNC_INTERVAL_SECS,
        };
        if resync_secs == 0 {
            anyhow::bail!("RESYNC_INTERVAL_SECS must be greater than zero");
        }

        Ok(Config {
            identity: NamespacedName::new(name, namespace),
            hub_kubeconfig,
            standalone,
            watched_service_account,
            resync_interval: Duration::from_secs(resync_secs),
        })
    }
}
