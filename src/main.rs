// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::Client;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use agent_token_sync::config::Config;
use agent_token_sync::kubernetes::{check_infrastructure_api, load_hub_config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting agent token sync");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: cluster={}, standalone={}",
        config.identity, config.standalone
    );

    // Create Kubernetes client for the managed cluster
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    if config.standalone {
        info!("Standalone mode, nothing to sync to a hub");
        shutdown_signal().await;
        return Ok(());
    }

    let hub_kubeconfig = config
        .hub_kubeconfig
        .as_deref()
        .context("HUB_KUBECONFIG environment variable not set")?;
    let hub_config = load_hub_config(hub_kubeconfig).await?;

    check_infrastructure_api(&client).await;

    let Some(controller) = agent_token_sync::add(
        client,
        hub_config,
        config.identity.clone(),
        config.standalone,
    )?
    else {
        return Ok(());
    };

    let controller = controller
        .watching(config.watched_service_account.clone())
        .resync_every(config.resync_interval);

    info!("Starting agent token controller...");

    tokio::select! {
        res = controller.run() => {
            res?;
            warn!("Agent token controller stopped unexpectedly");
        }
        _ = shutdown_signal() => {
            info!("Received shutdown signal, stopping");
        }
    }

    Ok(())
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for CTRL+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
