// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! API availability checks

use crate::constants::infrastructure::{GROUP, KIND};
use crate::error::Result;
use kube::{discovery::Discovery, Client};
use tracing::{info, warn};

/// Check whether the OpenShift Infrastructure API is served by the cluster.
pub async fn infrastructure_api_available(client: &Client) -> Result<bool> {
    let discovery = Discovery::new(client.clone()).filter(&[GROUP]).run().await?;

    for group in discovery.groups() {
        if group.name() == GROUP {
            for (ar, _) in group.recommended_resources() {
                if ar.kind == KIND && ar.version == "v1" {
                    return Ok(true);
                }
            }
        }
    }

    Ok(false)
}

/// Log whether the API server address can be resolved on this cluster
pub async fn check_infrastructure_api(client: &Client) {
    match infrastructure_api_available(client).await {
        Ok(true) => info!("Infrastructure API ({}/v1) is available", GROUP),
        Ok(false) => warn!(
            "Infrastructure API ({}/v1) not found, the synced server address will be empty",
            GROUP
        ),
        Err(e) => warn!("Error checking for Infrastructure API: {}", e),
    }
}
