// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Lookups against the managed cluster: bearer token and API server address

use crate::constants::{annotations, infrastructure, token_source};
use crate::error::{Result, TokenSyncError};
use crate::types::Infrastructure;
use k8s_openapi::api::core::v1::{Secret, ServiceAccount};
use kube::{Api, Client, ResourceExt};
use tracing::{debug, info, instrument};

/// Resolve the agent bearer token.
///
/// The token is always read from the `application-manager` service account,
/// whichever service account triggered the reconciliation. Its first linked
/// secret named `application-manager-dockercfg*` carries the token in an
/// annotation.
#[instrument(skip(client))]
pub async fn resolve_bearer_token(client: &Client) -> Result<String> {
    let namespace = token_source::NAMESPACE;
    let service_accounts: Api<ServiceAccount> = Api::namespaced(client.clone(), namespace);

    let sa = service_accounts
        .get(token_source::SERVICE_ACCOUNT_NAME)
        .await
        .map_err(|e| {
            TokenSyncError::TokenNotFound(format!(
                "failed to get service account {}/{}: {}",
                namespace,
                token_source::SERVICE_ACCOUNT_NAME,
                e
            ))
        })?;

    let Some(dockercfg) = find_dockercfg_secret(&sa) else {
        return Err(TokenSyncError::TokenNotFound(format!(
            "service account {}/{} has no {} secret",
            namespace,
            token_source::SERVICE_ACCOUNT_NAME,
            token_source::DOCKERCFG_PREFIX
        )));
    };

    info!("Found the dockercfg secret {}", dockercfg);

    let secrets: Api<Secret> = Api::namespaced(client.clone(), namespace);
    let secret = secrets.get(dockercfg).await.map_err(|e| {
        TokenSyncError::TokenNotFound(format!(
            "failed to get secret {}/{}: {}",
            namespace, dockercfg, e
        ))
    })?;

    let secret_annotations = secret.annotations();
    if let Some(token_secret) = secret_annotations.get(annotations::TOKEN_SECRET_NAME) {
        info!("Found the token secret {}", token_secret);
    }

    secret_annotations
        .get(annotations::TOKEN_SECRET_VALUE)
        .filter(|token| !token.is_empty())
        .cloned()
        .ok_or_else(|| {
            TokenSyncError::TokenNotFound(format!(
                "secret {}/{} has no {} annotation",
                namespace,
                dockercfg,
                annotations::TOKEN_SECRET_VALUE
            ))
        })
}

/// Name of the first linked secret with the dockercfg prefix
pub fn find_dockercfg_secret(sa: &ServiceAccount) -> Option<&str> {
    sa.secrets
        .iter()
        .flatten()
        .filter_map(|r| r.name.as_deref())
        .find(|name| name.starts_with(token_source::DOCKERCFG_PREFIX))
}

/// Read the externally reachable API server URL of this cluster.
///
/// Only works on OpenShift, where the Infrastructure singleton exists.
#[instrument(skip(client))]
pub async fn resolve_api_server_url(client: &Client) -> Result<String> {
    let infrastructures: Api<Infrastructure> = Api::all(client.clone());

    let infra = infrastructures.get(infrastructure::NAME).await.map_err(|e| {
        TokenSyncError::ServerAddress(format!(
            "failed to get infrastructure {}: {}",
            infrastructure::NAME,
            e
        ))
    })?;

    let url = infra.api_server_url().unwrap_or_default().to_string();
    debug!("API server URL: '{}'", url);
    Ok(url)
}
