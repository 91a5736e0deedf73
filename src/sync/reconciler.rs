// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Mirrors the agent token of the managed cluster into a secret on the hub.

use crate::constants::{schedule, OPERATOR_NAME};
use crate::error::{is_not_found, Result, TokenSyncError};
use crate::sync::secret::build_cluster_secret;
use crate::sync::token::{resolve_api_server_url, resolve_bearer_token};
use crate::types::NamespacedName;
use k8s_openapi::api::core::v1::{Secret, ServiceAccount};
use kube::{
    api::{DeleteParams, PostParams},
    Api, Client,
};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// What a successful reconciliation did on the hub
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The watched service account is gone and the hub secret was removed
    Deleted,
    Created,
    Updated,
}

/// Holds the managed cluster (local) and hub clients for one cluster identity.
pub struct AgentTokenSynchronizer {
    local: Client,
    hub: Client,
    identity: NamespacedName,
}

impl AgentTokenSynchronizer {
    pub fn new(local: Client, hub: Client, identity: NamespacedName) -> Self {
        Self {
            local,
            hub,
            identity,
        }
    }

    pub fn identity(&self) -> &NamespacedName {
        &self.identity
    }

    fn hub_secrets(&self) -> Api<Secret> {
        Api::namespaced(self.hub.clone(), &self.identity.namespace)
    }

    /// Reconcile the hub secret after a change to the service account `key`.
    #[instrument(skip(self), fields(cluster = %self.identity))]
    pub async fn reconcile(&self, key: &NamespacedName) -> Result<SyncOutcome> {
        info!("Reconciling {}", key);

        let service_accounts: Api<ServiceAccount> =
            Api::namespaced(self.local.clone(), &key.namespace);

        match service_accounts.get_opt(&key.name).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                info!("{} is not found. Deleting the secret from the hub.", key);
                self.delete_cluster_secret().await?;
                return Ok(SyncOutcome::Deleted);
            }
            Err(e) => {
                debug!("Failed to get service account {}: {}", key, e);
                return Err(e.into());
            }
        }

        let token = resolve_bearer_token(&self.local).await.map_err(|e| {
            debug!("Failed to find the service account token: {}", e);
            e
        })?;

        // A missing server address degrades to an empty field rather than failing
        let server = match resolve_api_server_url(&self.local).await {
            Ok(server) => server,
            Err(e) => {
                error!("{}", e);
                String::new()
            }
        };

        let secret = build_cluster_secret(&self.identity, &token, &server)?;
        self.apply_cluster_secret(secret).await
    }

    /// Create the hub secret, or overwrite it if it already exists
    async fn apply_cluster_secret(&self, mut secret: Secret) -> Result<SyncOutcome> {
        let secrets = self.hub_secrets();
        let name = self.identity.cluster_secret_name();
        let pp = PostParams {
            field_manager: Some(OPERATOR_NAME.to_string()),
            ..Default::default()
        };

        let existing = secrets.get_opt(&name).await.map_err(|e| {
            debug!("Failed to get secret {} from the hub: {}", self.cluster_secret_key(), e);
            e
        })?;

        match existing {
            None => {
                info!("Secret {} not found on the hub", self.cluster_secret_key());

                secrets
                    .create(&pp, &secret)
                    .await
                    .map_err(|source| self.write_error("create", source))?;

                info!(
                    "The cluster secret {} was created on the hub successfully",
                    self.cluster_secret_key()
                );
                Ok(SyncOutcome::Created)
            }
            Some(current) => {
                // Concurrent writers surface as a 409 Conflict
                secret.metadata.resource_version = current.metadata.resource_version;

                secrets
                    .replace(&name, &pp, &secret)
                    .await
                    .map_err(|source| self.write_error("update", source))?;

                info!(
                    "The cluster secret {} was updated on the hub successfully",
                    self.cluster_secret_key()
                );
                Ok(SyncOutcome::Updated)
            }
        }
    }

    /// Delete the hub secret; an already absent secret is not an error
    async fn delete_cluster_secret(&self) -> Result<()> {
        let name = self.identity.cluster_secret_name();

        match self.hub_secrets().delete(&name, &DeleteParams::default()).await {
            Ok(_) => {
                info!("Deleted secret {} from the hub", self.cluster_secret_key());
                Ok(())
            }
            Err(e) if is_not_found(&e) => {
                info!("Secret {} already absent from the hub", self.cluster_secret_key());
                Ok(())
            }
            Err(source) => Err(self.write_error("delete", source)),
        }
    }

    fn cluster_secret_key(&self) -> NamespacedName {
        NamespacedName::new(
            self.identity.cluster_secret_name(),
            self.identity.namespace.clone(),
        )
    }

    fn write_error(&self, action: &'static str, source: kube::Error) -> TokenSyncError {
        let err = TokenSyncError::RemoteWrite {
            action,
            name: self.cluster_secret_key().to_string(),
            source,
        };
        debug!("{}", err);
        err
    }
}

/// Delay before a failed reconciliation is retried. Every error gets the same delay.
///
/// This is where reconciliation errors are reported.
pub fn error_policy(error: &TokenSyncError) -> Duration {
    error!("Reconciliation error: {}", error);
    Duration::from_secs(schedule::REQUEUE_AFTER_SECS)
}
