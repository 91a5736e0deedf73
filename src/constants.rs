// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The operator name, used as field manager on hub writes
pub const OPERATOR_NAME: &str = "agent-token-sync";

/// Suffix appended to the cluster name to form the hub secret name
pub const SECRET_SUFFIX: &str = "-cluster-secret";

/// Service account that triggers reconciliation unless overridden
pub mod watch {
    pub const SERVICE_ACCOUNT_NAME: &str = "klusterlet-addon-appmgr";
    pub const SERVICE_ACCOUNT_NAMESPACE: &str = "open-cluster-management-agent-addon";
}

/// Where the bearer token is actually read from.
///
/// This is independent of the watched service account.
pub mod token_source {
    pub const SERVICE_ACCOUNT_NAME: &str = "application-manager";
    pub const NAMESPACE: &str = "open-cluster-management-agent-addon";
    /// Prefix of the dockercfg secret linked from the service account
    pub const DOCKERCFG_PREFIX: &str = "application-manager-dockercfg";
}

/// Annotation keys set by OpenShift on dockercfg secrets
pub mod annotations {
    /// Name of the token secret the dockercfg secret belongs to
    pub const TOKEN_SECRET_NAME: &str = "openshift.io/token-secret.name";
    /// The bearer token itself
    pub const TOKEN_SECRET_VALUE: &str = "openshift.io/token-secret.value";
}

/// Label keys and values on the hub secret
pub mod labels {
    pub const ARGOCD_SECRET_TYPE: &str = "argocd.argoproj.io/secret-type";
    pub const ARGOCD_SECRET_TYPE_VALUE: &str = "cluster";
    pub const ACM_SECRET_TYPE: &str = "apps.open-cluster-management.io/secret-type";
    pub const ACM_SECRET_TYPE_VALUE: &str = "acm-cluster";
    pub const CLUSTER_NAME: &str = "apps.open-cluster-management.io/cluster-name";
    pub const CLUSTER_SERVER: &str = "apps.open-cluster-management.io/cluster-server";
}

/// OpenShift infrastructure config singleton
pub mod infrastructure {
    pub const GROUP: &str = "config.openshift.io";
    pub const KIND: &str = "Infrastructure";
    pub const NAME: &str = "cluster";
}

/// Scheduling of reconciliations
pub mod schedule {
    /// Fixed delay before a failed reconciliation is retried
    pub const REQUEUE_AFTER_SECS: u64 = 300;
    /// Default periodic resync of the watched service account
    pub const RESYNC_INTERVAL_SECS: u64 = 36_000;
    /// Capacity of the sync event channel
    pub const EVENT_CHANNEL_CAPACITY: usize = 256;
}
