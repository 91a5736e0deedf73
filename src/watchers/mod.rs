// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes watchers that turn watch events into sync events.

pub mod service_account;

pub use service_account::{ServiceAccountFilter, ServiceAccountWatcher};
