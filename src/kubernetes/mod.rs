// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for API discovery and hub client creation.

pub mod client;
pub mod discovery;

pub use client::{create_hub_client, load_hub_config};
pub use discovery::check_infrastructure_api;
