// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource and identity types.

pub mod identity;
pub mod infrastructure;

pub use identity::NamespacedName;
pub use infrastructure::{Infrastructure, InfrastructureSpec, InfrastructureStatus};
