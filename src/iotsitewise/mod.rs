// Lightweight AWS service clients for Rust
// Copyright 2025 the awslite developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! AWS IoT SiteWise client (REST-JSON).
//!
//! IoT SiteWise splits its API over three regional hosts: the asset and model
//! control plane lives behind `api.`, property-value ingestion and queries
//! behind `data.` and portal management behind `monitor.`. Each operation
//! builder carries the right prefix; a client pinned to an explicit endpoint
//! sends everything there instead.

pub mod builders;
pub mod client;
pub mod response;
pub mod types;

pub use client::IotSiteWiseClient;

/// Host prefix for asset and model control-plane operations.
pub(crate) const API_PREFIX: &str = "api.";
/// Host prefix for property-value data-plane operations.
pub(crate) const DATA_PREFIX: &str = "data.";
/// Host prefix for portal management operations.
pub(crate) const MONITOR_PREFIX: &str = "monitor.";
