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

//! # awslite
//!
//! This crate provides strongly-typed, async-first clients for a handful of
//! AWS services: IoT SiteWise, RDS, Service Catalog, Alexa for Business and
//! Voice ID.
//!
//! Each supported operation has a corresponding request builder (e.g.
//! [`iotsitewise::builders::DescribeAsset`], [`rds::builders::CreateDbInstance`]),
//! which allows request parameters to be configured with a fluent API.
//!
//! All request builders implement the [`aws::request::ApiCall`] trait, which
//! provides the async [`send`](crate::aws::request::ApiCall::send) method to
//! execute the request and return a typed response. The same call can also be
//! dispatched on a background task with [`aws::task::submit`] (future form) or
//! [`aws::task::submit_with_callback`] (handler form).
//!
//! ## Basic Usage
//!
//! ```no_run
//! use awslite::aws::creds::StaticProvider;
//! use awslite::aws::request::ApiCall;
//! use awslite::iotsitewise::IotSiteWiseClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client: IotSiteWiseClient = IotSiteWiseClient::builder()
//!         .region("us-east-1")
//!         .provider(Some(StaticProvider::new("access", "secret", None)))
//!         .build()
//!         .unwrap();
//!
//!     let asset = client.describe_asset("my-asset-id").send().await.unwrap();
//!     println!("asset name: {:?}", asset.asset_name);
//! }
//! ```
//!
//! ## Design
//! - Every client method returns a builder struct for that operation
//! - Builders implement [`aws::request::ToApiRequest`] for request conversion
//!   and [`aws::request::ApiCall`] for execution
//! - Every failure is returned as a normal [`aws::error::Error`] value; the
//!   library never panics on request paths
//! - Endpoint resolution, SigV4 signing and HTTP transport live in
//!   [`aws`] and are shared by all service clients

pub mod aws;

pub mod alexaforbusiness;
pub mod iotsitewise;
pub mod rds;
pub mod servicecatalog;
pub mod voiceid;
