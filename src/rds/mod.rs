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

//! Amazon RDS client (Query protocol).
//!
//! Every operation is a `POST /` with a form-encoded
//! `Action=...&Version=2014-10-31&...` body; responses are XML. Beyond the
//! instance and snapshot operations, this module carries two signing helpers:
//! [`RdsClient::presigned_request_url`] for cross-region snapshot copies and
//! [`auth_token::AuthTokenGenerator`] for IAM database authentication.

pub mod auth_token;
pub mod builders;
pub mod client;
pub mod query;
pub mod response;

pub use auth_token::AuthTokenGenerator;
pub use client::RdsClient;

pub(crate) const API_VERSION: &str = "2014-10-31";
