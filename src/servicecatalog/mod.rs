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

//! AWS Service Catalog client (JSON 1.1).
//!
//! Every operation is a `POST /` against the base endpoint with an
//! `X-Amz-Target: AWS242ServiceCatalogService.<Operation>` header; required
//! fields are validated by the service.

pub mod builders;
pub mod client;
pub mod response;
pub mod types;

pub use client::ServiceCatalogClient;
