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

//! Operation builders for Service Catalog.

mod portfolios;
mod products;
mod provisioning;

pub use portfolios::{CreatePortfolio, DeletePortfolio, DescribePortfolio, ListPortfolios};
pub use products::{CreateProduct, DescribeProduct, SearchProducts};
pub use provisioning::{ProvisionProduct, TerminateProvisionedProduct};

use crate::aws::request::ApiRequest;
use bytes::Bytes;
use http::Method;

/// All Service Catalog operations share the uniform JSON-RPC shape.
pub(crate) fn json_request(operation: &'static str, body: Vec<u8>) -> ApiRequest {
    ApiRequest::builder()
        .method(Method::POST)
        .operation(operation)
        .body(Bytes::from(body))
        .build()
}
