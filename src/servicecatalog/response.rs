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

//! Typed responses for the Service Catalog operations.

use super::types::{PortfolioDetail, ProductViewDetail, ProductViewSummary, RecordDetail, Tag};
use crate::json_response;
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePortfolioResponse {
    pub portfolio_detail: Option<PortfolioDetail>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct DeletePortfolioResponse {}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribePortfolioResponse {
    pub portfolio_detail: Option<PortfolioDetail>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPortfoliosResponse {
    #[serde(default)]
    pub portfolio_details: Vec<PortfolioDetail>,
    pub next_page_token: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateProductResponse {
    pub product_view_detail: Option<ProductViewDetail>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeProductResponse {
    pub product_view_summary: Option<ProductViewSummary>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchProductsResponse {
    #[serde(default)]
    pub product_view_summaries: Vec<ProductViewSummary>,
    pub next_page_token: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisionProductResponse {
    pub record_detail: Option<RecordDetail>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TerminateProvisionedProductResponse {
    pub record_detail: Option<RecordDetail>,
}

json_response!(
    CreatePortfolioResponse,
    DeletePortfolioResponse,
    DescribePortfolioResponse,
    ListPortfoliosResponse,
    CreateProductResponse,
    DescribeProductResponse,
    SearchProductsResponse,
    ProvisionProductResponse,
    TerminateProvisionedProductResponse,
);
