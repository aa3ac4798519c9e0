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

//! Shared Service Catalog data shapes.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PortfolioDetail {
    pub id: Option<String>,
    #[serde(rename = "ARN")]
    pub arn: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub provider_name: Option<String>,
    /// Epoch seconds.
    pub created_time: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductViewSummary {
    pub id: Option<String>,
    pub product_id: Option<String>,
    pub name: Option<String>,
    pub owner: Option<String>,
    pub short_description: Option<String>,
    #[serde(rename = "Type")]
    pub product_type: Option<String>,
    pub distributor: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductViewDetail {
    pub product_view_summary: Option<ProductViewSummary>,
    pub status: Option<String>,
    #[serde(rename = "ProductARN")]
    pub product_arn: Option<String>,
    pub created_time: Option<f64>,
}

/// Outcome record of a provisioning operation.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordDetail {
    pub record_id: Option<String>,
    pub provisioned_product_name: Option<String>,
    pub provisioned_product_id: Option<String>,
    pub provisioned_product_type: Option<String>,
    pub status: Option<String>,
    pub record_type: Option<String>,
    pub product_id: Option<String>,
    pub provisioning_artifact_id: Option<String>,
    pub path_id: Option<String>,
    pub created_time: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisioningParameter {
    pub key: String,
    pub value: String,
}
