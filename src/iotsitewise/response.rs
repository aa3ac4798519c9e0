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

//! Typed responses for the IoT SiteWise operations.

use super::types::{
    AssetHierarchy, AssetProperty, AssetPropertyValue, AssetStatus, AssetSummary,
    BatchPutAssetPropertyErrorEntry, PortalStatus,
};
use crate::json_response;
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetResponse {
    pub asset_id: Option<String>,
    pub asset_arn: Option<String>,
    pub asset_status: Option<AssetStatus>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeAssetResponse {
    pub asset_id: Option<String>,
    pub asset_arn: Option<String>,
    pub asset_name: Option<String>,
    pub asset_model_id: Option<String>,
    #[serde(default)]
    pub asset_properties: Vec<AssetProperty>,
    #[serde(default)]
    pub asset_hierarchies: Vec<AssetHierarchy>,
    pub asset_creation_date: Option<f64>,
    pub asset_last_update_date: Option<f64>,
    pub asset_status: Option<AssetStatus>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssetResponse {
    pub asset_status: Option<AssetStatus>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAssetResponse {
    pub asset_status: Option<AssetStatus>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAssetsResponse {
    #[serde(default)]
    pub asset_summaries: Vec<AssetSummary>,
    pub next_token: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AssociateAssetsResponse {}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct DisassociateAssetsResponse {}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAssociatedAssetsResponse {
    #[serde(default)]
    pub asset_summaries: Vec<AssetSummary>,
    pub next_token: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPutAssetPropertyValueResponse {
    #[serde(default)]
    pub error_entries: Vec<BatchPutAssetPropertyErrorEntry>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAssetPropertyValueResponse {
    pub property_value: Option<AssetPropertyValue>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortalResponse {
    pub portal_id: Option<String>,
    pub portal_arn: Option<String>,
    pub portal_start_url: Option<String>,
    pub portal_status: Option<PortalStatus>,
    pub sso_application_id: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribePortalResponse {
    pub portal_id: Option<String>,
    pub portal_arn: Option<String>,
    pub portal_name: Option<String>,
    pub portal_description: Option<String>,
    pub portal_client_id: Option<String>,
    pub portal_start_url: Option<String>,
    pub portal_contact_email: Option<String>,
    pub portal_status: Option<PortalStatus>,
    pub portal_creation_date: Option<f64>,
    pub portal_last_update_date: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePortalResponse {
    pub portal_status: Option<PortalStatus>,
}

json_response!(
    CreateAssetResponse,
    DescribeAssetResponse,
    UpdateAssetResponse,
    DeleteAssetResponse,
    ListAssetsResponse,
    AssociateAssetsResponse,
    DisassociateAssetsResponse,
    ListAssociatedAssetsResponse,
    BatchPutAssetPropertyValueResponse,
    GetAssetPropertyValueResponse,
    CreatePortalResponse,
    DescribePortalResponse,
    DeletePortalResponse,
);
