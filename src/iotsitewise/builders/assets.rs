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

//! Asset control-plane operations. All of these go to the `api.` host.

use crate::aws::client::SharedHandle;
use crate::aws::error::Error;
use crate::aws::multimap_ext::{Multimap, MultimapExt};
use crate::aws::request::{ApiCall, ApiRequest, ToApiRequest};
use crate::aws::utils::{check_required, url_encode_path_segment};
use crate::iotsitewise::API_PREFIX;
use crate::iotsitewise::response::{
    AssociateAssetsResponse, CreateAssetResponse, DeleteAssetResponse, DescribeAssetResponse,
    DisassociateAssetsResponse, ListAssetsResponse, ListAssociatedAssetsResponse,
    UpdateAssetResponse,
};
use bytes::Bytes;
use http::Method;
use serde::Serialize;
use std::collections::HashMap;

/// Builder for the `CreateAsset` operation.
#[derive(Clone, Debug)]
pub struct CreateAsset {
    handle: SharedHandle,
    asset_name: String,
    asset_model_id: String,
    client_token: Option<String>,
    tags: Option<HashMap<String, String>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateAssetBody<'a> {
    asset_name: &'a str,
    asset_model_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a HashMap<String, String>>,
}

impl CreateAsset {
    pub fn new(
        handle: SharedHandle,
        asset_name: impl Into<String>,
        asset_model_id: impl Into<String>,
    ) -> Self {
        Self {
            handle,
            asset_name: asset_name.into(),
            asset_model_id: asset_model_id.into(),
            client_token: None,
            tags: None,
        }
    }

    pub fn client_token(mut self, token: impl Into<String>) -> Self {
        self.client_token = Some(token.into());
        self
    }

    pub fn tags(mut self, tags: HashMap<String, String>) -> Self {
        self.tags = Some(tags);
        self
    }
}

impl ToApiRequest for CreateAsset {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        check_required("assetName", &self.asset_name)?;
        check_required("assetModelId", &self.asset_model_id)?;
        let body = serde_json::to_vec(&CreateAssetBody {
            asset_name: &self.asset_name,
            asset_model_id: &self.asset_model_id,
            client_token: self.client_token.as_deref(),
            tags: self.tags.as_ref(),
        })?;
        Ok(ApiRequest::builder()
            .method(Method::POST)
            .operation("CreateAsset")
            .path("/assets".to_string())
            .host_prefix(API_PREFIX)
            .body(Bytes::from(body))
            .build())
    }
}

impl ApiCall for CreateAsset {
    type Response = CreateAssetResponse;
}

/// Builder for the `DescribeAsset` operation.
#[derive(Clone, Debug)]
pub struct DescribeAsset {
    handle: SharedHandle,
    asset_id: String,
}

impl DescribeAsset {
    pub fn new(handle: SharedHandle, asset_id: impl Into<String>) -> Self {
        Self {
            handle,
            asset_id: asset_id.into(),
        }
    }
}

impl ToApiRequest for DescribeAsset {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        check_required("assetId", &self.asset_id)?;
        Ok(ApiRequest::builder()
            .method(Method::GET)
            .operation("DescribeAsset")
            .path(format!(
                "/assets/{}",
                url_encode_path_segment(&self.asset_id)
            ))
            .host_prefix(API_PREFIX)
            .build())
    }
}

impl ApiCall for DescribeAsset {
    type Response = DescribeAssetResponse;
}

/// Builder for the `UpdateAsset` operation.
#[derive(Clone, Debug)]
pub struct UpdateAsset {
    handle: SharedHandle,
    asset_id: String,
    asset_name: String,
    client_token: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateAssetBody<'a> {
    asset_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_token: Option<&'a str>,
}

impl UpdateAsset {
    pub fn new(
        handle: SharedHandle,
        asset_id: impl Into<String>,
        asset_name: impl Into<String>,
    ) -> Self {
        Self {
            handle,
            asset_id: asset_id.into(),
            asset_name: asset_name.into(),
            client_token: None,
        }
    }

    pub fn client_token(mut self, token: impl Into<String>) -> Self {
        self.client_token = Some(token.into());
        self
    }
}

impl ToApiRequest for UpdateAsset {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        check_required("assetId", &self.asset_id)?;
        check_required("assetName", &self.asset_name)?;
        let body = serde_json::to_vec(&UpdateAssetBody {
            asset_name: &self.asset_name,
            client_token: self.client_token.as_deref(),
        })?;
        Ok(ApiRequest::builder()
            .method(Method::PUT)
            .operation("UpdateAsset")
            .path(format!(
                "/assets/{}",
                url_encode_path_segment(&self.asset_id)
            ))
            .host_prefix(API_PREFIX)
            .body(Bytes::from(body))
            .build())
    }
}

impl ApiCall for UpdateAsset {
    type Response = UpdateAssetResponse;
}

/// Builder for the `DeleteAsset` operation.
#[derive(Clone, Debug)]
pub struct DeleteAsset {
    handle: SharedHandle,
    asset_id: String,
    client_token: Option<String>,
}

impl DeleteAsset {
    pub fn new(handle: SharedHandle, asset_id: impl Into<String>) -> Self {
        Self {
            handle,
            asset_id: asset_id.into(),
            client_token: None,
        }
    }

    pub fn client_token(mut self, token: impl Into<String>) -> Self {
        self.client_token = Some(token.into());
        self
    }
}

impl ToApiRequest for DeleteAsset {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        check_required("assetId", &self.asset_id)?;
        let mut query_params = Multimap::new();
        query_params.add_opt("clientToken", self.client_token.as_deref());
        Ok(ApiRequest::builder()
            .method(Method::DELETE)
            .operation("DeleteAsset")
            .path(format!(
                "/assets/{}",
                url_encode_path_segment(&self.asset_id)
            ))
            .host_prefix(API_PREFIX)
            .query_params(query_params)
            .build())
    }
}

impl ApiCall for DeleteAsset {
    type Response = DeleteAssetResponse;
}

/// Builder for the `ListAssets` operation.
#[derive(Clone, Debug)]
pub struct ListAssets {
    handle: SharedHandle,
    asset_model_id: Option<String>,
    filter: Option<String>,
    next_token: Option<String>,
    max_results: Option<u32>,
}

impl ListAssets {
    pub fn new(handle: SharedHandle) -> Self {
        Self {
            handle,
            asset_model_id: None,
            filter: None,
            next_token: None,
            max_results: None,
        }
    }

    pub fn asset_model_id(mut self, id: impl Into<String>) -> Self {
        self.asset_model_id = Some(id.into());
        self
    }

    /// `ALL` or `TOP_LEVEL`.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }

    pub fn max_results(mut self, max: u32) -> Self {
        self.max_results = Some(max);
        self
    }
}

impl ToApiRequest for ListAssets {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        let mut query_params = Multimap::new();
        query_params.add_opt("assetModelId", self.asset_model_id.as_deref());
        query_params.add_opt("filter", self.filter.as_deref());
        query_params.add_opt("nextToken", self.next_token.as_deref());
        query_params.add_opt("maxResults", self.max_results.map(|v| v.to_string()));
        Ok(ApiRequest::builder()
            .method(Method::GET)
            .operation("ListAssets")
            .path("/assets".to_string())
            .host_prefix(API_PREFIX)
            .query_params(query_params)
            .build())
    }
}

impl ApiCall for ListAssets {
    type Response = ListAssetsResponse;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssetRelationshipBody<'a> {
    hierarchy_id: &'a str,
    child_asset_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_token: Option<&'a str>,
}

/// Builder for the `AssociateAssets` operation.
#[derive(Clone, Debug)]
pub struct AssociateAssets {
    handle: SharedHandle,
    asset_id: String,
    hierarchy_id: String,
    child_asset_id: String,
    client_token: Option<String>,
}

impl AssociateAssets {
    pub fn new(
        handle: SharedHandle,
        asset_id: impl Into<String>,
        hierarchy_id: impl Into<String>,
        child_asset_id: impl Into<String>,
    ) -> Self {
        Self {
            handle,
            asset_id: asset_id.into(),
            hierarchy_id: hierarchy_id.into(),
            child_asset_id: child_asset_id.into(),
            client_token: None,
        }
    }

    pub fn client_token(mut self, token: impl Into<String>) -> Self {
        self.client_token = Some(token.into());
        self
    }
}

impl ToApiRequest for AssociateAssets {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        check_required("assetId", &self.asset_id)?;
        check_required("hierarchyId", &self.hierarchy_id)?;
        check_required("childAssetId", &self.child_asset_id)?;
        let body = serde_json::to_vec(&AssetRelationshipBody {
            hierarchy_id: &self.hierarchy_id,
            child_asset_id: &self.child_asset_id,
            client_token: self.client_token.as_deref(),
        })?;
        Ok(ApiRequest::builder()
            .method(Method::POST)
            .operation("AssociateAssets")
            .path(format!(
                "/assets/{}/associate",
                url_encode_path_segment(&self.asset_id)
            ))
            .host_prefix(API_PREFIX)
            .body(Bytes::from(body))
            .build())
    }
}

impl ApiCall for AssociateAssets {
    type Response = AssociateAssetsResponse;
}

/// Builder for the `DisassociateAssets` operation.
#[derive(Clone, Debug)]
pub struct DisassociateAssets {
    handle: SharedHandle,
    asset_id: String,
    hierarchy_id: String,
    child_asset_id: String,
    client_token: Option<String>,
}

impl DisassociateAssets {
    pub fn new(
        handle: SharedHandle,
        asset_id: impl Into<String>,
        hierarchy_id: impl Into<String>,
        child_asset_id: impl Into<String>,
    ) -> Self {
        Self {
            handle,
            asset_id: asset_id.into(),
            hierarchy_id: hierarchy_id.into(),
            child_asset_id: child_asset_id.into(),
            client_token: None,
        }
    }

    pub fn client_token(mut self, token: impl Into<String>) -> Self {
        self.client_token = Some(token.into());
        self
    }
}

impl ToApiRequest for DisassociateAssets {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        check_required("assetId", &self.asset_id)?;
        check_required("hierarchyId", &self.hierarchy_id)?;
        check_required("childAssetId", &self.child_asset_id)?;
        let body = serde_json::to_vec(&AssetRelationshipBody {
            hierarchy_id: &self.hierarchy_id,
            child_asset_id: &self.child_asset_id,
            client_token: self.client_token.as_deref(),
        })?;
        Ok(ApiRequest::builder()
            .method(Method::POST)
            .operation("DisassociateAssets")
            .path(format!(
                "/assets/{}/disassociate",
                url_encode_path_segment(&self.asset_id)
            ))
            .host_prefix(API_PREFIX)
            .body(Bytes::from(body))
            .build())
    }
}

impl ApiCall for DisassociateAssets {
    type Response = DisassociateAssetsResponse;
}

/// Builder for the `ListAssociatedAssets` operation.
#[derive(Clone, Debug)]
pub struct ListAssociatedAssets {
    handle: SharedHandle,
    asset_id: String,
    hierarchy_id: Option<String>,
    traversal_direction: Option<String>,
    next_token: Option<String>,
    max_results: Option<u32>,
}

impl ListAssociatedAssets {
    pub fn new(handle: SharedHandle, asset_id: impl Into<String>) -> Self {
        Self {
            handle,
            asset_id: asset_id.into(),
            hierarchy_id: None,
            traversal_direction: None,
            next_token: None,
            max_results: None,
        }
    }

    pub fn hierarchy_id(mut self, id: impl Into<String>) -> Self {
        self.hierarchy_id = Some(id.into());
        self
    }

    /// `PARENT` or `CHILD`.
    pub fn traversal_direction(mut self, direction: impl Into<String>) -> Self {
        self.traversal_direction = Some(direction.into());
        self
    }

    pub fn next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }

    pub fn max_results(mut self, max: u32) -> Self {
        self.max_results = Some(max);
        self
    }
}

impl ToApiRequest for ListAssociatedAssets {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        check_required("assetId", &self.asset_id)?;
        let mut query_params = Multimap::new();
        query_params.add_opt("hierarchyId", self.hierarchy_id.as_deref());
        query_params.add_opt("traversalDirection", self.traversal_direction.as_deref());
        query_params.add_opt("nextToken", self.next_token.as_deref());
        query_params.add_opt("maxResults", self.max_results.map(|v| v.to_string()));
        Ok(ApiRequest::builder()
            .method(Method::GET)
            .operation("ListAssociatedAssets")
            .path(format!(
                "/assets/{}/hierarchies",
                url_encode_path_segment(&self.asset_id)
            ))
            .host_prefix(API_PREFIX)
            .query_params(query_params)
            .build())
    }
}

impl ApiCall for ListAssociatedAssets {
    type Response = ListAssociatedAssetsResponse;
}
