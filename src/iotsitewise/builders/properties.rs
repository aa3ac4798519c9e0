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

//! Property-value data-plane operations. All of these go to the `data.` host.

use crate::aws::client::SharedHandle;
use crate::aws::error::Error;
use crate::aws::multimap_ext::{Multimap, MultimapExt};
use crate::aws::request::{ApiCall, ApiRequest, ToApiRequest};
use crate::iotsitewise::DATA_PREFIX;
use crate::iotsitewise::response::{
    BatchPutAssetPropertyValueResponse, GetAssetPropertyValueResponse,
};
use crate::iotsitewise::types::PutAssetPropertyValueEntry;
use bytes::Bytes;
use http::Method;
use serde::Serialize;

/// Builder for the `BatchPutAssetPropertyValue` operation.
#[derive(Clone, Debug)]
pub struct BatchPutAssetPropertyValue {
    handle: SharedHandle,
    entries: Vec<PutAssetPropertyValueEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchPutBody<'a> {
    entries: &'a [PutAssetPropertyValueEntry],
}

impl BatchPutAssetPropertyValue {
    pub fn new(handle: SharedHandle, entries: Vec<PutAssetPropertyValueEntry>) -> Self {
        Self { handle, entries }
    }
}

impl ToApiRequest for BatchPutAssetPropertyValue {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        if self.entries.is_empty() {
            return Err(Error::MissingParameter("entries"));
        }
        let body = serde_json::to_vec(&BatchPutBody {
            entries: &self.entries,
        })?;
        Ok(ApiRequest::builder()
            .method(Method::POST)
            .operation("BatchPutAssetPropertyValue")
            .path("/properties".to_string())
            .host_prefix(DATA_PREFIX)
            .body(Bytes::from(body))
            .build())
    }
}

impl ApiCall for BatchPutAssetPropertyValue {
    type Response = BatchPutAssetPropertyValueResponse;
}

/// Builder for the `GetAssetPropertyValue` operation.
///
/// The property is addressed either by alias or by asset id and property id;
/// the service rejects requests with neither.
#[derive(Clone, Debug)]
pub struct GetAssetPropertyValue {
    handle: SharedHandle,
    asset_id: Option<String>,
    property_id: Option<String>,
    property_alias: Option<String>,
}

impl GetAssetPropertyValue {
    pub fn new(handle: SharedHandle) -> Self {
        Self {
            handle,
            asset_id: None,
            property_id: None,
            property_alias: None,
        }
    }

    pub fn asset_id(mut self, id: impl Into<String>) -> Self {
        self.asset_id = Some(id.into());
        self
    }

    pub fn property_id(mut self, id: impl Into<String>) -> Self {
        self.property_id = Some(id.into());
        self
    }

    pub fn property_alias(mut self, alias: impl Into<String>) -> Self {
        self.property_alias = Some(alias.into());
        self
    }
}

impl ToApiRequest for GetAssetPropertyValue {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        let mut query_params = Multimap::new();
        query_params.add_opt("assetId", self.asset_id.as_deref());
        query_params.add_opt("propertyId", self.property_id.as_deref());
        query_params.add_opt("propertyAlias", self.property_alias.as_deref());
        Ok(ApiRequest::builder()
            .method(Method::GET)
            .operation("GetAssetPropertyValue")
            .path("/properties/latest".to_string())
            .host_prefix(DATA_PREFIX)
            .query_params(query_params)
            .build())
    }
}

impl ApiCall for GetAssetPropertyValue {
    type Response = GetAssetPropertyValueResponse;
}
