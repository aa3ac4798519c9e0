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

//! Device operations.

use super::json_request;
use crate::alexaforbusiness::response::{AssociateDeviceWithRoomResponse, SearchDevicesResponse};
use crate::alexaforbusiness::types::{Filter, Sort};
use crate::aws::client::SharedHandle;
use crate::aws::error::Error;
use crate::aws::request::{ApiCall, ApiRequest, ToApiRequest};
use serde::Serialize;

/// Builder for the `AssociateDeviceWithRoom` operation.
#[derive(Clone, Debug)]
pub struct AssociateDeviceWithRoom {
    handle: SharedHandle,
    device_arn: Option<String>,
    room_arn: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct AssociateDeviceWithRoomBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    device_arn: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    room_arn: Option<&'a str>,
}

impl AssociateDeviceWithRoom {
    pub fn new(handle: SharedHandle) -> Self {
        Self {
            handle,
            device_arn: None,
            room_arn: None,
        }
    }

    pub fn device_arn(mut self, arn: impl Into<String>) -> Self {
        self.device_arn = Some(arn.into());
        self
    }

    pub fn room_arn(mut self, arn: impl Into<String>) -> Self {
        self.room_arn = Some(arn.into());
        self
    }
}

impl ToApiRequest for AssociateDeviceWithRoom {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        let body = serde_json::to_vec(&AssociateDeviceWithRoomBody {
            device_arn: self.device_arn.as_deref(),
            room_arn: self.room_arn.as_deref(),
        })?;
        Ok(json_request("AssociateDeviceWithRoom", body))
    }
}

impl ApiCall for AssociateDeviceWithRoom {
    type Response = AssociateDeviceWithRoomResponse;
}

/// Builder for the `SearchDevices` operation.
#[derive(Clone, Debug)]
pub struct SearchDevices {
    handle: SharedHandle,
    filters: Vec<Filter>,
    sort_criteria: Vec<Sort>,
    next_token: Option<String>,
    max_results: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SearchDevicesBody<'a> {
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    filters: &'a [Filter],
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    sort_criteria: &'a [Sort],
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<u32>,
}

impl SearchDevices {
    pub fn new(handle: SharedHandle) -> Self {
        Self {
            handle,
            filters: Vec::new(),
            sort_criteria: Vec::new(),
            next_token: None,
            max_results: None,
        }
    }

    pub fn filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters = filters;
        self
    }

    pub fn sort_criteria(mut self, sort: Vec<Sort>) -> Self {
        self.sort_criteria = sort;
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

impl ToApiRequest for SearchDevices {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        let body = serde_json::to_vec(&SearchDevicesBody {
            filters: &self.filters,
            sort_criteria: &self.sort_criteria,
            next_token: self.next_token.as_deref(),
            max_results: self.max_results,
        })?;
        Ok(json_request("SearchDevices", body))
    }
}

impl ApiCall for SearchDevices {
    type Response = SearchDevicesResponse;
}
