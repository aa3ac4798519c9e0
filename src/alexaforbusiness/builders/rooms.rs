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

//! Room operations.

use super::json_request;
use crate::alexaforbusiness::response::{
    CreateRoomResponse, DeleteRoomResponse, GetRoomResponse, SearchRoomsResponse,
};
use crate::alexaforbusiness::types::{Filter, Sort, Tag};
use crate::aws::client::SharedHandle;
use crate::aws::error::Error;
use crate::aws::request::{ApiCall, ApiRequest, ToApiRequest};
use serde::Serialize;

/// Builder for the `CreateRoom` operation.
#[derive(Clone, Debug)]
pub struct CreateRoom {
    handle: SharedHandle,
    room_name: String,
    description: Option<String>,
    profile_arn: Option<String>,
    provider_calendar_id: Option<String>,
    client_request_token: Option<String>,
    tags: Vec<Tag>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct CreateRoomBody<'a> {
    room_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile_arn: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider_calendar_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_request_token: Option<&'a str>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    tags: &'a [Tag],
}

impl CreateRoom {
    pub fn new(handle: SharedHandle, room_name: impl Into<String>) -> Self {
        Self {
            handle,
            room_name: room_name.into(),
            description: None,
            profile_arn: None,
            provider_calendar_id: None,
            client_request_token: None,
            tags: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn profile_arn(mut self, arn: impl Into<String>) -> Self {
        self.profile_arn = Some(arn.into());
        self
    }

    pub fn provider_calendar_id(mut self, id: impl Into<String>) -> Self {
        self.provider_calendar_id = Some(id.into());
        self
    }

    pub fn client_request_token(mut self, token: impl Into<String>) -> Self {
        self.client_request_token = Some(token.into());
        self
    }

    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }
}

impl ToApiRequest for CreateRoom {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        let body = serde_json::to_vec(&CreateRoomBody {
            room_name: &self.room_name,
            description: self.description.as_deref(),
            profile_arn: self.profile_arn.as_deref(),
            provider_calendar_id: self.provider_calendar_id.as_deref(),
            client_request_token: self.client_request_token.as_deref(),
            tags: &self.tags,
        })?;
        Ok(json_request("CreateRoom", body))
    }
}

impl ApiCall for CreateRoom {
    type Response = CreateRoomResponse;
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct RoomArnBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    room_arn: Option<&'a str>,
}

/// Builder for the `GetRoom` operation.
#[derive(Clone, Debug)]
pub struct GetRoom {
    handle: SharedHandle,
    room_arn: Option<String>,
}

impl GetRoom {
    pub fn new(handle: SharedHandle) -> Self {
        Self {
            handle,
            room_arn: None,
        }
    }

    pub fn room_arn(mut self, arn: impl Into<String>) -> Self {
        self.room_arn = Some(arn.into());
        self
    }
}

impl ToApiRequest for GetRoom {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        let body = serde_json::to_vec(&RoomArnBody {
            room_arn: self.room_arn.as_deref(),
        })?;
        Ok(json_request("GetRoom", body))
    }
}

impl ApiCall for GetRoom {
    type Response = GetRoomResponse;
}

/// Builder for the `DeleteRoom` operation.
#[derive(Clone, Debug)]
pub struct DeleteRoom {
    handle: SharedHandle,
    room_arn: Option<String>,
}

impl DeleteRoom {
    pub fn new(handle: SharedHandle) -> Self {
        Self {
            handle,
            room_arn: None,
        }
    }

    pub fn room_arn(mut self, arn: impl Into<String>) -> Self {
        self.room_arn = Some(arn.into());
        self
    }
}

impl ToApiRequest for DeleteRoom {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        let body = serde_json::to_vec(&RoomArnBody {
            room_arn: self.room_arn.as_deref(),
        })?;
        Ok(json_request("DeleteRoom", body))
    }
}

impl ApiCall for DeleteRoom {
    type Response = DeleteRoomResponse;
}

/// Builder for the `SearchRooms` operation.
#[derive(Clone, Debug)]
pub struct SearchRooms {
    handle: SharedHandle,
    filters: Vec<Filter>,
    sort_criteria: Vec<Sort>,
    next_token: Option<String>,
    max_results: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SearchBody<'a> {
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    filters: &'a [Filter],
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    sort_criteria: &'a [Sort],
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<u32>,
}

impl SearchRooms {
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

impl ToApiRequest for SearchRooms {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        let body = serde_json::to_vec(&SearchBody {
            filters: &self.filters,
            sort_criteria: &self.sort_criteria,
            next_token: self.next_token.as_deref(),
            max_results: self.max_results,
        })?;
        Ok(json_request("SearchRooms", body))
    }
}

impl ApiCall for SearchRooms {
    type Response = SearchRoomsResponse;
}
