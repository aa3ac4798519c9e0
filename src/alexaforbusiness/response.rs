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

//! Typed responses for the Alexa for Business operations.

use super::types::{DeviceData, RoomData};
use crate::json_response;
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRoomResponse {
    pub room_arn: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRoomResponse {
    pub room: Option<RoomData>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct DeleteRoomResponse {}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchRoomsResponse {
    #[serde(default)]
    pub rooms: Vec<RoomData>,
    pub next_token: Option<String>,
    pub total_count: Option<u32>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSkillGroupResponse {
    pub skill_group_arn: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct DeleteSkillGroupResponse {}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AssociateDeviceWithRoomResponse {}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchDevicesResponse {
    #[serde(default)]
    pub devices: Vec<DeviceData>,
    pub next_token: Option<String>,
    pub total_count: Option<u32>,
}

json_response!(
    CreateRoomResponse,
    GetRoomResponse,
    DeleteRoomResponse,
    SearchRoomsResponse,
    CreateSkillGroupResponse,
    DeleteSkillGroupResponse,
    AssociateDeviceWithRoomResponse,
    SearchDevicesResponse,
);
