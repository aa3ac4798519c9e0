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

//! Shared Alexa for Business data shapes.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoomData {
    pub room_arn: Option<String>,
    pub room_name: Option<String>,
    pub description: Option<String>,
    pub provider_calendar_id: Option<String>,
    pub profile_arn: Option<String>,
    pub profile_name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceData {
    pub device_arn: Option<String>,
    pub device_serial_number: Option<String>,
    pub device_type: Option<String>,
    pub device_name: Option<String>,
    pub software_version: Option<String>,
    pub mac_address: Option<String>,
    pub device_status: Option<String>,
    pub room_arn: Option<String>,
    pub room_name: Option<String>,
}

/// Search filter: all listed values match the given key.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Filter {
    pub key: String,
    pub values: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Sort {
    pub key: String,
    /// `ASC` or `DESC`.
    pub value: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}
