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

use crate::alexaforbusiness::builders::*;
use crate::aws::client::{ClientBuilder, Handle, Protocol, ServiceMeta, SharedHandle};
use crate::aws::endpoint::Endpoint;
use std::sync::Arc;

const META: ServiceMeta = ServiceMeta {
    signing_name: "a4b",
    endpoint_prefix: "a4b",
    protocol: Protocol::AwsJson1_1,
    target_prefix: Some("AlexaForBusiness"),
    api_version: None,
};

/// Client for Alexa for Business.
#[derive(Clone, Debug)]
pub struct AlexaForBusinessClient {
    handle: SharedHandle,
}

impl From<Handle> for AlexaForBusinessClient {
    fn from(handle: Handle) -> Self {
        Self {
            handle: Arc::new(handle),
        }
    }
}

impl AlexaForBusinessClient {
    pub fn builder() -> ClientBuilder<Self> {
        ClientBuilder::new(META)
    }

    /// Redirects every subsequent call, on this client and its clones, to the
    /// given endpoint.
    pub fn override_endpoint(&self, endpoint: Endpoint) {
        self.handle.resolver.override_endpoint(endpoint);
    }

    pub fn create_room(&self, room_name: impl Into<String>) -> CreateRoom {
        CreateRoom::new(self.handle.clone(), room_name)
    }

    pub fn get_room(&self) -> GetRoom {
        GetRoom::new(self.handle.clone())
    }

    pub fn delete_room(&self) -> DeleteRoom {
        DeleteRoom::new(self.handle.clone())
    }

    pub fn search_rooms(&self) -> SearchRooms {
        SearchRooms::new(self.handle.clone())
    }

    pub fn create_skill_group(&self, skill_group_name: impl Into<String>) -> CreateSkillGroup {
        CreateSkillGroup::new(self.handle.clone(), skill_group_name)
    }

    pub fn delete_skill_group(&self) -> DeleteSkillGroup {
        DeleteSkillGroup::new(self.handle.clone())
    }

    pub fn associate_device_with_room(&self) -> AssociateDeviceWithRoom {
        AssociateDeviceWithRoom::new(self.handle.clone())
    }

    pub fn search_devices(&self) -> SearchDevices {
        SearchDevices::new(self.handle.clone())
    }
}
