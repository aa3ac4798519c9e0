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

//! Skill group operations.

use super::json_request;
use crate::alexaforbusiness::response::{CreateSkillGroupResponse, DeleteSkillGroupResponse};
use crate::aws::client::SharedHandle;
use crate::aws::error::Error;
use crate::aws::request::{ApiCall, ApiRequest, ToApiRequest};
use serde::Serialize;

/// Builder for the `CreateSkillGroup` operation.
#[derive(Clone, Debug)]
pub struct CreateSkillGroup {
    handle: SharedHandle,
    skill_group_name: String,
    description: Option<String>,
    client_request_token: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct CreateSkillGroupBody<'a> {
    skill_group_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_request_token: Option<&'a str>,
}

impl CreateSkillGroup {
    pub fn new(handle: SharedHandle, skill_group_name: impl Into<String>) -> Self {
        Self {
            handle,
            skill_group_name: skill_group_name.into(),
            description: None,
            client_request_token: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn client_request_token(mut self, token: impl Into<String>) -> Self {
        self.client_request_token = Some(token.into());
        self
    }
}

impl ToApiRequest for CreateSkillGroup {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        let body = serde_json::to_vec(&CreateSkillGroupBody {
            skill_group_name: &self.skill_group_name,
            description: self.description.as_deref(),
            client_request_token: self.client_request_token.as_deref(),
        })?;
        Ok(json_request("CreateSkillGroup", body))
    }
}

impl ApiCall for CreateSkillGroup {
    type Response = CreateSkillGroupResponse;
}

/// Builder for the `DeleteSkillGroup` operation.
#[derive(Clone, Debug)]
pub struct DeleteSkillGroup {
    handle: SharedHandle,
    skill_group_arn: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct DeleteSkillGroupBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    skill_group_arn: Option<&'a str>,
}

impl DeleteSkillGroup {
    pub fn new(handle: SharedHandle) -> Self {
        Self {
            handle,
            skill_group_arn: None,
        }
    }

    pub fn skill_group_arn(mut self, arn: impl Into<String>) -> Self {
        self.skill_group_arn = Some(arn.into());
        self
    }
}

impl ToApiRequest for DeleteSkillGroup {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        let body = serde_json::to_vec(&DeleteSkillGroupBody {
            skill_group_arn: self.skill_group_arn.as_deref(),
        })?;
        Ok(json_request("DeleteSkillGroup", body))
    }
}

impl ApiCall for DeleteSkillGroup {
    type Response = DeleteSkillGroupResponse;
}
