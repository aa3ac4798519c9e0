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

//! Domain operations.

use super::json_request;
use crate::aws::client::SharedHandle;
use crate::aws::error::Error;
use crate::aws::request::{ApiCall, ApiRequest, ToApiRequest};
use crate::aws::utils::check_required;
use crate::voiceid::response::{
    CreateDomainResponse, DeleteDomainResponse, DescribeDomainResponse, ListDomainsResponse,
};
use crate::voiceid::types::ServerSideEncryptionConfiguration;
use serde::Serialize;

/// Builder for the `CreateDomain` operation.
#[derive(Clone, Debug)]
pub struct CreateDomain {
    handle: SharedHandle,
    name: String,
    description: Option<String>,
    server_side_encryption_configuration: Option<ServerSideEncryptionConfiguration>,
    client_token: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct CreateDomainBody<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    server_side_encryption_configuration: Option<&'a ServerSideEncryptionConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_token: Option<&'a str>,
}

impl CreateDomain {
    pub fn new(handle: SharedHandle, name: impl Into<String>) -> Self {
        Self {
            handle,
            name: name.into(),
            description: None,
            server_side_encryption_configuration: None,
            client_token: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn server_side_encryption_configuration(
        mut self,
        config: ServerSideEncryptionConfiguration,
    ) -> Self {
        self.server_side_encryption_configuration = Some(config);
        self
    }

    pub fn client_token(mut self, token: impl Into<String>) -> Self {
        self.client_token = Some(token.into());
        self
    }
}

impl ToApiRequest for CreateDomain {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        check_required("Name", &self.name)?;
        let body = serde_json::to_vec(&CreateDomainBody {
            name: &self.name,
            description: self.description.as_deref(),
            server_side_encryption_configuration: self
                .server_side_encryption_configuration
                .as_ref(),
            client_token: self.client_token.as_deref(),
        })?;
        Ok(json_request("CreateDomain", body))
    }
}

impl ApiCall for CreateDomain {
    type Response = CreateDomainResponse;
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct DomainIdBody<'a> {
    domain_id: &'a str,
}

/// Builder for the `DescribeDomain` operation.
#[derive(Clone, Debug)]
pub struct DescribeDomain {
    handle: SharedHandle,
    domain_id: String,
}

impl DescribeDomain {
    pub fn new(handle: SharedHandle, domain_id: impl Into<String>) -> Self {
        Self {
            handle,
            domain_id: domain_id.into(),
        }
    }
}

impl ToApiRequest for DescribeDomain {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        check_required("DomainId", &self.domain_id)?;
        let body = serde_json::to_vec(&DomainIdBody {
            domain_id: &self.domain_id,
        })?;
        Ok(json_request("DescribeDomain", body))
    }
}

impl ApiCall for DescribeDomain {
    type Response = DescribeDomainResponse;
}

/// Builder for the `DeleteDomain` operation.
#[derive(Clone, Debug)]
pub struct DeleteDomain {
    handle: SharedHandle,
    domain_id: String,
}

impl DeleteDomain {
    pub fn new(handle: SharedHandle, domain_id: impl Into<String>) -> Self {
        Self {
            handle,
            domain_id: domain_id.into(),
        }
    }
}

impl ToApiRequest for DeleteDomain {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        check_required("DomainId", &self.domain_id)?;
        let body = serde_json::to_vec(&DomainIdBody {
            domain_id: &self.domain_id,
        })?;
        Ok(json_request("DeleteDomain", body))
    }
}

impl ApiCall for DeleteDomain {
    type Response = DeleteDomainResponse;
}

/// Builder for the `ListDomains` operation.
#[derive(Clone, Debug)]
pub struct ListDomains {
    handle: SharedHandle,
    next_token: Option<String>,
    max_results: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ListDomainsBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<u32>,
}

impl ListDomains {
    pub fn new(handle: SharedHandle) -> Self {
        Self {
            handle,
            next_token: None,
            max_results: None,
        }
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

impl ToApiRequest for ListDomains {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        let body = serde_json::to_vec(&ListDomainsBody {
            next_token: self.next_token.as_deref(),
            max_results: self.max_results,
        })?;
        Ok(json_request("ListDomains", body))
    }
}

impl ApiCall for ListDomains {
    type Response = ListDomainsResponse;
}
