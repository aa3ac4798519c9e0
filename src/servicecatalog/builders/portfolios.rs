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

//! Portfolio operations.

use super::json_request;
use crate::aws::client::SharedHandle;
use crate::aws::error::Error;
use crate::aws::request::{ApiCall, ApiRequest, ToApiRequest};
use crate::servicecatalog::response::{
    CreatePortfolioResponse, DeletePortfolioResponse, DescribePortfolioResponse,
    ListPortfoliosResponse,
};
use crate::servicecatalog::types::Tag;
use serde::Serialize;

/// Builder for the `CreatePortfolio` operation.
#[derive(Clone, Debug)]
pub struct CreatePortfolio {
    handle: SharedHandle,
    display_name: String,
    provider_name: String,
    description: Option<String>,
    idempotency_token: Option<String>,
    tags: Vec<Tag>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct CreatePortfolioBody<'a> {
    display_name: &'a str,
    provider_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    idempotency_token: Option<&'a str>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    tags: &'a [Tag],
}

impl CreatePortfolio {
    pub fn new(
        handle: SharedHandle,
        display_name: impl Into<String>,
        provider_name: impl Into<String>,
    ) -> Self {
        Self {
            handle,
            display_name: display_name.into(),
            provider_name: provider_name.into(),
            description: None,
            idempotency_token: None,
            tags: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn idempotency_token(mut self, token: impl Into<String>) -> Self {
        self.idempotency_token = Some(token.into());
        self
    }

    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }
}

impl ToApiRequest for CreatePortfolio {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        let body = serde_json::to_vec(&CreatePortfolioBody {
            display_name: &self.display_name,
            provider_name: &self.provider_name,
            description: self.description.as_deref(),
            idempotency_token: self.idempotency_token.as_deref(),
            tags: &self.tags,
        })?;
        Ok(json_request("CreatePortfolio", body))
    }
}

impl ApiCall for CreatePortfolio {
    type Response = CreatePortfolioResponse;
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct PortfolioIdBody<'a> {
    id: &'a str,
}

/// Builder for the `DeletePortfolio` operation.
#[derive(Clone, Debug)]
pub struct DeletePortfolio {
    handle: SharedHandle,
    id: String,
}

impl DeletePortfolio {
    pub fn new(handle: SharedHandle, id: impl Into<String>) -> Self {
        Self {
            handle,
            id: id.into(),
        }
    }
}

impl ToApiRequest for DeletePortfolio {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        let body = serde_json::to_vec(&PortfolioIdBody { id: &self.id })?;
        Ok(json_request("DeletePortfolio", body))
    }
}

impl ApiCall for DeletePortfolio {
    type Response = DeletePortfolioResponse;
}

/// Builder for the `DescribePortfolio` operation.
#[derive(Clone, Debug)]
pub struct DescribePortfolio {
    handle: SharedHandle,
    id: String,
}

impl DescribePortfolio {
    pub fn new(handle: SharedHandle, id: impl Into<String>) -> Self {
        Self {
            handle,
            id: id.into(),
        }
    }
}

impl ToApiRequest for DescribePortfolio {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        let body = serde_json::to_vec(&PortfolioIdBody { id: &self.id })?;
        Ok(json_request("DescribePortfolio", body))
    }
}

impl ApiCall for DescribePortfolio {
    type Response = DescribePortfolioResponse;
}

/// Builder for the `ListPortfolios` operation.
#[derive(Clone, Debug)]
pub struct ListPortfolios {
    handle: SharedHandle,
    page_token: Option<String>,
    page_size: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ListPortfoliosBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<u32>,
}

impl ListPortfolios {
    pub fn new(handle: SharedHandle) -> Self {
        Self {
            handle,
            page_token: None,
            page_size: None,
        }
    }

    pub fn page_token(mut self, token: impl Into<String>) -> Self {
        self.page_token = Some(token.into());
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }
}

impl ToApiRequest for ListPortfolios {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        let body = serde_json::to_vec(&ListPortfoliosBody {
            page_token: self.page_token.as_deref(),
            page_size: self.page_size,
        })?;
        Ok(json_request("ListPortfolios", body))
    }
}

impl ApiCall for ListPortfolios {
    type Response = ListPortfoliosResponse;
}
