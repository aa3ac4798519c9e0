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

//! Product operations.

use super::json_request;
use crate::aws::client::SharedHandle;
use crate::aws::error::Error;
use crate::aws::request::{ApiCall, ApiRequest, ToApiRequest};
use crate::servicecatalog::response::{
    CreateProductResponse, DescribeProductResponse, SearchProductsResponse,
};
use serde::Serialize;
use std::collections::HashMap;

/// Builder for the `CreateProduct` operation.
#[derive(Clone, Debug)]
pub struct CreateProduct {
    handle: SharedHandle,
    name: String,
    owner: String,
    product_type: String,
    description: Option<String>,
    distributor: Option<String>,
    idempotency_token: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct CreateProductBody<'a> {
    name: &'a str,
    owner: &'a str,
    product_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    distributor: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    idempotency_token: Option<&'a str>,
}

impl CreateProduct {
    pub fn new(
        handle: SharedHandle,
        name: impl Into<String>,
        owner: impl Into<String>,
        product_type: impl Into<String>,
    ) -> Self {
        Self {
            handle,
            name: name.into(),
            owner: owner.into(),
            product_type: product_type.into(),
            description: None,
            distributor: None,
            idempotency_token: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn distributor(mut self, distributor: impl Into<String>) -> Self {
        self.distributor = Some(distributor.into());
        self
    }

    pub fn idempotency_token(mut self, token: impl Into<String>) -> Self {
        self.idempotency_token = Some(token.into());
        self
    }
}

impl ToApiRequest for CreateProduct {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        let body = serde_json::to_vec(&CreateProductBody {
            name: &self.name,
            owner: &self.owner,
            product_type: &self.product_type,
            description: self.description.as_deref(),
            distributor: self.distributor.as_deref(),
            idempotency_token: self.idempotency_token.as_deref(),
        })?;
        Ok(json_request("CreateProduct", body))
    }
}

impl ApiCall for CreateProduct {
    type Response = CreateProductResponse;
}

/// Builder for the `DescribeProduct` operation.
#[derive(Clone, Debug)]
pub struct DescribeProduct {
    handle: SharedHandle,
    id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeProductBody<'a> {
    id: &'a str,
}

impl DescribeProduct {
    pub fn new(handle: SharedHandle, id: impl Into<String>) -> Self {
        Self {
            handle,
            id: id.into(),
        }
    }
}

impl ToApiRequest for DescribeProduct {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        let body = serde_json::to_vec(&DescribeProductBody { id: &self.id })?;
        Ok(json_request("DescribeProduct", body))
    }
}

impl ApiCall for DescribeProduct {
    type Response = DescribeProductResponse;
}

/// Builder for the `SearchProducts` operation.
#[derive(Clone, Debug)]
pub struct SearchProducts {
    handle: SharedHandle,
    filters: Option<HashMap<String, Vec<String>>>,
    sort_by: Option<String>,
    sort_order: Option<String>,
    page_token: Option<String>,
    page_size: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SearchProductsBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    filters: Option<&'a HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_by: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_order: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<u32>,
}

impl SearchProducts {
    pub fn new(handle: SharedHandle) -> Self {
        Self {
            handle,
            filters: None,
            sort_by: None,
            sort_order: None,
            page_token: None,
            page_size: None,
        }
    }

    /// Filter keys are `FullTextSearch`, `Owner` or `ProductType`.
    pub fn filters(mut self, filters: HashMap<String, Vec<String>>) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort_by = Some(field.into());
        self
    }

    /// `ASCENDING` or `DESCENDING`.
    pub fn sort_order(mut self, order: impl Into<String>) -> Self {
        self.sort_order = Some(order.into());
        self
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

impl ToApiRequest for SearchProducts {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        let body = serde_json::to_vec(&SearchProductsBody {
            filters: self.filters.as_ref(),
            sort_by: self.sort_by.as_deref(),
            sort_order: self.sort_order.as_deref(),
            page_token: self.page_token.as_deref(),
            page_size: self.page_size,
        })?;
        Ok(json_request("SearchProducts", body))
    }
}

impl ApiCall for SearchProducts {
    type Response = SearchProductsResponse;
}
