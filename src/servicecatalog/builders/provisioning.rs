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

//! Provisioning operations.

use super::json_request;
use crate::aws::client::SharedHandle;
use crate::aws::error::Error;
use crate::aws::request::{ApiCall, ApiRequest, ToApiRequest};
use crate::servicecatalog::response::{
    ProvisionProductResponse, TerminateProvisionedProductResponse,
};
use crate::servicecatalog::types::ProvisioningParameter;
use serde::Serialize;

/// Builder for the `ProvisionProduct` operation.
#[derive(Clone, Debug)]
pub struct ProvisionProduct {
    handle: SharedHandle,
    provisioned_product_name: String,
    product_id: String,
    provisioning_artifact_id: String,
    path_id: Option<String>,
    provisioning_parameters: Vec<ProvisioningParameter>,
    provision_token: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ProvisionProductBody<'a> {
    provisioned_product_name: &'a str,
    product_id: &'a str,
    provisioning_artifact_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    path_id: Option<&'a str>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    provisioning_parameters: &'a [ProvisioningParameter],
    #[serde(skip_serializing_if = "Option::is_none")]
    provision_token: Option<&'a str>,
}

impl ProvisionProduct {
    pub fn new(
        handle: SharedHandle,
        provisioned_product_name: impl Into<String>,
        product_id: impl Into<String>,
        provisioning_artifact_id: impl Into<String>,
    ) -> Self {
        Self {
            handle,
            provisioned_product_name: provisioned_product_name.into(),
            product_id: product_id.into(),
            provisioning_artifact_id: provisioning_artifact_id.into(),
            path_id: None,
            provisioning_parameters: Vec::new(),
            provision_token: None,
        }
    }

    pub fn path_id(mut self, id: impl Into<String>) -> Self {
        self.path_id = Some(id.into());
        self
    }

    pub fn provisioning_parameters(mut self, params: Vec<ProvisioningParameter>) -> Self {
        self.provisioning_parameters = params;
        self
    }

    pub fn provision_token(mut self, token: impl Into<String>) -> Self {
        self.provision_token = Some(token.into());
        self
    }
}

impl ToApiRequest for ProvisionProduct {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        let body = serde_json::to_vec(&ProvisionProductBody {
            provisioned_product_name: &self.provisioned_product_name,
            product_id: &self.product_id,
            provisioning_artifact_id: &self.provisioning_artifact_id,
            path_id: self.path_id.as_deref(),
            provisioning_parameters: &self.provisioning_parameters,
            provision_token: self.provision_token.as_deref(),
        })?;
        Ok(json_request("ProvisionProduct", body))
    }
}

impl ApiCall for ProvisionProduct {
    type Response = ProvisionProductResponse;
}

/// Builder for the `TerminateProvisionedProduct` operation.
///
/// The provisioned product is addressed by name or by id, not both.
#[derive(Clone, Debug)]
pub struct TerminateProvisionedProduct {
    handle: SharedHandle,
    provisioned_product_name: Option<String>,
    provisioned_product_id: Option<String>,
    terminate_token: Option<String>,
    ignore_errors: Option<bool>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct TerminateProvisionedProductBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    provisioned_product_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provisioned_product_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    terminate_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ignore_errors: Option<bool>,
}

impl TerminateProvisionedProduct {
    pub fn new(handle: SharedHandle) -> Self {
        Self {
            handle,
            provisioned_product_name: None,
            provisioned_product_id: None,
            terminate_token: None,
            ignore_errors: None,
        }
    }

    pub fn provisioned_product_name(mut self, name: impl Into<String>) -> Self {
        self.provisioned_product_name = Some(name.into());
        self
    }

    pub fn provisioned_product_id(mut self, id: impl Into<String>) -> Self {
        self.provisioned_product_id = Some(id.into());
        self
    }

    pub fn terminate_token(mut self, token: impl Into<String>) -> Self {
        self.terminate_token = Some(token.into());
        self
    }

    pub fn ignore_errors(mut self, ignore: bool) -> Self {
        self.ignore_errors = Some(ignore);
        self
    }
}

impl ToApiRequest for TerminateProvisionedProduct {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        let body = serde_json::to_vec(&TerminateProvisionedProductBody {
            provisioned_product_name: self.provisioned_product_name.as_deref(),
            provisioned_product_id: self.provisioned_product_id.as_deref(),
            terminate_token: self.terminate_token.as_deref(),
            ignore_errors: self.ignore_errors,
        })?;
        Ok(json_request("TerminateProvisionedProduct", body))
    }
}

impl ApiCall for TerminateProvisionedProduct {
    type Response = TerminateProvisionedProductResponse;
}
