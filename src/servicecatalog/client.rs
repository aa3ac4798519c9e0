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

use crate::aws::client::{ClientBuilder, Handle, Protocol, ServiceMeta, SharedHandle};
use crate::aws::endpoint::Endpoint;
use crate::servicecatalog::builders::*;
use std::sync::Arc;

const META: ServiceMeta = ServiceMeta {
    signing_name: "servicecatalog",
    endpoint_prefix: "servicecatalog",
    protocol: Protocol::AwsJson1_1,
    target_prefix: Some("AWS242ServiceCatalogService"),
    api_version: None,
};

/// Client for AWS Service Catalog.
#[derive(Clone, Debug)]
pub struct ServiceCatalogClient {
    handle: SharedHandle,
}

impl From<Handle> for ServiceCatalogClient {
    fn from(handle: Handle) -> Self {
        Self {
            handle: Arc::new(handle),
        }
    }
}

impl ServiceCatalogClient {
    pub fn builder() -> ClientBuilder<Self> {
        ClientBuilder::new(META)
    }

    /// Redirects every subsequent call, on this client and its clones, to the
    /// given endpoint.
    pub fn override_endpoint(&self, endpoint: Endpoint) {
        self.handle.resolver.override_endpoint(endpoint);
    }

    pub fn create_portfolio(
        &self,
        display_name: impl Into<String>,
        provider_name: impl Into<String>,
    ) -> CreatePortfolio {
        CreatePortfolio::new(self.handle.clone(), display_name, provider_name)
    }

    pub fn delete_portfolio(&self, id: impl Into<String>) -> DeletePortfolio {
        DeletePortfolio::new(self.handle.clone(), id)
    }

    pub fn describe_portfolio(&self, id: impl Into<String>) -> DescribePortfolio {
        DescribePortfolio::new(self.handle.clone(), id)
    }

    pub fn list_portfolios(&self) -> ListPortfolios {
        ListPortfolios::new(self.handle.clone())
    }

    pub fn create_product(
        &self,
        name: impl Into<String>,
        owner: impl Into<String>,
        product_type: impl Into<String>,
    ) -> CreateProduct {
        CreateProduct::new(self.handle.clone(), name, owner, product_type)
    }

    pub fn describe_product(&self, id: impl Into<String>) -> DescribeProduct {
        DescribeProduct::new(self.handle.clone(), id)
    }

    pub fn search_products(&self) -> SearchProducts {
        SearchProducts::new(self.handle.clone())
    }

    pub fn provision_product(
        &self,
        provisioned_product_name: impl Into<String>,
        product_id: impl Into<String>,
        provisioning_artifact_id: impl Into<String>,
    ) -> ProvisionProduct {
        ProvisionProduct::new(
            self.handle.clone(),
            provisioned_product_name,
            product_id,
            provisioning_artifact_id,
        )
    }

    pub fn terminate_provisioned_product(&self) -> TerminateProvisionedProduct {
        TerminateProvisionedProduct::new(self.handle.clone())
    }
}
