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
use crate::iotsitewise::builders::*;
use crate::iotsitewise::types::PutAssetPropertyValueEntry;
use std::sync::Arc;

const META: ServiceMeta = ServiceMeta {
    signing_name: "iotsitewise",
    endpoint_prefix: "iotsitewise",
    protocol: Protocol::RestJson,
    target_prefix: None,
    api_version: None,
};

/// Client for AWS IoT SiteWise.
///
/// Cloning is cheap; clones share configuration, credentials and the
/// connection pool. Each operation method returns a builder whose
/// [`send`](crate::aws::request::ApiCall::send) executes the call.
#[derive(Clone, Debug)]
pub struct IotSiteWiseClient {
    handle: SharedHandle,
}

impl From<Handle> for IotSiteWiseClient {
    fn from(handle: Handle) -> Self {
        Self {
            handle: Arc::new(handle),
        }
    }
}

impl IotSiteWiseClient {
    pub fn builder() -> ClientBuilder<Self> {
        ClientBuilder::new(META)
    }

    /// Redirects every subsequent call, on this client and its clones, to the
    /// given endpoint. Host prefixes no longer apply.
    pub fn override_endpoint(&self, endpoint: Endpoint) {
        self.handle.resolver.override_endpoint(endpoint);
    }

    pub fn create_asset(
        &self,
        asset_name: impl Into<String>,
        asset_model_id: impl Into<String>,
    ) -> CreateAsset {
        CreateAsset::new(self.handle.clone(), asset_name, asset_model_id)
    }

    pub fn describe_asset(&self, asset_id: impl Into<String>) -> DescribeAsset {
        DescribeAsset::new(self.handle.clone(), asset_id)
    }

    pub fn update_asset(
        &self,
        asset_id: impl Into<String>,
        asset_name: impl Into<String>,
    ) -> UpdateAsset {
        UpdateAsset::new(self.handle.clone(), asset_id, asset_name)
    }

    pub fn delete_asset(&self, asset_id: impl Into<String>) -> DeleteAsset {
        DeleteAsset::new(self.handle.clone(), asset_id)
    }

    pub fn list_assets(&self) -> ListAssets {
        ListAssets::new(self.handle.clone())
    }

    pub fn associate_assets(
        &self,
        asset_id: impl Into<String>,
        hierarchy_id: impl Into<String>,
        child_asset_id: impl Into<String>,
    ) -> AssociateAssets {
        AssociateAssets::new(self.handle.clone(), asset_id, hierarchy_id, child_asset_id)
    }

    pub fn disassociate_assets(
        &self,
        asset_id: impl Into<String>,
        hierarchy_id: impl Into<String>,
        child_asset_id: impl Into<String>,
    ) -> DisassociateAssets {
        DisassociateAssets::new(self.handle.clone(), asset_id, hierarchy_id, child_asset_id)
    }

    pub fn list_associated_assets(&self, asset_id: impl Into<String>) -> ListAssociatedAssets {
        ListAssociatedAssets::new(self.handle.clone(), asset_id)
    }

    pub fn batch_put_asset_property_value(
        &self,
        entries: Vec<PutAssetPropertyValueEntry>,
    ) -> BatchPutAssetPropertyValue {
        BatchPutAssetPropertyValue::new(self.handle.clone(), entries)
    }

    pub fn get_asset_property_value(&self) -> GetAssetPropertyValue {
        GetAssetPropertyValue::new(self.handle.clone())
    }

    pub fn create_portal(
        &self,
        portal_name: impl Into<String>,
        portal_contact_email: impl Into<String>,
    ) -> CreatePortal {
        CreatePortal::new(self.handle.clone(), portal_name, portal_contact_email)
    }

    pub fn describe_portal(&self, portal_id: impl Into<String>) -> DescribePortal {
        DescribePortal::new(self.handle.clone(), portal_id)
    }

    pub fn delete_portal(&self, portal_id: impl Into<String>) -> DeletePortal {
        DeletePortal::new(self.handle.clone(), portal_id)
    }
}
