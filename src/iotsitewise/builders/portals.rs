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

//! Portal management operations. All of these go to the `monitor.` host.

use crate::aws::client::SharedHandle;
use crate::aws::error::Error;
use crate::aws::multimap_ext::{Multimap, MultimapExt};
use crate::aws::request::{ApiCall, ApiRequest, ToApiRequest};
use crate::aws::utils::{check_required, url_encode_path_segment};
use crate::iotsitewise::MONITOR_PREFIX;
use crate::iotsitewise::response::{
    CreatePortalResponse, DeletePortalResponse, DescribePortalResponse,
};
use bytes::Bytes;
use http::Method;
use serde::Serialize;

/// Builder for the `CreatePortal` operation.
#[derive(Clone, Debug)]
pub struct CreatePortal {
    handle: SharedHandle,
    portal_name: String,
    portal_contact_email: String,
    role_arn: Option<String>,
    portal_description: Option<String>,
    client_token: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreatePortalBody<'a> {
    portal_name: &'a str,
    portal_contact_email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    role_arn: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    portal_description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_token: Option<&'a str>,
}

impl CreatePortal {
    pub fn new(
        handle: SharedHandle,
        portal_name: impl Into<String>,
        portal_contact_email: impl Into<String>,
    ) -> Self {
        Self {
            handle,
            portal_name: portal_name.into(),
            portal_contact_email: portal_contact_email.into(),
            role_arn: None,
            portal_description: None,
            client_token: None,
        }
    }

    pub fn role_arn(mut self, arn: impl Into<String>) -> Self {
        self.role_arn = Some(arn.into());
        self
    }

    pub fn portal_description(mut self, description: impl Into<String>) -> Self {
        self.portal_description = Some(description.into());
        self
    }

    pub fn client_token(mut self, token: impl Into<String>) -> Self {
        self.client_token = Some(token.into());
        self
    }
}

impl ToApiRequest for CreatePortal {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        check_required("portalName", &self.portal_name)?;
        check_required("portalContactEmail", &self.portal_contact_email)?;
        let body = serde_json::to_vec(&CreatePortalBody {
            portal_name: &self.portal_name,
            portal_contact_email: &self.portal_contact_email,
            role_arn: self.role_arn.as_deref(),
            portal_description: self.portal_description.as_deref(),
            client_token: self.client_token.as_deref(),
        })?;
        Ok(ApiRequest::builder()
            .method(Method::POST)
            .operation("CreatePortal")
            .path("/portals".to_string())
            .host_prefix(MONITOR_PREFIX)
            .body(Bytes::from(body))
            .build())
    }
}

impl ApiCall for CreatePortal {
    type Response = CreatePortalResponse;
}

/// Builder for the `DescribePortal` operation.
#[derive(Clone, Debug)]
pub struct DescribePortal {
    handle: SharedHandle,
    portal_id: String,
}

impl DescribePortal {
    pub fn new(handle: SharedHandle, portal_id: impl Into<String>) -> Self {
        Self {
            handle,
            portal_id: portal_id.into(),
        }
    }
}

impl ToApiRequest for DescribePortal {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        check_required("portalId", &self.portal_id)?;
        Ok(ApiRequest::builder()
            .method(Method::GET)
            .operation("DescribePortal")
            .path(format!(
                "/portals/{}",
                url_encode_path_segment(&self.portal_id)
            ))
            .host_prefix(MONITOR_PREFIX)
            .build())
    }
}

impl ApiCall for DescribePortal {
    type Response = DescribePortalResponse;
}

/// Builder for the `DeletePortal` operation.
#[derive(Clone, Debug)]
pub struct DeletePortal {
    handle: SharedHandle,
    portal_id: String,
    client_token: Option<String>,
}

impl DeletePortal {
    pub fn new(handle: SharedHandle, portal_id: impl Into<String>) -> Self {
        Self {
            handle,
            portal_id: portal_id.into(),
            client_token: None,
        }
    }

    pub fn client_token(mut self, token: impl Into<String>) -> Self {
        self.client_token = Some(token.into());
        self
    }
}

impl ToApiRequest for DeletePortal {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        check_required("portalId", &self.portal_id)?;
        let mut query_params = Multimap::new();
        query_params.add_opt("clientToken", self.client_token.as_deref());
        Ok(ApiRequest::builder()
            .method(Method::DELETE)
            .operation("DeletePortal")
            .path(format!(
                "/portals/{}",
                url_encode_path_segment(&self.portal_id)
            ))
            .host_prefix(MONITOR_PREFIX)
            .query_params(query_params)
            .build())
    }
}

impl ApiCall for DeletePortal {
    type Response = DeletePortalResponse;
}
