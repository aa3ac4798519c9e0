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
use crate::aws::error::Error;
use crate::aws::multimap_ext::MultimapExt;
use crate::aws::request::DEFAULT_SIGNING_REGION;
use crate::aws::signer::presign_v4;
use crate::aws::utils::utc_now;
use crate::rds::API_VERSION;
use crate::rds::builders::*;
use crate::rds::query::QueryParams;
use http::Method;
use std::sync::Arc;

const META: ServiceMeta = ServiceMeta {
    signing_name: "rds",
    endpoint_prefix: "rds",
    protocol: Protocol::Query,
    target_prefix: None,
    api_version: Some(API_VERSION),
};

/// Client for Amazon RDS.
#[derive(Clone, Debug)]
pub struct RdsClient {
    handle: SharedHandle,
}

impl From<Handle> for RdsClient {
    fn from(handle: Handle) -> Self {
        Self {
            handle: Arc::new(handle),
        }
    }
}

impl RdsClient {
    pub fn builder() -> ClientBuilder<Self> {
        ClientBuilder::new(META)
    }

    /// Redirects every subsequent call, on this client and its clones, to the
    /// given endpoint.
    pub fn override_endpoint(&self, endpoint: Endpoint) {
        self.handle.resolver.override_endpoint(endpoint);
    }

    pub fn create_db_instance(
        &self,
        db_instance_identifier: impl Into<String>,
        db_instance_class: impl Into<String>,
        engine: impl Into<String>,
    ) -> CreateDbInstance {
        CreateDbInstance::new(
            self.handle.clone(),
            db_instance_identifier,
            db_instance_class,
            engine,
        )
    }

    pub fn delete_db_instance(
        &self,
        db_instance_identifier: impl Into<String>,
    ) -> DeleteDbInstance {
        DeleteDbInstance::new(self.handle.clone(), db_instance_identifier)
    }

    pub fn describe_db_instances(&self) -> DescribeDbInstances {
        DescribeDbInstances::new(self.handle.clone())
    }

    pub fn modify_db_instance(
        &self,
        db_instance_identifier: impl Into<String>,
    ) -> ModifyDbInstance {
        ModifyDbInstance::new(self.handle.clone(), db_instance_identifier)
    }

    pub fn reboot_db_instance(
        &self,
        db_instance_identifier: impl Into<String>,
    ) -> RebootDbInstance {
        RebootDbInstance::new(self.handle.clone(), db_instance_identifier)
    }

    pub fn create_db_snapshot(
        &self,
        db_snapshot_identifier: impl Into<String>,
        db_instance_identifier: impl Into<String>,
    ) -> CreateDbSnapshot {
        CreateDbSnapshot::new(
            self.handle.clone(),
            db_snapshot_identifier,
            db_instance_identifier,
        )
    }

    pub fn copy_db_snapshot(
        &self,
        source_db_snapshot_identifier: impl Into<String>,
        target_db_snapshot_identifier: impl Into<String>,
    ) -> CopyDbSnapshot {
        CopyDbSnapshot::new(
            self.handle.clone(),
            source_db_snapshot_identifier,
            target_db_snapshot_identifier,
        )
    }

    pub fn describe_db_snapshots(&self) -> DescribeDbSnapshots {
        DescribeDbSnapshots::new(self.handle.clone())
    }

    /// Converts a Query-protocol request into a presigned URL.
    ///
    /// Used as the `PreSignedUrl` parameter of cross-region operations such
    /// as [`CopyDbSnapshot`]; the signed request is a `GET` against the
    /// client's endpoint with all parameters in the query string.
    pub fn presigned_request_url(
        &self,
        params: QueryParams,
        expires: u32,
    ) -> Result<String, Error> {
        let endpoint = self.handle.resolver.resolve(None)?;
        let creds = self.handle.credentials().ok_or(Error::CredentialsRequired)?;
        let region = self
            .handle
            .resolver
            .region()
            .unwrap_or(DEFAULT_SIGNING_REGION);

        let host = endpoint.authority();
        let mut query_params = params.into_multimap();
        presign_v4(
            self.handle.meta.signing_name,
            &Method::GET,
            &host,
            "/",
            region,
            &mut query_params,
            &creds.access_key,
            &creds.secret_key,
            creds.session_token.as_deref(),
            utc_now(),
            expires,
        );

        Ok(format!("{}/?{}", endpoint, query_params.to_query_string()))
    }
}
