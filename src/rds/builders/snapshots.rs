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

//! DB snapshot operations.

use crate::aws::client::SharedHandle;
use crate::aws::error::Error;
use crate::aws::request::{ApiCall, ApiRequest, ToApiRequest};
use crate::aws::utils::check_required;
use crate::rds::API_VERSION;
use crate::rds::query::QueryParams;
use crate::rds::response::{
    CopyDbSnapshotResponse, CreateDbSnapshotResponse, DescribeDbSnapshotsResponse,
};
use http::Method;

fn query_request(operation: &'static str, params: QueryParams) -> ApiRequest {
    ApiRequest::builder()
        .method(Method::POST)
        .operation(operation)
        .body(params.to_body())
        .build()
}

/// Builder for the `CreateDBSnapshot` operation.
#[derive(Clone, Debug)]
pub struct CreateDbSnapshot {
    handle: SharedHandle,
    db_snapshot_identifier: String,
    db_instance_identifier: String,
}

impl CreateDbSnapshot {
    pub fn new(
        handle: SharedHandle,
        db_snapshot_identifier: impl Into<String>,
        db_instance_identifier: impl Into<String>,
    ) -> Self {
        Self {
            handle,
            db_snapshot_identifier: db_snapshot_identifier.into(),
            db_instance_identifier: db_instance_identifier.into(),
        }
    }
}

impl ToApiRequest for CreateDbSnapshot {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        check_required("DBSnapshotIdentifier", &self.db_snapshot_identifier)?;
        check_required("DBInstanceIdentifier", &self.db_instance_identifier)?;
        let mut params = QueryParams::new("CreateDBSnapshot", API_VERSION);
        params.add("DBSnapshotIdentifier", &self.db_snapshot_identifier);
        params.add("DBInstanceIdentifier", &self.db_instance_identifier);
        Ok(query_request("CreateDBSnapshot", params))
    }
}

impl ApiCall for CreateDbSnapshot {
    type Response = CreateDbSnapshotResponse;
}

/// Builder for the `CopyDBSnapshot` operation.
///
/// Cross-region encrypted copies need a presigned source request; see
/// [`RdsClient::presigned_request_url`](crate::rds::RdsClient::presigned_request_url).
#[derive(Clone, Debug)]
pub struct CopyDbSnapshot {
    handle: SharedHandle,
    source_db_snapshot_identifier: String,
    target_db_snapshot_identifier: String,
    kms_key_id: Option<String>,
    pre_signed_url: Option<String>,
}

impl CopyDbSnapshot {
    pub fn new(
        handle: SharedHandle,
        source_db_snapshot_identifier: impl Into<String>,
        target_db_snapshot_identifier: impl Into<String>,
    ) -> Self {
        Self {
            handle,
            source_db_snapshot_identifier: source_db_snapshot_identifier.into(),
            target_db_snapshot_identifier: target_db_snapshot_identifier.into(),
            kms_key_id: None,
            pre_signed_url: None,
        }
    }

    pub fn kms_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.kms_key_id = Some(key_id.into());
        self
    }

    pub fn pre_signed_url(mut self, url: impl Into<String>) -> Self {
        self.pre_signed_url = Some(url.into());
        self
    }
}

impl ToApiRequest for CopyDbSnapshot {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        check_required(
            "SourceDBSnapshotIdentifier",
            &self.source_db_snapshot_identifier,
        )?;
        check_required(
            "TargetDBSnapshotIdentifier",
            &self.target_db_snapshot_identifier,
        )?;
        let mut params = QueryParams::new("CopyDBSnapshot", API_VERSION);
        params.add(
            "SourceDBSnapshotIdentifier",
            &self.source_db_snapshot_identifier,
        );
        params.add(
            "TargetDBSnapshotIdentifier",
            &self.target_db_snapshot_identifier,
        );
        params.add_opt("KmsKeyId", self.kms_key_id.as_deref());
        params.add_opt("PreSignedUrl", self.pre_signed_url.as_deref());
        Ok(query_request("CopyDBSnapshot", params))
    }
}

impl ApiCall for CopyDbSnapshot {
    type Response = CopyDbSnapshotResponse;
}

/// Builder for the `DescribeDBSnapshots` operation.
#[derive(Clone, Debug)]
pub struct DescribeDbSnapshots {
    handle: SharedHandle,
    db_instance_identifier: Option<String>,
    db_snapshot_identifier: Option<String>,
    snapshot_type: Option<String>,
    marker: Option<String>,
    max_records: Option<u32>,
}

impl DescribeDbSnapshots {
    pub fn new(handle: SharedHandle) -> Self {
        Self {
            handle,
            db_instance_identifier: None,
            db_snapshot_identifier: None,
            snapshot_type: None,
            marker: None,
            max_records: None,
        }
    }

    pub fn db_instance_identifier(mut self, id: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(id.into());
        self
    }

    pub fn db_snapshot_identifier(mut self, id: impl Into<String>) -> Self {
        self.db_snapshot_identifier = Some(id.into());
        self
    }

    /// `automated`, `manual`, `shared` or `public`.
    pub fn snapshot_type(mut self, snapshot_type: impl Into<String>) -> Self {
        self.snapshot_type = Some(snapshot_type.into());
        self
    }

    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    pub fn max_records(mut self, max: u32) -> Self {
        self.max_records = Some(max);
        self
    }
}

impl ToApiRequest for DescribeDbSnapshots {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        let mut params = QueryParams::new("DescribeDBSnapshots", API_VERSION);
        params.add_opt(
            "DBInstanceIdentifier",
            self.db_instance_identifier.as_deref(),
        );
        params.add_opt(
            "DBSnapshotIdentifier",
            self.db_snapshot_identifier.as_deref(),
        );
        params.add_opt("SnapshotType", self.snapshot_type.as_deref());
        params.add_opt("Marker", self.marker.as_deref());
        params.add_opt("MaxRecords", self.max_records.map(|v| v.to_string()));
        Ok(query_request("DescribeDBSnapshots", params))
    }
}

impl ApiCall for DescribeDbSnapshots {
    type Response = DescribeDbSnapshotsResponse;
}
