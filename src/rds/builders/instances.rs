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

//! DB instance operations.

use crate::aws::client::SharedHandle;
use crate::aws::error::Error;
use crate::aws::request::{ApiCall, ApiRequest, ToApiRequest};
use crate::aws::utils::check_required;
use crate::rds::API_VERSION;
use crate::rds::query::QueryParams;
use crate::rds::response::{
    CreateDbInstanceResponse, DeleteDbInstanceResponse, DescribeDbInstancesResponse,
    ModifyDbInstanceResponse, RebootDbInstanceResponse,
};
use http::Method;

fn query_request(operation: &'static str, params: QueryParams) -> ApiRequest {
    ApiRequest::builder()
        .method(Method::POST)
        .operation(operation)
        .body(params.to_body())
        .build()
}

/// Builder for the `CreateDBInstance` operation.
#[derive(Clone, Debug)]
pub struct CreateDbInstance {
    handle: SharedHandle,
    db_instance_identifier: String,
    db_instance_class: String,
    engine: String,
    allocated_storage: Option<u32>,
    master_username: Option<String>,
    master_user_password: Option<String>,
    engine_version: Option<String>,
    availability_zone: Option<String>,
    multi_az: Option<bool>,
}

impl CreateDbInstance {
    pub fn new(
        handle: SharedHandle,
        db_instance_identifier: impl Into<String>,
        db_instance_class: impl Into<String>,
        engine: impl Into<String>,
    ) -> Self {
        Self {
            handle,
            db_instance_identifier: db_instance_identifier.into(),
            db_instance_class: db_instance_class.into(),
            engine: engine.into(),
            allocated_storage: None,
            master_username: None,
            master_user_password: None,
            engine_version: None,
            availability_zone: None,
            multi_az: None,
        }
    }

    pub fn allocated_storage(mut self, gib: u32) -> Self {
        self.allocated_storage = Some(gib);
        self
    }

    pub fn master_username(mut self, username: impl Into<String>) -> Self {
        self.master_username = Some(username.into());
        self
    }

    pub fn master_user_password(mut self, password: impl Into<String>) -> Self {
        self.master_user_password = Some(password.into());
        self
    }

    pub fn engine_version(mut self, version: impl Into<String>) -> Self {
        self.engine_version = Some(version.into());
        self
    }

    pub fn availability_zone(mut self, zone: impl Into<String>) -> Self {
        self.availability_zone = Some(zone.into());
        self
    }

    pub fn multi_az(mut self, multi_az: bool) -> Self {
        self.multi_az = Some(multi_az);
        self
    }
}

impl ToApiRequest for CreateDbInstance {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        check_required("DBInstanceIdentifier", &self.db_instance_identifier)?;
        check_required("DBInstanceClass", &self.db_instance_class)?;
        check_required("Engine", &self.engine)?;
        let mut params = QueryParams::new("CreateDBInstance", API_VERSION);
        params.add("DBInstanceIdentifier", &self.db_instance_identifier);
        params.add("DBInstanceClass", &self.db_instance_class);
        params.add("Engine", &self.engine);
        params.add_opt(
            "AllocatedStorage",
            self.allocated_storage.map(|v| v.to_string()),
        );
        params.add_opt("MasterUsername", self.master_username.as_deref());
        params.add_opt("MasterUserPassword", self.master_user_password.as_deref());
        params.add_opt("EngineVersion", self.engine_version.as_deref());
        params.add_opt("AvailabilityZone", self.availability_zone.as_deref());
        params.add_opt("MultiAZ", self.multi_az.map(|v| v.to_string()));
        Ok(query_request("CreateDBInstance", params))
    }
}

impl ApiCall for CreateDbInstance {
    type Response = CreateDbInstanceResponse;
}

/// Builder for the `DeleteDBInstance` operation.
#[derive(Clone, Debug)]
pub struct DeleteDbInstance {
    handle: SharedHandle,
    db_instance_identifier: String,
    skip_final_snapshot: Option<bool>,
    final_db_snapshot_identifier: Option<String>,
}

impl DeleteDbInstance {
    pub fn new(handle: SharedHandle, db_instance_identifier: impl Into<String>) -> Self {
        Self {
            handle,
            db_instance_identifier: db_instance_identifier.into(),
            skip_final_snapshot: None,
            final_db_snapshot_identifier: None,
        }
    }

    pub fn skip_final_snapshot(mut self, skip: bool) -> Self {
        self.skip_final_snapshot = Some(skip);
        self
    }

    pub fn final_db_snapshot_identifier(mut self, id: impl Into<String>) -> Self {
        self.final_db_snapshot_identifier = Some(id.into());
        self
    }
}

impl ToApiRequest for DeleteDbInstance {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        check_required("DBInstanceIdentifier", &self.db_instance_identifier)?;
        let mut params = QueryParams::new("DeleteDBInstance", API_VERSION);
        params.add("DBInstanceIdentifier", &self.db_instance_identifier);
        params.add_opt(
            "SkipFinalSnapshot",
            self.skip_final_snapshot.map(|v| v.to_string()),
        );
        params.add_opt(
            "FinalDBSnapshotIdentifier",
            self.final_db_snapshot_identifier.as_deref(),
        );
        Ok(query_request("DeleteDBInstance", params))
    }
}

impl ApiCall for DeleteDbInstance {
    type Response = DeleteDbInstanceResponse;
}

/// Builder for the `DescribeDBInstances` operation.
#[derive(Clone, Debug)]
pub struct DescribeDbInstances {
    handle: SharedHandle,
    db_instance_identifier: Option<String>,
    marker: Option<String>,
    max_records: Option<u32>,
}

impl DescribeDbInstances {
    pub fn new(handle: SharedHandle) -> Self {
        Self {
            handle,
            db_instance_identifier: None,
            marker: None,
            max_records: None,
        }
    }

    pub fn db_instance_identifier(mut self, id: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(id.into());
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

impl ToApiRequest for DescribeDbInstances {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        let mut params = QueryParams::new("DescribeDBInstances", API_VERSION);
        params.add_opt(
            "DBInstanceIdentifier",
            self.db_instance_identifier.as_deref(),
        );
        params.add_opt("Marker", self.marker.as_deref());
        params.add_opt("MaxRecords", self.max_records.map(|v| v.to_string()));
        Ok(query_request("DescribeDBInstances", params))
    }
}

impl ApiCall for DescribeDbInstances {
    type Response = DescribeDbInstancesResponse;
}

/// Builder for the `ModifyDBInstance` operation.
#[derive(Clone, Debug)]
pub struct ModifyDbInstance {
    handle: SharedHandle,
    db_instance_identifier: String,
    db_instance_class: Option<String>,
    allocated_storage: Option<u32>,
    master_user_password: Option<String>,
    apply_immediately: Option<bool>,
}

impl ModifyDbInstance {
    pub fn new(handle: SharedHandle, db_instance_identifier: impl Into<String>) -> Self {
        Self {
            handle,
            db_instance_identifier: db_instance_identifier.into(),
            db_instance_class: None,
            allocated_storage: None,
            master_user_password: None,
            apply_immediately: None,
        }
    }

    pub fn db_instance_class(mut self, class: impl Into<String>) -> Self {
        self.db_instance_class = Some(class.into());
        self
    }

    pub fn allocated_storage(mut self, gib: u32) -> Self {
        self.allocated_storage = Some(gib);
        self
    }

    pub fn master_user_password(mut self, password: impl Into<String>) -> Self {
        self.master_user_password = Some(password.into());
        self
    }

    pub fn apply_immediately(mut self, apply: bool) -> Self {
        self.apply_immediately = Some(apply);
        self
    }
}

impl ToApiRequest for ModifyDbInstance {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        check_required("DBInstanceIdentifier", &self.db_instance_identifier)?;
        let mut params = QueryParams::new("ModifyDBInstance", API_VERSION);
        params.add("DBInstanceIdentifier", &self.db_instance_identifier);
        params.add_opt("DBInstanceClass", self.db_instance_class.as_deref());
        params.add_opt(
            "AllocatedStorage",
            self.allocated_storage.map(|v| v.to_string()),
        );
        params.add_opt("MasterUserPassword", self.master_user_password.as_deref());
        params.add_opt(
            "ApplyImmediately",
            self.apply_immediately.map(|v| v.to_string()),
        );
        Ok(query_request("ModifyDBInstance", params))
    }
}

impl ApiCall for ModifyDbInstance {
    type Response = ModifyDbInstanceResponse;
}

/// Builder for the `RebootDBInstance` operation.
#[derive(Clone, Debug)]
pub struct RebootDbInstance {
    handle: SharedHandle,
    db_instance_identifier: String,
    force_failover: Option<bool>,
}

impl RebootDbInstance {
    pub fn new(handle: SharedHandle, db_instance_identifier: impl Into<String>) -> Self {
        Self {
            handle,
            db_instance_identifier: db_instance_identifier.into(),
            force_failover: None,
        }
    }

    pub fn force_failover(mut self, force: bool) -> Self {
        self.force_failover = Some(force);
        self
    }
}

impl ToApiRequest for RebootDbInstance {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        check_required("DBInstanceIdentifier", &self.db_instance_identifier)?;
        let mut params = QueryParams::new("RebootDBInstance", API_VERSION);
        params.add("DBInstanceIdentifier", &self.db_instance_identifier);
        params.add_opt("ForceFailover", self.force_failover.map(|v| v.to_string()));
        Ok(query_request("RebootDBInstance", params))
    }
}

impl ApiCall for RebootDbInstance {
    type Response = RebootDbInstanceResponse;
}
