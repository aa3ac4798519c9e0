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

//! Typed responses for the RDS operations, parsed from Query-protocol XML.

use crate::aws::error::Error;
use crate::aws::http::TransportResponse;
use crate::aws::request::FromApiResponse;
use xmltree::Element;

fn child_text(element: &Element, name: &str) -> Option<String> {
    element
        .get_child(name)
        .and_then(|e| e.get_text())
        .map(|t| t.to_string())
}

fn child_parse<T: std::str::FromStr>(element: &Element, name: &str) -> Option<T> {
    child_text(element, name).and_then(|t| t.parse().ok())
}

/// Unwraps `<OperationResponse><OperationResult>...` down to the result
/// element.
fn result_element(body: &[u8], result_name: &'static str) -> Result<Element, Error> {
    let mut root = Element::parse(body)?;
    root.take_child(result_name)
        .ok_or_else(|| Error::MalformedResponse(format!("missing element {result_name}")))
}

fn collect_children(parent: Option<&Element>, item_name: &str) -> Vec<Element> {
    let Some(parent) = parent else {
        return Vec::new();
    };
    parent
        .children
        .iter()
        .filter_map(|node| node.as_element())
        .filter(|el| el.name == item_name)
        .cloned()
        .collect()
}

#[derive(Clone, Debug, Default)]
pub struct DbEndpoint {
    pub address: Option<String>,
    pub port: Option<u16>,
}

#[derive(Clone, Debug, Default)]
pub struct DbInstance {
    pub db_instance_identifier: Option<String>,
    pub db_instance_class: Option<String>,
    pub engine: Option<String>,
    pub engine_version: Option<String>,
    pub db_instance_status: Option<String>,
    pub master_username: Option<String>,
    pub allocated_storage: Option<u32>,
    pub availability_zone: Option<String>,
    pub multi_az: Option<bool>,
    pub endpoint: Option<DbEndpoint>,
}

impl DbInstance {
    fn parse(element: &Element) -> Self {
        Self {
            db_instance_identifier: child_text(element, "DBInstanceIdentifier"),
            db_instance_class: child_text(element, "DBInstanceClass"),
            engine: child_text(element, "Engine"),
            engine_version: child_text(element, "EngineVersion"),
            db_instance_status: child_text(element, "DBInstanceStatus"),
            master_username: child_text(element, "MasterUsername"),
            allocated_storage: child_parse(element, "AllocatedStorage"),
            availability_zone: child_text(element, "AvailabilityZone"),
            multi_az: child_parse(element, "MultiAZ"),
            endpoint: element.get_child("Endpoint").map(|e| DbEndpoint {
                address: child_text(e, "Address"),
                port: child_parse(e, "Port"),
            }),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DbSnapshot {
    pub db_snapshot_identifier: Option<String>,
    pub db_instance_identifier: Option<String>,
    pub status: Option<String>,
    pub engine: Option<String>,
    pub snapshot_type: Option<String>,
    pub allocated_storage: Option<u32>,
    pub availability_zone: Option<String>,
}

impl DbSnapshot {
    fn parse(element: &Element) -> Self {
        Self {
            db_snapshot_identifier: child_text(element, "DBSnapshotIdentifier"),
            db_instance_identifier: child_text(element, "DBInstanceIdentifier"),
            status: child_text(element, "Status"),
            engine: child_text(element, "Engine"),
            snapshot_type: child_text(element, "SnapshotType"),
            allocated_storage: child_parse(element, "AllocatedStorage"),
            availability_zone: child_text(element, "AvailabilityZone"),
        }
    }
}

macro_rules! instance_response {
    ($ty:ident, $result:literal) => {
        #[derive(Clone, Debug, Default)]
        pub struct $ty {
            pub db_instance: Option<DbInstance>,
        }

        impl FromApiResponse for $ty {
            fn from_api_response(resp: TransportResponse) -> Result<Self, Error> {
                let result = result_element(&resp.body, $result)?;
                Ok(Self {
                    db_instance: result.get_child("DBInstance").map(DbInstance::parse),
                })
            }
        }
    };
}

macro_rules! snapshot_response {
    ($ty:ident, $result:literal) => {
        #[derive(Clone, Debug, Default)]
        pub struct $ty {
            pub db_snapshot: Option<DbSnapshot>,
        }

        impl FromApiResponse for $ty {
            fn from_api_response(resp: TransportResponse) -> Result<Self, Error> {
                let result = result_element(&resp.body, $result)?;
                Ok(Self {
                    db_snapshot: result.get_child("DBSnapshot").map(DbSnapshot::parse),
                })
            }
        }
    };
}

instance_response!(CreateDbInstanceResponse, "CreateDBInstanceResult");
instance_response!(DeleteDbInstanceResponse, "DeleteDBInstanceResult");
instance_response!(ModifyDbInstanceResponse, "ModifyDBInstanceResult");
instance_response!(RebootDbInstanceResponse, "RebootDBInstanceResult");
snapshot_response!(CreateDbSnapshotResponse, "CreateDBSnapshotResult");
snapshot_response!(CopyDbSnapshotResponse, "CopyDBSnapshotResult");

#[derive(Clone, Debug, Default)]
pub struct DescribeDbInstancesResponse {
    pub db_instances: Vec<DbInstance>,
    pub marker: Option<String>,
}

impl FromApiResponse for DescribeDbInstancesResponse {
    fn from_api_response(resp: TransportResponse) -> Result<Self, Error> {
        let result = result_element(&resp.body, "DescribeDBInstancesResult")?;
        let db_instances = collect_children(result.get_child("DBInstances"), "DBInstance")
            .iter()
            .map(DbInstance::parse)
            .collect();
        Ok(Self {
            db_instances,
            marker: child_text(&result, "Marker"),
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct DescribeDbSnapshotsResponse {
    pub db_snapshots: Vec<DbSnapshot>,
    pub marker: Option<String>,
}

impl FromApiResponse for DescribeDbSnapshotsResponse {
    fn from_api_response(resp: TransportResponse) -> Result<Self, Error> {
        let result = result_element(&resp.body, "DescribeDBSnapshotsResult")?;
        let db_snapshots = collect_children(result.get_child("DBSnapshots"), "DBSnapshot")
            .iter()
            .map(DbSnapshot::parse)
            .collect();
        Ok(Self {
            db_snapshots,
            marker: child_text(&result, "Marker"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::HeaderMap;

    fn resp(body: &'static str) -> TransportResponse {
        TransportResponse {
            status: 200,
            headers: HeaderMap::new(),
            body: Bytes::from_static(body.as_bytes()),
        }
    }

    #[test]
    fn describe_instances_parses_list_and_marker() {
        let body = r#"<DescribeDBInstancesResponse>
          <DescribeDBInstancesResult>
            <DBInstances>
              <DBInstance>
                <DBInstanceIdentifier>db-1</DBInstanceIdentifier>
                <DBInstanceClass>db.t3.micro</DBInstanceClass>
                <Engine>postgres</Engine>
                <DBInstanceStatus>available</DBInstanceStatus>
                <AllocatedStorage>20</AllocatedStorage>
                <MultiAZ>false</MultiAZ>
                <Endpoint>
                  <Address>db-1.abc.us-east-1.rds.amazonaws.com</Address>
                  <Port>5432</Port>
                </Endpoint>
              </DBInstance>
              <DBInstance>
                <DBInstanceIdentifier>db-2</DBInstanceIdentifier>
              </DBInstance>
            </DBInstances>
            <Marker>next-page</Marker>
          </DescribeDBInstancesResult>
        </DescribeDBInstancesResponse>"#;
        let parsed = DescribeDbInstancesResponse::from_api_response(resp(body)).unwrap();
        assert_eq!(parsed.db_instances.len(), 2);
        let first = &parsed.db_instances[0];
        assert_eq!(first.db_instance_identifier.as_deref(), Some("db-1"));
        assert_eq!(first.allocated_storage, Some(20));
        assert_eq!(first.multi_az, Some(false));
        assert_eq!(first.endpoint.as_ref().unwrap().port, Some(5432));
        assert_eq!(parsed.marker.as_deref(), Some("next-page"));
    }

    #[test]
    fn create_instance_parses_single_instance() {
        let body = r#"<CreateDBInstanceResponse>
          <CreateDBInstanceResult>
            <DBInstance>
              <DBInstanceIdentifier>db-new</DBInstanceIdentifier>
              <DBInstanceStatus>creating</DBInstanceStatus>
            </DBInstance>
          </CreateDBInstanceResult>
        </CreateDBInstanceResponse>"#;
        let parsed = CreateDbInstanceResponse::from_api_response(resp(body)).unwrap();
        let instance = parsed.db_instance.unwrap();
        assert_eq!(instance.db_instance_identifier.as_deref(), Some("db-new"));
        assert_eq!(instance.db_instance_status.as_deref(), Some("creating"));
    }

    #[test]
    fn missing_result_element_is_malformed() {
        let body = "<SomethingElse></SomethingElse>";
        assert!(matches!(
            DescribeDbSnapshotsResponse::from_api_response(resp(body)),
            Err(Error::MalformedResponse(_))
        ));
    }
}
