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

use super::endpoint::{Endpoint, EndpointResolver};
use super::error::Error;

#[test]
fn parse_https_endpoint() {
    let e: Endpoint = "https://iotsitewise.us-east-1.amazonaws.com".parse().unwrap();
    assert!(e.https);
    assert_eq!(e.host, "iotsitewise.us-east-1.amazonaws.com");
    assert_eq!(e.port, 0);
    assert_eq!(e.to_string(), "https://iotsitewise.us-east-1.amazonaws.com");
}

#[test]
fn parse_endpoint_with_port() {
    let e: Endpoint = "http://localhost:4566".parse().unwrap();
    assert!(!e.https);
    assert_eq!(e.host, "localhost");
    assert_eq!(e.port, 4566);
    assert_eq!(e.authority(), "localhost:4566");
}

#[test]
fn parse_endpoint_drops_default_port() {
    let e: Endpoint = "https://rds.amazonaws.com:443".parse().unwrap();
    assert_eq!(e.port, 0);
    assert_eq!(e.authority(), "rds.amazonaws.com");
}

#[test]
fn parse_endpoint_rejects_path_and_bad_scheme() {
    assert!("https://example.com/v1".parse::<Endpoint>().is_err());
    assert!("ftp://example.com".parse::<Endpoint>().is_err());
}

#[test]
fn region_derives_host_with_prefix() {
    let resolver = EndpointResolver::new("iotsitewise", Some("us-east-1".into()), None);
    let e = resolver.resolve(Some("api.")).unwrap();
    assert_eq!(e.host, "api.iotsitewise.us-east-1.amazonaws.com");
    assert!(e.https);

    let e = resolver.resolve(None).unwrap();
    assert_eq!(e.host, "iotsitewise.us-east-1.amazonaws.com");
}

#[test]
fn explicit_endpoint_wins_and_ignores_prefix() {
    let endpoint: Endpoint = "http://localhost:4566".parse().unwrap();
    let resolver =
        EndpointResolver::new("iotsitewise", Some("us-east-1".into()), Some(endpoint.clone()));
    let resolved = resolver.resolve(Some("data.")).unwrap();
    assert_eq!(resolved, endpoint);
}

#[test]
fn unconfigured_resolver_fails_resolution() {
    let resolver = EndpointResolver::new("voiceid", None, None);
    match resolver.resolve(None) {
        Err(Error::EndpointResolution(msg)) => assert!(msg.contains("voiceid")),
        other => panic!("expected EndpointResolution error, got {other:?}"),
    }
}

#[test]
fn override_endpoint_takes_effect_for_later_calls() {
    let resolver = EndpointResolver::new("rds", Some("us-west-2".into()), None);
    assert_eq!(
        resolver.resolve(None).unwrap().host,
        "rds.us-west-2.amazonaws.com"
    );

    resolver.override_endpoint("https://rds.example.test".parse().unwrap());
    assert_eq!(resolver.resolve(None).unwrap().host, "rds.example.test");
    // host prefixes no longer apply once an endpoint is pinned
    assert_eq!(
        resolver.resolve(Some("api.")).unwrap().host,
        "rds.example.test"
    );
}
