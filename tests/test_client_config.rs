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

mod common;

use awslite::aws::creds::StaticProvider;
use awslite::aws::error::Error;
use awslite::aws::request::ApiCall;
use awslite::aws::task;
use awslite::iotsitewise::IotSiteWiseClient;
use common::MockTransport;

#[tokio::test]
async fn client_without_region_or_endpoint_fails_to_resolve() {
    let transport = MockTransport::new();
    let client: IotSiteWiseClient = IotSiteWiseClient::builder()
        .provider(Some(StaticProvider::new("ak", "sk", None)))
        .transport(transport.clone())
        .build()
        .unwrap();

    let err = client.describe_asset("a-1").send().await.unwrap_err();
    assert!(matches!(err, Error::EndpointResolution(_)));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn explicit_endpoint_is_used_verbatim() {
    let transport = MockTransport::new();
    let client: IotSiteWiseClient = IotSiteWiseClient::builder()
        .endpoint("http://localhost:8080".parse().unwrap())
        .provider(Some(StaticProvider::new("ak", "sk", None)))
        .transport(transport.clone())
        .build()
        .unwrap();

    client.describe_asset("a-1").send().await.unwrap();
    // Host prefixes only apply to region-derived hosts.
    assert_eq!(transport.last().url, "http://localhost:8080/assets/a-1");
}

#[tokio::test]
async fn override_endpoint_redirects_subsequent_calls() {
    let transport = MockTransport::new();
    let client: IotSiteWiseClient = IotSiteWiseClient::builder()
        .region("us-east-1")
        .provider(Some(StaticProvider::new("ak", "sk", None)))
        .transport(transport.clone())
        .build()
        .unwrap();

    client.describe_asset("a-1").send().await.unwrap();
    assert_eq!(
        transport.last().url,
        "https://api.iotsitewise.us-east-1.amazonaws.com/assets/a-1"
    );

    client.override_endpoint("https://sitewise.internal:9443".parse().unwrap());

    client.describe_asset("a-1").send().await.unwrap();
    assert_eq!(
        transport.last().url,
        "https://sitewise.internal:9443/assets/a-1"
    );

    // Clones share the override.
    let clone = client.clone();
    clone.describe_asset("a-2").send().await.unwrap();
    assert_eq!(
        transport.last().url,
        "https://sitewise.internal:9443/assets/a-2"
    );
}

#[tokio::test]
async fn anonymous_client_sends_unsigned_requests() {
    let transport = MockTransport::new();
    let client: IotSiteWiseClient = IotSiteWiseClient::builder()
        .region("us-east-1")
        .provider(None::<StaticProvider>)
        .transport(transport.clone())
        .build()
        .unwrap();

    client.describe_asset("a-1").send().await.unwrap();
    let request = transport.last();
    assert!(request.headers.get("Authorization").is_none());
    assert!(request.headers.get("Host").is_some());
}

#[tokio::test]
async fn submitted_call_matches_inline_send() {
    let transport = MockTransport::new();
    let client: IotSiteWiseClient = IotSiteWiseClient::builder()
        .region("us-east-1")
        .provider(Some(StaticProvider::new("ak", "sk", None)))
        .transport(transport.clone())
        .build()
        .unwrap();
    transport.push_response(200, r#"{"assetId":"a-1","assetName":"pump-7"}"#);

    let resp = task::submit(client.describe_asset("a-1"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(resp.asset_name.as_deref(), Some("pump-7"));
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn submitted_call_still_checks_parameters_first() {
    let transport = MockTransport::new();
    let client: IotSiteWiseClient = IotSiteWiseClient::builder()
        .region("us-east-1")
        .provider(Some(StaticProvider::new("ak", "sk", None)))
        .transport(transport.clone())
        .build()
        .unwrap();

    let err = task::submit(client.describe_asset(""))
        .await
        .unwrap()
        .unwrap_err();
    assert!(matches!(err, Error::MissingParameter("assetId")));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn callback_receives_the_result() {
    let transport = MockTransport::new();
    let client: IotSiteWiseClient = IotSiteWiseClient::builder()
        .region("us-east-1")
        .provider(Some(StaticProvider::new("ak", "sk", None)))
        .transport(transport.clone())
        .build()
        .unwrap();
    transport.push_response(200, r#"{"assetId":"a-1"}"#);

    let (tx, rx) = tokio::sync::oneshot::channel();
    task::submit_with_callback(client.describe_asset("a-1"), move |result| {
        let _ = tx.send(result);
    })
    .await
    .unwrap();

    let resp = rx.await.unwrap().unwrap();
    assert_eq!(resp.asset_id.as_deref(), Some("a-1"));
}

#[tokio::test]
async fn custom_user_agent_is_forwarded() {
    let transport = MockTransport::new();
    let client: IotSiteWiseClient = IotSiteWiseClient::builder()
        .region("us-east-1")
        .provider(Some(StaticProvider::new("ak", "sk", None)))
        .transport(transport.clone())
        .user_agent("fleet-sync/2.3")
        .build()
        .unwrap();

    client.describe_asset("a-1").send().await.unwrap();
    assert_eq!(
        transport.last().headers.get("User-Agent").unwrap(),
        "fleet-sync/2.3"
    );
}
