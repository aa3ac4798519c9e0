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

//! Request execution pipeline.
//!
//! Every operation builder converts itself into an [`ApiRequest`] and runs it
//! through [`execute`]: resolve the endpoint, stamp the protocol headers,
//! sign with SigV4 and hand the prepared request to the transport. Responses
//! with a non-2xx status are turned into [`Error::Service`] values here, so
//! operation code only ever sees its own success shape.

use crate::aws::client::{Protocol, SharedHandle};
use crate::aws::error::{AwsErrorResponse, Error};
use crate::aws::header_constants::{
    CONTENT_TYPE, HOST, USER_AGENT, X_AMZ_CONTENT_SHA256, X_AMZ_DATE, X_AMZ_SECURITY_TOKEN,
    X_AMZ_TARGET, X_AMZN_ERROR_TYPE,
};
use crate::aws::http::TransportResponse;
use crate::aws::multimap_ext::{Multimap, MultimapExt};
use crate::aws::signer::sign_v4;
use crate::aws::utils::{EMPTY_SHA256, sha256_hash, to_amz_date, utc_now};
use async_trait::async_trait;
use bytes::Bytes;
use http::Method;
use serde::Deserialize;
use typed_builder::TypedBuilder;

/// Fallback signing region for clients configured with an explicit endpoint
/// but no region.
pub const DEFAULT_SIGNING_REGION: &str = "us-east-1";

/// Protocol-independent description of one prepared operation call.
#[derive(Debug, TypedBuilder)]
pub struct ApiRequest {
    pub method: Method,
    /// Operation name as the service knows it, e.g. `DescribeAsset`.
    pub operation: &'static str,
    #[builder(default = String::from("/"))]
    pub path: String,
    /// Host prefix (`api.`, `data.`, `monitor.`) applied to region-derived
    /// hosts only.
    #[builder(default, setter(strip_option))]
    pub host_prefix: Option<&'static str>,
    #[builder(default)]
    pub query_params: Multimap,
    #[builder(default)]
    pub headers: Multimap,
    #[builder(default, setter(strip_option))]
    pub body: Option<Bytes>,
}

/// Conversion of an operation builder into an [`ApiRequest`].
///
/// Fails without side effects when a required parameter is missing.
pub trait ToApiRequest: Send + Sync {
    fn handle(&self) -> &SharedHandle;
    fn to_api_request(&self) -> Result<ApiRequest, Error>;
}

/// Conversion of a successful wire response into the typed response.
pub trait FromApiResponse: Sized + Send {
    fn from_api_response(resp: TransportResponse) -> Result<Self, Error>;
}

/// Executable operation; implemented by every operation builder.
#[async_trait]
pub trait ApiCall: ToApiRequest {
    type Response: FromApiResponse;

    /// Runs the operation and awaits its typed response.
    async fn send(&self) -> Result<Self::Response, Error> {
        let request = self.to_api_request()?;
        let resp = execute(self.handle(), request).await?;
        Self::Response::from_api_response(resp)
    }
}

/// Implements [`FromApiResponse`] for JSON response types.
///
/// An empty body (some operations answer `204`/`202` with no content)
/// deserializes to the type's `Default` value.
#[macro_export]
macro_rules! json_response {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::aws::request::FromApiResponse for $ty {
                fn from_api_response(
                    resp: $crate::aws::http::TransportResponse,
                ) -> Result<Self, $crate::aws::error::Error> {
                    if resp.body.is_empty() {
                        return Ok(<$ty as Default>::default());
                    }
                    resp.json()
                }
            }
        )+
    };
}

/// Resolves, signs and sends one request; classifies the response status.
pub async fn execute(
    handle: &SharedHandle,
    request: ApiRequest,
) -> Result<TransportResponse, Error> {
    let endpoint = handle.resolver.resolve(request.host_prefix)?;
    let creds = handle.credentials();
    let region = handle
        .resolver
        .region()
        .unwrap_or(DEFAULT_SIGNING_REGION)
        .to_string();

    let content_sha256 = match &request.body {
        Some(body) => sha256_hash(body),
        None => EMPTY_SHA256.to_string(),
    };

    let mut headers = request.headers;
    headers.add(HOST, endpoint.authority());
    headers.add(USER_AGENT, handle.user_agent.clone());
    headers.add(CONTENT_TYPE, handle.meta.protocol.content_type());
    headers.add(X_AMZ_CONTENT_SHA256, content_sha256.clone());

    let date = utc_now();
    headers.add(X_AMZ_DATE, to_amz_date(date));
    if matches!(
        handle.meta.protocol,
        Protocol::AwsJson1_0 | Protocol::AwsJson1_1
    ) && let Some(prefix) = handle.meta.target_prefix
    {
        headers.add(X_AMZ_TARGET, format!("{}.{}", prefix, request.operation));
    }

    // Anonymous clients (no credential provider) send unsigned requests.
    if let Some(creds) = &creds {
        if let Some(token) = &creds.session_token {
            headers.add(X_AMZ_SECURITY_TOKEN, token.clone());
        }
        sign_v4(
            handle.meta.signing_name,
            &request.method,
            &request.path,
            &region,
            &mut headers,
            &request.query_params,
            &creds.access_key,
            &creds.secret_key,
            &content_sha256,
            date,
        );
    }

    let mut url = endpoint.to_string();
    url.push_str(&request.path);
    let query = request.query_params.to_query_string();
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }

    log::debug!("{} {} {}", request.operation, request.method, url);

    let resp = handle
        .transport
        .execute(crate::aws::http::TransportRequest {
            method: request.method,
            url,
            headers,
            body: request.body,
        })
        .await?;

    classify_response(handle.meta.protocol, request.operation, resp)
}

fn classify_response(
    protocol: Protocol,
    operation: &'static str,
    resp: TransportResponse,
) -> Result<TransportResponse, Error> {
    if (200..300).contains(&resp.status) {
        return Ok(resp);
    }

    let error = match protocol {
        Protocol::Query => parse_xml_error(&resp),
        _ => parse_json_error(&resp),
    };

    match error {
        Some(mut error) => {
            error.status = resp.status;
            if error.request_id.is_empty() {
                error.request_id = resp.request_id();
            }
            log::debug!("{operation} failed: {error}");
            Err(Error::Service(error))
        }
        None => Err(Error::ServerError(resp.status)),
    }
}

/// Trims the namespace (`com.amazonaws...#Code`) and any trailing URI hint
/// (`Code:http://...`) from an error type string.
fn strip_error_code(raw: &str) -> &str {
    let raw = raw.split(':').next().unwrap_or(raw);
    match raw.rsplit_once('#') {
        Some((_, code)) => code,
        None => raw,
    }
}

#[derive(Debug, Default, Deserialize)]
struct JsonErrorBody {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

fn parse_json_error(resp: &TransportResponse) -> Option<AwsErrorResponse> {
    let body: JsonErrorBody = if resp.body.is_empty() {
        JsonErrorBody::default()
    } else {
        serde_json::from_slice(&resp.body).ok()?
    };

    // The modeled error type may arrive in a header, a body field or both.
    let code = resp
        .header(X_AMZN_ERROR_TYPE)
        .or(body.error_type.as_deref())
        .map(strip_error_code)?
        .to_string();

    Some(AwsErrorResponse {
        code,
        message: body.message.unwrap_or_default(),
        request_id: String::new(),
        status: 0,
    })
}

fn parse_xml_error(resp: &TransportResponse) -> Option<AwsErrorResponse> {
    let root = xmltree::Element::parse(resp.body.as_ref()).ok()?;
    let error = root.get_child("Error")?;
    let text = |name: &str| {
        error
            .get_child(name)
            .and_then(|e| e.get_text())
            .map(|t| t.to_string())
            .unwrap_or_default()
    };
    let code = text("Code");
    if code.is_empty() {
        return None;
    }
    Some(AwsErrorResponse {
        code,
        message: text("Message"),
        request_id: root
            .get_child("RequestId")
            .and_then(|e| e.get_text())
            .map(|t| t.to_string())
            .unwrap_or_default(),
        status: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_is_stripped_of_namespace_and_uri() {
        assert_eq!(
            strip_error_code("com.amazonaws.iotsitewise#ResourceNotFoundException"),
            "ResourceNotFoundException"
        );
        assert_eq!(
            strip_error_code("ThrottlingException:http://internal.amazon.com/x"),
            "ThrottlingException"
        );
        assert_eq!(strip_error_code("AccessDenied"), "AccessDenied");
    }

    #[test]
    fn xml_error_response_is_parsed() {
        let body = br#"<ErrorResponse>
            <Error>
                <Type>Sender</Type>
                <Code>DBInstanceNotFound</Code>
                <Message>DBInstance db-1 not found.</Message>
            </Error>
            <RequestId>req-123</RequestId>
        </ErrorResponse>"#;
        let resp = TransportResponse {
            status: 404,
            headers: http::HeaderMap::new(),
            body: bytes::Bytes::from_static(body),
        };
        let error = parse_xml_error(&resp).unwrap();
        assert_eq!(error.code, "DBInstanceNotFound");
        assert_eq!(error.message, "DBInstance db-1 not found.");
        assert_eq!(error.request_id, "req-123");
    }

    #[test]
    fn json_error_prefers_header_code() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            "x-amzn-errortype",
            "ValidationException".parse().unwrap(),
        );
        let resp = TransportResponse {
            status: 400,
            headers,
            body: bytes::Bytes::from_static(
                br#"{"__type":"aws#OtherException","message":"bad input"}"#,
            ),
        };
        let error = parse_json_error(&resp).unwrap();
        assert_eq!(error.code, "ValidationException");
        assert_eq!(error.message, "bad input");
    }
}
