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

//! Error definitions shared by all service clients.
//!
//! Every failure, whether detected locally (missing parameter, unresolvable
//! endpoint) or reported by the service, is returned to the caller as a
//! normal [`Error`] value. Nothing on the request path panics and nothing is
//! retried here.

use std::fmt;
use thiserror::Error;

/// Error reported by an AWS service for a request that reached the wire.
#[derive(Clone, Debug, Default)]
pub struct AwsErrorResponse {
    /// Error code, e.g. `ResourceNotFoundException` or `Throttling`.
    pub code: String,
    pub message: String,
    pub request_id: String,
    /// HTTP status the service answered with.
    pub status: u16,
}

impl fmt::Display for AwsErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "service returned an error; code: {}, message: {}, request_id: {}, status: {}",
            self.code, self.message, self.request_id, self.status
        )
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// A required request field was not set; detected before endpoint
    /// resolution, so no network call is made.
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// The endpoint resolver could not produce a target host; no network
    /// call is made.
    #[error("endpoint resolution failed: {0}")]
    EndpointResolution(String),

    /// The operation requires signing credentials, but the client has no
    /// credential provider (or the provider returned none).
    #[error("credentials are required for this operation")]
    CredentialsRequired,

    /// A non-2xx answer from the service, parsed from the wire.
    #[error("{0}")]
    Service(AwsErrorResponse),

    /// Transport-level failure reported by the HTTP client.
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    /// The service answered with a status this client cannot classify.
    #[error("server failed with HTTP status code {0}")]
    ServerError(u16),

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error(transparent)]
    InvalidUri(#[from] http::uri::InvalidUri),

    #[error(transparent)]
    Http(#[from] http::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    XmlParse(#[from] xmltree::ParseError),

    #[error("malformed response body: {0}")]
    MalformedResponse(String),
}

impl Error {
    /// True for failures the client produced before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Error::MissingParameter(_)
                | Error::EndpointResolution(_)
                | Error::CredentialsRequired
                | Error::InvalidEndpoint(_)
        )
    }

    /// Returns the service error response, if this is a service error.
    pub fn as_service_error(&self) -> Option<&AwsErrorResponse> {
        match self {
            Error::Service(e) => Some(e),
            _ => None,
        }
    }
}
