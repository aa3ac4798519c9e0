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

//! HTTP transport abstraction.
//!
//! The request pipeline talks to the wire through the [`Transport`] trait so
//! tests can substitute a recording transport. The production implementation
//! [`HttpTransport`] wraps a pooled `reqwest` client.

use crate::aws::error::Error;
use crate::aws::header_constants::X_AMZN_REQUEST_ID;
use crate::aws::multimap_ext::Multimap;
use async_trait::async_trait;
use bytes::Bytes;
use http::Method;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// A fully prepared request: signed headers, final URL, serialized body.
#[derive(Clone, Debug)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: Multimap,
    pub body: Option<Bytes>,
}

/// Raw response as read from the wire.
#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TransportResponse {
    /// First value of the given header, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// AWS request id echoed by the service, empty when absent.
    pub fn request_id(&self) -> String {
        self.header(X_AMZN_REQUEST_ID).unwrap_or_default().to_string()
    }

    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Sends one prepared request and reads the full response.
///
/// Implementations must not retry and must not interpret the response; error
/// classification happens in the request pipeline.
#[async_trait]
pub trait Transport: std::fmt::Debug + Send + Sync {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, Error>;
}

/// Connection pool tuning for the underlying HTTP client.
#[derive(Clone, Debug)]
pub struct ConnectionPoolConfig {
    /// Maximum idle connections kept per host.
    pub max_idle_per_host: usize,
    /// How long an idle pooled connection is kept alive.
    pub idle_timeout: Duration,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
}

impl Default for ConnectionPoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 16,
            idle_timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Production transport backed by `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ConnectionPoolConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(config.max_idle_per_host)
            .pool_idle_timeout(config.idle_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self { client })
    }
}

fn to_header_map(headers: &Multimap) -> Result<HeaderMap, Error> {
    let mut map = HeaderMap::new();
    for (key, values) in headers.iter_all() {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(http::Error::from)?;
        for value in values {
            let value = HeaderValue::from_str(value).map_err(http::Error::from)?;
            map.append(name.clone(), value);
        }
    }
    Ok(map)
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, Error> {
        log::debug!("sending {} {}", request.method, request.url);

        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(to_header_map(&request.headers)?);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        log::debug!("received HTTP {} ({} bytes)", status, body.len());

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
