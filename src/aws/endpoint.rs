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

//! Endpoint representation and resolution.
//!
//! A client either carries an explicit [`Endpoint`] (set at construction or
//! through [`EndpointResolver::override_endpoint`]) or derives
//! `{prefix}.{region}.amazonaws.com` from its configured region. Operations
//! may ask for a host prefix (`api.`, `data.`, `monitor.`); the prefix is
//! applied only to region-derived hosts, an explicit endpoint is always used
//! verbatim.

use crate::aws::error::Error;
use http::Uri;
use std::fmt;
use std::str::FromStr;
use std::sync::RwLock;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Scheme, host and optional port of a service endpoint.
pub struct Endpoint {
    pub https: bool,
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    /// Value for the `Host` header, including the port when non-default.
    pub fn authority(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }
        f.write_str(&self.authority())
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    /// Parses an endpoint from a URL string.
    ///
    /// # Examples
    ///
    /// ```
    /// use awslite::aws::endpoint::Endpoint;
    ///
    /// let e: Endpoint = "https://api.iotsitewise.us-east-1.amazonaws.com".parse().unwrap();
    /// let e: Endpoint = "http://localhost:4566".parse().unwrap();
    /// ```
    fn from_str(s: &str) -> Result<Self, Error> {
        let uri = s.parse::<Uri>()?;

        let https = match uri.scheme() {
            None => true,
            Some(scheme) => match scheme.as_str() {
                "http" => false,
                "https" => true,
                _ => {
                    return Err(Error::InvalidEndpoint(
                        "scheme must be http or https".into(),
                    ));
                }
            },
        };

        let host = match uri.host() {
            Some(h) => h.to_string(),
            None => {
                return Err(Error::InvalidEndpoint("valid host must be provided".into()));
            }
        };

        let mut port = uri.port_u16().unwrap_or(0);
        if (https && port == 443) || (!https && port == 80) {
            port = 0;
        }

        if uri.path() != "/" && !uri.path().is_empty() {
            return Err(Error::InvalidEndpoint(
                "path must be empty for an endpoint".into(),
            ));
        }
        if uri.query().is_some() {
            return Err(Error::InvalidEndpoint(
                "query must be empty for an endpoint".into(),
            ));
        }

        Ok(Endpoint { https, host, port })
    }
}

/// Computes the target endpoint for each request of one service client.
#[derive(Debug)]
pub struct EndpointResolver {
    endpoint_prefix: &'static str,
    region: Option<String>,
    /// Explicit endpoint; shared so an override is seen by all client clones.
    endpoint: RwLock<Option<Endpoint>>,
}

impl EndpointResolver {
    pub fn new(
        endpoint_prefix: &'static str,
        region: Option<String>,
        endpoint: Option<Endpoint>,
    ) -> Self {
        Self {
            endpoint_prefix,
            region,
            endpoint: RwLock::new(endpoint),
        }
    }

    /// Region the resolver derives hosts from, if configured.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Replaces the endpoint used by every subsequent call.
    pub fn override_endpoint(&self, endpoint: Endpoint) {
        let mut guard = self.endpoint.write().unwrap_or_else(|p| p.into_inner());
        *guard = Some(endpoint);
    }

    /// Resolves the endpoint for one request.
    ///
    /// An explicit endpoint wins and is returned verbatim. Otherwise the host
    /// is derived from the configured region, with `host_prefix` applied.
    /// Fails with [`Error::EndpointResolution`] when neither is configured;
    /// the caller must not touch the network in that case.
    pub fn resolve(&self, host_prefix: Option<&str>) -> Result<Endpoint, Error> {
        {
            let guard = self.endpoint.read().unwrap_or_else(|p| p.into_inner());
            if let Some(endpoint) = guard.as_ref() {
                return Ok(endpoint.clone());
            }
        }

        let region = self.region.as_deref().ok_or_else(|| {
            Error::EndpointResolution(format!(
                "no region or endpoint configured for service {}",
                self.endpoint_prefix
            ))
        })?;
        if region.trim().is_empty() {
            return Err(Error::EndpointResolution(format!(
                "empty region configured for service {}",
                self.endpoint_prefix
            )));
        }

        let mut host = String::new();
        if let Some(prefix) = host_prefix {
            host.push_str(prefix);
        }
        host.push_str(self.endpoint_prefix);
        host.push('.');
        host.push_str(region);
        host.push_str(".amazonaws.com");

        Ok(Endpoint {
            https: true,
            host,
            port: 0,
        })
    }
}
