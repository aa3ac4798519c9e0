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

//! Service client configuration.
//!
//! Each service module exposes a thin client type wrapping a [`Handle`]; the
//! generic [`ClientBuilder`] assembles the handle (region or explicit
//! endpoint, credential provider, transport) and converts it into the
//! service's client type.

use crate::aws::creds::{Credentials, Provider};
use crate::aws::endpoint::{Endpoint, EndpointResolver};
use crate::aws::error::Error;
use crate::aws::http::{HttpTransport, Transport};
use std::marker::PhantomData;
use std::sync::Arc;

pub use crate::aws::http::ConnectionPoolConfig;

/// Wire protocol a service speaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Protocol {
    /// REST with JSON bodies; operations differ in method and path.
    RestJson,
    /// JSON-RPC 1.0: uniform `POST /` with an `X-Amz-Target` header.
    AwsJson1_0,
    /// JSON-RPC 1.1: uniform `POST /` with an `X-Amz-Target` header.
    AwsJson1_1,
    /// Form-encoded `Action`/`Version` requests with XML responses.
    Query,
}

impl Protocol {
    pub fn content_type(&self) -> &'static str {
        match self {
            Protocol::RestJson => "application/json",
            Protocol::AwsJson1_0 => "application/x-amz-json-1.0",
            Protocol::AwsJson1_1 => "application/x-amz-json-1.1",
            Protocol::Query => "application/x-www-form-urlencoded",
        }
    }
}

/// Static description of one AWS service.
#[derive(Clone, Copy, Debug)]
pub struct ServiceMeta {
    /// Service name in the SigV4 credential scope.
    pub signing_name: &'static str,
    /// Leading component of the regional hostname.
    pub endpoint_prefix: &'static str,
    pub protocol: Protocol,
    /// `X-Amz-Target` prefix for the JSON-RPC protocols.
    pub target_prefix: Option<&'static str>,
    /// `Version` parameter for the Query protocol.
    pub api_version: Option<&'static str>,
}

/// Shared state behind every clone of a service client.
#[derive(Debug)]
pub struct Handle {
    pub meta: ServiceMeta,
    pub resolver: EndpointResolver,
    pub provider: Option<Box<dyn Provider + Send + Sync>>,
    pub transport: Box<dyn Transport>,
    pub user_agent: String,
}

pub type SharedHandle = Arc<Handle>;

impl Handle {
    /// Fetches signing credentials from the configured provider.
    pub fn credentials(&self) -> Option<Credentials> {
        self.provider.as_ref().and_then(|p| p.fetch())
    }
}

/// Builds a service client of type `C`.
///
/// Neither a region nor an endpoint is required at build time; a client
/// without either fails each call with [`Error::EndpointResolution`] instead.
#[derive(Debug)]
pub struct ClientBuilder<C> {
    meta: ServiceMeta,
    region: Option<String>,
    endpoint: Option<Endpoint>,
    provider: Option<Box<dyn Provider + Send + Sync>>,
    transport: Option<Box<dyn Transport>>,
    pool_config: ConnectionPoolConfig,
    user_agent: Option<String>,
    _client: PhantomData<C>,
}

impl<C: From<Handle>> ClientBuilder<C> {
    pub fn new(meta: ServiceMeta) -> Self {
        Self {
            meta,
            region: None,
            endpoint: None,
            provider: None,
            transport: None,
            pool_config: ConnectionPoolConfig::default(),
            user_agent: None,
            _client: PhantomData,
        }
    }

    /// Sets the region hosts are derived from.
    pub fn region<S: Into<String>>(mut self, region: S) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Pins an explicit endpoint; it is used verbatim for every call.
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the credential provider. Without one, operations that require
    /// signing fail with [`Error::CredentialsRequired`].
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: Option<P>) -> Self {
        self.provider = provider.map(|p| Box::new(p) as Box<dyn Provider + Send + Sync>);
        self
    }

    /// Substitutes the HTTP transport; intended for tests.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Tunes the connection pool of the default transport.
    pub fn connection_pool_config(mut self, config: ConnectionPoolConfig) -> Self {
        self.pool_config = config;
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, agent: S) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Builds the client. Fails only when the default transport cannot be
    /// constructed.
    pub fn build(self) -> Result<C, Error> {
        let transport: Box<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Box::new(HttpTransport::new(&self.pool_config)?),
        };
        let resolver =
            EndpointResolver::new(self.meta.endpoint_prefix, self.region, self.endpoint);
        Ok(C::from(Handle {
            meta: self.meta,
            resolver,
            provider: self.provider,
            transport,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| format!("awslite/{}", env!("CARGO_PKG_VERSION"))),
        }))
    }
}
