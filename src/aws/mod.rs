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

//! Shared client runtime: credentials, SigV4 signing, endpoint resolution,
//! HTTP transport and the request execution pipeline used by every service
//! client in this crate.

pub mod client;
pub mod creds;
pub mod endpoint;
pub mod error;
pub mod header_constants;
pub mod http;
pub mod multimap_ext;
pub mod request;
pub mod signer;
pub mod task;
pub mod utils;

#[cfg(test)]
mod endpoint_tests;
#[cfg(test)]
mod signer_tests;

pub use client::{ClientBuilder, ConnectionPoolConfig, Handle, Protocol, ServiceMeta};
pub use error::Error;
