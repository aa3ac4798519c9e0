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

//! Background dispatch of operation calls.
//!
//! [`ApiCall::send`] runs an operation inline on the current task. These
//! helpers run it on the tokio runtime instead: [`submit`] hands back a
//! [`JoinHandle`] to await later, [`submit_with_callback`] invokes a handler
//! with the result when it completes. Either way the operation itself behaves
//! identically, including the parameter and endpoint checks that fail before
//! any network activity.

use crate::aws::error::Error;
use crate::aws::request::ApiCall;
use tokio::task::JoinHandle;

/// Starts the call on a background task and returns its handle.
pub fn submit<C>(call: C) -> JoinHandle<Result<C::Response, Error>>
where
    C: ApiCall + Send + 'static,
{
    tokio::spawn(async move { call.send().await })
}

/// Starts the call on a background task and passes the result to `handler`.
pub fn submit_with_callback<C, F>(call: C, handler: F) -> JoinHandle<()>
where
    C: ApiCall + Send + 'static,
    F: FnOnce(Result<C::Response, Error>) + Send + 'static,
{
    tokio::spawn(async move { handler(call.send().await) })
}
