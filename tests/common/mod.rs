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

#![allow(dead_code)]

//! Recording transport used by the integration tests.

use async_trait::async_trait;
use awslite::aws::error::Error;
use awslite::aws::http::{Transport, TransportRequest, TransportResponse};
use bytes::Bytes;
use http::HeaderMap;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct State {
    requests: Vec<TransportRequest>,
    responses: VecDeque<TransportResponse>,
}

/// Records every request and replays queued responses; when the queue is
/// empty it answers `200 {}`.
#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    state: Arc<Mutex<State>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, status: u16, body: &str) {
        self.push_response_with_headers(status, HeaderMap::new(), body);
    }

    pub fn push_response_with_headers(&self, status: u16, headers: HeaderMap, body: &str) {
        self.state
            .lock()
            .unwrap()
            .responses
            .push_back(TransportResponse {
                status,
                headers,
                body: Bytes::from(body.to_string()),
            });
    }

    /// Queues a modeled service error with the code in the
    /// `x-amzn-errortype` header, as the JSON protocols deliver it.
    pub fn push_error(&self, status: u16, code: &str, message: &str) {
        let mut headers = HeaderMap::new();
        headers.insert("x-amzn-errortype", code.parse().unwrap());
        headers.insert("x-amzn-requestid", "req-test".parse().unwrap());
        let body = format!("{{\"__type\":\"{code}\",\"message\":\"{message}\"}}");
        self.push_response_with_headers(status, headers, &body);
    }

    /// Number of requests that reached the wire.
    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    /// The most recent request; panics if nothing was sent.
    pub fn last(&self) -> TransportRequest {
        self.state
            .lock()
            .unwrap()
            .requests
            .last()
            .expect("no request was sent")
            .clone()
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.state.lock().unwrap().requests.clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, Error> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);
        Ok(state.responses.pop_front().unwrap_or(TransportResponse {
            status: 200,
            headers: HeaderMap::new(),
            body: Bytes::from_static(b"{}"),
        }))
    }
}
