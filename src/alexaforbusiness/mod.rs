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

//! Alexa for Business client (JSON 1.1).
//!
//! Uniform `POST /` with an `X-Amz-Target: AlexaForBusiness.<Operation>`
//! header; the signing name and endpoint prefix are both `a4b`.

pub mod builders;
pub mod client;
pub mod response;
pub mod types;

pub use client::AlexaForBusinessClient;
