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

//! Typed responses for the Voice ID operations.

use super::types::{AuthenticationResult, Domain, DomainSummary, FraudDetectionResult, Speaker};
use crate::json_response;
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDomainResponse {
    pub domain: Option<Domain>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDomainResponse {
    pub domain: Option<Domain>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct DeleteDomainResponse {}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDomainsResponse {
    #[serde(default)]
    pub domain_summaries: Vec<DomainSummary>,
    pub next_token: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSpeakerResponse {
    pub speaker: Option<Speaker>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OptOutSpeakerResponse {
    pub speaker: Option<Speaker>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EvaluateSessionResponse {
    pub domain_id: Option<String>,
    pub session_id: Option<String>,
    pub session_name: Option<String>,
    /// `PENDING_CONFIGURATION`, `ONGOING` or `ENDED`.
    pub streaming_status: Option<String>,
    pub authentication_result: Option<AuthenticationResult>,
    pub fraud_detection_result: Option<FraudDetectionResult>,
}

json_response!(
    CreateDomainResponse,
    DescribeDomainResponse,
    DeleteDomainResponse,
    ListDomainsResponse,
    DescribeSpeakerResponse,
    OptOutSpeakerResponse,
    EvaluateSessionResponse,
);
