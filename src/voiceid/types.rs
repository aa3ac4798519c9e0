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

//! Shared Voice ID data shapes.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerSideEncryptionConfiguration {
    pub kms_key_id: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Domain {
    pub domain_id: Option<String>,
    pub arn: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub domain_status: Option<String>,
    pub server_side_encryption_configuration: Option<ServerSideEncryptionConfiguration>,
    /// Epoch seconds.
    pub created_at: Option<f64>,
    pub updated_at: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainSummary {
    pub domain_id: Option<String>,
    pub arn: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub domain_status: Option<String>,
    pub created_at: Option<f64>,
    pub updated_at: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Speaker {
    pub customer_speaker_id: Option<String>,
    pub generated_speaker_id: Option<String>,
    pub domain_id: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<f64>,
    pub updated_at: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthenticationResult {
    pub authentication_result_id: Option<String>,
    /// `ACCEPT`, `REJECT`, `NOT_ENOUGH_SPEECH`, ...
    pub decision: Option<String>,
    pub score: Option<i32>,
    pub customer_speaker_id: Option<String>,
    pub generated_speaker_id: Option<String>,
    pub audio_aggregation_started_at: Option<f64>,
    pub audio_aggregation_ended_at: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FraudDetectionResult {
    pub fraud_detection_result_id: Option<String>,
    pub decision: Option<String>,
    #[serde(default)]
    pub reasons: Vec<String>,
    pub audio_aggregation_started_at: Option<f64>,
    pub audio_aggregation_ended_at: Option<f64>,
}
