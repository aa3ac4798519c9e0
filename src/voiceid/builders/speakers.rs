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

//! Speaker and session operations.

use super::json_request;
use crate::aws::client::SharedHandle;
use crate::aws::error::Error;
use crate::aws::request::{ApiCall, ApiRequest, ToApiRequest};
use crate::aws::utils::check_required;
use crate::voiceid::response::{
    DescribeSpeakerResponse, EvaluateSessionResponse, OptOutSpeakerResponse,
};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SpeakerBody<'a> {
    domain_id: &'a str,
    speaker_id: &'a str,
}

/// Builder for the `DescribeSpeaker` operation.
#[derive(Clone, Debug)]
pub struct DescribeSpeaker {
    handle: SharedHandle,
    domain_id: String,
    speaker_id: String,
}

impl DescribeSpeaker {
    pub fn new(
        handle: SharedHandle,
        domain_id: impl Into<String>,
        speaker_id: impl Into<String>,
    ) -> Self {
        Self {
            handle,
            domain_id: domain_id.into(),
            speaker_id: speaker_id.into(),
        }
    }
}

impl ToApiRequest for DescribeSpeaker {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        check_required("DomainId", &self.domain_id)?;
        check_required("SpeakerId", &self.speaker_id)?;
        let body = serde_json::to_vec(&SpeakerBody {
            domain_id: &self.domain_id,
            speaker_id: &self.speaker_id,
        })?;
        Ok(json_request("DescribeSpeaker", body))
    }
}

impl ApiCall for DescribeSpeaker {
    type Response = DescribeSpeakerResponse;
}

/// Builder for the `OptOutSpeaker` operation.
#[derive(Clone, Debug)]
pub struct OptOutSpeaker {
    handle: SharedHandle,
    domain_id: String,
    speaker_id: String,
}

impl OptOutSpeaker {
    pub fn new(
        handle: SharedHandle,
        domain_id: impl Into<String>,
        speaker_id: impl Into<String>,
    ) -> Self {
        Self {
            handle,
            domain_id: domain_id.into(),
            speaker_id: speaker_id.into(),
        }
    }
}

impl ToApiRequest for OptOutSpeaker {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        check_required("DomainId", &self.domain_id)?;
        check_required("SpeakerId", &self.speaker_id)?;
        let body = serde_json::to_vec(&SpeakerBody {
            domain_id: &self.domain_id,
            speaker_id: &self.speaker_id,
        })?;
        Ok(json_request("OptOutSpeaker", body))
    }
}

impl ApiCall for OptOutSpeaker {
    type Response = OptOutSpeakerResponse;
}

/// Builder for the `EvaluateSession` operation.
#[derive(Clone, Debug)]
pub struct EvaluateSession {
    handle: SharedHandle,
    domain_id: String,
    session_name_or_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct EvaluateSessionBody<'a> {
    domain_id: &'a str,
    session_name_or_id: &'a str,
}

impl EvaluateSession {
    pub fn new(
        handle: SharedHandle,
        domain_id: impl Into<String>,
        session_name_or_id: impl Into<String>,
    ) -> Self {
        Self {
            handle,
            domain_id: domain_id.into(),
            session_name_or_id: session_name_or_id.into(),
        }
    }
}

impl ToApiRequest for EvaluateSession {
    fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    fn to_api_request(&self) -> Result<ApiRequest, Error> {
        check_required("DomainId", &self.domain_id)?;
        check_required("SessionNameOrId", &self.session_name_or_id)?;
        let body = serde_json::to_vec(&EvaluateSessionBody {
            domain_id: &self.domain_id,
            session_name_or_id: &self.session_name_or_id,
        })?;
        Ok(json_request("EvaluateSession", body))
    }
}

impl ApiCall for EvaluateSession {
    type Response = EvaluateSessionResponse;
}
