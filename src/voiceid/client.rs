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

use crate::aws::client::{ClientBuilder, Handle, Protocol, ServiceMeta, SharedHandle};
use crate::aws::endpoint::Endpoint;
use crate::voiceid::builders::*;
use std::sync::Arc;

const META: ServiceMeta = ServiceMeta {
    signing_name: "voiceid",
    endpoint_prefix: "voiceid",
    protocol: Protocol::AwsJson1_0,
    target_prefix: Some("VoiceID"),
    api_version: None,
};

/// Client for Amazon Connect Voice ID.
#[derive(Clone, Debug)]
pub struct VoiceIdClient {
    handle: SharedHandle,
}

impl From<Handle> for VoiceIdClient {
    fn from(handle: Handle) -> Self {
        Self {
            handle: Arc::new(handle),
        }
    }
}

impl VoiceIdClient {
    pub fn builder() -> ClientBuilder<Self> {
        ClientBuilder::new(META)
    }

    /// Redirects every subsequent call, on this client and its clones, to the
    /// given endpoint.
    pub fn override_endpoint(&self, endpoint: Endpoint) {
        self.handle.resolver.override_endpoint(endpoint);
    }

    pub fn create_domain(&self, name: impl Into<String>) -> CreateDomain {
        CreateDomain::new(self.handle.clone(), name)
    }

    pub fn describe_domain(&self, domain_id: impl Into<String>) -> DescribeDomain {
        DescribeDomain::new(self.handle.clone(), domain_id)
    }

    pub fn delete_domain(&self, domain_id: impl Into<String>) -> DeleteDomain {
        DeleteDomain::new(self.handle.clone(), domain_id)
    }

    pub fn list_domains(&self) -> ListDomains {
        ListDomains::new(self.handle.clone())
    }

    pub fn describe_speaker(
        &self,
        domain_id: impl Into<String>,
        speaker_id: impl Into<String>,
    ) -> DescribeSpeaker {
        DescribeSpeaker::new(self.handle.clone(), domain_id, speaker_id)
    }

    pub fn opt_out_speaker(
        &self,
        domain_id: impl Into<String>,
        speaker_id: impl Into<String>,
    ) -> OptOutSpeaker {
        OptOutSpeaker::new(self.handle.clone(), domain_id, speaker_id)
    }

    pub fn evaluate_session(
        &self,
        domain_id: impl Into<String>,
        session_name_or_id: impl Into<String>,
    ) -> EvaluateSession {
        EvaluateSession::new(self.handle.clone(), domain_id, session_name_or_id)
    }
}
