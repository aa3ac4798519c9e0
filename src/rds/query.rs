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

//! Form-encoded parameter set for the Query protocol.

use crate::aws::multimap_ext::{Multimap, MultimapExt};
use bytes::Bytes;

/// Parameters of one Query-protocol call, always carrying `Action` and
/// `Version`.
#[derive(Clone, Debug)]
pub struct QueryParams {
    params: Multimap,
}

impl QueryParams {
    pub fn new(action: &str, version: &str) -> Self {
        let mut params = Multimap::new();
        params.add("Action", action);
        params.add("Version", version);
        Self { params }
    }

    pub fn add<V: Into<String>>(&mut self, key: &str, value: V) {
        self.params.add(key, value);
    }

    pub fn add_opt<V: Into<String>>(&mut self, key: &str, value: Option<V>) {
        self.params.add_opt(key, value);
    }

    /// Serializes as a form body (`application/x-www-form-urlencoded`).
    pub fn to_body(&self) -> Bytes {
        Bytes::from(self.params.to_query_string())
    }

    /// Hands the raw parameters over, e.g. for presigning as a query string.
    pub fn into_multimap(self) -> Multimap {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_carries_action_and_version() {
        let mut params = QueryParams::new("DescribeDBInstances", "2014-10-31");
        params.add("DBInstanceIdentifier", "db-1");
        params.add_opt("Marker", None::<String>);
        let body = String::from_utf8(params.to_body().to_vec()).unwrap();
        assert!(body.contains("Action=DescribeDBInstances"));
        assert!(body.contains("Version=2014-10-31"));
        assert!(body.contains("DBInstanceIdentifier=db-1"));
        assert!(!body.contains("Marker"));
    }
}
