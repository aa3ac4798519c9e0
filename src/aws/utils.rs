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

//! Time, hashing and encoding helpers shared by the signing and request
//! pipeline.

use crate::aws::error::Error;
use chrono::{DateTime, Utc};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sha2::{Digest, Sha256};

pub type UtcTime = DateTime<Utc>;

/// SHA-256 of the empty payload; used for bodyless requests.
pub const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Gets hex encoded SHA256 hash of given data
pub fn sha256_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    chrono::offset::Utc::now()
}

/// Gets signer date value of given time
pub fn to_signer_date(time: UtcTime) -> String {
    time.format("%Y%m%d").to_string()
}

/// Gets AMZ date value of given time
pub fn to_amz_date(time: UtcTime) -> String {
    time.format("%Y%m%dT%H%M%SZ").to_string()
}

const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes a query string key or value
pub fn url_encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_ENCODE_SET).collect()
}

/// Percent-encodes a single URL path segment (slashes are encoded too)
pub fn url_encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT_ENCODE_SET).collect()
}

/// Rejects empty required request parameters before any endpoint resolution
/// or network activity happens.
pub fn check_required(name: &'static str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::MissingParameter(name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_of_empty_matches_known_constant() {
        assert_eq!(sha256_hash(b""), EMPTY_SHA256);
    }

    #[test]
    fn path_segment_encoding_escapes_slash() {
        assert_eq!(url_encode_path_segment("a/b c"), "a%2Fb%20c");
        assert_eq!(url_encode_path_segment("asset-1_x.y~z"), "asset-1_x.y~z");
    }

    #[test]
    fn check_required_rejects_empty_and_blank() {
        assert!(check_required("assetId", "").is_err());
        assert!(check_required("assetId", "   ").is_err());
        assert!(check_required("assetId", "abc").is_ok());
    }
}
