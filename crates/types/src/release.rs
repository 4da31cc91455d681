//! Release payload for the Bugsnag build API

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bugsnag project API key.
///
/// Serializes as the plain key so it can go on the wire, but never prints
/// through `Debug` or `Display`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for the request body only
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Source control location of the code that was built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceControl {
    pub repository: String,
    pub revision: String,
}

/// One build/release event, serialized as the request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseReport {
    pub api_key: ApiKey,
    pub app_version: String,
    pub release_stage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builder_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_control: Option<SourceControl>,
}
