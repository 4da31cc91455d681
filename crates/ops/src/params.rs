//! Raw and validated release parameters

use buildsnag_types::ApiKey;

/// Parameter names as accepted on the command line and in error messages
pub mod names {
    pub const API_KEY: &str = "api_key";
    pub const APP_VERSION: &str = "app_version";
    pub const RELEASE_STAGE: &str = "release_stage";
    pub const BUILDER_NAME: &str = "builder_name";
    pub const SOURCE_CONTROL_REPOSITORY: &str = "source_control_repository";
    pub const SOURCE_CONTROL_REVISION: &str = "source_control_revision";
}

/// Flat set of parameters as collected from the caller.
///
/// Every field is optional here; [`crate::validate`] decides what is required.
#[derive(Clone, Default)]
pub struct BuildParams {
    pub api_key: Option<String>,
    pub app_version: Option<String>,
    pub release_stage: Option<String>,
    pub builder_name: Option<String>,
    pub source_control_repository: Option<String>,
    pub source_control_revision: Option<String>,
}

impl std::fmt::Debug for BuildParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildParams")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("app_version", &self.app_version)
            .field("release_stage", &self.release_stage)
            .field("builder_name", &self.builder_name)
            .field("source_control_repository", &self.source_control_repository)
            .field("source_control_revision", &self.source_control_revision)
            .finish()
    }
}

/// Parameters that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedParams {
    pub api_key: ApiKey,
    pub app_version: String,
    pub release_stage: String,
    pub builder_name: Option<String>,
    /// `(repository, revision)`, only ever both or neither
    pub source_control: Option<(String, String)>,
}
