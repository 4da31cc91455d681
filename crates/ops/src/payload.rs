//! Release payload construction

use crate::params::ValidatedParams;
use buildsnag_types::{ReleaseReport, SourceControl};

/// Map validated parameters onto the build API payload
#[must_use]
pub fn build_payload(params: &ValidatedParams) -> ReleaseReport {
    ReleaseReport {
        api_key: params.api_key.clone(),
        app_version: params.app_version.clone(),
        release_stage: params.release_stage.clone(),
        builder_name: params.builder_name.clone(),
        source_control: params
            .source_control
            .as_ref()
            .map(|(repository, revision)| SourceControl {
                repository: repository.clone(),
                revision: revision.clone(),
            }),
    }
}
