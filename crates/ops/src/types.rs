//! Result types returned to the CLI

use buildsnag_types::ReleaseReport;
use serde::Serialize;

/// How a successful run ended
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReleaseOutcome {
    /// Check mode: nothing was sent
    Simulated,
    /// The build API accepted the report
    Reported { status: u16 },
}

/// Successful run, ready for rendering
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReleaseResult {
    pub changed: bool,
    #[serde(flatten)]
    pub outcome: ReleaseOutcome,
    pub app_version: String,
    pub release_stage: String,
}

impl ReleaseResult {
    pub(crate) fn new(outcome: ReleaseOutcome, report: &ReleaseReport) -> Self {
        Self {
            changed: true,
            outcome,
            app_version: report.app_version.clone(),
            release_stage: report.release_stage.clone(),
        }
    }

    #[must_use]
    pub fn is_simulated(&self) -> bool {
        matches!(self.outcome, ReleaseOutcome::Simulated)
    }

    /// Convert to JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, buildsnag_errors::Error> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }
}
