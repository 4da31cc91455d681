//! Report a build to the build API

use crate::params::BuildParams;
use crate::types::{ReleaseOutcome, ReleaseResult};
use crate::{build_payload, validate, OpsCtx};
use buildsnag_errors::{ApiCallError, Error};
use tracing::{debug, info, warn};

/// Validate `params`, then send the release report unless in check mode
///
/// Succeeds only on HTTP 200. The response body is never inspected.
///
/// # Errors
///
/// Returns a validation error before any network activity when the
/// parameters are incomplete, and `ApiCallError` for a non-200 status or a
/// transport failure.
pub async fn report_build(ctx: &OpsCtx, params: &BuildParams) -> Result<ReleaseResult, Error> {
    let validated = validate(params)?;
    let report = build_payload(&validated);

    info!(
        app_version = %report.app_version,
        release_stage = %report.release_stage,
        builder = ?report.builder_name,
        source_control = report.source_control.is_some(),
        "Reporting build"
    );

    if ctx.check_mode {
        info!("Check mode: build API not called");
        return Ok(ReleaseResult::new(ReleaseOutcome::Simulated, &report));
    }

    let response = match ctx.net.post_json(&ctx.endpoint, &report).await {
        Ok(response) => response,
        Err(e) => {
            warn!(endpoint = %ctx.endpoint, error = %e, "Build API request failed");
            return Err(ApiCallError::transport(&e).into());
        }
    };

    if !response.is_ok() {
        warn!(
            endpoint = %ctx.endpoint,
            status = response.status,
            "Build API returned unexpected status"
        );
        debug!(body_len = response.body.len(), "Response body ignored");
        let detail = format!("HTTP {}", response.status);
        return Err(ApiCallError::status(response.status, detail).into());
    }

    info!(status = response.status, "Build reported");
    Ok(ReleaseResult::new(
        ReleaseOutcome::Reported {
            status: response.status,
        },
        &report,
    ))
}
