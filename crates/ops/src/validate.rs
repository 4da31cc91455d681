//! Input validation
//!
//! Empty strings are treated the same as absent values.

use crate::params::{names, BuildParams, ValidatedParams};
use buildsnag_errors::ValidationError;
use buildsnag_types::ApiKey;

/// Check requiredness and the source-control pairing rule
///
/// # Errors
///
/// Returns `MissingField` for the first absent required parameter (in the
/// order `api_key`, `app_version`, `release_stage`), or `RequiredTogether` when
/// only one of the source-control parameters is given.
pub fn validate(params: &BuildParams) -> Result<ValidatedParams, ValidationError> {
    let api_key = required(params.api_key.as_deref(), names::API_KEY)?;
    let app_version = required(params.app_version.as_deref(), names::APP_VERSION)?;
    let release_stage = required(params.release_stage.as_deref(), names::RELEASE_STAGE)?;

    let repository = supplied(params.source_control_repository.as_deref());
    let revision = supplied(params.source_control_revision.as_deref());
    let source_control = match (repository, revision) {
        (Some(repository), Some(revision)) => Some((repository.to_string(), revision.to_string())),
        (None, None) => None,
        (Some(_), None) => {
            return Err(ValidationError::RequiredTogether {
                present: names::SOURCE_CONTROL_REPOSITORY.to_string(),
                missing: names::SOURCE_CONTROL_REVISION.to_string(),
            })
        }
        (None, Some(_)) => {
            return Err(ValidationError::RequiredTogether {
                present: names::SOURCE_CONTROL_REVISION.to_string(),
                missing: names::SOURCE_CONTROL_REPOSITORY.to_string(),
            })
        }
    };

    Ok(ValidatedParams {
        api_key: ApiKey::new(api_key),
        app_version: app_version.to_string(),
        release_stage: release_stage.to_string(),
        builder_name: supplied(params.builder_name.as_deref()).map(str::to_string),
        source_control,
    })
}

fn supplied(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, ValidationError> {
    supplied(value).ok_or_else(|| ValidationError::MissingField {
        field: field.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn base() -> BuildParams {
        BuildParams {
            api_key: Some("122".into()),
            app_version: Some("1.0.0".into()),
            release_stage: Some("production".into()),
            ..BuildParams::default()
        }
    }

    #[test]
    fn test_minimal_params_pass() {
        let validated = validate(&base()).unwrap();
        assert_eq!(validated.api_key.expose(), "122");
        assert_eq!(validated.builder_name, None);
        assert_eq!(validated.source_control, None);
    }

    #[test]
    fn test_missing_required_reported_in_order() {
        let err = validate(&BuildParams::default()).unwrap_err();
        assert_eq!(err.field(), "api_key");

        let mut params = base();
        params.app_version = None;
        params.release_stage = None;
        assert_eq!(validate(&params).unwrap_err().field(), "app_version");

        let mut params = base();
        params.release_stage = None;
        assert_eq!(validate(&params).unwrap_err().field(), "release_stage");
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let mut params = base();
        params.api_key = Some(String::new());
        assert!(matches!(
            validate(&params),
            Err(ValidationError::MissingField { ref field }) if field == "api_key"
        ));

        let mut params = base();
        params.builder_name = Some(String::new());
        assert_eq!(validate(&params).unwrap().builder_name, None);

        let mut params = base();
        params.source_control_repository = Some(String::new());
        params.source_control_revision = Some("123qwe213".into());
        assert_eq!(
            validate(&params).unwrap_err(),
            ValidationError::RequiredTogether {
                present: "source_control_revision".into(),
                missing: "source_control_repository".into(),
            }
        );

        let mut params = base();
        params.source_control_repository = Some("https://github.com/owner/repo".into());
        params.source_control_revision = Some(String::new());
        assert_eq!(
            validate(&params).unwrap_err(),
            ValidationError::RequiredTogether {
                present: "source_control_repository".into(),
                missing: "source_control_revision".into(),
            }
        );

        let mut params = base();
        params.source_control_repository = Some(String::new());
        params.source_control_revision = Some(String::new());
        assert_eq!(validate(&params).unwrap().source_control, None);
    }

    #[test]
    fn test_source_control_pair() {
        let mut params = base();
        params.source_control_repository = Some("https://github.com/owner/repo".into());
        params.source_control_revision = Some("123qwe213".into());
        assert_eq!(
            validate(&params).unwrap().source_control,
            Some((
                "https://github.com/owner/repo".to_string(),
                "123qwe213".to_string()
            ))
        );
    }

    #[test]
    fn test_revision_without_repository() {
        let mut params = base();
        params.source_control_revision = Some("abc".into());
        assert_eq!(
            validate(&params).unwrap_err(),
            ValidationError::RequiredTogether {
                present: "source_control_revision".into(),
                missing: "source_control_repository".into(),
            }
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let debug = format!("{:?}", base());
        assert!(!debug.contains("122"));
        assert!(debug.contains("[REDACTED]"));
    }

    proptest! {
        #[test]
        fn lone_source_control_field_always_fails(
            value in "[a-zA-Z0-9:/._-]{1,40}",
            repository_side in any::<bool>(),
        ) {
            let mut params = base();
            if repository_side {
                params.source_control_repository = Some(value);
            } else {
                params.source_control_revision = Some(value);
            }
            let is_required_together = matches!(
                validate(&params),
                Err(ValidationError::RequiredTogether { .. })
            );
            prop_assert!(is_required_together);
        }

        #[test]
        fn pair_presence_matches_output(
            repo in proptest::option::of("[a-z]{1,12}"),
            rev in proptest::option::of("[0-9a-f]{1,12}"),
        ) {
            let mut params = base();
            params.source_control_repository = repo.clone();
            params.source_control_revision = rev.clone();
            match (repo, rev) {
                (Some(r), Some(v)) => {
                    prop_assert_eq!(validate(&params).unwrap().source_control, Some((r, v)));
                }
                (None, None) => prop_assert!(validate(&params).unwrap().source_control.is_none()),
                _ => prop_assert!(validate(&params).is_err()),
            }
        }
    }
}
