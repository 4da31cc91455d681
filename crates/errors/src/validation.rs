//! Input validation error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("missing required parameter: {field}")]
    MissingField { field: String },

    #[error("parameters are required together: {present} was given without {missing}")]
    RequiredTogether { present: String, missing: String },
}

impl ValidationError {
    /// Name of the parameter the error is about
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field } => field,
            Self::RequiredTogether { missing, .. } => missing,
        }
    }
}

impl UserFacingError for ValidationError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { .. } => {
                Some("Pass the parameter as a flag or set its BUGSNAG_* environment variable.")
            }
            Self::RequiredTogether { .. } => Some(
                "Pass both --source-control-repository and --source-control-revision, or neither.",
            ),
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::MissingField { .. } => "validation.missing_field",
            Self::RequiredTogether { .. } => "validation.required_together",
        };
        Some(code)
    }
}
