//! CLI error handling

use std::fmt;

use buildsnag_errors::UserFacingError;

/// Exit code for a failed API call or any other runtime failure
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for invalid parameters, matching clap's usage errors
pub const EXIT_USAGE: i32 = 2;

/// CLI-specific error type
#[derive(Debug)]
pub enum CliError {
    /// Configuration error
    Config(buildsnag_errors::Error),
    /// Operations error
    Ops(buildsnag_errors::Error),
    /// I/O error
    Io(std::io::Error),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Ops(e) if e.is_validation() => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }

    /// Message for machine-readable output, without hints
    pub fn message(&self) -> String {
        match self {
            CliError::Config(e) | CliError::Ops(e) => e.user_message().into_owned(),
            CliError::Io(e) => e.to_string(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "Configuration error: {e}"),
            CliError::Ops(e) => {
                let message = e.user_message();
                write!(f, "{message}")?;
                if let Some(code) = e.user_code() {
                    write!(f, "\n  Code: {code}")?;
                }
                if let Some(hint) = e.user_hint() {
                    write!(f, "\n  Hint: {hint}")?;
                }
                Ok(())
            }
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) | CliError::Ops(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<buildsnag_errors::Error> for CliError {
    fn from(e: buildsnag_errors::Error) -> Self {
        CliError::Ops(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
