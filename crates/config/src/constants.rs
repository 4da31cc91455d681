//! Fixed values for buildsnag

/// Bugsnag build API endpoint
pub const BUILD_API_URL: &str = "https://build.bugsnag.com/";

pub const APP_DIR: &str = "buildsnag";
pub const CONFIG_FILE: &str = "config.toml";
pub const LOGS_SUBDIR: &str = "logs";

/// Prefix for configuration environment variables
pub const ENV_PREFIX: &str = "BUILDSNAG_";
