//! Command line interface definition

use buildsnag_config::DefaultsConfig;
use buildsnag_ops::BuildParams;
use buildsnag_types::ColorChoice;
use clap::{Args, Parser};
use std::path::PathBuf;

/// buildsnag - Report application builds to Bugsnag
#[derive(Parser)]
#[command(name = "buildsnag")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Report application builds to Bugsnag")]
#[command(long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub release: ReleaseArgs,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Release parameters
///
/// All optional at the parser level; requiredness is checked by
/// `buildsnag_ops::validate` so every rule lives in one place.
#[derive(Args)]
pub struct ReleaseArgs {
    /// API key of the Bugsnag project
    #[arg(long, env = "BUGSNAG_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Version number of the application
    #[arg(long, env = "BUGSNAG_APP_VERSION", value_name = "VERSION")]
    pub app_version: Option<String>,

    /// Release stage (production, staging, ...)
    #[arg(long, env = "BUGSNAG_RELEASE_STAGE", value_name = "STAGE")]
    pub release_stage: Option<String>,

    /// Name of the user or system that triggered the build
    #[arg(long, env = "BUGSNAG_BUILDER_NAME", value_name = "NAME")]
    pub builder_name: Option<String>,

    /// Link to the source control repository
    #[arg(long, value_name = "URL")]
    pub source_control_repository: Option<String>,

    /// Source control revision (e.g. commit SHA) that was built
    #[arg(long, value_name = "SHA")]
    pub source_control_revision: Option<String>,
}

impl ReleaseArgs {
    /// Collect parameters, filling gaps from the config file defaults
    pub fn into_params(self, defaults: &DefaultsConfig) -> BuildParams {
        BuildParams {
            api_key: self.api_key,
            app_version: self.app_version,
            release_stage: self
                .release_stage
                .or_else(|| defaults.release_stage.clone()),
            builder_name: self.builder_name.or_else(|| defaults.builder_name.clone()),
            source_control_repository: self.source_control_repository,
            source_control_revision: self.source_control_revision,
        }
    }
}

/// Global arguments
#[derive(Args)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging to a log file
    #[arg(long)]
    pub debug: bool,

    /// Validate and report what would change without calling the API
    #[arg(long)]
    pub check: bool,

    /// Color output control
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Use alternate config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
