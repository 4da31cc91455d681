//! buildsnag - Report application builds to Bugsnag
//!
//! Collects release parameters from flags, environment and config, then
//! hands them to the ops crate for validation and the build API call.

mod cli;
mod display;
mod error;
mod logging;

use crate::cli::Cli;
use crate::display::OutputRenderer;
use crate::error::CliError;
use buildsnag_config::Config;
use buildsnag_net::{NetClient, NetConfig};
use buildsnag_ops::{OpsContextBuilder, ReleaseResult};
use buildsnag_types::OutputFormat;
use clap::Parser;
use std::process;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Output mode may come from env or the config file, so resolve it
    // before logging starts
    let loaded = load_config(&cli.global).await;
    let renderer = match &loaded {
        Ok(config) => OutputRenderer::from_config(&config.general),
        Err(_) => OutputRenderer::new(cli.global.json, cli.global.color.unwrap_or_default()),
    };

    logging::init_tracing(renderer.is_json(), cli.global.debug);

    let outcome = match loaded {
        Ok(config) => run(cli, &config, &renderer).await,
        Err(e) => Err(e),
    };

    if let Err(e) = outcome {
        error!(code = e.exit_code(), "Application error: {}", e);
        renderer.render_error(&e);
        process::exit(e.exit_code());
    }
}

/// File config, then environment, then CLI flags, validated once at the end
async fn load_config(global: &cli::GlobalArgs) -> Result<Config, CliError> {
    let mut config = Config::load_or_default(global.config.as_deref())
        .await
        .map_err(CliError::Config)?;
    config.merge_env().map_err(CliError::Config)?;
    apply_cli_config(&mut config, global);
    config.validate().map_err(CliError::Config)?;
    Ok(config)
}

/// Main application logic
async fn run(cli: Cli, config: &Config, renderer: &OutputRenderer) -> Result<(), CliError> {
    info!("Starting buildsnag v{}", env!("CARGO_PKG_VERSION"));

    let result = execute(cli, config).await?;
    renderer.render_result(&result)?;

    info!(changed = result.changed, "Command completed successfully");
    Ok(())
}

async fn execute(cli: Cli, config: &Config) -> Result<ReleaseResult, CliError> {
    let net = NetClient::new(NetConfig::from(&config.network))?;
    let ctx = OpsContextBuilder::new()
        .with_net(net)
        .with_config(config)
        .with_check_mode(cli.global.check)
        .build()?;

    let params = cli.release.into_params(&config.defaults);
    Ok(buildsnag_ops::report_build(&ctx, &params).await?)
}

/// Apply CLI configuration overrides (highest precedence)
fn apply_cli_config(config: &mut Config, global: &cli::GlobalArgs) {
    if let Some(color) = global.color {
        config.general.color = color;
    }
    if global.json {
        config.general.default_output = OutputFormat::Json;
    }
}
