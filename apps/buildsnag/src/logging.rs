//! Tracing subscriber setup
//!
//! Console logging stays quiet unless asked for; `--debug` (or `RUST_LOG`)
//! switches to structured JSON logs in a timestamped file. JSON output mode
//! never writes logs to the console so stdout stays parseable.

use buildsnag_config::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEBUG_FILTER: &str = "info,buildsnag=debug,buildsnag_ops=debug,buildsnag_net=debug";
const QUIET_FILTER: &str = "warn,buildsnag=warn,buildsnag_ops=warn";

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn log_file_path() -> PathBuf {
    Config::logs_dir().join(format!(
        "buildsnag-{}.log",
        chrono::Utc::now().format("%Y%m%d-%H%M%S")
    ))
}

fn create_log_file() -> std::io::Result<(PathBuf, std::fs::File)> {
    let path = log_file_path();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let file = std::fs::File::create(&path)?;
    Ok((path, file))
}

/// Initialize tracing/logging
pub fn init_tracing(json_mode: bool, debug_enabled_flag: bool) {
    let debug_enabled = std::env::var("RUST_LOG").is_ok() || debug_enabled_flag;

    if debug_enabled {
        match create_log_file() {
            Ok((path, file)) => {
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(file)
                    .with_env_filter(filter_or(DEBUG_FILTER))
                    .init();
                if !json_mode {
                    eprintln!("Debug logging enabled: {}", path.display());
                }
                return;
            }
            Err(e) => {
                if !json_mode {
                    eprintln!("Warning: Failed to create log file: {e}");
                }
            }
        }
    }

    if json_mode {
        tracing_subscriber::fmt()
            .with_writer(std::io::sink)
            .with_env_filter("off")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter_or(QUIET_FILTER))
            .init();
    }
}
