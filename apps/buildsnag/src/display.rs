//! Output rendering and formatting

use crate::error::CliError;
use buildsnag_config::GeneralConfig;
use buildsnag_ops::{ReleaseOutcome, ReleaseResult};
use buildsnag_types::{ColorChoice, OutputFormat};
use console::{Style, Term};
use serde_json::json;
use std::io;

/// Output renderer for CLI results
#[derive(Clone)]
pub struct OutputRenderer {
    /// Use JSON output format
    json_output: bool,
    /// Color configuration
    color_choice: ColorChoice,
    /// Terminal instance
    term: Term,
}

impl OutputRenderer {
    /// Create new output renderer
    pub fn new(json_output: bool, color_choice: ColorChoice) -> Self {
        Self {
            json_output,
            color_choice,
            term: Term::stdout(),
        }
    }

    /// Renderer for the configured output format
    ///
    /// `plain` is text without color whatever the color setting says.
    pub fn from_config(general: &GeneralConfig) -> Self {
        let color_choice = match general.default_output {
            OutputFormat::Plain => ColorChoice::Never,
            OutputFormat::Tty | OutputFormat::Json => general.color,
        };
        Self::new(general.default_output == OutputFormat::Json, color_choice)
    }

    pub fn is_json(&self) -> bool {
        self.json_output
    }

    /// Render a successful run
    pub fn render_result(&self, result: &ReleaseResult) -> io::Result<()> {
        if self.json_output {
            let json = result.to_json().map_err(io::Error::other)?;
            println!("{json}");
            return Ok(());
        }

        let line = match &result.outcome {
            ReleaseOutcome::Simulated => format!(
                "{} build {} for {} (check mode, not sent)",
                self.paint("changed:", Style::new().yellow()),
                result.app_version,
                result.release_stage
            ),
            ReleaseOutcome::Reported { .. } => format!(
                "{} build {} reported to {}",
                self.paint("changed:", Style::new().green()),
                result.app_version,
                result.release_stage
            ),
        };
        println!("{line}");
        Ok(())
    }

    /// Render a failed run
    pub fn render_error(&self, error: &CliError) {
        if self.json_output {
            println!("{}", failure_json(error));
        } else {
            eprintln!("{} {error}", self.paint("Error:", Style::new().red().bold()));
        }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.supports_color() {
            style.force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Check if color output is supported
    fn supports_color(&self) -> bool {
        match self.color_choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.term.features().colors_supported(),
        }
    }
}

/// `{"failed": true, "msg": ...}` body for JSON mode
pub fn failure_json(error: &CliError) -> serde_json::Value {
    json!({
        "failed": true,
        "msg": error.message(),
    })
}
