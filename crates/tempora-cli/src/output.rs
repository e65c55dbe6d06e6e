//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use tempora_domain::DateNormalizationResult;

/// One normalized input, flattened for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedValue {
    /// Value as given
    pub input: String,
    /// Canonical EDTF string, when matched
    pub edtf: Option<String>,
    /// Grammar that matched, `NO_MATCH` or `INVALID`
    pub match_id: String,
    /// DCMI period name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Cleanup applied before the match
    pub sanitize_operation: Option<String>,
}

impl NormalizedValue {
    /// Flatten a pipeline result.
    pub fn new(input: &str, result: &DateNormalizationResult) -> Self {
        Self {
            input: input.to_string(),
            edtf: result.edtf(),
            match_id: result.match_id().to_string(),
            label: result.label().map(str::to_string),
            sanitize_operation: result.sanitize_operation().map(|op| op.to_string()),
        }
    }
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format normalization results.
    pub fn format_results(&self, values: &[NormalizedValue]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(values)?),
            OutputFormat::Table => Ok(self.format_results_table(values)),
            OutputFormat::Quiet => Ok(Self::format_results_quiet(values)),
        }
    }

    fn format_results_table(&self, values: &[NormalizedValue]) -> String {
        if values.is_empty() {
            return self.colorize("No values to normalize.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Input", "EDTF", "Match", "Sanitize", "Label"]);

        for value in values {
            builder.push_record([
                value.input.as_str(),
                value.edtf.as_deref().unwrap_or("-"),
                value.match_id.as_str(),
                value.sanitize_operation.as_deref().unwrap_or(""),
                value.label.as_deref().unwrap_or(""),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// One canonical date per line, empty for no match
    fn format_results_quiet(values: &[NormalizedValue]) -> String {
        values
            .iter()
            .map(|value| value.edtf.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Summary line for a run.
    pub fn summary(&self, total: usize, matched: usize) -> String {
        let message = format!("{} of {} value(s) normalized", matched, total);
        if matched == total {
            self.success(&message)
        } else {
            self.warning(&message)
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Whether messages besides the results should be printed.
    pub fn shows_messages(&self) -> bool {
        self.format == OutputFormat::Table
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
