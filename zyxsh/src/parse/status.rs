//! Fallback for `show interface status`.
//!
//! The GS1900 rejects this command with `Invalid port id`, so there is no
//! column layout to follow. Anything that looks like an error is reported as
//! one; otherwise lines are returned as opaque rows.

use serde::Serialize;

/// One row of best-effort status output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusRow {
    /// The whole output, when the device reported an error.
    Error(String),
    /// One non-blank line.
    Raw(String),
}

/// Parse status output into rows.
pub fn parse_interface_status(output: &str) -> Vec<StatusRow> {
    if output.contains("Invalid") || output.contains("Error") {
        return vec![StatusRow::Error(output.trim().to_string())];
    }

    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| StatusRow::Raw(line.to_string()))
        .collect()
}
