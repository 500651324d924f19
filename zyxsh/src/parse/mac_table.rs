//! `show mac address-table` parser.

use serde::Serialize;

/// One learned or static MAC address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MacEntry {
    pub vid: String,
    /// Colon-separated hex octets.
    pub mac: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub port: String,
}

/// Parse the MAC table, keeping only `vid | mac | type | port` data rows.
///
/// Header, separator, footer, prompt, command echo and `--More--` lines are
/// skipped, as is any row whose MAC field has no colon.
pub fn parse_mac_table(output: &str) -> Vec<MacEntry> {
    output.lines().filter_map(parse_row).collect()
}

fn parse_row(line: &str) -> Option<MacEntry> {
    let trimmed = line.trim();
    if trimmed.is_empty() || is_noise(line, trimmed) || !line.contains('|') {
        return None;
    }

    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    if fields.len() < 4 {
        return None;
    }

    let (vid, mac) = (fields[0], fields[1]);
    if vid.is_empty() || !mac.contains(':') {
        return None;
    }

    Some(MacEntry {
        vid: vid.to_string(),
        mac: mac.to_string(),
        entry_type: fields[2].to_string(),
        port: fields[3].to_string(),
    })
}

fn is_noise(line: &str, trimmed: &str) -> bool {
    line.contains("VID")
        || line.contains("MAC Address")
        || trimmed.starts_with('-')
        || line.contains("Total number")
        || trimmed.starts_with("GS1900")
        || trimmed.starts_with("show ")
        || line.contains("--More--")
}
