//! `show vlan` parser.
//!
//! ```text
//!   VID  |     VLAN Name    |        Untagged Ports        |        Tagged Ports          |  Type
//! -------+------------------+------------------------------+------------------------------+---------
//!      1 |          default |                  1-24,lag1-8 |                          --- | Default
//!      3 |      IOTInternet |                          --- |                         8,23 | Static
//! ```

use serde::Serialize;

use super::ports;

/// One row of the VLAN table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VlanEntry {
    pub vid: String,
    pub name: String,
    pub untagged_ports: Vec<String>,
    pub tagged_ports: Vec<String>,
    #[serde(rename = "type")]
    pub vlan_type: String,
}

/// Parse the VLAN table. Rows before the header are ignored.
pub fn parse_vlan(output: &str) -> Vec<VlanEntry> {
    let mut vlans = Vec::new();
    let mut header_found = false;

    for line in output.lines() {
        if !header_found {
            header_found = line.contains("VID") && line.contains("VLAN Name");
            continue;
        }
        if line.trim().is_empty() || line.trim_start().starts_with('-') {
            continue;
        }

        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        if fields.len() < 2 {
            continue;
        }

        let field = |i: usize| fields.get(i).copied().unwrap_or_default();
        vlans.push(VlanEntry {
            vid: field(0).to_string(),
            name: field(1).to_string(),
            untagged_ports: ports::expand(field(2)),
            tagged_ports: ports::expand(field(3)),
            vlan_type: field(4).to_string(),
        });
    }

    vlans
}
