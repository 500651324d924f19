//! `show running-config` output, kept as opaque lines.

use serde::Serialize;

/// Running configuration as the device printed it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigDump {
    pub lines: Vec<String>,
}

/// Split the configuration into lines without interpreting them.
pub fn parse_config(output: &str) -> ConfigDump {
    ConfigDump {
        lines: output.lines().map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_in_order() {
        let dump = parse_config("hostname Switch\nvlan 2\n  name ALARM\n!");
        assert_eq!(dump.lines, vec!["hostname Switch", "vlan 2", "  name ALARM", "!"]);
    }

    #[test]
    fn test_empty() {
        assert!(parse_config("").lines.is_empty());
    }
}
