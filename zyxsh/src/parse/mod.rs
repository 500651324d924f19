//! Text-to-record parsers for switch command output.
//!
//! Every parser is total: malformed or missing fields are left out of the
//! result, never reported as errors. [`ParserRegistry`] picks the parser for
//! a command by its full text or by an alias.

mod config;
mod interface;
mod mac_table;
pub mod ports;
mod status;
mod version;
mod vlan;

pub use config::{ConfigDump, parse_config};
pub use interface::{FieldKind, FieldRule, InterfaceInfo, LinkStatus, RULES, parse_interface};
pub use mac_table::{MacEntry, parse_mac_table};
pub use status::{StatusRow, parse_interface_status};
pub use version::{VersionInfo, parse_version};
pub use vlan::{VlanEntry, parse_vlan};

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{ParseError, Result};

/// The parser families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Version,
    Vlan,
    MacTable,
    InterfaceDetail,
    Config,
    InterfaceStatus,
}

impl CommandKind {
    /// Run this kind's parser.
    pub fn parse(self, output: &str) -> ParsedRecord {
        match self {
            Self::Version => ParsedRecord::Version(parse_version(output)),
            Self::Vlan => ParsedRecord::Vlans(parse_vlan(output)),
            Self::MacTable => ParsedRecord::MacTable(parse_mac_table(output)),
            Self::InterfaceDetail => ParsedRecord::Interface(parse_interface(output)),
            Self::Config => ParsedRecord::Config(parse_config(output)),
            Self::InterfaceStatus => ParsedRecord::InterfaceStatus(parse_interface_status(output)),
        }
    }
}

/// Unparsed output for commands without a parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawOutput {
    pub output: String,
}

/// A parsed command result. Serializes as the inner record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParsedRecord {
    Version(VersionInfo),
    Vlans(Vec<VlanEntry>),
    MacTable(Vec<MacEntry>),
    Interface(InterfaceInfo),
    Config(ConfigDump),
    InterfaceStatus(Vec<StatusRow>),
    Raw(RawOutput),
}

static REGISTRY: Lazy<RwLock<ParserRegistry>> =
    Lazy::new(|| RwLock::new(ParserRegistry::builtin()));

/// Maps command text to a parser.
#[derive(Debug, Default)]
pub struct ParserRegistry {
    /// Full commands and aliases.
    exact: HashMap<String, CommandKind>,

    /// Prefixes completed by a port number, e.g. `show interface `.
    port_prefixes: Vec<(String, CommandKind)>,
}

impl ParserRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the GS1900 commands and their CLI aliases.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        let entries = [
            ("show version", CommandKind::Version),
            ("version", CommandKind::Version),
            ("show vlan", CommandKind::Vlan),
            ("vlans", CommandKind::Vlan),
            ("show mac address-table", CommandKind::MacTable),
            ("mac-table", CommandKind::MacTable),
            ("show running-config", CommandKind::Config),
            ("config", CommandKind::Config),
            ("show interface status", CommandKind::InterfaceStatus),
            ("interfaces", CommandKind::InterfaceStatus),
        ];
        for (key, kind) in entries {
            registry.exact.insert(key.to_string(), kind);
        }
        registry.register_port_prefix("show interface ", CommandKind::InterfaceDetail);
        registry
    }

    /// Get the process-wide registry.
    pub fn global() -> &'static RwLock<ParserRegistry> {
        &REGISTRY
    }

    /// Bind an additional command or alias to a parser.
    pub fn register(&mut self, key: impl Into<String>, kind: CommandKind) -> Result<()> {
        let key = key.into();
        let key = key.trim().to_string();
        if self.exact.contains_key(&key) {
            return Err(ParseError::AlreadyRegistered { key }.into());
        }
        self.exact.insert(key, kind);
        Ok(())
    }

    /// Bind a command prefix that is completed by a port number.
    pub fn register_port_prefix(&mut self, prefix: impl Into<String>, kind: CommandKind) {
        self.port_prefixes.push((prefix.into(), kind));
    }

    /// Find the parser for a command.
    pub fn kind_for(&self, command: &str) -> Option<CommandKind> {
        let command = command.trim();
        if let Some(kind) = self.exact.get(command) {
            return Some(*kind);
        }
        self.port_prefixes.iter().find_map(|(prefix, kind)| {
            let port = command.strip_prefix(prefix.as_str())?.trim();
            (!port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())).then_some(*kind)
        })
    }

    /// Parse `output` for `command`, falling back to [`RawOutput`].
    pub fn parse(&self, command: &str, output: &str) -> ParsedRecord {
        match self.kind_for(command) {
            Some(kind) => kind.parse(output),
            None => ParsedRecord::Raw(RawOutput {
                output: output.to_string(),
            }),
        }
    }
}

/// Parse with the process-wide registry.
pub fn parse_output(command: &str, output: &str) -> ParsedRecord {
    match ParserRegistry::global().read() {
        Ok(registry) => registry.parse(command, output),
        Err(poisoned) => poisoned.into_inner().parse(command, output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_command_and_alias() {
        let registry = ParserRegistry::builtin();
        assert_eq!(registry.kind_for("show version"), Some(CommandKind::Version));
        assert_eq!(registry.kind_for("  version "), Some(CommandKind::Version));
        assert_eq!(registry.kind_for("vlans"), Some(CommandKind::Vlan));
        assert_eq!(registry.kind_for("mac-table"), Some(CommandKind::MacTable));
        assert_eq!(registry.kind_for("config"), Some(CommandKind::Config));
        assert_eq!(
            registry.kind_for("show interface status"),
            Some(CommandKind::InterfaceStatus)
        );
    }

    #[test]
    fn test_port_prefix_dispatch() {
        let registry = ParserRegistry::builtin();
        assert_eq!(
            registry.kind_for("show interface 12"),
            Some(CommandKind::InterfaceDetail)
        );
        assert_eq!(registry.kind_for("show interface "), None);
        assert_eq!(registry.kind_for("show interface lag1"), None);
    }

    #[test]
    fn test_unknown_command_is_raw() {
        let record = ParserRegistry::builtin().parse("show ip interface", "some text");
        assert_eq!(
            record,
            ParsedRecord::Raw(RawOutput {
                output: "some text".to_string()
            })
        );
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({ "output": "some text" })
        );
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = ParserRegistry::builtin();
        registry.register("sv", CommandKind::Version).unwrap();
        assert_eq!(registry.kind_for("sv"), Some(CommandKind::Version));
        assert!(matches!(
            registry.register("show vlan", CommandKind::Config),
            Err(crate::Error::Parse(ParseError::AlreadyRegistered { .. }))
        ));
    }

    #[test]
    fn test_global_parse_output() {
        match parse_output("show version", "Boot Version : V2.00 | 07/08/2015") {
            ParsedRecord::Version(info) => assert_eq!(info["Boot Version"], "V2.00"),
            other => panic!("unexpected record {other:?}"),
        }
    }

    #[test]
    fn test_untagged_json_shapes() {
        let config = ParserRegistry::builtin().parse("config", "hostname Switch");
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            serde_json::json!({ "lines": ["hostname Switch"] })
        );

        let version = ParserRegistry::builtin().parse("version", "Boot Version : V2.00");
        assert_eq!(
            serde_json::to_value(&version).unwrap(),
            serde_json::json!({ "Boot Version": "V2.00" })
        );
    }
}
