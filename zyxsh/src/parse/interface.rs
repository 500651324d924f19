//! `show interface <n>` parser.
//!
//! Extraction is table driven: every [`FieldRule`] runs independently over
//! the whole text and contributes its captures only when it matches. A
//! missing line just means a missing field.
//!
//! ```text
//! GigabitEthernet1 is up
//!   Hardware is Gigabit Ethernet
//!   Auto-duplex, Auto-speed, media type is Copper
//!   flow-control is off
//!      1059016090 packets input, 2902879441 bytes, 0 throttles
//!      Received 57937948 broadcasts (82930444 multicasts)
//!      ...
//!      0 PAUSE output
//! ```

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// How a capture group is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Top-level string attribute of [`InterfaceInfo`].
    Text,
    /// Non-negative counter under `statistics`.
    Counter,
}

/// One extraction: a pattern and the named fields its groups fill, in
/// group order.
#[derive(Debug)]
pub struct FieldRule {
    pub pattern: &'static str,
    pub fields: &'static [(&'static str, FieldKind)],
}

use FieldKind::{Counter, Text};

/// Extraction table for the GS1900 interface detail.
pub static RULES: &[FieldRule] = &[
    FieldRule {
        pattern: r"(?m)^(\S+)\s+is\s+(up|down)",
        fields: &[("name", Text), ("status", Text)],
    },
    FieldRule {
        pattern: r"(?m)Hardware is (.+?)$",
        fields: &[("hardware", Text)],
    },
    FieldRule {
        pattern: r"([\w-]+)-duplex,\s*([\w-]+)-speed,\s*media type is (\w+)",
        fields: &[("duplex", Text), ("speed", Text), ("media_type", Text)],
    },
    FieldRule {
        pattern: r"flow-control is (\w+)",
        fields: &[("flow_control", Text)],
    },
    FieldRule {
        pattern: r"(\d+) packets input, (\d+) bytes, (\d+) throttles",
        fields: &[
            ("packets_input", Counter),
            ("bytes_input", Counter),
            ("throttles_input", Counter),
        ],
    },
    FieldRule {
        pattern: r"Received (\d+) broadcasts \((\d+) multicasts\)",
        fields: &[("broadcasts", Counter), ("multicasts", Counter)],
    },
    FieldRule {
        pattern: r"(\d+) runts, (\d+) giants",
        fields: &[("runts", Counter), ("giants", Counter)],
    },
    FieldRule {
        pattern: r"(\d+) input errors, (\d+) CRC, (\d+) frame, (\d+) overrun, (\d+) ignored",
        fields: &[
            ("input_errors", Counter),
            ("crc_errors", Counter),
            ("frame_errors", Counter),
            ("overrun_errors", Counter),
            ("ignored_errors", Counter),
        ],
    },
    FieldRule {
        pattern: r"(\d+) multicast, (\d+) pause input",
        fields: &[("multicast", Counter), ("pause_input", Counter)],
    },
    FieldRule {
        pattern: r"(\d+) input packets with dribble condition",
        fields: &[("dribble_packets", Counter)],
    },
    FieldRule {
        pattern: r"(\d+) packets output, (\d+) bytes, (\d+) underrun",
        fields: &[
            ("packets_output", Counter),
            ("bytes_output", Counter),
            ("underrun", Counter),
        ],
    },
    FieldRule {
        pattern: r"(\d+) output errors, (\d+) collisions, (\d+) interface resets",
        fields: &[
            ("output_errors", Counter),
            ("collisions", Counter),
            ("interface_resets", Counter),
        ],
    },
    FieldRule {
        pattern: r"(\d+) babbles, (\d+) late collision, (\d+) deferred",
        fields: &[
            ("babbles", Counter),
            ("late_collisions", Counter),
            ("deferred", Counter),
        ],
    },
    FieldRule {
        pattern: r"(\d+) PAUSE output",
        fields: &[("pause_output", Counter)],
    },
];

static COMPILED: Lazy<Vec<(Regex, &'static FieldRule)>> = Lazy::new(|| {
    RULES
        .iter()
        .map(|rule| (Regex::new(rule.pattern).expect("interface rule is valid"), rule))
        .collect()
});

/// Link state reported on the first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStatus {
    Up,
    Down,
}

/// Parsed interface detail. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InterfaceInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LinkStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_control: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<IndexMap<String, u64>>,
}

impl InterfaceInfo {
    /// True when nothing was extracted.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Look up one counter.
    pub fn counter(&self, name: &str) -> Option<u64> {
        self.statistics.as_ref()?.get(name).copied()
    }

    fn set_text(&mut self, field: &str, value: &str) {
        let value = value.trim();
        let slot = match field {
            "name" => &mut self.name,
            "status" => {
                self.status = match value {
                    "up" => Some(LinkStatus::Up),
                    "down" => Some(LinkStatus::Down),
                    _ => None,
                };
                return;
            }
            "hardware" => &mut self.hardware,
            "duplex" => &mut self.duplex,
            "speed" => &mut self.speed,
            "media_type" => &mut self.media_type,
            "flow_control" => &mut self.flow_control,
            _ => return,
        };
        *slot = Some(value.to_string());
    }
}

/// Parse one interface's detail output.
pub fn parse_interface(output: &str) -> InterfaceInfo {
    let mut info = InterfaceInfo::default();
    let mut stats = IndexMap::new();

    for (regex, rule) in COMPILED.iter() {
        let Some(caps) = regex.captures(output) else {
            continue;
        };
        for (i, (field, kind)) in rule.fields.iter().enumerate() {
            let Some(m) = caps.get(i + 1) else {
                continue;
            };
            match kind {
                Text => info.set_text(field, m.as_str()),
                Counter => {
                    if let Ok(value) = m.as_str().parse::<u64>() {
                        stats.insert(field.to_string(), value);
                    }
                }
            }
        }
    }

    if !stats.is_empty() {
        info.statistics = Some(stats);
    }
    info
}
