use std::time::Duration;

use clap::{Parser, Subcommand};
use zyxsh::{CollectorConfig, DriverBuilder, InterfaceEnumerator};

#[derive(Parser, Debug)]
#[command(name = "zyxsh")]
#[command(about = "CLI tool for Zyxel GS1900 switches")]
#[command(after_help = "Examples:
  zyxsh -H 192.168.1.1 version
  zyxsh -H switch.local -u admin -p pass123 config
  zyxsh -H 192.168.1.1 --output-json exec \"show mac address-table\"")]
pub struct Cli {
    /// Switch hostname or IP
    #[arg(short = 'H', long)]
    pub host: String,

    /// SSH username
    #[arg(short, long, default_value = "admin")]
    pub user: String,

    /// SSH password (falls back to $PASSWORD, then a prompt)
    #[arg(short, long)]
    pub password: Option<String>,

    /// SSH port
    #[arg(long, default_value_t = 22)]
    pub port: u16,

    /// Enable JSON debug logging on stderr (also $DEBUG)
    #[arg(long)]
    pub debug: bool,

    /// Output parsed results as JSON
    #[arg(long)]
    pub output_json: bool,

    /// Extra prompt prefix to strip from output, e.g. "GS1900#"
    #[arg(long = "prompt-marker", value_name = "PREFIX")]
    pub prompt_markers: Vec<String>,

    /// Silent polls before output is considered complete
    #[arg(long, default_value_t = 20)]
    pub idle_polls: u32,

    /// Milliseconds between polls
    #[arg(long, default_value_t = 100)]
    pub poll_interval_ms: u64,

    /// Milliseconds to wait after opening the shell and after each write
    #[arg(long, default_value_t = 500)]
    pub settle_ms: u64,

    /// Highest port index probed by interface-details
    #[arg(long, default_value_t = InterfaceEnumerator::DEFAULT_MAX_PORTS)]
    pub max_ports: u32,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show switch version
    Version,
    /// Show running configuration
    Config,
    /// Show interface status
    Interfaces,
    /// Show and parse the detail of every port
    InterfaceDetails,
    /// Show VLAN configuration
    Vlans,
    /// Show MAC address table
    MacTable,
    /// Execute custom command
    Exec {
        /// Command to execute
        command: String,
    },
    /// Interactive shell
    Interactive,
}

impl Command {
    /// What the run is doing, for log records.
    pub fn label(&self) -> &str {
        match self {
            Self::InterfaceDetails => "interface-details",
            Self::Exec { command } => command.as_str(),
            Self::Interactive => "interactive",
            other => other.alias().unwrap_or_default(),
        }
    }

    /// Profile alias for the fixed show commands.
    pub fn alias(&self) -> Option<&'static str> {
        match self {
            Self::Version => Some("version"),
            Self::Config => Some("config"),
            Self::Interfaces => Some("interfaces"),
            Self::Vlans => Some("vlans"),
            Self::MacTable => Some("mac-table"),
            Self::InterfaceDetails | Self::Exec { .. } | Self::Interactive => None,
        }
    }
}

impl Cli {
    pub fn collector_config(&self) -> CollectorConfig {
        CollectorConfig {
            settle: Duration::from_millis(self.settle_ms),
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            max_idle_polls: self.idle_polls,
            ..CollectorConfig::default()
        }
    }

    /// Builder with everything but the password applied.
    pub fn driver_builder(&self) -> DriverBuilder {
        self.prompt_markers.iter().fold(
            DriverBuilder::new(&self.host)
                .port(self.port)
                .username(&self.user)
                .collector_config(self.collector_config()),
            |builder, marker| builder.prompt_marker(marker),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["zyxsh", "-H", "10.0.0.1", "version"]).unwrap();
        assert_eq!(cli.user, "admin");
        assert_eq!(cli.port, 22);
        assert!(cli.password.is_none());
        assert!(matches!(cli.command, Some(Command::Version)));

        let config = cli.collector_config();
        assert_eq!(config.idle_window(), Duration::from_secs(2));
    }

    #[test]
    fn test_exec_and_markers() {
        let cli = Cli::try_parse_from([
            "zyxsh",
            "-H",
            "sw1",
            "--prompt-marker",
            "GS1900#",
            "--output-json",
            "exec",
            "show ip interface",
        ])
        .unwrap();
        assert!(cli.output_json);
        assert_eq!(cli.prompt_markers, vec!["GS1900#"]);
        match cli.command {
            Some(Command::Exec { command }) => assert_eq!(command, "show ip interface"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_command_labels() {
        assert_eq!(Command::MacTable.label(), "mac-table");
        assert_eq!(Command::InterfaceDetails.label(), "interface-details");
        let exec = Command::Exec {
            command: "show ip interface".to_string(),
        };
        assert_eq!(exec.label(), "show ip interface");
    }

    #[test]
    fn test_subcommand_names() {
        for name in ["mac-table", "interface-details", "interactive"] {
            assert!(Cli::try_parse_from(["zyxsh", "-H", "sw1", name]).is_ok());
        }
        assert!(Cli::try_parse_from(["zyxsh", "version"]).is_err());
    }

    #[test]
    fn test_no_subcommand_is_accepted() {
        let cli = Cli::try_parse_from(["zyxsh", "-H", "sw1"]).unwrap();
        assert!(cli.command.is_none());
    }
}
