//! Device profile: the literal text conventions of a switch CLI.

use indexmap::IndexMap;

/// Everything the core needs to know about a device's CLI text.
///
/// There is no structured signalling on these switches, so the profile is a
/// bag of literal markers plus the alias-to-command map used by the CLI.
#[derive(Debug, Clone)]
pub struct DeviceProfile {
    /// Profile name (e.g., "zyxel_gs1900").
    pub name: String,

    /// Token printed when output exceeds one screen.
    pub pagination_marker: String,

    /// Keystroke that requests the next page.
    pub continue_key: String,

    /// Command that ends the remote shell.
    pub exit_command: String,

    /// Line prefixes removed by the sanitizer.
    pub prompt_markers: Vec<String>,

    /// Substring the device prints for a nonexistent port.
    pub invalid_port_marker: String,

    /// Command template for per-port detail, `{port}` is substituted.
    pub interface_command: String,

    /// Short aliases mapped to full device commands.
    pub commands: IndexMap<String, String>,

    /// Terminal width for the PTY.
    pub terminal_width: u32,

    /// Terminal height for the PTY.
    pub terminal_height: u32,
}

impl DeviceProfile {
    /// Create a profile with the given name and generic defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pagination_marker: "--More--".to_string(),
            continue_key: " ".to_string(),
            exit_command: "exit".to_string(),
            prompt_markers: vec![],
            invalid_port_marker: "Invalid port id".to_string(),
            interface_command: "show interface {port}".to_string(),
            commands: IndexMap::new(),
            terminal_width: 80,
            terminal_height: 24,
        }
    }

    /// Set the pagination marker.
    pub fn with_pagination_marker(mut self, marker: impl Into<String>) -> Self {
        self.pagination_marker = marker.into();
        self
    }

    /// Set the continuation keystroke.
    pub fn with_continue_key(mut self, key: impl Into<String>) -> Self {
        self.continue_key = key.into();
        self
    }

    /// Set the exit command.
    pub fn with_exit_command(mut self, command: impl Into<String>) -> Self {
        self.exit_command = command.into();
        self
    }

    /// Add a prompt marker.
    pub fn with_prompt_marker(mut self, marker: impl Into<String>) -> Self {
        self.prompt_markers.push(marker.into());
        self
    }

    /// Set the invalid port marker.
    pub fn with_invalid_port_marker(mut self, marker: impl Into<String>) -> Self {
        self.invalid_port_marker = marker.into();
        self
    }

    /// Set the per-port command template.
    pub fn with_interface_command(mut self, template: impl Into<String>) -> Self {
        self.interface_command = template.into();
        self
    }

    /// Add a command alias.
    pub fn with_command(mut self, alias: impl Into<String>, command: impl Into<String>) -> Self {
        self.commands.insert(alias.into(), command.into());
        self
    }

    /// Set terminal dimensions.
    pub fn with_terminal_size(mut self, width: u32, height: u32) -> Self {
        self.terminal_width = width;
        self.terminal_height = height;
        self
    }

    /// Resolve an alias to its device command, if known.
    pub fn command(&self, alias: &str) -> Option<&str> {
        self.commands.get(alias).map(String::as_str)
    }

    /// The detail command for one port index.
    pub fn interface_command_for(&self, port: u32) -> String {
        self.interface_command.replace("{port}", &port.to_string())
    }

    /// Whether cleaned output is the device's invalid-port answer.
    ///
    /// An empty marker never matches.
    pub fn is_invalid_port(&self, output: &str) -> bool {
        !self.invalid_port_marker.is_empty() && output.contains(self.invalid_port_marker.as_str())
    }
}
