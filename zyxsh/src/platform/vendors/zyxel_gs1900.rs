//! Zyxel GS1900 series profile.
//!
//! The GS1900 CLI prints `GS1900#` as its prompt, paginates with `--More--`
//! followed by a backspace, and answers `show interface <n>` for a port
//! past the last one with `Invalid port id`.
//!
//! # Sample
//!
//! ```text
//! GS1900# show version
//! Boot Version     : V2.00 | 07/08/2015
//! Firmware Version : V2.50(AAHK.0) | 10/21/2019
//! GS1900#
//! ```

use crate::channel::sanitize::DEFAULT_PROMPT_MARKERS;
use crate::platform::DeviceProfile;

/// Create the GS1900 profile.
///
/// The prompt markers are the generic `Switch>`/`Switch#` pair rather than
/// the real `GS1900#` prompt, so prompt lines survive sanitization. Add
/// `GS1900#` with [`DeviceProfile::with_prompt_marker`] to drop them.
pub fn profile() -> DeviceProfile {
    DEFAULT_PROMPT_MARKERS
        .iter()
        .fold(DeviceProfile::new("zyxel_gs1900"), |profile, marker| {
            profile.with_prompt_marker(*marker)
        })
        .with_pagination_marker("--More--")
        .with_continue_key(" ")
        .with_exit_command("exit")
        .with_invalid_port_marker("Invalid port id")
        .with_interface_command("show interface {port}")
        .with_command("version", "show version")
        .with_command("config", "show running-config")
        .with_command("interfaces", "show interface status")
        .with_command("vlans", "show vlan")
        .with_command("mac-table", "show mac address-table")
        .with_terminal_size(80, 24)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gs1900_profile() {
        let profile = profile();
        assert_eq!(profile.name, "zyxel_gs1900");
        assert_eq!(profile.pagination_marker, "--More--");
        assert_eq!(profile.continue_key, " ");
        assert_eq!(profile.exit_command, "exit");
        assert_eq!(profile.prompt_markers, vec!["Switch>", "Switch#"]);
        assert_eq!(profile.commands.len(), 5);
    }

    #[test]
    fn test_command_aliases() {
        let profile = profile();
        assert_eq!(profile.command("version"), Some("show version"));
        assert_eq!(profile.command("mac-table"), Some("show mac address-table"));
        assert_eq!(profile.command("interfaces"), Some("show interface status"));
        assert_eq!(profile.command("reload"), None);
    }

    #[test]
    fn test_interface_command_for() {
        assert_eq!(profile().interface_command_for(32), "show interface 32");
    }

    #[test]
    fn test_invalid_port_detection() {
        let profile = profile();
        assert!(profile.is_invalid_port("Invalid port id"));
        assert!(profile.is_invalid_port("GS1900# show interface 40\nInvalid port id\n"));
        assert!(!profile.is_invalid_port(
            "GigabitEthernet1 is up\n  Hardware is Gigabit Ethernet\n  flow-control is off"
        ));
    }
}
