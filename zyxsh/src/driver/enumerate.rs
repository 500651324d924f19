//! Port discovery by probing.
//!
//! The switch has no "list ports" command, so ports are found by asking for
//! `show interface 1`, `show interface 2`, ... until the device answers with
//! its invalid-port message.

use log::{debug, warn};

use super::Driver;
use crate::error::Result;
use crate::platform::DeviceProfile;

/// Walks port indices from 1 until the device rejects one.
#[derive(Debug, Clone)]
pub struct InterfaceEnumerator {
    profile: DeviceProfile,
    max_ports: u32,
}

impl InterfaceEnumerator {
    /// Upper bound on probed ports unless overridden.
    pub const DEFAULT_MAX_PORTS: u32 = 128;

    /// Create an enumerator using the profile's command template and marker.
    pub fn new(profile: &DeviceProfile) -> Self {
        Self {
            profile: profile.clone(),
            max_ports: Self::DEFAULT_MAX_PORTS,
        }
    }

    /// Set the probe limit.
    pub fn with_max_ports(mut self, max_ports: u32) -> Self {
        self.max_ports = max_ports;
        self
    }

    /// Get the probe limit.
    pub fn max_ports(&self) -> u32 {
        self.max_ports
    }

    /// Probe ports in ascending order.
    ///
    /// A device with N ports costs N+1 commands. The first error aborts the
    /// walk.
    pub async fn collect<D: Driver>(&self, driver: &mut D) -> Result<Vec<(u32, String)>> {
        let mut ports = Vec::new();

        for port in 1..=self.max_ports {
            let command = self.profile.interface_command_for(port);
            let response = driver.send_command(&command).await?;

            if self.profile.is_invalid_port(&response.result) {
                debug!("Port {} rejected, found {} ports", port, ports.len());
                return Ok(ports);
            }

            ports.push((port, response.result));
        }

        warn!(
            "No invalid-port answer after {} ports, stopping",
            self.max_ports
        );
        Ok(ports)
    }
}
