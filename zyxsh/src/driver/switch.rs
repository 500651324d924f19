//! Driver for a single switch connection.

use log::{debug, info, warn};

use super::Driver;
use super::collector::{CollectorConfig, CommandCollector};
use super::enumerate::InterfaceEnumerator;
use super::response::Response;
use crate::error::{DriverError, Result};
use crate::platform::DeviceProfile;
use crate::transport::{ShellTransport, SshConfig, SshTransport};

/// Driver holding one SSH connection to a switch.
///
/// The connection is opened once; every command then runs on a new shell
/// channel over it.
pub struct SwitchDriver<T: ShellTransport = SshTransport> {
    config: SshConfig,
    profile: DeviceProfile,
    collector: CommandCollector,
    transport: Option<T>,
}

impl<T: ShellTransport> SwitchDriver<T> {
    /// Create a new, unconnected driver.
    pub fn new(
        config: SshConfig,
        profile: DeviceProfile,
        collector_config: CollectorConfig,
    ) -> Self {
        let collector = CommandCollector::new(collector_config, &profile);
        Self {
            config,
            profile,
            collector,
            transport: None,
        }
    }

    /// Create a driver over an already established transport.
    pub fn with_transport(
        config: SshConfig,
        profile: DeviceProfile,
        collector_config: CollectorConfig,
        transport: T,
    ) -> Self {
        let mut driver = Self::new(config, profile, collector_config);
        driver.transport = Some(transport);
        driver
    }

    /// Get the connection configuration.
    pub fn config(&self) -> &SshConfig {
        &self.config
    }

    /// Get the device profile.
    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    /// Get the command collector.
    pub fn collector(&self) -> &CommandCollector {
        &self.collector
    }

    /// Open a raw shell, e.g. for interactive passthrough.
    pub async fn open_shell(&self) -> Result<T::Shell> {
        let transport = self.transport.as_ref().ok_or(DriverError::NotConnected)?;
        transport.open_shell().await
    }

    /// Query `show interface 1..` until the device reports an invalid port.
    ///
    /// Returns the cleaned detail text per port index, stopping after
    /// `max_ports` queries.
    pub async fn collect_interfaces(&mut self, max_ports: u32) -> Result<Vec<(u32, String)>> {
        let enumerator = InterfaceEnumerator::new(&self.profile).with_max_ports(max_ports);
        enumerator.collect(self).await
    }
}

impl<T: ShellTransport> Driver for SwitchDriver<T> {
    async fn open(&mut self) -> Result<()> {
        if self.transport.is_some() {
            return Err(DriverError::AlreadyConnected.into());
        }

        info!("Connecting to {}", self.config.socket_addr());
        let transport = T::connect(self.config.clone()).await?;
        self.transport = Some(transport);
        info!("Connected to {}", self.config.host);
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(transport) = self.transport.take() {
            transport.disconnect().await?;
            info!("Disconnected from {}", self.config.host);
        }
        Ok(())
    }

    async fn send_command(&mut self, command: &str) -> Result<Response> {
        let transport = self.transport.as_ref().ok_or(DriverError::NotConnected)?;
        debug!("Opening shell for '{}'", command);
        let shell = transport.open_shell().await?;
        self.collector.execute(shell, command).await
    }

    fn is_open(&self) -> bool {
        self.transport.is_some()
    }

    fn is_alive(&self) -> bool {
        self.transport.as_ref().is_some_and(|t| t.is_alive())
    }
}

impl<T: ShellTransport> Drop for SwitchDriver<T> {
    fn drop(&mut self) {
        if self.transport.is_some() {
            warn!(
                "Driver for {} dropped without close(), connection torn down uncleanly",
                self.config.host
            );
        }
    }
}
