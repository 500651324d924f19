//! Builder for creating switch drivers.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;

use super::collector::CollectorConfig;
use super::switch::SwitchDriver;
use crate::error::{DriverError, Result};
use crate::platform::DeviceProfile;
use crate::platform::vendors::zyxel_gs1900;
use crate::transport::config::{AuthMethod, HostKeyVerification, SshConfig};

/// Builder for constructing switch drivers.
///
/// # Example
///
/// ```rust,no_run
/// use zyxsh::{Driver, DriverBuilder};
///
/// # async fn example() -> Result<(), zyxsh::Error> {
/// let mut driver = DriverBuilder::new("192.168.1.1")
///     .username("admin")
///     .password("secret")
///     .prompt_marker("GS1900#")
///     .build()?;
///
/// driver.open().await?;
/// let response = driver.send_command("show version").await?;
/// println!("{}", response.result);
/// driver.close().await?;
/// # Ok(())
/// # }
/// ```
pub struct DriverBuilder {
    host: String,
    port: u16,
    username: Option<String>,
    auth: AuthMethod,
    profile: Option<DeviceProfile>,
    extra_prompt_markers: Vec<String>,
    timeout: Duration,
    collector: CollectorConfig,
    host_key_verification: HostKeyVerification,
    known_hosts_path: Option<PathBuf>,
}

impl DriverBuilder {
    /// Create a new driver builder for the specified host.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: 22,
            username: None,
            auth: AuthMethod::None,
            profile: None,
            extra_prompt_markers: Vec::new(),
            timeout: Duration::from_secs(10),
            collector: CollectorConfig::default(),
            host_key_verification: HostKeyVerification::default(),
            known_hosts_path: None,
        }
    }

    /// Set the SSH port (default: 22).
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the username for authentication.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set password authentication.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.auth = AuthMethod::password(password);
        self
    }

    /// Set private key authentication.
    pub fn private_key(mut self, key_path: impl Into<PathBuf>) -> Self {
        self.auth = AuthMethod::PrivateKey {
            path: key_path.into(),
            passphrase: None,
        };
        self
    }

    /// Set private key authentication with passphrase.
    pub fn private_key_with_passphrase(
        mut self,
        key_path: impl Into<PathBuf>,
        passphrase: impl Into<String>,
    ) -> Self {
        self.auth = AuthMethod::PrivateKey {
            path: key_path.into(),
            passphrase: Some(SecretString::from(passphrase.into())),
        };
        self
    }

    /// Use a custom device profile instead of the GS1900 one.
    pub fn profile(mut self, profile: DeviceProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Add a prompt prefix for the sanitizer to drop, e.g. `GS1900#`.
    pub fn prompt_marker(mut self, marker: impl Into<String>) -> Self {
        self.extra_prompt_markers.push(marker.into());
        self
    }

    /// Set the connection timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the collection timing.
    pub fn collector_config(mut self, config: CollectorConfig) -> Self {
        self.collector = config;
        self
    }

    /// Set the host key verification mode.
    pub fn host_key_verification(mut self, mode: HostKeyVerification) -> Self {
        self.host_key_verification = mode;
        self
    }

    /// Use a specific known_hosts file.
    pub fn known_hosts_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.known_hosts_path = Some(path.into());
        self
    }

    /// Build the driver.
    ///
    /// This creates the driver but does not connect. Call `open()` on the
    /// returned driver to establish the connection.
    pub fn build(self) -> Result<SwitchDriver> {
        let username = self
            .username
            .filter(|u| !u.is_empty())
            .ok_or_else(|| DriverError::InvalidConfig {
                message: "Username is required".to_string(),
            })?;

        if self.collector.max_idle_polls == 0 {
            return Err(DriverError::InvalidConfig {
                message: "max_idle_polls must be at least 1".to_string(),
            }
            .into());
        }

        let profile = self
            .extra_prompt_markers
            .into_iter()
            .fold(self.profile.unwrap_or_else(zyxel_gs1900::profile), |p, m| {
                p.with_prompt_marker(m)
            });

        let mut ssh_config = SshConfig::new(self.host, username, self.auth);
        ssh_config.port = self.port;
        ssh_config.timeout = self.timeout;
        ssh_config.terminal_width = profile.terminal_width;
        ssh_config.terminal_height = profile.terminal_height;
        ssh_config.host_key_verification = self.host_key_verification;
        ssh_config.known_hosts_path = self.known_hosts_path;

        Ok(SwitchDriver::new(ssh_config, profile, self.collector))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::Driver;
    use crate::error::Error;

    #[test]
    fn test_username_required() {
        let result = DriverBuilder::new("10.0.0.1").password("pw").build();
        assert!(matches!(
            result,
            Err(Error::Driver(DriverError::InvalidConfig { .. }))
        ));
    }

    #[test]
    fn test_zero_idle_polls_rejected() {
        let config = CollectorConfig {
            max_idle_polls: 0,
            ..CollectorConfig::default()
        };
        let result = DriverBuilder::new("10.0.0.1")
            .username("admin")
            .collector_config(config)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_build_applies_settings() {
        let driver = DriverBuilder::new("10.0.0.1")
            .port(2222)
            .username("admin")
            .password("1234")
            .prompt_marker("GS1900#")
            .timeout(Duration::from_secs(3))
            .build()
            .unwrap();

        assert_eq!(driver.config().port, 2222);
        assert_eq!(driver.config().timeout, Duration::from_secs(3));
        assert_eq!(driver.config().terminal_width, 80);
        assert!(driver.profile().prompt_markers.contains(&"GS1900#".to_string()));
        assert!(!driver.is_open());
        assert!(!driver.is_alive());
    }

    #[test]
    fn test_send_before_open_fails() {
        let mut driver = DriverBuilder::new("10.0.0.1")
            .username("admin")
            .build()
            .unwrap();
        let result = tokio_test::block_on(driver.send_command("show version"));
        assert!(matches!(
            result,
            Err(Error::Driver(DriverError::NotConnected))
        ));
        tokio_test::block_on(driver.close()).unwrap();
    }
}
