//! # zyxsh
//!
//! Async SSH CLI scraper for Zyxel GS1900 switches.
//!
//! The GS1900 CLI has no structured output and no reliable end-of-response
//! marker. zyxsh runs every command on a fresh interactive shell, answers
//! `--More--` pagination, waits for the output to go quiet, and turns the
//! cleaned text into typed records.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use zyxsh::{Driver, DriverBuilder};
//! use zyxsh::parse::parse_output;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), zyxsh::Error> {
//!     let mut driver = DriverBuilder::new("192.168.1.1")
//!         .username("admin")
//!         .password("secret")
//!         .build()?;
//!
//!     driver.open().await?;
//!
//!     let response = driver.send_command("show vlan").await?;
//!     let record = parse_output(&response.command, &response.result);
//!     println!("{:?}", record);
//!
//!     driver.close().await?;
//!     Ok(())
//! }
//! ```

pub mod channel;
pub mod driver;
pub mod error;
pub mod parse;
pub mod platform;
pub mod transport;

// Re-export main types for convenience
pub use driver::{
    CollectorConfig, Driver, DriverBuilder, InterfaceEnumerator, Response, SwitchDriver,
};
pub use error::Error;
pub use parse::{ParsedRecord, parse_output};
pub use platform::DeviceProfile;
pub use transport::{AuthMethod, SshConfig};
