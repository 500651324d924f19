//! High-level driver for switch interaction.
//!
//! Every command runs on its own shell channel: open, prime, send, collect
//! until idle, exit, close. [`SwitchDriver`] owns the connection and hands
//! each fresh shell to a [`CommandCollector`].

mod builder;
mod collector;
mod enumerate;
mod response;
mod switch;

pub use builder::DriverBuilder;
pub use collector::{CollectorConfig, CommandCollector};
pub use enumerate::InterfaceEnumerator;
pub use response::Response;
pub use switch::SwitchDriver;

use std::future::Future;

use crate::error::Result;

/// Trait for device drivers.
pub trait Driver: Send + Sync {
    /// Open the connection to the device.
    fn open(&mut self) -> impl Future<Output = Result<()>> + Send;

    /// Close the connection. Closing twice is a no-op.
    fn close(&mut self) -> impl Future<Output = Result<()>> + Send;

    /// Run one command and return its cleaned output.
    fn send_command(&mut self, command: &str) -> impl Future<Output = Result<Response>> + Send;

    /// Send multiple commands sequentially.
    fn send_commands(
        &mut self,
        commands: &[&str],
    ) -> impl Future<Output = Result<Vec<Response>>> + Send {
        async move {
            let mut responses = Vec::with_capacity(commands.len());
            for cmd in commands {
                responses.push(self.send_command(cmd).await?);
            }
            Ok(responses)
        }
    }

    /// Check if the driver is connected.
    fn is_open(&self) -> bool;

    /// Check if the underlying connection is still alive.
    ///
    /// Returns `false` when the driver was never opened, was closed, or the
    /// peer dropped the connection.
    fn is_alive(&self) -> bool;
}
