//! SSH transport layer wrapping russh.
//!
//! This module provides the low-level SSH connection management,
//! handling connection setup, authentication, and shell channel creation.

pub mod config;
mod ssh;

pub use config::{AuthMethod, HostKeyVerification, SshConfig};
pub use ssh::{SshShell, SshTransport};

use std::future::Future;

use crate::channel::ShellChannel;
use crate::error::Result;

/// An established connection that can open interactive shells.
pub trait ShellTransport: Send + Sync + Sized {
    /// Shell channel type produced by [`open_shell`](Self::open_shell).
    type Shell: ShellChannel;

    /// Connect and authenticate.
    fn connect(config: SshConfig) -> impl Future<Output = Result<Self>> + Send;

    /// Whether the connection is still usable.
    fn is_alive(&self) -> bool;

    /// Open a fresh interactive shell on this connection.
    fn open_shell(&self) -> impl Future<Output = Result<Self::Shell>> + Send;

    /// Tear down the connection.
    fn disconnect(self) -> impl Future<Output = Result<()>> + Send;
}
