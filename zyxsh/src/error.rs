//! Error types for zyxsh.

use std::io;
use thiserror::Error;

/// Main error type for zyxsh operations.
#[derive(Error, Debug)]
pub enum Error {
    /// SSH transport-level errors
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Shell channel errors
    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),

    /// Session-level errors
    #[error("Driver error: {0}")]
    Driver(#[from] DriverError),

    /// Parser registry errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Transport layer errors (SSH connection, authentication).
#[derive(Error, Debug)]
pub enum TransportError {
    /// Failed to connect to host
    #[error("Failed to connect to {host}:{port}: {source}")]
    ConnectionFailed {
        host: String,
        port: u16,
        #[source]
        source: russh::Error,
    },

    /// SSH protocol error after the connection was established
    #[error("SSH error: {0}")]
    Ssh(#[from] russh::Error),

    /// Authentication failed
    #[error("Authentication failed for user '{user}'")]
    AuthenticationFailed { user: String },

    /// SSH key error
    #[error("SSH key error: {0}")]
    Key(String),

    /// The host key does not match the one in known_hosts
    #[error("Host key for {host}:{port} changed (known_hosts line {line})")]
    HostKeyChanged { host: String, port: u16, line: usize },

    /// Strict verification rejected a host missing from known_hosts
    #[error("Host key for {host}:{port} is not in known_hosts")]
    HostKeyUnknown { host: String, port: u16 },

    /// known_hosts could not be read or written
    #[error("known_hosts error: {0}")]
    KnownHosts(String),

    /// The connection did not complete in time
    #[error("Connection to {host}:{port} timed out after {timeout:?}")]
    Timeout {
        host: String,
        port: u16,
        timeout: std::time::Duration,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Shell channel errors.
#[derive(Error, Debug)]
pub enum ChannelError {
    /// Failed to open the session channel, PTY or shell
    #[error("Failed to open shell channel: {0}")]
    ShellOpenFailed(#[source] russh::Error),

    /// Channel closed unexpectedly
    #[error("Channel closed")]
    Closed,

    /// SSH protocol error on the channel
    #[error("Channel SSH error: {0}")]
    Ssh(#[source] russh::Error),
}

/// Session errors (command execution, lifecycle).
#[derive(Error, Debug)]
pub enum DriverError {
    /// Session not connected
    #[error("Not connected - call open() first")]
    NotConnected,

    /// Session already connected
    #[error("Session already connected")]
    AlreadyConnected,

    /// The operation was cancelled by the user
    #[error("Interrupted")]
    Interrupted,

    /// Invalid configuration in the session builder
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Parser registry errors. Parsers themselves never fail.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A command key is already bound to a parser
    #[error("Parser already registered for '{key}'")]
    AlreadyRegistered { key: String },
}

/// Result type alias using zyxsh's Error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_connect_timeout_names_target() {
        let err: Error = TransportError::Timeout {
            host: "10.0.0.1".to_string(),
            port: 2222,
            timeout: Duration::from_secs(10),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Transport error: Connection to 10.0.0.1:2222 timed out after 10s"
        );
    }
}
