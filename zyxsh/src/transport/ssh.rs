//! SSH transport implementation using russh.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use bytes::BytesMut;
use futures_util::FutureExt;
use log::{debug, trace, warn};
use russh::client::{self, Handle, Msg};
use russh::keys::{PrivateKeyWithHashAlg, PublicKey, load_secret_key};
use russh::{Channel, ChannelMsg};
use secrecy::ExposeSecret;

use super::ShellTransport;
use super::config::{AuthMethod, HostKeyVerification, SshConfig};
use crate::channel::ShellChannel;
use crate::error::{ChannelError, Result, TransportError};

/// SSH transport wrapping a russh client session.
pub struct SshTransport {
    /// The russh session handle.
    session: Handle<SshHandler>,

    /// Configuration used for this connection.
    config: SshConfig,
}

impl SshTransport {
    /// Authenticate with the server.
    async fn authenticate(session: &mut Handle<SshHandler>, config: &SshConfig) -> Result<()> {
        let success = match &config.auth {
            AuthMethod::None => session
                .authenticate_none(&config.username)
                .await
                .map_err(TransportError::Ssh)?
                .success(),
            AuthMethod::Password(password) => session
                .authenticate_password(&config.username, password.expose_secret())
                .await
                .map_err(TransportError::Ssh)?
                .success(),
            AuthMethod::PrivateKey { path, passphrase } => {
                let key = load_secret_key(path, passphrase.as_ref().map(|p| p.expose_secret()))
                    .map_err(|e| TransportError::Key(e.to_string()))?;

                let hash_alg = session
                    .best_supported_rsa_hash()
                    .await
                    .map_err(TransportError::Ssh)?
                    .flatten();

                session
                    .authenticate_publickey(
                        &config.username,
                        PrivateKeyWithHashAlg::new(Arc::new(key), hash_alg),
                    )
                    .await
                    .map_err(TransportError::Ssh)?
                    .success()
            }
        };

        if !success {
            return Err(TransportError::AuthenticationFailed {
                user: config.username.clone(),
            }
            .into());
        }

        Ok(())
    }
}

impl ShellTransport for SshTransport {
    type Shell = SshShell;

    /// Connect to the SSH server and authenticate.
    async fn connect(config: SshConfig) -> Result<Self> {
        let ssh_config = Arc::new(client::Config {
            inactivity_timeout: None,
            ..Default::default()
        });

        let host_key_error: Arc<Mutex<Option<TransportError>>> = Arc::new(Mutex::new(None));

        let handler = SshHandler {
            host: config.host.clone(),
            port: config.port,
            host_key_verification: config.host_key_verification.clone(),
            known_hosts_path: config.known_hosts_path.clone(),
            host_key_error: host_key_error.clone(),
        };

        debug!("Connecting to {}", config.socket_addr());

        let mut session = tokio::time::timeout(
            config.timeout,
            client::connect(ssh_config, (config.host.as_str(), config.port), handler),
        )
        .await
        .map_err(|_| TransportError::Timeout {
            host: config.host.clone(),
            port: config.port,
            timeout: config.timeout,
        })?
        .map_err(|e| {
            // Prefer the detailed host key error over russh's generic UnknownKey
            let stored = host_key_error
                .lock()
                .ok()
                .and_then(|mut slot| slot.take());
            stored.unwrap_or_else(|| TransportError::ConnectionFailed {
                host: config.host.clone(),
                port: config.port,
                source: e,
            })
        })?;

        Self::authenticate(&mut session, &config).await?;
        debug!("Authenticated to {} as '{}'", config.host, config.username);

        Ok(Self { session, config })
    }

    fn is_alive(&self) -> bool {
        !self.session.is_closed()
    }

    async fn open_shell(&self) -> Result<SshShell> {
        let channel = self
            .session
            .channel_open_session()
            .await
            .map_err(ChannelError::ShellOpenFailed)?;

        channel
            .request_pty(
                true,
                "xterm",
                self.config.terminal_width,
                self.config.terminal_height,
                0,
                0,
                &[],
            )
            .await
            .map_err(ChannelError::ShellOpenFailed)?;

        channel
            .request_shell(true)
            .await
            .map_err(ChannelError::ShellOpenFailed)?;

        trace!("Shell channel opened on {}", self.config.host);
        Ok(SshShell::new(channel))
    }

    async fn disconnect(self) -> Result<()> {
        debug!("Disconnecting from {}", self.config.host);
        self.session
            .disconnect(russh::Disconnect::ByApplication, "", "en")
            .await
            .map_err(TransportError::Ssh)?;
        Ok(())
    }
}

/// Interactive shell on a russh session channel.
///
/// Incoming channel messages are drained without blocking into a local byte
/// queue, which backs the non-blocking poll and read operations.
pub struct SshShell {
    channel: Channel<Msg>,
    pending: BytesMut,
    /// Peer sent EOF or close; nothing more will arrive.
    finished: bool,
    /// `close()` already ran.
    closed: bool,
}

impl SshShell {
    fn new(channel: Channel<Msg>) -> Self {
        Self {
            channel,
            pending: BytesMut::with_capacity(4096),
            finished: false,
            closed: false,
        }
    }

    /// Move every message that is already queued into `pending`.
    fn drain(&mut self) {
        while !self.finished {
            match self.channel.wait().now_or_never() {
                Some(Some(ChannelMsg::Data { data })) => {
                    self.pending.extend_from_slice(&data);
                }
                Some(Some(ChannelMsg::ExtendedData { data, .. })) => {
                    self.pending.extend_from_slice(&data);
                }
                Some(Some(ChannelMsg::Eof | ChannelMsg::Close)) | Some(None) => {
                    trace!("Shell channel finished by peer");
                    self.finished = true;
                }
                Some(Some(_)) => {}
                None => break,
            }
        }
    }

    /// Whether the peer has ended the shell.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl ShellChannel for SshShell {
    async fn send(&mut self, data: &[u8]) -> Result<()> {
        if self.closed {
            return Err(ChannelError::Closed.into());
        }
        self.channel.data(data).await.map_err(ChannelError::Ssh)?;
        Ok(())
    }

    fn poll_readable(&mut self) -> Result<bool> {
        self.drain();
        Ok(!self.pending.is_empty())
    }

    fn read_available(&mut self, max_bytes: usize) -> Result<Vec<u8>> {
        self.drain();
        let n = max_bytes.min(self.pending.len());
        Ok(self.pending.split_to(n).to_vec())
    }

    async fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        // A channel the peer already dropped cannot be closed again
        if let Err(e) = self.channel.close().await {
            debug!("Ignoring error while closing shell channel: {}", e);
        }
        Ok(())
    }
}

/// SSH client handler for russh.
struct SshHandler {
    host: String,
    port: u16,
    host_key_verification: HostKeyVerification,
    known_hosts_path: Option<PathBuf>,
    /// Detailed host-key error surfaced by connect().
    host_key_error: Arc<Mutex<Option<TransportError>>>,
}

impl SshHandler {
    /// Check the host key against known_hosts.
    ///
    /// Returns `Ok(true)` if matched, `Ok(false)` if the host is unknown.
    fn check_known_hosts(&self, pubkey: &PublicKey) -> std::result::Result<bool, TransportError> {
        let result = if let Some(ref path) = self.known_hosts_path {
            russh::keys::check_known_hosts_path(&self.host, self.port, pubkey, path)
        } else {
            russh::keys::check_known_hosts(&self.host, self.port, pubkey)
        };

        match result {
            Ok(matched) => Ok(matched),
            Err(russh::keys::Error::KeyChanged { line }) => Err(TransportError::HostKeyChanged {
                host: self.host.clone(),
                port: self.port,
                line,
            }),
            Err(e) => Err(TransportError::KnownHosts(e.to_string())),
        }
    }

    /// Save a new host key to known_hosts.
    fn learn_host_key(&self, pubkey: &PublicKey) -> std::result::Result<(), TransportError> {
        let result = if let Some(ref path) = self.known_hosts_path {
            russh::keys::known_hosts::learn_known_hosts_path(&self.host, self.port, pubkey, path)
        } else {
            russh::keys::known_hosts::learn_known_hosts(&self.host, self.port, pubkey)
        };

        result.map_err(|e| TransportError::KnownHosts(e.to_string()))
    }

    fn reject(&self, error: TransportError) -> bool {
        if let Ok(mut slot) = self.host_key_error.lock() {
            *slot = Some(error);
        }
        false
    }
}

impl client::Handler for SshHandler {
    type Error = russh::Error;

    async fn check_server_key(
        &mut self,
        server_public_key: &PublicKey,
    ) -> std::result::Result<bool, Self::Error> {
        match self.host_key_verification {
            HostKeyVerification::Disabled => Ok(true),

            HostKeyVerification::AcceptNew => match self.check_known_hosts(server_public_key) {
                Ok(true) => Ok(true),
                Ok(false) => {
                    if let Err(e) = self.learn_host_key(server_public_key) {
                        warn!("Failed to save host key: {}", e);
                    }
                    Ok(true)
                }
                Err(e) => Ok(self.reject(e)),
            },

            HostKeyVerification::Strict => match self.check_known_hosts(server_public_key) {
                Ok(true) => Ok(true),
                Ok(false) => Ok(self.reject(TransportError::HostKeyUnknown {
                    host: self.host.clone(),
                    port: self.port,
                })),
                Err(e) => Ok(self.reject(e)),
            },
        }
    }
}
