//! The command execution protocol.
//!
//! The switch never says when it is done, so a command is considered
//! complete once the shell has been silent for `max_idle_polls` consecutive
//! polls. A command whose device-side processing pauses longer than that
//! window comes back truncated; the window is configurable for that reason.

use std::time::Duration;

use log::{debug, trace, warn};
use tokio::time::{Instant, sleep};

use super::response::Response;
use crate::channel::{CaptureBuffer, Sanitizer, ShellChannel};
use crate::error::Result;
use crate::platform::DeviceProfile;

/// Timing and limits for one command collection.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Pause after opening the shell and after each priming write.
    pub settle: Duration,

    /// Sleep between polls while the shell is silent.
    pub poll_interval: Duration,

    /// Consecutive silent polls that end collection.
    pub max_idle_polls: u32,

    /// Largest read per poll.
    pub read_chunk: usize,

    /// Most continuation keystrokes sent for one command.
    pub max_pages: u32,

    /// Hard limit on the collection loop.
    pub max_collect: Duration,
}

impl CollectorConfig {
    /// Silence needed before output is considered complete.
    pub fn idle_window(&self) -> Duration {
        self.poll_interval * self.max_idle_polls
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(500),
            poll_interval: Duration::from_millis(100),
            max_idle_polls: 20,
            read_chunk: 4096,
            max_pages: 500,
            max_collect: Duration::from_secs(300),
        }
    }
}

/// Runs one command per freshly opened shell.
#[derive(Debug, Clone)]
pub struct CommandCollector {
    config: CollectorConfig,
    pagination_marker: String,
    continue_key: String,
    exit_command: String,
    sanitizer: Sanitizer,
}

struct Collected {
    capture: CaptureBuffer,
    truncated: bool,
}

impl CommandCollector {
    /// Create a collector for the given device.
    pub fn new(config: CollectorConfig, profile: &DeviceProfile) -> Self {
        Self {
            config,
            pagination_marker: profile.pagination_marker.clone(),
            continue_key: profile.continue_key.clone(),
            exit_command: profile.exit_command.clone(),
            sanitizer: Sanitizer::with_prompt_markers(profile.prompt_markers.iter().cloned()),
        }
    }

    /// Get the timing configuration.
    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Get the sanitizer applied to captures.
    pub fn sanitizer(&self) -> &Sanitizer {
        &self.sanitizer
    }

    /// Execute `command` on `shell` and return its cleaned output.
    ///
    /// Takes ownership of the shell: it is closed before this returns,
    /// whether the protocol succeeded or not.
    pub async fn execute<C: ShellChannel>(&self, mut shell: C, command: &str) -> Result<Response> {
        let start = std::time::Instant::now();

        let outcome = self.run_protocol(&mut shell, command).await;
        let closed = shell.close().await;

        let collected = match (outcome, closed) {
            (Ok(collected), Ok(())) => collected,
            (Ok(_), Err(e)) => return Err(e),
            (Err(e), Ok(())) => return Err(e),
            (Err(e), Err(close_err)) => {
                warn!("Failed to close shell after error in '{}': {}", command, close_err);
                return Err(e);
            }
        };

        let raw = collected.capture.as_str_lossy();
        let result = self.sanitizer.sanitize(&raw);
        debug!(
            "'{}' returned {} raw bytes, {} cleaned, {} pages",
            command,
            collected.capture.len(),
            result.len(),
            collected.capture.pages()
        );

        let mut response = Response::new(command, result, raw.into_owned(), start.elapsed());
        response.pages = collected.capture.pages();
        response.truncated = collected.truncated;
        Ok(response)
    }

    /// Steps 2-9: prime the shell, send the command, collect, send exit.
    async fn run_protocol<C: ShellChannel>(
        &self,
        shell: &mut C,
        command: &str,
    ) -> Result<Collected> {
        sleep(self.config.settle).await;
        self.discard_pending(shell, "banner")?;

        debug!("Sending initial newline to get prompt");
        shell.send(b"\n").await?;
        sleep(self.config.settle).await;
        self.discard_pending(shell, "prompt")?;

        debug!("Sending command: {}", command);
        shell.send(format!("{command}\n").as_bytes()).await?;
        sleep(self.config.settle).await;

        let collected = self.collect_until_idle(shell, command).await?;

        debug!("Sending exit");
        shell
            .send(format!("{}\n", self.exit_command).as_bytes())
            .await?;

        Ok(collected)
    }

    fn discard_pending<C: ShellChannel>(&self, shell: &mut C, what: &str) -> Result<()> {
        if shell.poll_readable()? {
            let discarded = shell.read_available(self.config.read_chunk)?;
            trace!("Discarded {} {} bytes", discarded.len(), what);
        }
        Ok(())
    }

    async fn collect_until_idle<C: ShellChannel>(
        &self,
        shell: &mut C,
        command: &str,
    ) -> Result<Collected> {
        let mut capture = CaptureBuffer::new(&self.pagination_marker);
        let deadline = Instant::now() + self.config.max_collect;
        let mut idle = 0;
        let mut truncated = false;
        let mut page_cap_logged = false;

        while idle < self.config.max_idle_polls {
            if Instant::now() >= deadline {
                warn!(
                    "'{}' still producing output after {:?}, returning partial capture",
                    command, self.config.max_collect
                );
                truncated = true;
                break;
            }

            let chunk = if shell.poll_readable()? {
                shell.read_available(self.config.read_chunk)?
            } else {
                Vec::new()
            };

            if chunk.is_empty() {
                sleep(self.config.poll_interval).await;
                idle += 1;
                continue;
            }

            idle = 0;
            trace!("Chunk received: {:?}", String::from_utf8_lossy(&chunk));

            if capture.push_chunk(&chunk) {
                if capture.pages() < self.config.max_pages {
                    debug!("Detected {} prompt, sending continuation", self.pagination_marker);
                    shell.send(self.continue_key.as_bytes()).await?;
                    capture.record_page();
                } else if !page_cap_logged {
                    warn!(
                        "'{}' reached {} pages, no longer continuing",
                        command, self.config.max_pages
                    );
                    page_cap_logged = true;
                }
            }
        }

        Ok(Collected { capture, truncated })
    }
}
