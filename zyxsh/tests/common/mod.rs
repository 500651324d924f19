//! Scripted in-memory shell and transport.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use zyxsh::channel::ShellChannel;
use zyxsh::error::{ChannelError, Result};
use zyxsh::transport::{ShellTransport, SshConfig};
use zyxsh::CollectorConfig;

/// What the fake device says and when.
#[derive(Debug, Clone, Default)]
pub struct Script {
    /// Chunks queued as soon as a shell opens.
    pub banner: Vec<Vec<u8>>,
    /// Chunks queued when the exact text is sent.
    pub replies: HashMap<String, Vec<Vec<u8>>>,
    /// Chunks queued per continuation keystroke, in order.
    pub pages: Vec<Vec<Vec<u8>>>,
    /// Answer every continuation keystroke with this chunk once `pages` runs out.
    pub endless_page: Option<Vec<u8>>,
    /// Always have this chunk ready to read.
    pub firehose: Option<Vec<u8>>,
    /// Fail when this exact text is sent.
    pub fail_on: Option<String>,
    /// Fail every read after this many have succeeded.
    pub fail_read_after: Option<usize>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn banner(mut self, chunk: &str) -> Self {
        self.banner.push(chunk.as_bytes().to_vec());
        self
    }

    pub fn reply(mut self, sent: &str, chunks: &[&str]) -> Self {
        self.replies.insert(
            sent.to_string(),
            chunks.iter().map(|c| c.as_bytes().to_vec()).collect(),
        );
        self
    }

    pub fn page(mut self, chunks: &[&str]) -> Self {
        self.pages
            .push(chunks.iter().map(|c| c.as_bytes().to_vec()).collect());
        self
    }

    pub fn endless_page(mut self, chunk: &str) -> Self {
        self.endless_page = Some(chunk.as_bytes().to_vec());
        self
    }

    pub fn firehose(mut self, chunk: &str) -> Self {
        self.firehose = Some(chunk.as_bytes().to_vec());
        self
    }

    pub fn fail_on(mut self, sent: &str) -> Self {
        self.fail_on = Some(sent.to_string());
        self
    }

    pub fn fail_read_after(mut self, reads: usize) -> Self {
        self.fail_read_after = Some(reads);
        self
    }
}

/// Everything a shell saw, shared with the test after the shell is consumed.
#[derive(Debug, Default)]
pub struct ShellLog {
    pub sent: Vec<String>,
    pub close_calls: u32,
}

pub struct ScriptedShell {
    script: Script,
    queue: VecDeque<Vec<u8>>,
    next_page: usize,
    reads: usize,
    closed: bool,
    log: Arc<Mutex<ShellLog>>,
}

impl ScriptedShell {
    pub fn new(script: Script) -> (Self, Arc<Mutex<ShellLog>>) {
        let log = Arc::new(Mutex::new(ShellLog::default()));
        let shell = Self {
            queue: script.banner.iter().cloned().collect(),
            script,
            next_page: 0,
            reads: 0,
            closed: false,
            log: log.clone(),
        };
        (shell, log)
    }
}

impl ShellChannel for ScriptedShell {
    async fn send(&mut self, data: &[u8]) -> Result<()> {
        if self.closed {
            return Err(ChannelError::Closed.into());
        }
        let text = String::from_utf8_lossy(data).into_owned();
        self.log.lock().unwrap().sent.push(text.clone());

        if self.script.fail_on.as_deref() == Some(text.as_str()) {
            return Err(ChannelError::Closed.into());
        }

        if text == " " {
            if let Some(chunks) = self.script.pages.get(self.next_page) {
                self.queue.extend(chunks.iter().cloned());
                self.next_page += 1;
            } else if let Some(chunk) = &self.script.endless_page {
                self.queue.push_back(chunk.clone());
            }
        } else if let Some(chunks) = self.script.replies.get(&text) {
            self.queue.extend(chunks.iter().cloned());
        }
        Ok(())
    }

    fn poll_readable(&mut self) -> Result<bool> {
        Ok(!self.closed && (!self.queue.is_empty() || self.script.firehose.is_some()))
    }

    fn read_available(&mut self, max_bytes: usize) -> Result<Vec<u8>> {
        if self.script.fail_read_after.is_some_and(|n| self.reads >= n) {
            return Err(ChannelError::Closed.into());
        }
        self.reads += 1;
        if let Some(mut chunk) = self.queue.pop_front() {
            if chunk.len() > max_bytes {
                let rest = chunk.split_off(max_bytes);
                self.queue.push_front(rest);
            }
            return Ok(chunk);
        }
        Ok(self.script.firehose.clone().unwrap_or_default())
    }

    async fn close(&mut self) -> Result<()> {
        self.closed = true;
        self.log.lock().unwrap().close_calls += 1;
        Ok(())
    }
}

/// Transport handing out one scripted shell per command.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Script,
    pub shells: Arc<Mutex<Vec<Arc<Mutex<ShellLog>>>>>,
    pub disconnects: Arc<Mutex<u32>>,
}

impl ScriptedTransport {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            ..Self::default()
        }
    }

    /// Commands sent across every shell, without the priming and exit lines.
    pub fn commands(&self) -> Vec<String> {
        self.shells
            .lock()
            .unwrap()
            .iter()
            .filter_map(|log| log.lock().unwrap().sent.get(1).cloned())
            .map(|s| s.trim_end().to_string())
            .collect()
    }
}

impl ShellTransport for ScriptedTransport {
    type Shell = ScriptedShell;

    async fn connect(_config: SshConfig) -> Result<Self> {
        Ok(Self::default())
    }

    fn is_alive(&self) -> bool {
        true
    }

    async fn open_shell(&self) -> Result<ScriptedShell> {
        let (shell, log) = ScriptedShell::new(self.script.clone());
        self.shells.lock().unwrap().push(log);
        Ok(shell)
    }

    async fn disconnect(self) -> Result<()> {
        *self.disconnects.lock().unwrap() += 1;
        Ok(())
    }
}

/// Route library logs to the test harness. Set RUST_LOG to see them.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Millisecond timing so tests finish quickly.
pub fn fast_config() -> CollectorConfig {
    CollectorConfig {
        settle: Duration::from_millis(1),
        poll_interval: Duration::from_millis(1),
        max_idle_polls: 5,
        ..CollectorConfig::default()
    }
}
