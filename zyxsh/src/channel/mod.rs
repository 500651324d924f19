//! Channel layer: the interactive shell capability, capture buffer and
//! output sanitization.
//!
//! The switch gives no end-of-response marker, so everything above this
//! layer works with non-blocking polls and reads rather than prompt matching.

mod buffer;
pub mod sanitize;

pub use buffer::CaptureBuffer;
pub use sanitize::Sanitizer;

use std::future::Future;

use crate::error::Result;

/// A remote interactive shell channel.
///
/// Implementations must make `poll_readable` and `read_available` return
/// immediately. `close` must be idempotent and must tolerate a channel that
/// the peer already tore down.
pub trait ShellChannel: Send {
    /// Write bytes to the shell. No flow control is modeled.
    fn send(&mut self, data: &[u8]) -> impl Future<Output = Result<()>> + Send;

    /// Whether data is buffered and can be read without waiting.
    fn poll_readable(&mut self) -> Result<bool>;

    /// Read up to `max_bytes` of whatever is buffered. May return nothing.
    fn read_available(&mut self, max_bytes: usize) -> Result<Vec<u8>>;

    /// Close the channel.
    fn close(&mut self) -> impl Future<Output = Result<()>> + Send;
}
