//! Capture buffer for a single command execution.
//!
//! Raw bytes are appended as they arrive and only decoded once collection
//! ends. Pagination markers are looked up per chunk with `memchr`'s substring
//! finder, since a marker split across two reads is re-sent by the device on
//! the next redraw anyway.

use bytes::BytesMut;
use memchr::memmem;

/// Append-only accumulator for one command's raw output.
#[derive(Debug)]
pub struct CaptureBuffer {
    /// The accumulated raw output.
    buffer: BytesMut,

    /// Finder for the device's pagination marker.
    marker: memmem::Finder<'static>,

    /// Number of continuation keystrokes sent for this capture.
    pages: u32,
}

impl CaptureBuffer {
    /// Create an empty buffer that recognises `pagination_marker`.
    pub fn new(pagination_marker: &str) -> Self {
        Self {
            buffer: BytesMut::with_capacity(4096),
            marker: memmem::Finder::new(pagination_marker.as_bytes()).into_owned(),
            pages: 0,
        }
    }

    /// Append a chunk and report whether it contains the pagination marker.
    pub fn push_chunk(&mut self, chunk: &[u8]) -> bool {
        self.buffer.extend_from_slice(chunk);
        !self.marker.needle().is_empty() && self.marker.find(chunk).is_some()
    }

    /// Record that a continuation keystroke was sent.
    pub fn record_page(&mut self) {
        self.pages += 1;
    }

    /// Number of continuation keystrokes sent so far.
    pub fn pages(&self) -> u32 {
        self.pages
    }

    /// Get the buffer contents as a string (lossy UTF-8 conversion).
    pub fn as_str_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.buffer)
    }

    /// Get the current buffer length.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for CaptureBuffer {
    fn default() -> Self {
        Self::new("--More--")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_in_order() {
        let mut buffer = CaptureBuffer::default();
        buffer.push_chunk(b"Boot Version");
        buffer.push_chunk(b" : V2.00\r\n");
        assert_eq!(buffer.as_str_lossy(), "Boot Version : V2.00\r\n");
        assert_eq!(buffer.len(), 22);
    }

    #[test]
    fn test_detects_marker_in_chunk() {
        let mut buffer = CaptureBuffer::default();
        assert!(!buffer.push_chunk(b"    1 | AA:BB:CC:11:22:33 | Dynamic | 1\r\n"));
        assert!(buffer.push_chunk(b"--More--\x08"));
        buffer.record_page();
        assert_eq!(buffer.pages(), 1);
    }

    #[test]
    fn test_empty_marker_never_matches() {
        let mut buffer = CaptureBuffer::new("");
        assert!(!buffer.push_chunk(b"--More--"));
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut buffer = CaptureBuffer::default();
        buffer.push_chunk(&[b'o', b'k', 0xff]);
        assert_eq!(buffer.as_str_lossy(), "ok\u{fffd}");
    }
}
