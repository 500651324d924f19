use std::io;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Keeps the local terminal in raw mode until dropped.
pub struct RawMode(());

impl RawMode {
    pub fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self(()))
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}
