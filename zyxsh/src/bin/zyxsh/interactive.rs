//! Raw terminal pass-through to a switch shell.

use std::error::Error;
use std::io::{self, Read, Write};
use std::thread;
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::mpsc;
use zyxsh::SwitchDriver;
use zyxsh::channel::ShellChannel;
use zyxsh::transport::SshShell;

use crate::terminal::RawMode;

const CTRL_D: u8 = 0x04;
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Forward keystrokes to a fresh shell and echo its output until the remote
/// closes, stdin ends or Ctrl+D is pressed.
pub async fn run(driver: &SwitchDriver) -> Result<(), Box<dyn Error>> {
    let mut shell = driver.open_shell().await?;
    println!("Connected to {}. Press Ctrl+D to exit.\n", driver.config().host);

    let outcome = match RawMode::enable() {
        Ok(_raw) => pump(&mut shell).await,
        Err(e) => Err(e.into()),
    };

    match (outcome, shell.close().await) {
        (Ok(()), closed) => Ok(closed?),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(close_err)) => {
            warn!("Failed to close interactive shell: {}", close_err);
            Err(e)
        }
    }
}

async fn pump(shell: &mut SshShell) -> Result<(), Box<dyn Error>> {
    let mut input = spawn_stdin_reader();
    let mut stdout = io::stdout();

    loop {
        while shell.poll_readable()? {
            let data = shell.read_available(4096)?;
            stdout.write_all(&data)?;
            stdout.flush()?;
        }

        if shell.is_finished() {
            debug!("Remote closed the shell");
            return Ok(());
        }

        tokio::select! {
            bytes = input.recv() => match bytes {
                None => {
                    debug!("stdin closed");
                    return Ok(());
                }
                Some(bytes) => match bytes.iter().position(|&b| b == CTRL_D) {
                    Some(pos) => {
                        if pos > 0 {
                            shell.send(&bytes[..pos]).await?;
                        }
                        return Ok(());
                    }
                    None => shell.send(&bytes).await?,
                },
            },
            _ = tokio::time::sleep(POLL_INTERVAL) => {}
        }
    }
}

/// Blocking stdin reads on a plain thread, forwarded over a channel.
fn spawn_stdin_reader() -> mpsc::Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel(64);
    thread::spawn(move || {
        let mut stdin = io::stdin();
        let mut buf = [0u8; 1024];
        loop {
            match stdin.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    if tx.blocking_send(buf[..n].to_vec()).is_err() {
                        break;
                    }
                }
            }
        }
    });
    rx
}
