use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::terminal::RawMode;

const PASSWORD_ENV: &str = "PASSWORD";

/// Password from the flag, then `$PASSWORD`, then an interactive prompt.
pub fn resolve_password(flag: Option<&str>, user: &str, host: &str) -> io::Result<String> {
    resolve_with(flag, std::env::var(PASSWORD_ENV).ok(), || {
        prompt(&format!("Password for {user}@{host}: "))
    })
}

fn resolve_with(
    flag: Option<&str>,
    env: Option<String>,
    prompt: impl FnOnce() -> io::Result<String>,
) -> io::Result<String> {
    if let Some(password) = flag.filter(|p| !p.is_empty()) {
        return Ok(password.to_string());
    }
    if let Some(password) = env.filter(|p| !p.is_empty()) {
        return Ok(password);
    }
    prompt()
}

/// Read a line without echo.
fn prompt(message: &str) -> io::Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{message}")?;
    stderr.flush()?;

    let mut password = String::new();
    {
        let _raw = RawMode::enable()?;
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Enter => break,
                KeyCode::Backspace => {
                    password.pop();
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Err(io::Error::new(io::ErrorKind::Interrupted, "Interrupted"));
                }
                KeyCode::Char(c) => password.push(c),
                _ => {}
            }
        }
    }

    writeln!(stderr)?;
    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_prompt() -> io::Result<String> {
        panic!("prompt should not be reached")
    }

    #[test]
    fn test_flag_wins() {
        let password = resolve_with(Some("flag"), Some("env".into()), no_prompt).unwrap();
        assert_eq!(password, "flag");
    }

    #[test]
    fn test_env_before_prompt() {
        let password = resolve_with(None, Some("env".into()), no_prompt).unwrap();
        assert_eq!(password, "env");
    }

    #[test]
    fn test_empty_values_fall_through() {
        let password = resolve_with(Some(""), Some(String::new()), || Ok("typed".into())).unwrap();
        assert_eq!(password, "typed");
    }
}
