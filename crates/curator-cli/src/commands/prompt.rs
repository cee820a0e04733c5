//! Hidden password entry on the terminal.

use anyhow::{Result, bail};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io::Write;

/// Disables raw mode when dropped.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

enum Edit {
    Done,
    Cancel,
    Continue,
}

fn apply_key(buffer: &mut String, key: KeyEvent) -> Edit {
    if key.kind == KeyEventKind::Release {
        return Edit::Continue;
    }
    match key.code {
        KeyCode::Enter => Edit::Done,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Edit::Cancel,
        KeyCode::Esc => Edit::Cancel,
        KeyCode::Backspace => {
            buffer.pop();
            Edit::Continue
        }
        KeyCode::Char(c) => {
            buffer.push(c);
            Edit::Continue
        }
        _ => Edit::Continue,
    }
}

/// Reads a line without echoing it.
pub fn read_password(label: &str) -> Result<String> {
    let mut stderr = std::io::stderr();
    write!(stderr, "{}", label)?;
    stderr.flush()?;

    let mut password = String::new();
    let outcome = {
        let _raw = RawModeGuard::enable()?;
        loop {
            if let Event::Key(key) = event::read()? {
                match apply_key(&mut password, key) {
                    Edit::Continue => continue,
                    Edit::Done => break Edit::Done,
                    Edit::Cancel => break Edit::Cancel,
                }
            }
        }
    };
    writeln!(stderr)?;

    match outcome {
        Edit::Cancel => bail!("Password entry cancelled"),
        _ => Ok(password),
    }
}
