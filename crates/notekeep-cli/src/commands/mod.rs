pub mod alerts;
pub mod app;
pub mod auth;
pub mod categories;
pub mod config;
pub mod notes;
pub mod route;
pub mod tasks;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io::{self, BufRead, IsTerminal, Write};

/// Asks a yes/no question on the terminal. Anything but `y`/`yes` is a no.
pub fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read answer")?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Reads one line from the terminal after printing `prompt`.
pub fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read input")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Reads a secret after printing `prompt`, without echoing it.
///
/// Falls back to a plain line read when stdin is not a terminal, so the
/// password can be piped in.
pub fn prompt_password(prompt: &str) -> Result<String> {
    if !io::stdin().is_terminal() {
        return prompt_line(prompt);
    }

    print!("{}", prompt);
    io::stdout().flush().context("Failed to flush stdout")?;

    terminal::enable_raw_mode().context("Failed to switch the terminal to raw mode")?;
    let secret = read_hidden();
    let restored = terminal::disable_raw_mode();
    println!();

    restored.context("Failed to restore the terminal")?;
    secret
}

fn read_hidden() -> Result<String> {
    let mut secret = String::new();
    loop {
        let Event::Key(key) = event::read().context("Failed to read key")? else {
            continue;
        };
        match apply_key(&mut secret, key) {
            KeyStep::Continue => {}
            KeyStep::Submit => return Ok(secret),
            KeyStep::Cancel => anyhow::bail!("Password entry cancelled"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum KeyStep {
    Continue,
    Submit,
    Cancel,
}

fn apply_key(secret: &mut String, key: KeyEvent) -> KeyStep {
    if key.kind == KeyEventKind::Release {
        return KeyStep::Continue;
    }

    match key.code {
        KeyCode::Enter => KeyStep::Submit,
        KeyCode::Esc => KeyStep::Cancel,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyStep::Cancel,
        KeyCode::Backspace => {
            secret.pop();
            KeyStep::Continue
        }
        KeyCode::Char(c) => {
            secret.push(c);
            KeyStep::Continue
        }
        _ => KeyStep::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_hidden_input_editing() {
        let mut secret = String::new();
        for c in "pwx".chars() {
            assert_eq!(apply_key(&mut secret, press(KeyCode::Char(c))), KeyStep::Continue);
        }
        apply_key(&mut secret, press(KeyCode::Backspace));
        apply_key(&mut secret, press(KeyCode::Left));

        assert_eq!(apply_key(&mut secret, press(KeyCode::Enter)), KeyStep::Submit);
        assert_eq!(secret, "pw");
    }

    #[test]
    fn test_hidden_input_cancel() {
        let mut secret = String::from("abc");
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(apply_key(&mut secret, ctrl_c), KeyStep::Cancel);
        assert_eq!(apply_key(&mut secret, press(KeyCode::Esc)), KeyStep::Cancel);
        assert_eq!(secret, "abc");
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut secret = String::new();
        let mut release = press(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;
        assert_eq!(apply_key(&mut secret, release), KeyStep::Continue);
        assert!(secret.is_empty());
    }
}
