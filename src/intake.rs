//! Name intake: prompt, validate, re-prompt.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::models::PlayerName;

pub const NAME_PROMPT: &str = "What is your name? ";
pub const INVALID_NAME_MESSAGE: &str = "Names may only contain the letters a-z. Please try again.";

#[derive(Debug, Error)]
pub enum IntakeError {
    /// Standard input ended before a valid name was entered.
    #[error("input closed before a valid name was entered")]
    InputClosed,

    #[error("I/O error during name intake: {0}")]
    Io(#[from] io::Error),
}

/// Ask for a name until a valid one is entered. There is no retry limit.
pub fn prompt_for_name<R, W>(input: &mut R, out: &mut W) -> Result<PlayerName, IntakeError>
where
    R: BufRead,
    W: Write,
{
    let mut line = Vec::new();
    let mut attempts = 0usize;

    loop {
        write!(out, "{}", NAME_PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Err(IntakeError::InputClosed);
        }
        attempts += 1;

        // Undecodable input is just another invalid name.
        if let Some(name) = std::str::from_utf8(&line).ok().and_then(PlayerName::parse) {
            debug!(attempts, "accepted player name");
            return Ok(name);
        }

        writeln!(out, "{}", INVALID_NAME_MESSAGE)?;
    }
}

/// Compose the greeting line for `name`.
pub fn greeting(name: &PlayerName, intro: &str) -> String {
    format!("Hello {}, {}", name, intro)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (Result<PlayerName, IntakeError>, String) {
        let mut reader = input.as_bytes();
        let mut out = Vec::new();
        let result = prompt_for_name(&mut reader, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_accepts_first_valid_name() {
        let (result, out) = run("Alice\n");
        assert_eq!(result.unwrap().as_str(), "Alice");
        assert_eq!(out, NAME_PROMPT);
    }

    #[test]
    fn test_reprompts_until_valid() {
        let (result, out) = run("Al1ce\nMary Ann\nBob\n");
        assert_eq!(result.unwrap().as_str(), "Bob");
        assert_eq!(out.matches(NAME_PROMPT).count(), 3);
        assert_eq!(out.matches(INVALID_NAME_MESSAGE).count(), 2);
    }

    #[test]
    fn test_reprompts_on_undecodable_line() {
        let mut reader = &b"\xff\xfe\nBob\n"[..];
        let mut out = Vec::new();
        let name = prompt_for_name(&mut reader, &mut out).unwrap();
        assert_eq!(name.as_str(), "Bob");

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches(NAME_PROMPT).count(), 2);
        assert_eq!(out.matches(INVALID_NAME_MESSAGE).count(), 1);
    }

    #[test]
    fn test_empty_line_is_accepted() {
        let (result, _) = run("\n");
        assert_eq!(result.unwrap().as_str(), "");
    }

    #[test]
    fn test_closed_input() {
        let (result, _) = run("");
        assert!(matches!(result, Err(IntakeError::InputClosed)));

        let (result, _) = run("R2D2\n");
        assert!(matches!(result, Err(IntakeError::InputClosed)));
    }

    #[test]
    fn test_greeting() {
        let name = PlayerName::parse("Alice").unwrap();
        assert_eq!(
            greeting(&name, "Welcome to the Trivia Game"),
            "Hello Alice, Welcome to the Trivia Game"
        );
    }
}
