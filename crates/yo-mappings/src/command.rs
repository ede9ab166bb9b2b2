//! Command language
//!
//! - `set <keyword> <url>`: create or overwrite a mapping
//! - `clear all`: drop every mapping
//! - `init`: reload the default mappings
//!
//! Text is split on whitespace and is a command only when the first word is
//! known and the token count matches that word's arity exactly.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearScope {
    All,
    /// Syntactically fine, but clears nothing
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { keyword: String, url: String },
    Clear { scope: ClearScope },
    Init,
}

/// Why some text is not a legal command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty input")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("'{word}' takes {expected} words, got {actual}")]
    Arity {
        word: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl Command {
    /// Parse text as a command. Any error means "not a command".
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let (&word, args) = tokens.split_first().ok_or(CommandError::Empty)?;

        let word = match word {
            "set" => "set",
            "clear" => "clear",
            "init" => "init",
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        let expected = Self::arity(word);
        if tokens.len() != expected {
            return Err(CommandError::Arity {
                word,
                expected,
                actual: tokens.len(),
            });
        }

        let command = match (word, args) {
            ("set", [keyword, url]) => Command::Set {
                keyword: keyword.to_string(),
                url: url.to_string(),
            },
            ("clear", [scope]) => Command::Clear {
                scope: match *scope {
                    "all" => ClearScope::All,
                    other => ClearScope::Other(other.to_string()),
                },
            },
            _ => Command::Init,
        };

        Ok(command)
    }

    /// Total token count (command word included) a command word requires.
    fn arity(word: &str) -> usize {
        match word {
            "set" => 3,
            "clear" => 2,
            _ => 1,
        }
    }
}
