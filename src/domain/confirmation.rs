//! Parsing of yes/no and numbered menu answers typed at prompts

use crate::error::{NtzError, Result};

/// A yes/no answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Accepts `y`/`yes`/`1` and `n`/`no`/`2`, ignoring case and surrounding spaces
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().to_lowercase().as_str() {
            "y" | "yes" | "1" => Ok(Answer::Yes),
            "n" | "no" | "2" => Ok(Answer::No),
            _ => Err(NtzError::InvalidConfirmation(input.trim().to_string())),
        }
    }
}

/// Which kind of item an edit or forget targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Note,
    Category,
}

impl Target {
    /// `1` selects a note, `2` a category
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Target::Note),
            "2" => Some(Target::Category),
            _ => None,
        }
    }
}

/// Parse a 1-based note number
pub fn parse_index(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| NtzError::InvalidInput(format!("'{}' is not a note number", trimmed)))
}
