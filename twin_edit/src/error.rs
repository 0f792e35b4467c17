// This file is part of TwinGap.

// TwinGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// TwinGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EditError>;

#[derive(Debug, Error)]
pub enum EditError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("Line {line}: unknown command {name:?}, expected one of: {known}")]
    UnknownCommand {
        line: usize,
        name: String,
        known: String,
    },

    #[error("Line {line}: {command} expects {expected}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        expected: &'static str,
    },

    #[error("Line {line}: {command} takes no argument, found {found:?}")]
    UnexpectedArgument {
        line: usize,
        command: &'static str,
        found: String,
    },

    #[error("Line {line}: could not parse {found:?} as {expected}")]
    InvalidNumber {
        line: usize,
        found: String,
        expected: &'static str,
    },

    #[error("Line {line}: unknown escape sequence \\{escape}")]
    InvalidEscape { line: usize, escape: char },

    #[error("Invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("No match for {pattern:?} at or after position {position}")]
    NoMatch { pattern: String, position: usize },

    #[error("Cursor at {position} cannot move by {delta} in a buffer of length {len}")]
    CursorOutOfRange {
        position: usize,
        delta: isize,
        len: usize,
    },

    #[error("Cannot erase {delta} elements from cursor at {position} in a buffer of length {len}")]
    EraseOutOfRange {
        position: usize,
        delta: isize,
        len: usize,
    },

    #[error("Index {index} is past the end of a buffer of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl From<(String, regex::Error)> for EditError {
    fn from((pattern, error): (String, regex::Error)) -> Self {
        let reason = match error {
            regex::Error::Syntax(reason) => reason,
            regex::Error::CompiledTooBig(size) => {
                format!("Could not compile regex to size: {}", size)
            }
            _ => "Unknown regex failure".to_string(),
        };

        Self::InvalidPattern { pattern, reason }
    }
}
