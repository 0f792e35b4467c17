// This file is part of TwinGap.

// TwinGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// TwinGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use regex::Regex;
use tracing::{debug, trace};
use twin_gap::GapBuffer;

use crate::{
    command::Command,
    error::{EditError, Result},
};

/// A text buffer replaying script commands at its cursor.
///
/// Cursor commands are checked against the buffer before they are applied, so a bad script
/// reports an error instead of tripping the buffer's own bounds panics.
pub struct Session {
    buffer: GapBuffer<char>,
}

impl Session {
    /// Loads `text` with the cursor at `cursor`, or at the end of the text when `None`.
    pub fn new(text: &str, cursor: Option<usize>) -> Result<Self> {
        let mut buffer: GapBuffer<char> = text.chars().collect();
        if let Some(cursor) = cursor {
            if cursor > buffer.len() {
                return Err(EditError::IndexOutOfRange {
                    index: cursor,
                    len: buffer.len(),
                });
            }

            buffer.set_cursor(cursor);
        }

        Ok(Self { buffer })
    }

    /// The buffer being edited.
    pub fn buffer(&self) -> &GapBuffer<char> {
        &self.buffer
    }

    /// Current text, independent of the cursor.
    pub fn content(&self) -> String {
        self.buffer.to_string()
    }

    /// Cursor position in characters from the start.
    pub fn cursor(&self) -> usize {
        self.buffer.position()
    }

    /// Applies every command in order, stopping at the first failure.
    pub fn run<'a>(&mut self, commands: impl IntoIterator<Item = &'a Command>) -> Result<()> {
        for command in commands {
            self.apply(command)?;
        }

        Ok(())
    }

    /// Applies one command. A failing command leaves the buffer untouched.
    pub fn apply(&mut self, command: &Command) -> Result<()> {
        match command {
            Command::Advance { delta } => {
                self.check_advance(*delta)?;
                self.buffer.advance(*delta);
            }
            Command::Goto { index } => self.goto(*index)?,
            Command::Insert { text } => {
                self.buffer.insert_iter(text.chars());
            }
            Command::Erase { delta } => {
                if self.check_advance(*delta).is_err() {
                    return Err(EditError::EraseOutOfRange {
                        position: self.cursor(),
                        delta: *delta,
                        len: self.buffer.len(),
                    });
                }

                self.buffer.erase(*delta);
            }
            Command::Find { pattern } => self.find(pattern)?,
            Command::Resize { len, fill } => self.buffer.resize(*len, *fill),
            Command::Clear => self.buffer.clear(),
            Command::Begin => self.buffer.set_cursor(0),
            Command::End => self.buffer.set_cursor(self.buffer.len()),
        }

        debug!(
            command = command.name(),
            position = self.cursor(),
            len = self.buffer.len(),
            "applied command"
        );
        Ok(())
    }

    fn goto(&mut self, index: usize) -> Result<()> {
        if index > self.buffer.len() {
            return Err(EditError::IndexOutOfRange {
                index,
                len: self.buffer.len(),
            });
        }

        self.buffer.set_cursor(index);
        Ok(())
    }

    fn check_advance(&self, delta: isize) -> Result<()> {
        let position = self.cursor();
        match position.checked_add_signed(delta) {
            Some(target) if target <= self.buffer.len() => Ok(()),
            _ => Err(EditError::CursorOutOfRange {
                position,
                delta,
                len: self.buffer.len(),
            }),
        }
    }

    fn find(&mut self, pattern: &str) -> Result<()> {
        let regex = Regex::new(pattern).map_err(|e| EditError::from((pattern.to_string(), e)))?;

        let text = self.content();
        let cursor_byte_index: usize = self
            .buffer
            .precursor_iter()
            .map(|character| character.len_utf8())
            .sum();
        let Some(found) = regex.find_at(&text, cursor_byte_index) else {
            return Err(EditError::NoMatch {
                pattern: pattern.to_string(),
                position: self.cursor(),
            });
        };

        let index = text[..found.start()].chars().count();
        trace!(pattern, byte_index = found.start(), index, "found match");
        self.buffer.set_cursor(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(text: &str, cursor: usize) -> Session {
        Session::new(text, Some(cursor)).expect("Failed to create session")
    }

    #[test]
    fn new_places_the_cursor() {
        assert_eq!(Session::new("abc", None).unwrap().cursor(), 3);
        assert_eq!(session("abc", 1).cursor(), 1);
        assert!(matches!(
            Session::new("abc", Some(4)),
            Err(EditError::IndexOutOfRange { index: 4, len: 3 })
        ));
    }

    #[test]
    fn applies_cursor_commands() {
        let mut session = session("hello world", 5);

        session
            .run(&[
                Command::Insert {
                    text: ",".to_string(),
                },
                Command::Advance { delta: 1 },
                Command::Erase { delta: 5 },
                Command::Insert {
                    text: "there".to_string(),
                },
                Command::Begin,
                Command::Erase { delta: 1 },
                Command::Insert {
                    text: "H".to_string(),
                },
            ])
            .unwrap();

        assert_eq!(session.content(), "Hello, there");
        assert_eq!(session.cursor(), 1);

        session.apply(&Command::End).unwrap();
        assert_eq!(session.cursor(), 12);
    }

    #[test]
    fn rejects_cursor_commands_out_of_range() {
        let mut session = session("abc", 1);

        assert!(matches!(
            session.apply(&Command::Advance { delta: -2 }),
            Err(EditError::CursorOutOfRange {
                position: 1,
                delta: -2,
                len: 3
            })
        ));
        assert!(matches!(
            session.apply(&Command::Erase { delta: 3 }),
            Err(EditError::EraseOutOfRange { .. })
        ));
        assert!(matches!(
            session.apply(&Command::Goto { index: 4 }),
            Err(EditError::IndexOutOfRange { .. })
        ));

        assert_eq!(session.content(), "abc");
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn find_moves_to_the_next_match_in_chars() {
        let mut session = session("naïve café, café au lait", 0);

        session
            .apply(&Command::Find {
                pattern: "café".to_string(),
            })
            .unwrap();
        assert_eq!(session.cursor(), 6);

        session.apply(&Command::Advance { delta: 1 }).unwrap();
        session
            .apply(&Command::Find {
                pattern: "caf.".to_string(),
            })
            .unwrap();
        assert_eq!(session.cursor(), 12);

        assert!(matches!(
            session.apply(&Command::Find {
                pattern: "naïve".to_string()
            }),
            Err(EditError::NoMatch { position: 12, .. })
        ));
        assert!(matches!(
            session.apply(&Command::Find {
                pattern: "(".to_string()
            }),
            Err(EditError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn resize_and_clear() {
        let mut session = session("abcdef", 2);

        session.apply(&Command::Resize { len: 4, fill: '-' }).unwrap();
        assert_eq!(session.content(), "abcd");
        assert_eq!(session.cursor(), 2);

        session.apply(&Command::Resize { len: 6, fill: '-' }).unwrap();
        assert_eq!(session.content(), "abcd--");

        session.apply(&Command::Clear).unwrap();
        assert_eq!(session.content(), "");
        assert_eq!(session.cursor(), 0);
    }
}
