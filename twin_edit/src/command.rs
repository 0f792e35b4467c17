// This file is part of TwinGap.

// TwinGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// TwinGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::error::{EditError, Result};

/// One line of an edit script.
///
/// The command name is the snake_case form of the variant, followed by its arguments:
///
/// ```text
/// advance -3
/// goto 0
/// insert Hello,\tworld\n
/// erase 2
/// find wor.d
/// resize 20 .
/// resize 20 \s
/// clear
/// begin
/// end
/// ```
#[derive(Clone, Debug, PartialEq, Eq, strum_macros::EnumDiscriminants)]
#[strum_discriminants(name(CommandName))]
#[strum_discriminants(derive(
    strum_macros::IntoStaticStr,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    Hash
))]
#[strum_discriminants(strum(serialize_all = "snake_case"))]
pub enum Command {
    /// Moves the cursor by a signed number of elements.
    Advance { delta: isize },
    /// Places the cursor at an absolute index.
    Goto { index: usize },
    /// Inserts text at the cursor, leaving the cursor after it.
    Insert { text: String },
    /// Removes elements after (positive) or before (negative) the cursor.
    Erase { delta: isize },
    /// Moves the cursor to the start of the next regex match at or after it.
    Find { pattern: String },
    /// Truncates or pads the buffer to `len` characters.
    Resize { len: usize, fill: char },
    /// Removes every character.
    Clear,
    /// Moves the cursor to the start.
    Begin,
    /// Moves the cursor to the end.
    End,
}

impl Command {
    /// The snake_case name the command is written with in scripts.
    pub fn name(&self) -> &'static str {
        CommandName::from(self).into()
    }

    /// Parses one script line. Blank lines and `#` comments parse to `None`.
    ///
    /// `line` is the 1-based line number reported in errors.
    pub fn parse(source: &str, line: usize) -> Result<Option<Self>> {
        let source = source.trim_start();
        if source.is_empty() || source.starts_with('#') {
            return Ok(None);
        }

        let (name, argument) = match source.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, Some(argument)),
            None => (source, None),
        };
        let Ok(command_name) = CommandName::from_str(name) else {
            return Err(EditError::UnknownCommand {
                line,
                name: name.to_string(),
                known: known_names(),
            });
        };

        let command_str: &'static str = command_name.into();
        let required = |expected: &'static str| {
            argument
                .filter(|argument| !argument.is_empty())
                .ok_or_else(|| EditError::MissingArgument {
                    line,
                    command: command_str,
                    expected,
                })
        };

        let command = match command_name {
            CommandName::Advance => Self::Advance {
                delta: parse_number(required("a signed delta")?, line, "a signed delta")?,
            },
            CommandName::Goto => Self::Goto {
                index: parse_number(required("an index")?, line, "an index")?,
            },
            CommandName::Insert => Self::Insert {
                text: unescape(required("text to insert")?, line)?,
            },
            CommandName::Erase => Self::Erase {
                delta: parse_number(required("a signed delta")?, line, "a signed delta")?,
            },
            CommandName::Find => Self::Find {
                pattern: required("a pattern")?.to_string(),
            },
            CommandName::Resize => {
                let expected = "a length and a fill character";
                let Some((len, fill)) = required(expected)?
                    .trim_start()
                    .split_once(char::is_whitespace)
                else {
                    return Err(EditError::MissingArgument {
                        line,
                        command: command_str,
                        expected,
                    });
                };

                let fill = unescape(fill, line)?;
                let mut fill_chars = fill.chars();
                let (Some(fill), None) = (fill_chars.next(), fill_chars.next()) else {
                    return Err(EditError::MissingArgument {
                        line,
                        command: command_str,
                        expected,
                    });
                };

                Self::Resize {
                    len: parse_number(len, line, "a length")?,
                    fill,
                }
            }
            CommandName::Clear | CommandName::Begin | CommandName::End => {
                if let Some(found) = argument.map(str::trim).filter(|found| !found.is_empty()) {
                    return Err(EditError::UnexpectedArgument {
                        line,
                        command: command_str,
                        found: found.to_string(),
                    });
                }

                match command_name {
                    CommandName::Clear => Self::Clear,
                    CommandName::Begin => Self::Begin,
                    _ => Self::End,
                }
            }
        };

        Ok(Some(command))
    }
}

/// Parses a whole script, one command per line.
pub fn parse_script(script: &str) -> Result<Vec<Command>> {
    let mut commands = vec![];
    for (index, line) in script.lines().enumerate() {
        if let Some(command) = Command::parse(line, index + 1)? {
            commands.push(command);
        }
    }

    Ok(commands)
}

fn known_names() -> String {
    CommandName::iter()
        .map(<&'static str>::from)
        .collect::<Vec<_>>()
        .join(", ")
}

fn parse_number<N: FromStr>(source: &str, line: usize, expected: &'static str) -> Result<N> {
    source.trim().parse().map_err(|_| EditError::InvalidNumber {
        line,
        found: source.trim().to_string(),
        expected,
    })
}

/// Expands `\n`, `\t`, `\s` (a space) and `\\`. A trailing lone backslash is kept as is.
fn unescape(source: &str, line: usize) -> Result<String> {
    let mut unescaped = String::with_capacity(source.len());
    let mut chars = source.chars();
    while let Some(character) = chars.next() {
        if character != '\\' {
            unescaped.push(character);
            continue;
        }

        match chars.next() {
            Some('n') => unescaped.push('\n'),
            Some('t') => unescaped.push('\t'),
            Some('s') => unescaped.push(' '),
            Some('\\') => unescaped.push('\\'),
            Some(escape) => return Err(EditError::InvalidEscape { line, escape }),
            None => unescaped.push('\\'),
        }
    }

    Ok(unescaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(source: &str) -> Command {
        Command::parse(source, 1)
            .expect("Failed to parse command")
            .expect("Expected a command, found a blank line")
    }

    #[test]
    fn parses_every_command() {
        assert_eq!(parse_one("advance -3"), Command::Advance { delta: -3 });
        assert_eq!(parse_one("goto 12"), Command::Goto { index: 12 });
        assert_eq!(
            parse_one("insert hello world"),
            Command::Insert {
                text: "hello world".to_string()
            }
        );
        assert_eq!(parse_one("erase 4"), Command::Erase { delta: 4 });
        assert_eq!(
            parse_one(r"find \d+"),
            Command::Find {
                pattern: r"\d+".to_string()
            }
        );
        assert_eq!(parse_one("resize 8 -"), Command::Resize { len: 8, fill: '-' });
        assert_eq!(parse_one("clear"), Command::Clear);
        assert_eq!(parse_one("  begin"), Command::Begin);
        assert_eq!(parse_one("end"), Command::End);
    }

    #[test]
    fn names_round_trip_through_the_discriminant() {
        for name in CommandName::iter() {
            let name_str: &'static str = name.into();
            assert_eq!(CommandName::from_str(name_str), Ok(name));
        }
        assert_eq!(Command::Find { pattern: "x".to_string() }.name(), "find");
    }

    #[test]
    fn insert_keeps_spacing_and_expands_escapes() {
        assert_eq!(
            parse_one(r"insert  a\tb\n\\"),
            Command::Insert {
                text: " a\tb\n\\".to_string()
            }
        );
        assert_eq!(parse_one(r"resize 3 \t"), Command::Resize { len: 3, fill: '\t' });
        assert_eq!(parse_one("resize 3  "), Command::Resize { len: 3, fill: ' ' });
    }

    #[test]
    fn resize_accepts_a_space_fill() {
        assert_eq!(parse_one(r"resize 20 \s"), Command::Resize { len: 20, fill: ' ' });
        assert_eq!(parse_one("resize 20\t\\s"), Command::Resize { len: 20, fill: ' ' });
        assert_eq!(parse_one("resize 4\t "), Command::Resize { len: 4, fill: ' ' });
        assert_eq!(
            parse_one(r"insert a\sb"),
            Command::Insert {
                text: "a b".to_string()
            }
        );
    }

    #[test]
    fn blank_lines_and_comments_are_skipped() {
        assert_eq!(Command::parse("", 1).unwrap(), None);
        assert_eq!(Command::parse("   ", 1).unwrap(), None);
        assert_eq!(Command::parse("# goto 3", 1).unwrap(), None);
    }

    #[test]
    fn reports_malformed_lines() {
        assert!(matches!(
            Command::parse("jump 3", 4),
            Err(EditError::UnknownCommand { line: 4, .. })
        ));
        assert!(matches!(
            Command::parse("advance", 2),
            Err(EditError::MissingArgument {
                line: 2,
                command: "advance",
                ..
            })
        ));
        assert!(matches!(
            Command::parse("goto -1", 1),
            Err(EditError::InvalidNumber { .. })
        ));
        assert!(matches!(
            Command::parse(r"insert \q", 1),
            Err(EditError::InvalidEscape { escape: 'q', .. })
        ));
        assert!(matches!(
            Command::parse("resize 3 ab", 1),
            Err(EditError::MissingArgument {
                command: "resize",
                ..
            })
        ));
        assert!(matches!(
            Command::parse("clear now", 1),
            Err(EditError::UnexpectedArgument { .. })
        ));
    }

    #[test]
    fn parses_scripts_with_line_numbers() {
        let script = "# header\ngoto 0\n\ninsert x\nbogus\n";
        assert!(matches!(
            parse_script(script),
            Err(EditError::UnknownCommand { line: 5, .. })
        ));

        let commands = parse_script("goto 0\ninsert x\n").unwrap();
        assert_eq!(
            commands,
            [
                Command::Goto { index: 0 },
                Command::Insert {
                    text: "x".to_string()
                }
            ]
        );
    }
}
