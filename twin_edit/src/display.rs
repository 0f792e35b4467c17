// This file is part of TwinGap.

// TwinGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// TwinGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use twin_gap::GapBuffer;
use unicode_width::UnicodeWidthChar;

pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Display column of the cursor within its line.
pub fn cursor_column(buffer: &GapBuffer<char>, tab_width: usize) -> usize {
    let line_start: Vec<char> = buffer
        .precursor_iter()
        .rev()
        .take_while(|character| **character != '\n')
        .copied()
        .collect();

    line_start
        .into_iter()
        .rev()
        .fold(0, |column, character| {
            column + width_for(character, column, tab_width)
        })
}

/// Renders the buffer content. With `show_cursor`, a line holding a `^` under the cursor
/// follows the cursor's line.
pub fn render(buffer: &GapBuffer<char>, show_cursor: bool, tab_width: usize) -> String {
    if !show_cursor {
        return buffer.to_string();
    }

    let mut rendered: String = buffer.precursor_iter().collect();
    let mut postcursor = buffer.postcursor_iter();
    for &character in postcursor.by_ref() {
        rendered.push(character);
        if character == '\n' {
            break;
        }
    }
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    rendered.push_str(&" ".repeat(cursor_column(buffer, tab_width)));
    rendered.push_str("^\n");
    rendered.extend(postcursor);
    rendered
}

fn width_for(character: char, at_col: usize, tab_width: usize) -> usize {
    if character == '\t' {
        tab_width - at_col % tab_width
    } else {
        character.width().unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_at(text: &str, cursor: usize) -> GapBuffer<char> {
        let mut buffer: GapBuffer<char> = text.chars().collect();
        buffer.set_cursor(cursor);
        buffer
    }

    #[test]
    fn column_counts_from_the_line_start() {
        assert_eq!(cursor_column(&buffer_at("first\nsecond", 9), 4), 3);
        assert_eq!(cursor_column(&buffer_at("first\nsecond", 6), 4), 0);
        assert_eq!(cursor_column(&buffer_at("first", 5), 4), 5);
    }

    #[test]
    fn column_uses_display_widths() {
        assert_eq!(cursor_column(&buffer_at("日本語", 2), 4), 4);
        assert_eq!(cursor_column(&buffer_at("a\tb", 3), 4), 5);
        assert_eq!(cursor_column(&buffer_at("e\u{301}x", 2), 4), 1);
    }

    #[test]
    fn render_places_the_caret_under_the_cursor_line() {
        let buffer = buffer_at("one\ntwo\nthree", 5);
        assert_eq!(render(&buffer, false, 4), "one\ntwo\nthree");
        assert_eq!(render(&buffer, true, 4), "one\ntwo\n ^\nthree");

        let buffer = buffer_at("last line", 9);
        assert_eq!(render(&buffer, true, 4), "last line\n         ^\n");
    }

    #[test]
    fn render_stops_the_cursor_line_at_the_next_newline() {
        assert_eq!(render(&buffer_at("ab\ncd\nef", 4), true, 4), "ab\ncd\n ^\nef");
        assert_eq!(render(&buffer_at("ab\ncd\nef", 2), true, 4), "ab\n  ^\ncd\nef");
        assert_eq!(render(&buffer_at("ab\ncd\nef", 0), true, 4), "ab\n^\ncd\nef");
    }
}
