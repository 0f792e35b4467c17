// This file is part of TwinGap.

// TwinGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// TwinGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use twin_edit_lib::{command::parse_script, display, session::Session, EditError};

fn replay(text: &str, cursor: Option<usize>, script: &str) -> Result<Session, EditError> {
    let commands = parse_script(script)?;
    let mut session = Session::new(text, cursor)?;
    session.run(&commands)?;
    Ok(session)
}

#[test]
fn edits_a_file_like_a_user_would() {
    let script = r"
# rename the buffer
find first
erase 5
insert second
end
insert \n
";
    let session = replay("this is the first test buffer", Some(0), script).unwrap();

    assert_eq!(session.content(), "this is the second test buffer\n");
    assert_eq!(session.cursor(), session.buffer().len());
}

#[test]
fn multiline_edits_show_the_caret_on_the_cursor_line() {
    let script = "
goto 0
find b
insert >\\t
";
    let session = replay("a\nb\nc\n", None, script).unwrap();

    assert_eq!(session.content(), "a\n>\tb\nc\n");
    assert_eq!(
        display::render(session.buffer(), true, 4),
        "a\n>\tb\n    ^\nc\n"
    );
}

#[test]
fn failing_command_leaves_earlier_edits_in_place() {
    let commands = parse_script("begin\ninsert [\nadvance 10\ninsert ]\n").unwrap();
    let mut session = Session::new("abc", None).unwrap();

    assert!(matches!(
        session.run(&commands),
        Err(EditError::CursorOutOfRange { position: 1, .. })
    ));
    assert_eq!(session.content(), "[abc");
}

#[test]
fn errors_render_with_line_numbers() {
    let Err(error) = replay("abc", None, "begin\n\nerase two\n") else {
        panic!("Expected a parse failure");
    };

    assert_eq!(
        error.to_string(),
        "Line 3: could not parse \"two\" as a signed delta"
    );
}
