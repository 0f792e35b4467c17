// This file is part of TwinGap.

// TwinGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// TwinGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use tracing::{info, Level};
use twin_edit_lib::{
    command::{parse_script, Command},
    display::{self, DEFAULT_TAB_WIDTH},
    session::Session,
    EditError, Result,
};

#[derive(Parser)]
#[command(
    name = "twin_edit",
    about = "Replays cursor edit commands over a gap buffer and prints the result",
    version
)]
struct Args {
    /// Text to edit. Reads stdin when absent
    file: Option<PathBuf>,

    /// Command to run after any script, in order. Repeatable
    #[arg(short = 'e', long = "execute", value_name = "CMD")]
    execute: Vec<String>,

    /// Script with one command per line. `#` starts a comment line
    #[arg(short, long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Initial cursor position. Defaults to the end of the text
    #[arg(long, value_name = "N")]
    cursor: Option<usize>,

    /// Print a caret line under the cursor
    #[arg(long)]
    show_cursor: bool,

    /// Display width of a tab when placing the caret
    #[arg(long, default_value_t = DEFAULT_TAB_WIDTH)]
    tab_width: usize,

    /// Log to stderr. Repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(rendered) => {
            print!("{}", rendered);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("twin_edit: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => return,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<String> {
    let text = match &args.file {
        Some(path) => read_path(path)?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let mut commands = match &args.script {
        Some(path) => parse_script(&read_path(path)?)?,
        None => vec![],
    };
    for (index, source) in args.execute.iter().enumerate() {
        commands.extend(Command::parse(source, index + 1)?);
    }

    let mut session = Session::new(&text, args.cursor)?;
    info!(
        len = session.buffer().len(),
        cursor = session.cursor(),
        commands = commands.len(),
        "loaded buffer"
    );

    session.run(&commands)?;
    info!(
        len = session.buffer().len(),
        cursor = session.cursor(),
        "finished script"
    );

    Ok(display::render(
        session.buffer(),
        args.show_cursor,
        args.tab_width.max(1),
    ))
}

fn read_path(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| EditError::Read {
        path: path.to_path_buf(),
        source,
    })
}
