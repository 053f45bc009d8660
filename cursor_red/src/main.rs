// This file is part of CursorGap.

// CursorGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// CursorGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::io::{self, IsTerminal, Write};

use clap::{ArgAction, Parser};
use crossterm::style::Stylize;
use cursor_gap::GapConfig;
use cursor_red_lib::{
    file_handle::FileHandle, ContentBuffer, EditCommand, EditError, Result, TextBuffer,
};
use tracing::Level;

/// Applies cursor edits to a text buffer and prints the result with the cursor marked.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// File to load before editing. Editing starts from an empty buffer when omitted.
    file: Option<String>,

    /// Edit command, applied in the order given: `insert:TEXT`, `newline`, `delete[:N]`,
    /// `move:N`, `find:REGEX`, `start` or `end`.
    #[arg(short, long = "edit", value_name = "COMMAND")]
    edits: Vec<String>,

    /// Capacity of the gap buffer before its first growth.
    #[arg(long, default_value_t = GapConfig::DEFAULT_CAPACITY)]
    capacity: usize,

    /// Factor the gap buffer's capacity is multiplied by whenever it fills up.
    #[arg(long, default_value_t = GapConfig::DEFAULT_GROWTH_FACTOR)]
    growth_factor: usize,

    /// Print the gap buffer's backing store to stderr after every edit.
    #[arg(long)]
    show_store: bool,

    /// Write the edited content back to FILE.
    #[arg(short, long, requires = "file")]
    write: bool,

    /// Log more detail to stderr. Repeat for more.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = GapConfig::default()
        .with_default_capacity(args.capacity)
        .with_growth_factor(args.growth_factor);
    let mut buffer = TextBuffer::with_config(config)?;

    let mut file_handle = args.file.as_deref().map(FileHandle::open).transpose()?;
    if let Some(file_handle) = file_handle.as_mut() {
        buffer.populate_from_read(file_handle)?;
    }

    let commands = args
        .edits
        .iter()
        .map(|edit| edit.parse::<EditCommand>())
        .collect::<Result<Vec<_>>>()?;

    if args.show_store {
        eprintln!("{:<12} {}", "(loaded)", buffer.bytes().store_view());
    }
    for command in &commands {
        command.apply(&mut buffer)?;
        if args.show_store {
            eprintln!("{:<12} {}", command.name(), buffer.bytes().store_view());
        }
    }

    if args.write {
        let Some(file_handle) = file_handle.as_mut() else {
            return Err(EditError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "no file to write to",
            )));
        };
        buffer.flush_to_write(file_handle)?;
        tracing::info!(path = %file_handle.path().display(), "wrote buffer");
    }

    print_with_cursor(&buffer)
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn print_with_cursor(buffer: &TextBuffer) -> Result<()> {
    let (before, after) = buffer.split_at_cursor()?;
    let mut stdout = io::stdout().lock();

    if stdout.is_terminal() {
        write!(stdout, "{}{}{}", before, "|".reverse(), after)?;
    } else {
        write!(stdout, "{}|{}", before, after)?;
    }
    writeln!(
        stdout,
        "\n-- line {}/{}, byte {}/{}",
        buffer.cursor_line_index() + 1,
        buffer.content_line_count(),
        buffer.cursor_byte_index(),
        buffer.content_byte_length()
    )?;

    Ok(())
}
