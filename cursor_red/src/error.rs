// This file is part of CursorGap.

// CursorGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// CursorGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::{io, string::FromUtf8Error};

use cursor_gap::GapError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EditError>;

#[derive(Debug, Error)]
pub enum EditError {
    #[error(transparent)]
    Gap(#[from] GapError),

    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),

    #[error("invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("content is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error("invalid UTF-8 sequence starting with byte {byte:#04x} at byte index {index}")]
    InvalidByte { byte: u8, index: usize },

    #[error("byte index {0} is not on a character boundary")]
    NotCharBoundary(usize),

    #[error("unknown edit command `{name}`, expected one of: {expected}")]
    UnknownCommand { name: String, expected: String },

    #[error("edit command `{command}` expects {expected}, found `{found}`")]
    BadArgument {
        command: &'static str,
        expected: &'static str,
        found: String,
    },
}
