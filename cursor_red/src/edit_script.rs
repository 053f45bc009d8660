// This file is part of CursorGap.

// CursorGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// CursorGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::str::FromStr;

use regex::Regex;
use strum::IntoEnumIterator;
use strum_macros::EnumDiscriminants;

use crate::{ContentBuffer, EditError, Result};

/// One step of an edit script, written as `name` or `name:argument`.
///
/// | command         | effect                                          |
/// |-----------------|-------------------------------------------------|
/// | `insert:TEXT`   | insert TEXT before the cursor                   |
/// | `newline`       | insert a line break before the cursor           |
/// | `delete[:N]`    | delete N characters before the cursor (default 1) |
/// | `move:N`        | move the cursor N characters, negative for left |
/// | `find:REGEX`    | jump to the next match at or after the cursor   |
/// | `start`, `end`  | jump to the start or end of the content         |
#[derive(Debug, Clone, EnumDiscriminants)]
#[strum_discriminants(name(EditCommandName))]
#[strum_discriminants(derive(
    strum_macros::IntoStaticStr,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    Hash
))]
#[strum_discriminants(strum(serialize_all = "snake_case"))]
pub enum EditCommand {
    Insert(String),
    Newline,
    Delete(usize),
    Move(isize),
    Find(Regex),
    Start,
    End,
}

impl EditCommand {
    pub fn name(&self) -> &'static str {
        EditCommandName::from(self).into()
    }

    pub fn apply(&self, buffer: &mut dyn ContentBuffer) -> Result<()> {
        match self {
            EditCommand::Insert(text) => buffer.insert_at_cursor(text),
            EditCommand::Newline => buffer.insert_at_cursor("\n"),
            EditCommand::Delete(char_count) => {
                let deleted = buffer.delete_at_cursor(*char_count)?;
                tracing::debug!(?deleted, "deleted before cursor");
            }
            EditCommand::Move(char_count) => {
                let byte_count = buffer.cursor_moved_by_char(*char_count)?;
                tracing::debug!(char_count, byte_count, "moved cursor");
            }
            EditCommand::Find(pattern) => {
                if !buffer.find_forward(pattern)? {
                    tracing::warn!(pattern = pattern.as_str(), "no match after cursor");
                }
            }
            EditCommand::Start => buffer.set_cursor_byte_index(0)?,
            EditCommand::End => {
                let end = buffer.content_byte_length();
                buffer.set_cursor_byte_index(end)?;
            }
        }

        Ok(())
    }
}

fn parse_argument<T: FromStr>(
    command: EditCommandName,
    expected: &'static str,
    argument: &str,
) -> Result<T> {
    argument.parse().map_err(|_| EditError::BadArgument {
        command: command.into(),
        expected,
        found: argument.to_string(),
    })
}

impl FromStr for EditCommand {
    type Err = EditError;

    fn from_str(command_text: &str) -> Result<Self> {
        let (name, argument) = command_text
            .split_once(':')
            .unwrap_or((command_text, ""));

        let name = EditCommandName::from_str(name).map_err(|_| EditError::UnknownCommand {
            name: name.to_string(),
            expected: EditCommandName::iter()
                .map(<&'static str>::from)
                .collect::<Vec<_>>()
                .join(", "),
        })?;

        Ok(match name {
            EditCommandName::Insert => EditCommand::Insert(argument.to_string()),
            EditCommandName::Newline => EditCommand::Newline,
            EditCommandName::Delete if argument.is_empty() => EditCommand::Delete(1),
            EditCommandName::Delete => {
                EditCommand::Delete(parse_argument(name, "a character count", argument)?)
            }
            EditCommandName::Move => {
                EditCommand::Move(parse_argument(name, "a signed character count", argument)?)
            }
            EditCommandName::Find => EditCommand::Find(Regex::new(argument)?),
            EditCommandName::Start => EditCommand::Start,
            EditCommandName::End => EditCommand::End,
        })
    }
}
