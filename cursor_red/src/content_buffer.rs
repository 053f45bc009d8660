// This file is part of CursorGap.

// CursorGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// CursorGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::io::Read;

use regex::Regex;

use crate::{file_handle::FileWrite, Result};

/// Text storage an editor edits through a single byte cursor.
///
/// Cursor indices are byte offsets into the UTF-8 content and always sit on character
/// boundaries.
pub trait ContentBuffer {
    fn insert_at_cursor(&mut self, content: &str);
    /// Deletes up to `char_count` characters before the cursor, returning them in order.
    fn delete_at_cursor(&mut self, char_count: usize) -> Result<String>;

    fn chars(&self) -> Box<dyn Iterator<Item = Result<char>> + '_>;
    fn content_byte_length(&self) -> usize;
    fn content_line_count(&self) -> usize;
    fn content_copy(&self) -> Result<String>;

    fn set_cursor_byte_index(&mut self, index: usize) -> Result<()>;
    fn cursor_byte_index(&self) -> usize;
    fn cursor_line_index(&self) -> usize;

    /// Moves the cursor by up to `char_count` characters, stopping at either end of the
    /// content. Returns the number of bytes the cursor moved.
    fn cursor_moved_by_char(&mut self, char_count: isize) -> Result<usize>;
    /// Moves the cursor to the start of the next match at or after it.
    fn find_forward(&mut self, pattern: &Regex) -> Result<bool>;

    fn populate_from_read(&mut self, read: &mut dyn Read) -> Result<()>;
    fn flush_to_write(&mut self, write: &mut dyn FileWrite) -> Result<()>;
}
