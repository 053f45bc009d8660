// This file is part of CursorGap.

// CursorGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// CursorGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::io::Read;

use cursor_gap::{GapBuffer, GapConfig};
use regex::Regex;

use crate::{
    byte_char_iter::{is_char_start, ByteCharIter},
    file_handle::FileWrite,
    ContentBuffer, EditError, Result,
};

/// UTF-8 text stored as bytes in a [GapBuffer], edited at the buffer's cursor.
pub struct TextBuffer {
    underlying_buf: GapBuffer<u8>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            underlying_buf: GapBuffer::new(),
        }
    }

    pub fn with_config(config: GapConfig) -> Result<Self> {
        Ok(Self {
            underlying_buf: GapBuffer::with_config(config)?,
        })
    }

    /// The underlying byte buffer, for inspection.
    pub fn bytes(&self) -> &GapBuffer<u8> {
        &self.underlying_buf
    }

    /// The text before and after the cursor.
    pub fn split_at_cursor(&self) -> Result<(String, String)> {
        let before = String::from_utf8(self.underlying_buf.precursor_iter().copied().collect())?;
        let after = String::from_utf8(self.underlying_buf.postcursor_iter().copied().collect())?;

        Ok((before, after))
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentBuffer for TextBuffer {
    fn insert_at_cursor(&mut self, content: &str) {
        self.underlying_buf.extend(content.bytes());
    }

    fn delete_at_cursor(&mut self, char_count: usize) -> Result<String> {
        let mut removed_bytes = Vec::new();
        let mut removed_chars = 0;

        while removed_chars < char_count {
            let Some(removed_byte) = self.underlying_buf.delete_at_cursor() else {
                break;
            };
            if is_char_start(removed_byte) {
                removed_chars += 1;
            }
            removed_bytes.push(removed_byte);
        }

        removed_bytes.reverse();
        Ok(String::from_utf8(removed_bytes)?)
    }

    fn chars(&self) -> Box<dyn Iterator<Item = Result<char>> + '_> {
        Box::new(ByteCharIter::new(self.underlying_buf.iter()))
    }

    fn content_byte_length(&self) -> usize {
        self.underlying_buf.len()
    }

    fn content_line_count(&self) -> usize {
        self.underlying_buf.iter().filter(|b| **b == b'\n').count() + 1
    }

    fn content_copy(&self) -> Result<String> {
        let utf8_bytes: Vec<u8> = self.underlying_buf.iter().copied().collect();

        Ok(String::from_utf8(utf8_bytes)?)
    }

    fn set_cursor_byte_index(&mut self, index: usize) -> Result<()> {
        if let Some(byte) = self.underlying_buf.get(index) {
            if !is_char_start(*byte) {
                return Err(EditError::NotCharBoundary(index));
            }
        }

        Ok(self.underlying_buf.set_cursor(index)?)
    }

    fn cursor_byte_index(&self) -> usize {
        self.underlying_buf.cursor_index()
    }

    fn cursor_line_index(&self) -> usize {
        self.underlying_buf
            .precursor_iter()
            .filter(|b| **b == b'\n')
            .count()
    }

    fn cursor_moved_by_char(&mut self, char_count: isize) -> Result<usize> {
        let byte_count = if char_count < 0 {
            let mut chars_left = char_count.unsigned_abs();
            let mut byte_count = 0;

            // Nearest byte first; a character is crossed once its start byte is passed
            for precursor_byte in self.underlying_buf.precursor_iter().rev() {
                if chars_left == 0 {
                    break;
                }
                byte_count += 1;
                if is_char_start(*precursor_byte) {
                    chars_left -= 1;
                }
            }

            byte_count
        } else {
            let mut chars_left = char_count.unsigned_abs();
            let mut byte_count = 0;

            for postcursor_byte in self.underlying_buf.postcursor_iter() {
                if is_char_start(*postcursor_byte) {
                    if chars_left == 0 {
                        break;
                    }
                    chars_left -= 1;
                }
                byte_count += 1;
            }

            byte_count
        };

        let delta = if char_count < 0 {
            -(byte_count as isize)
        } else {
            byte_count as isize
        };
        self.underlying_buf.move_cursor(delta)?;

        Ok(byte_count)
    }

    fn find_forward(&mut self, pattern: &Regex) -> Result<bool> {
        let content = self.content_copy()?;
        let Some(found) = pattern.find_at(&content, self.cursor_byte_index()) else {
            return Ok(false);
        };

        self.underlying_buf.set_cursor(found.start())?;
        Ok(true)
    }

    fn populate_from_read(&mut self, read: &mut dyn Read) -> Result<()> {
        let mut read_vec = Vec::new();
        read.read_to_end(&mut read_vec)?;
        let content = String::from_utf8(read_vec)?;

        self.underlying_buf =
            GapBuffer::from_iter_with_config(content.into_bytes(), self.underlying_buf.config())?;
        self.underlying_buf.set_cursor(0)?;

        tracing::debug!(
            bytes = self.underlying_buf.len(),
            capacity = self.underlying_buf.capacity(),
            "populated text buffer"
        );
        Ok(())
    }

    fn flush_to_write(&mut self, write: &mut dyn FileWrite) -> Result<()> {
        let write_buffer: Vec<u8> = self.underlying_buf.iter().copied().collect();

        Ok(write.write_file(write_buffer.as_slice())?)
    }
}
