// This file is part of CursorGap.

// CursorGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// CursorGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use crate::{EditError, Result};

/// Decodes UTF-8 characters from an iterator over bytes, such as a gap buffer's byte iterator.
///
/// Malformed input yields an [EditError::InvalidByte] item rather than stopping the caller.
pub struct ByteCharIter<I> {
    iter: I,
    index: usize,
}

pub fn expected_byte_length_from_starting(starting_byte: u8) -> Option<u8> {
    if starting_byte & 0b1000_0000 == 0 {
        Some(1)
    } else if starting_byte & 0b1100_0000 == 0b1000_0000 {
        // Continuation byte, never starts a character
        None
    } else if starting_byte & 0b1110_0000 == 0b1100_0000 {
        Some(2)
    } else if starting_byte & 0b1111_0000 == 0b1110_0000 {
        Some(3)
    } else if starting_byte & 0b1111_1000 == 0b1111_0000 {
        Some(4)
    } else {
        // Five or more leading ones is never valid utf8
        None
    }
}

pub fn is_char_start(byte: u8) -> bool {
    expected_byte_length_from_starting(byte).is_some()
}

impl<I> ByteCharIter<I> {
    pub fn new(iter: I) -> Self {
        Self { iter, index: 0 }
    }
}

impl<'a, I> Iterator for ByteCharIter<I>
where
    I: Iterator<Item = &'a u8>,
{
    type Item = Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        let first_byte = *self.iter.next()?;
        let start_index = self.index;
        self.index += 1;

        let invalid = EditError::InvalidByte {
            byte: first_byte,
            index: start_index,
        };
        let Some(char_byte_length) = expected_byte_length_from_starting(first_byte) else {
            return Some(Err(invalid));
        };
        let char_byte_length = usize::from(char_byte_length);

        let mut byte_buf = [first_byte, 0, 0, 0];
        for slot in byte_buf.iter_mut().take(char_byte_length).skip(1) {
            let Some(following_byte) = self.iter.next() else {
                return Some(Err(invalid));
            };
            self.index += 1;
            *slot = *following_byte;
        }

        Some(
            std::str::from_utf8(&byte_buf[..char_byte_length])
                .ok()
                .and_then(|decoded| decoded.chars().next())
                .ok_or(invalid),
        )
    }
}
