// This file is part of CursorGap.

// CursorGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// CursorGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::fmt::{self, Display};

use crate::GapBuffer;

/// Marks the cursor in the [Display] rendering of a buffer.
pub const ELEMENT_CURSOR_GLYPH: char = '^';
/// Marks the slot where the gap starts in a [StoreView].
pub const STORE_CURSOR_GLYPH: char = '|';
/// Stands in for each empty gap slot in a [StoreView].
pub const GAP_GLYPH: char = '*';

/// Renders the external sequence as `{a, b, ^c}`, with the cursor glyph in front of the
/// element at the cursor, or before the closing brace when the cursor is at the end.
///
/// ### Examples
/// ```
/// use cursor_gap::GapBuffer;
///
/// let mut buffer = GapBuffer::from([1, 2, 3]);
/// assert_eq!(buffer.to_string(), "{1, 2, 3^}");
///
/// buffer.set_cursor(1).unwrap();
/// assert_eq!(buffer.to_string(), "{1, ^2, 3}");
/// ```
impl<T> Display for GapBuffer<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            if index == self.cursor_index() {
                write!(f, "{}", ELEMENT_CURSOR_GLYPH)?;
            }
            write!(f, "{}", element)?;
        }
        if self.cursor_index() == self.len() {
            write!(f, "{}", ELEMENT_CURSOR_GLYPH)?;
        }
        write!(f, "}}")
    }
}

/// Diagnostic rendering of a buffer's whole backing store, gap included.
///
/// Each slot is preceded by [STORE_CURSOR_GLYPH] at the cursor's array index and a space
/// elsewhere. Gap slots print as [GAP_GLYPH]. Not a stable format.
pub struct StoreView<'a, T> {
    buffer: &'a GapBuffer<T>,
}

impl<T> GapBuffer<T> {
    /// Returns a [Display]able view of the backing store, for debugging.
    ///
    /// ### Examples
    /// ```
    /// use cursor_gap::{GapBuffer, GapConfig};
    ///
    /// let config = GapConfig::default().with_default_capacity(5);
    /// let mut buffer = GapBuffer::with_config(config).unwrap();
    /// buffer.extend(['a', 'b', 'c']);
    /// buffer.move_cursor(-1).unwrap();
    ///
    /// assert_eq!(buffer.store_view().to_string(), "[ a b|* * c ]");
    /// ```
    pub fn store_view(&self) -> StoreView<'_, T> {
        StoreView { buffer: self }
    }
}

impl<T> Display for StoreView<'_, T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cursor = self.buffer.cursor;

        write!(f, "[")?;
        for (array_index, slot) in self.buffer.slots.iter().enumerate() {
            if array_index == cursor {
                write!(f, "{}", STORE_CURSOR_GLYPH)?;
            } else {
                write!(f, " ")?;
            }

            match slot {
                Some(element) => write!(f, "{}", element)?,
                None => write!(f, "{}", GAP_GLYPH)?,
            }
        }
        if cursor == self.buffer.capacity() {
            write!(f, "{}", STORE_CURSOR_GLYPH)?;
        } else {
            write!(f, " ")?;
        }
        write!(f, "]")
    }
}
