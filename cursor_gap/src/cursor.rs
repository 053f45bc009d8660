// This file is part of CursorGap.

// CursorGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// CursorGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

//! Non-owning positions into a [GapBuffer].
//!
//! A [GapCursor] is a shared borrow of the buffer plus a logical position. Every read goes
//! through [GapBuffer::at], so a cursor never holds a pointer into the store and can be moved
//! back and forth or restarted freely. Since growth needs `&mut GapBuffer`, the borrow checker
//! rules out using a cursor across a reallocation.

use std::iter::FusedIterator;

use crate::{GapBuffer, GapError, Result};

/// A restartable read position within a [GapBuffer].
///
/// Positions run from `0` to `buffer.len()` inclusive, the last one being the end position that
/// holds no element.
///
/// ### Examples
/// ```
/// use cursor_gap::GapBuffer;
///
/// let mut buffer = GapBuffer::from(['a', 'b', 'c', 'd']);
/// buffer.set_cursor(2).unwrap();
///
/// let mut cursor = buffer.cursor();
/// assert_eq!(cursor.get(), Ok(&'c'));
///
/// cursor.retreat().unwrap();
/// assert_eq!(cursor.get(), Ok(&'b'));
///
/// let rest: String = cursor.iter().collect();
/// assert_eq!(rest, "bcd");
///
/// cursor.seek(4).unwrap();
/// assert!(cursor.is_end());
/// assert!(cursor.get().is_err());
/// assert!(cursor.advance().is_err());
/// ```
pub struct GapCursor<'a, T> {
    buffer: &'a GapBuffer<T>,
    position: usize,
}

impl<'a, T> GapCursor<'a, T> {
    /// The logical position of this cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// True when the cursor sits after the last element.
    pub fn is_end(&self) -> bool {
        self.position == self.buffer.len()
    }

    /// The element at this position, resolved through [GapBuffer::at].
    pub fn get(&self) -> Result<&'a T> {
        self.buffer.at(self.position)
    }

    /// Moves to `position`. Fails without moving if `position > buffer.len()`.
    pub fn seek(&mut self, position: usize) -> Result<()> {
        let len = self.buffer.len();
        if position > len {
            return Err(GapError::CursorTargetOutOfBounds {
                target: position,
                len,
            });
        }

        self.position = position;
        Ok(())
    }

    /// Moves by `delta` positions. Fails without moving if the result leaves `[0, len]`.
    pub fn offset(&mut self, delta: isize) -> Result<()> {
        let len = self.buffer.len();
        self.position = self
            .position
            .checked_add_signed(delta)
            .filter(|position| *position <= len)
            .ok_or(GapError::CursorOutOfBounds {
                from: self.position,
                delta,
                len,
            })?;

        Ok(())
    }

    /// Moves one position towards the end.
    pub fn advance(&mut self) -> Result<()> {
        self.offset(1)
    }

    /// Moves one position towards the start.
    pub fn retreat(&mut self) -> Result<()> {
        self.offset(-1)
    }

    /// Iterates from this position to the end of the buffer without moving the cursor.
    pub fn iter(&self) -> Iter<'a, T> {
        Iter::new(self.buffer, self.position, self.buffer.len())
    }
}

impl<T> Clone for GapCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for GapCursor<'_, T> {}

impl<T> PartialEq for GapCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.buffer, other.buffer) && self.position == other.position
    }
}

impl<T> Eq for GapCursor<'_, T> {}

impl<T> GapBuffer<T> {
    /// A [GapCursor] at logical position `position`. Fails if `position > len()`.
    pub fn cursor_at(&self, position: usize) -> Result<GapCursor<'_, T>> {
        if position > self.len() {
            return Err(GapError::IndexOutOfBounds {
                index: position,
                len: self.len(),
            });
        }

        Ok(GapCursor {
            buffer: self,
            position,
        })
    }

    /// A [GapCursor] at the first element.
    pub fn begin(&self) -> GapCursor<'_, T> {
        GapCursor {
            buffer: self,
            position: 0,
        }
    }

    /// A [GapCursor] at the end position, after the last element.
    pub fn end(&self) -> GapCursor<'_, T> {
        GapCursor {
            buffer: self,
            position: self.len(),
        }
    }

    /// A [GapCursor] at the buffer's edit cursor, reading the element after it.
    pub fn cursor(&self) -> GapCursor<'_, T> {
        GapCursor {
            buffer: self,
            position: self.cursor_index(),
        }
    }
}

/// Iterator over a range of a [GapBuffer]'s elements in external order.
///
/// Created by [GapBuffer::iter] and [GapCursor::iter].
pub struct Iter<'a, T> {
    buffer: &'a GapBuffer<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(buffer: &'a GapBuffer<T>, front: usize, back: usize) -> Self {
        Self {
            buffer,
            front,
            back,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        let element = self.buffer.get(self.front);
        self.front += 1;
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.saturating_sub(self.front);
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        self.back -= 1;
        self.buffer.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
