// This file is part of CursorGap.

// CursorGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// CursorGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter, mem,
    ops::{Index, IndexMut},
    vec,
};

use crate::{GapConfig, GapError, Iter, Result};

/// A contiguous, growable gap buffer holding elements of type T.
///
/// Intended for efficient insertion and deletion of elements at the buffer's moveable cursor.
///
/// # Examples
/// ```
/// use cursor_gap::GapBuffer;
///
/// let mut gap_buffer = GapBuffer::new();
///
/// gap_buffer.insert_at_cursor('a');
/// gap_buffer.insert_at_cursor('b');
/// gap_buffer.insert_at_cursor('c');
///
/// let collected: String = gap_buffer.iter().collect();
/// assert_eq!(collected, "abc");
/// assert_eq!(gap_buffer.cursor_index(), 3);
///
/// gap_buffer.move_cursor(-1).unwrap();
/// gap_buffer.insert_at_cursor('X');
///
/// let collected: String = gap_buffer.iter().collect();
/// assert_eq!(collected, "abXc");
/// assert_eq!(gap_buffer.cursor_index(), 3);
/// ```
///
/// # Layout
///
/// The buffer owns a single store of [capacity](GapBuffer::capacity) slots. Live elements fill
/// the front of the store up to the cursor and the back of the store after the gap:
///
/// ```text
///            cursor_index
///                 |
///                 v
/// [ a  b  c  d  _  _  _  e  f ]
///   \________/  \_____/  \__/
///    left        gap     right
/// ```
///
/// Elements are addressed by their external index, which ignores the gap. Only
/// [to_array_index](GapBuffer::to_array_index) and
/// [to_external_index](GapBuffer::to_external_index) translate between the two coordinate
/// systems.
///
/// # Cursor
///
/// The cursor sits between two elements. Cursor `I` sits between external elements `I-1` and
/// `I`, so valid cursor positions run from `0` to `buffer.len()` inclusive. Inserting and
/// deleting at the cursor is O(1) (amortized for insertion). Moving the cursor by `delta` costs
/// O(|delta|), because only the elements that change sides of the gap are relocated.
///
/// # Growth
///
/// When an insertion finds the gap empty, the store is reallocated to
/// `capacity * growth_factor` slots (2 by default, see [GapConfig]) with both live regions and
/// the cursor position preserved. Growth needs `&mut self`, so no reference into the buffer and
/// no [GapCursor](crate::GapCursor) can outlive a reallocation.
#[derive(Clone)]
pub struct GapBuffer<T> {
    pub(crate) slots: Box<[Option<T>]>,
    pub(crate) len: usize,
    pub(crate) cursor: usize,
    config: GapConfig,
}

impl<T> GapBuffer<T> {
    /// Creates a new empty GapBuffer with the default capacity and cursor at 0.
    ///
    /// ### Examples
    /// ```
    /// use cursor_gap::GapBuffer;
    ///
    /// let buffer = GapBuffer::<i32>::new();
    ///
    /// assert_eq!(buffer.len(), 0);
    /// assert_eq!(buffer.cursor_index(), 0);
    /// assert_eq!(buffer.capacity(), 10);
    /// assert_eq!(buffer.gap_len(), 10);
    /// ```
    pub fn new() -> Self {
        Self::empty(GapConfig::default())
    }

    /// Creates a new empty GapBuffer sized and grown according to `config`.
    ///
    /// Fails if the configuration does not validate.
    ///
    /// ### Examples
    /// ```
    /// use cursor_gap::{GapBuffer, GapConfig};
    ///
    /// let buffer = GapBuffer::<u8>::with_config(GapConfig::default().with_default_capacity(64))
    ///     .unwrap();
    /// assert_eq!(buffer.capacity(), 64);
    ///
    /// assert!(GapBuffer::<u8>::with_config(GapConfig::default().with_growth_factor(1)).is_err());
    /// ```
    pub fn with_config(config: GapConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    /// Builds a buffer holding the elements of `iter` in order under `config`, with the cursor
    /// after the last element.
    pub fn from_iter_with_config<I>(iter: I, config: GapConfig) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        config.validate()?;
        Ok(Self::from_sequence(iter.into_iter().collect(), config))
    }

    fn empty(config: GapConfig) -> Self {
        Self {
            slots: Self::empty_slots(config.default_capacity),
            len: 0,
            cursor: 0,
            config,
        }
    }

    fn from_sequence(items: Vec<T>, config: GapConfig) -> Self {
        let len = items.len();
        let mut slots = Self::empty_slots(config.capacity_for(len));
        for (slot, item) in slots.iter_mut().zip(items) {
            *slot = Some(item);
        }

        Self {
            slots,
            len,
            cursor: len,
            config,
        }
    }

    fn empty_slots(capacity: usize) -> Box<[Option<T>]> {
        iter::repeat_with(|| None).take(capacity).collect()
    }

    /// Inserts `element` immediately before the cursor. The cursor moves forward to stay after
    /// the new element.
    ///
    /// Grows the store first if the gap is empty, which invalidates nothing the borrow checker
    /// would let you hold.
    ///
    /// ### Examples
    /// ```
    /// use cursor_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::new();
    /// buffer.insert_at_cursor(0);
    /// buffer.insert_at_cursor(1);
    ///
    /// assert_eq!(buffer.cursor_index(), 2);
    /// assert_eq!(buffer.into_vec(), [0, 1]);
    /// ```
    pub fn insert_at_cursor(&mut self, element: T) {
        self.grow_if_full();

        self.slots[self.cursor] = Some(element);
        self.cursor += 1;
        self.len += 1;

        self.check_invariants();
    }

    /// Inserts `element` immediately after the cursor. The cursor does not move, so the new
    /// element becomes the one at the cursor.
    ///
    /// ### Examples
    /// ```
    /// use cursor_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::new();
    /// buffer.insert_after_cursor(0);
    /// buffer.insert_after_cursor(1);
    ///
    /// assert_eq!(buffer.cursor_index(), 0);
    /// assert_eq!(buffer.get_at_cursor(), Ok(&1));
    /// assert_eq!(buffer.into_vec(), [1, 0]);
    /// ```
    pub fn insert_after_cursor(&mut self, element: T) {
        self.grow_if_full();

        let slot = self.gap_end() - 1;
        self.slots[slot] = Some(element);
        self.len += 1;

        self.check_invariants();
    }

    /// Removes the element immediately before the cursor and returns it. The cursor moves back
    /// to take its place.
    ///
    /// With the cursor at 0 there is nothing to delete: the buffer is left unchanged and `None`
    /// is returned.
    ///
    /// ### Examples
    /// ```
    /// use cursor_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from(['a', 'b', 'c']);
    ///
    /// assert_eq!(buffer.delete_at_cursor(), Some('c'));
    /// assert_eq!(buffer.delete_at_cursor(), Some('b'));
    /// assert_eq!(buffer.cursor_index(), 1);
    ///
    /// assert_eq!(buffer.delete_at_cursor(), Some('a'));
    /// assert_eq!(buffer.delete_at_cursor(), None);
    /// assert!(buffer.is_empty());
    /// ```
    pub fn delete_at_cursor(&mut self) -> Option<T> {
        if self.cursor == 0 {
            return None;
        }

        self.cursor -= 1;
        self.len -= 1;
        let deleted = self.slots[self.cursor].take();

        self.check_invariants();
        deleted
    }

    /// Removes the element immediately after the cursor and returns it. Does not move the
    /// cursor. Returns `None` without touching the buffer when the cursor is at the end.
    ///
    /// ### Examples
    /// ```
    /// use cursor_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2, 3]);
    /// buffer.set_cursor(2).unwrap();
    ///
    /// assert_eq!(buffer.delete_after_cursor(), Some(2));
    /// assert_eq!(buffer.delete_after_cursor(), Some(3));
    /// assert_eq!(buffer.delete_after_cursor(), None);
    ///
    /// assert_eq!(buffer.cursor_index(), 2);
    /// assert_eq!(buffer.into_vec(), [0, 1]);
    /// ```
    pub fn delete_after_cursor(&mut self) -> Option<T> {
        if self.cursor == self.len {
            return None;
        }

        let slot = self.gap_end();
        self.len -= 1;
        let deleted = self.slots[slot].take();

        self.check_invariants();
        deleted
    }

    /// Returns the element at the cursor, i.e. the element immediately after it.
    ///
    /// Fails with [GapError::CursorAtEnd] when the cursor sits after the last element.
    ///
    /// ### Examples
    /// ```
    /// use cursor_gap::{GapBuffer, GapError};
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2]);
    /// assert_eq!(
    ///     buffer.get_at_cursor(),
    ///     Err(GapError::CursorAtEnd { cursor: 3 })
    /// );
    ///
    /// buffer.move_cursor(-2).unwrap();
    /// assert_eq!(buffer.get_at_cursor(), Ok(&1));
    /// ```
    pub fn get_at_cursor(&self) -> Result<&T> {
        self.ensure_element_at_cursor()?;
        self.at(self.cursor)
    }

    /// Mutable counterpart of [get_at_cursor](GapBuffer::get_at_cursor).
    pub fn get_at_cursor_mut(&mut self) -> Result<&mut T> {
        self.ensure_element_at_cursor()?;
        self.at_mut(self.cursor)
    }

    fn ensure_element_at_cursor(&self) -> Result<()> {
        if self.cursor == self.len {
            Err(GapError::CursorAtEnd {
                cursor: self.cursor,
            })
        } else {
            Ok(())
        }
    }

    /// Returns a reference to the element at external index `pos`.
    ///
    /// Fails with [GapError::IndexOutOfBounds] when `pos >= len()`.
    ///
    /// ### Examples
    /// ```
    /// use cursor_gap::{GapBuffer, GapError};
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2, 3]);
    /// buffer.set_cursor(2).unwrap();
    ///
    /// assert_eq!(buffer.at(2), Ok(&2));
    /// assert_eq!(
    ///     buffer.at(4),
    ///     Err(GapError::IndexOutOfBounds { index: 4, len: 4 })
    /// );
    /// ```
    pub fn at(&self, pos: usize) -> Result<&T> {
        let len = self.len;
        self.get(pos)
            .ok_or(GapError::IndexOutOfBounds { index: pos, len })
    }

    /// Mutable counterpart of [at](GapBuffer::at).
    pub fn at_mut(&mut self, pos: usize) -> Result<&mut T> {
        let len = self.len;
        self.get_mut(pos)
            .ok_or(GapError::IndexOutOfBounds { index: pos, len })
    }

    /// Returns a reference to the element at external index `pos`, or `None` if out of bounds.
    ///
    /// ### Examples
    /// ```
    /// use cursor_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2, 3]);
    /// buffer.set_cursor(1).unwrap();
    ///
    /// assert_eq!(buffer.get(3), Some(&3));
    /// assert_eq!(buffer.get(4), None);
    /// ```
    pub fn get(&self, pos: usize) -> Option<&T> {
        let array_index = self.to_array_index(pos).ok()?;
        self.slots[array_index].as_ref()
    }

    /// Returns a mutable reference to the element at external index `pos`, or `None` if out of
    /// bounds.
    ///
    /// ### Examples
    /// ```
    /// use cursor_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2, 3, 4]);
    /// buffer.set_cursor(3).unwrap();
    ///
    /// if let Some(element) = buffer.get_mut(4) {
    ///     *element = 10;
    /// }
    ///
    /// assert_eq!(buffer.into_vec(), [0, 1, 2, 3, 10]);
    /// ```
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        let array_index = self.to_array_index(pos).ok()?;
        self.slots[array_index].as_mut()
    }

    /// Translates an external index into the array index of the slot holding that element.
    ///
    /// Fails with [GapError::IndexOutOfBounds] when `pos >= len()`.
    ///
    /// ### Examples
    /// ```
    /// use cursor_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2, 3]);
    /// buffer.set_cursor(2).unwrap();
    ///
    /// // Capacity 10 with 4 elements leaves a gap of 6 at array indices 2..8
    /// assert_eq!(buffer.to_array_index(1), Ok(1));
    /// assert_eq!(buffer.to_array_index(2), Ok(8));
    /// assert!(buffer.to_array_index(4).is_err());
    /// ```
    pub fn to_array_index(&self, pos: usize) -> Result<usize> {
        if pos >= self.len {
            return Err(GapError::IndexOutOfBounds {
                index: pos,
                len: self.len,
            });
        }

        Ok(self.array_index(pos))
    }

    /// Translates an array index back into the external index of the element stored there.
    /// This is the exact inverse of [to_array_index](GapBuffer::to_array_index).
    ///
    /// Fails with [GapError::GapSlot] if the slot is inside the gap, and with
    /// [GapError::ArrayIndexOutOfBounds] if it is past the end of the store.
    ///
    /// ### Examples
    /// ```
    /// use cursor_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2, 3]);
    /// buffer.set_cursor(2).unwrap();
    ///
    /// assert_eq!(buffer.to_external_index(1), Ok(1));
    /// assert_eq!(buffer.to_external_index(8), Ok(2));
    /// assert!(buffer.to_external_index(5).is_err());
    /// assert!(buffer.to_external_index(10).is_err());
    /// ```
    pub fn to_external_index(&self, array_index: usize) -> Result<usize> {
        let gap_end = self.gap_end();

        if array_index >= self.capacity() {
            Err(GapError::ArrayIndexOutOfBounds {
                array_index,
                capacity: self.capacity(),
            })
        } else if array_index < self.cursor {
            Ok(array_index)
        } else if array_index >= gap_end {
            Ok(array_index - self.gap_len())
        } else {
            Err(GapError::GapSlot {
                array_index,
                gap_start: self.cursor,
                gap_end,
            })
        }
    }

    /// Unchecked external to array translation. Callers guarantee `external_index < len`, or
    /// `external_index <= len` when computing a boundary.
    fn array_index(&self, external_index: usize) -> usize {
        if external_index < self.cursor {
            external_index
        } else {
            external_index + self.gap_len()
        }
    }

    /// Array index one past the last gap slot, i.e. where the right region begins.
    fn gap_end(&self) -> usize {
        self.array_index(self.cursor)
    }

    /// Moves the cursor `delta` positions, rightward for positive values and leftward for
    /// negative ones. Runs in O(|delta|): only the elements that change sides of the gap are
    /// relocated, and the gap keeps its size.
    ///
    /// Fails with [GapError::CursorOutOfBounds] if the new cursor would fall outside
    /// `[0, len()]`. The position is never clamped and a failed move changes nothing.
    ///
    /// ### Examples
    /// ```
    /// use cursor_gap::{GapBuffer, GapError};
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2, 3]);
    ///
    /// buffer.move_cursor(-3).unwrap();
    /// assert_eq!(buffer.cursor_index(), 1);
    ///
    /// buffer.move_cursor(2).unwrap();
    /// assert_eq!(buffer.cursor_index(), 3);
    ///
    /// assert_eq!(
    ///     buffer.move_cursor(2),
    ///     Err(GapError::CursorOutOfBounds { from: 3, delta: 2, len: 4 })
    /// );
    /// assert_eq!(buffer.cursor_index(), 3);
    /// assert_eq!(buffer.into_vec(), [0, 1, 2, 3]);
    /// ```
    pub fn move_cursor(&mut self, delta: isize) -> Result<()> {
        let target = self
            .cursor
            .checked_add_signed(delta)
            .filter(|target| *target <= self.len)
            .ok_or(GapError::CursorOutOfBounds {
                from: self.cursor,
                delta,
                len: self.len,
            })?;

        let gap_len = self.gap_len();
        if target > self.cursor {
            // Elements right of the gap slide down into its front, lowest first
            for array_index in self.cursor..target {
                self.slots.swap(array_index, array_index + gap_len);
            }
        } else {
            // Elements left of the gap slide up into its back, highest first
            for array_index in (target..self.cursor).rev() {
                self.slots.swap(array_index, array_index + gap_len);
            }
        }

        tracing::trace!(from = self.cursor, to = target, gap_len, "moved gap");
        self.cursor = target;

        self.check_invariants();
        Ok(())
    }

    /// Places the cursor at `index`. Runs in O(|I-N|) where I is the current cursor index and N
    /// is the new one.
    ///
    /// Fails with [GapError::CursorTargetOutOfBounds] if `index > len()`.
    ///
    /// ### Examples
    /// ```
    /// use cursor_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0]);
    ///
    /// buffer.insert_at_cursor(1);
    /// assert_eq!(buffer.cursor_index(), 2);
    ///
    /// buffer.set_cursor(0).unwrap();
    /// buffer.insert_at_cursor(2);
    ///
    /// assert_eq!(buffer.cursor_index(), 1);
    /// assert!(buffer.set_cursor(4).is_err());
    /// assert_eq!(buffer.into_vec(), [2, 0, 1]);
    /// ```
    pub fn set_cursor(&mut self, index: usize) -> Result<()> {
        if index > self.len {
            return Err(GapError::CursorTargetOutOfBounds {
                target: index,
                len: self.len,
            });
        }

        // Both ends lie in [0, len], and len never exceeds isize::MAX
        self.move_cursor(index as isize - self.cursor as isize)
    }

    /// Grows the store to hold `new_size` slots. Does nothing if the capacity is already at
    /// least `new_size`.
    ///
    /// Both live regions keep their order and the cursor keeps its position; the extra slots
    /// all join the gap. Reallocation moves every element, so no reference into the buffer may
    /// be held across this call.
    ///
    /// ### Examples
    /// ```
    /// use cursor_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2, 3]);
    /// buffer.set_cursor(1).unwrap();
    ///
    /// buffer.reserve(32);
    /// assert_eq!(buffer.capacity(), 32);
    /// assert_eq!(buffer.gap_len(), 28);
    /// assert_eq!(buffer.cursor_index(), 1);
    ///
    /// buffer.reserve(4);
    /// assert_eq!(buffer.capacity(), 32);
    ///
    /// assert_eq!(buffer.into_vec(), [0, 1, 2, 3]);
    /// ```
    pub fn reserve(&mut self, new_size: usize) {
        let old_capacity = self.capacity();
        if old_capacity >= new_size {
            return;
        }

        let old_gap_end = self.gap_end();
        let mut left = mem::replace(&mut self.slots, Self::empty_slots(new_size)).into_vec();
        let right = left.split_off(old_gap_end);
        left.truncate(self.cursor);

        let new_gap_end = self.gap_end();
        for (slot, element) in self.slots[..self.cursor].iter_mut().zip(left) {
            *slot = element;
        }
        for (slot, element) in self.slots[new_gap_end..].iter_mut().zip(right) {
            *slot = element;
        }

        tracing::debug!(
            old_capacity,
            new_capacity = new_size,
            len = self.len,
            cursor = self.cursor,
            "grew gap buffer store"
        );

        self.check_invariants();
    }

    fn grow_if_full(&mut self) {
        if self.gap_len() == 0 {
            self.reserve(self.config.grown_capacity(self.capacity()));
        }
    }

    /// Removes every element, keeping the allocated store. The cursor returns to 0.
    ///
    /// ### Examples
    /// ```
    /// use cursor_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2]);
    /// buffer.clear();
    ///
    /// assert!(buffer.is_empty());
    /// assert_eq!(buffer.cursor_index(), 0);
    /// assert_eq!(buffer.capacity(), 10);
    /// ```
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.len = 0;
        self.cursor = 0;
    }

    /// Returns the number of live elements in the gap buffer.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the backing store, live and gap alike.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of unused slots in the gap. Always `capacity() - len()`.
    pub fn gap_len(&self) -> usize {
        self.capacity() - self.len
    }

    /// Returns the current cursor index: the number of elements before the cursor.
    pub fn cursor_index(&self) -> usize {
        self.cursor
    }

    /// Returns the configuration this buffer sizes and grows by.
    pub fn config(&self) -> GapConfig {
        self.config
    }

    /// Returns the value immediately before the cursor if one exists.
    ///
    /// ### Examples
    /// ```
    /// use cursor_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::new();
    /// assert_eq!(buffer.precursor(), None);
    ///
    /// buffer.insert_after_cursor(0);
    /// assert_eq!(buffer.precursor(), None);
    ///
    /// buffer.insert_at_cursor(1);
    /// assert_eq!(buffer.precursor(), Some(&1));
    /// ```
    pub fn precursor(&self) -> Option<&T> {
        self.get(self.cursor.checked_sub(1)?)
    }

    /// Returns the value immediately after the cursor if one exists.
    ///
    /// ### Examples
    /// ```
    /// use cursor_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::new();
    /// assert_eq!(buffer.postcursor(), None);
    ///
    /// buffer.insert_at_cursor(0);
    /// assert_eq!(buffer.postcursor(), None);
    ///
    /// buffer.insert_after_cursor(1);
    /// assert_eq!(buffer.postcursor(), Some(&1));
    /// ```
    pub fn postcursor(&self) -> Option<&T> {
        self.get(self.cursor)
    }

    /// Returns an iterator over only the elements before the cursor.
    ///
    /// ### Examples
    /// ```
    /// use cursor_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2]);
    /// buffer.set_cursor(2).unwrap();
    ///
    /// let collected: Vec<_> = buffer.precursor_iter().collect();
    /// assert_eq!(collected, [&0, &1]);
    ///
    /// let nearest_first: Vec<_> = buffer.precursor_iter().rev().collect();
    /// assert_eq!(nearest_first, [&1, &0]);
    /// ```
    pub fn precursor_iter(&self) -> impl DoubleEndedIterator<Item = &'_ T> + '_ {
        self.slots[..self.cursor].iter().flatten()
    }

    /// Returns an iterator over only the elements after the cursor.
    ///
    /// ### Examples
    /// ```
    /// use cursor_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2]);
    /// buffer.set_cursor(1).unwrap();
    ///
    /// let collected: Vec<_> = buffer.postcursor_iter().collect();
    /// assert_eq!(collected, [&1, &2]);
    /// ```
    pub fn postcursor_iter(&self) -> impl DoubleEndedIterator<Item = &'_ T> + '_ {
        self.slots[self.gap_end()..].iter().flatten()
    }

    /// Returns an iterator over the elements in external order, regardless of the cursor.
    ///
    /// ### Examples
    /// ```
    /// use cursor_gap::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2]);
    /// buffer.set_cursor(1).unwrap();
    ///
    /// let mut iter = buffer.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next_back(), Some(&2));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self, 0, self.len)
    }

    /// Consumes the buffer, returning its elements in external order.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        assert!(
            self.len <= self.capacity(),
            "GapBuffer length ({}) exceeds its capacity ({})",
            self.len,
            self.capacity()
        );
        assert!(
            self.cursor <= self.len,
            "GapBuffer cursor ({}) is past its length ({})",
            self.cursor,
            self.len
        );
    }

    #[cfg(not(debug_assertions))]
    fn check_invariants(&self) {}
}

impl<T> GapBuffer<T>
where
    T: Clone,
{
    /// Creates a buffer holding `count` clones of `value`, with the cursor after the last one
    /// and room for as many again before the first growth.
    ///
    /// ### Examples
    /// ```
    /// use cursor_gap::GapBuffer;
    ///
    /// let buffer = GapBuffer::from_elem(8, 'x');
    ///
    /// assert_eq!(buffer.len(), 8);
    /// assert_eq!(buffer.cursor_index(), 8);
    /// assert_eq!(buffer.capacity(), 16);
    /// ```
    pub fn from_elem(count: usize, value: T) -> Self {
        Self::from_sequence(vec![value; count], GapConfig::default())
    }
}

impl<T> Default for GapBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for GapBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.at(index) {
            Ok(element) => element,
            Err(error) => panic!("Out of bounds index provided to GapBuffer: {}", error),
        }
    }
}

impl<T> IndexMut<usize> for GapBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.at_mut(index) {
            Ok(element) => element,
            Err(error) => panic!("Out of bounds index provided to GapBuffer: {}", error),
        }
    }
}

impl<T> PartialEq for GapBuffer<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for GapBuffer<T> where T: Eq {}

impl<T> PartialOrd for GapBuffer<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T> Ord for GapBuffer<T>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T> Hash for GapBuffer<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for element in self.iter() {
            element.hash(state);
        }
    }
}

impl<T> fmt::Debug for GapBuffer<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GapBuffer")
            .field("elements", &self.iter().collect::<Vec<_>>())
            .field("cursor", &self.cursor)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T> From<Vec<T>> for GapBuffer<T> {
    fn from(value: Vec<T>) -> Self {
        Self::from_sequence(value, GapConfig::default())
    }
}

impl<T> From<&[T]> for GapBuffer<T>
where
    T: Clone,
{
    fn from(value: &[T]) -> Self {
        Self::from_sequence(Vec::from(value), GapConfig::default())
    }
}

impl<T, const N: usize> From<[T; N]> for GapBuffer<T> {
    fn from(value: [T; N]) -> Self {
        Self::from_sequence(Vec::from(value), GapConfig::default())
    }
}

impl<T> FromIterator<T> for GapBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_sequence(iter.into_iter().collect(), GapConfig::default())
    }
}

impl<T> Extend<T> for GapBuffer<T> {
    /// Inserts every item at the cursor in order, leaving the cursor after the last one.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert_at_cursor(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a GapBuffer<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for GapBuffer<T> {
    type Item = T;

    type IntoIter = iter::Flatten<vec::IntoIter<Option<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        // Store order is left region, gap, right region, so dropping the empty gap slots
        // leaves external order
        self.slots.into_vec().into_iter().flatten()
    }
}
