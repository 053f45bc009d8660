// This file is part of CursorGap.

// CursorGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// CursorGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GapError>;

/// Errors raised when a [GapBuffer](crate::GapBuffer) call violates its preconditions.
///
/// A call that returns an error leaves the buffer exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GapError {
    /// An external index was at or past the logical length of the buffer.
    #[error("index {index} is out of bounds for gap buffer of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// There is no element after the cursor because the cursor sits at the logical end.
    #[error("no element at cursor {cursor}, cursor is at the end of the buffer")]
    CursorAtEnd { cursor: usize },

    /// An array index fell inside the gap, so no external index exists for it.
    #[error("array index {array_index} is inside the gap [{gap_start}, {gap_end})")]
    GapSlot {
        array_index: usize,
        gap_start: usize,
        gap_end: usize,
    },

    /// An array index was at or past the end of the backing store.
    #[error("array index {array_index} is out of bounds for store of capacity {capacity}")]
    ArrayIndexOutOfBounds { array_index: usize, capacity: usize },

    /// Moving the cursor by `delta` would leave the valid cursor range `[0, len]`.
    #[error("moving cursor {from} by {delta} leaves the valid range [0, {len}]")]
    CursorOutOfBounds { from: usize, delta: isize, len: usize },

    /// An absolute cursor target was past the logical end of the buffer.
    #[error("cursor target {target} is outside the valid range [0, {len}]")]
    CursorTargetOutOfBounds { target: usize, len: usize },

    /// A [GapConfig](crate::GapConfig) failed validation.
    #[error("invalid gap buffer configuration: {0}")]
    InvalidConfig(String),
}

impl GapError {
    /// Whether this error belongs to the out-of-bounds family, as opposed to a configuration
    /// problem.
    pub fn is_out_of_bounds(&self) -> bool {
        !matches!(self, GapError::InvalidConfig(_))
    }
}
