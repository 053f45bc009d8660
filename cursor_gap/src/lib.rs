// This file is part of CursorGap.

// CursorGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// CursorGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

//! A gap buffer implementation intended for use as the storage of text editor buffers.
//!
//! [GapBuffer] keeps its elements in one contiguous store split by a movable gap of unused
//! slots. Insertion and deletion happen at the gap, which follows the buffer's cursor, so
//! repeated edits at the same spot cost O(1) instead of shifting the rest of the sequence.
//! Moving the cursor costs O(distance moved). A gap buffer is a good solution when elements
//! are inserted near one point far more often than that point moves, as in a text editor.
//!
//! Failed preconditions are reported as [GapError] and never clamp or partially apply.
//! Growth follows [GapConfig]. [GapCursor] provides restartable read positions, and
//! [StoreView] a debugging picture of the store.
//!
//! The buffer has no internal synchronization; share it across threads behind a lock.

#![warn(missing_docs)]

pub use config::*;
pub use cursor::*;
pub use error::*;
pub use gap_buffer::*;
pub use render::*;

mod config;
mod cursor;
mod error;
mod gap_buffer;
mod render;
