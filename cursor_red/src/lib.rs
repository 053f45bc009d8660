// This file is part of CursorGap.

// CursorGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// CursorGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

pub use content_buffer::*;
pub use edit_script::*;
pub use error::*;
pub use text_buffer::*;

pub mod byte_char_iter;
pub mod file_handle;

mod content_buffer;
mod edit_script;
mod error;
mod text_buffer;
