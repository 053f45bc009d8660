// This file is part of CursorGap.

// CursorGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// CursorGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use crate::{GapError, Result};

/// Sizing and growth parameters for a [GapBuffer](crate::GapBuffer).
///
/// The growth factor is part of the buffer's amortized-cost contract: whenever an insertion
/// finds the gap exhausted, the store is reallocated to `capacity * growth_factor` slots, so
/// insertion at the cursor costs amortized O(1).
///
/// ### Examples
/// ```
/// use cursor_gap::{GapBuffer, GapConfig};
///
/// let config = GapConfig::default()
///     .with_default_capacity(4)
///     .with_growth_factor(3);
/// let mut buffer = GapBuffer::with_config(config).unwrap();
///
/// assert_eq!(buffer.capacity(), 4);
/// for i in 0..5 {
///     buffer.insert_at_cursor(i);
/// }
/// assert_eq!(buffer.capacity(), 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GapConfig {
    /// Capacity of an empty buffer, and the floor for buffers built from a sequence.
    pub default_capacity: usize,
    /// Multiplier applied to the capacity when an insertion finds the gap exhausted.
    pub growth_factor: usize,
}

impl GapConfig {
    /// Capacity used by [GapBuffer::new](crate::GapBuffer::new).
    pub const DEFAULT_CAPACITY: usize = 10;
    /// Capacity doubles whenever the gap runs out.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Copy of this config with a different default capacity.
    pub fn with_default_capacity(&self, default_capacity: usize) -> Self {
        let mut new = *self;
        new.default_capacity = default_capacity;
        new
    }

    /// Copy of this config with a different growth factor.
    pub fn with_growth_factor(&self, growth_factor: usize) -> Self {
        let mut new = *self;
        new.growth_factor = growth_factor;
        new
    }

    /// Rejects configurations that could not grow the store: a zero default capacity never
    /// grows under multiplication, and a factor below 2 never adds a slot.
    pub fn validate(&self) -> Result<()> {
        if self.default_capacity == 0 {
            return Err(GapError::InvalidConfig(
                "default capacity must be at least 1".to_string(),
            ));
        }
        if self.growth_factor < 2 {
            return Err(GapError::InvalidConfig(format!(
                "growth factor must be at least 2, found {}",
                self.growth_factor
            )));
        }

        Ok(())
    }

    /// Capacity for a store that starts out holding `count` elements: room for as many again
    /// before the first growth, never less than the default capacity.
    pub(crate) fn capacity_for(&self, count: usize) -> usize {
        self.default_capacity.max(count.saturating_mul(2))
    }

    /// Capacity to grow to from `capacity` once the gap is exhausted.
    pub(crate) fn grown_capacity(&self, capacity: usize) -> usize {
        capacity
            .max(1)
            .checked_mul(self.growth_factor)
            .expect("gap buffer capacity overflow")
    }
}

impl Default for GapConfig {
    fn default() -> Self {
        Self {
            default_capacity: Self::DEFAULT_CAPACITY,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GapConfig::default();
        assert_eq!(config.default_capacity, 10);
        assert_eq!(config.growth_factor, 2);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_configs_that_cannot_grow() {
        let zero_capacity = GapConfig::default().with_default_capacity(0);
        assert!(matches!(
            zero_capacity.validate(),
            Err(GapError::InvalidConfig(_))
        ));

        let flat_growth = GapConfig::default().with_growth_factor(1);
        assert!(matches!(
            flat_growth.validate(),
            Err(GapError::InvalidConfig(_))
        ));
    }

    #[test]
    fn capacity_for_sequences_leaves_room() {
        let config = GapConfig::default();
        assert_eq!(config.capacity_for(0), 10);
        assert_eq!(config.capacity_for(3), 10);
        assert_eq!(config.capacity_for(8), 16);
    }

    #[test]
    fn grown_capacity_multiplies() {
        let config = GapConfig::default().with_growth_factor(3);
        assert_eq!(config.grown_capacity(4), 12);
        assert_eq!(config.grown_capacity(0), 3);
    }
}
