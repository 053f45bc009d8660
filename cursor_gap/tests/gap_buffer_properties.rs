// This file is part of CursorGap.

// CursorGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// CursorGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

//! Property tests checking a GapBuffer against a plain Vec plus cursor model.

use cursor_gap::{GapBuffer, GapConfig};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum EditOp {
    Insert(u8),
    InsertAfter(u8),
    Delete,
    DeleteAfter,
    Move(isize),
    SetCursor(usize),
    Reserve(usize),
}

fn arbitrary_edit_op() -> impl Strategy<Value = EditOp> {
    prop_oneof![
        4 => any::<u8>().prop_map(EditOp::Insert),
        2 => any::<u8>().prop_map(EditOp::InsertAfter),
        2 => Just(EditOp::Delete),
        1 => Just(EditOp::DeleteAfter),
        3 => (-40isize..40).prop_map(EditOp::Move),
        1 => (0usize..80).prop_map(EditOp::SetCursor),
        1 => (0usize..200).prop_map(EditOp::Reserve),
    ]
}

fn arbitrary_config() -> impl Strategy<Value = GapConfig> {
    (1usize..16, 2usize..5).prop_map(|(default_capacity, growth_factor)| GapConfig {
        default_capacity,
        growth_factor,
    })
}

/// Reference behavior: the external sequence and the cursor, nothing else.
#[derive(Debug, Default)]
struct Model {
    elements: Vec<u8>,
    cursor: usize,
}

impl Model {
    fn apply(&mut self, op: &EditOp) -> bool {
        match op {
            EditOp::Insert(value) => {
                self.elements.insert(self.cursor, *value);
                self.cursor += 1;
                true
            }
            EditOp::InsertAfter(value) => {
                self.elements.insert(self.cursor, *value);
                true
            }
            EditOp::Delete => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.elements.remove(self.cursor);
                }
                true
            }
            EditOp::DeleteAfter => {
                if self.cursor < self.elements.len() {
                    self.elements.remove(self.cursor);
                }
                true
            }
            EditOp::Move(delta) => match self.cursor.checked_add_signed(*delta) {
                Some(target) if target <= self.elements.len() => {
                    self.cursor = target;
                    true
                }
                _ => false,
            },
            EditOp::SetCursor(index) => {
                if *index <= self.elements.len() {
                    self.cursor = *index;
                    true
                } else {
                    false
                }
            }
            EditOp::Reserve(_) => true,
        }
    }
}

/// Applies `op` to the buffer, returning whether it was accepted.
fn apply(buffer: &mut GapBuffer<u8>, op: &EditOp) -> bool {
    match op {
        EditOp::Insert(value) => {
            buffer.insert_at_cursor(*value);
            true
        }
        EditOp::InsertAfter(value) => {
            buffer.insert_after_cursor(*value);
            true
        }
        EditOp::Delete => {
            buffer.delete_at_cursor();
            true
        }
        EditOp::DeleteAfter => {
            buffer.delete_after_cursor();
            true
        }
        EditOp::Move(delta) => buffer.move_cursor(*delta).is_ok(),
        EditOp::SetCursor(index) => buffer.set_cursor(*index).is_ok(),
        EditOp::Reserve(new_size) => {
            buffer.reserve(*new_size);
            true
        }
    }
}

fn assert_invariants(buffer: &GapBuffer<u8>) -> Result<(), TestCaseError> {
    prop_assert_eq!(buffer.gap_len(), buffer.capacity() - buffer.len());
    prop_assert!(buffer.len() <= buffer.capacity());
    prop_assert!(buffer.cursor_index() <= buffer.capacity());
    prop_assert!(buffer.cursor_index() <= buffer.len());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn matches_vec_model(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_edit_op(), 1..120),
    ) {
        let mut buffer = GapBuffer::with_config(config).unwrap();
        let mut model = Model::default();

        for op in &ops {
            let before: Vec<u8> = buffer.iter().copied().collect();
            let before_cursor = buffer.cursor_index();

            let accepted = apply(&mut buffer, op);
            prop_assert_eq!(accepted, model.apply(op), "acceptance differs for {:?}", op);

            if !accepted {
                let after: Vec<u8> = buffer.iter().copied().collect();
                prop_assert_eq!(after, before);
                prop_assert_eq!(buffer.cursor_index(), before_cursor);
            }

            assert_invariants(&buffer)?;
            prop_assert_eq!(buffer.cursor_index(), model.cursor);
            prop_assert_eq!(buffer.len(), model.elements.len());
        }

        let collected: Vec<u8> = buffer.iter().copied().collect();
        prop_assert_eq!(&collected, &model.elements);
        prop_assert_eq!(buffer.into_vec(), model.elements);
    }

    #[test]
    fn translation_is_a_bijection(
        elements in prop::collection::vec(any::<u8>(), 0..60),
        cursor_pct in 0.0..=1.0f64,
        extra in 0usize..40,
    ) {
        let mut buffer = GapBuffer::from(elements.clone());
        buffer.reserve(buffer.capacity() + extra);
        let cursor = ((cursor_pct * elements.len() as f64) as usize).min(elements.len());
        buffer.set_cursor(cursor).unwrap();

        let mut live_slots = Vec::new();
        for pos in 0..buffer.len() {
            let array_index = buffer.to_array_index(pos).unwrap();
            prop_assert_eq!(buffer.to_external_index(array_index), Ok(pos));
            live_slots.push(array_index);
        }

        // Every slot outside the live set is a gap slot with no external index
        for array_index in 0..buffer.capacity() {
            if !live_slots.contains(&array_index) {
                prop_assert!(buffer.to_external_index(array_index).is_err());
            }
        }
        prop_assert_eq!(buffer.capacity() - live_slots.len(), buffer.gap_len());
    }

    #[test]
    fn move_cursor_round_trips(
        elements in prop::collection::vec(any::<u8>(), 0..60),
        start_pct in 0.0..=1.0f64,
        delta in -60isize..60,
    ) {
        let mut buffer = GapBuffer::from(elements.clone());
        let start = ((start_pct * elements.len() as f64) as usize).min(elements.len());
        buffer.set_cursor(start).unwrap();

        if buffer.move_cursor(delta).is_ok() {
            buffer.move_cursor(-delta).unwrap();
        }

        prop_assert_eq!(buffer.cursor_index(), start);
        prop_assert_eq!(buffer.into_vec(), elements);
    }

    #[test]
    fn growth_reproduces_insertions(
        values in prop::collection::vec(any::<u8>(), 0..300),
        growth_factor in 2usize..4,
    ) {
        let config = GapConfig::default()
            .with_default_capacity(1)
            .with_growth_factor(growth_factor);
        let mut buffer = GapBuffer::with_config(config).unwrap();

        for value in &values {
            buffer.insert_at_cursor(*value);
            assert_invariants(&buffer)?;
        }

        prop_assert_eq!(buffer.into_vec(), values);
    }

    #[test]
    fn equality_depends_only_on_content(
        elements in prop::collection::vec(any::<u8>(), 0..40),
        cursor_pct in 0.0..=1.0f64,
        extra in 0usize..64,
    ) {
        let built = GapBuffer::from(elements.clone());

        let mut typed = GapBuffer::new();
        typed.extend(elements.iter().copied());
        let cursor = ((cursor_pct * elements.len() as f64) as usize).min(elements.len());
        typed.set_cursor(cursor).unwrap();
        typed.reserve(typed.capacity() + extra);

        prop_assert_eq!(&built, &typed);
        prop_assert_eq!(built.cmp(&typed), std::cmp::Ordering::Equal);
    }
}
