// This file is part of CursorGap.

// CursorGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// CursorGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use cursor_gap::{GapBuffer, GapConfig, GapError};
use pretty_assertions::assert_eq;

fn text(buffer: &GapBuffer<char>) -> String {
    buffer.iter().collect()
}

#[test]
fn insert_then_step_back_and_insert() {
    let mut buffer = GapBuffer::new();
    buffer.insert_at_cursor('a');
    buffer.insert_at_cursor('b');
    buffer.insert_at_cursor('c');

    assert_eq!(text(&buffer), "abc");
    assert_eq!(buffer.cursor_index(), 3);

    buffer.move_cursor(-1).unwrap();
    buffer.insert_at_cursor('X');

    assert_eq!(text(&buffer), "abXc");
    assert_eq!(buffer.cursor_index(), 3);
    assert_eq!(buffer.precursor(), Some(&'X'));
    assert_eq!(buffer.get_at_cursor(), Ok(&'c'));
}

#[test]
fn delete_backwards_down_to_a_no_op() {
    let mut buffer = GapBuffer::from(['a', 'b', 'c']);

    buffer.delete_at_cursor();
    buffer.delete_at_cursor();
    assert_eq!(text(&buffer), "a");
    assert_eq!(buffer.cursor_index(), 1);

    buffer.delete_at_cursor();
    assert_eq!(text(&buffer), "");
    assert_eq!(buffer.cursor_index(), 0);

    assert_eq!(buffer.delete_at_cursor(), None);
    assert_eq!(text(&buffer), "");
    assert_eq!(buffer.cursor_index(), 0);
}

#[test]
fn delete_at_start_keeps_the_rest() {
    let mut buffer = GapBuffer::from(['a']);
    buffer.set_cursor(0).unwrap();

    assert_eq!(buffer.delete_at_cursor(), None);
    assert_eq!(text(&buffer), "a");
}

#[test]
fn growth_preserves_content_across_several_reallocations() {
    let mut buffer = GapBuffer::new();
    let initial_capacity = buffer.capacity();

    for value in 0..100 {
        buffer.insert_at_cursor(value);
    }

    assert!(buffer.capacity() >= initial_capacity * 4);
    assert_eq!(buffer.len(), 100);
    assert_eq!(buffer.gap_len(), buffer.capacity() - buffer.len());
    assert_eq!(buffer.into_vec(), (0..100).collect::<Vec<_>>());
}

#[test]
fn growth_in_the_middle_keeps_both_sides() {
    let mut buffer: GapBuffer<u32> = (0..10).collect();
    buffer.set_cursor(5).unwrap();

    for value in 100..150 {
        buffer.insert_at_cursor(value);
    }

    let expected: Vec<u32> = (0..5).chain(100..150).chain(5..10).collect();
    assert_eq!(buffer.cursor_index(), 55);
    assert_eq!(buffer.into_vec(), expected);
}

#[test]
fn custom_growth_factor_is_honored() {
    let config = GapConfig::default()
        .with_default_capacity(1)
        .with_growth_factor(4);
    let mut buffer = GapBuffer::with_config(config).unwrap();

    let mut capacities = vec![buffer.capacity()];
    for value in 0..20 {
        buffer.insert_at_cursor(value);
        if capacities.last() != Some(&buffer.capacity()) {
            capacities.push(buffer.capacity());
        }
    }

    assert_eq!(capacities, [1, 4, 16, 64]);
    assert_eq!(buffer.config(), config);
}

#[test]
fn out_of_bounds_calls_are_rejected() {
    let mut buffer = GapBuffer::from(['a', 'b', 'c']);

    assert_eq!(
        buffer.at(3),
        Err(GapError::IndexOutOfBounds { index: 3, len: 3 })
    );
    assert_eq!(
        buffer.get_at_cursor(),
        Err(GapError::CursorAtEnd { cursor: 3 })
    );
    assert_eq!(
        buffer.move_cursor(1),
        Err(GapError::CursorOutOfBounds {
            from: 3,
            delta: 1,
            len: 3
        })
    );
    assert_eq!(
        buffer.move_cursor(-4),
        Err(GapError::CursorOutOfBounds {
            from: 3,
            delta: -4,
            len: 3
        })
    );
    assert!(buffer
        .move_cursor(buffer.capacity() as isize)
        .unwrap_err()
        .is_out_of_bounds());

    assert_eq!(text(&buffer), "abc");
    assert_eq!(buffer.cursor_index(), 3);
}

#[test]
fn set_cursor_far_past_the_end_is_rejected() {
    let mut buffer = GapBuffer::from([1, 2, 3]);
    buffer.set_cursor(0).unwrap();

    assert_eq!(
        buffer.set_cursor(usize::MAX),
        Err(GapError::CursorTargetOutOfBounds {
            target: usize::MAX,
            len: 3
        })
    );
    assert_eq!(
        buffer.set_cursor(1usize << 63),
        Err(GapError::CursorTargetOutOfBounds {
            target: 1usize << 63,
            len: 3
        })
    );
    assert_eq!(buffer.cursor_index(), 0);

    buffer.set_cursor(3).unwrap();
    assert!(buffer.set_cursor(1usize << 63).unwrap_err().is_out_of_bounds());
    assert_eq!(buffer.cursor_index(), 3);
    assert_eq!(buffer.into_vec(), [1, 2, 3]);
}

#[test]
fn equality_ignores_cursor_and_capacity() {
    let typed: GapBuffer<char> = "hello".chars().collect();

    let mut edited = GapBuffer::with_config(GapConfig::default().with_default_capacity(2)).unwrap();
    edited.extend("hxllo!".chars());
    edited.delete_at_cursor();
    edited.set_cursor(2).unwrap();
    edited.delete_at_cursor();
    edited.insert_at_cursor('e');
    edited.set_cursor(0).unwrap();

    assert_ne!(typed.cursor_index(), edited.cursor_index());
    assert_ne!(typed.capacity(), edited.capacity());
    assert_eq!(typed, edited);
}

#[test]
fn ordering_is_lexicographic() {
    let abc = GapBuffer::from(['a', 'b', 'c']);
    let abd = GapBuffer::from(['a', 'b', 'd']);
    let ab = GapBuffer::from(['a', 'b']);

    assert!(abc < abd);
    assert!(ab < abc);
    assert!(abd > ab);
    assert_eq!(abc.cmp(&abc.clone()), std::cmp::Ordering::Equal);
}

#[test]
fn mutation_through_accessors() {
    let mut buffer = GapBuffer::from([1, 2, 3, 4]);
    buffer.set_cursor(2).unwrap();

    *buffer.get_at_cursor_mut().unwrap() *= 10;
    *buffer.at_mut(0).unwrap() += 100;
    buffer[3] = 0;

    assert_eq!(buffer.into_vec(), [101, 2, 30, 0]);
}

#[test]
fn from_elem_fills_before_the_cursor() {
    let mut buffer = GapBuffer::from_elem(3, String::from("ab"));
    buffer.insert_at_cursor(String::from("cd"));

    assert_eq!(buffer.len(), 4);
    assert_eq!(buffer[0], "ab");
    assert_eq!(buffer[3], "cd");
}
