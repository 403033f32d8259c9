//! Unit tests for the sequence module.
//!
//! Tests cover:
//! - unfold and the range builders derived from it
//! - fold_left / fold_right ordering and edge cases
//! - Immutable list helpers (map, head, tail, append, prepend, reverse,
//!   for_each)

#![cfg(feature = "sequence")]

use rstest::rstest;
use tailspin::sequence::{
    append, fold_left, fold_right, for_each, head, int_range_exclusive, int_range_inclusive,
    long_range_exclusive, long_range_inclusive, map, prepend, reverse, tail, unfold,
};

// =============================================================================
// unfold
// =============================================================================

#[rstest]
fn unfold_generates_while_condition_holds() {
    let result = unfold(1, |n| n + 1, |n| *n < 5);
    assert_eq!(result, vec![1, 2, 3, 4]);
}

#[rstest]
fn unfold_inclusive_bound() {
    let result = unfold(1, |n| n + 1, |n| *n <= 5);
    assert_eq!(result, vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn unfold_failing_seed_yields_empty() {
    let result = unfold(5, |n| n + 1, |n| *n < 1);
    assert_eq!(result, Vec::<i32>::new());
}

#[rstest]
fn unfold_single_element_when_only_seed_passes() {
    let result = unfold(1, |n| n + 1, |n| *n <= 1);
    assert_eq!(result, vec![1]);
}

#[rstest]
fn unfold_with_non_numeric_state() {
    let result = unfold(vec![1usize], |v| append(v, v.len() + 1), |v| v.len() <= 3);
    assert_eq!(result, vec![vec![1], vec![1, 2], vec![1, 2, 3]]);
}

#[rstest]
fn unfold_long_sequence_stays_iterative() {
    let result = unfold(0u64, |n| n + 1, |n| *n < 1_000_000);
    assert_eq!(result.len(), 1_000_000);
    assert_eq!(result.last(), Some(&999_999));
}

// =============================================================================
// Range Builders
// =============================================================================

#[rstest]
#[case(1, 5, vec![1, 2, 3, 4])]
#[case(5, 5, vec![])]
#[case(5, 1, vec![])]
#[case(-3, 1, vec![-3, -2, -1, 0])]
fn int_range_exclusive_cases(#[case] start: i32, #[case] end: i32, #[case] expected: Vec<i32>) {
    assert_eq!(int_range_exclusive(start, end), expected);
}

#[rstest]
#[case(1, 5, vec![1, 2, 3, 4, 5])]
#[case(5, 5, vec![5])]
#[case(5, 4, vec![])]
fn int_range_inclusive_cases(#[case] start: i32, #[case] end: i32, #[case] expected: Vec<i32>) {
    assert_eq!(int_range_inclusive(start, end), expected);
}

#[rstest]
fn long_ranges_cover_values_beyond_i32() {
    let start = i64::from(i32::MAX);
    let exclusive = long_range_exclusive(start, start + 3);
    assert_eq!(exclusive, vec![start, start + 1, start + 2]);

    let inclusive = long_range_inclusive(start, start + 3);
    assert_eq!(inclusive, vec![start, start + 1, start + 2, start + 3]);
}

// =============================================================================
// fold_left
// =============================================================================

#[rstest]
fn fold_left_builds_left_nested_rendering() {
    let items = vec![1, 2, 3, 4, 5];
    let rendered = fold_left(&items, String::from("0"), |accumulator, item| {
        format!("({accumulator} + {item})")
    });
    assert_eq!(rendered, "(((((0 + 1) + 2) + 3) + 4) + 5)");
}

#[rstest]
fn fold_left_empty_returns_identity() {
    let items: Vec<i32> = Vec::new();
    let result = fold_left(&items, String::from("identity"), |accumulator, _| accumulator);
    assert_eq!(result, "identity");
}

#[rstest]
fn fold_left_sums() {
    let items = int_range_inclusive(1, 100);
    assert_eq!(fold_left(&items, 0, |accumulator, item| accumulator + item), 5050);
}

// =============================================================================
// fold_right
// =============================================================================

#[rstest]
fn fold_right_builds_right_nested_rendering() {
    let items = vec![1, 2, 3, 4, 5];
    let rendered = fold_right(&items, String::from("0"), |item, accumulator| {
        format!("({item} + {accumulator})")
    });
    assert_eq!(rendered, "(1 + (2 + (3 + (4 + (5 + 0)))))");
}

#[rstest]
fn fold_right_empty_returns_identity() {
    let items: Vec<i32> = Vec::new();
    let result = fold_right(&items, 7, |item, accumulator| item + accumulator);
    assert_eq!(result, 7);
}

#[rstest]
fn fold_right_walks_from_the_last_element() {
    let items = vec!["a", "b", "c"];
    let visited = fold_right(&items, Vec::new(), |item, mut accumulator: Vec<&str>| {
        accumulator.push(item);
        accumulator
    });
    assert_eq!(visited, vec!["c", "b", "a"]);
}

// =============================================================================
// List Helpers
// =============================================================================

#[rstest]
fn map_transforms_in_order() {
    let items = vec![1, 2, 3];
    assert_eq!(map(&items, |item| item * item), vec![1, 4, 9]);
    assert_eq!(items, vec![1, 2, 3]);
}

#[rstest]
fn map_empty_is_empty() {
    let items: Vec<i32> = Vec::new();
    assert!(map(&items, |item| item + 1).is_empty());
}

#[rstest]
fn head_of_populated_sequence() {
    assert_eq!(head(&[1, 2, 3]), Some(&1));
}

#[rstest]
fn head_of_empty_sequence() {
    assert_eq!(head::<i32>(&[]), None);
}

#[rstest]
fn tail_drops_only_the_first_element() {
    assert_eq!(tail(&[1, 2, 3]), vec![2, 3]);
    assert_eq!(tail(&[1]), Vec::<i32>::new());
    assert_eq!(tail::<i32>(&[]), Vec::<i32>::new());
}

#[rstest]
fn append_places_element_last() {
    let items = vec![1, 2];
    assert_eq!(append(&items, 3), vec![1, 2, 3]);
    assert_eq!(items, vec![1, 2]);
}

#[rstest]
fn prepend_places_element_first() {
    let items = vec![2, 3];
    assert_eq!(prepend(&items, 1), vec![1, 2, 3]);
    assert_eq!(items, vec![2, 3]);
}

#[rstest]
fn reverse_reverses() {
    assert_eq!(reverse(&[1, 2, 3]), vec![3, 2, 1]);
    assert_eq!(reverse::<i32>(&[]), Vec::<i32>::new());
}

#[rstest]
fn for_each_visits_in_order() {
    let mut visited = Vec::new();
    for_each(&["a", "b", "c"], |item| visited.push(*item));
    assert_eq!(visited, vec!["a", "b", "c"]);
}

// =============================================================================
// Helpers Composed
// =============================================================================

#[rstest]
fn head_and_tail_reassemble_with_prepend() {
    let items = vec![1, 2, 3];
    let first = *head(&items).expect("non-empty");
    assert_eq!(prepend(&tail(&items), first), items);
}

#[rstest]
fn range_then_fold_computes_triangular_numbers() {
    let result = fold_left(&int_range_exclusive(1, 11), 0, |accumulator, item| {
        accumulator + item
    });
    assert_eq!(result, 55);
}
