//! Sequence generation from a seed value.

/// Generates a sequence by repeatedly applying a step function to a seed.
///
/// Starting from `seed`, the current value is appended to the output and
/// advanced with `step` for as long as `condition` holds. Generation stops
/// the first time `condition` returns `false`; the seed itself is included
/// in the output if and only if `condition(&seed)` is `true`.
///
/// The loop is iterative and uses constant auxiliary stack space per
/// element, so unfolding long sequences is bounded only by heap.
///
/// # Arguments
///
/// * `seed` - The starting value of the unfolding operation
/// * `step` - Produces the next value from the current one
/// * `condition` - Indicates whether unfolding should continue
///
/// # Examples
///
/// ```rust
/// use tailspin::sequence::unfold;
///
/// let ascending = unfold(1, |n| n + 1, |n| *n < 5);
/// assert_eq!(ascending, vec![1, 2, 3, 4]);
///
/// // A failing seed produces an empty sequence.
/// let empty = unfold(5, |n| n + 1, |n| *n < 1);
/// assert!(empty.is_empty());
/// ```
///
/// Non-numeric seeds work just as well:
///
/// ```rust
/// use tailspin::sequence::unfold;
///
/// let words = unfold(String::from("a"), |s| format!("{s}a"), |s| s.len() <= 3);
/// assert_eq!(words, vec!["a", "aa", "aaa"]);
/// ```
pub fn unfold<T, S, P>(seed: T, mut step: S, mut condition: P) -> Vec<T>
where
    S: FnMut(&T) -> T,
    P: FnMut(&T) -> bool,
{
    let mut results = Vec::new();
    let mut current = seed;
    while condition(&current) {
        let next = step(&current);
        results.push(current);
        current = next;
    }
    results
}

/// Returns the integers from `start` up to, but not including, `end`.
///
/// Empty when `end <= start`.
///
/// # Examples
///
/// ```rust
/// use tailspin::sequence::int_range_exclusive;
///
/// assert_eq!(int_range_exclusive(1, 5), vec![1, 2, 3, 4]);
/// assert!(int_range_exclusive(5, 5).is_empty());
/// assert!(int_range_exclusive(5, 1).is_empty());
/// ```
#[must_use]
pub fn int_range_exclusive(start: i32, end: i32) -> Vec<i32> {
    unfold(start, |i| i + 1, move |i| *i < end)
}

/// Returns the integers from `start` up to and including `end`.
///
/// Empty when `end < start`; a single element when `end == start`.
///
/// # Examples
///
/// ```rust
/// use tailspin::sequence::int_range_inclusive;
///
/// assert_eq!(int_range_inclusive(1, 5), vec![1, 2, 3, 4, 5]);
/// assert_eq!(int_range_inclusive(5, 5), vec![5]);
/// assert!(int_range_inclusive(5, 1).is_empty());
/// ```
#[must_use]
pub fn int_range_inclusive(start: i32, end: i32) -> Vec<i32> {
    unfold(start, |i| i + 1, move |i| *i <= end)
}

/// `i64` counterpart of [`int_range_exclusive`].
#[must_use]
pub fn long_range_exclusive(start: i64, end: i64) -> Vec<i64> {
    unfold(start, |i| i + 1, move |i| *i < end)
}

/// `i64` counterpart of [`int_range_inclusive`].
#[must_use]
pub fn long_range_inclusive(start: i64, end: i64) -> Vec<i64> {
    unfold(start, |i| i + 1, move |i| *i <= end)
}
