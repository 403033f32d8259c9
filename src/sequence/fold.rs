//! Iterative left and right folds.
//!
//! Both folds accumulate with a plain loop rather than native recursion, so
//! folding never grows the call stack with the input length. Neither fold
//! assumes the combining function is associative or commutative; element
//! order is significant and matches the input exactly.

/// Folds a sequence from its first element to its last.
///
/// Starting from `identity`, computes
/// `function(... function(function(identity, items[0]), items[1]) ..., items[n-1])`.
///
/// # Arguments
///
/// * `items` - The sequence to fold
/// * `identity` - The starting accumulator value
/// * `function` - Combines the accumulator with the next element
///
/// # Examples
///
/// ```rust
/// use tailspin::sequence::fold_left;
///
/// let items = vec![1, 2, 3, 4, 5];
/// let rendered = fold_left(&items, String::from("0"), |accumulator, item| {
///     format!("({accumulator} + {item})")
/// });
/// assert_eq!(rendered, "(((((0 + 1) + 2) + 3) + 4) + 5)");
/// ```
pub fn fold_left<T, U, F>(items: &[T], identity: U, mut function: F) -> U
where
    F: FnMut(U, &T) -> U,
{
    let mut result = identity;
    for item in items {
        result = function(result, item);
    }
    result
}

/// Folds a sequence from its last element back to its first.
///
/// Starting from `identity`, computes
/// `function(items[0], ... function(items[n-2], function(items[n-1], identity)) ...)`.
///
/// # Arguments
///
/// * `items` - The sequence to fold
/// * `identity` - The starting accumulator value
/// * `function` - Combines the next element with the accumulator
///
/// # Examples
///
/// ```rust
/// use tailspin::sequence::fold_right;
///
/// let items = vec![1, 2, 3, 4, 5];
/// let rendered = fold_right(&items, String::from("0"), |item, accumulator| {
///     format!("({item} + {accumulator})")
/// });
/// assert_eq!(rendered, "(1 + (2 + (3 + (4 + (5 + 0)))))");
/// ```
pub fn fold_right<T, U, F>(items: &[T], identity: U, mut function: F) -> U
where
    F: FnMut(&T, U) -> U,
{
    let mut result = identity;
    for item in items.iter().rev() {
        result = function(item, result);
    }
    result
}
