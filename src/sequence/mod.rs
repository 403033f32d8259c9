//! Sequence generation and folding.
//!
//! This module provides the immutable sequence operations of the library:
//!
//! - [`unfold`]: generate a sequence from a seed, a step function, and a
//!   continuation predicate
//! - [`int_range_exclusive`] / [`int_range_inclusive`] (and the `i64`
//!   counterparts): range builders derived from `unfold`
//! - [`fold_left`] / [`fold_right`]: iterative order-sensitive reduction
//! - [`map`], [`head`], [`tail`], [`append`], [`prepend`], [`reverse`],
//!   [`for_each`]: immutable list helpers
//!
//! Every function borrows its input and produces a fresh `Vec`; inputs are
//! never mutated. All loops are iterative, so no operation in this module
//! grows the native stack with its input size.
//!
//! # Examples
//!
//! ```rust
//! use tailspin::sequence::{fold_left, unfold};
//!
//! let halvings = unfold(64, |n| n / 2, |n| *n > 0);
//! assert_eq!(halvings, vec![64, 32, 16, 8, 4, 2, 1]);
//!
//! let sum = fold_left(&halvings, 0, |accumulator, n| accumulator + n);
//! assert_eq!(sum, 127);
//! ```

mod fold;
mod ops;
mod unfold;

pub use fold::{fold_left, fold_right};
pub use ops::{append, for_each, head, map, prepend, reverse, tail};
pub use unfold::{
    int_range_exclusive, int_range_inclusive, long_range_exclusive, long_range_inclusive, unfold,
};
