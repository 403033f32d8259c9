//! Control structures for stack-safe recursion.
//!
//! This module provides [`Trampoline`], a data structure that converts
//! recursive calls into an iterative loop over heap-allocated "next step"
//! values, bounding native stack usage regardless of logical recursion
//! depth.
//!
//! # Examples
//!
//! ```rust
//! use tailspin::control::Trampoline;
//!
//! fn add(x: u64, y: u64) -> u64 {
//!     add_helper(x, y).run()
//! }
//!
//! fn add_helper(x: u64, y: u64) -> Trampoline<u64> {
//!     if y == 0 {
//!         Trampoline::done(x)
//!     } else {
//!         Trampoline::suspend(move || add_helper(x + 1, y - 1))
//!     }
//! }
//!
//! assert_eq!(add(3, 1_000_000), 1_000_003);
//! ```

mod trampoline;

pub use trampoline::Trampoline;
