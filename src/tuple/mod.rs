//! Immutable tuple containers.
//!
//! This module provides [`Pair`] and [`Triple`], small named product types
//! for carrying two or three values together. Unlike the anonymous `(A, B)`
//! tuples of the standard library, these containers have named components
//! and component-wise mapping operations.
//!
//! Both types are plain immutable values: constructed once, never mutated,
//! and freely cloned, compared, and hashed when their components allow it.
//!
//! # Examples
//!
//! ```rust
//! use tailspin::tuple::Pair;
//!
//! let pair = Pair::new("answer", 42);
//! assert_eq!(pair.first, "answer");
//! assert_eq!(pair.second, 42);
//!
//! let doubled = pair.map_second(|n| n * 2);
//! assert_eq!(doubled.second, 84);
//! ```

mod pair;
mod triple;

pub use pair::Pair;
pub use triple::Triple;
