//! A three-component immutable container.

use std::fmt;

/// Holds three values of possibly different types.
///
/// The three-component sibling of [`Pair`](crate::tuple::Pair). Like `Pair`,
/// construction is total and the value is immutable once built.
///
/// # Examples
///
/// ```rust
/// use tailspin::tuple::Triple;
///
/// let triple = Triple::new(1, "one", 1.0);
/// assert_eq!(triple.second, "one");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Triple<A, B, C> {
    /// The first component.
    pub first: A,
    /// The second component.
    pub second: B,
    /// The third component.
    pub third: C,
}

impl<A, B, C> Triple<A, B, C> {
    /// Creates a triple from its three components.
    #[inline]
    pub const fn new(first: A, second: B, third: C) -> Self {
        Self {
            first,
            second,
            third,
        }
    }

    /// Applies a function to the first component.
    pub fn map_first<D, F>(self, function: F) -> Triple<D, B, C>
    where
        F: FnOnce(A) -> D,
    {
        Triple::new(function(self.first), self.second, self.third)
    }

    /// Applies a function to the second component.
    pub fn map_second<D, F>(self, function: F) -> Triple<A, D, C>
    where
        F: FnOnce(B) -> D,
    {
        Triple::new(self.first, function(self.second), self.third)
    }

    /// Applies a function to the third component.
    pub fn map_third<D, F>(self, function: F) -> Triple<A, B, D>
    where
        F: FnOnce(C) -> D,
    {
        Triple::new(self.first, self.second, function(self.third))
    }

    /// Converts the triple into a standard tuple.
    pub fn into_tuple(self) -> (A, B, C) {
        (self.first, self.second, self.third)
    }
}

impl<A, B, C> From<(A, B, C)> for Triple<A, B, C> {
    fn from((first, second, third): (A, B, C)) -> Self {
        Self::new(first, second, third)
    }
}

impl<A, B, C> From<Triple<A, B, C>> for (A, B, C) {
    fn from(triple: Triple<A, B, C>) -> Self {
        triple.into_tuple()
    }
}

impl<A: fmt::Display, B: fmt::Display, C: fmt::Display> fmt::Display for Triple<A, B, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "({}, {}, {})",
            self.first, self.second, self.third
        )
    }
}

static_assertions::assert_impl_all!(Triple<i32, String, bool>: Clone, Send, Sync);
static_assertions::assert_impl_all!(Triple<u8, bool, char>: Copy);
