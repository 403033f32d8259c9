//! Stack-safe recursion via trampolining.
//!
//! This module provides the `Trampoline<A>` type for expressing recursive
//! computations in a stack-safe manner. Instead of using the call stack,
//! recursive steps are represented as data that can be interpreted in a loop.
//!
//! # Motivation
//!
//! Rust does not guarantee tail call optimization (TCO). This means that
//! deeply recursive functions can overflow the stack. Trampolining converts
//! recursion into iteration, making it safe for arbitrary depths: a recursive
//! function is rewritten so that every call site returns either
//! [`Trampoline::done`] (the base case) or [`Trampoline::suspend`] wrapping
//! the next step (the inductive case), and an external loop drives the chain.
//!
//! # Examples
//!
//! ## Tail-recursive addition
//!
//! ```rust
//! use tailspin::control::Trampoline;
//!
//! fn add(x: u64, y: u64) -> Trampoline<u64> {
//!     if y == 0 {
//!         Trampoline::done(x)
//!     } else {
//!         Trampoline::suspend(move || add(x + 1, y - 1))
//!     }
//! }
//!
//! // One heap node per step, constant native stack.
//! assert_eq!(add(3, 100_000).run(), 100_003);
//! ```
//!
//! ## Mutual Recursion
//!
//! ```rust
//! use tailspin::control::Trampoline;
//!
//! fn is_even(n: u64) -> Trampoline<bool> {
//!     if n == 0 {
//!         Trampoline::done(true)
//!     } else {
//!         Trampoline::suspend(move || is_odd(n - 1))
//!     }
//! }
//!
//! fn is_odd(n: u64) -> Trampoline<bool> {
//!     if n == 0 {
//!         Trampoline::done(false)
//!     } else {
//!         Trampoline::suspend(move || is_even(n - 1))
//!     }
//! }
//!
//! assert!(is_even(1000).run());
//! assert!(!is_odd(1000).run());
//! ```

/// A data structure for stack-safe recursion.
///
/// `Trampoline<A>` represents a potentially recursive computation that
/// produces a value of type `A`. It has exactly two states:
///
/// 1. [`Done`](Self::Done) - the computation has finished with a value
/// 2. [`Suspend`](Self::Suspend) - the computation needs another step
///
/// A suspended step holds a boxed thunk that produces the next state when
/// invoked. The thunk is never invoked at construction time; laziness is
/// what keeps the native call stack from growing. [`run`](Self::run) drives
/// the chain iteratively, so evaluation uses constant stack depth no matter
/// how many steps the chain contains.
///
/// # Type Parameters
///
/// * `A` - The type of the final result. Must be `'static` for the
///   combinator methods due to the internal use of boxed closures.
///
/// # Laws
///
/// The combinators satisfy the usual functor and monad laws up to
/// evaluation:
///
/// - **Left Identity**: `Trampoline::done(a).flat_map(f).run() == f(a).run()`
/// - **Right Identity**: `m.flat_map(Trampoline::done).run() == m.run()`
/// - **Associativity**: `m.flat_map(f).flat_map(g).run() == m.flat_map(|x| f(x).flat_map(g)).run()`
///
/// # Examples
///
/// ```rust
/// use tailspin::control::Trampoline;
///
/// // Terminal computation
/// let result = Trampoline::done(42).run();
/// assert_eq!(result, 42);
///
/// // Suspended computation
/// let result = Trampoline::suspend(|| Trampoline::done(42)).run();
/// assert_eq!(result, 42);
/// ```
pub enum Trampoline<A> {
    /// The computation has completed with value `A`.
    Done(A),
    /// The computation is suspended and needs another step.
    ///
    /// The boxed thunk returns the next state of the trampoline.
    Suspend(Box<dyn FnOnce() -> Trampoline<A> + 'static>),
}

impl<A> Trampoline<A> {
    /// Creates a completed trampoline holding the final value.
    ///
    /// # Arguments
    ///
    /// * `value` - The final result of the computation
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tailspin::control::Trampoline;
    ///
    /// let trampoline = Trampoline::done(42);
    /// assert_eq!(trampoline.run(), 42);
    /// ```
    #[inline]
    pub const fn done(value: A) -> Self {
        Self::Done(value)
    }

    /// Creates a suspended trampoline that will continue with the given thunk.
    ///
    /// The thunk is not evaluated until the chain is driven by
    /// [`run`](Self::run) or stepped with [`resume`](Self::resume).
    ///
    /// # Arguments
    ///
    /// * `thunk` - A function that produces the next trampoline state
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tailspin::control::Trampoline;
    ///
    /// let trampoline = Trampoline::suspend(|| Trampoline::done(42));
    /// assert_eq!(trampoline.run(), 42);
    /// ```
    #[inline]
    pub fn suspend<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        Self::Suspend(Box::new(thunk))
    }

    /// Alias for `done`. Lifts a value into the trampoline context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tailspin::control::Trampoline;
    ///
    /// let trampoline = Trampoline::pure(42);
    /// assert_eq!(trampoline.run(), 42);
    /// ```
    #[inline]
    pub const fn pure(value: A) -> Self {
        Self::done(value)
    }

    /// Returns `true` if the computation has completed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tailspin::control::Trampoline;
    ///
    /// assert!(Trampoline::done(42).is_done());
    /// assert!(!Trampoline::suspend(|| Trampoline::done(42)).is_done());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Returns `true` if the computation still has steps to perform.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tailspin::control::Trampoline;
    ///
    /// assert!(Trampoline::suspend(|| Trampoline::done(42)).is_suspended());
    /// assert!(!Trampoline::done(42).is_suspended());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_suspended(&self) -> bool {
        matches!(self, Self::Suspend(_))
    }

    /// Performs one step of the computation, returning the next state.
    ///
    /// Valid only on suspended trampolines. The returned state is itself
    /// either `Done` or `Suspend`; callers driving a chain by hand should
    /// loop while [`is_suspended`](Self::is_suspended) holds.
    ///
    /// # Panics
    ///
    /// Panics if called on a `Done` value. A completed computation has no
    /// next step; resuming one is a defect in how the recursion was
    /// structured, not a recoverable condition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tailspin::control::Trampoline;
    ///
    /// let trampoline = Trampoline::suspend(|| Trampoline::done(42));
    /// let next = trampoline.resume();
    /// assert!(next.is_done());
    /// assert_eq!(next.run(), 42);
    /// ```
    ///
    /// ```rust,should_panic
    /// use tailspin::control::Trampoline;
    ///
    /// // Panics: a terminal state cannot be resumed.
    /// Trampoline::done(42).resume();
    /// ```
    #[must_use]
    pub fn resume(self) -> Self {
        match self {
            Self::Done(_) => panic!("called `Trampoline::resume()` on a `Done` value"),
            Self::Suspend(thunk) => thunk(),
        }
    }

    /// Runs the trampoline to completion and returns the final value.
    ///
    /// Iteratively evaluates steps until a `Done` state is reached. The
    /// evaluation uses constant native stack space: each step trades a
    /// would-be stack frame for a heap-allocated thunk, and superseded
    /// states are dropped as the loop advances.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tailspin::control::Trampoline;
    ///
    /// fn count_down(n: u64) -> Trampoline<u64> {
    ///     if n == 0 {
    ///         Trampoline::done(0)
    ///     } else {
    ///         Trampoline::suspend(move || count_down(n - 1))
    ///     }
    /// }
    ///
    /// // This would overflow the stack with regular recursion
    /// let result = count_down(1_000_000).run();
    /// assert_eq!(result, 0);
    /// ```
    pub fn run(self) -> A {
        let mut current = self;

        loop {
            match current {
                Self::Done(value) => return value,
                Self::Suspend(thunk) => {
                    current = thunk();
                }
            }
        }
    }
}

impl<A: 'static> Trampoline<A> {
    /// Applies a function to the result of the trampoline.
    ///
    /// The function travels along the chain: it re-attaches itself to each
    /// successive state and fires once the underlying computation completes.
    /// A fixed number of `map` applications therefore adds only a constant
    /// amount of work per step.
    ///
    /// # Arguments
    ///
    /// * `function` - A function to apply to the final value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tailspin::control::Trampoline;
    ///
    /// let trampoline = Trampoline::done(21);
    /// let doubled = trampoline.map(|x| x * 2);
    /// assert_eq!(doubled.run(), 42);
    /// ```
    pub fn map<B, F>(self, function: F) -> Trampoline<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        match self {
            Self::Done(value) => Trampoline::done(function(value)),
            Self::Suspend(thunk) => Trampoline::suspend(move || thunk().map(function)),
        }
    }

    /// Applies a function that returns a trampoline to the result.
    ///
    /// This is the monadic bind operation. Like [`map`](Self::map), the
    /// continuation travels along the chain and is deferred until the
    /// underlying computation completes; it is never invoked at composition
    /// time.
    ///
    /// Note: recursion that wraps a fresh `flat_map` around every level
    /// accumulates one pending continuation per level, so such chains cost
    /// more than plain `suspend` chains and should be kept shallow.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the result and returns a new trampoline
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tailspin::control::Trampoline;
    ///
    /// let trampoline = Trampoline::done(21);
    /// let result = trampoline.flat_map(|x| Trampoline::done(x * 2));
    /// assert_eq!(result.run(), 42);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Trampoline<B>
    where
        F: FnOnce(A) -> Trampoline<B> + 'static,
        B: 'static,
    {
        match self {
            Self::Done(value) => Trampoline::suspend(move || function(value)),
            Self::Suspend(thunk) => Trampoline::suspend(move || thunk().flat_map(function)),
        }
    }

    /// Alias for `flat_map`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tailspin::control::Trampoline;
    ///
    /// let trampoline = Trampoline::done(21);
    /// let result = trampoline.and_then(|x| Trampoline::done(x * 2));
    /// assert_eq!(result.run(), 42);
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Trampoline<B>
    where
        F: FnOnce(A) -> Trampoline<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two trampolines, discarding the result of the first.
    ///
    /// # Arguments
    ///
    /// * `next` - The trampoline to execute after this one
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tailspin::control::Trampoline;
    ///
    /// let first = Trampoline::done("ignored");
    /// let second = Trampoline::done(42);
    /// let result = first.then(second);
    /// assert_eq!(result.run(), 42);
    /// ```
    #[inline]
    pub fn then<B: 'static>(self, next: Trampoline<B>) -> Trampoline<B> {
        self.flat_map(move |_| next)
    }
}

impl<A: std::fmt::Debug> std::fmt::Debug for Trampoline<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Done(value) => formatter.debug_tuple("Done").field(value).finish(),
            Self::Suspend(_) => formatter.debug_tuple("Suspend").field(&"<thunk>").finish(),
        }
    }
}
