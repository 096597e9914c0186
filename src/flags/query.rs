//! Chainable flag queries
//!
//! [`FlagQuery`] pairs a state with a running verdict so compound conditions
//! read as one expression instead of a pile of intermediate booleans.

use super::check;
use super::list::FlagList;
use crate::bits::BitTestable;
use crate::predicate::Predicate;

/// An immutable state plus the conjunction of every check run against it.
///
/// Each method evaluates one predicate against the *original* state and
/// returns a new query whose verdict is `previous && result`. Once the
/// verdict is `false` it stays `false`, but later checks are still evaluated.
///
/// # Example
///
/// ```rust
/// use flagwater::flags::query;
///
/// const READ: u8 = 0b0001;
/// const WRITE: u8 = 0b0010;
/// const EXEC: u8 = 0b0100;
/// const SETUID: u8 = 0b1000;
///
/// let perms = READ | WRITE;
///
/// // "read and write, but neither exec nor setuid"
/// assert!(query(perms).has_all([READ, WRITE]).has_none([EXEC, SETUID]).is_good());
///
/// // one failing check sinks the whole chain
/// assert!(!query(perms).has(READ).has(EXEC).has(WRITE).is_good());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "a flag query only reports through is_good(), ensure() or a bool conversion"]
pub struct FlagQuery<S> {
    state: S,
    good: bool,
}

/// Start a query over `state`.
///
/// Shorthand for [`FlagQuery::new`].
#[inline]
pub fn query<S: BitTestable>(state: S) -> FlagQuery<S> {
    FlagQuery::new(state)
}

impl<S: BitTestable> FlagQuery<S> {
    /// Start a query over `state` with a passing verdict.
    #[inline]
    pub fn new(state: S) -> Self {
        Self { state, good: true }
    }

    /// The state being queried. Never changed by a check.
    #[inline]
    pub fn state(&self) -> S {
        self.state
    }

    /// The conjunction of every check run so far.
    #[inline]
    pub fn is_good(&self) -> bool {
        self.good
    }

    #[inline]
    fn fold(self, passed: bool) -> Self {
        Self {
            state: self.state,
            good: self.good && passed,
        }
    }

    /// Require `flag` to be set.
    #[inline]
    pub fn has(self, flag: S) -> Self {
        let passed = check::has(self.state, flag);
        self.fold(passed)
    }

    /// Require `flag` to be unset.
    #[inline]
    pub fn has_not(self, flag: S) -> Self {
        let passed = check::has_not(self.state, flag);
        self.fold(passed)
    }

    /// Require every flag to be set.
    #[inline]
    pub fn has_all<L: FlagList<S>>(self, flags: L) -> Self {
        let passed = check::has_all(self.state, flags);
        self.fold(passed)
    }

    /// Require at least one flag to be set.
    #[inline]
    pub fn has_any<L: FlagList<S>>(self, flags: L) -> Self {
        let passed = check::has_any(self.state, flags);
        self.fold(passed)
    }

    /// Require at least one flag to be unset.
    #[inline]
    pub fn has_not_all<L: FlagList<S>>(self, flags: L) -> Self {
        let passed = check::has_not_all(self.state, flags);
        self.fold(passed)
    }

    /// Require some, but not all, of the flags to be set.
    #[inline]
    pub fn has_any_but_not_all<L: FlagList<S>>(self, flags: L) -> Self {
        let passed = check::has_any_but_not_all(self.state, flags);
        self.fold(passed)
    }

    /// Require none of the flags to be set.
    ///
    /// Every supplied flag is checked, the first one included.
    ///
    /// ```rust
    /// use flagwater::flags::query;
    ///
    /// assert!(!query(0b01u8).has_none([0b01, 0b10]).is_good());
    /// ```
    #[inline]
    pub fn has_none<L: FlagList<S>>(self, flags: L) -> Self {
        let passed = check::has_none(self.state, flags);
        self.fold(passed)
    }

    /// Fold an arbitrary predicate over the state into the verdict.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flagwater::flags::query;
    /// use flagwater::predicate::*;
    ///
    /// let admin = all_set([0b0001u8, 0b0010]).or(flag_set(0b1000));
    /// assert!(query(0b1000u8).check(&admin).has_not(0b0100).is_good());
    /// ```
    #[inline]
    pub fn check<P: Predicate<S>>(self, predicate: &P) -> Self {
        let passed = predicate.check(&self.state);
        self.fold(passed)
    }

    /// Turn the verdict into a `Result`, yielding the state on success.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flagwater::flags::query;
    ///
    /// let ok: Result<u8, &str> = query(0b11u8).has_all([0b01, 0b10]).ensure("missing bits");
    /// assert_eq!(ok, Ok(0b11));
    ///
    /// let err: Result<u8, &str> = query(0b01u8).has_all([0b01, 0b10]).ensure("missing bits");
    /// assert_eq!(err, Err("missing bits"));
    /// ```
    pub fn ensure<E>(self, error: E) -> Result<S, E> {
        if self.good {
            Ok(self.state)
        } else {
            Err(error)
        }
    }

    /// Like [`ensure`](Self::ensure), but builds the error from the state
    /// only when the query failed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flagwater::flags::query;
    ///
    /// let result = query(0b0100u8)
    ///     .has(0b0001)
    ///     .ensure_with(|state| format!("state {state:#06b} lacks bit 0"));
    /// assert_eq!(result, Err("state 0b0100 lacks bit 0".to_string()));
    /// ```
    pub fn ensure_with<E, F>(self, error_fn: F) -> Result<S, E>
    where
        F: FnOnce(S) -> E,
    {
        if self.good {
            Ok(self.state)
        } else {
            Err(error_fn(self.state))
        }
    }
}

impl<S: BitTestable> From<S> for FlagQuery<S> {
    fn from(state: S) -> Self {
        Self::new(state)
    }
}

impl<S> From<FlagQuery<S>> for bool {
    fn from(query: FlagQuery<S>) -> Self {
        query.good
    }
}

impl<S> std::ops::Not for FlagQuery<S> {
    type Output = bool;

    fn not(self) -> bool {
        !self.good
    }
}
