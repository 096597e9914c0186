//! Core predicate trait and logical combinators
//!
//! Flag predicates (and plain closures) compose through [`PredicateExt`].
//! Lists of flags are handled by the flag predicates themselves, so only the
//! binary forms live here.

/// A reusable yes/no question about values of type `T`.
///
/// # Example
///
/// ```rust
/// use flagwater::predicate::*;
///
/// let writable = flag_set(0b0010u8).and(flag_unset(0b1000));
/// assert!(writable.check(&0b0011));
/// assert!(!writable.check(&0b1010));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Method chaining for combining predicates.
///
/// Every method returns a concrete type, so composed predicates cost no
/// allocation.
///
/// # Example
///
/// ```rust
/// use flagwater::predicate::*;
///
/// // exactly one of the two bits
/// let either = any_set([0b01u8, 0b10]).and(all_set([0b01, 0b10]).not());
/// assert!(either.check(&0b01));
/// assert!(either.check(&0b10));
/// assert!(!either.check(&0b11));
/// assert!(!either.check(&0b00));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// True only when both predicates are true.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// True when either predicate is true.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// True when this predicate is false.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{all_set, any_set, flag_set, flag_unset};

    const READ: u8 = 0b0001;
    const WRITE: u8 = 0b0010;
    const EXEC: u8 = 0b0100;

    #[test]
    fn test_and() {
        let p = flag_set(READ).and(flag_set(WRITE));
        assert!(p.check(&(READ | WRITE)));
        assert!(!p.check(&READ));
    }

    #[test]
    fn test_or() {
        let p = flag_set(WRITE).or(flag_set(EXEC));
        assert!(p.check(&WRITE));
        assert!(p.check(&EXEC));
        assert!(!p.check(&READ));
    }

    #[test]
    fn test_not() {
        let p = flag_set(EXEC).not();
        assert!(p.check(&READ));
        assert!(!p.check(&EXEC));
    }

    #[test]
    fn test_nested_chain() {
        // (read and write) or exec, but never all three
        let p = all_set([READ, WRITE])
            .or(flag_set(EXEC))
            .and(all_set([READ, WRITE, EXEC]).not());
        assert!(p.check(&(READ | WRITE)));
        assert!(p.check(&EXEC));
        assert!(!p.check(&(READ | WRITE | EXEC)));
        assert!(!p.check(&READ));
    }

    #[test]
    fn test_closure_as_predicate() {
        let even_bits = |state: &u8| state.count_ones() % 2 == 0;
        assert!(even_bits.check(&0b0011));

        let p = even_bits.and(flag_unset(EXEC)).and(any_set([READ, WRITE]));
        assert!(p.check(&(READ | WRITE)));
        assert!(!p.check(&(READ | EXEC)));
    }
}
