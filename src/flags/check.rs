//! Predicate functions over raw state values
//!
//! Every function here is a pure test of which flags are set in a state.
//! [`has`] is the primitive; the list forms fold it over a [`FlagList`].

use super::list::FlagList;
use crate::bits::BitTestable;

/// True when `flag` shares at least one bit with `state`.
///
/// # Example
///
/// ```rust
/// use flagwater::flags::has;
///
/// assert!(has(0b0110u8, 0b0010));
/// assert!(!has(0b0110u8, 0b1000));
/// // a multi-bit flag only needs one bit in common
/// assert!(has(0b0110u8, 0b1100));
/// ```
#[inline]
pub fn has<S: BitTestable>(state: S, flag: S) -> bool {
    !state.and(flag).is_zero()
}

/// True when `flag` shares no bit with `state`.
#[inline]
pub fn has_not<S: BitTestable>(state: S, flag: S) -> bool {
    !has(state, flag)
}

/// True when every flag is set.
///
/// # Example
///
/// ```rust
/// use flagwater::flags::has_all;
///
/// assert!(has_all(0b0110u8, [0b0010, 0b0100]));
/// assert!(!has_all(0b0110u8, [0b0010, 0b1000]));
/// ```
#[inline]
pub fn has_all<S, L>(state: S, flags: L) -> bool
where
    S: BitTestable,
    L: FlagList<S>,
{
    flags.into_flags().all(|flag| has(state, flag))
}

/// True when at least one flag is set.
///
/// # Example
///
/// ```rust
/// use flagwater::flags::has_any;
///
/// assert!(has_any(0b0110u8, [0b0010, 0b1000]));
/// assert!(!has_any(0b0110u8, [0b0001, 0b1000]));
/// ```
#[inline]
pub fn has_any<S, L>(state: S, flags: L) -> bool
where
    S: BitTestable,
    L: FlagList<S>,
{
    flags.into_flags().any(|flag| has(state, flag))
}

/// True when no flag is set.
///
/// Stops at the first flag found set.
///
/// # Example
///
/// ```rust
/// use flagwater::flags::has_none;
///
/// assert!(has_none(0b0110u8, [0b0001, 0b1000]));
/// assert!(!has_none(0b0110u8, [0b0001, 0b0100]));
/// ```
#[inline]
pub fn has_none<S, L>(state: S, flags: L) -> bool
where
    S: BitTestable,
    L: FlagList<S>,
{
    flags.into_flags().all(|flag| has_not(state, flag))
}

/// True when at least one flag is not set.
///
/// # Example
///
/// ```rust
/// use flagwater::flags::has_not_all;
///
/// assert!(has_not_all(0b0110u8, [0b0010, 0b1000]));
/// assert!(!has_not_all(0b0110u8, [0b0010, 0b0100]));
/// ```
#[inline]
pub fn has_not_all<S, L>(state: S, flags: L) -> bool
where
    S: BitTestable,
    L: FlagList<S>,
{
    flags.into_flags().any(|flag| has_not(state, flag))
}

/// True when some flags are set and some are not.
///
/// A single flag is never "some but not all" of itself, so a one-flag list
/// always yields `false`, as does any list whose flags all agree.
///
/// # Example
///
/// ```rust
/// use flagwater::flags::has_any_but_not_all;
///
/// assert!(has_any_but_not_all(0b0110u8, [0b0010, 0b0100, 0b1000]));
/// assert!(!has_any_but_not_all(0b0110u8, [0b0010, 0b0100]));
/// assert!(!has_any_but_not_all(0b0110u8, [0b0010]));
/// ```
pub fn has_any_but_not_all<S, L>(state: S, flags: L) -> bool
where
    S: BitTestable,
    L: FlagList<S>,
{
    let mut seen_set = false;
    let mut seen_unset = false;

    for flag in flags.into_flags() {
        if has(state, flag) {
            seen_set = true;
        } else {
            seen_unset = true;
        }

        if seen_set && seen_unset {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nonempty::NonEmptyVec;
    use std::cell::Cell;
    use std::ops::BitAnd;

    const A: u8 = 0b0010;
    const B: u8 = 0b0100;
    const C: u8 = 0b1000;
    const STATE: u8 = 0b0110;

    #[test]
    fn test_has_and_has_not() {
        assert!(has(STATE, A));
        assert!(!has(STATE, C));
        assert!(has_not(STATE, C));
        assert!(!has_not(STATE, B));
    }

    #[test]
    fn test_zero_flag_is_never_set() {
        assert!(!has(u8::MAX, 0));
        assert!(has_not(u8::MAX, 0));
    }

    #[test]
    fn test_reference_scenario() {
        assert!(has_all(STATE, [A, B]));
        assert!(has_any(STATE, [A, C]));
        assert!(has_none(STATE, [C]));
        assert!(has_any_but_not_all(STATE, [A, B, C]));
    }

    #[test]
    fn test_all_flags_set() {
        assert!(has_all(STATE, [A, B]));
        assert!(has_any(STATE, [A, B]));
        assert!(!has_none(STATE, [A, B]));
        assert!(!has_not_all(STATE, [A, B]));
        assert!(!has_any_but_not_all(STATE, [A, B]));
    }

    #[test]
    fn test_no_flag_set() {
        let state = 0b0001u8;
        assert!(!has_all(state, [A, B]));
        assert!(!has_any(state, [A, B]));
        assert!(has_none(state, [A, B]));
        assert!(has_not_all(state, [A, B]));
        assert!(!has_any_but_not_all(state, [A, B]));
    }

    #[test]
    fn test_mixed_flags() {
        let state = A;
        assert!(!has_all(state, [A, B]));
        assert!(has_any(state, [A, B]));
        assert!(has_not_all(state, [A, B]));
        assert!(!has_none(state, [A, B]));
        assert!(has_any_but_not_all(state, [A, B]));
        // order does not matter
        assert!(has_any_but_not_all(state, [B, A]));
    }

    #[test]
    fn test_single_flag_lists() {
        assert!(has_all(STATE, [A]));
        assert!(!has_all(STATE, [C]));
        assert!(has_any(STATE, [A]));
        assert!(!has_any(STATE, [C]));
        assert!(has_not_all(STATE, [C]));
        assert!(!has_any_but_not_all(STATE, [A]));
        assert!(!has_any_but_not_all(STATE, [C]));
    }

    #[test]
    fn test_duplicates_are_idempotent() {
        assert_eq!(has_all(STATE, [A, A]), has_all(STATE, [A]));
        assert_eq!(has_all(STATE, [C, C]), has_all(STATE, [C]));
        assert!(!has_any_but_not_all(STATE, [A, A]));
    }

    #[test]
    fn test_runtime_sized_lists() {
        let flags = NonEmptyVec::new(A, vec![B, C]);
        assert!(!has_all(STATE, &flags));
        assert!(has_any(STATE, &flags));
        assert!(has_any_but_not_all(STATE, &flags));
        assert!(has_not_all(STATE, flags));
    }

    thread_local! {
        static AND_CALLS: Cell<usize> = const { Cell::new(0) };
    }

    #[derive(Clone, Copy, PartialEq, Default, Debug)]
    struct Counted(u8);

    impl BitAnd for Counted {
        type Output = Self;

        fn bitand(self, rhs: Self) -> Self {
            AND_CALLS.with(|calls| calls.set(calls.get() + 1));
            Counted(self.0 & rhs.0)
        }
    }

    #[test]
    fn test_has_none_stops_at_first_set_flag() {
        AND_CALLS.with(|calls| calls.set(0));
        let state = Counted(STATE);

        assert!(!has_none(state, [Counted(C), Counted(A), Counted(B), Counted(C)]));
        assert_eq!(AND_CALLS.with(Cell::get), 2);
    }
}
