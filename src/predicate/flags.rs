//! Flag predicates
//!
//! Reusable counterparts of the [`crate::flags`] functions. Build one once,
//! then check it against any number of states or compose it with
//! [`PredicateExt`](super::PredicateExt).

use super::combinators::Predicate;
use crate::bits::BitTestable;
use crate::flags::{self, FlagList};
use crate::nonempty::NonEmptyVec;

/// Predicate: a single flag is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlagSet<S>(pub S);

impl<S: BitTestable + Send + Sync> Predicate<S> for FlagSet<S> {
    #[inline]
    fn check(&self, state: &S) -> bool {
        flags::has(*state, self.0)
    }
}

/// Create a predicate that checks one flag is set.
///
/// # Example
///
/// ```rust
/// use flagwater::predicate::*;
///
/// assert!(flag_set(0b0100u8).check(&0b0110));
/// assert!(!flag_set(0b1000u8).check(&0b0110));
/// ```
pub fn flag_set<S: BitTestable>(flag: S) -> FlagSet<S> {
    FlagSet(flag)
}

/// Predicate: a single flag is unset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlagUnset<S>(pub S);

impl<S: BitTestable + Send + Sync> Predicate<S> for FlagUnset<S> {
    #[inline]
    fn check(&self, state: &S) -> bool {
        flags::has_not(*state, self.0)
    }
}

/// Create a predicate that checks one flag is unset.
pub fn flag_unset<S: BitTestable>(flag: S) -> FlagUnset<S> {
    FlagUnset(flag)
}

macro_rules! list_predicate {
    ($(#[$doc:meta])* $name:ident, $ctor:ident, $check:path) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name<S>(NonEmptyVec<S>);

        impl<S: BitTestable> $name<S> {
            /// The flags this predicate tests, in order.
            pub fn flags(&self) -> &NonEmptyVec<S> {
                &self.0
            }
        }

        impl<S: BitTestable + Send + Sync> Predicate<S> for $name<S> {
            #[inline]
            fn check(&self, state: &S) -> bool {
                $check(*state, &self.0)
            }
        }

        #[doc = concat!("Create a [`", stringify!($name), "`] predicate.")]
        pub fn $ctor<S: BitTestable, L: FlagList<S>>(flags: L) -> $name<S> {
            $name(flags.into_nonempty())
        }
    };
}

list_predicate!(
    /// Predicate: every flag is set.
    ///
    /// ```rust
    /// use flagwater::predicate::*;
    ///
    /// let rw = all_set([0b01u8, 0b10]);
    /// assert!(rw.check(&0b11));
    /// assert!(!rw.check(&0b01));
    /// ```
    AllSet,
    all_set,
    flags::has_all
);

list_predicate!(
    /// Predicate: at least one flag is set.
    AnySet,
    any_set,
    flags::has_any
);

list_predicate!(
    /// Predicate: no flag is set.
    NoneSet,
    none_set,
    flags::has_none
);

list_predicate!(
    /// Predicate: at least one flag is unset.
    NotAllSet,
    not_all_set,
    flags::has_not_all
);

list_predicate!(
    /// Predicate: some flags are set and some are not.
    ///
    /// ```rust
    /// use flagwater::predicate::*;
    ///
    /// let partial = some_but_not_all_set([0b001u8, 0b010, 0b100]);
    /// assert!(partial.check(&0b011));
    /// assert!(!partial.check(&0b111));
    /// assert!(!partial.check(&0b000));
    /// ```
    SomeButNotAllSet,
    some_but_not_all_set,
    flags::has_any_but_not_all
);
