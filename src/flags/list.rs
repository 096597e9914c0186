//! Non-empty flag lists
//!
//! List-taking queries accept anything implementing [`FlagList`]. Arrays are
//! the common case; an empty array is rejected when the call is compiled.
//!
//! ```compile_fail
//! use flagwater::flags::has_all;
//!
//! let none: [u8; 0] = [];
//! has_all(0b0110u8, none);
//! ```

use crate::bits::BitTestable;
use crate::nonempty::NonEmptyVec;

/// An ordered sequence of at least one flag.
///
/// # Example
///
/// ```rust
/// use flagwater::flags::has_any;
/// use flagwater::NonEmptyVec;
///
/// // fixed list
/// assert!(has_any(0b0100u8, [0b0001, 0b0100]));
///
/// // list only known at runtime
/// let configured = NonEmptyVec::from_vec(vec![0b0001u8, 0b0100]).unwrap();
/// assert!(has_any(0b0100u8, &configured));
/// ```
pub trait FlagList<S: BitTestable> {
    /// Iterator over the flags, in order.
    type Flags: Iterator<Item = S>;

    /// Consume the list, yielding every flag.
    fn into_flags(self) -> Self::Flags;

    /// Consume the list into an owned, reusable [`NonEmptyVec`].
    fn into_nonempty(self) -> NonEmptyVec<S>;
}

impl<S: BitTestable, const N: usize> FlagList<S> for [S; N] {
    type Flags = std::array::IntoIter<S, N>;

    #[inline]
    fn into_flags(self) -> Self::Flags {
        const { assert!(N > 0, "a flag list needs at least one flag") };
        self.into_iter()
    }

    fn into_nonempty(self) -> NonEmptyVec<S> {
        const { assert!(N > 0, "a flag list needs at least one flag") };
        NonEmptyVec::new(self[0], self[1..].to_vec())
    }
}

impl<S: BitTestable> FlagList<S> for NonEmptyVec<S> {
    type Flags = <NonEmptyVec<S> as IntoIterator>::IntoIter;

    #[inline]
    fn into_flags(self) -> Self::Flags {
        self.into_iter()
    }

    fn into_nonempty(self) -> NonEmptyVec<S> {
        self
    }
}

impl<'a, S: BitTestable> FlagList<S> for &'a NonEmptyVec<S> {
    type Flags = std::iter::Copied<<&'a NonEmptyVec<S> as IntoIterator>::IntoIter>;

    #[inline]
    fn into_flags(self) -> Self::Flags {
        self.iter().copied()
    }

    fn into_nonempty(self) -> NonEmptyVec<S> {
        self.clone()
    }
}
