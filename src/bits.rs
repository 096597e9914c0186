//! The capability every flag state type needs
//!
//! Flag queries only ever need two things from a state type: a bitwise AND and
//! a way to ask whether the result is zero. [`BitTestable`] captures exactly
//! that, and a blanket impl provides it for anything with `&`, `==` and a
//! `Default` zero.
//!
//! # Example
//!
//! ```rust
//! use flagwater::BitTestable;
//!
//! assert!(!0b0110u8.and(0b0010).is_zero());
//! assert!(0b0110u8.and(0b1000).is_zero());
//! ```

use std::ops::BitAnd;

/// A value whose bits can be intersected and tested for zero.
///
/// Implemented for every `T: Copy + BitAnd<Output = T> + PartialEq + Default`,
/// where `T::default()` is taken as the zero value. This covers all primitive
/// integers, `bool`, [`std::num::Wrapping`], and flag newtypes that derive the
/// same traits.
///
/// # Example
///
/// ```rust
/// use flagwater::BitTestable;
/// use std::ops::BitAnd;
///
/// #[derive(Clone, Copy, PartialEq, Default, Debug)]
/// struct Perms(u16);
///
/// impl BitAnd for Perms {
///     type Output = Self;
///     fn bitand(self, rhs: Self) -> Self {
///         Perms(self.0 & rhs.0)
///     }
/// }
///
/// assert!(!Perms(0b11).and(Perms(0b01)).is_zero());
/// assert!(Perms(0b10).and(Perms(0b01)).is_zero());
/// ```
pub trait BitTestable: Copy {
    /// Bitwise AND of `self` and `other`.
    fn and(self, other: Self) -> Self;

    /// True when no bit is set.
    fn is_zero(self) -> bool;
}

impl<T> BitTestable for T
where
    T: Copy + BitAnd<Output = T> + PartialEq + Default,
{
    #[inline]
    fn and(self, other: Self) -> Self {
        self & other
    }

    #[inline]
    fn is_zero(self) -> bool {
        self == T::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::Wrapping;

    #[test]
    fn test_unsigned_integers() {
        assert_eq!(0b1100u8.and(0b0110), 0b0100);
        assert!(0u32.is_zero());
        assert!(!u64::MAX.is_zero());
        assert!(0b1000u128.and(0b0111).is_zero());
    }

    #[test]
    fn test_signed_integers() {
        // -1 has every bit set
        assert_eq!((-1i32).and(0b1010), 0b1010);
        assert!(i16::MIN.and(i16::MAX).is_zero());
    }

    #[test]
    fn test_bool_is_a_one_bit_state() {
        assert!(true.and(true));
        assert!(true.and(false).is_zero());
        assert!(false.is_zero());
    }

    #[test]
    fn test_wrapping() {
        let state = Wrapping(0b0101u8);
        assert!(!state.and(Wrapping(0b0001)).is_zero());
        assert!(state.and(Wrapping(0b0010)).is_zero());
    }
}
