//! Bit-flag queries
//!
//! Two layers, usable on their own:
//!
//! - free predicate functions ([`has`], [`has_all`], [`has_none`], ...) answer
//!   one question about one state;
//! - [`FlagQuery`] chains those questions into a single verdict.
//!
//! States and flags share one type, anything implementing
//! [`BitTestable`](crate::BitTestable). Lists of flags are non-empty by type:
//! arrays are checked at compile time, and runtime lists go through
//! [`NonEmptyVec`](crate::NonEmptyVec).
//!
//! # Example
//!
//! ```rust
//! use flagwater::flags::*;
//!
//! const A: u8 = 0b0010;
//! const B: u8 = 0b0100;
//! const C: u8 = 0b1000;
//! let state = 0b0110u8;
//!
//! assert!(has_all(state, [A, B]));
//! assert!(has_any(state, [A, C]));
//! assert!(has_none(state, [C]));
//! assert!(has_any_but_not_all(state, [A, B, C]));
//!
//! assert!(query(state).has_all([A, B]).has_not(C).is_good());
//! ```

mod check;
mod list;
mod query;

pub use check::{has, has_all, has_any, has_any_but_not_all, has_none, has_not, has_not_all};
pub use list::FlagList;
pub use query::{query, FlagQuery};
