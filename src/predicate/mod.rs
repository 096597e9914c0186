//! Composable flag predicates
//!
//! The functions in [`crate::flags`] answer a question about one state. The
//! predicates here package the same questions as values that can be stored,
//! reused against many states, and combined with `and`, `or` and `not`.
//!
//! # Example
//!
//! ```rust
//! use flagwater::predicate::*;
//!
//! const READ: u8 = 0b0001;
//! const WRITE: u8 = 0b0010;
//! const EXEC: u8 = 0b0100;
//! const SETUID: u8 = 0b1000;
//!
//! // readable and writable, but never setuid
//! let safe_rw = all_set([READ, WRITE]).and(flag_unset(SETUID));
//!
//! assert!(safe_rw.check(&(READ | WRITE | EXEC)));
//! assert!(!safe_rw.check(&(READ | WRITE | SETUID)));
//! ```
//!
//! # Integration with `Result`
//!
//! ```rust
//! use flagwater::predicate::*;
//!
//! let result = validate(0b0011u8, &any_set([0b0001, 0b0100]), "no usable bit");
//! assert_eq!(result, Ok(0b0011));
//! ```

mod combinators;
mod flags;
mod validation;

pub use combinators::{And, Not, Or};
pub use combinators::{Predicate, PredicateExt};

pub use flags::{
    all_set, any_set, flag_set, flag_unset, none_set, not_all_set, some_but_not_all_set, AllSet,
    AnySet, FlagSet, FlagUnset, NoneSet, NotAllSet, SomeButNotAllSet,
};

pub use validation::{validate, validate_with};
