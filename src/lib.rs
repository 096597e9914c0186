//! # Flagwater
//!
//! Composable queries over bit-flag states.
//!
//! ## Philosophy
//!
//! A state is a bitmask; a question about it is a pure function. **Flagwater**
//! keeps those questions small and total:
//! - **Predicate functions** answer one question about one state
//! - **`FlagQuery`** chains questions into one verdict without temporaries
//! - **Predicate values** store a question so it can be reused and composed
//!
//! ## Quick Example
//!
//! ```rust
//! use flagwater::flags::{has_all, has_none, query};
//!
//! const READ: u8 = 0b0001;
//! const WRITE: u8 = 0b0010;
//! const EXEC: u8 = 0b0100;
//! const SETUID: u8 = 0b1000;
//!
//! let perms = READ | WRITE;
//!
//! // one question at a time
//! assert!(has_all(perms, [READ, WRITE]));
//! assert!(has_none(perms, [EXEC, SETUID]));
//!
//! // or as a single chained verdict
//! let ok = query(perms)
//!     .has_all([READ, WRITE])
//!     .has_none([EXEC, SETUID])
//!     .is_good();
//! assert!(ok);
//!
//! // and into a Result when the caller wants an error
//! let checked: Result<u8, &str> = query(perms).has(EXEC).ensure("not executable");
//! assert_eq!(checked, Err("not executable"));
//! ```
//!
//! Alongside the flag algebra the crate ships the small utilities that usually
//! travel with it: positional message templates ([`mod@format`]), a
//! per-severity [`log`] facade and a wrap-around N-dimensional [`torus`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod bits;
pub mod flags;
pub mod format;
pub mod log;
pub mod nonempty;
pub mod predicate;
pub mod torus;

// Re-exports
pub use bits::BitTestable;
pub use flags::{query, FlagList, FlagQuery};
pub use nonempty::NonEmptyVec;
pub use predicate::{Predicate, PredicateExt};
pub use torus::{Torus, TorusError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bits::BitTestable;
    pub use crate::flags::{
        has, has_all, has_any, has_any_but_not_all, has_none, has_not, has_not_all, query,
        FlagList, FlagQuery,
    };
    pub use crate::nonempty::NonEmptyVec;
    pub use crate::predicate::{Predicate, PredicateExt};
}
