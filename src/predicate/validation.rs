//! `Result` integration for predicates

use super::combinators::Predicate;

/// Validate a value using a predicate.
///
/// Returns `Ok(value)` when the predicate holds, otherwise `Err(error)`.
///
/// # Example
///
/// ```rust
/// use flagwater::predicate::*;
///
/// const ONLINE: u16 = 0x0001;
/// const LOCKED: u16 = 0x0100;
///
/// let usable = flag_set(ONLINE).and(flag_unset(LOCKED));
/// assert_eq!(validate(ONLINE, &usable, "device unusable"), Ok(ONLINE));
/// assert_eq!(validate(ONLINE | LOCKED, &usable, "device unusable"), Err("device unusable"));
/// ```
pub fn validate<T, E, P>(value: T, predicate: &P, error: E) -> Result<T, E>
where
    P: Predicate<T>,
{
    if predicate.check(&value) {
        Ok(value)
    } else {
        Err(error)
    }
}

/// Validate a value with an error factory.
///
/// Like [`validate`], but the error is only built on failure and may
/// describe the rejected value.
///
/// # Example
///
/// ```rust
/// use flagwater::predicate::*;
///
/// let result = validate_with(0b0100u8, &flag_set(0b0001), |state| {
///     format!("state {state:#b} is missing bit 0")
/// });
/// assert_eq!(result, Err("state 0b100 is missing bit 0".to_string()));
/// ```
pub fn validate_with<T, E, P, F>(value: T, predicate: &P, error_fn: F) -> Result<T, E>
where
    P: Predicate<T>,
    F: FnOnce(&T) -> E,
{
    if predicate.check(&value) {
        Ok(value)
    } else {
        Err(error_fn(&value))
    }
}
