//! Positional message templates
//!
//! A tiny formatter for log and error messages whose template is data rather
//! than a string literal, so `format!` cannot be used.
//!
//! - `%` is replaced by the next argument.
//! - `%{label}` is replaced by the next argument; the label only documents the
//!   slot and is not printed.
//! - `\x` prints `x` literally, so `\%` is a literal percent sign.
//! - Once the arguments run out, any further `%` is printed as-is.
//!
//! # Example
//!
//! ```rust
//! use flagwater::format::format;
//!
//! let text = format("% of % flags set (%{ratio}\\%)", &[&3, &4, &75]);
//! assert_eq!(text, "3 of 4 flags set (75%)");
//! ```

use std::fmt::{Display, Write};

/// Substitute `args` into `template`.
///
/// Never fails: extra arguments are ignored and missing ones leave their `%`
/// in the output.
///
/// # Example
///
/// ```rust
/// use flagwater::format::format;
///
/// let line = format("state=%{state} mask=%", &[&"0b0110", &"0b0010"]);
/// assert_eq!(line, "state=0b0110 mask=0b0010");
/// assert_eq!(format("% and %", &[&1]), "1 and %");
/// assert_eq!(format("", &[&1]), "");
/// ```
pub fn format(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;

    while let Some(pos) = rest.find(['%', '\\']) {
        out.push_str(&rest[..pos]);
        let marker = &rest[pos..=pos];
        rest = &rest[pos + 1..];

        if marker == "\\" {
            match rest.chars().next() {
                Some(escaped) => {
                    out.push(escaped);
                    rest = &rest[escaped.len_utf8()..];
                }
                None => out.push('\\'),
            }
            continue;
        }

        match args.next() {
            Some(arg) => {
                if let Some(group) = rest.strip_prefix('{') {
                    if let Some(end) = group.find('}') {
                        rest = &group[end + 1..];
                    }
                }
                // writing into a String cannot fail
                let _ = write!(out, "{arg}");
            }
            None => out.push('%'),
        }
    }

    out.push_str(rest);
    out
}

/// Build a message from a template and arguments.
///
/// Expands to [`format::format`](crate::format::format) with the arguments
/// borrowed as `&dyn Display`.
///
/// # Example
///
/// ```rust
/// use flagwater::template;
///
/// let missing = 0b0100u8;
/// assert_eq!(template!("missing flag %", missing), "missing flag 4");
/// assert_eq!(template!("no placeholders"), "no placeholders");
/// ```
#[macro_export]
macro_rules! template {
    ($template:expr $(,)?) => {
        $crate::format::format($template, &[])
    };
    ($template:expr, $($arg:expr),+ $(,)?) => {
        $crate::format::format(
            $template,
            &[$(&$arg as &dyn ::std::fmt::Display),+],
        )
    };
}
