//! Per-severity logging facade
//!
//! Four channels (debug, info, warning, error), each with its own enable
//! switch and a prefix/suffix wrapped around every message. Switches are
//! process-wide and can be changed at runtime through [`configure`].
//!
//! With the `tracing` feature, messages are emitted as `tracing` events at
//! the matching level. Without it they are written to stderr.
//!
//! The `*_fmt` functions take a [`format`](crate::format::format) template and
//! only build the message when the channel is enabled.
//!
//! # Example
//!
//! ```rust
//! use flagwater::log;
//!
//! log::configure(|state| {
//!     state.debug.enabled = false;
//!     state.warning.prefix = "[flags] ".to_string();
//! });
//!
//! log::warning_fmt("state % lacks %", &[&"0b0110", &"0b1000"]);
//! assert!(!log::enabled(log::Level::Debug));
//! ```

use std::fmt;
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::format::format;

/// Message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    /// Diagnostic detail; only emitted in builds with `debug_assertions`.
    Debug,
    /// Normal operation.
    Info,
    /// Something unexpected that was handled.
    Warning,
    /// Something failed.
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARN",
            Level::Error => "ERROR",
        };
        f.pad(name)
    }
}

/// Settings for one severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    /// Whether messages on this channel are emitted at all.
    pub enabled: bool,
    /// Text placed before every message.
    pub prefix: String,
    /// Text placed after every message.
    pub suffix: String,
}

impl Channel {
    /// An enabled channel with no decoration.
    pub fn new() -> Self {
        Self {
            enabled: true,
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    /// Set the enable switch.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    fn decorate(&self, text: &str) -> String {
        let mut line = String::with_capacity(self.prefix.len() + text.len() + self.suffix.len());
        line.push_str(&self.prefix);
        line.push_str(text);
        line.push_str(&self.suffix);
        line
    }
}

impl Default for Channel {
    fn default() -> Self {
        Self::new()
    }
}

/// The settings of all four channels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogState {
    /// Debug channel.
    pub debug: Channel,
    /// Info channel.
    pub info: Channel,
    /// Warning channel.
    pub warning: Channel,
    /// Error channel.
    pub error: Channel,
}

impl LogState {
    /// The channel for `level`.
    pub fn channel(&self, level: Level) -> &Channel {
        match level {
            Level::Debug => &self.debug,
            Level::Info => &self.info,
            Level::Warning => &self.warning,
            Level::Error => &self.error,
        }
    }

    /// Mutable access to the channel for `level`.
    pub fn channel_mut(&mut self, level: Level) -> &mut Channel {
        match level {
            Level::Debug => &mut self.debug,
            Level::Info => &mut self.info,
            Level::Warning => &mut self.warning,
            Level::Error => &mut self.error,
        }
    }
}

fn global() -> &'static RwLock<LogState> {
    static STATE: OnceLock<RwLock<LogState>> = OnceLock::new();
    STATE.get_or_init(|| RwLock::new(LogState::default()))
}

/// A snapshot of the current settings.
pub fn state() -> LogState {
    global()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Change the settings in place.
///
/// # Example
///
/// ```rust
/// use flagwater::log::{self, Level};
///
/// log::configure(|state| state.channel_mut(Level::Info).enabled = false);
/// assert!(!log::enabled(Level::Info));
///
/// log::configure(|state| state.info.enabled = true);
/// assert!(log::enabled(Level::Info));
/// ```
pub fn configure<F>(f: F)
where
    F: FnOnce(&mut LogState),
{
    let mut state = global().write().unwrap_or_else(PoisonError::into_inner);
    f(&mut state);
}

/// Whether a message at `level` would currently be emitted.
pub fn enabled(level: Level) -> bool {
    if level == Level::Debug && !cfg!(debug_assertions) {
        return false;
    }
    global()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .channel(level)
        .enabled
}

/// Emit already-formatted `text` at `level`, if that channel is enabled.
pub fn emit(level: Level, text: &str) {
    if level == Level::Debug && !cfg!(debug_assertions) {
        return;
    }

    let line = {
        let state = global().read().unwrap_or_else(PoisonError::into_inner);
        let channel = state.channel(level);
        if !channel.enabled {
            return;
        }
        channel.decorate(text)
    };

    dispatch(level, &line);
}

#[cfg(feature = "tracing")]
fn dispatch(level: Level, line: &str) {
    match level {
        Level::Debug => tracing::debug!("{}", line),
        Level::Info => tracing::info!("{}", line),
        Level::Warning => tracing::warn!("{}", line),
        Level::Error => tracing::error!("{}", line),
    }
}

#[cfg(not(feature = "tracing"))]
fn dispatch(level: Level, line: &str) {
    eprintln!("{:<5} {}", level, line);
}

fn emit_fmt(level: Level, template: &str, args: &[&dyn fmt::Display]) {
    if enabled(level) {
        emit(level, &format(template, args));
    }
}

/// Emit a debug message.
pub fn debug(text: &str) {
    emit(Level::Debug, text);
}

/// Emit an info message.
pub fn info(text: &str) {
    emit(Level::Info, text);
}

/// Emit a warning message.
pub fn warning(text: &str) {
    emit(Level::Warning, text);
}

/// Emit an error message.
pub fn error(text: &str) {
    emit(Level::Error, text);
}

/// Format and emit a debug message.
pub fn debug_fmt(template: &str, args: &[&dyn fmt::Display]) {
    emit_fmt(Level::Debug, template, args);
}

/// Format and emit an info message.
pub fn info_fmt(template: &str, args: &[&dyn fmt::Display]) {
    emit_fmt(Level::Info, template, args);
}

/// Format and emit a warning message.
pub fn warning_fmt(template: &str, args: &[&dyn fmt::Display]) {
    emit_fmt(Level::Warning, template, args);
}

/// Format and emit an error message.
pub fn error_fmt(template: &str, args: &[&dyn fmt::Display]) {
    emit_fmt(Level::Error, template, args);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::sync::Mutex;

    // the settings are process-wide; tests that touch them take turns
    pub(super) static SERIAL: Mutex<()> = Mutex::new(());

    struct Counting<'a>(&'a Cell<usize>);

    impl fmt::Display for Counting<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.set(self.0.get() + 1);
            f.write_str("x")
        }
    }

    #[test]
    fn test_channel_decoration() {
        let channel = Channel::new().with_prefix("<").with_suffix(">");
        assert_eq!(channel.decorate("msg"), "<msg>");
        assert_eq!(Channel::default().decorate("msg"), "msg");
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Warning.to_string(), "WARN");
        assert_eq!(Level::Error.to_string(), "ERROR");
    }

    #[test]
    fn test_channel_lookup() {
        let mut state = LogState::default();
        state.channel_mut(Level::Warning).prefix = "w:".to_string();
        assert_eq!(state.warning.prefix, "w:");
        assert_eq!(state.channel(Level::Warning).prefix, "w:");
        assert!(state.channel(Level::Error).enabled);
    }

    #[test]
    fn test_configure_round_trips_through_state() {
        let _guard = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);

        configure(|state| state.error = Channel::new().with_enabled(false).with_prefix("E "));
        assert!(!enabled(Level::Error));
        assert_eq!(state().error.prefix, "E ");

        configure(|state| *state = LogState::default());
        assert!(enabled(Level::Error));
    }

    #[test]
    fn test_disabled_channel_skips_formatting() {
        let _guard = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
        let calls = Cell::new(0);

        configure(|state| state.info.enabled = false);
        info_fmt("value %", &[&Counting(&calls)]);
        assert_eq!(calls.get(), 0);

        configure(|state| state.info.enabled = true);
        info_fmt("value %", &[&Counting(&calls)]);
        assert_eq!(calls.get(), 1);

        configure(|state| *state = LogState::default());
    }

    #[test]
    fn test_debug_follows_build_profile() {
        let _guard = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
        configure(|state| *state = LogState::default());
        assert_eq!(enabled(Level::Debug), cfg!(debug_assertions));
    }
}
