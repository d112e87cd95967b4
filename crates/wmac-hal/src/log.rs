//! Leveled logging for the bring-up engine.
//!
//! Provides the [`wlog!`] macro and the `werror!` / `wwarn!` / `winfo!` /
//! `wdebug!` convenience forms. Output goes through a pluggable sink
//! registered with [`set_log_fn`]; until one is installed, messages are
//! silently discarded.

use core::fmt;
use core::sync::atomic::{AtomicPtr, AtomicU8, Ordering};

/// Log severity level. Lower = more severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    /// Error: an operation failed.
    Error = 0,
    /// Warning: unexpected condition, not necessarily an error.
    Warn = 1,
    /// Informational: high-level progress messages.
    Info = 2,
    /// Debug: detailed diagnostic information.
    Debug = 3,
}

impl LogLevel {
    /// Returns the human-readable name (fixed-width for aligned output).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN ",
            Self::Info => "INFO ",
            Self::Debug => "DEBUG",
        }
    }
}

/// The signature of the global log sink.
pub type LogFn = fn(LogLevel, fmt::Arguments<'_>);

fn null_log(_level: LogLevel, _args: fmt::Arguments<'_>) {}

static LOG_FN: AtomicPtr<()> = AtomicPtr::new(null_log as *mut ());
static MAX_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

/// Registers the global log sink.
///
/// # Safety
///
/// The provided function must be safe to call from any context. May be
/// called more than once; uses `Release` ordering so subsequent loads see
/// the new function.
pub unsafe fn set_log_fn(f: LogFn) {
    LOG_FN.store(f as *mut (), Ordering::Release);
}

/// Sets the maximum level that reaches the sink. Messages with a less
/// severe level are dropped before formatting.
pub fn set_max_level(level: LogLevel) {
    MAX_LEVEL.store(level as u8, Ordering::Release);
}

#[inline]
fn load_log_fn() -> LogFn {
    let ptr = LOG_FN.load(Ordering::Acquire);
    // SAFETY: We only ever store valid `LogFn` function pointers into LOG_FN.
    unsafe { core::mem::transmute(ptr) }
}

/// Dispatches a log record to the sink. Not part of the public API; use
/// the macros instead.
#[doc(hidden)]
pub fn dispatch(level: LogLevel, args: fmt::Arguments<'_>) {
    if (level as u8) <= MAX_LEVEL.load(Ordering::Acquire) {
        load_log_fn()(level, args);
    }
}

/// Logs a formatted message at the given level.
#[macro_export]
macro_rules! wlog {
    ($level:expr, $($arg:tt)*) => {
        $crate::log::dispatch($level, core::format_args!($($arg)*))
    };
}

/// Logs at [`LogLevel::Error`](crate::log::LogLevel::Error).
#[macro_export]
macro_rules! werror {
    ($($arg:tt)*) => { $crate::wlog!($crate::log::LogLevel::Error, $($arg)*) };
}

/// Logs at [`LogLevel::Warn`](crate::log::LogLevel::Warn).
#[macro_export]
macro_rules! wwarn {
    ($($arg:tt)*) => { $crate::wlog!($crate::log::LogLevel::Warn, $($arg)*) };
}

/// Logs at [`LogLevel::Info`](crate::log::LogLevel::Info).
#[macro_export]
macro_rules! winfo {
    ($($arg:tt)*) => { $crate::wlog!($crate::log::LogLevel::Info, $($arg)*) };
}

/// Logs at [`LogLevel::Debug`](crate::log::LogLevel::Debug).
#[macro_export]
macro_rules! wdebug {
    ($($arg:tt)*) => { $crate::wlog!($crate::log::LogLevel::Debug, $($arg)*) };
}
