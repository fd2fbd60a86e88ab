//! Logging macros
//!
//! Unlike the [`Console`](crate::Console) methods, which only learn the
//! caller's file and line, these macros also capture the enclosing function,
//! so `{function}` renders the real name instead of `main`.
//!
//! # Usage
//!
//! ```rust
//! use sitelog_core::{Console, site_info, site_error};
//!
//! let console = Console::stdout();
//! console.enable("worker", None);
//!
//! site_info!(console, "starting {} jobs", 4);
//! site_error!(console, "job {} failed", 2);
//! ```

/// Internal implementation macro capturing the call site
#[doc(hidden)]
#[macro_export]
macro_rules! __site_emit {
    ($console:expr, $method:expr, $args:expr) => {
        $console.emit(
            $method,
            &$crate::Frame::new(::std::file!(), ::std::line!(), ::std::option::Option::Some($crate::function_name!())),
            $args,
        )
    };
}

/// Logs through `log`
#[macro_export]
macro_rules! site_log {
    ($console:expr, $($arg:tt)*) => {
        $crate::__site_emit!($console, $crate::Method::Log, ::std::format_args!($($arg)*))
    };
}

/// Logs through `info`
#[macro_export]
macro_rules! site_info {
    ($console:expr, $($arg:tt)*) => {
        $crate::__site_emit!($console, $crate::Method::Info, ::std::format_args!($($arg)*))
    };
}

/// Logs through `warn`
#[macro_export]
macro_rules! site_warn {
    ($console:expr, $($arg:tt)*) => {
        $crate::__site_emit!($console, $crate::Method::Warn, ::std::format_args!($($arg)*))
    };
}

/// Logs through `error`
#[macro_export]
macro_rules! site_error {
    ($console:expr, $($arg:tt)*) => {
        $crate::__site_emit!($console, $crate::Method::Error, ::std::format_args!($($arg)*))
    };
}

/// Dumps a value's `Debug` representation through `dir`
#[macro_export]
macro_rules! site_dir {
    ($console:expr, $value:expr) => {
        $crate::__site_emit!($console, $crate::Method::Dir, ::std::format_args!("{:?}", $value))
    };
}

/// Logs through `assert` when the condition does not hold
///
/// # Examples
///
/// ```rust
/// # let console = sitelog_core::Console::stdout();
/// # let queue: Vec<u8> = Vec::new();
/// sitelog_core::site_assert!(console, queue.is_empty());
/// sitelog_core::site_assert!(console, queue.len() < 10, "queue too long: {}", queue.len());
/// ```
#[macro_export]
macro_rules! site_assert {
    ($console:expr, $cond:expr $(,)?) => {
        if !$cond {
            $crate::__site_emit!($console, $crate::Method::Assert, ::std::format_args!("Assertion failed"))
        }
    };
    ($console:expr, $cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::__site_emit!(
                $console,
                $crate::Method::Assert,
                ::std::format_args!("Assertion failed: {}", ::std::format_args!($($arg)+))
            )
        }
    };
}
