//! Call-site macros.
//!
//! Each leveled macro has two shapes:
//!
//! - `info!(logger, "fmt {}", args...)` formats its arguments like `format!`.
//! - `info!(logger; a, b, c)` writes every argument's `Display` output back to
//!   back with no separator. `info!(logger;)` writes an empty message.
//!
//! Both evaluate to the logger call's `Result`. Since the methods they expand
//! to are `#[track_caller]`, the source segment points at the macro call.

use std::fmt;

/// `Display` adapter concatenating its parts with no separator.
#[doc(hidden)]
pub struct Concat<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Concat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in self.0 {
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __levlog_concat {
    ($($part:expr),* $(,)?) => {
        $crate::macros::Concat(&[$(&$part as &dyn ::std::fmt::Display),*])
    };
}

/// Log at DEBUG.
#[macro_export]
macro_rules! debug {
    ($logger:expr; $($part:expr),* $(,)?) => {
        $logger.debug($crate::__levlog_concat!($($part),*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
}

/// Log at INFO.
#[macro_export]
macro_rules! info {
    ($logger:expr; $($part:expr),* $(,)?) => {
        $logger.info($crate::__levlog_concat!($($part),*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
}

/// Log at WARN.
#[macro_export]
macro_rules! warn {
    ($logger:expr; $($part:expr),* $(,)?) => {
        $logger.warn($crate::__levlog_concat!($($part),*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(::std::format_args!($($arg)+))
    };
}

/// Log at ERROR.
#[macro_export]
macro_rules! error {
    ($logger:expr; $($part:expr),* $(,)?) => {
        $logger.error($crate::__levlog_concat!($($part),*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
}

/// Log at ERROR and exit the process with status 1.
#[macro_export]
macro_rules! fatal {
    ($logger:expr; $($part:expr),* $(,)?) => {
        $logger.fatal($crate::__levlog_concat!($($part),*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
}

/// Log at INFO if the error is `None`, at ERROR otherwise.
#[macro_export]
macro_rules! smart {
    ($logger:expr, $error:expr; $($part:expr),* $(,)?) => {
        $logger.smart($error, $crate::__levlog_concat!($($part),*))
    };
    ($logger:expr, $error:expr, $($arg:tt)+) => {
        $logger.smartf($error, ::std::format_args!($($arg)+))
    };
}
