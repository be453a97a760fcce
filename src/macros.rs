//! Logging macros for ergonomic log message formatting.
//!
//! Each macro takes either a format string, which logs through the default
//! logger, or a logger followed by a format string.
//!
//! # Examples
//!
//! ```no_run
//! use webhook_logger::prelude::*;
//! use webhook_logger::{error, info};
//!
//! let logger = Logger::new("https://hooks.example.com/T000/B000");
//!
//! // Explicit logger
//! info!(logger, "Server listening on port {}", 8080);
//!
//! // Default logger
//! error!("Error code: {}", 500);
//! ```

/// Log on the generic log path.
///
/// # Examples
///
/// ```no_run
/// # use webhook_logger::prelude::*;
/// # let logger = Logger::new("https://hooks.example.com/T000/B000");
/// use webhook_logger::log;
/// log!(logger, "Simple message");
/// log!("Processed {} items", 10);
/// ```
#[macro_export]
macro_rules! log {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::logf(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.logf(format_args!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::tracef(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.tracef(format_args!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::debugf(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(format_args!($($arg)+))
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```no_run
/// # use webhook_logger::prelude::*;
/// # let logger = Logger::new("https://hooks.example.com/T000/B000");
/// use webhook_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::infof(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::warningf(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.warningf(format_args!($($arg)+))
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```no_run
/// # use webhook_logger::prelude::*;
/// # let logger = Logger::new("https://hooks.example.com/T000/B000");
/// use webhook_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::errorf(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}
