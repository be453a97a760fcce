//! Process-wide default logger
//!
//! The free functions here forward to a single [`Logger`] created on first
//! use with no destinations, so every send fails with a transport error until
//! [`set_default`] installs a configured one. Reconfiguration follows
//! "latest configuration wins": each [`set_default`] or [`set_prefix`]
//! replaces what was there, and calls already holding the previous logger
//! finish with it. The lock is only held long enough to take a handle to
//! the current logger, so a stalled webhook never blocks reconfiguration.
//!
//! ```no_run
//! use webhook_logger::{global, Logger, LogLevel};
//!
//! global::set_default(Logger::new("https://hooks.example.com/T000/B000"));
//! global::set_prefix("[worker-3] ");
//!
//! global::info("job started");
//! global::warningf(format_args!("queue depth {}", 812));
//!
//! let quiet = global::with_level(LogLevel::Error);
//! quiet.info("not sent");
//! ```

use crate::core::{DestinationSet, LogLevel, Logger, LoggerError, Result};
use parking_lot::{const_rwlock, RwLock};
use std::fmt::{self, Display};
use std::sync::{Arc, OnceLock};

static DEFAULT: OnceLock<RwLock<Arc<Logger>>> = OnceLock::new();

/// Inert flags kept for callers ported from stdlib-style loggers
static FLAGS: RwLock<i32> = const_rwlock(0);

fn default_cell() -> &'static RwLock<Arc<Logger>> {
    DEFAULT.get_or_init(|| RwLock::new(Arc::new(Logger::default())))
}

/// The current default, with the lock already released
fn current() -> Arc<Logger> {
    Arc::clone(&*default_cell().read())
}

/// A snapshot of the default logger.
///
/// The copy shares transport and metrics with the default but later
/// reconfiguration of the default does not affect it.
pub fn default_logger() -> Logger {
    Logger::clone(&current())
}

/// Replace the default logger
pub fn set_default(logger: Logger) {
    *default_cell().write() = Arc::new(logger);
}

/// Set the prefix prepended to every message sent through the default logger
pub fn set_prefix(prefix: impl Into<String>) {
    let mut cell = default_cell().write();
    let mut logger = Logger::clone(&cell);
    logger.set_prefix(prefix);
    *cell = Arc::new(logger);
}

pub fn prefix() -> String {
    current().prefix().to_string()
}

/// Store flags. They are not consulted when formatting.
pub fn set_flags(flags: i32) {
    *FLAGS.write() = flags;
}

pub fn flags() -> i32 {
    *FLAGS.read()
}

/// A copy of the default logger with a different threshold; the default is unchanged.
pub fn with_level(level: LogLevel) -> Logger {
    current().with_level(level)
}

/// A copy of the default logger with new destinations; the default is unchanged.
pub fn with_writer(writer: DestinationSet) -> Logger {
    current().with_writer(writer)
}

/// The last transport failure of the default logger
pub fn err() -> Option<LoggerError> {
    current().err()
}

pub fn send(level: LogLevel, text: &str) -> Result<usize> {
    current().send(level, text)
}

pub fn error(message: impl AsRef<str>) {
    current().error(message);
}

pub fn errorf(args: fmt::Arguments<'_>) {
    current().errorf(args);
}

pub fn errorln(args: &[&dyn Display]) {
    current().errorln(args);
}

pub fn warning(message: impl AsRef<str>) {
    current().warning(message);
}

pub fn warningf(args: fmt::Arguments<'_>) {
    current().warningf(args);
}

pub fn warningln(args: &[&dyn Display]) {
    current().warningln(args);
}

pub fn info(message: impl AsRef<str>) {
    current().info(message);
}

pub fn infof(args: fmt::Arguments<'_>) {
    current().infof(args);
}

pub fn infoln(args: &[&dyn Display]) {
    current().infoln(args);
}

pub fn debug(message: impl AsRef<str>) {
    current().debug(message);
}

pub fn debugf(args: fmt::Arguments<'_>) {
    current().debugf(args);
}

pub fn debugln(args: &[&dyn Display]) {
    current().debugln(args);
}

pub fn trace(message: impl AsRef<str>) {
    current().trace(message);
}

pub fn tracef(args: fmt::Arguments<'_>) {
    current().tracef(args);
}

pub fn traceln(args: &[&dyn Display]) {
    current().traceln(args);
}

pub fn log(message: impl AsRef<str>) {
    current().log(message);
}

pub fn logf(args: fmt::Arguments<'_>) {
    current().logf(args);
}

pub fn logln(args: &[&dyn Display]) {
    current().logln(args);
}

pub fn print(args: &[&dyn Display]) {
    current().print(args);
}

pub fn printf(args: fmt::Arguments<'_>) {
    current().printf(args);
}

pub fn println(args: &[&dyn Display]) {
    current().println(args);
}

pub fn fatal(args: &[&dyn Display]) -> ! {
    current().fatal(args)
}

pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    current().fatalf(args)
}

pub fn fatalln(args: &[&dyn Display]) -> ! {
    current().fatalln(args)
}

pub fn panic(args: &[&dyn Display]) -> ! {
    current().panic(args)
}

pub fn panicf(args: fmt::Arguments<'_>) -> ! {
    current().panicf(args)
}

pub fn panicln(args: &[&dyn Display]) -> ! {
    current().panicln(args)
}
