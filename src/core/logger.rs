//! Main logger implementation
//!
//! A [`Logger`] gates each message against its threshold, renders it with the
//! level tag and prefix, and posts it synchronously through its transport.
//! Transport failures are counted in [`LoggerMetrics`] and kept in a
//! last-error slot readable through [`Logger::err`]; the next successful
//! post clears the slot.

use super::{
    destination::DestinationSet,
    error::{LoggerError, Result},
    log_level::LogLevel,
    message::{self, render},
    metrics::LoggerMetrics,
    transport::Transport,
};
use crate::transports::HttpTransport;
use parking_lot::Mutex;
use std::fmt::{self, Display};
use std::io;
use std::sync::Arc;
use std::time::Duration;

pub struct Logger {
    writer: DestinationSet,
    transport: Arc<dyn Transport>,
    /// Shared between clones
    metrics: Arc<LoggerMetrics>,
    last_error: Mutex<Option<LoggerError>>,
    /// Trailing bytes of a UTF-8 sequence split across `io::Write` calls
    partial: Vec<u8>,
}

impl Logger {
    /// Create a logger that posts every level to `webhook_url`.
    ///
    /// The threshold starts at [`LogLevel::Trace`], so everything is sent.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use webhook_logger::Logger;
    ///
    /// let logger = Logger::new("https://hooks.slack.com/services/T000/B000/XXXX");
    /// logger.info("deploy finished");
    /// logger.errorf(format_args!("code={}", 42));
    ///
    /// if let Some(err) = logger.err() {
    ///     eprintln!("webhook unreachable: {}", err);
    /// }
    /// ```
    #[must_use]
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self::from_parts(DestinationSet::new(webhook_url), Arc::new(HttpTransport::new()))
    }

    fn from_parts(writer: DestinationSet, transport: Arc<dyn Transport>) -> Self {
        Self {
            writer,
            transport,
            metrics: Arc::new(LoggerMetrics::new()),
            last_error: Mutex::new(None),
            partial: Vec::new(),
        }
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn writer(&self) -> &DestinationSet {
        &self.writer
    }

    pub fn level(&self) -> LogLevel {
        self.writer.level
    }

    pub fn prefix(&self) -> &str {
        &self.writer.prefix
    }

    /// Set the prefix in place. Later messages start with it.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.writer.prefix = prefix.into();
    }

    /// Return a copy with a different threshold. `self` is not modified.
    #[must_use]
    pub fn with_level(&self, level: LogLevel) -> Logger {
        let mut logger = self.clone();
        logger.writer.level = level;
        logger
    }

    /// Return a copy with the whole destination set replaced, threshold and
    /// prefix included. `self` is not modified.
    #[must_use]
    pub fn with_writer(&self, writer: DestinationSet) -> Logger {
        let mut logger = self.clone();
        logger.writer = writer;
        logger
    }

    /// Get the logger metrics
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn transport_name(&self) -> &str {
        self.transport.name()
    }

    /// The last transport failure, if no post has succeeded since.
    pub fn err(&self) -> Option<LoggerError> {
        self.last_error.lock().clone()
    }

    /// Post `text` at `level` to that level's destination.
    ///
    /// Returns the length of `text` in bytes, or 0 when the level is above
    /// the threshold and nothing was sent.
    ///
    /// # Errors
    ///
    /// Returns the transport error, which is also kept for [`Logger::err`].
    pub fn send(&self, level: LogLevel, text: &str) -> Result<usize> {
        if !level.is_enabled_at(self.writer.level) {
            self.metrics.record_filtered();
            return Ok(0);
        }
        self.dispatch(self.writer.for_level(level), Some(level), text)
    }

    /// Post `text` to the generic log destination.
    ///
    /// The generic path is gated and tagged like [`LogLevel::Info`].
    ///
    /// # Errors
    ///
    /// Returns the transport error, which is also kept for [`Logger::err`].
    pub fn send_log(&self, text: &str) -> Result<usize> {
        if !LogLevel::Info.is_enabled_at(self.writer.level) {
            self.metrics.record_filtered();
            return Ok(0);
        }
        self.dispatch(&self.writer.log, Some(LogLevel::Info), text)
    }

    /// Post `text` to the generic log destination with no tag and no gate.
    ///
    /// # Errors
    ///
    /// Returns the transport error, which is also kept for [`Logger::err`].
    pub fn write_raw(&self, text: &str) -> Result<usize> {
        self.dispatch(&self.writer.log, None, text)
    }

    fn dispatch(&self, destination: &str, level: Option<LogLevel>, text: &str) -> Result<usize> {
        let line = render(&self.writer.prefix, level, text);

        match self.transport.post(destination, &line) {
            Ok(()) => {
                self.metrics.record_sent();
                *self.last_error.lock() = None;
                Ok(text.len())
            }
            Err(e) => {
                self.metrics.record_failed();
                *self.last_error.lock() = Some(e.clone());
                Err(e)
            }
        }
    }

    // The shapes below return nothing; failures stay readable through err().

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        let _ = self.send(LogLevel::Error, message.as_ref());
    }

    #[inline]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        let _ = self.send(LogLevel::Error, &message::sprintf(args));
    }

    #[inline]
    pub fn errorln(&self, args: &[&dyn Display]) {
        let _ = self.send(LogLevel::Error, &message::sprintln(args));
    }

    #[inline]
    pub fn warning(&self, message: impl AsRef<str>) {
        let _ = self.send(LogLevel::Warning, message.as_ref());
    }

    #[inline]
    pub fn warningf(&self, args: fmt::Arguments<'_>) {
        let _ = self.send(LogLevel::Warning, &message::sprintf(args));
    }

    #[inline]
    pub fn warningln(&self, args: &[&dyn Display]) {
        let _ = self.send(LogLevel::Warning, &message::sprintln(args));
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        let _ = self.send(LogLevel::Info, message.as_ref());
    }

    #[inline]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        let _ = self.send(LogLevel::Info, &message::sprintf(args));
    }

    #[inline]
    pub fn infoln(&self, args: &[&dyn Display]) {
        let _ = self.send(LogLevel::Info, &message::sprintln(args));
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        let _ = self.send(LogLevel::Debug, message.as_ref());
    }

    #[inline]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        let _ = self.send(LogLevel::Debug, &message::sprintf(args));
    }

    #[inline]
    pub fn debugln(&self, args: &[&dyn Display]) {
        let _ = self.send(LogLevel::Debug, &message::sprintln(args));
    }

    #[inline]
    pub fn trace(&self, message: impl AsRef<str>) {
        let _ = self.send(LogLevel::Trace, message.as_ref());
    }

    #[inline]
    pub fn tracef(&self, args: fmt::Arguments<'_>) {
        let _ = self.send(LogLevel::Trace, &message::sprintf(args));
    }

    #[inline]
    pub fn traceln(&self, args: &[&dyn Display]) {
        let _ = self.send(LogLevel::Trace, &message::sprintln(args));
    }

    #[inline]
    pub fn log(&self, message: impl AsRef<str>) {
        let _ = self.send_log(message.as_ref());
    }

    #[inline]
    pub fn logf(&self, args: fmt::Arguments<'_>) {
        let _ = self.send_log(&message::sprintf(args));
    }

    #[inline]
    pub fn logln(&self, args: &[&dyn Display]) {
        let _ = self.send_log(&message::sprintln(args));
    }

    /// Concatenate `args` and send them on the generic log path.
    pub fn print(&self, args: &[&dyn Display]) {
        self.log(message::sprint(args));
    }

    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.logf(args);
    }

    pub fn println(&self, args: &[&dyn Display]) {
        self.logln(args);
    }

    /// Send at Error level, then exit the process with status 1.
    ///
    /// The send has completed or failed by the time the process exits.
    pub fn fatal(&self, args: &[&dyn Display]) -> ! {
        self.error(message::sprint(args));
        std::process::exit(1)
    }

    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.errorf(args);
        std::process::exit(1)
    }

    pub fn fatalln(&self, args: &[&dyn Display]) -> ! {
        self.errorln(args);
        std::process::exit(1)
    }

    /// Send at Error level, then panic with the untagged message.
    pub fn panic(&self, args: &[&dyn Display]) -> ! {
        let text = message::sprint(args);
        self.error(&text);
        panic!("{}", text)
    }

    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        let text = message::sprintf(args);
        self.error(&text);
        panic!("{}", text)
    }

    pub fn panicln(&self, args: &[&dyn Display]) -> ! {
        let text = message::sprintln(args);
        self.error(&text);
        panic!("{}", text)
    }
}

impl Default for Logger {
    /// A logger with no destinations; every send fails until configured.
    fn default() -> Self {
        Self::new("")
    }
}

impl Clone for Logger {
    /// Copy the configuration and last error; transport and metrics are shared.
    fn clone(&self) -> Self {
        Self {
            writer: self.writer.clone(),
            transport: Arc::clone(&self.transport),
            metrics: Arc::clone(&self.metrics),
            last_error: Mutex::new(self.err()),
            partial: Vec::new(),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("writer", &self.writer)
            .field("transport", &self.transport.name())
            .field("last_error", &self.err())
            .finish()
    }
}

/// Length of an unfinished UTF-8 sequence at the end of `bytes`
fn incomplete_utf8_tail(bytes: &[u8]) -> usize {
    let start = bytes.len().saturating_sub(3);
    for i in (start..bytes.len()).rev() {
        let b = bytes[i];
        if b & 0xC0 == 0x80 {
            continue;
        }
        let width = match b {
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => 1,
        };
        let have = bytes.len() - i;
        return if have < width { have } else { 0 };
    }
    0
}

/// Raw writes go to the generic log destination without a tag or threshold.
///
/// A character split across two writes is held back and sent with the
/// next write or on flush. Invalid bytes are replaced with U+FFFD.
impl io::Write for Logger {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = std::mem::take(&mut self.partial);
        let held = bytes.len();
        bytes.extend_from_slice(buf);

        let complete = bytes.len() - incomplete_utf8_tail(&bytes);
        if complete > 0 {
            let sent = self.write_raw(&String::from_utf8_lossy(&bytes[..complete]));
            if let Err(e) = sent {
                bytes.truncate(held);
                self.partial = bytes;
                return Err(e.into());
            }
        }

        self.partial = bytes.split_off(complete);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.partial.is_empty() {
            return Ok(());
        }
        let bytes = std::mem::take(&mut self.partial);
        let sent = self.write_raw(&String::from_utf8_lossy(&bytes));
        if let Err(e) = sent {
            self.partial = bytes;
            return Err(e.into());
        }
        Ok(())
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use webhook_logger::prelude::*;
/// use std::time::Duration;
///
/// let logger = Logger::builder()
///     .destinations(
///         DestinationSet::new("https://hooks.example.com/all")
///             .with_error("https://hooks.example.com/alerts"),
///     )
///     .level(LogLevel::Info)
///     .prefix("[billing] ")
///     .timeout(Duration::from_secs(5))
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(logger.level(), LogLevel::Info);
/// ```
pub struct LoggerBuilder {
    writer: DestinationSet,
    level: Option<LogLevel>,
    prefix: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            writer: DestinationSet::default(),
            level: None,
            prefix: None,
            timeout: None,
            transport: None,
        }
    }

    /// Route every level to one URL
    #[must_use = "builder methods return a new value"]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.writer = DestinationSet::new(url);
        self
    }

    /// Use a full destination set, including its threshold and prefix
    #[must_use = "builder methods return a new value"]
    pub fn destinations(mut self, writer: DestinationSet) -> Self {
        self.writer = writer;
        self
    }

    /// Override the threshold of the destination set
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Override the prefix of the destination set
    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Per-request timeout for the built-in HTTP transport
    #[must_use = "builder methods return a new value"]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replace the HTTP transport
    #[must_use = "builder methods return a new value"]
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build the Logger
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidConfiguration`] if a destination is not
    /// an absolute URL, or if a timeout is combined with a custom transport.
    pub fn build(self) -> Result<Logger> {
        let mut writer = self.writer;
        if let Some(level) = self.level {
            writer.level = level;
        }
        if let Some(prefix) = self.prefix {
            writer.prefix = prefix;
        }
        writer.validate()?;

        let transport: Arc<dyn Transport> = match (self.transport, self.timeout) {
            (Some(_), Some(_)) => {
                return Err(LoggerError::config(
                    "LoggerBuilder",
                    "timeout only applies to the built-in HTTP transport",
                ));
            }
            (Some(transport), None) => transport,
            (None, Some(timeout)) => Arc::new(HttpTransport::new().with_timeout(timeout)),
            (None, None) => Arc::new(HttpTransport::new()),
        };

        Ok(Logger::from_parts(writer, transport))
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
