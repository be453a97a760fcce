//! Bridge to the `log` crate
//!
//! Installing a [`WebhookLog`] makes `log::info!` and friends post to the
//! webhook logger. `log::Level::Warn` maps to [`LogLevel::Warning`]; the
//! other levels map by name.
//!
//! Records from the HTTP stack itself are dropped: reqwest logs from its
//! runtime thread while a post is in progress, and forwarding those would
//! start a blocking post from inside that runtime.

use crate::core::{message, LogLevel, Logger, LoggerError, Result};
use std::cell::Cell;

/// Crates whose records never reach the webhook
const TRANSPORT_TARGETS: &[&str] = &[
    "reqwest",
    "hyper",
    "hyper_util",
    "h2",
    "rustls",
    "tokio",
    "tokio_util",
    "tower",
    "want",
    "mio",
];

thread_local! {
    static IN_SEND: Cell<bool> = const { Cell::new(false) };
}

/// Clears the re-entrancy flag when a send returns or unwinds
struct SendGuard;

impl SendGuard {
    fn enter() -> Option<Self> {
        IN_SEND.with(|flag| (!flag.replace(true)).then_some(SendGuard))
    }
}

impl Drop for SendGuard {
    fn drop(&mut self) {
        IN_SEND.with(|flag| flag.set(false));
    }
}

fn crate_of(target: &str) -> &str {
    target.split("::").next().unwrap_or(target)
}

pub struct WebhookLog {
    logger: Logger,
    ignored: Vec<String>,
}

impl WebhookLog {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            ignored: TRANSPORT_TARGETS.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Drop records whose target belongs to crate `name`.
    ///
    /// Needed for any crate that logs from inside an async runtime, since
    /// the HTTP transport cannot post from there.
    #[must_use]
    pub fn ignore_target(mut self, name: impl Into<String>) -> Self {
        self.ignored.push(name.into());
        self
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    fn is_ignored(&self, target: &str) -> bool {
        let name = crate_of(target);
        self.ignored.iter().any(|ignored| ignored == name)
    }
}

impl log::Log for WebhookLog {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        LogLevel::from(metadata.level()).is_enabled_at(self.logger.level())
            && !self.is_ignored(metadata.target())
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // A transport that logs while posting would otherwise recurse
        let Some(_guard) = SendGuard::enter() else {
            return;
        };
        // Failures land in the logger's last-error slot
        let _ = self
            .logger
            .send(record.level().into(), &message::sprintf(*record.args()));
    }

    fn flush(&self) {}
}

/// Install `logger` as the `log` crate backend.
///
/// The `log` max level is set from the logger's threshold.
///
/// # Errors
///
/// Fails if another `log` backend is already installed.
pub fn init(logger: Logger) -> Result<()> {
    install(WebhookLog::new(logger))
}

/// Install a configured bridge as the `log` crate backend.
///
/// # Errors
///
/// Fails if another `log` backend is already installed.
pub fn install(bridge: WebhookLog) -> Result<()> {
    let max_level = bridge.logger.level().into();
    log::set_boxed_logger(Box::new(bridge))
        .map_err(|e| LoggerError::config("log facade", e.to_string()))?;
    log::set_max_level(max_level);
    Ok(())
}
