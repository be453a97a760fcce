//! Per-level webhook destinations
//!
//! A [`DestinationSet`] holds one webhook URL for each level plus one for
//! the generic log path, together with the active threshold and an optional
//! prefix. It can be deserialized from a config document; missing fields
//! fall back to empty destinations and the `Trace` threshold.

use super::{
    error::{LoggerError, Result},
    log_level::LogLevel,
};
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Webhook URLs keyed by level, plus threshold and prefix.
///
/// # Example
///
/// ```
/// use webhook_logger::{DestinationSet, LogLevel};
///
/// let set = DestinationSet::new("https://hooks.example.com/all")
///     .with_error("https://hooks.example.com/alerts")
///     .with_level(LogLevel::Info);
///
/// assert_eq!(set.for_level(LogLevel::Error), "https://hooks.example.com/alerts");
/// assert_eq!(set.for_level(LogLevel::Info), "https://hooks.example.com/all");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationSet {
    pub log: String,
    pub error: String,
    pub warning: String,
    pub info: String,
    pub debug: String,
    pub trace: String,

    /// Threshold: messages above this level are dropped
    pub level: LogLevel,

    /// Prepended verbatim to every message; empty means no prefix
    pub prefix: String,
}

impl DestinationSet {
    /// Route every level and the generic log path to the same URL.
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            log: url.clone(),
            error: url.clone(),
            warning: url.clone(),
            info: url.clone(),
            debug: url.clone(),
            trace: url,
            level: LogLevel::Trace,
            prefix: String::new(),
        }
    }

    /// Destination for messages of `level`
    pub fn for_level(&self, level: LogLevel) -> &str {
        match level {
            LogLevel::Error => &self.error,
            LogLevel::Warning => &self.warning,
            LogLevel::Info => &self.info,
            LogLevel::Debug => &self.debug,
            LogLevel::Trace => &self.trace,
        }
    }

    #[must_use]
    pub fn with_log(mut self, url: impl Into<String>) -> Self {
        self.log = url.into();
        self
    }

    #[must_use]
    pub fn with_error(mut self, url: impl Into<String>) -> Self {
        self.error = url.into();
        self
    }

    #[must_use]
    pub fn with_warning(mut self, url: impl Into<String>) -> Self {
        self.warning = url.into();
        self
    }

    #[must_use]
    pub fn with_info(mut self, url: impl Into<String>) -> Self {
        self.info = url.into();
        self
    }

    #[must_use]
    pub fn with_debug(mut self, url: impl Into<String>) -> Self {
        self.debug = url.into();
        self
    }

    #[must_use]
    pub fn with_trace(mut self, url: impl Into<String>) -> Self {
        self.trace = url.into();
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Check that every configured destination is an absolute URL.
    ///
    /// Empty destinations pass: they are allowed for levels the caller never
    /// uses, and sending to one fails with a transport error.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidConfiguration`] naming the first bad slot.
    pub fn validate(&self) -> Result<()> {
        let slots = [
            ("log", &self.log),
            ("error", &self.error),
            ("warning", &self.warning),
            ("info", &self.info),
            ("debug", &self.debug),
            ("trace", &self.trace),
        ];

        for (name, url) in slots {
            if url.is_empty() {
                continue;
            }
            Url::parse(url).map_err(|e| {
                LoggerError::config(format!("DestinationSet.{}", name), format!("'{}': {}", url, e))
            })?;
        }
        Ok(())
    }

    /// Load and validate a destination set from a JSON config document.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidConfiguration`] if the document does not
    /// parse or a destination is not an absolute URL.
    pub fn from_json(document: &str) -> Result<Self> {
        let set: DestinationSet = serde_json::from_str(document)
            .map_err(|e| LoggerError::config("DestinationSet", e.to_string()))?;
        set.validate()?;
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_every_slot() {
        let set = DestinationSet::new("https://example/webhook");
        assert_eq!(set.log, "https://example/webhook");
        for level in LogLevel::ALL {
            assert_eq!(set.for_level(level), "https://example/webhook");
        }
        assert_eq!(set.level, LogLevel::Trace);
        assert!(set.prefix.is_empty());
    }

    #[test]
    fn test_per_level_routing() {
        let set = DestinationSet::default()
            .with_error("http://h/e")
            .with_warning("http://h/w")
            .with_info("http://h/i")
            .with_debug("http://h/d")
            .with_trace("http://h/t");

        assert_eq!(set.for_level(LogLevel::Error), "http://h/e");
        assert_eq!(set.for_level(LogLevel::Warning), "http://h/w");
        assert_eq!(set.for_level(LogLevel::Info), "http://h/i");
        assert_eq!(set.for_level(LogLevel::Debug), "http://h/d");
        assert_eq!(set.for_level(LogLevel::Trace), "http://h/t");
        assert!(set.log.is_empty());
    }

    #[test]
    fn test_validate() {
        assert!(DestinationSet::default().validate().is_ok());
        assert!(DestinationSet::new("https://example/webhook").validate().is_ok());

        let err = DestinationSet::new("https://example/webhook")
            .with_debug("not a url")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("DestinationSet.debug"));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let set: DestinationSet = serde_json::from_str(
            r#"{"error": "https://h/alerts", "level": "warning", "prefix": "[api] "}"#,
        )
        .unwrap();

        assert_eq!(set.error, "https://h/alerts");
        assert_eq!(set.level, LogLevel::Warning);
        assert_eq!(set.prefix, "[api] ");
        assert!(set.info.is_empty());
    }

    #[test]
    fn test_from_json_validates() {
        let set = DestinationSet::from_json(r#"{"log": "https://h/log", "level": "info"}"#).unwrap();
        assert_eq!(set.log, "https://h/log");
        assert_eq!(set.level, LogLevel::Info);

        let err = DestinationSet::from_json(r#"{"trace": "relative/path"}"#).unwrap_err();
        assert!(err.to_string().contains("DestinationSet.trace"));

        let err = DestinationSet::from_json(r#"{"level": "loud"}"#).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
