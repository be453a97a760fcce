//! Core logger types and traits

pub mod destination;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod metrics;
pub mod transport;

pub use destination::DestinationSet;
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use message::WebhookPayload;
pub use metrics::LoggerMetrics;
pub use transport::Transport;
