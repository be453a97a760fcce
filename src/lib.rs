//! # Webhook Logger
//!
//! A leveled logging facade that posts formatted messages to chat webhooks,
//! with one destination per severity.
//!
//! ## Features
//!
//! - **Per-level routing**: Error, Warning, Info, Debug and Trace each have
//!   their own webhook URL, plus one for the generic log path
//! - **Threshold gating**: messages less important than the threshold are dropped
//! - **Default logger**: free functions in [`global`] forward to a process-wide logger
//! - **`log` crate bridge**: install the webhook logger as the `log` backend
//!
//! Messages are posted synchronously as `{"text": "<prefix><TAG>: <message>"}`.

pub mod core;
pub mod facade;
pub mod global;
pub mod macros;
pub mod transports;

pub mod prelude {
    pub use crate::core::{
        DestinationSet, LogLevel, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Result,
        Transport,
    };
    pub use crate::transports::{HttpTransport, MemoryTransport};
}

pub use crate::core::{
    DestinationSet, LogLevel, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Result,
    Transport, WebhookPayload,
};
pub use facade::{init, install, WebhookLog};
pub use transports::{HttpTransport, MemoryTransport, SentMessage};
