//! Transport trait for webhook delivery

use super::error::Result;

/// Delivers one already-formatted message to one destination.
///
/// Implementations are called synchronously on the logging thread and must
/// not retry or buffer.
pub trait Transport: Send + Sync {
    fn post(&self, destination: &str, text: &str) -> Result<()>;
    fn name(&self) -> &str;
}
