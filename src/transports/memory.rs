//! In-memory transport
//!
//! Records every message instead of sending it. Clones share the same
//! buffer, so a test can keep one handle and give another to a logger.

use crate::core::{LoggerError, Result, Transport};
use parking_lot::Mutex;
use std::sync::Arc;

/// A message captured by [`MemoryTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub destination: String,
    pub text: String,
}

#[derive(Debug, Default)]
struct MemoryState {
    messages: Vec<SentMessage>,
    failing: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryTransport {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport that rejects every post
    pub fn failing() -> Self {
        let transport = Self::new();
        transport.set_failing(true);
        transport
    }

    pub fn set_failing(&self, failing: bool) {
        self.state.lock().failing = failing;
    }

    pub fn messages(&self) -> Vec<SentMessage> {
        self.state.lock().messages.clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.state
            .lock()
            .messages
            .iter()
            .map(|m| m.text.clone())
            .collect()
    }

    /// Texts posted to `destination`, in order
    pub fn sent_to(&self, destination: &str) -> Vec<String> {
        self.state
            .lock()
            .messages
            .iter()
            .filter(|m| m.destination == destination)
            .map(|m| m.text.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.state.lock().messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.state.lock().messages.clear();
    }
}

impl Transport for MemoryTransport {
    fn post(&self, destination: &str, text: &str) -> Result<()> {
        let mut state = self.state.lock();
        if state.failing {
            return Err(LoggerError::writer(format!(
                "memory transport rejected message for '{}'",
                destination
            )));
        }
        state.messages.push(SentMessage {
            destination: destination.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
