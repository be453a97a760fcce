//! HTTP webhook transport
//!
//! Posts `{"text": "..."}` as `application/json` with a blocking reqwest
//! client. The response status and body are ignored; only failures to
//! complete the request are reported.

use crate::core::{LoggerError, Result, Transport, WebhookPayload};
use reqwest::blocking::Client;
use std::sync::OnceLock;
use std::time::Duration;

/// Blocking HTTP transport for chat webhooks
///
/// The underlying client is built on first use, so constructing a logger
/// that never sends does not start reqwest's runtime thread.
///
/// # Example
///
/// ```no_run
/// use webhook_logger::transports::HttpTransport;
/// use webhook_logger::Transport;
/// use std::time::Duration;
///
/// let transport = HttpTransport::new().with_timeout(Duration::from_secs(5));
/// transport.post("https://hooks.example.com/T000/B000", "INFO: deployed")?;
/// # Ok::<(), webhook_logger::LoggerError>(())
/// ```
#[derive(Debug, Default)]
pub struct HttpTransport {
    client: OnceLock<Client>,
    timeout: Option<Duration>,
}

impl HttpTransport {
    /// Create a transport with no request timeout
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound each request by `timeout`
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn client(&self) -> Result<&Client> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }

        // reqwest's blocking builder applies a 30s timeout unless told otherwise
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| LoggerError::config("HttpTransport", e.to_string()))?;

        Ok(self.client.get_or_init(|| client))
    }
}

impl Transport for HttpTransport {
    fn post(&self, destination: &str, text: &str) -> Result<()> {
        let payload = WebhookPayload::new(text);

        self.client()?
            .post(destination)
            .json(&payload)
            .send()
            .map_err(|e| LoggerError::transport(destination, e))?;

        Ok(())
    }

    fn name(&self) -> &str {
        "http"
    }
}
