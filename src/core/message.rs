//! Message formatting and webhook payload
//!
//! Every logging call reduces to [`render`]: `<prefix><TAG>: <text>`. The
//! prefix is inserted verbatim, so any separator belongs in the prefix
//! itself.

use super::log_level::LogLevel;
use serde::Serialize;
use std::fmt::{self, Display, Write};

/// JSON body posted to a webhook: `{"text": "..."}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WebhookPayload<'a> {
    pub text: &'a str,
}

impl<'a> WebhookPayload<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

/// Build the final text for a message.
///
/// `level` is `None` for raw writes, which carry no tag.
pub fn render(prefix: &str, level: Option<LogLevel>, text: &str) -> String {
    let tag_len = level.map_or(0, |l| l.tag().len() + 2);
    let mut out = String::with_capacity(prefix.len() + tag_len + text.len());
    out.push_str(prefix);
    if let Some(level) = level {
        out.push_str(level.tag());
        out.push_str(": ");
    }
    out.push_str(text);
    out
}

/// Concatenate values with no separator.
pub fn sprint(args: &[&dyn Display]) -> String {
    let mut out = String::new();
    for arg in args {
        // Writing to a String cannot fail
        let _ = write!(out, "{}", arg);
    }
    out
}

/// Join values with single spaces and append a newline.
pub fn sprintln(args: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}", arg);
    }
    out.push('\n');
    out
}

/// Render `format_args!` output, skipping the allocation-heavy path when the
/// arguments are a plain literal.
pub fn sprintf(args: fmt::Arguments<'_>) -> String {
    match args.as_str() {
        Some(s) => s.to_owned(),
        None => fmt::format(args),
    }
}
