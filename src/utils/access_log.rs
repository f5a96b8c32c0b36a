//! Single-line access log formatting.
//!
//! Each finished request produces one line
//! `[<timestamp>] <METHOD> <path> <status> <n>ms (<request id>)`, an optional
//! `Details:` line and, for failed requests, a separator.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const GRAY: &str = "\x1b[90m";

/// Scoped under the crate so the crate-level filter directive covers it.
pub const TARGET: &str = "wedding_wishes_api::access";

/// Server-side description of a failure, carried in response extensions
/// so the logging middleware can report it. Never serialized to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    pub message: String,
}

impl ErrorDetail {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub timestamp: DateTime<Utc>,
    pub method: String,
    pub path: String,
    pub status: u16,
    pub response_time_ms: u128,
    pub request_id: String,
    pub user_agent: Option<String>,
    pub ip: Option<String>,
    pub query: BTreeMap<String, String>,
    pub error: Option<ErrorDetail>,
}

fn paint(text: &str, color: &str, colored: bool) -> String {
    if colored {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

impl AccessLogEntry {
    fn status_color(&self) -> &'static str {
        match self.status {
            500..=u16::MAX => RED,
            400..=499 => YELLOW,
            _ => GREEN,
        }
    }

    pub fn format_line(&self, colored: bool) -> String {
        let timestamp = self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true);
        [
            paint(&format!("[{timestamp}]"), GRAY, colored),
            paint(&self.method, BLUE, colored),
            self.path.clone(),
            paint(&self.status.to_string(), self.status_color(), colored),
            paint(&format!("{}ms", self.response_time_ms), DIM, colored),
            paint(&format!("({})", self.request_id), GRAY, colored),
        ]
        .join(" ")
    }

    /// Extra request context, `None` when there is nothing to add.
    pub fn details(&self) -> Option<Value> {
        let mut details = Map::new();
        if let Some(user_agent) = &self.user_agent {
            details.insert("userAgent".into(), Value::String(user_agent.clone()));
        }
        if let Some(ip) = &self.ip {
            details.insert("ip".into(), Value::String(ip.clone()));
        }
        if !self.query.is_empty() {
            let query = self
                .query
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect();
            details.insert("query".into(), Value::Object(query));
        }
        if let Some(error) = &self.error {
            details.insert("error".into(), serde_json::json!({ "message": error.message }));
        }

        (!details.is_empty()).then_some(Value::Object(details))
    }

    fn log(&self, message: &str) {
        match self.status {
            500..=u16::MAX => tracing::error!(target: TARGET, "{}", message),
            400..=499 => tracing::warn!(target: TARGET, "{}", message),
            _ => tracing::info!(target: TARGET, "{}", message),
        }
    }

    /// Writes the line, details and separator at one level picked by status.
    pub fn emit(&self, colored: bool) {
        self.log(&self.format_line(colored));

        if let Some(details) = self.details() {
            self.log(&format!("{} {}", paint("Details:", DIM, colored), details));
        }

        if self.status >= 400 {
            self.log(&"-".repeat(80));
        }
    }
}
