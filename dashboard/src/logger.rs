//! ==============================================================================
//! logger.rs - remote event logging
//! ==============================================================================
//!
//! purpose:
//!     reports user-facing events to the log collector. calls are fire and
//!     forget: the ui never waits on them and a failed request only shows up
//!     in the browser console.
//!
//! api:
//!     POST {log_endpoint}
//!         body: {"stack": "...", "level": "...", "package": "...", "message": "..."}
//!
//! ==============================================================================

use gloo_net::http::Request;
use shared::{Level, LogEntry, Stack};

use crate::config::AppConfig;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("failed to encode log entry: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("{0}")]
    Network(#[from] gloo_net::Error),

    #[error("Log API error: {0}")]
    Status(u16),
}

/// post one entry and return the collector's json reply
pub async fn send_log(endpoint: &str, entry: &LogEntry) -> Result<serde_json::Value, LogError> {
    let body = serde_json::to_string(entry)?;

    let response = Request::post(endpoint)
        .header("Content-Type", "application/json")
        .body(body)?
        .send()
        .await?;

    ensure_success(response.status())?;

    Ok(response.json::<serde_json::Value>().await?)
}

/// the collector only counts 2xx as accepted
fn ensure_success(status: u16) -> Result<(), LogError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(LogError::Status(status))
    }
}

// ==============================================================================
// fire-and-forget handle
// ==============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Logger {
    endpoint: &'static str,
    stack: Stack,
}

impl Logger {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            endpoint: config.log_endpoint,
            stack: config.stack,
        }
    }

    /// mirror the event to the console and ship it in the background
    pub fn log(&self, level: Level, package: &str, message: impl Into<String>) {
        let entry = LogEntry::new(self.stack, level, package, message);
        log::log!(console_level(level), "[{}] {}", entry.package, entry.message);

        let endpoint = self.endpoint;
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = send_log(endpoint, &entry).await {
                log::error!("Logging failed: {}", e);
            }
        });
    }

    pub fn info(&self, package: &str, message: impl Into<String>) {
        self.log(Level::Info, package, message);
    }
}

/// console has no fatal level
fn console_level(level: Level) -> log::Level {
    match level {
        Level::Debug => log::Level::Debug,
        Level::Info => log::Level::Info,
        Level::Warn => log::Level::Warn,
        Level::Error | Level::Fatal => log::Level::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_level_mapping() {
        assert_eq!(console_level(Level::Info), log::Level::Info);
        assert_eq!(console_level(Level::Fatal), log::Level::Error);
    }

    #[test]
    fn test_non_success_status_rejected() {
        assert!(ensure_success(200).is_ok());
        assert!(ensure_success(204).is_ok());

        for status in [199, 301, 400, 404, 500, 503] {
            assert!(matches!(ensure_success(status), Err(LogError::Status(s)) if s == status));
        }
    }

    #[test]
    fn test_status_error_message() {
        assert_eq!(LogError::Status(503).to_string(), "Log API error: 503");
    }

    #[test]
    fn test_logger_takes_config() {
        let config = AppConfig {
            log_endpoint: "http://collector.local/logs",
            short_base: "http://s.local",
            stack: Stack::Backend,
        };
        let logger = Logger::new(&config);
        assert_eq!(logger.endpoint, "http://collector.local/logs");
        assert_eq!(logger.stack, Stack::Backend);
    }
}
