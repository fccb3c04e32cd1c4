//! ==============================================================================
//! log.rs - payload for the remote log collector
//! ==============================================================================
//!
//! wire format (POST body):
//!     {"stack": "frontend", "level": "info", "package": "component", "message": "..."}
//!
//! stack, level and package are always lowercase on the wire; the message is
//! sent untouched.
//!
//! ==============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// which side of the system emitted the event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stack {
    Frontend,
    Backend,
}

/// severity accepted by the collector
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} {value:?}")]
pub struct ParseLogFieldError {
    kind: &'static str,
    value: String,
}

impl Stack {
    pub fn as_str(self) -> &'static str {
        match self {
            Stack::Frontend => "frontend",
            Stack::Backend => "backend",
        }
    }
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stack {
    type Err = ParseLogFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "frontend" => Ok(Stack::Frontend),
            "backend" => Ok(Stack::Backend),
            _ => Err(ParseLogFieldError {
                kind: "stack",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Level {
    type Err = ParseLogFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            _ => Err(ParseLogFieldError {
                kind: "level",
                value: s.to_string(),
            }),
        }
    }
}

/// one event for the collector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub stack: Stack,
    pub level: Level,
    /// lowercased on construction
    pub package: String,
    pub message: String,
}

impl LogEntry {
    pub fn new(stack: Stack, level: Level, package: &str, message: impl Into<String>) -> Self {
        Self {
            stack,
            level,
            package: package.to_lowercase(),
            message: message.into(),
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================
