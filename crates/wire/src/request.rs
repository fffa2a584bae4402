// SPDX-License-Identifier: MIT

//! Kernel request messages and their canonical wire rendering.
//!
//! The kernel parses requests positionally enough that field order and
//! literal formatting are part of the contract, so rendering is done
//! by hand instead of through serde.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use pimon_core::Task;

use crate::escape::escape_entities;

/// One dot-separated command segment: alphanumeric first and last
/// character with underscores allowed in between. Note the anchors
/// bind to two distinct positions, so single-character segments never
/// match. The kernel's own matcher behaves the same way.
#[allow(clippy::expect_used)] // static pattern, verified by tests
static SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[A-Za-z0-9][_A-Za-z0-9]*[A-Za-z0-9]$").expect("segment pattern")
});

/// Error for a command that fails syntax validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid command: {0}")]
pub struct InvalidCommand(pub String);

/// A validated command path: `segment` or `segment.segment`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command(String);

impl Command {
    /// Validate and wrap a raw command string. This runs before any
    /// socket activity; a malformed command never reaches the kernel.
    pub fn parse(raw: &str) -> Result<Command, InvalidCommand> {
        let segments: Vec<&str> = raw.split('.').collect();
        let valid = match segments.as_slice() {
            [one] => SEGMENT.is_match(one),
            [first, second] => SEGMENT.is_match(first) && SEGMENT.is_match(second),
            _ => false,
        };
        if valid {
            Ok(Command(raw.to_string()))
        } else {
            Err(InvalidCommand(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error for a payload that is not syntactically valid JSON.
#[derive(Debug, Error)]
#[error("invalid payload: {0}")]
pub struct InvalidPayload(#[from] serde_json::Error);

/// A command payload, verified to be well-formed JSON text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload(String);

impl Payload {
    /// Validate raw payload text. The text itself is kept verbatim;
    /// only syntactic validity is checked here.
    pub fn parse(raw: &str) -> Result<Payload, InvalidPayload> {
        serde_json::from_str::<serde_json::Value>(raw)?;
        Ok(Payload(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Request message to the kernel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelRequest {
    /// Fetch the cached report for a task.
    Report { task: Task, timestamp: u64 },

    /// Issue a command against a task. The kernel expects a fixed
    /// timestamp of zero for command requests.
    Request {
        task: Task,
        command: Command,
        payload: Payload,
    },

    /// Ask the kernel to shut down.
    Exit,
}

impl KernelRequest {
    /// Render the exact request text the kernel expects.
    pub fn to_wire(&self) -> String {
        match self {
            KernelRequest::Report { task, timestamp } => {
                format!(
                    r#"{{"type":"REPORT","task":"{}","timestamp":{}}}"#,
                    task.as_str(),
                    timestamp
                )
            }
            KernelRequest::Request {
                task,
                command,
                payload,
            } => {
                format!(
                    r#"{{"type":"REQUEST","task":"{}","timestamp":0,"command":"{}","payload":"{}"}}"#,
                    task.as_str(),
                    command.as_str(),
                    escape_entities(payload.as_str())
                )
            }
            KernelRequest::Exit => r#"{"type":"EXIT"}"#.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
