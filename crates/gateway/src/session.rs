// SPDX-License-Identifier: MIT

//! Caller-parameter validation and the per-request session context.

use std::collections::HashMap;

use thiserror::Error;

use pimon_core::{Config, Task};

/// Rejection reasons for caller-supplied parameters. All of these are
/// detected before any network activity; the entry point reports them
/// as one generic failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no task parameter supplied")]
    MissingTask,

    #[error("unknown task: {0}")]
    InvalidTask(String),

    #[error("timestamp is not a non-negative number: {0}")]
    InvalidTimestamp(String),

    #[error("reduced flag must be the literal \"true\" or \"false\": {0}")]
    InvalidReducedFlag(String),

    #[error("presented API key does not match the configured key")]
    ApiKeyMismatch,
}

/// Per-request session state derived from validated parameters.
///
/// `authorized` is never caller-asserted: it becomes true only when
/// the presented key equals the configured one. Absent key leaves it
/// false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub task: Task,
    pub timestamp: u64,
    pub reduced: bool,
    pub authorized: bool,
}

impl SessionContext {
    /// Validate and normalize a caller parameter mapping.
    ///
    /// * `task` — required, must name one of the eight tasks.
    /// * `timestamp` — optional numeric string, truncated toward zero;
    ///   defaults to 0.
    /// * `reduced` — optional, only the literals `"true"`/`"false"`.
    /// * `apikey` — optional; a mismatch is a hard failure rather than
    ///   a silently unauthorized session.
    pub fn from_params(
        params: &HashMap<String, String>,
        config: &Config,
    ) -> Result<SessionContext, ValidationError> {
        let task = params
            .get("task")
            .ok_or(ValidationError::MissingTask)?
            .parse::<Task>()
            .map_err(|e| ValidationError::InvalidTask(e.0))?;

        let timestamp = match params.get("timestamp") {
            Some(raw) => parse_timestamp(raw)?,
            None => 0,
        };

        let reduced = match params.get("reduced").map(String::as_str) {
            Some("true") => true,
            Some("false") | None => false,
            Some(other) => {
                return Err(ValidationError::InvalidReducedFlag(other.to_string()));
            }
        };

        let authorized = match params.get("apikey") {
            Some(key) if key == config.api_key() => true,
            Some(_) => return Err(ValidationError::ApiKeyMismatch),
            None => false,
        };

        Ok(SessionContext {
            task,
            timestamp,
            reduced,
            authorized,
        })
    }
}

/// Accept any numeric string (decimals included) and coerce it to a
/// non-negative integer, truncating toward zero.
fn parse_timestamp(raw: &str) -> Result<u64, ValidationError> {
    let invalid = || ValidationError::InvalidTimestamp(raw.to_string());
    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok(value.trunc() as u64)
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
