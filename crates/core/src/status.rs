// SPDX-License-Identifier: MIT

//! Three-character status codes prefixed onto every kernel response.
//!
//! `E00..E04` are reported by the kernel itself; `E21..E29` are
//! produced on this side of the wire (validation, transport) but share
//! the same namespace so callers see a single code vocabulary.

use std::fmt;

/// Status code vocabulary for kernel replies and gateway-side failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// No error; a payload follows.
    NoError,
    /// Kernel scheduler has not completed its first run.
    NotRunYet,
    /// Caller's timestamp matches the latest update; nothing new.
    NotUpdated,
    /// Kernel rejected or failed to apply the command.
    RequestFailed,
    /// Kernel could not interpret the query.
    InvalidQuery,
    /// Operation requires a verified API key.
    NotAuthorized,
    /// Task name outside the fixed set.
    InvalidTask,
    /// No task parameter supplied.
    MissingTask,
    /// Kernel refused the connection.
    NotRunning,
    /// Socket could not be created or used.
    Socket,
    /// No command parameter supplied.
    MissingCommand,
    /// No payload parameter supplied.
    MissingArgument,
    /// Command failed syntax validation.
    InvalidCommand,
    /// Payload is not valid JSON.
    InvalidArgument,
}

impl StatusCode {
    /// The 3-character wire form.
    pub fn as_code(&self) -> &'static str {
        match self {
            StatusCode::NoError => "E00",
            StatusCode::NotRunYet => "E01",
            StatusCode::NotUpdated => "E02",
            StatusCode::RequestFailed => "E03",
            StatusCode::InvalidQuery => "E04",
            StatusCode::NotAuthorized => "E21",
            StatusCode::InvalidTask => "E22",
            StatusCode::MissingTask => "E23",
            StatusCode::NotRunning => "E24",
            StatusCode::Socket => "E25",
            StatusCode::MissingCommand => "E26",
            StatusCode::MissingArgument => "E27",
            StatusCode::InvalidCommand => "E28",
            StatusCode::InvalidArgument => "E29",
        }
    }

    /// Parse a 3-character prefix back into a code. Unknown codes are
    /// `None`; the transport passes their raw text through unmapped.
    pub fn from_code(code: &str) -> Option<StatusCode> {
        match code {
            "E00" => Some(StatusCode::NoError),
            "E01" => Some(StatusCode::NotRunYet),
            "E02" => Some(StatusCode::NotUpdated),
            "E03" => Some(StatusCode::RequestFailed),
            "E04" => Some(StatusCode::InvalidQuery),
            "E21" => Some(StatusCode::NotAuthorized),
            "E22" => Some(StatusCode::InvalidTask),
            "E23" => Some(StatusCode::MissingTask),
            "E24" => Some(StatusCode::NotRunning),
            "E25" => Some(StatusCode::Socket),
            "E26" => Some(StatusCode::MissingCommand),
            "E27" => Some(StatusCode::MissingArgument),
            "E28" => Some(StatusCode::InvalidCommand),
            "E29" => Some(StatusCode::InvalidArgument),
            _ => None,
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
