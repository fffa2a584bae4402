// SPDX-License-Identifier: MIT

//! One-shot TCP exchange with the kernel.
//!
//! The kernel serves one request per connection: accept, read the
//! request, send `status + body`, close. There is no length prefix or
//! delimiter; the peer closing the connection is the only framing
//! signal, so the client reads fixed-size chunks until EOF. No timeout
//! is applied; a hung kernel blocks the call.

use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, warn};

use pimon_core::StatusCode;

/// Where the kernel listens unless configured otherwise.
pub const DEFAULT_KERNEL_ADDR: &str = "localhost:1337";

/// Chunk size for the read-until-close loop, matching the kernel's
/// own 256-byte recv.
const READ_CHUNK: usize = 256;

const STATUS_LEN: usize = 3;

/// Errors from a single exchange.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection establishment failed; the kernel is not running.
    #[error("kernel is not running")]
    NotRunning(#[source] std::io::Error),

    /// The socket failed after the connection was established.
    #[error("socket failure")]
    Socket(#[source] std::io::Error),

    /// The kernel answered with a non-`E00` status prefix.
    #[error("kernel reported {0}")]
    Kernel(String),
}

impl TransportError {
    /// The status-code text callers embed as the failure payload.
    /// Kernel codes pass through verbatim, even ones this build does
    /// not know about.
    pub fn failure_payload(&self) -> &str {
        match self {
            TransportError::NotRunning(_) => StatusCode::NotRunning.as_code(),
            TransportError::Socket(_) => StatusCode::Socket.as_code(),
            TransportError::Kernel(code) => code,
        }
    }
}

/// Client for the kernel's one-request-per-connection TCP protocol.
#[derive(Debug, Clone)]
pub struct TransportClient {
    addr: String,
}

impl TransportClient {
    pub fn new(addr: impl Into<String>) -> Self {
        Self { addr: addr.into() }
    }

    /// Perform one request/response exchange: connect, write the full
    /// request text, read until the kernel closes the connection, and
    /// split the status prefix from the body. Returns the body for
    /// `E00`; every other prefix is an error carrying the code.
    pub async fn exchange(&self, request: &str) -> Result<String, TransportError> {
        debug!(addr = %self.addr, "connecting to kernel");
        let mut stream = TcpStream::connect(&self.addr)
            .await
            .map_err(TransportError::NotRunning)?;

        stream
            .write_all(request.as_bytes())
            .await
            .map_err(TransportError::Socket)?;

        let mut response = Vec::new();
        let mut chunk = [0u8; READ_CHUNK];
        loop {
            let n = stream
                .read(&mut chunk)
                .await
                .map_err(TransportError::Socket)?;
            if n == 0 {
                break;
            }
            response.extend_from_slice(&chunk[..n]);
        }
        debug!(bytes = response.len(), "kernel closed the connection");

        let response = String::from_utf8_lossy(&response).into_owned();
        match response.strip_prefix(StatusCode::NoError.as_code()) {
            Some(body) => Ok(body.to_string()),
            None => {
                let code: String = response.chars().take(STATUS_LEN).collect();
                warn!(code = %code, "kernel reported an error status");
                Err(TransportError::Kernel(code))
            }
        }
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
