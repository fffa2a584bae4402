// SPDX-License-Identifier: MIT

//! The three caller-facing operations: report, command, quit.
//!
//! Every operation returns a finished `{success, payload}` envelope
//! and never fails past its own boundary. Format and authorization
//! errors short-circuit before any socket activity.

use tracing::{error, warn};

use pimon_core::{Config, StatusCode};
use pimon_wire::{wrap_err, wrap_ok, Command, KernelRequest, Payload, TransportClient};

use crate::redact::redact;
use crate::session::SessionContext;

/// Request/response bridge between validated sessions and the kernel.
pub struct Gateway {
    config: Config,
    client: TransportClient,
}

impl Gateway {
    /// Gateway against the default kernel address.
    pub fn new(config: Config) -> Self {
        Self::with_addr(config, pimon_wire::DEFAULT_KERNEL_ADDR)
    }

    /// Gateway against an explicit kernel address.
    pub fn with_addr(config: Config, addr: impl Into<String>) -> Self {
        Self {
            config,
            client: TransportClient::new(addr),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch the task's status report. Open to anonymous callers; the
    /// redactor decides what they get to see.
    pub async fn report(&self, ctx: &SessionContext) -> String {
        let request = KernelRequest::Report {
            task: ctx.task,
            timestamp: ctx.timestamp,
        };
        self.exchange_redacted(ctx, &request).await
    }

    /// Issue a command against the task. Requires an authorized
    /// session and a well-formed command/payload pair.
    pub async fn command(
        &self,
        ctx: &SessionContext,
        command: Option<&str>,
        payload: Option<&str>,
    ) -> String {
        if !ctx.authorized {
            return wrap_err(StatusCode::NotAuthorized.as_code());
        }

        let Some(raw_command) = command else {
            return wrap_err(StatusCode::MissingCommand.as_code());
        };
        let command = match Command::parse(raw_command) {
            Ok(command) => command,
            Err(err) => {
                warn!(%err, "rejected command");
                return wrap_err(StatusCode::InvalidCommand.as_code());
            }
        };

        let Some(raw_payload) = payload else {
            return wrap_err(StatusCode::MissingArgument.as_code());
        };
        let payload = match Payload::parse(raw_payload) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(%err, "rejected command payload");
                return wrap_err(StatusCode::InvalidArgument.as_code());
            }
        };

        let request = KernelRequest::Request {
            task: ctx.task,
            command,
            payload,
        };
        self.exchange_redacted(ctx, &request).await
    }

    /// Ask the kernel to terminate. Requires an authorized session.
    /// The EXIT reply carries no report, so nothing is redacted.
    pub async fn quit(&self, ctx: &SessionContext) -> String {
        if !ctx.authorized {
            return wrap_err(StatusCode::NotAuthorized.as_code());
        }
        match self.client.exchange(&KernelRequest::Exit.to_wire()).await {
            Ok(body) => wrap_ok(&body),
            Err(err) => wrap_err(err.failure_payload()),
        }
    }

    /// One exchange, redaction on the success path only, then the
    /// envelope. Kernel and transport failures pass their code through
    /// as the failure payload.
    async fn exchange_redacted(&self, ctx: &SessionContext, request: &KernelRequest) -> String {
        match self.client.exchange(&request.to_wire()).await {
            Ok(body) => match redact(ctx.task, ctx.authorized, ctx.reduced, &body) {
                Ok(payload) => wrap_ok(&payload),
                Err(err) => {
                    error!(task = %ctx.task, %err, "kernel sent an undecodable report");
                    wrap_err(StatusCode::RequestFailed.as_code())
                }
            },
            Err(err) => wrap_err(err.failure_payload()),
        }
    }
}

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod tests;
