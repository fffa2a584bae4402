// SPDX-License-Identifier: MIT

//! pimon-gateway: parameter validation, response redaction and the
//! report/command/quit operations against the kernel.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod gateway;
mod redact;
mod session;

pub use gateway::Gateway;
pub use redact::{redact, RedactError};
pub use session::{SessionContext, ValidationError};
