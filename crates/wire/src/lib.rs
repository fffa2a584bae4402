// SPDX-License-Identifier: MIT

//! Wire protocol for talking to the pimon kernel.
//!
//! Wire format: request is a single JSON object; response is a
//! 3-character status code followed by the JSON body, terminated by
//! the kernel closing the connection.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod client;
mod envelope;
mod escape;
mod request;

pub use client::{TransportClient, TransportError, DEFAULT_KERNEL_ADDR};
pub use envelope::{wrap_err, wrap_ok};
pub use escape::escape_entities;
pub use request::{Command, InvalidCommand, InvalidPayload, KernelRequest, Payload};
