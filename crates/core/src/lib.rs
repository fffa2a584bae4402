// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pimon-core: shared types for the pimon kernel gateway.

pub mod config;
pub mod status;
pub mod task;

pub use config::{Config, ConfigError};
pub use status::StatusCode;
pub use task::{Task, UnknownTask};
