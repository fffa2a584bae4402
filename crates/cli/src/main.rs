// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! `pimon` - command-line entry point for the kernel gateway.
//!
//! Maps caller parameters onto a validated session, runs one gateway
//! operation and prints the reply envelope on stdout. Exit code is
//! nonzero only when the parameters never made it past validation.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use pimon_core::Config;
use pimon_gateway::{Gateway, SessionContext};
use pimon_wire::wrap_err;

#[derive(Parser)]
#[command(name = "pimon", about = "JSON gateway for the pimon home-automation kernel")]
struct Cli {
    /// Path to config.json (shared with the kernel)
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Kernel address
    #[arg(long, default_value = pimon_wire::DEFAULT_KERNEL_ADDR)]
    kernel: String,

    #[command(flatten)]
    params: ParamArgs,

    #[command(subcommand)]
    operation: Operation,
}

/// Caller parameters, exactly as the validator sees them.
#[derive(Args)]
struct ParamArgs {
    /// Task to address (required by validation, not by the parser)
    #[arg(long)]
    task: Option<String>,

    /// Timestamp of the last report this caller has seen
    #[arg(long)]
    timestamp: Option<String>,

    /// Reduced mode: literal "true" or "false"
    #[arg(long)]
    reduced: Option<String>,

    /// API key for authorized operations
    #[arg(long)]
    apikey: Option<String>,
}

impl ParamArgs {
    fn to_map(&self) -> HashMap<String, String> {
        let pairs = [
            ("task", &self.task),
            ("timestamp", &self.timestamp),
            ("reduced", &self.reduced),
            ("apikey", &self.apikey),
        ];
        pairs
            .into_iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (key.to_string(), v.clone())))
            .collect()
    }
}

#[derive(Subcommand)]
enum Operation {
    /// Fetch the task's status report
    Report,

    /// Issue a command against the task (requires the API key)
    Command {
        /// Command path: `name` or `group.name`
        #[arg(long)]
        command: Option<String>,

        /// Command argument, JSON text
        #[arg(long)]
        payload: Option<String>,
    },

    /// Ask the kernel to shut down (requires the API key)
    Quit,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    let ctx = match SessionContext::from_params(&cli.params.to_map(), &config) {
        Ok(ctx) => ctx,
        Err(err) => {
            warn!(%err, "parameter validation failed");
            println!("{}", wrap_err("invalid parameters"));
            std::process::exit(1);
        }
    };

    let gateway = Gateway::with_addr(config, cli.kernel);
    let envelope = match cli.operation {
        Operation::Report => gateway.report(&ctx).await,
        Operation::Command { command, payload } => {
            gateway
                .command(&ctx, command.as_deref(), payload.as_deref())
                .await
        }
        Operation::Quit => gateway.quit(&ctx).await,
    };
    println!("{envelope}");
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
