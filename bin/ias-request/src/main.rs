// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! Tool to submit SGX EPID quotes to the Intel Attestation Service and to retrieve SigRLs

#![deny(missing_docs)]
#![deny(clippy::all)]

mod error;
mod log;
mod persist;
mod report;
mod sigrl;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use intel_ias_api::{IasClient, DEFAULT_REPORT_URL, DEFAULT_SIGRL_URL};
use tracing::{error, level_filters::LevelFilter};
use url::Url;

use crate::{
    error::Error,
    log::{effective_level, setup_logging, LogLevelParser},
    report::{run_report, ReportArgs},
    sigrl::{run_sigrl, SigrlArgs},
};

#[derive(Parser, Debug)]
#[command(author = "Matter Labs", version, about = "Intel Attestation Service request tool", long_about = None)]
struct Arguments {
    /// IAS API key
    #[arg(short = 'k', long, global = true, env = "IAS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    /// Log level for the log output.
    /// Valid values are: `off`, `error`, `warn`, `info`, `debug`, `trace`
    #[arg(long, global = true, default_value_t = LevelFilter::WARN, value_parser = LogLevelParser)]
    log_level: LevelFilter,
    /// Enable verbose output, same as `--log-level debug`
    #[arg(short, long, global = true)]
    verbose: bool,
    /// URL for the IAS attestation report endpoint
    #[arg(short = 'R', long, global = true, env = "IAS_REPORT_URL", default_value = DEFAULT_REPORT_URL)]
    report_url: Url,
    /// URL for the IAS SigRL endpoint
    #[arg(short = 'S', long, global = true, env = "IAS_SIGRL_URL", default_value = DEFAULT_SIGRL_URL)]
    sigrl_url: Url,
    /// The request to send
    #[command(subcommand)]
    command: SubCommands,
}

#[derive(Subcommand, Debug)]
enum SubCommands {
    /// Verify attestation evidence (quote)
    Report(ReportArgs),
    /// Retrieve signature revocation list for a given EPID group
    Sigrl(SigrlArgs),
}

async fn main_with_error() -> Result<()> {
    let args = Arguments::parse();

    setup_logging(&effective_level(args.log_level, args.verbose))?;

    let api_key = args
        .api_key
        .ok_or_else(|| Error::invalid_input("API key not specified"))?;

    let client = IasClient::new(api_key, args.report_url, args.sigrl_url)
        .context("Failed to initialize IAS client")?;

    match args.command {
        SubCommands::Report(report_args) => run_report(&client, report_args)
            .await
            .context("Failed to submit quote to IAS")?,
        SubCommands::Sigrl(sigrl_args) => run_sigrl(&client, sigrl_args)
            .await
            .context("Failed to retrieve SigRL from IAS")?,
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let ret = main_with_error().await;
    if let Err(e) = &ret {
        error!("Error: {e:#}");
    }
    ret
}
