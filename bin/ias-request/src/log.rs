// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2024-2025 Matter Labs

//! Logging related stuff

use anyhow::Context;
use tracing::level_filters::LevelFilter;
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// A log level parser for clap, with "off", "error", "warn", "info", "debug", "trace" as valid values
#[derive(Clone)]
pub struct LogLevelParser;

impl clap::builder::TypedValueParser for LogLevelParser {
    type Value = LevelFilter;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &std::ffi::OsStr,
    ) -> Result<Self::Value, clap::Error> {
        clap::builder::TypedValueParser::parse(self, cmd, arg, value.to_owned())
    }

    fn parse(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: std::ffi::OsString,
    ) -> Result<Self::Value, clap::Error> {
        use std::str::FromStr;
        let p = clap::builder::PossibleValuesParser::new([
            "off", "error", "warn", "info", "debug", "trace",
        ]);
        let v = p.parse(cmd, arg, value)?;

        LevelFilter::from_str(&v).map_err(|_| clap::Error::new(clap::error::ErrorKind::InvalidValue))
    }
}

/// The effective log level, `--verbose` raises it to at least `debug`.
pub fn effective_level(log_level: LevelFilter, verbose: bool) -> LevelFilter {
    if verbose {
        log_level.max(LevelFilter::DEBUG)
    } else {
        log_level
    }
}

/// Setup logging to stderr for this binary and the `intel_ias_api` crate.
///
/// `RUST_LOG` takes precedence over `log_level`.
pub fn setup_logging(log_level: &LevelFilter) -> anyhow::Result<()> {
    LogTracer::init().context("Failed to set logger")?;
    let filter = EnvFilter::builder()
        .try_from_env()
        .unwrap_or(match *log_level {
            LevelFilter::OFF => EnvFilter::new("off"),
            _ => EnvFilter::new(format!(
                "warn,{crate_name}={log_level},intel_ias_api={log_level}",
                crate_name = env!("CARGO_CRATE_NAME"),
                log_level = log_level
            )),
        });
    let subscriber = Registry::default()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr));
    tracing::subscriber::set_global_default(subscriber).context("Failed to set logger")?;

    Ok(())
}
