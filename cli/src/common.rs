// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(all(feature = "uapi_v1", feature = "uapi_v2"))]
use anyhow::Context;
use anyhow::Result;
#[cfg(all(feature = "uapi_v1", feature = "uapi_v2"))]
use clap::ValueEnum;
use clap::Parser;
use gpioinfo::chip::Cdev;
use tracing_subscriber::EnvFilter;

/// The environment variable controlling diagnostic logging.
pub const LOG_ENV: &str = "GPIOINFO_LOG";

// common helper functions

#[cfg(all(feature = "uapi_v1", feature = "uapi_v2"))]
pub fn backend_from_opts(opts: &UapiOpts) -> Result<Cdev> {
    Ok(match opts.abi_version {
        Some(abiv) => {
            let abiv = abiv.into();
            gpiocdev::supports_abi_version(abiv)
                .with_context(|| format!("unable to use {abiv}"))?;
            Cdev::using_abi_version(abiv)
        }
        None => Cdev::default(),
    })
}

#[cfg(not(all(feature = "uapi_v1", feature = "uapi_v2")))]
pub fn backend_from_opts(_opts: &UapiOpts) -> Result<Cdev> {
    Ok(Cdev::default())
}

/// Install the diagnostic log subscriber.
///
/// Logs go to stderr so they never mix with the report.
pub fn init_tracing(opts: &EmitOpts) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(opts)));
    _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_log_level(opts: &EmitOpts) -> &'static str {
    if opts.verbose {
        "debug"
    } else {
        "warn"
    }
}

// common command line parser options

#[cfg(all(feature = "uapi_v1", feature = "uapi_v2"))]
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum AbiVersionFlags {
    V1,
    V2,
}
#[cfg(all(feature = "uapi_v1", feature = "uapi_v2"))]
impl From<AbiVersionFlags> for gpiocdev::AbiVersion {
    fn from(b: AbiVersionFlags) -> Self {
        match b {
            AbiVersionFlags::V1 => gpiocdev::AbiVersion::V1,
            AbiVersionFlags::V2 => gpiocdev::AbiVersion::V2,
        }
    }
}

#[derive(Debug, Default, Parser)]
pub struct UapiOpts {
    /// The uAPI ABI version to use to read line info
    ///
    /// By default the latest uAPI version supported by the kernel is used.
    #[cfg(all(feature = "uapi_v1", feature = "uapi_v2"))]
    #[arg(
        long,
        value_name = "version",
        env = "GPIOINFO_ABI_VERSION",
        value_enum,
        ignore_case = true
    )]
    pub abi_version: Option<AbiVersionFlags>,
}

#[derive(Clone, Copy, Debug, Default, Parser)]
pub struct EmitOpts {
    /// Provide more detailed error messages
    ///
    /// Also enables debug logging, unless overridden by GPIOINFO_LOG.
    #[arg(short = 'v', long, display_order = 800)]
    pub verbose: bool,

    /// Emit output in JSON format
    #[cfg(feature = "json")]
    #[arg(long)]
    pub json: bool,
}

pub fn emit_error(opts: &EmitOpts, e: &anyhow::Error) {
    let e_str = format_error(opts, e);
    #[cfg(feature = "json")]
    if opts.json {
        println!("{}", serde_json::json!({ "error": e_str }));
        return;
    }
    eprintln!("{e_str}");
}

pub fn format_error(opts: &EmitOpts, e: &anyhow::Error) -> String {
    if opts.verbose {
        format!("{e:#}")
    } else {
        format!("{e}")
    }
}
