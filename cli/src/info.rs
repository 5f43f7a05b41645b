// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::common::{self, emit_error, EmitOpts};
use clap::Parser;
use gpioinfo::format::{ChipHeader, LineSummary};
use gpioinfo::line::Info;
use gpioinfo::{report_chips, Reporter};
#[cfg(feature = "serde")]
use serde_derive::Serialize;

#[derive(Debug, Parser)]
#[command(
    name = "gpioinfo",
    about = "Print information about all lines of the specified GPIO chips.",
    version
)]
pub struct Opts {
    /// The chips to report
    ///
    /// If none specified then all chips in the system are reported.
    ///
    /// Chips may be identified by number, name, or path.
    /// e.g. the following all select the same chip:
    ///     0
    ///     gpiochip0
    ///     /dev/gpiochip0
    #[arg(value_name = "chip", verbatim_doc_comment)]
    chips: Vec<String>,

    #[command(flatten)]
    uapi_opts: common::UapiOpts,

    #[command(flatten)]
    pub emit: common::EmitOpts,
}

pub fn cmd(opts: &Opts) -> bool {
    tracing::debug!(?opts, "info");
    let backend = match common::backend_from_opts(&opts.uapi_opts) {
        Ok(b) => b,
        Err(e) => {
            emit_error(&opts.emit, &e);
            return false;
        }
    };
    let mut emitter = Emitter::new(&opts.emit);
    let success = report_chips(&backend, &opts.chips, &mut emitter);
    emitter.finish();
    success
}

// Prints text as it is reported, or collects the results for JSON.
struct Emitter<'a> {
    opts: &'a EmitOpts,
    #[cfg_attr(not(feature = "json"), allow(dead_code))]
    res: CmdResult,
}

impl<'a> Emitter<'a> {
    fn new(opts: &'a EmitOpts) -> Self {
        Emitter {
            opts,
            res: CmdResult::default(),
        }
    }

    fn finish(self) {
        #[cfg(feature = "json")]
        if self.opts.json {
            match serde_json::to_string(&self.res) {
                Ok(s) => println!("{s}"),
                Err(e) => emit_error(self.opts, &e.into()),
            }
        }
    }
}

impl Reporter for Emitter<'_> {
    fn chip(&mut self, name: &str, num_lines: u32) {
        #[cfg(feature = "json")]
        if self.opts.json {
            self.res.chips.push(ChipResult {
                name: name.to_string(),
                num_lines,
                lines: Vec::new(),
            });
            return;
        }
        println!("{}", ChipHeader::new(name, num_lines));
    }

    fn line(&mut self, info: &Info) {
        #[cfg(feature = "json")]
        if self.opts.json {
            if let Some(chip) = self.res.chips.last_mut() {
                chip.lines.push(info.clone());
            }
            return;
        }
        println!("{}", LineSummary::new(info));
    }

    fn error(&mut self, err: gpioinfo::Error) {
        let e = anyhow::Error::new(err);
        #[cfg(feature = "json")]
        if self.opts.json {
            self.res.errors.push(common::format_error(self.opts, &e));
            return;
        }
        emit_error(self.opts, &e);
    }
}

#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(not(feature = "json"), allow(dead_code))]
struct CmdResult {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    chips: Vec<ChipResult>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    errors: Vec<String>,
}

#[derive(Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(rename_all = "camelCase")
)]
#[cfg_attr(not(feature = "json"), allow(dead_code))]
struct ChipResult {
    name: String,
    num_lines: u32,
    lines: Vec<Info>,
}
