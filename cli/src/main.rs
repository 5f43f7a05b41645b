// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A command line tool for reporting the state of GPIO lines.

use clap::Parser;
use std::process::ExitCode;

mod common;
mod info;

fn main() -> ExitCode {
    match info::Opts::try_parse() {
        Ok(opts) => {
            common::init_tracing(&opts.emit);
            if info::cmd(&opts) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            // help and version are reported as errors by clap
            _ = e.print();
            if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}
