// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A library to report the configuration and usage of GPIO lines on Linux.
//!
//! The library walks a set of GPIO chips, queries the info for every line on each chip,
//! and passes the results to a [`Reporter`].
//! Failures on individual chips or lines are reported and skipped, so one bad chip or
//! line does not prevent the remaining lines from being reported.
//!
//! The [`format`] module renders line info into the classic `gpioinfo` column layout.
//!
//! To report all the lines on all the chips in the system:
//! ```no_run
//! use gpioinfo::chip::Cdev;
//! use gpioinfo::format::{ChipHeader, LineSummary};
//! use gpioinfo::{line, report_chips, Error, Reporter};
//!
//! struct Print;
//!
//! impl Reporter for Print {
//!     fn chip(&mut self, name: &str, num_lines: u32) {
//!         println!("{}", ChipHeader::new(name, num_lines));
//!     }
//!     fn line(&mut self, info: &line::Info) {
//!         println!("{}", LineSummary::new(info));
//!     }
//!     fn error(&mut self, err: Error) {
//!         eprintln!("{err}");
//!     }
//! }
//!
//! let ok = report_chips(&Cdev::default(), &[], &mut Print);
//! std::process::exit(if ok { 0 } else { 1 });
//! ```

#[cfg(not(any(feature = "uapi_v1", feature = "uapi_v2")))]
compile_error!("Either feature \"uapi_v1\" or \"uapi_v2\" must be enabled for this crate.");

/// The [`Backend`] that accesses chips via the GPIO character device.
pub mod chip;

/// Rendering of line info and chip headers into text.
pub mod format;

/// Types describing the configuration and usage of a line.
pub mod line;

/// Walking chips and lines and reporting the results.
pub mod report;

pub use report::{report_chips, Backend, ChipHandle, Reporter};

/// Errors returned by [`gpioinfo`] functions.
///
/// [`gpioinfo`]: crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The chips present in the system could not be determined.
    #[error("unable to find any chips")]
    NoChips(#[source] gpiocdev::Error),

    /// A chip identifier could not be resolved to an open chip.
    #[error("unable to open chip '{0}'")]
    OpenChip(String, #[source] gpiocdev::Error),

    /// The info for a line could not be read from an open chip.
    #[error("unable to read line {1} info from chip '{0}'")]
    LineInfo(String, line::Offset, #[source] gpiocdev::Error),
}

/// The result for [`gpioinfo`] functions.
///
/// [`gpioinfo`]: crate
pub type Result<T> = std::result::Result<T, Error>;
