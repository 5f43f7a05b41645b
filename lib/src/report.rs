// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::line::{Info, Offset};
use crate::{Error, Result};

/// A source of chips.
pub trait Backend {
    /// The open chip returned by [`open`].
    ///
    /// The chip is closed when it is dropped.
    ///
    /// [`open`]: Backend::open
    type Chip: ChipHandle;

    /// The identifiers of all the chips present in the system.
    fn chips(&self) -> Result<Vec<String>>;

    /// Open the chip with the given identifier.
    fn open(&self, id: &str) -> Result<Self::Chip>;
}

/// An open chip.
pub trait ChipHandle {
    /// The name of the chip, as reported by the chip.
    fn name(&self) -> &str;

    /// The number of lines on the chip.
    fn num_lines(&self) -> u32;

    /// Read the info for the line at the offset.
    fn line_info(&self, offset: Offset) -> Result<Info>;
}

/// The destination for the results of [`report_chips`].
pub trait Reporter {
    /// A chip has been opened and its lines are about to be reported.
    fn chip(&mut self, name: &str, num_lines: u32);

    /// The info for a line on the most recently reported chip.
    fn line(&mut self, info: &Info);

    /// An operation failed.
    ///
    /// Called once for each failure, and processing continues after the call.
    fn error(&mut self, err: Error);
}

/// Report the info for all the lines of the identified chips.
///
/// If `ids` is empty then all the chips present in the system are reported,
/// in the order returned by [`Backend::chips`].
///
/// Chips are reported in order, and the lines of each chip in offset order.
/// A chip that cannot be opened, or a line that cannot be read, is passed to
/// [`Reporter::error`] and skipped.
///
/// Returns true if every chip was opened and every line read successfully.
pub fn report_chips<B, R>(backend: &B, ids: &[String], reporter: &mut R) -> bool
where
    B: Backend,
    R: Reporter,
{
    let mut success = true;
    let discovered;
    let ids = if ids.is_empty() {
        discovered = match backend.chips() {
            Ok(chips) => chips,
            Err(e) => {
                reporter.error(e);
                return false;
            }
        };
        tracing::debug!(chips = ?discovered, "discovered chips");
        &discovered[..]
    } else {
        ids
    };
    for id in ids {
        match backend.open(id) {
            Ok(chip) => {
                if !report_chip(&chip, reporter) {
                    success = false;
                }
            }
            Err(e) => {
                reporter.error(e);
                success = false;
            }
        }
    }
    success
}

// The chip is only borrowed, so it is closed by the caller whatever happens here.
fn report_chip<C: ChipHandle, R: Reporter>(chip: &C, reporter: &mut R) -> bool {
    let mut success = true;
    let num_lines = chip.num_lines();
    tracing::debug!(chip = chip.name(), num_lines, "reporting chip");
    reporter.chip(chip.name(), num_lines);
    for offset in 0..num_lines {
        match chip.line_info(offset) {
            Ok(info) => reporter.line(&info),
            Err(e) => {
                reporter.error(e);
                success = false;
            }
        }
    }
    success
}
