// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::line::{Bias, Direction, Drive, Info, Offset};
use std::borrow::Cow;
use std::fmt;

/// The display fields derived from a line [`Info`].
///
/// The derivation substitutes placeholders for empty or unset fields, but
/// otherwise leaves the content of the info untouched.
///
/// The [`Display`] rendering is a single line, without a trailing newline,
/// in the form:
///
/// ```text
/// \tline <offset>:<name><consumer><direction><polarity><flags>
/// ```
///
/// with the offset right aligned in 3 columns, and the name, consumer, direction
/// and polarity right aligned in 12, 12, 8 and 13 columns respectively.
///
/// [`Display`]: fmt::Display
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LineSummary<'a> {
    /// The line offset on the chip.
    pub offset: Offset,

    /// The line name, or "unnamed".
    pub name: &'a str,

    /// The consumer, "kernel" if used without a consumer, or "unused".
    ///
    /// Quoted if it contains a space.
    pub consumer: Cow<'a, str>,

    /// "input" or "output".
    pub direction: &'static str,

    /// "active-high" or "active-low".
    pub polarity: &'static str,

    /// The flags that apply to the line, in display order.
    pub flags: Vec<&'static str>,
}

impl<'a> LineSummary<'a> {
    /// Derive the display fields for a line.
    pub fn new(li: &'a Info) -> Self {
        LineSummary {
            offset: li.offset,
            name: name(li),
            consumer: consumer(li),
            direction: direction(li),
            polarity: polarity(li),
            flags: flags(li),
        }
    }

    /// The flags as they are rendered - bracketed and space separated, or empty.
    pub fn flags_string(&self) -> String {
        if self.flags.is_empty() {
            return String::new();
        }
        format!("[{}]", self.flags.join(" "))
    }
}

impl fmt::Display for LineSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\tline {:>3}:{:>12}{:>12}{:>8}{:>13}{}",
            self.offset,
            self.name,
            self.consumer,
            self.direction,
            self.polarity,
            self.flags_string()
        )
    }
}

/// Render the summary line for a line [`Info`].
pub fn format_line_info(li: &Info) -> String {
    LineSummary::new(li).to_string()
}

/// The header preceding the lines of a chip.
///
/// Renders as `<name> - <num_lines> lines:`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChipHeader<'a> {
    /// The display name of the chip.
    pub name: &'a str,

    /// The number of lines on the chip.
    pub num_lines: u32,
}

impl<'a> ChipHeader<'a> {
    pub fn new(name: &'a str, num_lines: u32) -> Self {
        ChipHeader { name, num_lines }
    }
}

impl fmt::Display for ChipHeader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} lines:",
            format_chip_name(self.name),
            self.num_lines
        )
    }
}

/// The name to display for a chip, "??" if the chip does not report one.
pub fn format_chip_name(n: &str) -> &str {
    if n.is_empty() {
        "??"
    } else {
        n
    }
}

fn name(li: &Info) -> &str {
    if li.name.is_empty() {
        "unnamed"
    } else {
        &li.name
    }
}

fn consumer(li: &Info) -> Cow<'_, str> {
    if !li.used {
        return Cow::Borrowed("unused");
    }
    if li.consumer.is_empty() {
        return Cow::Borrowed("kernel");
    }
    if li.consumer.contains(' ') {
        return Cow::Owned(format!("\"{}\"", li.consumer));
    }
    Cow::Borrowed(&li.consumer)
}

fn direction(li: &Info) -> &'static str {
    match li.config.direction {
        Direction::Input => "input",
        Direction::Output => "output",
    }
}

fn polarity(li: &Info) -> &'static str {
    if li.config.active_low {
        "active-low"
    } else {
        "active-high"
    }
}

fn flags(li: &Info) -> Vec<&'static str> {
    let mut flags = Vec::new();
    if li.used {
        flags.push("used");
    }
    match li.config.drive {
        Drive::PushPull => (),
        Drive::OpenDrain => flags.push("open-drain"),
        Drive::OpenSource => flags.push("open-source"),
    }
    match li.config.bias {
        Bias::Unset => (),
        Bias::PullUp => flags.push("pull-up"),
        Bias::PullDown => flags.push("pull-down"),
        Bias::Disabled => flags.push("bias-disabled"),
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Config;

    fn used_by(consumer: &str) -> Info {
        Info {
            used: true,
            consumer: consumer.into(),
            ..Default::default()
        }
    }

    mod name {
        use super::*;

        #[test]
        fn empty() {
            let li = Info::default();
            assert_eq!(LineSummary::new(&li).name, "unnamed");
        }

        #[test]
        fn unchanged() {
            for n in ["LED", "GPIO 17", "\"quoted\"", " "] {
                let li = Info {
                    name: n.into(),
                    ..Default::default()
                };
                assert_eq!(LineSummary::new(&li).name, n);
            }
        }
    }

    mod consumer {
        use super::*;

        #[test]
        fn unused() {
            for c in ["", "app", "my app"] {
                let li = Info {
                    used: false,
                    consumer: c.into(),
                    ..Default::default()
                };
                assert_eq!(LineSummary::new(&li).consumer, "unused");
            }
        }

        #[test]
        fn kernel() {
            let li = used_by("");
            assert_eq!(LineSummary::new(&li).consumer, "kernel");
        }

        #[test]
        fn plain() {
            let li = used_by("app");
            assert_eq!(LineSummary::new(&li).consumer, "app");
        }

        #[test]
        fn quoted() {
            for (c, q) in [
                ("my app", "\"my app\""),
                (" ", "\" \""),
                ("a b c", "\"a b c\""),
                ("trailing ", "\"trailing \""),
            ] {
                let li = used_by(c);
                assert_eq!(LineSummary::new(&li).consumer, q);
            }
        }

        #[test]
        fn tab_is_not_space() {
            let li = used_by("my\tapp");
            assert_eq!(LineSummary::new(&li).consumer, "my\tapp");
        }
    }

    #[test]
    fn direction() {
        let mut li = Info::default();
        assert_eq!(LineSummary::new(&li).direction, "input");
        li.config.direction = Direction::Output;
        assert_eq!(LineSummary::new(&li).direction, "output");
    }

    #[test]
    fn polarity() {
        let mut li = Info::default();
        assert_eq!(LineSummary::new(&li).polarity, "active-high");
        li.config.active_low = true;
        assert_eq!(LineSummary::new(&li).polarity, "active-low");
    }

    mod flags {
        use super::*;

        fn flags_of(used: bool, drive: Drive, bias: Bias) -> String {
            let li = Info {
                used,
                config: Config {
                    drive,
                    bias,
                    ..Default::default()
                },
                ..Default::default()
            };
            LineSummary::new(&li).flags_string()
        }

        #[test]
        fn none() {
            assert_eq!(flags_of(false, Drive::PushPull, Bias::Unset), "");
        }

        #[test]
        fn single() {
            assert_eq!(flags_of(true, Drive::PushPull, Bias::Unset), "[used]");
            assert_eq!(
                flags_of(false, Drive::OpenDrain, Bias::Unset),
                "[open-drain]"
            );
            assert_eq!(
                flags_of(false, Drive::OpenSource, Bias::Unset),
                "[open-source]"
            );
            assert_eq!(flags_of(false, Drive::PushPull, Bias::PullUp), "[pull-up]");
            assert_eq!(
                flags_of(false, Drive::PushPull, Bias::PullDown),
                "[pull-down]"
            );
            assert_eq!(
                flags_of(false, Drive::PushPull, Bias::Disabled),
                "[bias-disabled]"
            );
        }

        #[test]
        fn order() {
            assert_eq!(
                flags_of(true, Drive::OpenSource, Bias::PullDown),
                "[used open-source pull-down]"
            );
            assert_eq!(
                flags_of(true, Drive::PushPull, Bias::Disabled),
                "[used bias-disabled]"
            );
            assert_eq!(
                flags_of(false, Drive::OpenDrain, Bias::PullUp),
                "[open-drain pull-up]"
            );
        }
    }

    mod render {
        use super::*;

        #[test]
        fn defaults() {
            let li = Info::default();
            assert_eq!(
                format_line_info(&li),
                "\tline   0:     unnamed      unused   input  active-high"
            );
        }

        #[test]
        fn populated() {
            let li = Info {
                offset: 1,
                name: "LED".into(),
                used: true,
                consumer: "my app".into(),
                config: Config {
                    direction: Direction::Output,
                    active_low: true,
                    drive: Drive::OpenDrain,
                    bias: Bias::PullUp,
                },
            };
            assert_eq!(
                format_line_info(&li),
                "\tline   1:         LED    \"my app\"  output   active-low[used open-drain pull-up]"
            );
        }

        #[test]
        fn kernel_consumer() {
            let li = Info {
                offset: 42,
                name: "SDA".into(),
                used: true,
                ..Default::default()
            };
            assert_eq!(
                format_line_info(&li),
                "\tline  42:         SDA      kernel   input  active-high[used]"
            );
        }

        #[test]
        fn wide_fields() {
            let li = Info {
                offset: 1234,
                name: "a-very-long-line-name".into(),
                used: true,
                consumer: "consumer-too-long".into(),
                ..Default::default()
            };
            assert_eq!(
                format_line_info(&li),
                "\tline 1234:a-very-long-line-nameconsumer-too-long   input  active-high[used]"
            );
        }

        #[test]
        fn idempotent() {
            let li = Info {
                offset: 5,
                name: "BTN".into(),
                used: true,
                consumer: "button daemon".into(),
                config: Config {
                    bias: Bias::PullDown,
                    ..Default::default()
                },
            };
            let first = format_line_info(&li);
            assert_eq!(format_line_info(&li), first);
            // info is left untouched
            assert_eq!(li.consumer, "button daemon");
        }
    }

    #[test]
    fn chip_header() {
        assert_eq!(
            ChipHeader::new("gpiochip0", 2).to_string(),
            "gpiochip0 - 2 lines:"
        );
        assert_eq!(ChipHeader::new("", 32).to_string(), "?? - 32 lines:");
    }
}
