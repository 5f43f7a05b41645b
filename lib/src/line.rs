// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// An identifier for a line on a particular chip.
pub type Offset = u32;

/// The snapshot of the publicly available information for a line.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Info {
    /// The line offset on the GPIO chip.
    pub offset: Offset,

    /// The name of this GPIO line, as specified by the GPIO chip.
    ///
    /// May be empty.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "String::is_empty"))]
    pub name: String,

    /// When true the line is in use and not available for request.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "is_false"))]
    pub used: bool,

    /// A functional name for the consumer of this GPIO line as set
    /// by whatever is using it.
    ///
    /// Only meaningful if the line is used, and may be empty even then.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "String::is_empty"))]
    pub consumer: String,

    /// The configuration of the line.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub config: Config,
}

#[cfg(feature = "serde")]
fn is_false(b: &bool) -> bool {
    !b
}

/// The configuration of a line, as far as it is reported.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Config {
    /// The direction of the line.
    pub direction: Direction,

    /// When true the line active state corresponds to a physical low.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "is_false"))]
    pub active_low: bool,

    /// The drive applied to the line.
    pub drive: Drive,

    /// The bias applied to the line.
    pub bias: Bias,
}

/// The direction of a line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Direction {
    /// The line is an input.
    Input,

    /// The line is an output.
    Output,
}
impl Default for Direction {
    fn default() -> Self {
        Self::Input
    }
}
impl From<gpiocdev::line::Direction> for Direction {
    fn from(d: gpiocdev::line::Direction) -> Self {
        match d {
            gpiocdev::line::Direction::Input => Direction::Input,
            gpiocdev::line::Direction::Output => Direction::Output,
        }
    }
}

/// The drive policy of a line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Drive {
    /// The line is driven when both active and inactive.
    ///
    /// This is also reported for input lines, which have no drive.
    PushPull,

    /// The line is driven when low and set high impedance when high.
    OpenDrain,

    /// The line is driven when high and set high impedance when low.
    OpenSource,
}
impl Default for Drive {
    fn default() -> Self {
        Self::PushPull
    }
}
impl From<Option<gpiocdev::line::Drive>> for Drive {
    fn from(d: Option<gpiocdev::line::Drive>) -> Self {
        match d {
            None | Some(gpiocdev::line::Drive::PushPull) => Drive::PushPull,
            Some(gpiocdev::line::Drive::OpenDrain) => Drive::OpenDrain,
            Some(gpiocdev::line::Drive::OpenSource) => Drive::OpenSource,
        }
    }
}

/// The bias applied to a line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Bias {
    /// The bias is not reported, so it is whatever the hardware defaults to.
    Unset,

    /// The line has pull-up enabled.
    PullUp,

    /// The line has pull-down enabled.
    PullDown,

    /// The line has bias disabled and will float unless externally driven.
    Disabled,
}
impl Default for Bias {
    fn default() -> Self {
        Self::Unset
    }
}
impl From<Option<gpiocdev::line::Bias>> for Bias {
    fn from(b: Option<gpiocdev::line::Bias>) -> Self {
        match b {
            None => Bias::Unset,
            Some(gpiocdev::line::Bias::PullUp) => Bias::PullUp,
            Some(gpiocdev::line::Bias::PullDown) => Bias::PullDown,
            Some(gpiocdev::line::Bias::Disabled) => Bias::Disabled,
        }
    }
}

impl From<&gpiocdev::line::Info> for Info {
    fn from(li: &gpiocdev::line::Info) -> Self {
        Info {
            offset: li.offset,
            name: li.name.clone(),
            used: li.used,
            consumer: li.consumer.clone(),
            config: Config {
                direction: li.direction.into(),
                active_low: li.active_low,
                drive: li.drive.into(),
                bias: li.bias.into(),
            },
        }
    }
}
