// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::line::{self, Offset};
use crate::report::{Backend, ChipHandle};
use crate::{Error, Result};
#[cfg(all(feature = "uapi_v1", feature = "uapi_v2"))]
use gpiocdev::AbiVersion;
use std::path::PathBuf;

/// Accesses chips via the GPIO character devices in `/dev`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cdev {
    #[cfg(all(feature = "uapi_v1", feature = "uapi_v2"))]
    abiv: Option<AbiVersion>,
}

impl Cdev {
    /// Use a specific uAPI ABI version to read line info.
    ///
    /// By default the latest version supported by the kernel is used.
    #[cfg(all(feature = "uapi_v1", feature = "uapi_v2"))]
    pub fn using_abi_version(abiv: AbiVersion) -> Self {
        Cdev { abiv: Some(abiv) }
    }
}

impl Backend for Cdev {
    type Chip = Chip;

    fn chips(&self) -> Result<Vec<String>> {
        Ok(gpiocdev::chip::chips()
            .map_err(Error::NoChips)?
            .into_iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect())
    }

    fn open(&self, id: &str) -> Result<Chip> {
        let open_err = |e: gpiocdev::Error| Error::OpenChip(id.to_string(), e);
        let path = chip_lookup_from_id(id).map_err(open_err)?;
        #[allow(unused_mut)]
        let mut c = gpiocdev::chip::Chip::from_path(&path).map_err(open_err)?;
        #[cfg(all(feature = "uapi_v1", feature = "uapi_v2"))]
        if let Some(abiv) = self.abiv {
            c.using_abi_version(abiv);
        }
        let ci = c.info().map_err(open_err)?;
        Ok(Chip {
            id: id.to_string(),
            name: ci.name,
            num_lines: ci.num_lines,
            c,
        })
    }
}

/// A chip opened by [`Cdev`].
///
/// The underlying character device is closed when the chip is dropped.
#[derive(Debug)]
pub struct Chip {
    /// The identifier used to open the chip.
    id: String,
    name: String,
    num_lines: u32,
    c: gpiocdev::chip::Chip,
}

impl ChipHandle for Chip {
    fn name(&self) -> &str {
        &self.name
    }

    fn num_lines(&self) -> u32 {
        self.num_lines
    }

    fn line_info(&self, offset: Offset) -> Result<line::Info> {
        self.c
            .line_info(offset)
            .map(|li| line::Info::from(&li))
            .map_err(|e| Error::LineInfo(self.id.clone(), offset, e))
    }
}

/// The path a chip identifier refers to.
///
/// The identifier may be a chip number, a chip name, or a path.
/// e.g. the following all identify the same chip:
///     0
///     gpiochip0
///     /dev/gpiochip0
pub fn chip_path_from_id(id: &str) -> PathBuf {
    if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) {
        // from number
        return format!("/dev/gpiochip{id}").into();
    }
    if !id.contains('/') {
        // from name
        let mut p: PathBuf = "/dev".into();
        p.push(id);
        return p;
    }
    // from raw path
    id.into()
}

/// Resolve a chip identifier to the path of a GPIO character device.
pub fn chip_lookup_from_id(id: &str) -> gpiocdev::Result<PathBuf> {
    gpiocdev::chip::is_chip(chip_path_from_id(id))
}
