// SPDX-FileCopyrightText: The padio authors
// SPDX-License-Identifier: MPL-2.0

use std::fmt;

use strum::{EnumCount, EnumIter, IntoStaticStr};

use crate::write_hex;

/// Operating mode of the device firmware.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumCount,
    IntoStaticStr,
    strum::Display,
)]
pub enum Mode {
    /// The device operates on its own, e.g. after the host disconnects.
    Standalone,
    /// The host controls all pads and buttons.
    Program,
    /// Pad columns act as faders.
    Fader,
    /// Pad columns act as pan knobs.
    Pan,
}

/// Body of a mode switching SysEx message, without header and terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModeCommand(&'static [u8]);

impl ModeCommand {
    #[must_use]
    pub const fn new(bytes: &'static [u8]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &'static [u8] {
        self.0
    }
}

impl fmt::Display for ModeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, self.0)
    }
}

/// Mode switching commands of a device.
///
/// Overlays without a dedicated command resolve to the program
/// mode command. Some firmwares only distinguish these modes
/// on their own and must receive the program mode command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeCommands {
    pub standalone: ModeCommand,
    pub program: ModeCommand,
    pub fader: Option<ModeCommand>,
    pub pan: Option<ModeCommand>,
}

impl ModeCommands {
    #[must_use]
    pub fn command(&self, mode: Mode) -> ModeCommand {
        match mode {
            Mode::Standalone => self.standalone,
            Mode::Program => self.program,
            Mode::Fader => self.fader.unwrap_or(self.program),
            Mode::Pan => self.pan.unwrap_or(self.program),
        }
    }
}
