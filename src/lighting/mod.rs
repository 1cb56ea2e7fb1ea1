// SPDX-FileCopyrightText: The padio authors
// SPDX-License-Identifier: MPL-2.0

//! Pad lighting encoded as palette SysEx messages.

use std::collections::BTreeMap;

use derive_more::{Deref, From};

use crate::{SysExHeader, SysExMessage};

#[cfg(test)]
mod tests;

/// Command byte of the palette lighting update.
pub const LIGHTING_UPDATE_COMMAND: u8 = 0x03;

const LIGHTING_TYPE_STATIC: u8 = 0x00;
const LIGHTING_TYPE_FLASHING: u8 = 0x01;
const LIGHTING_TYPE_PULSING: u8 = 0x02;

/// Desired light of a single pad.
///
/// Colors are indices into the onboard palette. Values above 127
/// are not supported by the device and are sent unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LightInfo {
    pub color: u8,

    /// Second color, 0 for a static light.
    pub blink_color: u8,

    /// Alternate between both colors instead of pulsing.
    pub is_fast: bool,
}

/// Native lighting effect selected by a [`LightInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightingMode {
    Static,
    /// Alternating between the blink color and the color
    Flashing,
    /// Breathing with the color
    Pulsing,
}

impl LightInfo {
    #[must_use]
    pub const fn new(color: u8) -> Self {
        Self {
            color,
            blink_color: 0,
            is_fast: false,
        }
    }

    #[must_use]
    pub const fn blinking(color: u8, blink_color: u8, is_fast: bool) -> Self {
        Self {
            color,
            blink_color,
            is_fast,
        }
    }

    #[must_use]
    pub const fn mode(self) -> LightingMode {
        if self.blink_color == 0 {
            LightingMode::Static
        } else if self.is_fast {
            LightingMode::Flashing
        } else {
            LightingMode::Pulsing
        }
    }

    fn encode(self, note: u8, bytes: &mut Vec<u8>) {
        let Self {
            color, blink_color, ..
        } = self;
        match self.mode() {
            LightingMode::Static => {
                bytes.extend_from_slice(&[LIGHTING_TYPE_STATIC, note, color]);
            }
            LightingMode::Flashing => {
                // Colour B first, then colour A
                bytes.extend_from_slice(&[LIGHTING_TYPE_FLASHING, note, blink_color, color]);
            }
            LightingMode::Pulsing => {
                bytes.extend_from_slice(&[LIGHTING_TYPE_PULSING, note, color]);
            }
        }
    }
}

/// Lights of multiple pads, keyed and ordered by pad note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, From)]
pub struct PadLightingRequest(BTreeMap<u8, LightInfo>);

impl PadLightingRequest {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Replaces and returns the previous light of the pad, if any.
    pub fn insert(&mut self, note: u8, light: LightInfo) -> Option<LightInfo> {
        self.0.insert(note, light)
    }
}

impl FromIterator<(u8, LightInfo)> for PadLightingRequest {
    fn from_iter<T: IntoIterator<Item = (u8, LightInfo)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<(u8, LightInfo)> for PadLightingRequest {
    fn extend<T: IntoIterator<Item = (u8, LightInfo)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

/// Encodes all pads into a single palette lighting update.
///
/// The pads are encoded in ascending note order. An empty request
/// results in a well-formed message without any lighting data.
#[must_use]
pub(crate) fn encode_lighting_update(
    header: SysExHeader,
    request: &PadLightingRequest,
) -> SysExMessage {
    let message = SysExMessage::compose(header, |bytes| {
        // Flashing is the longest entry
        bytes.reserve(1 + request.len() * 4);
        bytes.push(LIGHTING_UPDATE_COMMAND);
        for (note, light) in request.iter() {
            light.encode(*note, bytes);
        }
    });
    log::trace!("Encoded lighting update: {message}");
    message
}
