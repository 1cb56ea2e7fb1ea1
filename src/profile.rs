// SPDX-FileCopyrightText: The padio authors
// SPDX-License-Identifier: MPL-2.0

use thiserror::Error;

use crate::{
    blink, lighting, ButtonId, ButtonMap, Capabilities, ControlNumber, DeviceDescriptor,
    DiscoveryPair, DiscoveryPattern, MidiOutputConnection, Mode, ModeCommand, ModeCommands,
    OperatingSystem, OutputResult, PadLightingRequest, PortNames, SysExHeader, SysExMessage,
    WindowsTemplate,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("button {button_id} is mapped more than once")]
    DuplicateButtonId { button_id: ButtonId },
    #[error("buttons {first} and {second} share control number {control_number}")]
    DuplicateControlNumber {
        control_number: ControlNumber,
        first: ButtonId,
        second: ButtonId,
    },
    #[error("button {button_id} has invalid control number {control_number}")]
    InvalidControlNumber {
        button_id: ButtonId,
        control_number: ControlNumber,
    },
    #[error("Windows port names \"{input}\" and \"{output}\" lack the {{prefix}} placeholder")]
    IncompleteWindowsTemplate {
        input: &'static str,
        output: &'static str,
    },
}

/// Defaults shared by all devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseProfile {
    /// Generic port names, tried before any device specific names.
    pub discovery_pairs: &'static [DiscoveryPattern],
    pub capabilities: Capabilities,
    pub scene_buttons_use_cc: bool,
}

pub const DEFAULT_BASE_PROFILE: &BaseProfile = &BaseProfile {
    discovery_pairs: &[],
    capabilities: Capabilities {
        is_pro: false,
        has_fader_support: false,
    },
    scene_buttons_use_cc: false,
};

/// Static facts about a single device model.
///
/// Fields set to `None` are taken from the [`BaseProfile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceProfile {
    pub descriptor: DeviceDescriptor,
    pub capabilities: Option<Capabilities>,
    pub scene_buttons_use_cc: Option<bool>,
    pub port_names: PortNames,
    pub sysex_header: SysExHeader,
    pub mode_commands: ModeCommands,
    pub buttons: &'static [(ButtonId, u8)],
}

/// A [`DeviceProfile`] merged with a [`BaseProfile`].
///
/// Immutable after construction. Encoding is stateless and each
/// result only depends on the arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerDefinition {
    descriptor: DeviceDescriptor,
    capabilities: Capabilities,
    scene_buttons_use_cc: bool,
    base_discovery_pairs: &'static [DiscoveryPattern],
    port_names: PortNames,
    sysex_header: SysExHeader,
    mode_commands: ModeCommands,
    button_map: ButtonMap,
}

impl ControllerDefinition {
    pub fn new(base: &BaseProfile, device: &DeviceProfile) -> Result<Self, DefinitionError> {
        let BaseProfile {
            discovery_pairs: base_discovery_pairs,
            capabilities: base_capabilities,
            scene_buttons_use_cc: base_scene_buttons_use_cc,
        } = *base;
        let DeviceProfile {
            descriptor,
            capabilities,
            scene_buttons_use_cc,
            port_names,
            sysex_header,
            mode_commands,
            buttons,
        } = device;
        if let Some(template) = port_names.windows {
            if !template.is_complete() {
                let WindowsTemplate { input, output } = template;
                return Err(DefinitionError::IncompleteWindowsTemplate { input, output });
            }
        }
        let button_map = ButtonMap::try_from_entries(buttons)?;
        Ok(Self {
            descriptor: descriptor.clone(),
            capabilities: capabilities.unwrap_or(base_capabilities),
            scene_buttons_use_cc: scene_buttons_use_cc.unwrap_or(base_scene_buttons_use_cc),
            base_discovery_pairs,
            port_names: *port_names,
            sysex_header: *sysex_header,
            mode_commands: *mode_commands,
            button_map,
        })
    }

    #[must_use]
    pub const fn descriptor(&self) -> &DeviceDescriptor {
        &self.descriptor
    }

    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    #[must_use]
    pub const fn is_pro(&self) -> bool {
        self.capabilities.is_pro
    }

    #[must_use]
    pub const fn has_fader_support(&self) -> bool {
        self.capabilities.has_fader_support
    }

    /// Candidate port names, ordered by priority.
    ///
    /// Starts with the generic pairs of the base profile followed by
    /// the device specific pairs for `os`, if any.
    #[must_use]
    pub fn midi_discovery_pairs(&self, os: OperatingSystem) -> Vec<DiscoveryPair> {
        let mut pairs = self
            .base_discovery_pairs
            .iter()
            .copied()
            .map(DiscoveryPair::from)
            .collect::<Vec<_>>();
        self.port_names.extend_discovery_pairs(os, &mut pairs);
        log::debug!(
            "{num_pairs} MIDI discovery pair(s) for {device_name} on {os}",
            num_pairs = pairs.len(),
            device_name = self.descriptor.name(),
        );
        pairs
    }

    #[must_use]
    pub const fn button_ids(&self) -> &ButtonMap {
        &self.button_map
    }

    /// Scene buttons send and receive control change instead of note messages.
    #[must_use]
    pub const fn scene_buttons_use_cc(&self) -> bool {
        self.scene_buttons_use_cc
    }

    #[must_use]
    pub const fn sysex_header(&self) -> SysExHeader {
        self.sysex_header
    }

    #[must_use]
    pub fn mode_command(&self, mode: Mode) -> ModeCommand {
        self.mode_commands.command(mode)
    }

    #[must_use]
    pub fn standalone_mode_command(&self) -> ModeCommand {
        self.mode_command(Mode::Standalone)
    }

    #[must_use]
    pub fn program_mode_command(&self) -> ModeCommand {
        self.mode_command(Mode::Program)
    }

    #[must_use]
    pub fn fader_mode_command(&self) -> ModeCommand {
        self.mode_command(Mode::Fader)
    }

    #[must_use]
    pub fn pan_mode_command(&self) -> ModeCommand {
        self.mode_command(Mode::Pan)
    }

    /// The mode command framed as a SysEx message.
    #[must_use]
    pub fn mode_message(&self, mode: Mode) -> SysExMessage {
        SysExMessage::with_body(self.sysex_header, self.mode_command(mode).as_bytes())
    }

    pub fn send_mode<C>(&self, output: &mut C, mode: Mode) -> OutputResult<()>
    where
        C: MidiOutputConnection + ?Sized,
    {
        log::debug!(
            "Switching {device_name} to {mode} mode",
            device_name = self.descriptor.name()
        );
        output.send_midi_output(self.mode_message(mode).as_bytes())
    }

    /// Encodes the lights of all pads.
    ///
    /// Devices of this family accept all pads in a single message.
    /// Values are neither validated nor clamped.
    #[must_use]
    pub fn build_lighting_update(&self, request: &PadLightingRequest) -> Vec<SysExMessage> {
        vec![lighting::encode_lighting_update(self.sysex_header, request)]
    }

    pub fn send_lighting_update<C>(
        &self,
        output: &mut C,
        request: &PadLightingRequest,
    ) -> OutputResult<()>
    where
        C: MidiOutputConnection + ?Sized,
    {
        for message in self.build_lighting_update(request) {
            output.send_midi_output(message.as_bytes())?;
        }
        Ok(())
    }

    /// See [`crate::send_blink_state()`].
    pub fn send_blink_state<C>(
        &self,
        output: &mut C,
        note: u8,
        blink_color: u8,
        fast: bool,
    ) -> OutputResult<()>
    where
        C: MidiOutputConnection + ?Sized,
    {
        blink::send_blink_state(output, note, blink_color, fast)
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::midi::RecordedMidiOutput;

    const DEVICE: &DeviceProfile = &DeviceProfile {
        descriptor: DeviceDescriptor {
            unique_id: Cow::Borrowed("00000000-0000-0000-0000-000000000001"),
            vendor_name: Cow::Borrowed("Vendor"),
            product_name: Cow::Borrowed("Grid"),
            num_input_ports: 1,
            num_output_ports: 1,
        },
        capabilities: None,
        scene_buttons_use_cc: Some(true),
        port_names: PortNames {
            windows: None,
            mac: Some(DiscoveryPattern::new("Grid Out", "Grid In")),
            linux: None,
        },
        sysex_header: SysExHeader::new(&[0xf0, 0x01, 0x02]),
        mode_commands: ModeCommands {
            standalone: ModeCommand::new(&[0x10, 0x00]),
            program: ModeCommand::new(&[0x0e, 0x01]),
            fader: None,
            pan: None,
        },
        buttons: &[(ButtonId::Shift, 98), (ButtonId::Scene1, 89)],
    };

    const BASE: &BaseProfile = &BaseProfile {
        discovery_pairs: &[DiscoveryPattern::new("Generic In", "Generic Out")],
        capabilities: Capabilities {
            is_pro: true,
            has_fader_support: true,
        },
        scene_buttons_use_cc: false,
    };

    #[test]
    fn device_overrides_base() {
        let definition = ControllerDefinition::new(BASE, DEVICE).unwrap();
        assert!(definition.scene_buttons_use_cc());
        // Not overridden
        assert!(definition.is_pro());
        assert!(definition.has_fader_support());
    }

    #[test]
    fn base_discovery_pairs_come_first() {
        let definition = ControllerDefinition::new(BASE, DEVICE).unwrap();
        let pairs = definition.midi_discovery_pairs(OperatingSystem::Mac);
        assert_eq!(
            vec![
                DiscoveryPair::from(DiscoveryPattern::new("Generic In", "Generic Out")),
                DiscoveryPair::from(DiscoveryPattern::new("Grid Out", "Grid In")),
            ],
            pairs
        );
        assert_eq!(1, definition.midi_discovery_pairs(OperatingSystem::Other).len());
        // No device specific names on Linux
        assert_eq!(1, definition.midi_discovery_pairs(OperatingSystem::Linux).len());
    }

    #[test]
    fn reject_invalid_button_table() {
        let device = DeviceProfile {
            buttons: &[(ButtonId::Shift, 98), (ButtonId::Scene1, 98)],
            ..DEVICE.clone()
        };
        assert!(matches!(
            ControllerDefinition::new(DEFAULT_BASE_PROFILE, &device),
            Err(DefinitionError::DuplicateControlNumber { .. })
        ));
    }

    #[test]
    fn reject_windows_template_without_placeholder() {
        let device = DeviceProfile {
            port_names: PortNames {
                windows: Some(WindowsTemplate::new("MIDIIN2 (Grid)", "MIDIOUT2 ({prefix}Grid)")),
                ..DEVICE.port_names
            },
            ..DEVICE.clone()
        };
        assert_eq!(
            Err(DefinitionError::IncompleteWindowsTemplate {
                input: "MIDIIN2 (Grid)",
                output: "MIDIOUT2 ({prefix}Grid)",
            }),
            ControllerDefinition::new(DEFAULT_BASE_PROFILE, &device)
        );
        let device = DeviceProfile {
            port_names: PortNames {
                windows: Some(WindowsTemplate::new(
                    "MIDIIN2 ({prefix}Grid)",
                    "MIDIOUT2 ({prefix}Grid)",
                )),
                ..DEVICE.port_names
            },
            ..DEVICE.clone()
        };
        let definition = ControllerDefinition::new(DEFAULT_BASE_PROFILE, &device).unwrap();
        assert_eq!(
            20,
            definition
                .midi_discovery_pairs(OperatingSystem::Windows)
                .len()
        );
    }

    #[test]
    fn send_mode_message() {
        let definition = ControllerDefinition::new(DEFAULT_BASE_PROFILE, DEVICE).unwrap();
        let mut output = RecordedMidiOutput::default();
        definition.send_mode(&mut output, Mode::Pan).unwrap();
        definition.send_mode(&mut output, Mode::Standalone).unwrap();
        assert_eq!(
            vec![
                vec![0xf0, 0x01, 0x02, 0x0e, 0x01, 0xf7],
                vec![0xf0, 0x01, 0x02, 0x10, 0x00, 0xf7],
            ],
            output.messages
        );
    }

    #[test]
    fn send_lighting_update_and_blink_state() {
        let definition = ControllerDefinition::new(DEFAULT_BASE_PROFILE, DEVICE).unwrap();
        let mut output = RecordedMidiOutput::default();
        let request = std::iter::once((11, crate::LightInfo::new(5))).collect();
        definition
            .send_lighting_update(&mut output, &request)
            .unwrap();
        definition.send_blink_state(&mut output, 11, 0, false).unwrap();
        assert_eq!(
            vec![
                vec![0xf0, 0x01, 0x02, 0x03, 0x00, 0x0b, 0x05, 0xf7],
                vec![0x91, 0x0b, 0x00],
            ],
            output.messages
        );
    }
}
