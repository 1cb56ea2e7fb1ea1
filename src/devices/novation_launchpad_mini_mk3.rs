// SPDX-FileCopyrightText: The padio authors
// SPDX-License-Identifier: MPL-2.0

//! Novation Launchpad Mini MK3
//!
//! Shares the lighting protocol, the mode commands, and the button
//! layout with the Launchpad X. Only the product id in the SysEx
//! header and the port names differ.

use std::borrow::Cow;

use crate::{
    ButtonId, ControllerDefinition, DefinitionError, DeviceDescriptor, DeviceProfile,
    DiscoveryPattern, ModeCommand, ModeCommands, PortNames, SysExHeader, WindowsTemplate,
    DEFAULT_BASE_PROFILE,
};

pub const SYSEX_HEADER: SysExHeader = SysExHeader::new(&[0xf0, 0x00, 0x20, 0x29, 0x02, 0x0d]);

pub const MODE_COMMANDS: ModeCommands = ModeCommands {
    standalone: ModeCommand::new(&[0x10, 0x00]),
    program: ModeCommand::new(&[0x0e, 0x01]),
    fader: None,
    pan: None,
};

const MIDI_BUTTON_UP: u8 = 91;
const MIDI_BUTTON_DOWN: u8 = 92;
const MIDI_BUTTON_LEFT: u8 = 93;
const MIDI_BUTTON_RIGHT: u8 = 94;
const MIDI_BUTTON_SESSION: u8 = 95;
const MIDI_BUTTON_DRUMS: u8 = 96;
const MIDI_BUTTON_KEYS: u8 = 97;
const MIDI_BUTTON_USER: u8 = 98;

const MIDI_BUTTON_SCENES: [u8; 8] = [89, 79, 69, 59, 49, 39, 29, 19];

const BUTTONS: &[(ButtonId, u8)] = &[
    (ButtonId::Shift, MIDI_BUTTON_USER),
    (ButtonId::Left, MIDI_BUTTON_LEFT),
    (ButtonId::Right, MIDI_BUTTON_RIGHT),
    (ButtonId::Up, MIDI_BUTTON_UP),
    (ButtonId::Down, MIDI_BUTTON_DOWN),
    (ButtonId::Session, MIDI_BUTTON_SESSION),
    (ButtonId::Note, MIDI_BUTTON_DRUMS),
    (ButtonId::Device, MIDI_BUTTON_KEYS),
    (ButtonId::Scene1, MIDI_BUTTON_SCENES[0]),
    (ButtonId::Scene2, MIDI_BUTTON_SCENES[1]),
    (ButtonId::Scene3, MIDI_BUTTON_SCENES[2]),
    (ButtonId::Scene4, MIDI_BUTTON_SCENES[3]),
    (ButtonId::Scene5, MIDI_BUTTON_SCENES[4]),
    (ButtonId::Scene6, MIDI_BUTTON_SCENES[5]),
    (ButtonId::Scene7, MIDI_BUTTON_SCENES[6]),
    (ButtonId::Scene8, MIDI_BUTTON_SCENES[7]),
];

pub const DEVICE_PROFILE: &DeviceProfile = &DeviceProfile {
    descriptor: DeviceDescriptor {
        unique_id: Cow::Borrowed("A7C6D1B2-3F45-4E8A-9C21-5D0B7E6F4A13"),
        vendor_name: Cow::Borrowed("Novation"),
        product_name: Cow::Borrowed("Launchpad Mini MK3"),
        num_input_ports: 1,
        num_output_ports: 1,
    },
    capabilities: None,
    scene_buttons_use_cc: Some(true),
    port_names: PortNames {
        windows: Some(WindowsTemplate::new(
            "MIDIIN2 ({prefix}LPMiniMK3 MIDI)",
            "MIDIOUT2 ({prefix}LPMiniMK3 MIDI)",
        )),
        mac: Some(DiscoveryPattern::new(
            "Launchpad Mini MK3 LPMiniMK3 MIDI Out",
            "Launchpad Mini MK3 LPMiniMK3 MIDI In",
        )),
        linux: Some(DiscoveryPattern::new(
            "Launchpad Mini MK3 MIDI 2",
            "Launchpad Mini MK3 MIDI 2",
        )),
    },
    sysex_header: SYSEX_HEADER,
    mode_commands: MODE_COMMANDS,
    buttons: BUTTONS,
};

pub const DEVICE_DESCRIPTOR: &DeviceDescriptor = &DEVICE_PROFILE.descriptor;

pub fn new_controller_definition() -> Result<ControllerDefinition, DefinitionError> {
    ControllerDefinition::new(DEFAULT_BASE_PROFILE, DEVICE_PROFILE)
}
