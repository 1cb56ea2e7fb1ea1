// SPDX-FileCopyrightText: The padio authors
// SPDX-License-Identifier: MPL-2.0

//! Novation Launchpad X

use std::borrow::Cow;

use crate::{
    ButtonId, ControllerDefinition, DefinitionError, DeviceDescriptor, DeviceProfile,
    DiscoveryPattern, ModeCommand, ModeCommands, PortNames, SysExHeader, WindowsTemplate,
    DEFAULT_BASE_PROFILE,
};

pub const SYSEX_HEADER: SysExHeader = SysExHeader::new(&[0xf0, 0x00, 0x20, 0x29, 0x02, 0x0c]);

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
const MIDI_BUTTON_NOTE: u8 = 96;
const MIDI_BUTTON_CUSTOM: u8 = 97;
const MIDI_BUTTON_CAPTURE_MIDI: u8 = 98;

// Right column, top to bottom
const MIDI_BUTTON_SCENES: [u8; 8] = [89, 79, 69, 59, 49, 39, 29, 19];

const BUTTONS: &[(ButtonId, u8)] = &[
    (ButtonId::Shift, MIDI_BUTTON_CAPTURE_MIDI),
    (ButtonId::Left, MIDI_BUTTON_LEFT),
    (ButtonId::Right, MIDI_BUTTON_RIGHT),
    (ButtonId::Up, MIDI_BUTTON_UP),
    (ButtonId::Down, MIDI_BUTTON_DOWN),
    (ButtonId::Session, MIDI_BUTTON_SESSION),
    (ButtonId::Note, MIDI_BUTTON_NOTE),
    (ButtonId::Device, MIDI_BUTTON_CUSTOM),
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
        unique_id: Cow::Borrowed("CD196CCF-DF98-4AB0-9ABC-F0F29A60ACED"),
        vendor_name: Cow::Borrowed("Novation"),
        product_name: Cow::Borrowed("Launchpad X"),
        num_input_ports: 1,
        num_output_ports: 1,
    },
    // Neither a Pro model nor fader support
    capabilities: None,
    scene_buttons_use_cc: Some(true),
    port_names: PortNames {
        windows: Some(WindowsTemplate::new(
            "MIDIIN2 ({prefix}LPX MIDI)",
            "MIDIOUT2 ({prefix}LPX MIDI)",
        )),
        mac: Some(DiscoveryPattern::new(
            "Launchpad X LPX MIDI Out",
            "Launchpad X LPX MIDI In",
        )),
        linux: Some(DiscoveryPattern::new(
            "Launchpad X MIDI 2",
            "Launchpad X MIDI 2",
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
