// SPDX-FileCopyrightText: The padio authors
// SPDX-License-Identifier: MPL-2.0

#![allow(rustdoc::invalid_rust_codeblocks)]
#![doc = include_str!("../README.md")]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(unreachable_pub)]
#![warn(unsafe_code)]
#![warn(clippy::pedantic)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(rustdoc::broken_intra_doc_links)]
// Repetitions of module/type names occur frequently when using many
// modules for keeping the size of the source files handy. Often
// types have the same name as their parent module.
#![allow(clippy::module_name_repetitions)]
// Repeating the type name in `..Default::default()` expressions
// is not needed since the context is obvious.
#![allow(clippy::default_trait_access)]

mod blink;
pub use self::blink::{
    blink_state_message, send_blink_state, BLINK_START_CHANNEL, BLINK_STOP_CHANNEL,
};

mod buttons;
pub use self::buttons::{ButtonId, ButtonMap, ControlNumber};

mod device;
pub use self::device::{Capabilities, DeviceDescriptor};

pub mod devices;

mod discovery;
pub use self::discovery::{
    expand_windows_template, select_ports, DiscoveryPair, DiscoveryPattern, PortNames,
    PortSelection, WindowsTemplate, WINDOWS_PREFIX_PLACEHOLDER,
};

mod lighting;
pub use self::lighting::{LightInfo, LightingMode, PadLightingRequest, LIGHTING_UPDATE_COMMAND};

pub mod midi;
pub use self::midi::MidiOutputConnection;

mod modes;
pub use self::modes::{Mode, ModeCommand, ModeCommands};

mod os;
pub use self::os::OperatingSystem;

mod output;
pub use self::output::{OutputError, OutputResult};

mod profile;
pub use self::profile::{
    BaseProfile, ControllerDefinition, DefinitionError, DeviceProfile, DEFAULT_BASE_PROFILE,
};

mod sysex;
pub use self::sysex::{
    parse_hex, write_hex, ParseHexError, SysExHeader, SysExMessage, SYSEX_END, SYSEX_START,
};
