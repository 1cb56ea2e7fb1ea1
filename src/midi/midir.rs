// SPDX-FileCopyrightText: The padio authors
// SPDX-License-Identifier: MPL-2.0

use midir::{
    ConnectError, Ignore, InitError, MidiInput, MidiInputPort, MidiOutput, MidiOutputConnection,
    MidiOutputPort, SendError,
};
use thiserror::Error;

use crate::{select_ports, ControllerDefinition, OperatingSystem, OutputError, OutputResult};

#[derive(Debug, Error)]
pub enum MidirPortError {
    #[error(transparent)]
    Init(#[from] InitError),
    #[error(transparent)]
    ConnectOutput(#[from] ConnectError<MidiOutput>),
}

impl From<SendError> for OutputError {
    fn from(err: SendError) -> Self {
        OutputError::Send {
            msg: err.to_string().into(),
        }
    }
}

impl super::MidiOutputConnection for MidiOutputConnection {
    fn send_midi_output(&mut self, output: &[u8]) -> OutputResult<()> {
        self.send(output).map_err(Into::into)
    }
}

/// Input and output port of a detected device.
#[allow(missing_debug_implementations)]
pub struct MidirPorts {
    pub input_port_name: String,
    pub input_port: MidiInputPort,
    pub output_port_name: String,
    pub output_port: MidiOutputPort,
}

impl MidirPorts {
    /// Opens a new connection to the output port.
    pub fn connect_output(&self) -> Result<MidiOutputConnection, MidirPortError> {
        let port_name = &self.output_port_name;
        let output = MidiOutput::new(port_name)?;
        let connection = output.connect(&self.output_port, port_name)?;
        log::info!("Connected MIDI output port \"{port_name}\"");
        Ok(connection)
    }
}

/// Detects devices among the MIDI ports provided by [`midir`].
#[allow(missing_debug_implementations)]
pub struct MidirDeviceManager {
    input: MidiInput,
    output: MidiOutput,
}

impl MidirDeviceManager {
    pub fn new() -> Result<Self, InitError> {
        let mut input = MidiInput::new("input port watcher")?;
        input.ignore(Ignore::None);
        let output = MidiOutput::new("output port watcher")?;
        Ok(Self { input, output })
    }

    fn input_ports(&self) -> Vec<(String, MidiInputPort)> {
        self.input
            .ports()
            .into_iter()
            .filter_map(|port| {
                let port_name = self.input.port_name(&port).ok()?;
                Some((port_name, port))
            })
            .collect()
    }

    fn output_ports(&self) -> Vec<(String, MidiOutputPort)> {
        self.output
            .ports()
            .into_iter()
            .filter_map(|port| {
                let port_name = self.output.port_name(&port).ok()?;
                Some((port_name, port))
            })
            .collect()
    }

    /// Selects the ports of a device by its discovery pairs.
    #[must_use]
    pub fn detect_ports(
        &self,
        definition: &ControllerDefinition,
        os: OperatingSystem,
    ) -> Option<MidirPorts> {
        let device_name = definition.descriptor().name();
        let mut input_ports = self.input_ports();
        let mut output_ports = self.output_ports();
        let input_port_names = input_ports
            .iter()
            .map(|(port_name, _)| port_name.as_str())
            .collect::<Vec<_>>();
        let output_port_names = output_ports
            .iter()
            .map(|(port_name, _)| port_name.as_str())
            .collect::<Vec<_>>();
        let pairs = definition.midi_discovery_pairs(os);
        let Some(selection) = select_ports(&pairs, &input_port_names, &output_port_names) else {
            log::debug!("No MIDI ports found for {device_name} on {os}");
            return None;
        };
        let (input_port_name, input_port) = input_ports.swap_remove(selection.input_index);
        let (output_port_name, output_port) = output_ports.swap_remove(selection.output_index);
        log::info!(
            "Found {device_name} (input port: \"{input_port_name}\", output port: \
             \"{output_port_name}\")"
        );
        Some(MidirPorts {
            input_port_name,
            input_port,
            output_port_name,
            output_port,
        })
    }
}
