// SPDX-FileCopyrightText: The padio authors
// SPDX-License-Identifier: MPL-2.0

use crate::{OutputError, OutputResult};

#[cfg(feature = "midir")]
mod midir;
#[cfg(feature = "midir")]
pub use self::midir::{MidirDeviceManager, MidirPortError, MidirPorts};

/// Transport for outgoing MIDI messages.
pub trait MidiOutputConnection {
    fn send_midi_output(&mut self, output: &[u8]) -> OutputResult<()>;
}

impl<C> MidiOutputConnection for &mut C
where
    C: MidiOutputConnection + ?Sized,
{
    fn send_midi_output(&mut self, output: &[u8]) -> OutputResult<()> {
        (**self).send_midi_output(output)
    }
}

impl<C> MidiOutputConnection for Box<C>
where
    C: MidiOutputConnection + ?Sized,
{
    fn send_midi_output(&mut self, output: &[u8]) -> OutputResult<()> {
        (**self).send_midi_output(output)
    }
}

/// A connection that might have been closed in the meantime.
impl<C> MidiOutputConnection for Option<C>
where
    C: MidiOutputConnection,
{
    fn send_midi_output(&mut self, output: &[u8]) -> OutputResult<()> {
        let Some(connection) = self else {
            log::debug!("Discarding MIDI output while disconnected");
            return Err(OutputError::Disconnected);
        };
        connection.send_midi_output(output)
    }
}

/// Collects all sent messages.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordedMidiOutput {
    pub(crate) messages: Vec<Vec<u8>>,
}

#[cfg(test)]
impl MidiOutputConnection for RecordedMidiOutput {
    fn send_midi_output(&mut self, output: &[u8]) -> OutputResult<()> {
        self.messages.push(output.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_through_boxed_connection() {
        let mut output = Box::new(RecordedMidiOutput::default());
        crate::send_blink_state(&mut output, 60, 7, false).unwrap();
        assert_eq!(vec![vec![0x92, 60, 7]], output.messages);
    }

    #[test]
    fn send_while_disconnected() {
        let mut output = Some(RecordedMidiOutput::default());
        output.send_midi_output(&[0x92, 60, 7]).unwrap();
        assert_eq!(
            vec![vec![0x92, 60, 7]],
            output.take().unwrap().messages
        );
        assert!(matches!(
            output.send_midi_output(&[0x91, 60, 0]),
            Err(OutputError::Disconnected)
        ));
    }
}
