// SPDX-FileCopyrightText: The padio authors
// SPDX-License-Identifier: MPL-2.0

use crate::{MidiOutputConnection, OutputResult};

const MIDI_CMD_NOTE_ON: u8 = 0x90;

/// Note-on messages on this channel start blinking.
pub const BLINK_START_CHANNEL: u8 = 2;

/// Note-on messages on this channel stop blinking.
pub const BLINK_STOP_CHANNEL: u8 = 1;

/// Note-on message that starts or stops the native blinking of a pad.
///
/// A `blink_color` of 0 stops blinking. The blink rate is
/// controlled by the device and not affected by `fast`.
#[must_use]
pub const fn blink_state_message(note: u8, blink_color: u8, _fast: bool) -> [u8; 3] {
    let channel = if blink_color == 0 {
        BLINK_STOP_CHANNEL
    } else {
        BLINK_START_CHANNEL
    };
    [MIDI_CMD_NOTE_ON | channel, note, blink_color]
}

pub fn send_blink_state<C>(
    output: &mut C,
    note: u8,
    blink_color: u8,
    fast: bool,
) -> OutputResult<()>
where
    C: MidiOutputConnection + ?Sized,
{
    output.send_midi_output(&blink_state_message(note, blink_color, fast))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::midi::RecordedMidiOutput;

    #[test]
    fn stop_on_channel_1() {
        for fast in [false, true] {
            assert_eq!([0x91, 60, 0], blink_state_message(60, 0, fast));
        }
    }

    #[test]
    fn start_on_channel_2() {
        for fast in [false, true] {
            assert_eq!([0x92, 60, 7], blink_state_message(60, 7, fast));
        }
    }

    #[test]
    fn send_exactly_one_message() {
        let mut output = RecordedMidiOutput::default();
        send_blink_state(&mut output, 11, 7, true).unwrap();
        assert_eq!(vec![vec![0x92, 11, 7]], output.messages);
    }
}
