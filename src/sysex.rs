// SPDX-FileCopyrightText: The padio authors
// SPDX-License-Identifier: MPL-2.0

//! System Exclusive framing and the hex text representation of MIDI bytes.

use std::fmt;

use thiserror::Error;

pub const SYSEX_START: u8 = 0xf0;
pub const SYSEX_END: u8 = 0xf7;

/// Writes bytes as two-digit uppercase hex octets separated by single spaces.
pub fn write_hex(f: &mut impl fmt::Write, bytes: &[u8]) -> fmt::Result {
    let mut bytes = bytes.iter();
    let Some(first) = bytes.next() else {
        return Ok(());
    };
    write!(f, "{first:02X}")?;
    for byte in bytes {
        write!(f, " {byte:02X}")?;
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHexError {
    #[error("invalid hex octet \"{octet}\" at position {position}")]
    InvalidOctet { position: usize, octet: String },
}

/// Parses whitespace-separated hex octets, e.g. `"F0 00 20 29 02 0C"`.
///
/// Case is ignored. Each octet must consist of exactly two hex digits.
pub fn parse_hex(text: &str) -> Result<Vec<u8>, ParseHexError> {
    text.split_whitespace()
        .enumerate()
        .map(|(position, octet)| {
            let invalid = || ParseHexError::InvalidOctet {
                position,
                octet: octet.to_owned(),
            };
            // Rejects signs that from_str_radix would accept
            if octet.len() != 2 || !octet.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            u8::from_str_radix(octet, 16).map_err(|_| invalid())
        })
        .collect()
}

/// Manufacturer and product prefix of every SysEx message
/// sent to a device, including the leading [`SYSEX_START`] byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SysExHeader(&'static [u8]);

impl SysExHeader {
    #[must_use]
    pub const fn new(bytes: &'static [u8]) -> Self {
        debug_assert!(!bytes.is_empty() && bytes[0] == SYSEX_START);
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &'static [u8] {
        self.0
    }
}

impl fmt::Display for SysExHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, self.0)
    }
}

/// A complete, immutable SysEx message.
///
/// Consists of the [`SysExHeader`], the command and data bytes,
/// and the terminating [`SYSEX_END`] byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SysExMessage {
    bytes: Vec<u8>,
}

impl SysExMessage {
    /// Frames the body that is written by the closure.
    #[must_use]
    pub fn compose(header: SysExHeader, write_body: impl FnOnce(&mut Vec<u8>)) -> Self {
        let mut bytes = header.as_bytes().to_vec();
        write_body(&mut bytes);
        bytes.push(SYSEX_END);
        Self { bytes }
    }

    /// Frames a fixed body, e.g. a mode command.
    #[must_use]
    pub fn with_body(header: SysExHeader, body: &[u8]) -> Self {
        Self::compose(header, |bytes| bytes.extend_from_slice(body))
    }

    /// The raw bytes on the wire.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl fmt::Display for SysExMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.bytes)
    }
}

impl AsRef<[u8]> for SysExMessage {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: SysExHeader = SysExHeader::new(&[0xf0, 0x00, 0x20, 0x29, 0x02, 0x0c]);

    #[test]
    fn header_as_hex() {
        assert_eq!("F0 00 20 29 02 0C", HEADER.to_string());
    }

    #[test]
    fn message_is_framed() {
        let message = SysExMessage::with_body(HEADER, &[0x0e, 0x01]);
        assert_eq!("F0 00 20 29 02 0C 0E 01 F7", message.to_string());
        assert_eq!(Some(&SYSEX_START), message.as_bytes().first());
        assert_eq!(Some(&SYSEX_END), message.as_bytes().last());
    }

    #[test]
    fn hex_text_converts_back_to_bytes() {
        let message = SysExMessage::with_body(HEADER, &[0x03, 0x00, 0x3c, 0x05]);
        assert_eq!(
            message.as_bytes(),
            parse_hex(&message.to_string()).unwrap().as_slice()
        );
        assert_eq!(vec![0xab, 0x0c], parse_hex(" ab\t0C ").unwrap());
        assert!(parse_hex("").unwrap().is_empty());
    }

    #[test]
    fn parse_hex_rejects_malformed_octets() {
        assert_eq!(
            Err(ParseHexError::InvalidOctet {
                position: 1,
                octet: "0".to_owned()
            }),
            parse_hex("F0 0 F7")
        );
        assert!(parse_hex("F0 GG").is_err());
        assert!(parse_hex("F000").is_err());
    }
}
