// SPDX-FileCopyrightText: The padio authors
// SPDX-License-Identifier: MPL-2.0

use super::*;

const HEADER: SysExHeader = SysExHeader::new(&[0xf0, 0x00, 0x20, 0x29, 0x02, 0x0c]);

fn encode(request: &PadLightingRequest) -> String {
    encode_lighting_update(HEADER, request).to_string()
}

fn single(note: u8, light: LightInfo) -> PadLightingRequest {
    std::iter::once((note, light)).collect()
}

#[test]
fn empty_request() {
    assert_eq!(
        "F0 00 20 29 02 0C 03 F7",
        encode(&PadLightingRequest::new())
    );
}

#[test]
fn static_color() {
    assert_eq!(
        "F0 00 20 29 02 0C 03 00 3C 05 F7",
        encode(&single(60, LightInfo::new(5)))
    );
}

#[test]
fn flashing_sends_blink_color_before_color() {
    assert_eq!(
        "F0 00 20 29 02 0C 03 01 3C 0A 05 F7",
        encode(&single(60, LightInfo::blinking(5, 10, true)))
    );
}

#[test]
fn pulsing_sends_only_color() {
    assert_eq!(
        "F0 00 20 29 02 0C 03 02 3C 05 F7",
        encode(&single(60, LightInfo::blinking(5, 10, false)))
    );
}

#[test]
fn fast_without_blink_color_is_static() {
    let light = LightInfo::blinking(5, 0, true);
    assert_eq!(LightingMode::Static, light.mode());
    assert_eq!(
        "F0 00 20 29 02 0C 03 00 3C 05 F7",
        encode(&single(60, light))
    );
}

#[test]
fn lighting_modes_of_request() {
    let request = [
        (11, LightInfo::new(5)),
        (12, LightInfo::blinking(5, 10, true)),
        (13, LightInfo::blinking(5, 10, false)),
    ]
    .into_iter()
    .collect::<PadLightingRequest>();
    assert_eq!(
        vec![
            LightingMode::Static,
            LightingMode::Flashing,
            LightingMode::Pulsing
        ],
        request.values().copied().map(LightInfo::mode).collect::<Vec<_>>()
    );
}

#[test]
fn pads_are_encoded_in_ascending_note_order() {
    let request: PadLightingRequest = [
        (81, LightInfo::blinking(21, 5, false)),
        (11, LightInfo::new(3)),
        (45, LightInfo::blinking(1, 2, true)),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        "F0 00 20 29 02 0C 03 00 0B 03 01 2D 02 01 02 51 15 F7",
        encode(&request)
    );
}

#[test]
fn encoding_is_deterministic() {
    let mut request = PadLightingRequest::new();
    for note in (11..=88).rev() {
        request.insert(note, LightInfo::blinking(note % 8, note % 3, note % 2 == 0));
    }
    let first = encode_lighting_update(HEADER, &request);
    let second = encode_lighting_update(HEADER, &request);
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn later_insert_replaces_light() {
    let mut request = PadLightingRequest::new();
    assert_eq!(None, request.insert(60, LightInfo::new(5)));
    assert_eq!(Some(LightInfo::new(5)), request.insert(60, LightInfo::new(6)));
    assert_eq!(1, request.len());
    assert_eq!(
        "F0 00 20 29 02 0C 03 00 3C 06 F7",
        encode(&request)
    );
}

#[test]
fn out_of_range_values_are_not_clamped() {
    assert_eq!(
        "F0 00 20 29 02 0C 03 00 80 FF F7",
        encode(&single(128, LightInfo::new(255)))
    );
}
