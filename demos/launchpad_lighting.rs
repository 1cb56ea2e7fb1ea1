// SPDX-FileCopyrightText: The padio authors
// SPDX-License-Identifier: MPL-2.0

use std::{thread::sleep, time::Duration};

use padio::{
    devices::novation_launchpad_x, midi::MidirDeviceManager, LightInfo, Mode, OperatingSystem,
    PadLightingRequest,
};

const COLOR_RED: u8 = 5;
const COLOR_GREEN: u8 = 21;
const COLOR_BLUE: u8 = 45;

fn main() {
    pretty_env_logger::init();
    match run() {
        Ok(()) => (),
        Err(err) => eprintln!("Error: {err}"),
    }
}

fn run() -> anyhow::Result<()> {
    let definition = novation_launchpad_x::new_controller_definition()?;
    let device_name = definition.descriptor().name();
    let device_manager = MidirDeviceManager::new()?;
    let Some(ports) = device_manager.detect_ports(&definition, OperatingSystem::current()) else {
        anyhow::bail!("{device_name} not found");
    };
    let mut output = ports
        .connect_output()
        .map_err(|err| anyhow::anyhow!("{err}"))?;
    definition.send_mode(&mut output, Mode::Program)?;

    // Bottom row: static, flashing, and pulsing lights
    let request = [
        (11, LightInfo::new(COLOR_RED)),
        (12, LightInfo::blinking(COLOR_GREEN, COLOR_BLUE, true)),
        (13, LightInfo::blinking(COLOR_BLUE, COLOR_BLUE, false)),
    ]
    .into_iter()
    .collect::<PadLightingRequest>();
    definition.send_lighting_update(&mut output, &request)?;
    definition.send_blink_state(&mut output, 18, COLOR_RED, false)?;

    println!("{device_name}: Lighting pads for 5 seconds...");
    sleep(Duration::from_secs(5));

    definition.send_blink_state(&mut output, 18, 0, false)?;
    definition.send_mode(&mut output, Mode::Standalone)?;
    Ok(())
}
