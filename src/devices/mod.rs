// SPDX-FileCopyrightText: The padio authors
// SPDX-License-Identifier: MPL-2.0

use crate::{ControllerDefinition, DefinitionError, DeviceProfile, DEFAULT_BASE_PROFILE};

#[cfg(feature = "novation-launchpad-mini-mk3")]
pub mod novation_launchpad_mini_mk3;

#[cfg(feature = "novation-launchpad-x")]
pub mod novation_launchpad_x;


/// Profiles of all supported devices for auto-detection.
pub const DEVICE_PROFILES: &[&DeviceProfile] = &[
    #[cfg(feature = "novation-launchpad-x")]
    novation_launchpad_x::DEVICE_PROFILE,
    #[cfg(feature = "novation-launchpad-mini-mk3")]
    novation_launchpad_mini_mk3::DEVICE_PROFILE,
];

#[must_use]
pub fn find_device_profile(unique_id: &str) -> Option<&'static DeviceProfile> {
    DEVICE_PROFILES
        .iter()
        .copied()
        .find(|profile| profile.descriptor.unique_id.eq_ignore_ascii_case(unique_id))
}

/// Merges all supported device profiles with the default base profile.
pub fn new_controller_definitions() -> Result<Vec<ControllerDefinition>, DefinitionError> {
    DEVICE_PROFILES
        .iter()
        .map(|device| ControllerDefinition::new(DEFAULT_BASE_PROFILE, device))
        .collect()
}
