// SPDX-FileCopyrightText: The padio authors
// SPDX-License-Identifier: MPL-2.0

use std::borrow::Cow;

/// Static identity of a controller model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDescriptor {
    /// Opaque, globally unique identifier (UUID)
    pub unique_id: Cow<'static, str>,
    pub vendor_name: Cow<'static, str>,
    pub product_name: Cow<'static, str>,
    pub num_input_ports: u8,
    pub num_output_ports: u8,
}

impl DeviceDescriptor {
    #[must_use]
    pub fn name(&self) -> Cow<'static, str> {
        let Self {
            vendor_name,
            product_name,
            ..
        } = self;
        debug_assert!(!product_name.is_empty());
        if vendor_name.is_empty() {
            product_name.clone()
        } else {
            format!("{vendor_name} {product_name}").into()
        }
    }
}

/// Optional features of a controller model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Pro models provide additional buttons and print/shift layers.
    pub is_pro: bool,

    /// The firmware offers fader and pan overlays on the pad grid.
    pub has_fader_support: bool,
}
