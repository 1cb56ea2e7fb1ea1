// SPDX-FileCopyrightText: The padio authors
// SPDX-License-Identifier: MPL-2.0

//! Candidate MIDI port names for auto-detecting a device.

use std::borrow::Cow;

use crate::OperatingSystem;


/// Substituted by the device index prefix in [`WindowsTemplate`]s.
pub const WINDOWS_PREFIX_PLACEHOLDER: &str = "{prefix}";

/// Windows numbers the ports of identical devices, starting
/// with the second device: `MIDIIN2 (2- LPX MIDI)`.
const MAX_WINDOWS_DEVICE_INDEX: usize = 20;

/// Literal input and output port names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryPattern {
    pub input: &'static str,
    pub output: &'static str,
}

impl DiscoveryPattern {
    #[must_use]
    pub const fn new(input: &'static str, output: &'static str) -> Self {
        Self { input, output }
    }
}

/// Input and output port names containing the [`WINDOWS_PREFIX_PLACEHOLDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowsTemplate {
    pub input: &'static str,
    pub output: &'static str,
}

impl WindowsTemplate {
    #[must_use]
    pub const fn new(input: &'static str, output: &'static str) -> Self {
        Self { input, output }
    }

    /// Both the input and the output name contain the placeholder.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.input.contains(WINDOWS_PREFIX_PLACEHOLDER)
            && self.output.contains(WINDOWS_PREFIX_PLACEHOLDER)
    }

    #[must_use]
    pub fn substitute(&self, prefix: &str) -> DiscoveryPair {
        let Self { input, output } = self;
        DiscoveryPair {
            input_pattern: input.replace(WINDOWS_PREFIX_PLACEHOLDER, prefix).into(),
            output_pattern: output.replace(WINDOWS_PREFIX_PLACEHOLDER, prefix).into(),
        }
    }
}

/// A candidate pair of port names, consulted in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryPair {
    pub input_pattern: Cow<'static, str>,
    pub output_pattern: Cow<'static, str>,
}

impl From<DiscoveryPattern> for DiscoveryPair {
    fn from(from: DiscoveryPattern) -> Self {
        let DiscoveryPattern { input, output } = from;
        Self {
            input_pattern: Cow::Borrowed(input),
            output_pattern: Cow::Borrowed(output),
        }
    }
}

/// Expands a template for every device index prefix, unnumbered first.
///
/// A template without any placeholder yields a single literal pair.
pub fn expand_windows_template(
    template: WindowsTemplate,
) -> impl Iterator<Item = DiscoveryPair> {
    let num_prefixes = if template.input.contains(WINDOWS_PREFIX_PLACEHOLDER)
        || template.output.contains(WINDOWS_PREFIX_PLACEHOLDER)
    {
        MAX_WINDOWS_DEVICE_INDEX
    } else {
        1
    };
    std::iter::once(String::new())
        .chain((2..=MAX_WINDOWS_DEVICE_INDEX).map(|index| format!("{index}- ")))
        .take(num_prefixes)
        .map(move |prefix| template.substitute(&prefix))
}

/// Device specific port names per operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortNames {
    pub windows: Option<WindowsTemplate>,
    pub mac: Option<DiscoveryPattern>,
    pub linux: Option<DiscoveryPattern>,
}

impl PortNames {
    /// Appends the device specific pairs for `os`.
    ///
    /// Nothing is appended for unsupported operating systems.
    pub fn extend_discovery_pairs(&self, os: OperatingSystem, pairs: &mut Vec<DiscoveryPair>) {
        match os {
            OperatingSystem::Windows => {
                if let Some(template) = self.windows {
                    pairs.extend(expand_windows_template(template));
                }
            }
            OperatingSystem::Mac => {
                pairs.extend(self.mac.map(DiscoveryPair::from));
            }
            OperatingSystem::Linux => {
                pairs.extend(self.linux.map(DiscoveryPair::from));
            }
            OperatingSystem::Other => {
                log::debug!("No device specific MIDI port names for {os}");
            }
        }
    }
}

/// Indices of the selected ports and the pair that matched them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortSelection {
    pub pair_index: usize,
    pub input_index: usize,
    pub output_index: usize,
}

fn find_unique<S: AsRef<str>>(port_names: &[S], pattern: &str) -> Option<usize> {
    let mut matches = port_names
        .iter()
        .enumerate()
        .filter(|(_, port_name)| port_name.as_ref() == pattern)
        .map(|(index, _)| index);
    let first = matches.next()?;
    if matches.next().is_some() {
        log::debug!("Ambiguous MIDI port name \"{pattern}\"");
        return None;
    }
    Some(first)
}

/// Selects the ports of the first pair whose patterns each match
/// exactly one of the open ports.
#[must_use]
pub fn select_ports<I, O>(
    pairs: &[DiscoveryPair],
    input_port_names: &[I],
    output_port_names: &[O],
) -> Option<PortSelection>
where
    I: AsRef<str>,
    O: AsRef<str>,
{
    pairs.iter().enumerate().find_map(|(pair_index, pair)| {
        let input_index = find_unique(input_port_names, &pair.input_pattern)?;
        let output_index = find_unique(output_port_names, &pair.output_pattern)?;
        log::debug!(
            "Selected MIDI ports \"{input}\" and \"{output}\"",
            input = pair.input_pattern,
            output = pair.output_pattern
        );
        Some(PortSelection {
            pair_index,
            input_index,
            output_index,
        })
    })
}
