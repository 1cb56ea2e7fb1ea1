// SPDX-FileCopyrightText: The padio authors
// SPDX-License-Identifier: MPL-2.0

use strum::{EnumCount, EnumIter, IntoStaticStr};

/// Host operating system, selects the MIDI port naming scheme.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumCount,
    IntoStaticStr,
    strum::Display,
)]
pub enum OperatingSystem {
    Windows,
    Mac,
    Linux,
    /// Any platform without a known naming scheme
    Other,
}

impl OperatingSystem {
    /// The operating system this crate has been compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::Mac
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_os = "linux")]
    fn current_linux() {
        assert_eq!(OperatingSystem::Linux, OperatingSystem::current());
    }

    #[test]
    fn display_names() {
        assert_eq!("Windows", OperatingSystem::Windows.to_string());
        assert_eq!("Mac", <&str>::from(OperatingSystem::Mac));
    }
}
