// SPDX-FileCopyrightText: The padio authors
// SPDX-License-Identifier: MPL-2.0

use std::collections::{btree_map::Entry, BTreeMap};

use derive_more::{Display, From};
use strum::{EnumCount, EnumIter, IntoStaticStr};

use crate::DefinitionError;

/// Abstract role of a named button.
///
/// Not every device provides every role. Roles that a device
/// doesn't support are absent from its [`ButtonMap`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumCount,
    IntoStaticStr,
    strum::Display,
)]
pub enum ButtonId {
    Shift,
    Left,
    Right,
    Up,
    Down,
    Session,
    Note,
    Device,
    Play,
    Record,
    Mute,
    Solo,
    Volume,
    Pan,
    Sends,
    Delete,
    Duplicate,
    Undo,
    Scene1,
    Scene2,
    Scene3,
    Scene4,
    Scene5,
    Scene6,
    Scene7,
    Scene8,
}

impl ButtonId {
    /// The scene selector buttons, top to bottom.
    pub const SCENES: [Self; 8] = [
        Self::Scene1,
        Self::Scene2,
        Self::Scene3,
        Self::Scene4,
        Self::Scene5,
        Self::Scene6,
        Self::Scene7,
        Self::Scene8,
    ];

    #[must_use]
    pub const fn is_scene(self) -> bool {
        matches!(
            self,
            Self::Scene1
                | Self::Scene2
                | Self::Scene3
                | Self::Scene4
                | Self::Scene5
                | Self::Scene6
                | Self::Scene7
                | Self::Scene8
        )
    }
}

/// MIDI control change or note number of a physical button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From)]
#[display("{_0}")]
pub struct ControlNumber(u8);

impl ControlNumber {
    pub const MAX: Self = Self(127);

    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 <= Self::MAX.0
    }
}

/// Injective mapping of button roles onto control numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonMap {
    control_numbers: BTreeMap<ButtonId, ControlNumber>,
    button_ids: BTreeMap<ControlNumber, ButtonId>,
}

impl ButtonMap {
    /// Validates and indexes a static button table.
    ///
    /// Each role may appear only once, and no two roles may share
    /// a control number.
    pub fn try_from_entries(entries: &[(ButtonId, u8)]) -> Result<Self, DefinitionError> {
        let mut control_numbers = BTreeMap::new();
        let mut button_ids = BTreeMap::new();
        for &(button_id, value) in entries {
            let control_number = ControlNumber::new(value);
            if !control_number.is_valid() {
                return Err(DefinitionError::InvalidControlNumber {
                    button_id,
                    control_number,
                });
            }
            if control_numbers.insert(button_id, control_number).is_some() {
                return Err(DefinitionError::DuplicateButtonId { button_id });
            }
            match button_ids.entry(control_number) {
                Entry::Vacant(vacant) => {
                    vacant.insert(button_id);
                }
                Entry::Occupied(occupied) => {
                    return Err(DefinitionError::DuplicateControlNumber {
                        control_number,
                        first: *occupied.get(),
                        second: button_id,
                    });
                }
            }
        }
        debug_assert_eq!(control_numbers.len(), button_ids.len());
        Ok(Self {
            control_numbers,
            button_ids,
        })
    }

    /// Control number of a role, `None` if the device has no such button.
    #[must_use]
    pub fn control_number(&self, button_id: ButtonId) -> Option<ControlNumber> {
        self.control_numbers.get(&button_id).copied()
    }

    /// Reverse lookup for routing received messages.
    #[must_use]
    pub fn button_id(&self, control_number: ControlNumber) -> Option<ButtonId> {
        self.button_ids.get(&control_number).copied()
    }

    #[must_use]
    pub fn contains(&self, button_id: ButtonId) -> bool {
        self.control_numbers.contains_key(&button_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.control_numbers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.control_numbers.is_empty()
    }

    /// All entries ordered by role.
    pub fn iter(&self) -> impl Iterator<Item = (ButtonId, ControlNumber)> + '_ {
        self.control_numbers
            .iter()
            .map(|(button_id, control_number)| (*button_id, *control_number))
    }
}
