//! Musical key formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const PITCH_CLASS_NAMES: [&str; 12] = [
    "C", "C♯/D♭", "D", "D♯/E♭", "E", "F", "F♯/G♭", "G", "G♯/A♭", "A", "A♯/B♭", "B",
];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Pitch class {0} is outside 0..=11")]
pub struct InvalidPitchClass(pub i32);

/// A pitch class in standard integer notation (0 = C, 11 = B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct PitchClass(u8);

impl PitchClass {
    pub fn new(value: i32) -> Result<Self, InvalidPitchClass> {
        if (0..12).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(InvalidPitchClass(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for PitchClass {
    type Error = InvalidPitchClass;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PitchClass> for i32 {
    fn from(pitch_class: PitchClass) -> Self {
        pitch_class.0 as i32
    }
}

/// Human-readable key name; black keys use both enharmonic spellings.
pub fn pitch_class_to_key(pitch_class: PitchClass) -> &'static str {
    PITCH_CLASS_NAMES[pitch_class.0 as usize]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Major,
    Minor,
}

impl Mode {
    /// Catalog mode flag: 1 is major, anything else minor.
    pub fn from_flag(flag: i32) -> Self {
        if flag == 1 {
            Mode::Major
        } else {
            Mode::Minor
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Major => "Major",
            Mode::Minor => "Minor",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
