use std::{fmt, str::FromStr};

use crate::error::PatchError;

/// Number of leading bytes of the target file that a patch replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchLength(usize);

impl PatchLength {
    /// One character per key and knob action.
    pub const KEYS: Self = Self(6);
    /// Characters followed by one modifier per key and knob action.
    pub const KEYS_AND_MODIFIERS: Self = Self(12);

    pub fn new(length: usize) -> Result<Self, PatchError> {
        match length {
            6 => Ok(Self::KEYS),
            12 => Ok(Self::KEYS_AND_MODIFIERS),
            _ => Err(PatchError::InvalidLength(length.to_string())),
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PatchLength {
    fn default() -> Self {
        Self::KEYS
    }
}

impl FromStr for PatchLength {
    type Err = PatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.trim()
            .parse::<usize>()
            .map_err(|_| PatchError::InvalidLength(s.to_string()))?;
        Self::new(length)
    }
}

impl fmt::Display for PatchLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
