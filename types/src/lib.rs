//! Core domain types for Tumble.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

use std::fmt;
use thiserror::Error;

// ============================================================================
// Die Faces
// ============================================================================

/// A face of a six-sided die, guaranteed to be in `[1, 6]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Face(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("die face must be in 1..=6, got {0}")]
pub struct FaceError(pub u8);

impl Face {
    pub const ONE: Face = Face(1);
    pub const TWO: Face = Face(2);
    pub const THREE: Face = Face(3);
    pub const FOUR: Face = Face(4);
    pub const FIVE: Face = Face(5);
    pub const SIX: Face = Face(6);

    /// All six faces in pip order.
    ///
    /// Indexing into this array is how uniform draws and animation frames
    /// obtain a `Face` without a fallible constructor in the hot path.
    pub const ALL: [Face; 6] = [
        Face::ONE,
        Face::TWO,
        Face::THREE,
        Face::FOUR,
        Face::FIVE,
        Face::SIX,
    ];

    pub const fn new(value: u8) -> Result<Self, FaceError> {
        if matches!(value, 1..=6) {
            Ok(Self(value))
        } else {
            Err(FaceError(value))
        }
    }

    /// The pip count shown on this face.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Face {
    /// The resting face shown before any roll.
    fn default() -> Self {
        Face::ONE
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Face {
    type Error = FaceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// ============================================================================
// Roll Limits
// ============================================================================

/// The cap on roll attempts in a session, guaranteed to be in `[1, 20]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RollLimit(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("roll limit must be in 1..=20, got {0}")]
pub struct RollLimitError(pub u8);

impl RollLimit {
    /// Smallest allowed limit: a single roll.
    pub const MIN: RollLimit = RollLimit(1);
    /// Largest allowed limit.
    pub const MAX: RollLimit = RollLimit(20);
    /// Limit a fresh session starts with when nothing else is configured.
    pub const DEFAULT: RollLimit = RollLimit(10);

    pub const fn new(value: u8) -> Result<Self, RollLimitError> {
        if matches!(value, 1..=20) {
            Ok(Self(value))
        } else {
            Err(RollLimitError(value))
        }
    }

    /// Apply a signed adjustment, clamping the result into `[MIN, MAX]`.
    ///
    /// Saturating arithmetic, so any delta is safe; out-of-range results
    /// stick at the nearest bound rather than erroring.
    #[must_use]
    pub const fn adjusted(self, delta: i8) -> RollLimit {
        let value = self.0.saturating_add_signed(delta);
        if value < Self::MIN.0 {
            Self::MIN
        } else if value > Self::MAX.0 {
            Self::MAX
        } else {
            Self(value)
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for RollLimit {
    fn default() -> Self {
        RollLimit::DEFAULT
    }
}

impl fmt::Display for RollLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for RollLimit {
    type Error = RollLimitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
