use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of scoring segments in play.
pub const TARGET_COUNT: usize = 7;

/// A segment of the board that counts in cricket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Target {
    Fifteen,
    Sixteen,
    Seventeen,
    Eighteen,
    Nineteen,
    Twenty,
    Bull,
}

impl Target {
    /// All targets in board order, bullseye last.
    pub const ALL: [Target; TARGET_COUNT] = [
        Target::Fifteen,
        Target::Sixteen,
        Target::Seventeen,
        Target::Eighteen,
        Target::Nineteen,
        Target::Twenty,
        Target::Bull,
    ];

    /// Points a single hit on this target is worth.
    pub fn value(self) -> u32 {
        match self {
            Target::Fifteen => 15,
            Target::Sixteen => 16,
            Target::Seventeen => 17,
            Target::Eighteen => 18,
            Target::Nineteen => 19,
            Target::Twenty => 20,
            Target::Bull => 25,
        }
    }

    /// Position in [`Target::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u32> for Target {
    type Error = UnknownTarget;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Target::ALL
            .into_iter()
            .find(|t| t.value() == value)
            .ok_or(UnknownTarget(value))
    }
}

impl From<Target> for u32 {
    fn from(target: Target) -> Self {
        target.value()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A raw value that is not one of the cricket targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownTarget(pub u32);

impl fmt::Display for UnknownTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a cricket target (15-20, 25)", self.0)
    }
}

impl std::error::Error for UnknownTarget {}
