use crate::Error;
use std::{fmt, str::FromStr};

/// The interchangeable power-set walkers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Rotation backtracking ("tt", for truth table). The fastest in practice.
    #[default]
    Rotation,
    /// Include/exclude decision per position ("video"). The reference baseline.
    BinaryChoice,
    /// Grows the previous level by one element per rotation round
    /// ("iterative"). Relies on the registry to drop repeats.
    LevelSweep,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Self::Rotation, Self::BinaryChoice, Self::LevelSweep];

    pub fn name(self) -> &'static str {
        match self {
            Self::Rotation => "tt",
            Self::BinaryChoice => "video",
            Self::LevelSweep => "iterative",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tt" | "rotation" => Ok(Self::Rotation),
            "video" | "binary-choice" => Ok(Self::BinaryChoice),
            "iterative" | "level-sweep" => Ok(Self::LevelSweep),
            _ => Err(Error::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}
