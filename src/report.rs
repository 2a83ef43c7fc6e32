use crate::{power_set_size, Error, Result, Strategy};
use std::fmt;

/// Summary of one enumeration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub strategy: Strategy,
    /// Tokens given, duplicates included.
    pub raw_len: usize,
    /// Distinct elements actually enumerated.
    pub distinct: usize,
    pub emitted: u128,
    /// `false` when the consumer stopped the run early.
    pub completed: bool,
}

impl Report {
    /// `2^distinct`, saturating at `u128::MAX`.
    pub fn expected(&self) -> u128 {
        power_set_size(self.distinct).unwrap_or(u128::MAX)
    }

    pub fn collapsed(&self) -> bool {
        self.raw_len != self.distinct
    }

    /// Checks the emitted count against `2^n`. Runs stopped by the consumer
    /// are never reported.
    pub fn verify(&self) -> Result<()> {
        if self.completed && self.emitted != self.expected() {
            return Err(Error::CountMismatch {
                emitted: self.emitted,
                expected: self.expected(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Done: {} sets", self.emitted)?;
        if !self.completed {
            write!(f, " (stopped early)")?;
        } else if self.emitted != self.expected() {
            write!(f, "; expected: {}", self.expected())?;
        }
        write!(f, ".")
    }
}
