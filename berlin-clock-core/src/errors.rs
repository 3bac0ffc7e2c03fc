use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lamp::Row;

/// Out of range input. Checked in the order hours, minutes, seconds and the first one wins.
#[derive(Error, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BerlinClockError {
    #[error("Hours must be between 0 and 23, got {0}")]
    InvalidHours(i32),
    #[error("Minutes must be between 0 and 59, got {0}")]
    InvalidMinutes(i32),
    #[error("Seconds must be between 0 and 59, got {0}")]
    InvalidSeconds(i32),
}

impl BerlinClockError {
    /// The offending value
    pub const fn value(&self) -> i32 {
        match self {
            Self::InvalidHours(x) | Self::InvalidMinutes(x) | Self::InvalidSeconds(x) => *x,
        }
    }
}

pub type BerlinClockResult<T> = Result<T, BerlinClockError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{row} row must have exactly {expected} lamps, got {actual}")]
pub struct RowLengthError {
    pub row: Row,
    pub expected: usize,
    pub actual: usize,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseClockTimeError {
    #[error("expected a time formatted as HH:MM:SS or HH:MM")]
    Format,
    #[error(transparent)]
    Range(#[from] BerlinClockError),
}
