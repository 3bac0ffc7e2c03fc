//! The lamp states of a whole Berlin Clock panel.
//!
//! The rows are fixed size arrays, so a `BerlinTime` with the wrong number of lamps can't exist.
//! `BerlinTime::from_rows` is there for callers that only have slices.

use core::fmt::{self, Write};
use serde::{Deserialize, Serialize};

use crate::errors::RowLengthError;
use crate::lamp::{Lamp, LampState, Row};

/// Length of the text form. 24 lamps and 4 newlines.
pub const TEXT_LEN: usize = 28;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BerlinTime {
    seconds_lamp: LampState,
    five_hour_row: [LampState; 4],
    one_hour_row: [LampState; 4],
    five_minute_row: [LampState; 11],
    one_minute_row: [LampState; 4],
}

impl BerlinTime {
    pub const fn new(
        seconds_lamp: LampState,
        five_hour_row: [LampState; 4],
        one_hour_row: [LampState; 4],
        five_minute_row: [LampState; 11],
        one_minute_row: [LampState; 4],
    ) -> Self {
        Self {
            seconds_lamp,
            five_hour_row,
            one_hour_row,
            five_minute_row,
            one_minute_row,
        }
    }

    /// Rows are checked top to bottom and the first one with the wrong length is the error.
    pub fn from_rows(
        seconds_lamp: LampState,
        five_hour_row: &[LampState],
        one_hour_row: &[LampState],
        five_minute_row: &[LampState],
        one_minute_row: &[LampState],
    ) -> Result<Self, RowLengthError> {
        Ok(Self::new(
            seconds_lamp,
            fixed_row(Row::FiveHour, five_hour_row)?,
            fixed_row(Row::OneHour, one_hour_row)?,
            fixed_row(Row::FiveMinute, five_minute_row)?,
            fixed_row(Row::OneMinute, one_minute_row)?,
        ))
    }

    pub const fn seconds_lamp(&self) -> LampState {
        self.seconds_lamp
    }

    pub const fn five_hour_row(&self) -> &[LampState; 4] {
        &self.five_hour_row
    }

    pub const fn one_hour_row(&self) -> &[LampState; 4] {
        &self.one_hour_row
    }

    pub const fn five_minute_row(&self) -> &[LampState; 11] {
        &self.five_minute_row
    }

    pub const fn one_minute_row(&self) -> &[LampState; 4] {
        &self.one_minute_row
    }

    pub fn row(&self, row: Row) -> &[LampState] {
        match row {
            Row::Seconds => core::slice::from_ref(&self.seconds_lamp),
            Row::FiveHour => &self.five_hour_row,
            Row::OneHour => &self.one_hour_row,
            Row::FiveMinute => &self.five_minute_row,
            Row::OneMinute => &self.one_minute_row,
        }
    }

    pub fn lit_count(&self, row: Row) -> usize {
        self.row(row).iter().filter(|x| x.is_lit()).count()
    }

    /// Every lamp in panel order: top to bottom, then left to right.
    pub fn lamps(&self) -> impl Iterator<Item = Lamp> + '_ {
        Row::ALL.into_iter().flat_map(move |row| {
            self.row(row)
                .iter()
                .enumerate()
                .map(move |(index, &state)| Lamp { row, index, state })
        })
    }

    /// The text form without needing an allocator
    pub fn to_text(&self) -> heapless::String<TEXT_LEN> {
        let mut text = heapless::String::new();

        write!(text, "{self}").expect("TEXT_LEN always fits the whole panel");

        text
    }
}

/// Five lines, one per row. Lit lamps show their color (`R` or `Y`) and unlit lamps show `O`.
impl fmt::Display for BerlinTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in Row::ALL.into_iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }

            for (index, &state) in self.row(row).iter().enumerate() {
                f.write_char(Lamp { row, index, state }.glyph())?;
            }
        }

        Ok(())
    }
}

fn fixed_row<const N: usize>(
    row: Row,
    lamps: &[LampState],
) -> Result<[LampState; N], RowLengthError> {
    lamps.try_into().map_err(|_| RowLengthError {
        row,
        expected: N,
        actual: lamps.len(),
    })
}
