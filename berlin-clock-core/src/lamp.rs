use core::fmt;
use serde::{Deserialize, Serialize};

/// Character used for any unlit lamp in the text form
pub const UNLIT_GLYPH: char = 'O';

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LampState {
    Lit,
    #[default]
    Unlit,
}

impl LampState {
    pub const fn is_lit(self) -> bool {
        matches!(self, Self::Lit)
    }
}

impl From<bool> for LampState {
    fn from(lit: bool) -> Self {
        if lit { Self::Lit } else { Self::Unlit }
    }
}

/// What a lamp looks like when it is lit. Depends only on where the lamp is on the panel.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LampColor {
    /// hours and quarter markers
    Red,
    /// seconds and minutes
    Yellow,
}

impl LampColor {
    pub const fn glyph(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Yellow => 'Y',
        }
    }
}

/// The rows of the panel, top to bottom. The seconds lamp counts as a row of one.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    Seconds,
    FiveHour,
    OneHour,
    FiveMinute,
    OneMinute,
}

impl Row {
    pub const ALL: [Row; 5] = [
        Row::Seconds,
        Row::FiveHour,
        Row::OneHour,
        Row::FiveMinute,
        Row::OneMinute,
    ];

    pub const fn lamp_count(self) -> usize {
        match self {
            Self::Seconds => 1,
            Self::FiveMinute => 11,
            Self::FiveHour | Self::OneHour | Self::OneMinute => 4,
        }
    }

    /// Lamps 3, 6 and 9 of the five minute row mark the quarter hours
    pub const fn is_quarter(self, index: usize) -> bool {
        matches!(self, Self::FiveMinute) && index < 11 && (index + 1) % 3 == 0
    }

    pub const fn color_at(self, index: usize) -> LampColor {
        match self {
            Self::FiveHour | Self::OneHour => LampColor::Red,
            Self::FiveMinute if self.is_quarter(index) => LampColor::Red,
            Self::Seconds | Self::FiveMinute | Self::OneMinute => LampColor::Yellow,
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Seconds => "Seconds",
            Self::FiveHour => "Five hour",
            Self::OneHour => "One hour",
            Self::FiveMinute => "Five minute",
            Self::OneMinute => "One minute",
        };

        f.write_str(name)
    }
}

/// One lamp on the panel
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lamp {
    pub row: Row,
    pub index: usize,
    pub state: LampState,
}

impl Lamp {
    pub const fn color(&self) -> LampColor {
        self.row.color_at(self.index)
    }

    pub const fn glyph(&self) -> char {
        match self.state {
            LampState::Lit => self.color().glyph(),
            LampState::Unlit => UNLIT_GLYPH,
        }
    }
}
