use smart_leds::{
    RGB8,
    colors::{RED, YELLOW},
};

use crate::lamp::{Lamp, LampColor, LampState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub red: RGB8,
    pub yellow: RGB8,
    /// unlit lamps are dim gray instead of black so the panel shape stays visible
    pub off: RGB8,
    /// 0-255. applied on top of the colors above
    pub brightness: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            red: RED,
            yellow: YELLOW,
            off: RGB8::new(0x2C, 0x2C, 0x2C),
            brightness: 255,
        }
    }
}

impl Config {
    pub fn lamp_color(&self, lamp: &Lamp) -> RGB8 {
        match (lamp.state, lamp.color()) {
            (LampState::Unlit, _) => self.off,
            (LampState::Lit, LampColor::Red) => self.red,
            (LampState::Lit, LampColor::Yellow) => self.yellow,
        }
    }
}
