use smart_leds::{RGB8, brightness, colors::BLACK};

use crate::config::Config;
use crate::logging::trace;
use crate::time::BerlinTime;

/// 1 seconds lamp, 4 + 4 hour lamps, 11 + 4 minute lamps
pub const LAMP_COUNT: usize = 24;

/// Write the panel into `light_data` in panel order (top row first, left to right).
///
/// A short `light_data` gets the first lamps. Anything past [`LAMP_COUNT`] is left alone.
pub fn fill_panel(berlin_time: &BerlinTime, config: &Config, light_data: &mut [RGB8]) {
    let colors = berlin_time.lamps().map(|lamp| config.lamp_color(&lamp));

    for (x, color) in light_data
        .iter_mut()
        .zip(brightness(colors, config.brightness))
    {
        *x = color;
    }

    trace!(
        "filled {} of {} lamps",
        light_data.len().min(LAMP_COUNT),
        LAMP_COUNT
    );
}

pub fn panel_colors(berlin_time: &BerlinTime, config: &Config) -> [RGB8; LAMP_COUNT] {
    let mut colors = [BLACK; LAMP_COUNT];

    fill_panel(berlin_time, config, &mut colors);

    colors
}
