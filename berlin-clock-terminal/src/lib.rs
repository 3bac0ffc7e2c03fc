use std::io::{self, Write};

use berlin_clock_core::{
    BerlinTime, ClockTime, Config, Row,
    lights::panel_colors,
    logging::trace,
};

/// Every row is drawn this many columns wide so the panel lines up
const PANEL_WIDTH: usize = 43;

/// Where the displayed time comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSource {
    /// Start at this time and move forward one second per read
    Fixed(ClockTime),
    Local,
    Utc,
}

impl TimeSource {
    pub fn read(&mut self) -> ClockTime {
        match self {
            Self::Fixed(time) => {
                let current = *time;

                *time = time.tick();

                current
            }
            Self::Local => ClockTime::from_timelike(&chrono::Local::now()),
            Self::Utc => ClockTime::from_timelike(&chrono::Utc::now()),
        }
    }
}

/// Width of one lamp so that `n` lamps plus the single column gaps fill the panel
fn lamp_width(row: Row) -> usize {
    match row {
        // the seconds lamp is round on the real clock. keep it small and centered
        Row::Seconds => 7,
        _ => {
            let n = row.lamp_count();

            (PANEL_WIDTH - (n - 1)) / n
        }
    }
}

/// Draw the lamps with 24-bit ANSI background colors. One line per row.
pub fn render_panel(berlin_time: &BerlinTime, config: &Config) -> String {
    let colors = panel_colors(berlin_time, config);
    let mut colors = colors.iter();

    let mut out = String::new();

    for (i, row) in Row::ALL.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }

        let width = lamp_width(row);
        let used = width * row.lamp_count() + row.lamp_count() - 1;
        let indent = (PANEL_WIDTH - used) / 2;

        out.extend(std::iter::repeat_n(' ', indent));

        for (index, color) in colors.by_ref().take(row.lamp_count()).enumerate() {
            if index > 0 {
                out.push(' ');
            }

            out.push_str(&format!(
                "\x1b[48;2;{};{};{}m{:width$}\x1b[0m",
                color.r, color.g, color.b, ""
            ));
        }
    }

    trace!("rendered panel with {} bytes", out.len());

    out
}

/// Everything shown for one tick. `plain` skips the colored panel.
pub fn render_frame(time: ClockTime, config: &Config, plain: bool) -> String {
    let berlin_time = time.berlin_time();

    if plain {
        format!("{time}\n{berlin_time}")
    } else {
        format!(
            "{time}\n\n{}\n\n{berlin_time}",
            render_panel(&berlin_time, config)
        )
    }
}

/// Clears the terminal before a frame
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Exit code when the display can't be written to anymore
pub const EXIT_DISPLAY_FAILED: i32 = 1;

/// Write one frame and flush it so it shows up immediately
pub fn write_frame(out: &mut impl Write, frame: &str, clear: bool) -> io::Result<()> {
    let clear = if clear { CLEAR_SCREEN } else { "" };

    writeln!(out, "{clear}{frame}")?;

    out.flush()
}
