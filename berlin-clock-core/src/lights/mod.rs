//! Turn a [`crate::BerlinTime`] into colors for real (or simulated) lamps.

mod panel;

pub use panel::{LAMP_COUNT, fill_panel, panel_colors};
