//! Wall clock time to Berlin Clock lamps.
//!
//! Every row is "light the first n of k lamps" with n from a div or a mod by 5.

use core::ops::RangeInclusive;

use crate::errors::{BerlinClockError, BerlinClockResult};
use crate::lamp::LampState;
use crate::time::BerlinTime;

pub const HOURS: RangeInclusive<i32> = 0..=23;
pub const MINUTES: RangeInclusive<i32> = 0..=59;
pub const SECONDS: RangeInclusive<i32> = 0..=59;

/// Hours are checked first, then minutes, then seconds.
pub fn validate(hours: i32, minutes: i32, seconds: i32) -> BerlinClockResult<()> {
    if !HOURS.contains(&hours) {
        return Err(BerlinClockError::InvalidHours(hours));
    }
    if !MINUTES.contains(&minutes) {
        return Err(BerlinClockError::InvalidMinutes(minutes));
    }
    if !SECONDS.contains(&seconds) {
        return Err(BerlinClockError::InvalidSeconds(seconds));
    }

    Ok(())
}

/// Convert a time of day into the lamps of a Berlin Clock.
///
/// Fails without building anything if any field is out of range. See [`validate`] for which error wins.
pub fn convert(hours: i32, minutes: i32, seconds: i32) -> BerlinClockResult<BerlinTime> {
    validate(hours, minutes, seconds)?;

    Ok(lamps_for(hours as u8, minutes as u8, seconds as u8))
}

/// Inputs must already be in range.
pub(crate) fn lamps_for(hours: u8, minutes: u8, seconds: u8) -> BerlinTime {
    let hours = hours as usize;
    let minutes = minutes as usize;

    BerlinTime::new(
        LampState::from(seconds % 2 == 0),
        lit_prefix(hours / 5),
        lit_prefix(hours % 5),
        lit_prefix(minutes / 5),
        lit_prefix(minutes % 5),
    )
}

fn lit_prefix<const K: usize>(n: usize) -> [LampState; K] {
    core::array::from_fn(|i| LampState::from(i < n))
}
