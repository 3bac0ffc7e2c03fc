//! A time of day that can be stepped forward and backward like the hands of a wall clock.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::converter::{lamps_for, validate};
use crate::errors::{BerlinClockError, BerlinClockResult, ParseClockTimeError};
use crate::logging::trace;
use crate::time::BerlinTime;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    pub const fn seconds(self) -> i64 {
        match self {
            Self::Hours => 60 * 60,
            Self::Minutes => 60,
            Self::Seconds => 1,
        }
    }
}

/// Ways a user can change the displayed time
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockAction {
    /// +1 to increment, -1 to decrement
    Adjust { unit: TimeUnit, delta: i64 },
    Set(ClockTime),
}

/// Always a valid time of day. Deserializing checks the ranges too.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(try_from = "UncheckedClockTime")]
pub struct ClockTime {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl ClockTime {
    pub const MIDNIGHT: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Same checks, in the same order, as [`crate::convert`]
    pub fn new(hours: i32, minutes: i32, seconds: i32) -> BerlinClockResult<Self> {
        validate(hours, minutes, seconds)?;

        Ok(Self {
            hours: hours as u8,
            minutes: minutes as u8,
            seconds: seconds as u8,
        })
    }

    /// Leap seconds are stored in the nanoseconds by chrono, so `second()` is always below 60.
    #[cfg(feature = "chrono")]
    pub fn from_timelike(time: &impl chrono::Timelike) -> Self {
        Self {
            hours: time.hour() as u8,
            minutes: time.minute() as u8,
            seconds: time.second() as u8,
        }
    }

    /// Anything past the end of the day wraps around
    pub const fn from_seconds_of_day(seconds: u32) -> Self {
        let seconds = seconds % SECONDS_PER_DAY as u32;

        Self {
            hours: (seconds / 3600) as u8,
            minutes: (seconds / 60 % 60) as u8,
            seconds: (seconds % 60) as u8,
        }
    }

    pub const fn hours(self) -> u8 {
        self.hours
    }

    pub const fn minutes(self) -> u8 {
        self.minutes
    }

    pub const fn seconds(self) -> u8 {
        self.seconds
    }

    pub const fn seconds_of_day(self) -> u32 {
        self.hours as u32 * 3600 + self.minutes as u32 * 60 + self.seconds as u32
    }

    /// Move by `delta` units. Carries into the larger units and wraps around midnight in both directions.
    pub fn adjust(self, unit: TimeUnit, delta: i64) -> Self {
        // reduce first so huge deltas can't overflow
        let offset = delta.rem_euclid(SECONDS_PER_DAY) * unit.seconds();

        let seconds = (self.seconds_of_day() as i64 + offset).rem_euclid(SECONDS_PER_DAY);

        let adjusted = Self::from_seconds_of_day(seconds as u32);

        trace!(
            "adjusted {}:{}:{} to {}:{}:{}",
            self.hours,
            self.minutes,
            self.seconds,
            adjusted.hours,
            adjusted.minutes,
            adjusted.seconds
        );

        adjusted
    }

    pub fn tick(self) -> Self {
        self.adjust(TimeUnit::Seconds, 1)
    }

    pub fn apply(self, action: ClockAction) -> Self {
        match action {
            ClockAction::Adjust { unit, delta } => self.adjust(unit, delta),
            ClockAction::Set(time) => time,
        }
    }

    pub fn berlin_time(self) -> BerlinTime {
        lamps_for(self.hours, self.minutes, self.seconds)
    }
}

/// Same field names and types as `ClockTime` so any format reads back what it wrote
#[derive(Deserialize)]
struct UncheckedClockTime {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl TryFrom<UncheckedClockTime> for ClockTime {
    type Error = BerlinClockError;

    fn try_from(x: UncheckedClockTime) -> Result<Self, Self::Error> {
        Self::new(x.hours.into(), x.minutes.into(), x.seconds.into())
    }
}

impl From<ClockTime> for BerlinTime {
    fn from(time: ClockTime) -> Self {
        time.berlin_time()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// `HH:MM:SS` or `HH:MM`
impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.trim().split(':');

        let hours = parse_field(fields.next())?;
        let minutes = parse_field(fields.next())?;
        let seconds = match fields.next() {
            Some(x) => parse_field(Some(x))?,
            None => 0,
        };

        if fields.next().is_some() {
            return Err(ParseClockTimeError::Format);
        }

        Ok(Self::new(hours, minutes, seconds)?)
    }
}

fn parse_field(field: Option<&str>) -> Result<i32, ParseClockTimeError> {
    field
        .and_then(|x| x.parse().ok())
        .ok_or(ParseClockTimeError::Format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lamp::Row;

    fn time(h: i32, m: i32, s: i32) -> ClockTime {
        ClockTime::new(h, m, s).unwrap()
    }

    #[test]
    fn test_new() {
        let x = time(13, 17, 1);

        assert_eq!((x.hours(), x.minutes(), x.seconds()), (13, 17, 1));
        assert_eq!(ClockTime::new(24, 0, 0), Err(BerlinClockError::InvalidHours(24)));
        assert_eq!(
            ClockTime::new(0, 60, -1),
            Err(BerlinClockError::InvalidMinutes(60))
        );
        assert_eq!(ClockTime::default(), ClockTime::MIDNIGHT);
    }

    #[test]
    fn test_unchecked_is_checked() {
        let ok = UncheckedClockTime {
            hours: 23,
            minutes: 59,
            seconds: 59,
        };
        let bad = UncheckedClockTime {
            hours: 23,
            minutes: 59,
            seconds: 60,
        };

        assert_eq!(ClockTime::try_from(ok), Ok(time(23, 59, 59)));
        assert_eq!(
            ClockTime::try_from(bad),
            Err(BerlinClockError::InvalidSeconds(60))
        );
    }

    #[test]
    fn test_postcard_round_trip() {
        for x in [ClockTime::MIDNIGHT, time(13, 17, 1), time(23, 59, 59)] {
            let bytes = postcard::to_allocvec(&x).unwrap();

            assert_eq!(bytes, [x.hours(), x.minutes(), x.seconds()]);
            assert_eq!(postcard::from_bytes::<ClockTime>(&bytes).unwrap(), x);
        }
    }

    #[test]
    fn test_postcard_rejects_out_of_range() {
        for (h, m, s) in [(24u8, 0u8, 0u8), (0, 60, 0), (0, 0, 60), (255, 255, 255)] {
            let bytes = postcard::to_allocvec(&(h, m, s)).unwrap();

            assert!(
                postcard::from_bytes::<ClockTime>(&bytes).is_err(),
                "{h}:{m}:{s}"
            );
        }
    }

    #[test]
    fn test_postcard_actions() {
        let actions = [
            ClockAction::Adjust {
                unit: TimeUnit::Hours,
                delta: -1,
            },
            ClockAction::Adjust {
                unit: TimeUnit::Seconds,
                delta: i64::MAX,
            },
            ClockAction::Set(time(13, 17, 1)),
        ];

        for action in actions {
            let bytes = postcard::to_allocvec(&action).unwrap();

            assert_eq!(postcard::from_bytes::<ClockAction>(&bytes).unwrap(), action);
        }
    }

    #[test]
    fn test_seconds_of_day() {
        assert_eq!(ClockTime::MIDNIGHT.seconds_of_day(), 0);
        assert_eq!(time(23, 59, 59).seconds_of_day(), 86_399);
        assert_eq!(ClockTime::from_seconds_of_day(86_399), time(23, 59, 59));
        assert_eq!(ClockTime::from_seconds_of_day(86_400), ClockTime::MIDNIGHT);
        assert_eq!(ClockTime::from_seconds_of_day(3_661), time(1, 1, 1));
    }

    #[test_log::test]
    fn test_tick() {
        assert_eq!(time(12, 34, 56).tick(), time(12, 34, 57));
        assert_eq!(time(12, 34, 59).tick(), time(12, 35, 0));
        assert_eq!(time(12, 59, 59).tick(), time(13, 0, 0));
        assert_eq!(time(23, 59, 59).tick(), ClockTime::MIDNIGHT);
    }

    #[test_log::test]
    fn test_adjust_wraps_around() {
        let midnight = ClockTime::MIDNIGHT;

        assert_eq!(midnight.adjust(TimeUnit::Hours, -1), time(23, 0, 0));
        assert_eq!(midnight.adjust(TimeUnit::Minutes, -1), time(23, 59, 0));
        assert_eq!(midnight.adjust(TimeUnit::Seconds, -1), time(23, 59, 59));
        assert_eq!(time(23, 30, 15).adjust(TimeUnit::Hours, 1), time(0, 30, 15));
        assert_eq!(time(10, 59, 0).adjust(TimeUnit::Minutes, 2), time(11, 1, 0));
        assert_eq!(time(10, 0, 0).adjust(TimeUnit::Hours, 48), time(10, 0, 0));
    }

    #[test_log::test]
    fn test_adjust_huge_delta() {
        let x = time(6, 0, 0);

        // i64::MAX hours is a whole number of days plus 7 hours
        let expected = x.adjust(TimeUnit::Hours, 7);

        assert_eq!(x.adjust(TimeUnit::Hours, i64::MAX), expected);
        assert_eq!(x.adjust(TimeUnit::Seconds, i64::MIN), x.adjust(TimeUnit::Seconds, 30_592));
    }

    #[test_log::test]
    fn test_apply() {
        let x = time(8, 15, 0);

        let up = ClockAction::Adjust {
            unit: TimeUnit::Minutes,
            delta: 1,
        };
        let down = ClockAction::Adjust {
            unit: TimeUnit::Hours,
            delta: -1,
        };

        assert_eq!(x.apply(up), time(8, 16, 0));
        assert_eq!(x.apply(down), time(7, 15, 0));
        assert_eq!(x.apply(ClockAction::Set(ClockTime::MIDNIGHT)), ClockTime::MIDNIGHT);
    }

    #[test]
    fn test_berlin_time_matches_convert() {
        for s in (0..86_400).step_by(7) {
            let x = ClockTime::from_seconds_of_day(s);

            let converted = crate::convert(
                x.hours() as i32,
                x.minutes() as i32,
                x.seconds() as i32,
            );

            assert_eq!(Ok(x.berlin_time()), converted, "{x}");
            assert_eq!(BerlinTime::from(x), x.berlin_time());
        }

        assert_eq!(time(13, 17, 1).berlin_time().lit_count(Row::OneHour), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(time(7, 5, 3).to_string(), "07:05:03");
        assert_eq!(ClockTime::MIDNIGHT.to_string(), "00:00:00");
    }

    #[test]
    fn test_parse() {
        assert_eq!("13:17:01".parse::<ClockTime>(), Ok(time(13, 17, 1)));
        assert_eq!(" 9:05 ".parse::<ClockTime>(), Ok(time(9, 5, 0)));
        assert_eq!("23:59:59".parse::<ClockTime>(), Ok(time(23, 59, 59)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "24:00:00".parse::<ClockTime>(),
            Err(ParseClockTimeError::Range(BerlinClockError::InvalidHours(24)))
        );
        assert_eq!(
            "12:00:-1".parse::<ClockTime>(),
            Err(ParseClockTimeError::Range(BerlinClockError::InvalidSeconds(-1)))
        );

        for bad in ["", "12", "12:", "ab:cd", "1:2:3:4", "12:00:00pm"] {
            assert_eq!(
                bad.parse::<ClockTime>(),
                Err(ParseClockTimeError::Format),
                "{bad:?}"
            );
        }
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_from_timelike() {
        let x = chrono::NaiveTime::from_hms_opt(13, 17, 1).unwrap();

        assert_eq!(ClockTime::from_timelike(&x), time(13, 17, 1));
    }
}
