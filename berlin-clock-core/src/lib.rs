#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod clock;
pub mod config;
pub mod converter;
pub mod errors;
pub mod lamp;
pub mod lights;
pub mod logging;
pub mod time;

pub use clock::{ClockAction, ClockTime, TimeUnit};
pub use config::Config;
pub use converter::convert;
pub use errors::{BerlinClockError, BerlinClockResult, ParseClockTimeError, RowLengthError};
pub use lamp::{Lamp, LampColor, LampState, Row};
pub use time::BerlinTime;
