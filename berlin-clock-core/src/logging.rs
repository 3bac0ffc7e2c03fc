#[cfg(feature = "log")]
pub use log::{debug, error, info, trace, warn};

#[cfg(all(feature = "defmt", not(feature = "log")))]
pub use defmt::{debug, error, info, trace, warn};

/// without a logging backend everything compiles away
#[cfg(not(any(feature = "log", feature = "defmt")))]
mod silent {
    macro_rules! debug {
        ($($arg:tt)*) => {{}};
    }
    macro_rules! error {
        ($($arg:tt)*) => {{}};
    }
    macro_rules! info {
        ($($arg:tt)*) => {{}};
    }
    macro_rules! trace {
        ($($arg:tt)*) => {{}};
    }
    macro_rules! warn {
        ($($arg:tt)*) => {{}};
    }

    #[allow(unused_imports)]
    pub(crate) use {debug, error, info, trace, warn};
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
#[allow(unused_imports)]
pub(crate) use silent::{debug, error, info, trace, warn};
