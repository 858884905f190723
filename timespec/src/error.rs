use crate::Timespec;
use thiserror::Error;

/// Errors returned by clock reads, sleeps, and fallible conversions.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    #[error("unable to read the realtime clock: {0}")]
    ClockUnavailable(std::io::Error),
    #[error("sleep was interrupted with {remaining} remaining")]
    Interrupted { remaining: Timespec },
    #[error("sleep failed: {0}")]
    Sleep(std::io::Error),
    #[error("negative time values can not be converted to a duration")]
    NegativeDuration,
    #[error("the value is outside of the representable range")]
    OutOfRange,
}
