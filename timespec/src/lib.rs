//! This crate provides a signed time value made of whole seconds and
//! sub-second nanoseconds, along with helpers to read the wall clock and to
//! suspend the calling thread.
//!
//! A `Timespec` is kept in a canonical form by every operation that produces
//! one: the nanoseconds are always in `0..1_000_000_000` and the sign of the
//! value is carried by the seconds. This means that 2.5 seconds before the
//! epoch is `Timespec { secs: -3, nanos: 500_000_000 }`.
//!
//! ```no_run
//! use timespec::Timespec;
//!
//! let start = timespec::now().unwrap();
//!
//! timespec::wait(Timespec::from_millis(10)).unwrap();
//!
//! let elapsed = timespec::now().unwrap() - start;
//! println!("slept for {} ms", elapsed.as_millis_f64());
//! ```

mod error;
mod sleep;
mod sys;
mod timespec;

pub use error::Error;
pub use sleep::{Builder, Sleeper};
pub use timespec::Timespec;

const MILLIS_PER_SEC: i64 = 1_000;
const NANOS_PER_MILLI: i64 = 1_000_000;
const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Read the current time from the system realtime clock.
///
/// The returned value is relative to the unix epoch and is not guaranteed to
/// be steady. The clock may jump forward or backward as it is adjusted.
pub fn now() -> Result<Timespec, Error> {
    sys::realtime()
}

/// Suspend the calling thread for approximately `delay`.
///
/// This uses a default `Sleeper`, which reports an interrupted sleep as
/// `Error::Interrupted` instead of resuming it. Negative delays are handed to
/// the system sleep primitive unchanged. On unix this is rejected with
/// `EINVAL` and returned as `Error::Sleep`.
pub fn wait(delay: Timespec) -> Result<(), Error> {
    Sleeper::default().wait(delay)
}
