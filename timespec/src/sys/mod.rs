#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::*;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::*;

use crate::Timespec;

/// The outcome of a single call to the platform sleep primitive.
#[derive(Debug, PartialEq)]
pub enum Sleep {
    Complete,
    /// The sleep returned early, leaving this much of the delay unslept.
    Interrupted(Timespec),
}

/// The longest single sleep in milliseconds. Windows reserves `u32::MAX` to
/// mean an infinite wait.
#[cfg(any(windows, test))]
const MAX_SLEEP_MILLIS: u64 = (u32::MAX - 1) as u64;

/// Convert a normalized, non-negative delay into whole milliseconds, rounding
/// up. Saturates at `u64::MAX`.
#[cfg(any(windows, test))]
fn whole_millis(delay: Timespec) -> u64 {
    (delay.secs as u64)
        .saturating_mul(crate::MILLIS_PER_SEC as u64)
        .saturating_add((delay.nanos as u64).div_ceil(crate::NANOS_PER_MILLI as u64))
}

/// Split a delay into millisecond chunks that each fit in a single sleep
/// call. A zero delay yields one zero length chunk.
#[cfg(any(windows, test))]
pub(crate) fn millis_chunks(delay: Timespec) -> impl Iterator<Item = u32> {
    let mut remaining = whole_millis(delay);
    let mut first = true;

    core::iter::from_fn(move || {
        if remaining == 0 && !first {
            return None;
        }
        first = false;

        let chunk = core::cmp::min(remaining, MAX_SLEEP_MILLIS);
        remaining -= chunk;
        Some(chunk as u32)
    })
}
