use super::Sleep;
use crate::{Error, Timespec, NANOS_PER_SEC};

use winapi::shared::minwindef::FILETIME;

const UNIX_EPOCH_INTERVALS: i64 = 116_444_736 * NANOS_PER_SEC;
const NANOS_PER_INTERVAL: i64 = 100;

const INTERVALS_PER_SEC: i64 = NANOS_PER_SEC / NANOS_PER_INTERVAL;

fn unix_intervals() -> i64 {
    let filetime;
    unsafe {
        let mut ft: FILETIME = core::mem::zeroed();
        winapi::um::sysinfoapi::GetSystemTimePreciseAsFileTime(&mut ft);
        filetime = ((ft.dwHighDateTime as u64) << 32 | ft.dwLowDateTime as u64) as i64;
    }

    filetime - UNIX_EPOCH_INTERVALS
}

/// The precise system time call can not fail.
pub fn realtime() -> Result<Timespec, Error> {
    let intervals = unix_intervals();

    Ok(Timespec {
        secs: intervals.div_euclid(INTERVALS_PER_SEC),
        nanos: intervals.rem_euclid(INTERVALS_PER_SEC) * NANOS_PER_INTERVAL,
    })
}

/// `Sleep()` has millisecond resolution, so the delay is rounded up to the
/// next whole millisecond. A single `Sleep()` is limited to just under 49.7
/// days, so longer delays are slept in consecutive chunks until the whole
/// delay has passed. Negative delays are rejected as invalid input to match
/// `nanosleep()`.
pub fn sleep(delay: Timespec) -> Result<Sleep, std::io::Error> {
    if delay.secs < 0 {
        return Err(std::io::Error::from(std::io::ErrorKind::InvalidInput));
    }

    for millis in super::millis_chunks(delay) {
        unsafe {
            winapi::um::synchapi::Sleep(millis);
        }
    }

    Ok(Sleep::Complete)
}
