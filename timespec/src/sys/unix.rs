use super::Sleep;
use crate::{Error, Timespec};
use log::warn;

pub fn realtime() -> Result<Timespec, Error> {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };

    let ret = unsafe { libc::clock_gettime(libc::CLOCK_REALTIME, &mut ts) };

    if ret != 0 {
        let e = std::io::Error::last_os_error();
        warn!("clock_gettime(CLOCK_REALTIME) failed: {e}");
        return Err(Error::ClockUnavailable(e));
    }

    Ok(ts.into())
}

/// Call `nanosleep()` once. An interrupted sleep is not an error here, the
/// remaining time is returned so the caller can decide to resume.
pub fn sleep(delay: Timespec) -> Result<Sleep, std::io::Error> {
    let request: libc::timespec = delay.into();
    let mut remaining = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };

    let ret = unsafe { libc::nanosleep(&request, &mut remaining) };

    if ret == 0 {
        return Ok(Sleep::Complete);
    }

    let e = std::io::Error::last_os_error();
    if e.kind() == std::io::ErrorKind::Interrupted {
        Ok(Sleep::Interrupted(Timespec::from(remaining).normalize()))
    } else {
        Err(e)
    }
}
