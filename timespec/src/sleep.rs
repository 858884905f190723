use crate::sys::{self, Sleep};
use crate::{Error, Timespec};
use log::{debug, trace, warn};

/// Suspends the calling thread using the system sleep primitive.
///
/// ```no_run
/// use timespec::{Sleeper, Timespec};
///
/// let sleeper = Sleeper::builder().resume_on_interrupt(true).build();
///
/// sleeper.wait(Timespec::from_millis(500)).unwrap();
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Sleeper {
    resume_on_interrupt: bool,
}

impl Sleeper {
    pub fn builder() -> Builder {
        Builder::new()
    }

    pub fn resume_on_interrupt(&self) -> bool {
        self.resume_on_interrupt
    }

    /// Block for approximately `delay`. The wake up time is best effort and
    /// the thread may sleep longer than requested.
    ///
    /// The delay is normalized first. A negative delay is passed to the system
    /// primitive as is, which rejects it with `Error::Sleep`.
    ///
    /// If the sleep is interrupted by a signal, it either resumes with the
    /// remaining time or returns `Error::Interrupted`, depending on how this
    /// `Sleeper` was built.
    pub fn wait(&self, delay: Timespec) -> Result<(), Error> {
        let mut remaining = delay.normalize();

        loop {
            trace!("sleeping for {remaining}");

            match sys::sleep(remaining) {
                Ok(Sleep::Complete) => return Ok(()),
                Ok(Sleep::Interrupted(left)) => {
                    if !self.resume_on_interrupt {
                        return Err(Error::Interrupted { remaining: left });
                    }
                    debug!("sleep interrupted with {left} remaining, resuming");
                    remaining = left;
                }
                Err(e) => {
                    warn!("unable to sleep for {remaining}: {e}");
                    return Err(Error::Sleep(e));
                }
            }
        }
    }
}

pub struct Builder {
    resume_on_interrupt: bool,
}

impl Builder {
    fn new() -> Self {
        Self {
            resume_on_interrupt: false,
        }
    }

    /// Controls whether a sleep that is interrupted by a signal goes back to
    /// sleep for the time remaining. When disabled, the interruption is
    /// reported to the caller along with the time remaining.
    ///
    /// The default is to not resume.
    pub fn resume_on_interrupt(mut self, resume: bool) -> Self {
        self.resume_on_interrupt = resume;
        self
    }

    /// Consumes this `Builder` and produces a `Sleeper`.
    pub fn build(self) -> Sleeper {
        Sleeper {
            resume_on_interrupt: self.resume_on_interrupt,
        }
    }
}
