use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::{Error, MILLIS_PER_SEC, NANOS_PER_MILLI, NANOS_PER_SEC};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// A signed span of time, or a moment relative to the unix epoch, stored as
/// whole seconds and sub-second nanoseconds.
///
/// Both fields are public so that any pair can be constructed, including
/// non-canonical ones such as `Timespec { secs: -2, nanos: -500_000_000 }`.
/// Every operation accepts these and returns a normalized result, where
/// `nanos` is in `0..1_000_000_000` and the sign is carried by `secs`.
///
/// Equality and ordering are structural: `secs` is compared first and then
/// `nanos`. Two non-canonical values that represent the same span, such as
/// `(1, 1_500_000_000)` and `(2, 500_000_000)`, do not compare equal. Use
/// `normalize()` before comparing values that may not be canonical.
///
/// Arithmetic on the fields is not checked for overflow.
#[derive(Copy, Clone, Default, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Timespec {
    pub secs: i64,
    pub nanos: i64,
}

impl Timespec {
    /// The zero value, which is also the unix epoch.
    pub const ZERO: Timespec = Timespec { secs: 0, nanos: 0 };

    /// Create a `Timespec` from raw fields. The fields are stored as given and
    /// are not normalized.
    pub const fn new(secs: i64, nanos: i64) -> Self {
        Self { secs, nanos }
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self { secs, nanos: 0 }
    }

    pub fn from_millis(millis: i64) -> Self {
        Self {
            secs: millis.div_euclid(MILLIS_PER_SEC),
            nanos: millis.rem_euclid(MILLIS_PER_SEC) * NANOS_PER_MILLI,
        }
    }

    pub fn from_nanos(nanos: i64) -> Self {
        Self { secs: 0, nanos }.normalize()
    }

    /// Convert a floating point number of milliseconds into a `Timespec`.
    ///
    /// The whole seconds are truncated toward zero and the remainder is
    /// rounded to the nearest nanosecond. For negative inputs this leaves a
    /// negative remainder, which is then borrowed from the seconds. So
    /// `-1500.0` becomes `Timespec { secs: -2, nanos: 500_000_000 }`.
    ///
    /// Non-finite or out of range input falls under the unchecked overflow
    /// of the fields. NaN becomes `Timespec::ZERO`, while infinities and
    /// values beyond the `i64` range of seconds overflow.
    pub fn from_millis_f64(millis: f64) -> Self {
        let secs = (millis / MILLIS_PER_SEC as f64) as i64;
        let nanos = ((millis - secs as f64 * MILLIS_PER_SEC as f64) * NANOS_PER_MILLI as f64)
            .round() as i64;

        Self { secs, nanos }.normalize()
    }

    /// Return the value as a floating point number of milliseconds. This is a
    /// linear combination of the fields and works on non-canonical values.
    pub fn as_millis_f64(&self) -> f64 {
        self.secs as f64 * MILLIS_PER_SEC as f64 + self.nanos as f64 / NANOS_PER_MILLI as f64
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.secs as f64 + self.nanos as f64 / NANOS_PER_SEC as f64
    }

    /// Return the total number of nanoseconds represented by this value.
    pub fn as_nanos(&self) -> i128 {
        self.secs as i128 * NANOS_PER_SEC as i128 + self.nanos as i128
    }

    /// Return the canonical form of this value by carrying whole seconds out
    /// of, or borrowing them into, the nanoseconds.
    pub fn normalize(self) -> Self {
        Self {
            secs: self.secs + self.nanos.div_euclid(NANOS_PER_SEC),
            nanos: self.nanos.rem_euclid(NANOS_PER_SEC),
        }
    }

    /// Returns true if `nanos` is in `0..1_000_000_000`.
    pub fn is_normalized(&self) -> bool {
        (0..NANOS_PER_SEC).contains(&self.nanos)
    }

    /// Returns true if the value represents a span before zero.
    pub fn is_negative(&self) -> bool {
        self.normalize().secs < 0
    }

    /// Return the normalized negation of this value.
    pub fn negate(self) -> Self {
        Self {
            secs: -self.secs,
            nanos: -self.nanos,
        }
        .normalize()
    }

    /// Return the time which has passed since this value was read from the
    /// realtime clock.
    pub fn elapsed(&self) -> Result<Timespec, Error> {
        Ok(crate::now()? - *self)
    }
}

impl core::fmt::Display for Timespec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}s {}ns", self.secs, self.nanos)
    }
}

impl Neg for Timespec {
    type Output = Timespec;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Add<Timespec> for Timespec {
    type Output = Timespec;

    fn add(self, rhs: Timespec) -> Self::Output {
        Timespec {
            secs: self.secs + rhs.secs,
            nanos: self.nanos + rhs.nanos,
        }
        .normalize()
    }
}

impl AddAssign<Timespec> for Timespec {
    fn add_assign(&mut self, rhs: Timespec) {
        *self = *self + rhs;
    }
}

impl Sub<Timespec> for Timespec {
    type Output = Timespec;

    fn sub(self, rhs: Timespec) -> Self::Output {
        Timespec {
            secs: self.secs - rhs.secs,
            nanos: self.nanos - rhs.nanos,
        }
        .normalize()
    }
}

impl SubAssign<Timespec> for Timespec {
    fn sub_assign(&mut self, rhs: Timespec) {
        *self = *self - rhs;
    }
}

impl TryFrom<core::time::Duration> for Timespec {
    type Error = Error;

    fn try_from(other: core::time::Duration) -> Result<Self, Self::Error> {
        let secs = i64::try_from(other.as_secs()).map_err(|_| Error::OutOfRange)?;

        Ok(Self {
            secs,
            nanos: other.subsec_nanos() as i64,
        })
    }
}

impl TryFrom<Timespec> for core::time::Duration {
    type Error = Error;

    fn try_from(other: Timespec) -> Result<Self, Self::Error> {
        let other = other.normalize();
        if other.secs < 0 {
            return Err(Error::NegativeDuration);
        }

        Ok(core::time::Duration::new(
            other.secs as u64,
            other.nanos as u32,
        ))
    }
}

impl TryFrom<std::time::SystemTime> for Timespec {
    type Error = Error;

    /// Times before the unix epoch become negative values.
    fn try_from(other: std::time::SystemTime) -> Result<Self, Self::Error> {
        match other.duration_since(std::time::SystemTime::UNIX_EPOCH) {
            Ok(since) => Timespec::try_from(since),
            Err(e) => Timespec::try_from(e.duration()).map(Timespec::negate),
        }
    }
}

#[cfg(unix)]
impl From<libc::timespec> for Timespec {
    fn from(other: libc::timespec) -> Self {
        Self {
            secs: other.tv_sec as i64,
            nanos: other.tv_nsec as i64,
        }
    }
}

#[cfg(unix)]
impl From<Timespec> for libc::timespec {
    fn from(other: Timespec) -> Self {
        libc::timespec {
            tv_sec: other.secs as libc::time_t,
            tv_nsec: other.nanos as _,
        }
    }
}
