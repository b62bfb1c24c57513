//! Configuration for lunisolar conversions.

use crate::error::CalendarError;
use crate::lunisolar::astro::Epoch;
use crate::time_zone::TimeZone;

/// What [`Converter::lunar_to_solar`](crate::Converter::lunar_to_solar) does
/// when asked for a leap month that does not exist.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum LeapMismatch {
    /// Fail with [`CalendarError::InvalidLeapMonth`].
    #[default]
    Error,
    /// Return [`SolarDate::ZERO`](crate::SolarDate::ZERO), as older callers
    /// expect.
    ZeroDate,
}

/// Configuration for a [`Converter`](crate::Converter).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use amlich::{CalendarConfig, Epoch, LeapMismatch};
///
/// let config = CalendarConfig::new(8.0)
///     .with_epoch(Epoch::J2000)
///     .with_leap_mismatch(LeapMismatch::ZeroDate);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarConfig {
    /// Offset of local civil time from UTC, in hours.
    time_zone_hours: f64,
    /// Time origin of the solar longitude series.
    epoch: Epoch,
    /// Handling of leap flags that name no leap month.
    leap_mismatch: LeapMismatch,
}

impl CalendarConfig {
    /// Creates a configuration for a timezone `time_zone_hours` ahead of UTC.
    ///
    /// Defaults: `epoch = B1900`, `leap_mismatch = Error`.
    pub fn new(time_zone_hours: f64) -> Self {
        Self {
            time_zone_hours,
            epoch: Epoch::default(),
            leap_mismatch: LeapMismatch::default(),
        }
    }

    /// Sets the time origin used for solar longitude.
    pub fn with_epoch(mut self, epoch: Epoch) -> Self {
        self.epoch = epoch;
        self
    }

    /// Sets the handling of leap flags that name no leap month.
    pub fn with_leap_mismatch(mut self, leap_mismatch: LeapMismatch) -> Self {
        self.leap_mismatch = leap_mismatch;
        self
    }

    /// Returns the configured offset in hours.
    pub fn time_zone_hours(&self) -> f64 {
        self.time_zone_hours
    }

    /// Returns the configured solar longitude epoch.
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Returns the configured leap mismatch handling.
    pub fn leap_mismatch(&self) -> LeapMismatch {
        self.leap_mismatch
    }

    /// Checks the configuration and returns the validated timezone.
    pub fn validate(&self) -> Result<TimeZone, CalendarError> {
        TimeZone::from_hours(self.time_zone_hours)
    }
}

impl Default for CalendarConfig {
    /// Vietnamese calendar (UTC+7).
    fn default() -> Self {
        Self::new(TimeZone::VIETNAM.hours())
    }
}
