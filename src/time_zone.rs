//! Local civil days for a fixed UTC offset.
//!
//! Astronomical instants are Julian dates (JD) in UT. A civil day in a
//! timezone ahead (east) of UTC by `h` hours starts at JD `jdn - 0.5 - h/24`.

use crate::date::Date;
use crate::error::CalendarError;
use crate::math::int_floor;

/// A fixed offset from UTC in (possibly fractional) hours, positive east.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TimeZone(f64);

impl TimeZone {
    /// Indochina time (UTC+7), used by the Vietnamese calendar.
    pub const VIETNAM: TimeZone = TimeZone(7.0);
    /// Beijing time (UTC+8), used by the Chinese calendar.
    pub const CHINA: TimeZone = TimeZone(8.0);

    /// Creates a timezone `hours` ahead of UTC.
    ///
    /// Returns `Err` if `hours` is not finite or outside `-12.0..=14.0`.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::TimeZone;
    ///
    /// assert_eq!(5.5, TimeZone::from_hours(5.5).unwrap().hours());
    /// assert!(TimeZone::from_hours(f64::NAN).is_err());
    /// ```
    pub fn from_hours(hours: f64) -> Result<Self, CalendarError> {
        if hours.is_finite() && (-12.0..=14.0).contains(&hours) {
            Ok(Self(hours))
        } else {
            Err(CalendarError::InvalidTimeZone { hours })
        }
    }

    /// Returns the offset in hours.
    pub fn hours(&self) -> f64 {
        self.0
    }

    /// Returns the local date at the instant `jd` (a Julian date in UT).
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::TimeZone;
    ///
    /// // 2017-12-18 06:30 UTC
    /// let jd = 2458105.7708;
    /// assert_eq!("2017-12-18", TimeZone::VIETNAM.date_of(jd).iso());
    /// assert_eq!("2017-12-17", TimeZone::from_hours(-8.0).unwrap().date_of(jd).iso());
    /// ```
    pub fn date_of(&self, jd: f64) -> Date {
        Date::from_jdn(int_floor(jd + 0.5 + self.0 / 24.0))
    }

    /// Returns the instant (Julian date in UT) at which `date` begins locally.
    pub fn start_of(&self, date: Date) -> f64 {
        date.jdn() as f64 - 0.5 - self.0 / 24.0
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::VIETNAM
    }
}
