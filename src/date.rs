//! Calendar-independent date, and solar dates in the Julian/Gregorian
//! calendar.

use std::fmt;
use std::ops::{Add, Sub};

use crate::error::CalendarError;
use crate::math::floor_div;

/// Julian day number of 15 October 1582, the first day of the Gregorian
/// calendar. Earlier days are reckoned in the Julian calendar.
pub const GREGORIAN_EPOCH_JDN: i32 = 2299161;

/// Earliest supported year (JDN 0 falls on 1 January 4713 BC, Julian).
pub const YEAR_MIN: i32 = -4712;
/// Latest supported year.
pub const YEAR_MAX: i32 = 9999;

/// A calendar-independent date.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: i32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    ///
    /// Any `i32` is accepted. Calendar dates of day numbers outside
    /// `0..=5373484` lie outside the supported years and are rejected by the
    /// conversions.
    pub fn from_jdn(jdn: i32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> i32 {
        self.jdn
    }

    /// Creates a `Date` from a date in the hybrid Julian/Gregorian calendar.
    ///
    /// `year` is an astronomical year number, i.e. 1 BC is `0`, 2 BC is
    /// `-1`, etc. Days before 15 October 1582 are Julian calendar dates.
    ///
    /// Returns `Err` if no such day exists, including the ten days skipped by
    /// the Gregorian reform.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_calendar(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// let date = Date::from_calendar(1582, 10, 4).unwrap();
    /// assert_eq!(1, Date::from_calendar(1582, 10, 15).unwrap() - date);
    /// ```
    pub fn from_calendar(year: i32, month: i32, day: i32) -> Result<Self, CalendarError> {
        SolarDate::new(day, month, year).map(Self::from)
    }

    /// Same as [`Date::from_calendar`], without checking the fields.
    ///
    /// The Gregorian formula is tried first and the Julian one is used if the
    /// result falls before [`GREGORIAN_EPOCH_JDN`].
    pub fn from_calendar_unchecked(year: i32, month: i32, day: i32) -> Self {
        let a = floor_div(14 - month, 12);
        let y = year + 4800 - a;
        let m = month + 12 * a - 3;
        let days = day + floor_div(153 * m + 2, 5) + 365 * y + floor_div(y, 4);
        let jdn = days - floor_div(y, 100) + floor_div(y, 400) - 32045;
        if jdn < GREGORIAN_EPOCH_JDN {
            Self::from_jdn(days - 32083)
        } else {
            Self::from_jdn(jdn)
        }
    }

    /// Represents the date in the hybrid Julian/Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// assert_eq!((2000, 1, 1), Date::from_jdn(2451545).calendar());
    /// assert_eq!((1582, 10, 4), Date::from_jdn(2299160).calendar());
    /// ```
    pub fn calendar(&self) -> (i32, i32, i32) {
        // i64 keeps every `i32` day number in range; all divisors are positive
        let jdn = i64::from(self.jdn);
        let (b, c) = if self.jdn >= GREGORIAN_EPOCH_JDN {
            let a = jdn + 32044;
            let b = (4 * a + 3).div_euclid(146097);
            (b, a - (146097 * b).div_euclid(4))
        } else {
            (0, jdn + 32082)
        };
        let d = (4 * c + 3).div_euclid(1461);
        let e = c - (1461 * d).div_euclid(4);
        let m = (5 * e + 2).div_euclid(153);
        let day = e - (153 * m + 2).div_euclid(5) + 1;
        let month = m + 3 - 12 * m.div_euclid(10);
        let year = 100 * b + d - 4800 + m.div_euclid(10);
        (year as i32, month as i32, day as i32)
    }

    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_calendar(2018, 2, 16).unwrap();
    /// assert_eq!("2018-02-16", date.iso());
    /// ```
    pub fn iso(&self) -> String {
        let (y, m, d) = self.calendar();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    pub fn day_of_week(&self) -> i32 {
        self.jdn.rem_euclid(7) + 1
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(self.jdn + rhs)
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn - rhs.jdn
    }
}

/// A day in the proleptic Julian/Gregorian calendar, in `day, month, year`
/// order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SolarDate {
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

impl SolarDate {
    /// The all-zero date returned by legacy callers in place of an error.
    pub const ZERO: SolarDate = SolarDate {
        day: 0,
        month: 0,
        year: 0,
    };

    /// Creates a checked solar date.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::SolarDate;
    ///
    /// assert!(SolarDate::new(29, 2, 1900).is_err());
    /// assert!(SolarDate::new(29, 2, 1500).is_ok()); // Julian leap year
    /// assert!(SolarDate::new(10, 10, 1582).is_err());
    /// ```
    pub fn new(day: i32, month: i32, year: i32) -> Result<Self, CalendarError> {
        if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
            return Err(CalendarError::YearOutOfRange { year });
        }
        let invalid = CalendarError::InvalidSolarDate { year, month, day };
        if !(1..=12).contains(&month) {
            return Err(invalid);
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(invalid);
        }
        if year == 1582 && month == 10 && (5..=14).contains(&day) {
            return Err(invalid);
        }
        Ok(Self { day, month, year })
    }

    /// Returns `true` for the legacy [`SolarDate::ZERO`] sentinel.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl From<SolarDate> for Date {
    fn from(date: SolarDate) -> Date {
        Date::from_calendar_unchecked(date.year, date.month, date.day)
    }
}

impl From<Date> for SolarDate {
    fn from(date: Date) -> SolarDate {
        let (year, month, day) = date.calendar();
        SolarDate { day, month, year }
    }
}

impl fmt::Display for SolarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year, using the Julian rule up to 1582
    /// and the Gregorian rule afterwards.
    pub fn from_calendar(year: i32) -> Self {
        let leap = if year <= 1582 {
            year.rem_euclid(4) == 0
        } else {
            year % 4 == 0 && year % 100 != 0 || year % 400 == 0
        };
        if leap { Self::Leap } else { Self::Common }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        2 => 28 + YearType::from_calendar(year).is_leap() as i32,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
