//! Error type shared by every fallible operation in the crate.

/// Error type for all fallible operations in the crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a leap month is requested for a month that is not the
    /// leap month of that lunar year (or the year has none).
    #[error("month {month} of lunar year {year} is not a leap month")]
    InvalidLeapMonth {
        /// The requested lunar month.
        month: i32,
        /// The requested lunar year.
        year: i32,
    },

    /// Returned when a solar date does not exist in the Julian/Gregorian
    /// calendar.
    #[error("invalid solar date {year:04}-{month:02}-{day:02}")]
    InvalidSolarDate {
        /// Year field.
        year: i32,
        /// Month field.
        month: i32,
        /// Day field.
        day: i32,
    },

    /// Returned when a lunar month is outside `1..=12` or the day exceeds the
    /// length of that month.
    #[error("invalid lunar date: day {day} of month {month}, year {year}")]
    InvalidLunarDate {
        /// Year field.
        year: i32,
        /// Month field.
        month: i32,
        /// Day field.
        day: i32,
    },

    /// Returned when a day rating is requested for a lunar month outside
    /// `1..=12`.
    #[error("lunar month must be in 1..=12, got {month}")]
    LunarMonthOutOfRange {
        /// The invalid month.
        month: i32,
    },

    /// Returned when a year lies outside the supported range.
    #[error("year {year} is outside the supported range -4712..=9999")]
    YearOutOfRange {
        /// The invalid year.
        year: i32,
    },

    /// Returned when a timezone offset is non-finite or out of range.
    #[error("timezone offset must be finite and within -12..=14 hours, got {hours}")]
    InvalidTimeZone {
        /// The invalid offset in hours.
        hours: f64,
    },
}
