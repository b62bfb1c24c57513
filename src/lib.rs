//! Utilities for converting between solar dates and the Vietnamese/Chinese
//! lunisolar calendar.
//!
//! New moons and solar longitudes are computed with truncated series from
//! Meeus' *Astronomical Algorithms*, evaluated in a caller-supplied fixed
//! timezone (UTC+7 for the Vietnamese calendar, UTC+8 for the Chinese one).
//! Solar dates use the Julian calendar up to 4 October 1582 and the Gregorian
//! calendar from 15 October 1582.
//!
//! # Examples
//!
//! Conversions:
//!
//! ```
//! use amlich::{LunarDate, SolarDate, lunar_to_solar, solar_to_lunar};
//!
//! assert_eq!(Ok(LunarDate::new(15, 11, 2017, false)), solar_to_lunar(1, 1, 2018, 7.0));
//! assert_eq!(SolarDate::new(16, 2, 2018), lunar_to_solar(1, 1, 2018, false, 7.0));
//! ```
//!
//! Day names and ratings:
//!
//! ```
//! use amlich::{DayRating, Language, branch_day, rate_day, stem_day};
//!
//! assert_eq!(Ok("Đinh"), stem_day(1, 3, 1996, Language::Vietnamese));
//! assert_eq!(Ok("酉"), branch_day(1, 3, 1996, Language::Chinese));
//! assert_eq!(Ok(DayRating::Good), rate_day("Tý", 1));
//! ```
//!
//! With a reusable [`Converter`]:
//!
//! ```
//! use amlich::{CalendarConfig, Converter, Epoch, LunarDate, SolarDate};
//!
//! let config = CalendarConfig::new(7.0).with_epoch(Epoch::J2000);
//! let converter = Converter::new(&config).unwrap();
//! let date = SolarDate::new(23, 7, 2017).unwrap();
//!
//! assert_eq!(Ok(LunarDate::new(1, 6, 2017, true)), converter.solar_to_lunar(date));
//! ```

pub mod config;
pub mod date;
pub mod error;
pub mod lunisolar;
pub mod math;
pub mod rating;
pub mod sexagenary;
pub mod time_zone;

pub use config::{CalendarConfig, LeapMismatch};
pub use date::{Date, SolarDate, YearType};
pub use error::CalendarError;
pub use lunisolar::{
    Converter, Epoch, LunarDate, Month, lunar_to_solar, lunar_to_solar_or_zero, solar_to_lunar,
};
pub use rating::{DayRating, rate_day};
pub use sexagenary::{Language, StemBranch, branch_day, stem_day};
pub use time_zone::TimeZone;
