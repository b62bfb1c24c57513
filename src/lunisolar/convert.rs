//! 公曆與農曆互換

use tracing::debug;

use super::astro::{self, Epoch};
use super::{LunarDate, leap_month_number, leap_month_offset, month11_anchor, new_moon_day};
use crate::config::{CalendarConfig, LeapMismatch};
use crate::date::{Date, SolarDate, YEAR_MAX, YEAR_MIN};
use crate::error::CalendarError;
use crate::math::floor_div;
use crate::rating::{self, DayRating};
use crate::sexagenary::{Language, StemBranch};
use crate::time_zone::TimeZone;

/// 以固定時區換算公曆與農曆。
///
/// 由 [`CalendarConfig`] 構造，構造後不可變，可在多線程間複製使用。
///
/// # 用例
///
/// ```
/// use amlich::{CalendarConfig, Converter, LunarDate, SolarDate};
///
/// let converter = Converter::new(&CalendarConfig::new(7.0)).unwrap();
/// let tet = SolarDate::new(16, 2, 2018).unwrap();
///
/// assert_eq!(Ok(LunarDate::new(1, 1, 2018, false)), converter.solar_to_lunar(tet));
/// assert_eq!(Ok(tet), converter.lunar_to_solar(LunarDate::new(1, 1, 2018, false)));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Converter {
    time_zone: TimeZone,
    epoch: Epoch,
    leap_mismatch: LeapMismatch,
}

impl Converter {
    /// 檢查配置並構造換算器。
    pub fn new(config: &CalendarConfig) -> Result<Self, CalendarError> {
        Ok(Self {
            time_zone: config.validate()?,
            epoch: config.epoch(),
            leap_mismatch: config.leap_mismatch(),
        })
    }

    /// 所用時區
    pub fn time_zone(&self) -> TimeZone {
        self.time_zone
    }

    /// 計算太陽黃經所用曆元
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    fn month11(&self, year: i32) -> Date {
        month11_anchor(year, self.time_zone, self.epoch)
    }

    /// 公曆轉農曆。
    ///
    /// 先找出所給日期所在月的月首，再以前後兩個十一月月首定出所在歲，按距十一月的月數定月序；
    /// 有閏月之歲，閏月及其後各月序號減一。十一、十二月屬前一年。
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn solar_to_lunar(&self, date: SolarDate) -> Result<LunarDate, CalendarError> {
        let date = SolarDate::new(date.day, date.month, date.year)?;
        let day_number = Date::from(date);
        // 平朔估算的序號可能偏後一至兩月，逐月回退直至月首不晚於所給日期
        let mut k = astro::lunation_index(day_number.jdn()) + 1;
        let mut month_start = new_moon_day(k, self.time_zone);
        while month_start > day_number {
            k -= 1;
            month_start = new_moon_day(k, self.time_zone);
        }

        let mut a11 = self.month11(date.year);
        let mut b11 = a11;
        let mut year;
        if a11 >= month_start {
            year = date.year;
            a11 = self.month11(date.year - 1);
        } else {
            year = date.year + 1;
            b11 = self.month11(date.year + 1);
        }

        let day = day_number - month_start + 1;
        let diff = floor_div(month_start - a11, 29);
        let mut is_leap = false;
        let mut month = diff + 11;
        if b11 - a11 > 365 {
            let leap_offset = leap_month_offset(a11, self.time_zone, self.epoch);
            if diff >= leap_offset {
                month = diff + 10;
                is_leap = diff == leap_offset;
            }
        }
        if month > 12 {
            month -= 12;
        }
        if month >= 11 && diff < 4 {
            year -= 1;
        }
        Ok(LunarDate {
            day,
            month,
            year,
            is_leap,
        })
    }

    /// 農曆轉公曆。
    ///
    /// 若 `is_leap` 為真而該月並非該年閏月，按配置回報
    /// [`CalendarError::InvalidLeapMonth`] 或返回 [`SolarDate::ZERO`]。
    /// 日序超出該月實際日數則回報 [`CalendarError::InvalidLunarDate`]。
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn lunar_to_solar(&self, date: LunarDate) -> Result<SolarDate, CalendarError> {
        let LunarDate {
            day,
            month,
            year,
            is_leap,
        } = date;
        if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
            return Err(CalendarError::YearOutOfRange { year });
        }
        let invalid = CalendarError::InvalidLunarDate { year, month, day };
        if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
            return Err(invalid);
        }

        let (a11, b11) = if month < 11 {
            (self.month11(year - 1), self.month11(year))
        } else {
            (self.month11(year), self.month11(year + 1))
        };
        let k = astro::nearest_lunation(a11.jdn());
        let mut off = month - 11;
        if off < 0 {
            off += 12;
        }
        if b11 - a11 > 365 {
            let leap_offset = leap_month_offset(a11, self.time_zone, self.epoch);
            if is_leap && month != leap_month_number(leap_offset) {
                return self.leap_mismatch(month, year);
            } else if is_leap || off >= leap_offset {
                off += 1;
            }
        } else if is_leap {
            return self.leap_mismatch(month, year);
        }

        let month_start = new_moon_day(k + off, self.time_zone);
        let next_month_start = new_moon_day(k + off + 1, self.time_zone);
        if day > next_month_start - month_start {
            return Err(invalid);
        }
        Ok((month_start + (day - 1)).into())
    }

    fn leap_mismatch(&self, month: i32, year: i32) -> Result<SolarDate, CalendarError> {
        debug!(month, year, policy = ?self.leap_mismatch, "requested leap month does not exist");
        match self.leap_mismatch {
            LeapMismatch::Error => Err(CalendarError::InvalidLeapMonth { month, year }),
            LeapMismatch::ZeroDate => Ok(SolarDate::ZERO),
        }
    }

    /// 按當日地支及所在農曆月評定吉凶。
    ///
    /// # 用例
    ///
    /// ```
    /// use amlich::{Converter, DayRating, SolarDate};
    ///
    /// // 農曆正月初三，戊子日
    /// let date = SolarDate::new(21, 2, 1996).unwrap();
    /// assert_eq!(Ok(DayRating::Good), Converter::default().rate(date));
    /// ```
    pub fn rate(&self, date: SolarDate) -> Result<DayRating, CalendarError> {
        let lunar = self.solar_to_lunar(date)?;
        let branch = StemBranch::for_date(date.into()).branch_name(Language::Vietnamese);
        rating::rate_day(branch, lunar.month)
    }
}

impl Default for Converter {
    /// 越南時區（UTC+7），曆元 B1900。
    fn default() -> Self {
        Self {
            time_zone: TimeZone::VIETNAM,
            epoch: Epoch::default(),
            leap_mismatch: LeapMismatch::default(),
        }
    }
}

/// 公曆 `day/month/year` 在 UTC+`time_zone_hours` 時區的農曆日期。
///
/// # 用例
///
/// ```
/// use amlich::{LunarDate, solar_to_lunar};
///
/// assert_eq!(Ok(LunarDate::new(15, 11, 2017, false)), solar_to_lunar(1, 1, 2018, 7.0));
/// ```
pub fn solar_to_lunar(
    day: i32,
    month: i32,
    year: i32,
    time_zone_hours: f64,
) -> Result<LunarDate, CalendarError> {
    let converter = Converter::new(&CalendarConfig::new(time_zone_hours))?;
    converter.solar_to_lunar(SolarDate::new(day, month, year)?)
}

/// 農曆 `day/month/year`（`is_leap` 指閏月）在 UTC+`time_zone_hours` 時區的公曆日期。
///
/// # 用例
///
/// ```
/// use amlich::{CalendarError, SolarDate, lunar_to_solar};
///
/// assert_eq!(SolarDate::new(23, 5, 2020), lunar_to_solar(1, 4, 2020, true, 7.0));
/// assert_eq!(
///     Err(CalendarError::InvalidLeapMonth { month: 5, year: 2020 }),
///     lunar_to_solar(1, 5, 2020, true, 7.0)
/// );
/// ```
pub fn lunar_to_solar(
    day: i32,
    month: i32,
    year: i32,
    is_leap: bool,
    time_zone_hours: f64,
) -> Result<SolarDate, CalendarError> {
    let converter = Converter::new(&CalendarConfig::new(time_zone_hours))?;
    converter.lunar_to_solar(LunarDate::new(day, month, year, is_leap))
}

/// 同 [`lunar_to_solar`]，但任何錯誤皆返回 [`SolarDate::ZERO`]，供沿用舊接口的調用者使用。
///
/// # 用例
///
/// ```
/// use amlich::{SolarDate, lunar_to_solar_or_zero};
///
/// // 2017 年閏五月，四月非閏
/// assert!(lunar_to_solar_or_zero(1, 4, 2017, true, 7.0).is_zero());
/// assert_eq!(
///     SolarDate::new(16, 2, 2018).unwrap(),
///     lunar_to_solar_or_zero(1, 1, 2018, false, 7.0)
/// );
/// ```
pub fn lunar_to_solar_or_zero(
    day: i32,
    month: i32,
    year: i32,
    is_leap: bool,
    time_zone_hours: f64,
) -> SolarDate {
    lunar_to_solar(day, month, year, is_leap, time_zone_hours).unwrap_or(SolarDate::ZERO)
}
