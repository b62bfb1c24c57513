//! Vietnamese / Chinese lunisolar calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本程序以近似公式（見 [`astro`]）推算合朔與太陽黃經：月首為本地時區內合朔所在之日，
//! 含冬至之月為十一月；相鄰兩個十一月月首相距超過 365 日者，該歲有十三個月，
//! 冬至後首個月首與次月首太陽黃經同在一個 30° 區間之月為閏月。

use tracing::warn;

use crate::date::{Date, YEAR_MAX, YEAR_MIN};
use crate::error::CalendarError;
use crate::math::{floor_mod, int_floor};
use crate::time_zone::TimeZone;

pub mod astro;
mod convert;

pub use astro::Epoch;
pub use convert::{Converter, lunar_to_solar, lunar_to_solar_or_zero, solar_to_lunar};

/// 農曆日期。`year` 為正月所在的公元年。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LunarDate {
    pub day: i32,
    pub month: i32,
    pub year: i32,
    pub is_leap: bool,
}

impl LunarDate {
    /// 構造農曆日期，不作檢查；轉換時由 [`Converter`] 檢查。
    pub fn new(day: i32, month: i32, year: i32, is_leap: bool) -> Self {
        Self {
            day,
            month,
            year,
            is_leap,
        }
    }
    /// 取得月名
    pub fn month_name(&self) -> Month {
        let num = self.month as u32;
        if self.is_leap {
            Month::Leap(num)
        } else {
            Month::Common(num)
        }
    }
}

/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
}

/// 第 `k` 個朔在時區 `tz` 的日期
pub fn new_moon_day(k: i32, tz: TimeZone) -> Date {
    tz.date_of(astro::new_moon(k))
}

/// 某日開始時太陽黃經所在的 30° 區間，`0..=11`
fn sun_sector(date: Date, tz: TimeZone, epoch: Epoch) -> i32 {
    int_floor(astro::solar_longitude(tz.start_of(date), epoch) / 30.0)
}

/// 取得公元 `year` 年的十一月月首，即最接近該年 12 月 31 日、且不晚於冬至所在區間的朔日。
///
/// # 用例
///
/// ```
/// use amlich::TimeZone;
/// use amlich::lunisolar::{month11_anchor, Epoch};
///
/// let a11 = month11_anchor(2017, TimeZone::VIETNAM, Epoch::B1900);
/// assert_eq!("2017-12-18", a11.iso());
/// ```
pub fn month11_anchor(year: i32, tz: TimeZone, epoch: Epoch) -> Date {
    let last_day = Date::from_calendar_unchecked(year, 12, 31);
    let k = astro::lunation_index(last_day.jdn());
    let new_moon = new_moon_day(k, tz);
    if sun_sector(new_moon, tz, epoch) >= 9 {
        new_moon_day(k - 1, tz)
    } else {
        new_moon
    }
}

/// 自十一月月首 `month11` 起逐月比較月首太陽黃經區間，取得閏月相對十一月的月數，`1..=13`。
///
/// 最多比較 14 個月；未見閏月則返回 13。
///
/// # 用例
///
/// ```
/// use amlich::TimeZone;
/// use amlich::lunisolar::{leap_month_offset, month11_anchor, Epoch};
///
/// let a11 = month11_anchor(2019, TimeZone::VIETNAM, Epoch::B1900);
/// assert_eq!(6, leap_month_offset(a11, TimeZone::VIETNAM, Epoch::B1900)); // 閏四月
/// ```
pub fn leap_month_offset(month11: Date, tz: TimeZone, epoch: Epoch) -> i32 {
    let k = astro::nearest_lunation(month11.jdn());
    let mut i = 1;
    let mut arc = sun_sector(new_moon_day(k + i, tz), tz, epoch);
    loop {
        let last = arc;
        i += 1;
        arc = sun_sector(new_moon_day(k + i, tz), tz, epoch);
        if arc == last {
            break;
        }
        if i >= 14 {
            warn!(month11 = %month11.iso(), "no repeated solar sector within 14 months");
            break;
        }
    }
    i - 1
}

/// 由閏月相對十一月的月數取得閏月序號（閏月與前一月同名）。
///
/// # 用例
///
/// ```
/// use amlich::lunisolar::leap_month_number;
///
/// assert_eq!(11, leap_month_number(1));
/// assert_eq!(12, leap_month_number(2));
/// assert_eq!(6, leap_month_number(8));
/// ```
pub fn leap_month_number(offset: i32) -> i32 {
    floor_mod(offset + 9, 12) + 1
}

/// 「歲」，自前一年十一月至本年十月（或閏十月）的時段。
///
/// 注意：「歲」以十一月為首，與以正月為首的「年」不同。`annus` 取正月所在的公元年，
/// 故十一、十二月屬前一年。
///
/// # 用例
///
/// ```
/// use amlich::{Converter, Date};
/// use amlich::lunisolar::{Annus, Month::*};
///
/// let converter = Converter::default();
/// let annus = Annus::new(2020, &converter).unwrap();
/// assert_eq!(Some(Leap(4)), annus.leap_month());
///
/// let date = Date::from_calendar(2020, 5, 23).unwrap();
/// let lunar = annus.ymd_for(date).unwrap();
/// assert_eq!((2020, Leap(4), 1), (lunar.year, lunar.month_name(), lunar.day));
/// ```
#[derive(Debug, Clone)]
pub struct Annus {
    /// 正月所在的公元年
    pub annus: i32,
    /// 全部月首，包括次一歲十一月首以標記本歲最末日
    pub months: Vec<NewMoon>,
    /// 閏月相對十一月的月數，無閏月則為 `None`
    pub leap_offset: Option<i32>,
}

/// 月首信息
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct NewMoon {
    /// 月名
    pub month: Month,
    /// 月首所在日期
    pub date: Date,
}

impl Annus {
    /// 取得正月在公元 `annus` 年的歲。
    ///
    /// 若年份超出支持範圍則返回 `Err`。
    pub fn new(annus: i32, converter: &Converter) -> Result<Self, CalendarError> {
        use Month::*;

        if !(YEAR_MIN..=YEAR_MAX).contains(&annus) {
            return Err(CalendarError::YearOutOfRange { year: annus });
        }
        let (tz, epoch) = (converter.time_zone(), converter.epoch());
        let a11 = month11_anchor(annus - 1, tz, epoch);
        let b11 = month11_anchor(annus, tz, epoch);
        let k = astro::nearest_lunation(a11.jdn());
        let leap_offset = (b11 - a11 > 365).then(|| leap_month_offset(a11, tz, epoch));
        let count = if leap_offset.is_some() { 13 } else { 12 };

        let mut months = Vec::with_capacity(count as usize + 1);
        let mut month = 10;
        for off in 0..count {
            let date = if off == 0 {
                a11
            } else {
                new_moon_day(k + off, tz)
            };
            if leap_offset == Some(off) {
                months.push(NewMoon {
                    month: Leap(month),
                    date,
                });
                continue;
            }
            month = month % 12 + 1;
            months.push(NewMoon {
                month: Common(month),
                date,
            });
        }
        months.push(NewMoon {
            month: Common(11),
            date: b11,
        });

        Ok(Annus {
            annus,
            months,
            leap_offset,
        })
    }

    /// 依特定日期取得其所在歲。
    ///
    /// # 用例
    ///
    /// ```
    /// use amlich::{Converter, Date};
    /// use amlich::lunisolar::Annus;
    ///
    /// let date = Date::from_calendar(2017, 12, 31).unwrap();
    /// let annus = Annus::from_date(date, &Converter::default()).unwrap();
    ///
    /// assert_eq!(2018, annus.annus);
    /// ```
    pub fn from_date(date: Date, converter: &Converter) -> Result<Self, CalendarError> {
        let mut y = date.calendar().0;
        loop {
            let annus = Self::new(y, converter)?;
            match annus.position_of(date) {
                None => return Ok(annus),
                Some(OtherAnnus::Before) => y -= 1,
                Some(OtherAnnus::After) => y += 1,
            }
        }
    }

    /// 該歲的閏月，無閏月則為 `None`。
    pub fn leap_month(&self) -> Option<Month> {
        self.months.iter().map(|m| m.month).find(|m| m.is_leap())
    }

    /// 取得給定日期在該歲的農曆日期。
    ///
    /// 若所給日期不在該歲，則回報 `Err` 並指出該日期在該歲之前還是之後。
    pub fn ymd_for(&self, date: Date) -> Result<LunarDate, OtherAnnus> {
        if let Some(other) = self.position_of(date) {
            return Err(other);
        }
        let m = self
            .months
            .iter()
            .take_while(|m| m.date <= date)
            .last()
            .ok_or(OtherAnnus::Before)?;
        let year = if m.month.num() >= 11 {
            self.annus - 1
        } else {
            self.annus
        };
        Ok(LunarDate {
            day: date - m.date + 1,
            month: m.month.num() as i32,
            year,
            is_leap: m.month.is_leap(),
        })
    }

    fn position_of(&self, date: Date) -> Option<OtherAnnus> {
        let begin = self.months.first()?.date;
        let end = self.months.last()?.date;
        if date < begin {
            Some(OtherAnnus::Before)
        } else if date >= end {
            Some(OtherAnnus::After)
        } else {
            None
        }
    }
}

/// 表示給定日期不在該歲，並指出其在前還是在後。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OtherAnnus {
    Before,
    After,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalendarConfig;

    fn vn() -> (TimeZone, Epoch) {
        (TimeZone::VIETNAM, Epoch::B1900)
    }

    #[test]
    fn month11_anchors() {
        let (tz, epoch) = vn();
        for (std, year) in [
            ("2016-11-29", 2016),
            ("2017-12-18", 2017),
            ("1999-12-08", 1999),
            ("2019-11-26", 2019),
        ] {
            assert_eq!(std, month11_anchor(year, tz, epoch).iso(), "{year}");
        }
    }

    #[test]
    fn leap_offsets() {
        let (tz, epoch) = vn();
        // 2017 年兩個十一月首相距 384 日
        let a11 = month11_anchor(2016, tz, epoch);
        assert_eq!(384, month11_anchor(2017, tz, epoch) - a11);
        assert_eq!(7, leap_month_offset(a11, tz, epoch));
        let a11 = month11_anchor(2016, tz, Epoch::J2000);
        assert_eq!(8, leap_month_offset(a11, tz, Epoch::J2000));
    }

    #[test]
    fn leap_numbers() {
        for (std, off) in [(11, 1), (12, 2), (1, 3), (5, 7), (10, 12), (11, 13)] {
            assert_eq!(std, leap_month_number(off), "{off}");
        }
    }

    #[test]
    fn months() {
        use Month::*;
        let converter = Converter::default();
        let annus = Annus::new(2000, &converter).unwrap();
        let stds = [
            (Common(11), "1999-12-08"),
            (Common(12), "2000-01-07"),
            (Common(1), "2000-02-05"),
            (Common(2), "2000-03-06"),
            (Common(3), "2000-04-05"),
            (Common(4), "2000-05-04"),
            (Common(5), "2000-06-02"),
            (Common(6), "2000-07-02"),
            (Common(7), "2000-07-31"),
            (Common(8), "2000-08-29"),
            (Common(9), "2000-09-28"),
            (Common(10), "2000-10-27"),
            (Common(11), "2000-11-26"),
        ];
        assert_eq!(stds.len(), annus.months.len());
        assert_eq!(None, annus.leap_month());
        for (std, month) in stds.iter().zip(&annus.months) {
            assert_eq!(*std, (month.month, month.date.iso().as_str()));
        }
    }

    #[test]
    fn leap_months() {
        use Month::*;
        let config = CalendarConfig::default().with_epoch(Epoch::J2000);
        let converter = Converter::new(&config).unwrap();
        let annus = Annus::new(2017, &converter).unwrap();
        let stds = [
            (Common(11), "2016-11-29"),
            (Common(12), "2016-12-29"),
            (Common(1), "2017-01-28"),
            (Common(2), "2017-02-26"),
            (Common(3), "2017-03-28"),
            (Common(4), "2017-04-26"),
            (Common(5), "2017-05-26"),
            (Common(6), "2017-06-24"),
            (Leap(6), "2017-07-23"),
            (Common(7), "2017-08-22"),
            (Common(8), "2017-09-20"),
            (Common(9), "2017-10-20"),
            (Common(10), "2017-11-18"),
            (Common(11), "2017-12-18"),
        ];
        assert_eq!(stds.len(), annus.months.len());
        assert_eq!(Some(Leap(6)), annus.leap_month());
        for (std, month) in stds.iter().zip(&annus.months) {
            assert_eq!(*std, (month.month, month.date.iso().as_str()));
        }
    }

    #[test]
    fn dates() {
        use OtherAnnus::*;
        let config = CalendarConfig::default().with_epoch(Epoch::J2000);
        let converter = Converter::new(&config).unwrap();
        let annus = Annus::new(2017, &converter).unwrap();
        let data = [
            ((2016, 11, 29), Ok(LunarDate::new(1, 11, 2016, false))),
            ((2017, 1, 27), Ok(LunarDate::new(30, 12, 2016, false))),
            ((2017, 1, 28), Ok(LunarDate::new(1, 1, 2017, false))),
            ((2017, 7, 22), Ok(LunarDate::new(29, 6, 2017, false))),
            ((2017, 7, 23), Ok(LunarDate::new(1, 6, 2017, true))),
            ((2017, 12, 17), Ok(LunarDate::new(30, 10, 2017, false))),
            ((2016, 11, 28), Err(Before)),
            ((2017, 12, 18), Err(After)),
        ];
        for ((y, m, d), std) in data {
            assert_eq!(std, annus.ymd_for(Date::from_calendar(y, m, d).unwrap()));
        }
    }

    #[test]
    fn from_date() {
        let converter = Converter::default();
        for (std, (y, m, d)) in [
            (2017, (2017, 1, 27)),
            (2017, (2017, 12, 17)),
            (2018, (2017, 12, 18)),
            (2018, (2018, 2, 16)),
        ] {
            let date = Date::from_calendar(y, m, d).unwrap();
            assert_eq!(std, Annus::from_date(date, &converter).unwrap().annus);
        }
    }

    #[test]
    fn agrees_with_converter() {
        let converter = Converter::default();
        let annus = Annus::new(2020, &converter).unwrap();
        let first = annus.months[0].date;
        let last = annus.months.last().unwrap().date;
        for jdn in first.jdn()..last.jdn() {
            let date = Date::from_jdn(jdn);
            assert_eq!(
                converter.solar_to_lunar(date.into()),
                Ok(annus.ymd_for(date).unwrap()),
                "{}",
                date.iso()
            );
        }
    }
}
