//! Stems and branches (Can Chi / 干支) of days and years.
//!
//! Day names are counted from a fixed pivot: 1 March 1996 is a Đinh Dậu
//! (丁酉) day, stem 3 and branch 9.

use crate::date::{Date, SolarDate};
use crate::error::CalendarError;
use crate::math::floor_mod;

/// Vietnamese heavenly stems (Thiên Can).
const CAN: [&str; 10] = [
    "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ", "Canh", "Tân", "Nhâm", "Quý",
];
/// Chinese heavenly stems (天干).
const STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
/// Vietnamese earthly branches (Địa Chi).
const CHI: [&str; 12] = [
    "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi", "Thân", "Dậu", "Tuất", "Hợi",
];
/// Chinese earthly branches (地支).
const BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const PIVOT: (i32, i32, i32) = (1996, 3, 1);
const PIVOT_STEM: i32 = 3;
const PIVOT_BRANCH: i32 = 9;

/// Script used for stem and branch names.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Language {
    #[default]
    Vietnamese,
    Chinese,
}

/// One of the 60 stem-branch pairs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct StemBranch {
    stem: u8,
    branch: u8,
}

impl StemBranch {
    /// Stem-branch pair of the day `date`.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::{Date, Language, StemBranch};
    ///
    /// let sb = StemBranch::for_date(Date::from_calendar(1996, 3, 1).unwrap());
    /// assert_eq!("Đinh", sb.stem_name(Language::Vietnamese));
    /// assert_eq!("Dậu", sb.branch_name(Language::Vietnamese));
    /// assert_eq!("丁酉", sb.name(Language::Chinese));
    /// ```
    pub fn for_date(date: Date) -> Self {
        let (y, m, d) = PIVOT;
        let offset = date - Date::from_calendar_unchecked(y, m, d);
        Self::from_indices(PIVOT_STEM + offset, PIVOT_BRANCH + offset)
    }

    /// Stem-branch pair of the lunar year `year`.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::{Language, StemBranch};
    ///
    /// assert_eq!("Giáp Tý", StemBranch::for_year(1984).name(Language::Vietnamese));
    /// assert_eq!("戊戌", StemBranch::for_year(2018).name(Language::Chinese));
    /// ```
    pub fn for_year(year: i32) -> Self {
        Self::from_indices(year + 6, year + 8)
    }

    fn from_indices(stem: i32, branch: i32) -> Self {
        Self {
            stem: floor_mod(stem, 10) as u8,
            branch: floor_mod(branch, 12) as u8,
        }
    }

    /// Stem index, `0..=9` for Giáp (甲) to Quý (癸).
    pub fn stem(&self) -> usize {
        self.stem as usize
    }

    /// Branch index, `0..=11` for Tý (子) to Hợi (亥).
    pub fn branch(&self) -> usize {
        self.branch as usize
    }

    /// Position in the sexagenary cycle, from 1 (甲子) to 60 (癸亥).
    pub fn number(&self) -> u32 {
        let (s, b) = (self.stem as u32, self.branch as u32);
        // 6 * s - 5 * b is congruent to s (mod 10) and to b (mod 12)
        (6 * s + 55 * b) % 60 + 1
    }

    pub fn stem_name(&self, language: Language) -> &'static str {
        match language {
            Language::Vietnamese => CAN[self.stem()],
            Language::Chinese => STEMS[self.stem()],
        }
    }

    pub fn branch_name(&self, language: Language) -> &'static str {
        match language {
            Language::Vietnamese => CHI[self.branch()],
            Language::Chinese => BRANCHES[self.branch()],
        }
    }

    /// Full name, space-separated in Vietnamese ("Đinh Dậu") and joined in
    /// Chinese ("丁酉").
    pub fn name(&self, language: Language) -> String {
        let sep = match language {
            Language::Vietnamese => " ",
            Language::Chinese => "",
        };
        format!("{}{}{}", self.stem_name(language), sep, self.branch_name(language))
    }
}

/// Stem of the day `day/month/year`.
///
/// # Example
///
/// ```
/// use amlich::{Language, stem_day};
///
/// assert_eq!(Ok("Đinh"), stem_day(1, 3, 1996, Language::Vietnamese));
/// assert_eq!(Ok("丁"), stem_day(1, 3, 1996, Language::Chinese));
/// ```
pub fn stem_day(
    day: i32,
    month: i32,
    year: i32,
    language: Language,
) -> Result<&'static str, CalendarError> {
    let date = SolarDate::new(day, month, year)?;
    Ok(StemBranch::for_date(date.into()).stem_name(language))
}

/// Branch of the day `day/month/year`.
///
/// # Example
///
/// ```
/// use amlich::{Language, branch_day};
///
/// assert_eq!(Ok("Dậu"), branch_day(1, 3, 1996, Language::Vietnamese));
/// assert_eq!(Ok("酉"), branch_day(1, 3, 1996, Language::Chinese));
/// ```
pub fn branch_day(
    day: i32,
    month: i32,
    year: i32,
    language: Language,
) -> Result<&'static str, CalendarError> {
    let date = SolarDate::new(day, month, year)?;
    Ok(StemBranch::for_date(date.into()).branch_name(language))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: i32, d: i32) -> StemBranch {
        StemBranch::for_date(Date::from_calendar(y, m, d).unwrap())
    }

    #[test]
    fn pivot() {
        let sb = day(1996, 3, 1);
        assert_eq!((3, 9), (sb.stem(), sb.branch()));
        assert_eq!(34, sb.number());
    }

    #[test]
    fn before_pivot() {
        let sb = day(1996, 2, 29);
        assert_eq!((2, 8), (sb.stem(), sb.branch()));
        let sb = day(1996, 2, 21);
        assert_eq!("Mậu Tý", sb.name(Language::Vietnamese));
        let sb = day(1582, 10, 4);
        assert_eq!(day(1582, 10, 15).number() - 1, sb.number());
    }

    #[test]
    fn known_days() {
        for (std, (y, m, d)) in [
            ("戊午", (2000, 1, 1)),
            ("辛巳", (1970, 1, 1)),
            ("己未", (2021, 9, 8)),
        ] {
            assert_eq!(std, day(y, m, d).name(Language::Chinese), "{y}-{m}-{d}");
        }
    }

    #[test]
    fn numbering() {
        for (std, num) in [("甲子", 1), ("庚寅", 27), ("丁酉", 34), ("癸亥", 60)] {
            let sb = (0..60)
                .map(|i| StemBranch::from_indices(i, i))
                .find(|sb| sb.number() == num)
                .unwrap();
            assert_eq!(std, sb.name(Language::Chinese));
        }
    }

    #[test]
    fn years() {
        for (std, year) in [
            ("甲子", 1984),
            ("庚辰", 2000),
            ("丁酉", 2017),
            ("癸亥", 1983),
            ("甲子", -2696),
        ] {
            assert_eq!(
                std,
                StemBranch::for_year(year).name(Language::Chinese),
                "{year}"
            );
        }
    }

    #[test]
    fn invalid_dates() {
        assert!(stem_day(30, 2, 1996, Language::Chinese).is_err());
        assert!(branch_day(1, 13, 1996, Language::Vietnamese).is_err());
    }
}
