//! Good and bad days by earthly branch and lunar month.
//!
//! Each lunar month has four "good" and four "bad" branches. Names are
//! compared after folding Vietnamese diacritics, see [`canonicalize`].

use std::fmt;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::error::CalendarError;

/// Rating of a day.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DayRating {
    Good,
    Bad,
    Normal,
}

impl fmt::Display for DayRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DayRating::Good => "Good",
            DayRating::Bad => "Bad",
            DayRating::Normal => "Normal",
        })
    }
}

/// Good branches, indexed by lunar month - 1.
static GOOD_DAYS: [[&str; 4]; 12] = [
    ["tys", "suu", "tyj", "mui"],
    ["dan", "mao", "mui", "dau"],
    ["thin", "tyj", "dau", "hoi"],
    ["ngo", "mui", "suu", "dau"],
    ["than", "dau", "suu", "mao"],
    ["tuat", "hoi", "mao", "tyj"],
    ["tys", "suu", "tyj", "mui"],
    ["dan", "mao", "mui", "dau"],
    ["thin", "tyj", "dau", "hoi"],
    ["ngo", "mui", "suu", "dau"],
    ["than", "dau", "suu", "mao"],
    ["tuat", "hoi", "mao", "tyj"],
];

/// Bad branches, indexed by lunar month - 1.
static BAD_DAYS: [[&str; 4]; 12] = [
    ["ngo", "mao", "hoi", "dau"],
    ["than", "tyj", "suu", "hoi"],
    ["tuat", "mui", "suu", "hoi"],
    ["tys", "dau", "tyj", "mao"],
    ["dan", "hoi", "mui", "tyj"],
    ["thin", "suu", "dau", "mui"],
    ["ngo", "mao", "hoi", "dau"],
    ["than", "tyj", "suu", "hoi"],
    ["tuat", "mui", "suu", "hoi"],
    ["tys", "dau", "tyj", "mao"],
    ["dan", "hoi", "mui", "tyj"],
    ["thin", "suu", "dau", "mui"],
];

/// Folds a Vietnamese branch name to lower-case ASCII.
///
/// Diacritics are removed by canonical decomposition, and "Đ"/"đ" become
/// "d". "Tý" and "Tỵ" would both fold to "ty", so they get a trailing "s"
/// and "j" respectively.
///
/// # Example
///
/// ```
/// use amlich::rating::canonicalize;
///
/// assert_eq!("dau", canonicalize("Dậu"));
/// assert_eq!("tys", canonicalize("Tý"));
/// assert_eq!("tyj", canonicalize("TỴ"));
/// ```
pub fn canonicalize(branch: &str) -> String {
    let mut folded: String = branch
        .nfd()
        .filter(|&c| !is_combining_mark(c))
        .map(|c| match c {
            'Đ' => 'D',
            'đ' => 'd',
            c => c,
        })
        .collect();
    match branch.nfc().collect::<String>().to_lowercase().as_str() {
        "tý" => folded.push('s'),
        "tỵ" => folded.push('j'),
        _ => {}
    }
    folded.to_lowercase()
}

/// Rates a day by its branch name (Vietnamese, any casing or accents) in
/// lunar month `lunar_month`.
///
/// A branch listed as good wins over one listed as bad.
///
/// # Example
///
/// ```
/// use amlich::{DayRating, rate_day};
///
/// assert_eq!(Ok(DayRating::Bad), rate_day("Ngọ", 1));
/// assert_eq!(Ok(DayRating::Good), rate_day("Tý", 1));
/// assert_eq!(Ok(DayRating::Normal), rate_day("Thìn", 1));
/// ```
pub fn rate_day(branch: &str, lunar_month: i32) -> Result<DayRating, CalendarError> {
    if !(1..=12).contains(&lunar_month) {
        return Err(CalendarError::LunarMonthOutOfRange { month: lunar_month });
    }
    let name = canonicalize(branch);
    let idx = (lunar_month - 1) as usize;
    if GOOD_DAYS[idx].contains(&name.as_str()) {
        Ok(DayRating::Good)
    } else if BAD_DAYS[idx].contains(&name.as_str()) {
        Ok(DayRating::Bad)
    } else {
        Ok(DayRating::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folding() {
        for (std, name) in [
            ("suu", "Sửu"),
            ("dan", "Dần"),
            ("mao", "Mão"),
            ("thin", "Thìn"),
            ("ngo", "Ngọ"),
            ("mui", "Mùi"),
            ("than", "Thân"),
            ("dau", "Dậu"),
            ("tuat", "Tuất"),
            ("hoi", "Hợi"),
            ("tys", "tý"),
            ("tyj", "Tỵ"),
            ("dinh", "Đinh"),
            ("ty", "Ty"),
        ] {
            assert_eq!(std, canonicalize(name), "{name}");
        }
    }

    #[test]
    fn decomposed_input() {
        assert_eq!("tys", canonicalize("Ty\u{301}"));
        assert_eq!("tyj", canonicalize("Ty\u{323}"));
    }

    #[test]
    fn every_month() {
        use DayRating::*;
        // (month, good, bad, normal)
        for (month, good, bad, normal) in [
            (1, "Sửu", "Mão", "Dần"),
            (4, "Ngọ", "Tý", "Dần"),
            (6, "Tỵ", "Thìn", "Tý"),
            (12, "Hợi", "Mùi", "Ngọ"),
        ] {
            assert_eq!(Ok(Good), rate_day(good, month), "{good} in {month}");
            assert_eq!(Ok(Bad), rate_day(bad, month), "{bad} in {month}");
            assert_eq!(Ok(Normal), rate_day(normal, month), "{normal} in {month}");
        }
    }

    #[test]
    fn good_wins() {
        // month 4 lists "dau" in both tables
        assert!(GOOD_DAYS[3].contains(&"dau") && BAD_DAYS[3].contains(&"dau"));
        assert_eq!(Ok(DayRating::Good), rate_day("Dậu", 4));
        assert_eq!(Ok(DayRating::Good), rate_day("Dậu", 10));
        assert_eq!(Ok(DayRating::Bad), rate_day("Dậu", 1));
    }

    #[test]
    fn tables_are_canonical() {
        for row in GOOD_DAYS.iter().chain(&BAD_DAYS) {
            for name in row {
                assert!(name.is_ascii() && name.chars().all(|c| c.is_ascii_lowercase()));
            }
        }
    }

    #[test]
    fn month_out_of_range() {
        for month in [0, 13, -1] {
            assert_eq!(
                Err(CalendarError::LunarMonthOutOfRange { month }),
                rate_day("Tý", month)
            );
        }
    }

    #[test]
    fn display() {
        assert_eq!("Good", DayRating::Good.to_string());
        assert_eq!("Normal", DayRating::Normal.to_string());
    }
}
