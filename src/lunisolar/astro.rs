//! 太陽黃經與合朔時刻的近似計算
//!
//! 採用 Jean Meeus《Astronomical Algorithms》(1998) 的截斷級數。
//! 時刻均為世界時（UT）儒略日；合朔時刻已扣除 ΔT 的近似值。

use std::f64::consts::PI;

use crate::math::int_floor;

/// 度轉弧度
const DR: f64 = PI / 180.0;

/// 1900 年 1 月 1 日附近之朔（`k = 0`）的近似儒略日，用於估算朔序號
pub const NEW_MOON_EPOCH: f64 = 2415021.076998695;

/// 平均朔望月長度（日）
pub const SYNODIC_MONTH: f64 = 29.530588853;

/// 計算太陽黃經時所用的時間起點
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Epoch {
    /// JD 2415021.0（1900 年 1 月 0.5 日）。預設值，與越南曆常見實現的結果逐日一致。
    #[default]
    B1900,
    /// JD 2451545.0（J2000.0），即級數係數所依據的曆元，結果與官方曆書一致。
    J2000,
}

impl Epoch {
    /// 曆元的儒略日
    pub fn jd(&self) -> f64 {
        match self {
            Epoch::B1900 => 2415021.0,
            Epoch::J2000 => 2451545.0,
        }
    }
}

/// 給定時刻 `jd`（UT 儒略日）的太陽視黃經，單位為度，範圍 `[0, 360)`。
///
/// # 用例
///
/// ```
/// use amlich::lunisolar::astro::{solar_longitude, Epoch};
///
/// // 2000 年春分前後
/// let lon = solar_longitude(2451623.815, Epoch::J2000);
/// assert!(lon < 0.1 || lon > 359.9);
/// ```
pub fn solar_longitude(jd: f64, epoch: Epoch) -> f64 {
    let t = (jd - epoch.jd()) / 36525.0;
    let t2 = t * t;
    // 平近點角
    let m = 357.52910 + 35999.05030 * t - 0.0001559 * t2 - 0.00000048 * t * t2;
    // 平黃經
    let l0 = 280.46645 + 36000.76983 * t + 0.0003032 * t2;
    let mut dl = (1.914600 - 0.004817 * t - 0.000014 * t2) * (DR * m).sin();
    dl = dl + (0.019993 - 0.000101 * t) * (DR * 2.0 * m).sin() + 0.000290 * (DR * 3.0 * m).sin();
    let l = l0 + dl;
    l - 360.0 * int_floor(l / 360.0) as f64
}

/// 第 `k` 個朔的時刻（UT 儒略日）。`k = 0` 為 1900 年 1 月 1 日 13:51 UT 之朔，誤差約兩分鐘。
///
/// # 用例
///
/// ```
/// use amlich::lunisolar::astro::new_moon;
///
/// // 2017-12-18 06:30 UT
/// assert!((new_moon(1459) - 2458105.771).abs() < 0.01);
/// ```
pub fn new_moon(k: i32) -> f64 {
    let k = k as f64;
    // 自 1900 年 1 月 0.5 日起算的儒略世紀
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let mut jd1 = 2415020.75933 + 29.53058868 * k + 0.0001178 * t2 - 0.000000155 * t3;
    jd1 = jd1 + 0.00033 * ((166.56 + 132.87 * t - 0.009173 * t2) * DR).sin();
    // 太陽平近點角
    let m = 359.2242 + 29.10535608 * k - 0.0000333 * t2 - 0.00000347 * t3;
    // 月亮平近點角
    let mpr = 306.0253 + 385.81691806 * k + 0.0107306 * t2 + 0.00001236 * t3;
    // 月亮升交點角距
    let f = 21.2964 + 390.67050646 * k - 0.0016528 * t2 - 0.00000239 * t3;
    let mut c1 = (0.1734 - 0.000393 * t) * (m * DR).sin() + 0.0021 * (2.0 * DR * m).sin();
    c1 = c1 - 0.4068 * (mpr * DR).sin() + 0.0161 * (DR * 2.0 * mpr).sin();
    c1 = c1 - 0.0004 * (DR * 3.0 * mpr).sin();
    c1 = c1 + 0.0104 * (DR * 2.0 * f).sin() - 0.0051 * (DR * (m + mpr)).sin();
    c1 = c1 - 0.0074 * (DR * (m - mpr)).sin() + 0.0004 * (DR * (2.0 * f + m)).sin();
    c1 = c1 - 0.0004 * (DR * (2.0 * f - m)).sin() - 0.0006 * (DR * (2.0 * f + mpr)).sin();
    c1 = c1 + 0.0010 * (DR * (2.0 * f - mpr)).sin() + 0.0005 * (DR * (2.0 * mpr + m)).sin();
    let deltat = if t < -11.0 {
        0.001 + 0.000839 * t + 0.0002261 * t2 - 0.00000845 * t3 - 0.000000081 * t * t3
    } else {
        -0.000278 + 0.000265 * t + 0.000262 * t2
    };
    jd1 + c1 - deltat
}

/// 估算 `jdn` 之前最近一朔的序號（向下取整）。
pub fn lunation_index(jdn: i32) -> i32 {
    int_floor((jdn as f64 - NEW_MOON_EPOCH) / SYNODIC_MONTH)
}

/// 估算最接近 `jdn` 之朔的序號（四捨五入）。
pub fn nearest_lunation(jdn: i32) -> i32 {
    int_floor(0.5 + (jdn as f64 - NEW_MOON_EPOCH) / SYNODIC_MONTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitude_range() {
        for i in -2000..2000 {
            let jd = 2451545.0 + i as f64 * 17.3;
            for epoch in [Epoch::B1900, Epoch::J2000] {
                let lon = solar_longitude(jd, epoch);
                assert!((0.0..360.0).contains(&lon), "{jd}: {lon}");
            }
        }
    }

    #[test]
    fn solstice() {
        // 2000-12-21 13:37 UT
        let lon = solar_longitude(2451900.068, Epoch::J2000);
        assert!((lon - 270.0).abs() < 0.05, "{lon}");
    }

    #[test]
    fn new_moons() {
        // 1900-01-01 13:51 UT
        assert!((new_moon(0) - 2415021.077).abs() < 0.01);
        // 2000-01-06 18:14 UT
        assert!((new_moon(1237) - 2451550.26).abs() < 0.01);
    }

    #[test]
    fn old_epoch_branch() {
        // t < -11 世紀，約公元 800 年
        let k = -14000;
        let gap = new_moon(k + 1) - new_moon(k);
        assert!((gap - SYNODIC_MONTH).abs() < 0.6, "{gap}");
    }

    #[test]
    fn lunation_indices() {
        assert_eq!(0, lunation_index(2415022));
        assert_eq!(-1, lunation_index(2415021));
        assert_eq!(0, nearest_lunation(2415010));
        assert_eq!(1459, nearest_lunation(2458106));
    }
}
