//! 二十四節氣
//!
//! 以 Meeus《Astronomical Algorithms》第 25 章的低精度太陽理論計算太陽視黃經，
//! 再以牛頓迭代求黃經達 15° 整倍數的時刻，精度約為一刻鐘，按北京時間取日期。
//!
//! 本模塊有兩種節氣編號：
//!
//! - 序號（`number`）：`1..=24` 對應立春到大寒，與 [`fmt::solar_term`](super::fmt::solar_term) 一致
//! - 年內索引（`index`）：`0..24` 對應一個公曆年內的小寒到冬至

use std::f64::consts::PI;

use crate::config::CST_OFFSET_MINUTES;
use crate::date::Date;
use crate::time_scales::{Tt, Ut};

const TROPICAL_YEAR: f64 = 365.2422;

/// 太陽視黃經（度，`0.0..360.0`）
pub fn apparent_longitude(tt: Tt) -> f64 {
    let t = (tt.0 - 2451545.0) / 36525.0;
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t * t) * PI / 180.0;
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t) * PI / 180.0;
    (l0 + c - 0.00569 - 0.00478 * omega.sin()).rem_euclid(360.0)
}

/// 取得 `year` 年第 `index` 個節氣的交節時刻（力學時）。
///
/// # Panics
///
/// 若 `index` 不在 `0..24` 間則 panic。
pub fn term_instant(year: i32, index: usize) -> Tt {
    assert!(index < 24, "solar term index {} not in 0..24", index);
    let target = (285 + 15 * index) as f64 % 360.0;
    let month = index as i32 / 2 + 1;
    let day = if index % 2 == 0 { 6 } else { 21 };
    let mut jd = Date::from_gregorian(year, month, day)
        .map_or(0.0, |d| d.jdn() as f64 - 0.5);
    for _ in 0..20 {
        let diff = (target - apparent_longitude(Tt(jd)) + 180.0).rem_euclid(360.0) - 180.0;
        jd += diff * TROPICAL_YEAR / 360.0;
        if diff.abs() < 1e-6 {
            break;
        }
    }
    Tt(jd)
}

/// 取得 `year` 年第 `index` 個節氣交節的日期（北京時間）。
///
/// # 用例
///
/// ```
/// use lunisolar::chinese::solar_term;
///
/// assert_eq!("2024-02-04", solar_term::term_date(2024, 2).iso_gregorian()); // 立春
/// assert_eq!("2024-12-21", solar_term::term_date(2024, 23).iso_gregorian()); // 冬至
/// ```
///
/// # Panics
///
/// 若 `index` 不在 `0..24` 間則 panic。
pub fn term_date(year: i32, index: usize) -> Date {
    Ut::from_tt(term_instant(year, index)).date_in_timezone(CST_OFFSET_MINUTES)
}

/// 年內索引轉為節氣序號
pub fn number(index: usize) -> u32 {
    (index as u32 + 22) % 24 + 1
}

/// 取得給定日期所在節氣，返回 `(序號, 交節後日數)`，日數為 0 表示當日交節。
///
/// # 用例
///
/// ```
/// use lunisolar::Date;
/// use lunisolar::chinese::solar_term;
///
/// let date = Date::from_gregorian(2000, 1, 1).unwrap();
/// assert_eq!((22, 10), solar_term::term_for(date)); // 冬至過後第 10 天
/// ```
pub fn term_for(date: Date) -> (u32, u32) {
    let (y, m, _) = date.gregorian();
    let first = (m as usize - 1) * 2;
    for index in [first + 1, first] {
        let start = term_date(y, index);
        if date >= start {
            return (number(index), (date - start) as u32);
        }
    }
    let (y, index) = if first == 0 { (y - 1, 23) } else { (y, first - 1) };
    let start = term_date(y, index);
    (number(index), (date - start) as u32)
}

/// 取得給定日期所在月的干支序號，`1..=60`。
///
/// 干支月以「節」（小寒、立春、驚蟄等十二節）為界，與農曆月無關。
///
/// # 用例
///
/// ```
/// use lunisolar::Date;
/// use lunisolar::chinese::{fmt, solar_term};
///
/// let date = Date::from_gregorian(2024, 2, 10).unwrap();
/// assert_eq!("丙寅", fmt::sexagenary(solar_term::month_pillar(date)));
/// ```
pub fn month_pillar(date: Date) -> u32 {
    let (y, m, _) = date.gregorian();
    let passed = if date >= term_date(y, (m as usize - 1) * 2) {
        m
    } else {
        m - 1
    };
    ((y - 1900) * 12 + passed + 12).rem_euclid(60) as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms_2024() {
        #[rustfmt::skip]
        let dates = [
            (1, 6), (1, 20), (2, 4), (2, 19), (3, 5), (3, 20),
            (4, 4), (4, 19), (5, 5), (5, 20), (6, 5), (6, 21),
            (7, 6), (7, 22), (8, 7), (8, 22), (9, 7), (9, 22),
            (10, 8), (10, 23), (11, 7), (11, 22), (12, 6), (12, 21),
        ];
        for (index, (m, d)) in dates.into_iter().enumerate() {
            assert_eq!((2024, m, d), term_date(2024, index).gregorian(), "{index}");
        }
    }

    #[test]
    fn winter_solstices() {
        for (year, iso) in [
            (1999, "1999-12-22"),
            (2000, "2000-12-21"),
            (2016, "2016-12-21"),
            (2017, "2017-12-22"),
        ] {
            assert_eq!(iso, term_date(year, 23).iso_gregorian());
        }
    }

    #[test]
    fn terms_for_dates() {
        let dataset = [
            ((2016, 11, 29), (20, 7)),
            ((2016, 12, 7), (21, 0)),
            ((2016, 12, 21), (22, 0)),
            ((2016, 12, 22), (22, 1)),
            ((2017, 1, 20), (24, 0)),
            ((2017, 2, 3), (1, 0)),
            ((2017, 12, 7), (21, 0)),
            ((2017, 12, 21), (21, 14)),
            ((2017, 12, 22), (22, 0)),
            ((2024, 1, 1), (22, 10)),
        ];
        for ((y, m, d), std) in dataset {
            assert_eq!(std, term_for(Date::from_gregorian(y, m, d).unwrap()), "{y}-{m}-{d}");
        }
    }

    #[test]
    fn numbering() {
        assert_eq!(23, number(0)); // 小寒
        assert_eq!(1, number(2)); // 立春
        assert_eq!(22, number(23)); // 冬至
    }

    #[test]
    fn month_pillars() {
        let dataset = [
            ((1900, 1, 1), 13),  // 丙子
            ((1900, 1, 31), 14), // 丁丑
            ((2024, 2, 3), 2),   // 乙丑
            ((2024, 2, 4), 3),   // 丙寅
            ((2000, 1, 1), 13),  // 丙子
        ];
        for ((y, m, d), std) in dataset {
            assert_eq!(std, month_pillar(Date::from_gregorian(y, m, d).unwrap()), "{y}-{m}-{d}");
        }
    }

    #[test]
    fn longitude_at_j2000() {
        let lon = apparent_longitude(Tt(2451545.0));
        assert!((lon - 280.37).abs() < 0.05, "{lon}");
    }
}
