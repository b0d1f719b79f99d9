//! 農曆年表數據
//!
//! 採用廣為流傳的 1900–2100 年壓縮農曆表（`calendar.js` 一系程序所用者），每年一個 17 位的字：
//!
//! - 第 0–3 位：閏月月序，無閏月為 0
//! - 第 4–15 位：十二個平月的大小，`0x10000 >> m` 位為 1 表示 `m` 月為大月（30 日），否則為小月（29 日）
//! - 第 16 位：閏月大小，為 1 表示閏大月
//!
//! 以 1900 年正月初一（公曆 1900-01-31）為起點，逐年累加得各年正月初一。
//! 表中數據即本程序換算的唯一依據，更換數據必須同時更新 [`TABLE_VERSION`]。

use once_cell::sync::Lazy;

use crate::date::Date;

/// 所用年表的版本標識
pub const TABLE_VERSION: &str = "packed-1900-2100/1";
/// 年表首年
pub const FIRST_YEAR: i32 = 1900;
/// 年表末年
pub const LAST_YEAR: i32 = 2100;

/// 1900 年正月初一（公曆 1900-01-31）的儒略日數
const EPOCH_JDN: u32 = 2415051;

#[rustfmt::skip]
static PACKED: [u32; (LAST_YEAR - FIRST_YEAR + 1) as usize] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520,                                                                                  // 2100
];

/// 解碼後的一年數據
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Year {
    /// 農曆年序，與該年大部分時段所在公元年相同
    pub year: i32,
    /// 正月初一所在日期
    pub new_year: Date,
    /// 正月至十二月各平月日數
    pub month_len: [u32; 12],
    /// 閏月月序及其日數
    pub leap: Option<(u32, u32)>,
}

impl Year {
    /// 取得農曆 `year` 年的數據，年表無該年則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use lunisolar::chinese::table::Year;
    ///
    /// let year = Year::get(2017).unwrap();
    /// assert_eq!("2017-01-28", year.new_year.iso_gregorian());
    /// assert_eq!(Some((6, 30)), year.leap);
    /// assert!(Year::get(2101).is_none());
    /// ```
    pub fn get(year: i32) -> Option<&'static Self> {
        let idx = usize::try_from(year.checked_sub(FIRST_YEAR)?).ok()?;
        DATA.get(idx)
    }

    /// 全年日數
    pub fn days(&self) -> u32 {
        self.month_len.iter().sum::<u32>() + self.leap.map_or(0, |(_, len)| len)
    }

    fn decode(year: i32, word: u32, new_year: Date) -> Self {
        let month_len = std::array::from_fn(|i| {
            if word & (0x10000u32 >> (i + 1)) != 0 { 30 } else { 29 }
        });
        let leap = match word & 0xf {
            0 => None,
            m => Some((m, if word & 0x10000 != 0 { 30 } else { 29 })),
        };
        Self {
            year,
            new_year,
            month_len,
            leap,
        }
    }
}

static DATA: Lazy<Vec<Year>> = Lazy::new(|| {
    let mut new_year = Date::from_jdn(EPOCH_JDN);
    let data: Vec<_> = (FIRST_YEAR..)
        .zip(PACKED)
        .map(|(year, word)| {
            let rec = Year::decode(year, word, new_year);
            new_year = new_year + rec.days() as i32;
            rec
        })
        .collect();
    log::debug!(
        "decoded lunar table {} ({} years, ending {})",
        TABLE_VERSION,
        data.len(),
        new_year.iso_gregorian()
    );
    data
});

/// 年表所覆蓋的首日與末日（含）。
///
/// # 用例
///
/// ```
/// use lunisolar::chinese::table;
///
/// let (first, last) = table::supported_dates();
/// assert_eq!("1900-01-31", first.iso_gregorian());
/// assert_eq!("2101-01-28", last.iso_gregorian());
/// ```
pub fn supported_dates() -> (Date, Date) {
    let first = Date::from_jdn(EPOCH_JDN);
    let last = DATA
        .last()
        .map_or(first, |y| y.new_year + (y.days() as i32 - 1));
    (first, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_years() {
        let dataset = [
            (1900, "1900-01-31"),
            (1901, "1901-02-19"),
            (1950, "1950-02-17"),
            (1970, "1970-02-06"),
            (2000, "2000-02-05"),
            (2017, "2017-01-28"),
            (2023, "2023-01-22"),
            (2024, "2024-02-10"),
            (2025, "2025-01-29"),
            (2050, "2050-01-23"),
            (2100, "2100-02-09"),
        ];
        for (year, iso) in dataset {
            assert_eq!(iso, Year::get(year).unwrap().new_year.iso_gregorian());
        }
    }

    #[test]
    fn leap_months() {
        for (year, leap) in [
            (2000, None),
            (2001, Some(4)),
            (2017, Some(6)),
            (2020, Some(4)),
            (2023, Some(2)),
            (2025, Some(6)),
            (2033, Some(11)),
        ] {
            assert_eq!(leap, Year::get(year).unwrap().leap.map(|(m, _)| m), "{year}");
        }
    }

    #[test]
    fn month_lengths() {
        let year = Year::get(2023).unwrap();
        assert_eq!([29, 30, 29, 30, 30, 29, 30, 30, 29, 30, 29, 30], year.month_len);
        assert_eq!(Some((2, 29)), year.leap);
        assert_eq!(384, year.days());
    }

    #[test]
    fn years_are_contiguous() {
        for y in FIRST_YEAR..LAST_YEAR {
            let this = Year::get(y).unwrap();
            let next = Year::get(y + 1).unwrap();
            assert_eq!(next.new_year - this.new_year, this.days() as i32);
            assert!((353..=385).contains(&this.days()), "{y}: {}", this.days());
        }
    }

    #[test]
    fn out_of_table() {
        assert!(Year::get(FIRST_YEAR - 1).is_none());
        assert!(Year::get(LAST_YEAR + 1).is_none());
        assert!(Year::get(i32::MIN).is_none());
    }
}
