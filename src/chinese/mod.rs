//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 農曆月份與大小月取自預製的年表，見 [`table`]；節氣及干支月由天文計算得出，見 [`solar_term`]。

use serde::{Deserialize, Serialize};

use crate::date::Date;

pub mod festival;
pub mod fmt;
pub mod solar_term;
pub mod table;

/// 農曆一年，自正月初一至次年正月初一前日。
///
/// 支持的年份取決於年表數據，見 [`table`]。
///
/// # 用例
///
/// ```
/// use lunisolar::Date;
/// use lunisolar::chinese::{LunarYear, Month::*};
///
/// let date = Date::from_gregorian(2000, 1, 1).unwrap();
/// let year = LunarYear::from_date(date).unwrap();
///
/// assert_eq!(Ok((1999, Common(11), 25)), year.ymd_for(date));
/// ```
#[derive(Debug, Clone)]
pub struct LunarYear {
    /// 年序，為該年大部分時段所在的公元年
    pub year: i32,
    /// 該年的年表數據
    pub table: &'static table::Year,
    /// 全部月首，包括次年正月用以標記本年最末日
    pub months: Vec<NewMoon>,
}
/// 月首信息
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct NewMoon {
    /// 月名
    pub month: Month,
    /// 月首所在日期
    pub date: Date,
}
/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 由月序及是否為閏月構造。
    pub fn new(num: u32, is_leap: bool) -> Self {
        if is_leap {
            Self::Leap(num)
        } else {
            Self::Common(num)
        }
    }
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
    /// 取得月名的文本形式，十一、十二月稱「冬月」「臘月」。
    pub fn name(&self) -> String {
        fmt::month(*self)
    }
}

/// 農曆日期
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    pub month: Month,
    pub day: u32,
}

impl LunarDate {
    pub fn new(year: i32, month: u32, day: u32, is_leap: bool) -> Self {
        Self {
            year,
            month: Month::new(month, is_leap),
            day,
        }
    }
    /// 取得農曆日期對應的日子，該日不存在或超出年表範圍則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use lunisolar::chinese::LunarDate;
    ///
    /// let date = LunarDate::new(2017, 6, 1, true).to_date().unwrap();
    /// assert_eq!("2017-07-23", date.iso_gregorian());
    /// assert_eq!(None, LunarDate::new(2017, 5, 1, true).to_date());
    /// ```
    pub fn to_date(&self) -> Option<Date> {
        LunarYear::new(self.year)?.date_for(self.month, self.day)
    }
    /// 取得給定日子的農曆日期，超出年表範圍則返回 `None`。
    pub fn from_date(date: Date) -> Option<Self> {
        let (year, month, day) = LunarYear::from_date(date)?.ymd_for(date).ok()?;
        Some(Self { year, month, day })
    }
}

impl LunarYear {
    /// 取得農曆 `year` 年。
    ///
    /// 若年表無該年資料則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use lunisolar::chinese::LunarYear;
    ///
    /// let year = LunarYear::new(2017).unwrap();
    /// assert_eq!(Some(6), year.leap_month());
    /// ```
    pub fn new(year: i32) -> Option<Self> {
        use Month::*;

        let table = table::Year::get(year)?;
        let mut months = Vec::with_capacity(14);
        let mut date = table.new_year;
        for (num, &len) in (1..).zip(&table.month_len) {
            months.push(NewMoon {
                month: Common(num),
                date,
            });
            date = date + len as i32;
            if let Some((leap, leap_len)) = table.leap
                && leap == num
            {
                months.push(NewMoon {
                    month: Leap(num),
                    date,
                });
                date = date + leap_len as i32;
            }
        }
        months.push(NewMoon {
            month: Common(1),
            date,
        });

        Some(LunarYear {
            year,
            table,
            months,
        })
    }
    /// 依特定日期取得其所在年。
    ///
    /// 若年表無該年資料則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use lunisolar::Date;
    /// use lunisolar::chinese::LunarYear;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// let year = LunarYear::from_date(date).unwrap();
    ///
    /// assert_eq!(1999, year.year);
    /// ```
    pub fn from_date(date: Date) -> Option<Self> {
        let y = date.gregorian().0;
        let year = match table::Year::get(y) {
            Some(t) if date >= t.new_year => y,
            _ => y - 1,
        };
        Self::new(year).filter(|ly| ly.contains(date))
    }

    /// 該年首日
    pub fn first_day(&self) -> Date {
        self.months[0].date
    }
    /// 次年首日，即本年最末日的次日
    pub fn end(&self) -> Date {
        self.months[self.months.len() - 1].date
    }
    pub fn contains(&self, date: Date) -> bool {
        (self.first_day()..self.end()).contains(&date)
    }
    /// 該年閏月月序，無閏月則為 `None`。
    pub fn leap_month(&self) -> Option<u32> {
        self.table.leap.map(|(m, _)| m)
    }
    /// 取得該年某月的日數，該年無此月則返回 `None`。
    pub fn month_len(&self, month: Month) -> Option<u32> {
        let idx = self.months[..self.months.len() - 1]
            .iter()
            .position(|m| m.month == month)?;
        Some((self.months[idx + 1].date - self.months[idx].date) as u32)
    }

    /// 取得給定日期在該年的年月日，返回格式為 `(年, 月, 日)`。
    ///
    /// 若所給日期不在該年，則回報 `Err` 並指出該日期在該年之前還是之後。
    ///
    /// # 用例
    ///
    /// ```
    /// use lunisolar::Date;
    /// use lunisolar::chinese::{LunarYear, Month::*};
    ///
    /// let date = Date::from_gregorian(2017, 7, 23).unwrap();
    /// let year = LunarYear::new(2017).unwrap();
    ///
    /// assert_eq!(Ok((2017, Leap(6), 1)), year.ymd_for(date));
    /// ```
    pub fn ymd_for(&self, date: Date) -> Result<(i32, Month, u32), OtherYear> {
        if date < self.first_day() {
            return Err(OtherYear::Before);
        } else if date >= self.end() {
            return Err(OtherYear::After);
        }

        let idx = self.months.partition_point(|m| m.date <= date) - 1;
        let m = self.months[idx];
        Ok((self.year, m.month, (date - m.date) as u32 + 1))
    }

    /// 取得該年某月某日的日期。
    ///
    /// 該年無此月（例如閏月不符），或日序號超出該月日數，則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use lunisolar::chinese::{LunarYear, Month::*};
    ///
    /// let year = LunarYear::new(2024).unwrap();
    /// assert_eq!("2024-02-10", year.date_for(Common(1), 1).unwrap().iso_gregorian());
    /// assert_eq!(None, year.date_for(Leap(1), 1));
    /// ```
    pub fn date_for(&self, month: Month, day: u32) -> Option<Date> {
        let len = self.month_len(month)?;
        if !(1..=len).contains(&day) {
            return None;
        }
        let first = self.months.iter().find(|m| m.month == month)?.date;
        Some(first + (day - 1) as i32)
    }
}

/// 表示給定日期不在該年，並指出其在前還是在後。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OtherYear {
    Before,
    After,
}

/// 取得所給公元年的干支。
///
/// # 用例
///
/// ```
/// use lunisolar::chinese::sexagenary_for_year;
///
/// assert_eq!(1, sexagenary_for_year(-2696));
/// ```
pub fn sexagenary_for_year(year: i32) -> u32 {
    (year.rem_euclid(60) as u32 + 2696) % 60 + 1
}
