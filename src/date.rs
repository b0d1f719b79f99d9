//! Calendar-independent civil day.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A civil day, independent of any calendar, stored as its Julian day number.
///
/// Days are counted from January 1, 4713 BC in the proleptic Julian calendar,
/// so every date handled by this crate has a positive number.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// JDN of 1970-01-01, the day the Unix epoch falls on.
    pub const UNIX_EPOCH_JDN: u32 = 2440588;

    /// Creates a `Date` from a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN).
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` from a Gregorian calendar date.
    ///
    /// `year` is an astronomical year number (1 BC is `0`). Returns `None`
    /// when the day does not exist, e.g. February 30 or month 13, or when
    /// its day number does not fit in a `u32`.
    ///
    /// # Example
    ///
    /// ```
    /// use lunisolar::Date;
    ///
    /// assert_eq!(2451545, Date::from_gregorian(2000, 1, 1).unwrap().jdn());
    /// assert_eq!(None, Date::from_gregorian(2023, 2, 29));
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
            return None;
        }
        let (y, m, d) = (year as i64, month as i64, day as i64);
        let a = (m - 14) / 12;
        let jdn = (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12
            - (3 * ((y + 4900 + a) / 100)) / 4
            + d
            - 32075;
        u32::try_from(jdn).ok().map(Self::from_jdn)
    }
    /// Splits the date into Gregorian `(year, month, day)`.
    ///
    /// # Example
    ///
    /// ```
    /// use lunisolar::Date;
    ///
    /// assert_eq!((2000, 1, 1), Date::from_jdn(2451545).gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = self.jdn as i64;
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let h = 5 * ((e % 1461) / 4) + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (14 - month) / 12;
        (year as i32, month as i32, day as i32)
    }
    /// Formats the date as ISO 8601 (`YYYY-MM-DD`).
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Day of week in ISO 8601 numbering, `1..=7` for Monday through Sunday.
    ///
    /// # Example
    ///
    /// ```
    /// use lunisolar::Date;
    ///
    /// let date = Date::from_gregorian(2024, 2, 10).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> u32 {
        self.jdn % 7 + 1
    }
    /// Position of the day in the sexagenary cycle, from 1 (甲子) to 60 (癸亥).
    ///
    /// # Example
    ///
    /// ```
    /// use lunisolar::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(55, date.sexagenary()); // 戊午
    /// ```
    pub fn sexagenary(&self) -> u32 {
        (self.jdn + 49) % 60 + 1
    }
    /// Number of days in the Gregorian month containing this date.
    pub fn days_in_month(&self) -> u32 {
        let (y, m, _) = self.gregorian();
        days_in_month(y, m) as u32
    }

    /// ISO 8601 week date as `(week-numbering year, week)`.
    ///
    /// ```
    /// use lunisolar::Date;
    ///
    /// let date = Date::from_gregorian(2021, 1, 3).unwrap();
    /// assert_eq!((2020, 53), date.iso_week());
    /// ```
    pub fn iso_week(&self) -> (i32, u32) {
        let (y, m, d) = self.gregorian();
        let ordinal = ordinal_day_number(m, d, YearType::from_gregorian(y));
        let week = (ordinal - self.day_of_week() as i32 + 10) / 7;
        if week < 1 {
            (y - 1, weeks_in_year(y - 1))
        } else if week as u32 > weeks_in_year(y) {
            (y + 1, 1)
        } else {
            (y, week as u32)
        }
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(self.jdn.wrapping_add_signed(rhs))
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn as i32 - rhs.jdn as i32
    }
}

/// Whether a Gregorian year has 365 or 366 days.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Length of a Gregorian month. Months outside `1..=12` have no days.
///
/// ```
/// use lunisolar::date::days_in_month;
///
/// assert_eq!(29, days_in_month(2024, 2));
/// assert_eq!(28, days_in_month(1900, 2));
/// assert_eq!(0, days_in_month(2024, 13));
/// ```
pub fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + YearType::from_gregorian(year).is_leap() as i32,
        _ => 0,
    }
}

fn ordinal_day_number(month: i32, day: i32, year_type: YearType) -> i32 {
    day + match month {
        1 => 0,
        2 => 31,
        _ => 59 + (153 * (month - 3) + 2) / 5 + year_type.is_leap() as i32,
    }
}

// A year has 53 ISO weeks when it starts on a Thursday, or on a Wednesday in
// a leap year.
fn weeks_in_year(year: i32) -> u32 {
    let Some(jan1) = Date::from_gregorian(year, 1, 1) else {
        return 52;
    };
    match (jan1.day_of_week(), YearType::from_gregorian(year)) {
        (4, _) | (3, YearType::Leap) => 53,
        _ => 52,
    }
}
