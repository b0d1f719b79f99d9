//! The expanded description of one instant in both calendars.

use serde::{Deserialize, Serialize};

use crate::chinese::{LunarDate, Month};
use crate::date::Date;
use crate::time_scales::Timestamp;

/// Everything known about the civil day an instant falls on.
///
/// Produced only by expanding a [`Timestamp`]; two instants on the same day
/// differ only in [`DateInfo::timestamp`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInfo {
    /// The expanded instant, unchanged.
    pub timestamp: Timestamp,
    pub solar: SolarInfo,
    pub lunar: LunarInfo,
    pub sexagenary: SexagenaryInfo,
    pub solar_term: SolarTermInfo,
    /// Gregorian festivals first, then lunar ones.
    pub festivals: Vec<String>,
}

/// Gregorian fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarInfo {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    /// ISO 8601 numbering, 1 = Monday through 7 = Sunday.
    pub day_of_week: u32,
    /// ISO 8601 `(week-numbering year, week)`.
    pub iso_week: (i32, u32),
    pub is_leap_year: bool,
    pub days_in_month: u32,
    pub constellation: String,
}

/// Chinese lunisolar fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarInfo {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub is_leap: bool,
    pub month_name: String,
    pub day_name: String,
    /// The whole date spelled out, e.g. `甲辰年正月初一`.
    pub full_name: String,
    pub days_in_month: u32,
    /// The leap month of this lunar year, if it has one.
    pub leap_month: Option<u32>,
    pub zodiac: String,
}

/// 干支 of the year, month and day.
///
/// The year follows the lunar year; the month changes on the twelve 節
/// solar terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SexagenaryInfo {
    pub year: String,
    pub month: String,
    pub day: String,
}

/// The solar term in effect on the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarTermInfo {
    /// 1 = 立春 through 24 = 大寒.
    pub number: u32,
    pub name: String,
    /// Days since the term began; 0 on the day of the term itself.
    pub days_since: u32,
}

impl SolarTermInfo {
    /// Whether the term begins on this very day.
    ///
    /// ```
    /// use lunisolar::DateConverter;
    ///
    /// let converter = DateConverter::new();
    /// assert!(converter.date_by_solar(2024, 2, 4).unwrap().solar_term.is_term_day());
    /// assert!(!converter.date_by_solar(2024, 2, 5).unwrap().solar_term.is_term_day());
    /// ```
    pub fn is_term_day(&self) -> bool {
        self.days_since == 0
    }
}

impl DateInfo {
    /// The Gregorian day.
    pub fn solar_date(&self) -> Option<Date> {
        Date::from_gregorian(self.solar.year, self.solar.month, self.solar.day)
    }
    /// The lunar day.
    pub fn lunar_date(&self) -> LunarDate {
        LunarDate {
            year: self.lunar.year,
            month: Month::new(self.lunar.month, self.lunar.is_leap),
            day: self.lunar.day,
        }
    }
}
