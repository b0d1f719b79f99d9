//! The conversion pipeline.
//!
//! Every entry point ends in the same two steps: an input date is *resolved*
//! to the [`Timestamp`] at which that day begins, and a timestamp is
//! *expanded* into a [`DateInfo`]. Gregorian and lunar inputs share the
//! expansion, so both always describe a given day identically.
//!
//! # Examples
//!
//! ```
//! use lunisolar::DateConverter;
//!
//! let converter = DateConverter::new();
//!
//! let by_solar = converter.date_by_solar(2024, 2, 10).unwrap();
//! let by_lunar = converter.date_by_lunar(2024, 1, 1, false).unwrap();
//! assert_eq!(by_solar, by_lunar);
//! assert_eq!("甲辰", by_solar.sexagenary.year);
//!
//! assert!(converter.date_by_solar(2023, 2, 30).is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::chinese::{self, LunarDate, LunarYear, festival, fmt, solar_term};
use crate::config::ConverterConfig;
use crate::date::{Date, YearType};
use crate::error::{Error, Result};
use crate::info::{DateInfo, LunarInfo, SexagenaryInfo, SolarInfo, SolarTermInfo};
use crate::time_scales::Timestamp;

/// A Gregorian calendar date, not yet validated.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SolarDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl SolarDate {
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }
}

/// Input to [`Calendar::resolve`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CalendarDate {
    Solar(SolarDate),
    Lunar(LunarDate),
}

impl From<SolarDate> for CalendarDate {
    fn from(date: SolarDate) -> Self {
        Self::Solar(date)
    }
}

impl From<LunarDate> for CalendarDate {
    fn from(date: LunarDate) -> Self {
        Self::Lunar(date)
    }
}

/// A calendar able to place dates on the timeline and describe instants.
pub trait Calendar {
    /// Returns the instant at which `date` begins, or `None` if no such day
    /// exists in the supported range.
    fn resolve(&self, date: CalendarDate) -> Option<Timestamp>;
    /// Describes the day `timestamp` falls on.
    fn expand(&self, timestamp: Timestamp) -> Result<DateInfo>;
}

/// The Chinese lunisolar calendar backed by [`chinese::table`], with day
/// boundaries taken in a fixed-offset reference timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChineseCalendar {
    utc_offset_minutes: i32,
}

impl Default for ChineseCalendar {
    fn default() -> Self {
        Self {
            utc_offset_minutes: ConverterConfig::default().utc_offset_minutes,
        }
    }
}

impl ChineseCalendar {
    pub fn new(config: &ConverterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            utc_offset_minutes: config.utc_offset_minutes,
        })
    }

    pub fn utc_offset_minutes(&self) -> i32 {
        self.utc_offset_minutes
    }

    fn date_info(&self, timestamp: Timestamp, date: Date, year: &LunarYear) -> Option<DateInfo> {
        let (y, m, d) = date.gregorian();
        let (lunar_year, month, day) = year.ymd_for(date).ok()?;
        let year_num = chinese::sexagenary_for_year(lunar_year);
        let (term, days_since) = solar_term::term_for(date);

        Some(DateInfo {
            timestamp,
            solar: SolarInfo {
                year: y,
                month: m,
                day: d,
                day_of_week: date.day_of_week(),
                iso_week: date.iso_week(),
                is_leap_year: YearType::from_gregorian(y).is_leap(),
                days_in_month: date.days_in_month(),
                constellation: fmt::constellation(m, d).to_owned(),
            },
            lunar: LunarInfo {
                year: lunar_year,
                month: month.num(),
                day,
                is_leap: month.is_leap(),
                month_name: month.name(),
                day_name: fmt::day(day),
                full_name: fmt::lunar_date(lunar_year, month, day),
                days_in_month: year.month_len(month).unwrap_or_default(),
                leap_month: year.leap_month(),
                zodiac: fmt::zodiac(year_num).to_owned(),
            },
            sexagenary: SexagenaryInfo {
                year: fmt::sexagenary(year_num),
                month: fmt::sexagenary(solar_term::month_pillar(date)),
                day: fmt::sexagenary(date.sexagenary()),
            },
            solar_term: SolarTermInfo {
                number: term,
                name: fmt::solar_term(term).to_owned(),
                days_since,
            },
            festivals: festival::for_date(date, year)
                .into_iter()
                .map(str::to_owned)
                .collect(),
        })
    }
}

impl Calendar for ChineseCalendar {
    fn resolve(&self, date: CalendarDate) -> Option<Timestamp> {
        let day = match date {
            CalendarDate::Solar(SolarDate { year, month, day }) => {
                Date::from_gregorian(year, month, day)
                    .filter(|&d| LunarYear::from_date(d).is_some())
            }
            CalendarDate::Lunar(lunar) => lunar.to_date(),
        };
        let Some(day) = day else {
            log::debug!("{:?} does not exist in the supported range", date);
            return None;
        };
        Some(Timestamp::start_of(day, self.utc_offset_minutes))
    }

    fn expand(&self, timestamp: Timestamp) -> Result<DateInfo> {
        let info = timestamp
            .date_in_timezone(self.utc_offset_minutes)
            .and_then(|date| {
                log::trace!("expanding {} as {}", timestamp, date.iso_gregorian());
                self.date_info(timestamp, date, &LunarYear::from_date(date)?)
            });
        info.ok_or_else(|| {
            log::debug!("{} is outside the lunar table", timestamp);
            Error::OutOfRange(timestamp)
        })
    }
}

/// Converts Gregorian dates, lunar dates and timestamps into [`DateInfo`].
#[derive(Debug, Clone, Default)]
pub struct DateConverter<C = ChineseCalendar> {
    calendar: C,
}

impl DateConverter<ChineseCalendar> {
    /// A converter for the Chinese calendar in China Standard Time.
    pub fn new() -> Self {
        Self::default()
    }

    /// A converter for the Chinese calendar with days taken in the timezone
    /// named by `config`.
    ///
    /// # Example
    ///
    /// ```
    /// use lunisolar::{ConverterConfig, DateConverter};
    ///
    /// let config = ConverterConfig { utc_offset_minutes: 0 };
    /// let converter = DateConverter::with_config(&config).unwrap();
    /// let info = converter.date_by_solar(1970, 1, 2).unwrap();
    /// assert_eq!(86_400_000, info.timestamp.millis());
    /// ```
    pub fn with_config(config: &ConverterConfig) -> Result<Self> {
        Ok(Self::with_calendar(ChineseCalendar::new(config)?))
    }
}

impl<C: Calendar> DateConverter<C> {
    pub fn with_calendar(calendar: C) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Describes a Gregorian date.
    ///
    /// Returns `None` when the date does not exist (e.g. February 30) or
    /// lies outside the lunar table.
    pub fn date_by_solar(&self, year: i32, month: i32, day: i32) -> Option<DateInfo> {
        self.date_by(SolarDate::new(year, month, day).into())
    }

    /// Describes a lunar date; `is_leap` selects the leap month.
    ///
    /// Returns `None` when the year has no such month (including a leap flag
    /// on a month that is not the year's leap month), when the day exceeds
    /// the month's length, or when the year lies outside the lunar table.
    ///
    /// # Example
    ///
    /// ```
    /// use lunisolar::DateConverter;
    ///
    /// let converter = DateConverter::new();
    /// let info = converter.date_by_lunar(2017, 6, 1, true).unwrap();
    /// assert_eq!((2017, 7, 23), (info.solar.year, info.solar.month, info.solar.day));
    /// assert!(converter.date_by_lunar(2017, 5, 1, true).is_none());
    /// ```
    pub fn date_by_lunar(
        &self,
        year: i32,
        month: u32,
        day: u32,
        is_leap: bool,
    ) -> Option<DateInfo> {
        self.date_by(LunarDate::new(year, month, day, is_leap).into())
    }

    /// Describes the day `timestamp` falls on.
    pub fn date_by_timestamp(&self, timestamp: impl Into<Timestamp>) -> Result<DateInfo> {
        self.calendar.expand(timestamp.into())
    }

    /// Describes the current day. Reads the system clock.
    pub fn today(&self) -> Result<DateInfo> {
        self.date_by_timestamp(Timestamp::now())
    }

    fn date_by(&self, date: CalendarDate) -> Option<DateInfo> {
        let timestamp = self.calendar.resolve(date)?;
        match self.calendar.expand(timestamp) {
            Ok(info) => Some(info),
            Err(e) => {
                log::warn!("resolved {:?} to {} but could not expand it: {}", date, timestamp, e);
                None
            }
        }
    }
}

/// [`DateConverter::date_by_solar`] on the default converter.
pub fn date_by_solar(year: i32, month: i32, day: i32) -> Option<DateInfo> {
    DateConverter::new().date_by_solar(year, month, day)
}

/// [`DateConverter::date_by_lunar`] on the default converter.
pub fn date_by_lunar(year: i32, month: u32, day: u32, is_leap: bool) -> Option<DateInfo> {
    DateConverter::new().date_by_lunar(year, month, day, is_leap)
}

/// [`DateConverter::date_by_timestamp`] on the default converter.
pub fn date_by_timestamp(timestamp: impl Into<Timestamp>) -> Result<DateInfo> {
    DateConverter::new().date_by_timestamp(timestamp)
}

/// [`DateConverter::today`] on the default converter.
pub fn today() -> Result<DateInfo> {
    DateConverter::new().today()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chinese::table;

    #[test]
    fn resolves_to_start_of_day() {
        let calendar = ChineseCalendar::default();
        let ts = calendar.resolve(SolarDate::new(2024, 2, 10).into()).unwrap();
        assert_eq!(Timestamp(1_707_494_400_000), ts);
        let ts = calendar.resolve(LunarDate::new(2024, 1, 1, false).into()).unwrap();
        assert_eq!(Timestamp(1_707_494_400_000), ts);
    }

    #[test]
    fn rejects_dates_outside_table() {
        let calendar = ChineseCalendar::default();
        for date in [
            SolarDate::new(1900, 1, 30),
            SolarDate::new(2101, 1, 29),
            SolarDate::new(2023, 2, 29),
        ] {
            assert_eq!(None, calendar.resolve(date.into()), "{date:?}");
        }
        assert!(calendar.resolve(SolarDate::new(1900, 1, 31).into()).is_some());
        assert!(calendar.resolve(SolarDate::new(2101, 1, 28).into()).is_some());
        assert_eq!(None, calendar.resolve(LunarDate::new(1899, 12, 1, false).into()));
        assert_eq!(None, calendar.resolve(LunarDate::new(2101, 1, 1, false).into()));
    }

    #[test]
    fn expands_fields() {
        let info = DateConverter::new().date_by_solar(2024, 2, 10).unwrap();
        assert_eq!(
            SolarInfo {
                year: 2024,
                month: 2,
                day: 10,
                day_of_week: 6,
                iso_week: (2024, 6),
                is_leap_year: true,
                days_in_month: 29,
                constellation: "水瓶座".into(),
            },
            info.solar
        );
        assert_eq!(
            LunarInfo {
                year: 2024,
                month: 1,
                day: 1,
                is_leap: false,
                month_name: "正月".into(),
                day_name: "初一".into(),
                full_name: "甲辰年正月初一".into(),
                days_in_month: 29,
                leap_month: None,
                zodiac: "龍".into(),
            },
            info.lunar
        );
        assert_eq!(
            SexagenaryInfo {
                year: "甲辰".into(),
                month: "丙寅".into(),
                day: "甲辰".into(),
            },
            info.sexagenary
        );
        assert_eq!((1, 6), (info.solar_term.number, info.solar_term.days_since));
        assert_eq!("立春", info.solar_term.name);
        assert!(!info.solar_term.is_term_day());
        assert_eq!(vec!["春節".to_owned()], info.festivals);
    }

    #[test]
    fn timezone_moves_day_boundary() {
        // 2024-02-09T20:00Z
        let ts = Timestamp(1_707_508_800_000);
        let cst = DateConverter::new().date_by_timestamp(ts).unwrap();
        assert_eq!((2024, 1, 1), (cst.lunar.year, cst.lunar.month, cst.lunar.day));

        let utc = DateConverter::with_config(&ConverterConfig {
            utc_offset_minutes: 0,
        })
        .unwrap();
        assert_eq!(0, utc.calendar().utc_offset_minutes());
        assert_eq!(480, DateConverter::new().calendar().utc_offset_minutes());
        let info = utc.date_by_timestamp(ts).unwrap();
        assert_eq!((2023, 12, 30), (info.lunar.year, info.lunar.month, info.lunar.day));
        assert_eq!(vec!["除夕".to_owned()], info.festivals);
    }

    #[test]
    fn out_of_range_timestamps() {
        let converter = DateConverter::new();
        let (first, last) = table::supported_dates();
        let before = Timestamp::start_of(first, 480).millis() - 1;
        let after = Timestamp::start_of(last + 1, 480).millis();
        assert!(converter.date_by_timestamp(before + 1).is_ok());
        assert!(converter.date_by_timestamp(after - 1).is_ok());
        for millis in [i64::MIN, before, after, i64::MAX] {
            assert!(
                matches!(converter.date_by_timestamp(millis), Err(Error::OutOfRange(Timestamp(m))) if m == millis),
                "{millis}"
            );
        }
    }

    #[test]
    fn term_days() {
        let converter = DateConverter::new();
        for ((y, m, d), term) in [((2024, 2, 4), "立春"), ((2024, 12, 21), "冬至")] {
            let info = converter.date_by_solar(y, m, d).unwrap();
            assert!(info.solar_term.is_term_day(), "{y}-{m}-{d}");
            assert_eq!(term, info.solar_term.name);
        }
    }

    #[test]
    fn rejects_invalid_config() {
        let config = ConverterConfig {
            utc_offset_minutes: 24 * 60,
        };
        assert!(matches!(
            DateConverter::with_config(&config),
            Err(Error::InvalidOffset(1440))
        ));
    }
}
