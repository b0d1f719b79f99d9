//! Conversion between Gregorian dates, Chinese lunisolar dates and Unix
//! timestamps.
//!
//! Any of the three is turned into one [`DateInfo`] describing the day in
//! both calendars: weekday, lunar month and day, 干支, solar term, zodiac
//! and festivals. Lunar months come from a pinned table covering lunar
//! years 1900 through 2100 (see [`chinese::table`]); solar terms are
//! computed from a solar theory (see [`chinese::solar_term`]).
//!
//! # Examples
//!
//! ```
//! use lunisolar::DateConverter;
//!
//! let converter = DateConverter::new();
//! let info = converter.date_by_solar(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, info.solar.day_of_week); // Saturday
//! assert_eq!((1999, 11, 25), (info.lunar.year, info.lunar.month, info.lunar.day));
//! assert_eq!("己卯", info.sexagenary.year);
//! ```
//!
//! Dates that do not exist resolve to nothing rather than to an error:
//!
//! ```
//! use lunisolar::DateConverter;
//!
//! let converter = DateConverter::new();
//! assert!(converter.date_by_solar(2023, 2, 30).is_none());
//! assert!(converter.date_by_lunar(2023, 5, 1, true).is_none()); // 2023 leaps month 2
//! ```
//!
//! Days begin at midnight China Standard Time unless configured otherwise,
//! see [`ConverterConfig`].

pub mod chinese;
pub mod config;
pub mod converter;
pub mod date;
pub mod error;
pub mod info;
pub mod time_scales;

pub use chinese::{LunarDate, Month};
pub use config::ConverterConfig;
pub use converter::{
    Calendar, CalendarDate, ChineseCalendar, DateConverter, SolarDate, date_by_lunar,
    date_by_solar, date_by_timestamp, today,
};
pub use date::{Date, YearType};
pub use error::{Error, Result};
pub use info::DateInfo;
pub use time_scales::Timestamp;
