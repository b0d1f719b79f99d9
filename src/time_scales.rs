//! Time scales used by the calendar computations: Unix timestamps for the
//! public API, and Julian-date based TT/UT for the astronomical parts.
//!
//! Solar term instants are computed in TT (dynamical time) and must be
//! converted to UT before the civil date can be read off.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::date::Date;

const MILLIS_PER_DAY: i64 = 86_400_000;
const MILLIS_PER_MINUTE: i64 = 60_000;

/// Julian date of the Unix epoch, 1970-01-01T00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2440587.5;

/// An absolute instant, in milliseconds since the Unix epoch (UTC).
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// The current wall-clock instant.
    pub fn now() -> Self {
        Utc::now().into()
    }
    pub fn millis(&self) -> i64 {
        self.0
    }

    /// The instant at which `date` begins in the timezone `tz_offset_minutes`
    /// east of UTC.
    ///
    /// # Example
    ///
    /// ```
    /// use lunisolar::Date;
    /// use lunisolar::time_scales::Timestamp;
    ///
    /// let date = Date::from_gregorian(1970, 1, 2).unwrap();
    /// assert_eq!(Timestamp(86_400_000), Timestamp::start_of(date, 0));
    /// assert_eq!(Timestamp(57_600_000), Timestamp::start_of(date, 480));
    /// ```
    pub fn start_of(date: Date, tz_offset_minutes: i32) -> Self {
        let days = date.jdn() as i64 - Date::UNIX_EPOCH_JDN as i64;
        Self(days * MILLIS_PER_DAY - tz_offset_minutes as i64 * MILLIS_PER_MINUTE)
    }

    /// The civil date of this instant in the timezone `tz_offset_minutes`
    /// east of UTC.
    ///
    /// Returns `None` for instants before the start of the Julian day count.
    ///
    /// # Example
    ///
    /// ```
    /// use lunisolar::time_scales::Timestamp;
    ///
    /// // 1969-12-31T20:00Z is already January 1 in Beijing.
    /// let ts = Timestamp(-4 * 3_600_000);
    /// assert_eq!("1969-12-31", ts.date_in_timezone(0).unwrap().iso_gregorian());
    /// assert_eq!("1970-01-01", ts.date_in_timezone(480).unwrap().iso_gregorian());
    /// ```
    pub fn date_in_timezone(&self, tz_offset_minutes: i32) -> Option<Date> {
        let local = self
            .0
            .checked_add(tz_offset_minutes as i64 * MILLIS_PER_MINUTE)?;
        let jdn = local.div_euclid(MILLIS_PER_DAY) + Date::UNIX_EPOCH_JDN as i64;
        u32::try_from(jdn).ok().map(Date::from_jdn)
    }

    /// Converts to a `chrono` UTC datetime, if representable.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Self(millis)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp_millis())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// [Terrestrial time](https://en.wikipedia.org/wiki/Terrestrial_Time),
/// represented in Julian date (JD).
///
/// TDB differs from TT by no more than a few milliseconds, so ephemeris
/// results in either scale are treated as TT here.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Tt(pub f64);

/// [Universal time](https://en.wikipedia.org/wiki/Universal_Time),
/// represented in Julian date (JD).
///
/// UTC and UT1 never differ by more than 0.9 s, which is far below the
/// precision of the solar theory in this crate, so they are not told apart.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Ut(pub f64);

impl Ut {
    /// Converts dynamical time into universal time using [`delta_t`].
    ///
    /// # Example
    ///
    /// ```
    /// use lunisolar::time_scales::{Tt, Ut};
    ///
    /// let ut = Ut::from_tt(Tt(2451545.0));
    /// let delta_t = (2451545.0 - ut.0) * 86400.0;
    /// assert!((delta_t - 63.86).abs() < 0.1);
    /// ```
    pub fn from_tt(tt: Tt) -> Self {
        let year = 2000.0 + (tt.0 - 2451544.5) / 365.2425;
        Ut(tt.0 - delta_t(year) / 86400.0)
    }

    /// Returns the date at this time point in the timezone ahead (east) of
    /// UTC by `tz_offset_minutes` minutes. Beijing time is `+480`.
    pub fn date_in_timezone(&self, tz_offset_minutes: i32) -> Date {
        let jdn = (self.0 + tz_offset_minutes as f64 / 1440.0).round() as u32;
        Date::from_jdn(jdn)
    }
}

impl From<Timestamp> for Ut {
    fn from(ts: Timestamp) -> Ut {
        Ut(UNIX_EPOCH_JD + ts.0 as f64 / MILLIS_PER_DAY as f64)
    }
}

/// ΔT = TT − UT in seconds for a decimal `year`.
///
/// Uses the polynomial expressions of Espenak & Meeus (2006), which
/// reproduce the observed values to within a second over the 20th century
/// and extrapolate smoothly afterwards.
pub fn delta_t(year: f64) -> f64 {
    let y = year;
    match y {
        _ if y < 1900.0 => {
            let t = y - 1860.0;
            7.62 + 0.5737 * t - 0.251754 * t.powi(2) + 0.01680668 * t.powi(3)
                - 0.0004473624 * t.powi(4)
                + t.powi(5) / 233174.0
        }
        _ if y < 1920.0 => {
            let t = y - 1900.0;
            -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
                - 0.000197 * t.powi(4)
        }
        _ if y < 1941.0 => {
            let t = y - 1920.0;
            21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
        }
        _ if y < 1961.0 => {
            let t = y - 1950.0;
            29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
        }
        _ if y < 1986.0 => {
            let t = y - 1975.0;
            45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
        }
        _ if y < 2005.0 => {
            let t = y - 2000.0;
            63.86 + 0.3345 * t - 0.060374 * t.powi(2)
                + 0.0017275 * t.powi(3)
                + 0.000651814 * t.powi(4)
                + 0.00002373599 * t.powi(5)
        }
        _ if y < 2050.0 => {
            let t = y - 2000.0;
            62.92 + 0.32217 * t + 0.005589 * t.powi(2)
        }
        _ => {
            let u = (y - 1820.0) / 100.0;
            let correction = if y < 2150.0 { 0.5628 * (2150.0 - y) } else { 0.0 };
            -20.0 + 32.0 * u * u - correction
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn chrono_interop() {
        let dt = Utc.with_ymd_and_hms(2024, 2, 9, 16, 0, 0).unwrap();
        let ts = Timestamp::from(dt);
        assert_eq!(Timestamp(1_707_494_400_000), ts);
        assert_eq!(Some(dt), ts.to_datetime());
        assert_eq!(None, Timestamp(i64::MAX).to_datetime());
    }

    #[test]
    fn timestamp_dates() {
        let data = [
            (0, 0, "1970-01-01"),
            (-1, 0, "1969-12-31"),
            (-1, 480, "1970-01-01"),
            (1_707_494_400_000, 480, "2024-02-10"),
            (1_707_494_399_999, 480, "2024-02-09"),
            (1_707_494_400_000, 0, "2024-02-09"),
        ];
        for (millis, tz, iso) in data {
            let date = Timestamp(millis).date_in_timezone(tz).unwrap();
            assert_eq!(iso, date.iso_gregorian(), "{millis} @ {tz}");
        }
    }

    #[test]
    fn start_of_day_round_trips() {
        for (y, m, d) in [(1900, 1, 31), (1969, 12, 31), (2024, 2, 10), (2101, 1, 28)] {
            let date = Date::from_gregorian(y, m, d).unwrap();
            for tz in [-720, 0, 480, 840] {
                let ts = Timestamp::start_of(date, tz);
                assert_eq!(Some(date), ts.date_in_timezone(tz));
                assert_eq!(Some(date + -1), Timestamp(ts.0 - 1).date_in_timezone(tz));
            }
        }
    }

    #[test]
    fn extreme_timestamps() {
        assert_eq!(None, Timestamp(i64::MAX).date_in_timezone(480));
        assert_eq!(None, Timestamp(i64::MIN).date_in_timezone(0));
    }

    #[test]
    fn to_ut() {
        let ut = Ut::from(Timestamp(0));
        assert_eq!(UNIX_EPOCH_JD, ut.0);
        assert_eq!("1970-01-01", ut.date_in_timezone(0).iso_gregorian());
        let ut = Ut::from(Timestamp(-1));
        assert_eq!("1969-12-31", ut.date_in_timezone(0).iso_gregorian());
    }

    #[test]
    fn delta_t_values() {
        for (year, expected, tolerance) in [
            (1900.0, -2.8, 0.5),
            (1950.0, 29.1, 0.5),
            (2000.0, 63.9, 0.5),
            (2020.0, 71.6, 1.0),
        ] {
            let dt = delta_t(year);
            assert!((dt - expected).abs() <= tolerance, "{year}: {dt}");
        }
    }

    #[test]
    fn tt_to_ut_date() {
        // 2030 小寒, around 07:31 UT on January 5
        let ut = Ut::from_tt(Tt(2462501.166666667 + 5.647029454550371));
        assert!((ut.0 - 2462506.81319).abs() <= 60.0 / 86400.0);
        assert_eq!((2030, 1, 5), ut.date_in_timezone(480).gregorian());
    }
}
