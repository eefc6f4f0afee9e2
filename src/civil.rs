// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil (proleptic Julian / Gregorian) date and time of day.

use crate::calendar::Calendar;
use crate::cycles::CycleIndex;
use crate::error::{Error, Result};
use crate::julian_day::{gregorian_to_jd, JulianDay, JulianDayPair};
use crate::offset::UtcOffset;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hour used when only a date is given.
pub const DEFAULT_HOUR: u8 = 12;

/// A calendar date with a time of day.
///
/// The year uses astronomical numbering (year 0 exists, 4713 BCE is −4712)
/// and the date is read under Julian rules up to 1582-10-14 and Gregorian
/// rules afterwards. Fields are validated on construction:
///
/// | Field | Domain |
/// |-------|--------|
/// | `month` | `1..=12` |
/// | `day` | `1..=31` |
/// | `hour` | `0..=23` (default 12) |
/// | `minute` | `0..=59` (default 0) |
/// | `second` | `[0, 60)`, may carry milliseconds (default 0) |
///
/// The day is not checked against the month's length; a 31st of February is
/// accepted and simply lands on the corresponding Julian Day in March.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCivilDateTime"))]
pub struct CivilDateTime {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: f64,
}

impl CivilDateTime {
    /// A date at noon.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRange`] if `month` or `day` is out of bounds.
    ///
    /// ```
    /// use julian_period::CivilDateTime;
    ///
    /// let d = CivilDateTime::new(2022, 1, 1)?;
    /// assert_eq!((d.hour(), d.minute(), d.second()), (12, 0, 0.0));
    /// # Ok::<(), julian_period::Error>(())
    /// ```
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self> {
        check_month(month)?;
        check_day(day)?;
        Ok(Self {
            year,
            month,
            day,
            hour: DEFAULT_HOUR,
            minute: 0,
            second: 0.0,
        })
    }

    /// Replaces the time of day.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRange`] if any component is out of bounds or `second`
    /// is not finite.
    pub fn with_time(self, hour: u8, minute: u8, second: f64) -> Result<Self> {
        if hour > 23 {
            return Err(Error::invalid_range("hour", hour.into(), "0..=23"));
        }
        if minute > 59 {
            return Err(Error::invalid_range("minute", minute.into(), "0..=59"));
        }
        if !second.is_finite() || !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_range("second", second, "[0, 60)"));
        }
        Ok(Self {
            hour,
            minute,
            second,
            ..self
        })
    }

    /// Builds a date-time from untyped numbers, as a dynamically typed host
    /// would pass them.
    ///
    /// Missing time components take the noon defaults.
    ///
    /// Hour and minute must be whole numbers: a clock time of `12.5` hours is
    /// rejected, not read as 12:30. Callers holding fractional hours split
    /// them into `hour`, `minute` and `second` first; only `second` carries a
    /// fraction.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidType`] if `year` is not a finite integer.
    /// - [`Error::InvalidRange`] if `month`, `day`, `hour` or `minute` is not
    ///   an integer within its bounds, or `second` is not finite in `[0, 60)`.
    pub fn from_numbers(
        year: f64,
        month: f64,
        day: f64,
        hour: Option<f64>,
        minute: Option<f64>,
        second: Option<f64>,
    ) -> Result<Self> {
        if !is_integral(year) {
            return Err(Error::invalid_type("year", year, "integer"));
        }
        if year < i32::MIN as f64 || year > i32::MAX as f64 {
            return Err(Error::invalid_range("year", year, "a 32-bit signed year"));
        }
        let month = integer_in("month", month, 1, 12, "1..=12")?;
        let day = integer_in("day", day, 1, 31, "1..=31")?;
        let hour = integer_in("hour", hour.unwrap_or(DEFAULT_HOUR.into()), 0, 23, "0..=23")?;
        let minute = integer_in("minute", minute.unwrap_or(0.0), 0, 59, "0..=59")?;

        Self::new(year as i32, month, day)?.with_time(hour, minute, second.unwrap_or(0.0))
    }

    /// Assembles an already-normalized value.
    pub(crate) const fn from_parts(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Astronomical year.
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month, `1..=12`.
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day of the month, `1..=31`.
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Hour, `0..=23`.
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute, `0..=59`.
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Seconds, including any millisecond fraction.
    pub const fn second(&self) -> f64 {
        self.second
    }

    /// The calendar whose leap rules govern this date.
    pub const fn calendar(&self) -> Calendar {
        Calendar::of(self.year, self.month, self.day)
    }

    /// Solar, Lunar and Indiction positions of this date's year.
    pub const fn cycles(&self) -> CycleIndex {
        CycleIndex::of(self.year)
    }

    /// Julian Day of this local date-time.
    pub fn to_julian_day(&self, offset: UtcOffset) -> JulianDay {
        self.to_julian_day_pair(offset).julian_day
    }

    /// Julian Day and Julian Day Number of this local date-time.
    pub fn to_julian_day_pair(&self, offset: UtcOffset) -> JulianDayPair {
        gregorian_to_jd(self, offset)
    }
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}", self.year.unsigned_abs())?;
        } else {
            write!(f, "{:04}", self.year)?;
        }
        write!(
            f,
            "-{:02}-{:02}T{:02}:{:02}:",
            self.month, self.day, self.hour, self.minute
        )?;
        if self.second.fract() == 0.0 {
            write!(f, "{:02}", self.second as u8)
        } else {
            write!(f, "{:06.3}", self.second)
        }
    }
}

/// Unvalidated wire shape of [`CivilDateTime`]; time fields are optional and
/// default to noon.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawCivilDateTime {
    year: i32,
    month: u8,
    day: u8,
    hour: Option<u8>,
    minute: Option<u8>,
    second: Option<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCivilDateTime> for CivilDateTime {
    type Error = Error;

    fn try_from(raw: RawCivilDateTime) -> Result<Self> {
        Self::new(raw.year, raw.month, raw.day)?.with_time(
            raw.hour.unwrap_or(DEFAULT_HOUR),
            raw.minute.unwrap_or(0),
            raw.second.unwrap_or(0.0),
        )
    }
}

fn check_month(month: u8) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_range("month", month.into(), "1..=12"));
    }
    Ok(())
}

fn check_day(day: u8) -> Result<()> {
    if !(1..=31).contains(&day) {
        return Err(Error::invalid_range("day", day.into(), "1..=31"));
    }
    Ok(())
}

#[inline]
fn is_integral(x: f64) -> bool {
    x.is_finite() && x == x.trunc()
}

fn integer_in(field: &'static str, x: f64, lo: u8, hi: u8, expected: &'static str) -> Result<u8> {
    if !is_integral(x) || x < f64::from(lo) || x > f64::from(hi) {
        return Err(Error::invalid_range(field, x, expected));
    }
    Ok(x as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn new_defaults_to_noon() {
        let d = CivilDateTime::new(-4712, 1, 1).unwrap();
        assert_eq!(d.year(), -4712);
        assert_eq!(d.month(), 1);
        assert_eq!(d.day(), 1);
        assert_eq!(d.hour(), 12);
        assert_eq!(d.minute(), 0);
        assert_eq!(d.second(), 0.0);
    }

    #[test]
    fn new_rejects_bad_month_and_day() {
        assert_eq!(
            CivilDateTime::new(2022, 13, 1).unwrap_err(),
            Error::InvalidRange {
                field: "month",
                value: 13.0,
                expected: "1..=12",
            }
        );
        assert_eq!(CivilDateTime::new(2022, 0, 1).unwrap_err().field(), "month");
        assert_eq!(CivilDateTime::new(2022, 1, 0).unwrap_err().field(), "day");
        assert_eq!(CivilDateTime::new(2022, 1, 32).unwrap_err().field(), "day");
    }

    #[test]
    fn day_is_not_checked_against_month_length() {
        assert!(CivilDateTime::new(2023, 2, 31).is_ok());
    }

    #[test]
    fn with_time_bounds() {
        let d = CivilDateTime::new(2022, 6, 1).unwrap();
        assert!(d.with_time(23, 59, 59.999).is_ok());
        assert!(d.with_time(0, 0, 0.0).is_ok());

        let err = d.with_time(24, 0, 0.0).unwrap_err();
        assert_eq!((err.kind(), err.field()), (ErrorKind::InvalidRange, "hour"));
        assert_eq!(d.with_time(0, 60, 0.0).unwrap_err().field(), "minute");
        assert_eq!(d.with_time(0, 0, 60.0).unwrap_err().field(), "second");
        assert_eq!(d.with_time(0, 0, -0.5).unwrap_err().field(), "second");

        let err = d.with_time(0, 0, f64::NAN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
    }

    #[test]
    fn from_numbers_accepts_whole_numbers() {
        let d = CivilDateTime::from_numbers(2022.0, 1.0, 1.0, None, None, None).unwrap();
        assert_eq!(d, CivilDateTime::new(2022, 1, 1).unwrap());

        let d = CivilDateTime::from_numbers(-500.0, 3.0, 4.0, Some(5.0), Some(6.0), Some(7.25))
            .unwrap();
        assert_eq!((d.hour(), d.minute(), d.second()), (5, 6, 7.25));
    }

    #[test]
    fn from_numbers_year_type_errors() {
        for year in [f64::NAN, f64::INFINITY, 1.5, -0.25] {
            let err = CivilDateTime::from_numbers(year, 1.0, 1.0, None, None, None).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidType, "year {year}");
            assert_eq!(err.field(), "year");
        }
    }

    #[test]
    fn from_numbers_range_errors() {
        let cases = [
            ((2022.0, 13.0, 1.0, None, None, None), "month"),
            ((2022.0, 1.5, 1.0, None, None, None), "month"),
            ((2022.0, 1.0, 0.0, None, None, None), "day"),
            ((2022.0, 1.0, f64::NAN, None, None, None), "day"),
            ((2022.0, 1.0, 1.0, Some(24.0), None, None), "hour"),
            ((2022.0, 1.0, 1.0, Some(-1.0), None, None), "hour"),
            ((2022.0, 1.0, 1.0, None, Some(60.0), None), "minute"),
            ((2022.0, 1.0, 1.0, None, None, Some(60.0)), "second"),
            ((2022.0, 1.0, 1.0, None, None, Some(f64::INFINITY)), "second"),
        ];
        for ((y, mo, d, h, mi, s), field) in cases {
            let err = CivilDateTime::from_numbers(y, mo, d, h, mi, s).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidRange, "{field}");
            assert_eq!(err.field(), field);
        }
    }

    #[test]
    fn from_numbers_rejects_fractional_clock_fields() {
        let half_hour = CivilDateTime::from_numbers(2022.0, 1.0, 1.0, Some(12.5), None, None);
        let err = half_hour.unwrap_err();
        assert_eq!((err.kind(), err.field()), (ErrorKind::InvalidRange, "hour"));

        let quarter_minute =
            CivilDateTime::from_numbers(2022.0, 1.0, 1.0, Some(12.0), Some(30.25), None);
        let err = quarter_minute.unwrap_err();
        assert_eq!((err.kind(), err.field()), (ErrorKind::InvalidRange, "minute"));

        let split =
            CivilDateTime::from_numbers(2022.0, 1.0, 1.0, Some(12.0), Some(30.0), Some(15.0))
                .unwrap();
        assert_eq!((split.hour(), split.minute(), split.second()), (12, 30, 15.0));
    }

    #[test]
    fn calendar_and_cycles() {
        let d = CivilDateTime::new(1582, 10, 14).unwrap();
        assert_eq!(d.calendar(), Calendar::Julian);
        let d = CivilDateTime::new(1582, 10, 15).unwrap();
        assert_eq!(d.calendar(), Calendar::Gregorian);
        assert_eq!(d.cycles(), CycleIndex::of(1582));
    }

    #[test]
    fn display() {
        let d = CivilDateTime::new(-4712, 1, 1).unwrap();
        assert_eq!(d.to_string(), "-4712-01-01T12:00:00");

        let d = CivilDateTime::new(33, 4, 3)
            .unwrap()
            .with_time(9, 5, 7.5)
            .unwrap();
        assert_eq!(d.to_string(), "0033-04-03T09:05:07.500");
    }
}
