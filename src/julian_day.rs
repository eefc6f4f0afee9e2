// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day and the civil ↔ Julian Day conversions.
//!
//! Both directions follow Meeus, *Astronomical Algorithms* (2nd ed.), ch. 7:
//!
//! - [`gregorian_to_jd`] folds January and February into months 13 and 14 of
//!   the previous year, applies the century correction `B = 2 − A + ⌊A/4⌋`
//!   for Gregorian dates, and adds the UT day fraction.
//! - [`jd_to_gregorian`] runs the back-substitution, rebuilds the time of day
//!   at millisecond resolution and carries any overflow up to the month.
//!
//! Every floor goes through [`floor_toward_neg_inf`](crate::floor_toward_neg_inf)
//! so that proleptic years before the common era come out right.
//!
//! # Quick example
//! ```rust
//! use julian_period::{gregorian_to_jd, jd_to_gregorian, CivilDateTime, UtcOffset};
//!
//! let date = CivilDateTime::new(2022, 1, 1)?;
//! let pair = gregorian_to_jd(&date, UtcOffset::UTC);
//! assert_eq!(pair.julian_day.value(), 2_459_581.0);
//! assert_eq!(pair.julian_day_number, 2_459_581);
//!
//! let back = jd_to_gregorian(pair.julian_day, UtcOffset::UTC)?;
//! assert_eq!(back, date);
//! # Ok::<(), julian_period::Error>(())
//! ```

use crate::arith::floor_toward_neg_inf as floor;
use crate::calendar::{is_gregorian, Calendar, GREGORIAN_REFORM_JDN};
use crate::civil::CivilDateTime;
use crate::error::{Error, Result};
use crate::offset::UtcOffset;
use chrono::{DateTime, Utc};
use qtty::{Day, Days, Second, Seconds};
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// JD of the Unix epoch (1970-01-01T00:00:00Z).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// `JD = MJD + MJD_EPOCH`.
const MJD_EPOCH: Days = Days::new(2_400_000.5);

/// Largest Julian Day magnitude accepted by the inverse conversion; keeps the
/// resulting year well inside `i32`.
pub const MAX_JULIAN_DAY: f64 = 1.0e11;

// ═══════════════════════════════════════════════════════════════════════════
// JulianDay
// ═══════════════════════════════════════════════════════════════════════════

/// A point on the Julian Day axis (days since −4712-01-01 12:00 UT).
///
/// Stores a single [`Days`] quantity. Unlike a dynamical-time Julian Date,
/// no ΔT is involved: the value is on the same Universal Time axis as the
/// civil dates it is converted from.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDay {
    quantity: Days,
}

impl JulianDay {
    /// Start of the Julian Period: −4712-01-01 12:00 UT.
    pub const EPOCH: Self = Self::new(0.0);

    /// Midnight starting 1582-10-15, the first day of the Gregorian calendar.
    pub const GREGORIAN_REFORM: Self = Self::new(2_299_160.5);

    /// J2000.0: 2000-01-01 12:00.
    pub const J2000: Self = Self::new(2_451_545.0);

    /// Create from a raw day count.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Integer Julian Day Number of the UT day containing this instant
    /// (days start at noon).
    #[inline]
    pub fn day_number(&self) -> i64 {
        floor(self.value() + 0.5) as i64
    }

    /// Modified Julian Date, `JD − 2 400 000.5`.
    #[inline]
    pub fn to_mjd(&self) -> f64 {
        (self.quantity - MJD_EPOCH).value()
    }

    /// Civil date and time for this instant, seen from `offset`.
    ///
    /// # Errors
    ///
    /// See [`jd_to_gregorian`].
    pub fn to_civil(self, offset: UtcOffset) -> Result<CivilDateTime> {
        jd_to_gregorian(self, offset)
    }

    /// Build from a `chrono::DateTime<Utc>`.
    ///
    /// The timestamp is placed on the Julian Day axis through the Unix epoch;
    /// leap seconds are ignored, as in POSIX time.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let seconds = Seconds::new(datetime.timestamp() as f64);
        let nanos = Seconds::new(datetime.timestamp_subsec_nanos() as f64 / 1e9);
        Self::from_days(Days::new(UNIX_EPOCH_JD) + (seconds + nanos).to::<Day>())
    }

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value is not finite or falls outside chrono's
    /// representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let since_epoch = (self.quantity - Days::new(UNIX_EPOCH_JD))
            .to::<Second>()
            .value();
        if !since_epoch.is_finite() {
            return None;
        }
        let secs = since_epoch.floor();
        let nanos = ((since_epoch - secs) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(secs as i64, nanos)
    }
}

impl std::fmt::Display for JulianDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {}", self.value())
    }
}

#[cfg(feature = "serde")]
impl Serialize for JulianDay {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDay {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

impl Add<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl AddAssign<Days> for JulianDay {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl Sub<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl SubAssign<Days> for JulianDay {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl Sub for JulianDay {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

impl From<Days> for JulianDay {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl From<JulianDay> for Days {
    #[inline]
    fn from(jd: JulianDay) -> Self {
        jd.quantity
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Forward conversion
// ═══════════════════════════════════════════════════════════════════════════

/// Result of [`gregorian_to_jd`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JulianDayPair {
    /// The instant, including the time of day shifted to UT.
    pub julian_day: JulianDay,
    /// Julian Day Number of the civil date alone (the JD of its noon,
    /// ignoring time of day and offset).
    pub julian_day_number: i64,
}

/// Converts a local civil date-time to a Julian Day.
///
/// `offset` is the zone the clock time was read in; it is subtracted to get
/// Universal Time before the day fraction is added. Inputs are validated by
/// construction of [`CivilDateTime`] and [`UtcOffset`], so this direction
/// cannot fail.
///
/// ```
/// use julian_period::{gregorian_to_jd, CivilDateTime, UtcOffset};
///
/// let epoch = CivilDateTime::new(-4712, 1, 1)?;
/// let pair = gregorian_to_jd(&epoch, UtcOffset::UTC);
/// assert_eq!(pair.julian_day.value(), 0.0);
/// assert_eq!(pair.julian_day_number, 0);
/// # Ok::<(), julian_period::Error>(())
/// ```
pub fn gregorian_to_jd(date: &CivilDateTime, offset: UtcOffset) -> JulianDayPair {
    // January and February count as months 13 and 14 of the previous year.
    let shift: u8 = if date.month() < 3 { 1 } else { 0 };
    let year = f64::from(date.year()) - f64::from(shift);
    let month = date.month() + 12 * shift;

    let correction = if is_gregorian(
        date.year().saturating_sub(i32::from(shift)),
        month,
        date.day(),
    ) {
        let a = floor(year / 100.0);
        2.0 - a + floor(a / 4.0)
    } else {
        0.0
    };

    // Ends in .5: the midnight opening the civil date.
    let midnight = floor(365.25 * (year + 4716.0))
        + floor(30.6001 * (f64::from(month) + 1.0))
        + f64::from(date.day())
        + correction
        - 1524.5;

    let local_seconds = f64::from(date.hour()) * 3_600.0
        + f64::from(date.minute()) * 60.0
        + date.second();
    let day_fraction = (local_seconds - offset.seconds().value()) / SECONDS_PER_DAY;

    let pair = JulianDayPair {
        julian_day: JulianDay::new(midnight + day_fraction),
        julian_day_number: (midnight + 0.5) as i64,
    };
    tracing::trace!(
        %date,
        %offset,
        julian_day = pair.julian_day.value(),
        julian_day_number = pair.julian_day_number,
        "civil date converted to Julian Day"
    );
    pair
}

// ═══════════════════════════════════════════════════════════════════════════
// Inverse conversion
// ═══════════════════════════════════════════════════════════════════════════

/// Converts a Julian Day to the civil date-time seen from `offset`.
///
/// Dates on or after JD 2 299 161 use the Gregorian calendar, earlier ones
/// the Julian calendar. The time of day is rounded to the millisecond and
/// carried (second → minute → hour → day → month → year) when rounding
/// reaches the next unit. Round trips through [`gregorian_to_jd`] hold for
/// every valid civil date, including proleptic years before the Julian
/// Period whose Julian Days are negative.
///
/// # Errors
///
/// - [`Error::InvalidType`] if the Julian Day is not finite.
/// - [`Error::InvalidRange`] if its magnitude exceeds [`MAX_JULIAN_DAY`].
///
/// ```
/// use julian_period::{jd_to_gregorian, CivilDateTime, JulianDay, UtcOffset};
///
/// let civil = jd_to_gregorian(JulianDay::EPOCH, UtcOffset::UTC)?;
/// assert_eq!(civil, CivilDateTime::new(-4712, 1, 1)?);
/// # Ok::<(), julian_period::Error>(())
/// ```
pub fn jd_to_gregorian(jd: JulianDay, offset: UtcOffset) -> Result<CivilDateTime> {
    let value = jd.value();
    if !value.is_finite() {
        return Err(Error::invalid_type("julian_day", value, "number"));
    }
    if value.abs() > MAX_JULIAN_DAY {
        return Err(Error::invalid_range(
            "julian_day",
            value,
            "-1e11..=1e11 days",
        ));
    }

    // Local days start at midnight, Julian Days at noon.
    let shifted = value + offset.hours() / 24.0 + 0.5;
    let z = floor(shifted);
    let f = shifted - z;

    let a = if z >= GREGORIAN_REFORM_JDN as f64 {
        let alpha = floor((z - 1_867_216.25) / 36_524.25);
        z + 1.0 + alpha - floor(alpha / 4.0)
    } else {
        z
    };
    let b = a + 1524.0;
    let c = floor((b - 122.1) / 365.25);
    let d = floor(365.25 * c);
    let e = floor((b - d) / 30.6001);

    let day_with_fraction = b - d - floor(30.6001 * e) + f;
    let day = floor(day_with_fraction);
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    let time = TimeOfDay::from_day_fraction(day_with_fraction - day);

    let mut year = year as i32;
    let mut month = month as u8;
    let mut day = day as u8;
    if time.next_day {
        day += 1;
    }

    // A carried day may run past the end of the month.
    let calendar = Calendar::of(year, month, day);
    if day > calendar.days_in_month(year, month) {
        tracing::trace!(year, month, day, %calendar, "day overflow rolled into next month");
        day = 1;
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }

    let civil = CivilDateTime::from_parts(year, month, day, time.hour, time.minute, time.second);
    tracing::trace!(julian_day = value, %offset, %civil, "Julian Day converted to civil date");
    Ok(civil)
}

/// Clock time rebuilt from a day fraction in `[0, 1)`.
#[derive(Debug, Copy, Clone, PartialEq)]
struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: f64,
    /// Rounding reached 24:00 and the day must advance.
    next_day: bool,
}

impl TimeOfDay {
    fn from_day_fraction(fraction: f64) -> Self {
        let total = round_millis(fraction * SECONDS_PER_DAY);

        let mut hour = (total / 3_600.0).trunc();
        let rest = total - hour * 3_600.0;
        let mut minute = (rest / 60.0).trunc();
        let mut second = round_millis(rest - minute * 60.0);

        if second >= 60.0 {
            second -= 60.0;
            minute += 1.0;
        }
        if minute >= 60.0 {
            minute -= 60.0;
            hour += 1.0;
        }
        let next_day = hour >= 24.0;
        if next_day {
            tracing::trace!(fraction, "time of day carried past midnight");
            hour -= 24.0;
        }

        Self {
            hour: hour as u8,
            minute: minute as u8,
            second,
            next_day,
        }
    }
}

#[inline]
fn round_millis(seconds: f64) -> f64 {
    (seconds * 1_000.0).round() / 1_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::TimeZone;

    fn civil(y: i32, mo: u8, d: u8, h: u8, mi: u8, s: f64) -> CivilDateTime {
        CivilDateTime::new(y, mo, d)
            .unwrap()
            .with_time(h, mi, s)
            .unwrap()
    }

    fn offset(hours: f64) -> UtcOffset {
        UtcOffset::from_hours(hours).unwrap()
    }

    #[test]
    fn epoch_is_day_zero() {
        let pair = gregorian_to_jd(&civil(-4712, 1, 1, 12, 0, 0.0), UtcOffset::UTC);
        assert_eq!(pair.julian_day, JulianDay::EPOCH);
        assert_eq!(pair.julian_day_number, 0);
    }

    #[test]
    fn new_year_2022() {
        let pair = gregorian_to_jd(&civil(2022, 1, 1, 12, 0, 0.0), UtcOffset::UTC);
        assert_eq!(pair.julian_day.value(), 2_459_581.0);
        assert_eq!(pair.julian_day_number, 2_459_581);
    }

    #[test]
    fn j2000() {
        let pair = gregorian_to_jd(&civil(2000, 1, 1, 12, 0, 0.0), UtcOffset::UTC);
        assert_eq!(pair.julian_day, JulianDay::J2000);
    }

    #[test]
    fn meeus_reference_dates() {
        // Astronomical Algorithms, example 7.a and the table following 7.b.
        let cases = [
            (civil(1957, 10, 4, 19, 26, 24.0), 2_436_116.31),
            (civil(333, 1, 27, 12, 0, 0.0), 1_842_713.0),
            (civil(1987, 6, 19, 12, 0, 0.0), 2_446_966.0),
            (civil(1600, 12, 31, 0, 0, 0.0), 2_305_812.5),
            (civil(837, 4, 10, 7, 12, 0.0), 2_026_871.8),
            (civil(-1000, 7, 12, 12, 0, 0.0), 1_356_001.0),
            (civil(-1001, 8, 17, 21, 36, 0.0), 1_355_671.4),
            (civil(-4712, 1, 1, 0, 0, 0.0), -0.5),
        ];
        for (date, expected) in cases {
            let jd = gregorian_to_jd(&date, UtcOffset::UTC).julian_day.value();
            assert!((jd - expected).abs() < 1e-6, "{date}: {jd} != {expected}");
        }
    }

    #[test]
    fn reform_skips_ten_days() {
        let last_julian = gregorian_to_jd(&civil(1582, 10, 4, 12, 0, 0.0), UtcOffset::UTC);
        let first_gregorian = gregorian_to_jd(&civil(1582, 10, 15, 12, 0, 0.0), UtcOffset::UTC);
        assert_eq!(last_julian.julian_day_number, 2_299_160);
        assert_eq!(first_gregorian.julian_day_number, GREGORIAN_REFORM_JDN);
        assert_eq!(
            first_gregorian.julian_day - last_julian.julian_day,
            Days::new(1.0)
        );
    }

    #[test]
    fn skipped_reform_days_read_as_julian() {
        // 1582-10-05..=14 never existed; they are read with Julian rules and
        // land ten days later on the Gregorian side.
        let skipped = gregorian_to_jd(&civil(1582, 10, 10, 12, 0, 0.0), UtcOffset::UTC);
        let gregorian = gregorian_to_jd(&civil(1582, 10, 20, 12, 0, 0.0), UtcOffset::UTC);
        assert_eq!(skipped, gregorian);
        let back = jd_to_gregorian(skipped.julian_day, UtcOffset::UTC).unwrap();
        assert_eq!(back, civil(1582, 10, 20, 12, 0, 0.0));
    }

    #[test]
    fn day_number_ignores_time_and_offset() {
        let noon = gregorian_to_jd(&civil(2024, 3, 15, 12, 0, 0.0), UtcOffset::UTC);
        let early = gregorian_to_jd(&civil(2024, 3, 15, 0, 30, 0.0), offset(9.0));
        assert_eq!(noon.julian_day_number, early.julian_day_number);
        assert!(early.julian_day < noon.julian_day);
    }

    #[test]
    fn offset_shifts_to_universal_time() {
        let utc = gregorian_to_jd(&civil(2024, 3, 15, 6, 0, 0.0), UtcOffset::UTC);
        let east = gregorian_to_jd(&civil(2024, 3, 15, 12, 0, 0.0), offset(6.0));
        assert!((east.julian_day - utc.julian_day).abs() < Days::new(1e-9));
    }

    #[test]
    fn inverse_of_epoch() {
        let date = jd_to_gregorian(JulianDay::EPOCH, UtcOffset::UTC).unwrap();
        assert_eq!(date, civil(-4712, 1, 1, 12, 0, 0.0));
    }

    #[test]
    fn inverse_across_reform() {
        let date = jd_to_gregorian(JulianDay::new(2_299_160.0), UtcOffset::UTC).unwrap();
        assert_eq!(date, civil(1582, 10, 4, 12, 0, 0.0));
        let date = jd_to_gregorian(JulianDay::new(2_299_161.0), UtcOffset::UTC).unwrap();
        assert_eq!(date, civil(1582, 10, 15, 12, 0, 0.0));
        let date = jd_to_gregorian(JulianDay::GREGORIAN_REFORM, UtcOffset::UTC).unwrap();
        assert_eq!(date, civil(1582, 10, 15, 0, 0, 0.0));
    }

    #[test]
    fn inverse_applies_offset() {
        let date = jd_to_gregorian(JulianDay::new(2_459_581.0), offset(-13.0)).unwrap();
        assert_eq!(date, civil(2021, 12, 31, 23, 0, 0.0));
    }

    #[test]
    fn rounding_carries_into_next_month() {
        // 0.2 ms before 2023-02-01T00:00Z.
        let jd = JulianDay::new(2_459_976.5 - 0.0002 / SECONDS_PER_DAY);
        let date = jd_to_gregorian(jd, UtcOffset::UTC).unwrap();
        assert_eq!(date, civil(2023, 2, 1, 0, 0, 0.0));
    }

    #[test]
    fn rounding_carries_into_next_year() {
        let jd = JulianDay::new(2_460_310.5 - 0.0002 / SECONDS_PER_DAY);
        let date = jd_to_gregorian(jd, UtcOffset::UTC).unwrap();
        assert_eq!(date, civil(2024, 1, 1, 0, 0, 0.0));
    }

    #[test]
    fn rounding_carries_within_month() {
        // 2024-03-15T10:59:59.9998Z rounds up to 11:00.
        let start = gregorian_to_jd(&civil(2024, 3, 15, 11, 0, 0.0), UtcOffset::UTC).julian_day;
        let date = jd_to_gregorian(start - Days::new(0.0002 / SECONDS_PER_DAY), UtcOffset::UTC)
            .unwrap();
        assert_eq!(date, civil(2024, 3, 15, 11, 0, 0.0));
    }

    #[test]
    fn time_of_day_carry_chain() {
        let t = TimeOfDay::from_day_fraction(1.0 - 1e-10);
        assert_eq!((t.hour, t.minute, t.second, t.next_day), (0, 0, 0.0, true));

        let t = TimeOfDay::from_day_fraction(0.5);
        assert_eq!((t.hour, t.minute, t.second, t.next_day), (12, 0, 0.0, false));

        let t = TimeOfDay::from_day_fraction(3_723.5 / SECONDS_PER_DAY);
        assert_eq!((t.hour, t.minute, t.second, t.next_day), (1, 2, 3.5, false));
    }

    #[test]
    fn inverse_rejects_non_finite() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = jd_to_gregorian(JulianDay::new(v), UtcOffset::UTC).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidType);
            assert_eq!(err.field(), "julian_day");
        }
    }

    #[test]
    fn inverse_rejects_huge_values() {
        let err = jd_to_gregorian(JulianDay::new(2.0e11), UtcOffset::UTC).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
    }

    #[test]
    fn round_trips() {
        let dates = [
            civil(2024, 2, 29, 8, 30, 45.0),
            civil(1500, 2, 29, 12, 0, 0.0),
            civil(1582, 10, 4, 23, 59, 59.0),
            civil(1582, 10, 15, 0, 0, 0.0),
            civil(0, 2, 29, 6, 0, 0.0),
            civil(-1000, 7, 15, 18, 45, 30.5),
            civil(-4712, 1, 1, 12, 0, 0.0),
            civil(1999, 12, 31, 23, 59, 59.999),
            civil(2100, 3, 1, 0, 0, 0.0),
        ];
        for date in dates {
            for hours in [0.0, 5.5, -8.0, 13.75] {
                let jd = gregorian_to_jd(&date, offset(hours)).julian_day;
                let back = jd_to_gregorian(jd, offset(hours)).unwrap();
                assert_eq!(back, date, "offset {hours}");
            }
        }
    }

    #[test]
    fn julian_day_arithmetic() {
        let mut jd = JulianDay::J2000;
        jd += Days::new(1.5);
        assert_eq!(jd.value(), 2_451_546.5);
        jd -= Days::new(0.5);
        assert_eq!(jd - JulianDay::J2000, Days::new(1.0));
        assert_eq!((jd - Days::new(1.0)), JulianDay::J2000);
        assert_eq!((JulianDay::J2000 + Days::new(2.0)).value(), 2_451_547.0);
    }

    #[test]
    fn julian_day_number_of_instant() {
        assert_eq!(JulianDay::new(2_459_581.0).day_number(), 2_459_581);
        assert_eq!(JulianDay::new(2_459_581.49).day_number(), 2_459_581);
        assert_eq!(JulianDay::new(2_459_581.5).day_number(), 2_459_582);
        assert_eq!(JulianDay::new(-0.5).day_number(), 0);
        assert_eq!(JulianDay::new(-0.75).day_number(), -1);
    }

    #[test]
    fn mjd() {
        assert_eq!(JulianDay::J2000.to_mjd(), 51_544.5);
    }

    #[test]
    fn display() {
        assert_eq!(JulianDay::new(2_459_581.0).to_string(), "JD 2459581");
        assert_eq!(JulianDay::new(-0.5).to_string(), "JD -0.5");
    }

    #[test]
    fn utc_roundtrip() {
        let dt = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let jd = JulianDay::from_utc(dt);
        assert!((jd - JulianDay::J2000).abs() < Days::new(1e-9));
        let back = jd.to_utc().expect("to_utc");
        let delta_ns = back.timestamp_nanos_opt().unwrap() - dt.timestamp_nanos_opt().unwrap();
        assert!(delta_ns.abs() < 1_000, "roundtrip error: {delta_ns} ns");
    }

    #[test]
    fn utc_out_of_range() {
        assert!(JulianDay::new(f64::NAN).to_utc().is_none());
        assert!(JulianDay::new(1.0e15).to_utc().is_none());
    }

    #[test]
    fn utc_agrees_with_civil_conversion() {
        let dt = Utc.with_ymd_and_hms(2024, 7, 4, 18, 30, 15).unwrap();
        let from_chrono = JulianDay::from_utc(dt);
        let from_civil = civil(2024, 7, 4, 18, 30, 15.0).to_julian_day(UtcOffset::UTC);
        assert!((from_chrono - from_civil).abs() < Days::new(1e-9));
    }
}
