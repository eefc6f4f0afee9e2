// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use crate::catch_panic;
use crate::error::JpStatus;
use julian_period::{CivilDateTime, JulianDay, JulianDayPair, Result, UtcOffset};

/// Civil date and time of day for C interop.
///
/// Years use astronomical numbering (1 BCE is year 0).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JpDateTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
}

impl JpDateTime {
    fn into_civil(self) -> Result<CivilDateTime> {
        CivilDateTime::new(self.year, self.month, self.day)?.with_time(
            self.hour,
            self.minute,
            self.second,
        )
    }

    fn from_civil(date: &CivilDateTime) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            hour: date.hour(),
            minute: date.minute(),
            second: date.second(),
        }
    }
}

/// Julian Day of an instant together with the Julian Day Number of its civil date.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JpJulianDay {
    pub julian_day: f64,
    pub julian_day_number: i64,
}

impl From<JulianDayPair> for JpJulianDay {
    fn from(pair: JulianDayPair) -> Self {
        Self {
            julian_day: pair.julian_day.value(),
            julian_day_number: pair.julian_day_number,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Civil date → Julian Day
// ═══════════════════════════════════════════════════════════════════════════

/// Convert a civil date-time observed at `tz_offset_hours` east of UT.
///
/// Returns `InvalidRange` for an out-of-range field or offset.
///
/// # Safety
/// `out` must be a valid, writable pointer to `JpJulianDay`.
#[no_mangle]
pub unsafe extern "C" fn jp_gregorian_to_jd(
    date: JpDateTime,
    tz_offset_hours: f64,
    out: *mut JpJulianDay,
) -> JpStatus {
    catch_panic!(JpStatus::Panic, {
        if out.is_null() {
            return JpStatus::NullPointer;
        }
        let converted = date.into_civil().and_then(|civil| {
            let offset = UtcOffset::from_hours(tz_offset_hours)?;
            Ok(civil.to_julian_day_pair(offset))
        });
        match converted {
            Ok(pair) => {
                unsafe { *out = pair.into() };
                JpStatus::Ok
            }
            Err(err) => err.into(),
        }
    })
}

/// Like [`jp_gregorian_to_jd`] but takes every field as a double, for hosts
/// without fixed-width integers.
///
/// A NaN, infinite or fractional year yields `InvalidType`; a fractional or
/// out-of-range month, day, hour or minute yields `InvalidRange`.
///
/// # Safety
/// `out` must be a valid, writable pointer to `JpJulianDay`.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn jp_gregorian_to_jd_f64(
    year: f64,
    month: f64,
    day: f64,
    hour: f64,
    minute: f64,
    second: f64,
    tz_offset_hours: f64,
    out: *mut JpJulianDay,
) -> JpStatus {
    catch_panic!(JpStatus::Panic, {
        if out.is_null() {
            return JpStatus::NullPointer;
        }
        let converted = CivilDateTime::from_numbers(
            year,
            month,
            day,
            Some(hour),
            Some(minute),
            Some(second),
        )
        .and_then(|civil| {
            let offset = UtcOffset::from_hours(tz_offset_hours)?;
            Ok(civil.to_julian_day_pair(offset))
        });
        match converted {
            Ok(pair) => {
                unsafe { *out = pair.into() };
                JpStatus::Ok
            }
            Err(err) => err.into(),
        }
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Julian Day → civil date
// ═══════════════════════════════════════════════════════════════════════════

/// Convert a Julian Day to the civil date-time observed at `tz_offset_hours`.
///
/// Returns `InvalidType` for a NaN or infinite `jd` and `InvalidRange` for
/// an out-of-range `jd` or offset.
///
/// # Safety
/// `out` must be a valid, writable pointer to `JpDateTime`.
#[no_mangle]
pub unsafe extern "C" fn jp_jd_to_gregorian(
    jd: f64,
    tz_offset_hours: f64,
    out: *mut JpDateTime,
) -> JpStatus {
    catch_panic!(JpStatus::Panic, {
        if out.is_null() {
            return JpStatus::NullPointer;
        }
        let converted = UtcOffset::from_hours(tz_offset_hours)
            .and_then(|offset| JulianDay::new(jd).to_civil(offset));
        match converted {
            Ok(date) => {
                unsafe { *out = JpDateTime::from_civil(&date) };
                JpStatus::Ok
            }
            Err(err) => err.into(),
        }
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Helpers
// ═══════════════════════════════════════════════════════════════════════════

/// Whether the given date falls on or after the Gregorian reform (1582-10-15).
#[no_mangle]
pub extern "C" fn jp_is_gregorian(year: i32, month: u8, day: u8) -> bool {
    julian_period::is_gregorian(year, month, day)
}

/// Modified Julian Day of a Julian Day.
#[no_mangle]
pub extern "C" fn jp_jd_to_mjd(jd: f64) -> f64 {
    JulianDay::new(jd).to_mjd()
}
