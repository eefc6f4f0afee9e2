// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian / Gregorian calendar classification.
//!
//! The Gregorian reform removed ten days: Thursday 1582-10-04 (Julian) was
//! followed by Friday 1582-10-15 (Gregorian). Dates on or before the 14th are
//! read with Julian leap rules, dates after it with Gregorian ones. Both
//! calendars are applied proleptically, and year 0 exists (astronomical year
//! numbering: 1 BCE = 0, 4713 BCE = −4712).

/// Year of the Gregorian reform.
pub const REFORM_YEAR: i32 = 1582;

/// Month of the Gregorian reform.
pub const REFORM_MONTH: u8 = 10;

/// Last day-of-month in October 1582 still read under Julian rules.
pub const LAST_JULIAN_DAY_OF_REFORM_MONTH: u8 = 14;

/// Julian Day Number of 1582-10-15, the first Gregorian date.
pub const GREGORIAN_REFORM_JDN: i64 = 2_299_161;

/// Which leap-year rule governs a date.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Calendar {
    /// Every fourth year is a leap year.
    Julian,
    /// Every fourth year, except centuries not divisible by 400.
    Gregorian,
}

impl Calendar {
    /// The calendar a `(year, month, day)` falls under.
    ///
    /// Total over all integers; the day is only consulted in October 1582.
    #[inline]
    pub const fn of(year: i32, month: u8, day: u8) -> Self {
        if is_gregorian(year, month, day) {
            Self::Gregorian
        } else {
            Self::Julian
        }
    }

    /// Whether `year` has a 29th of February under this calendar.
    pub const fn is_leap_year(self, year: i32) -> bool {
        match self {
            Self::Julian => year % 4 == 0,
            Self::Gregorian => year % 4 == 0 && (year % 100 != 0 || year % 400 == 0),
        }
    }

    /// Number of days in `month` of `year` under this calendar.
    ///
    /// Months outside `1..=12` are treated as 31-day months; callers validate
    /// months before asking.
    pub const fn days_in_month(self, year: i32, month: u8) -> u8 {
        match month {
            2 if self.is_leap_year(year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }
}

impl std::fmt::Display for Calendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Julian => f.write_str("Julian"),
            Self::Gregorian => f.write_str("Gregorian"),
        }
    }
}

/// `true` when the date falls strictly after 1582-10-14.
///
/// ```
/// use julian_period::is_gregorian;
///
/// assert!(!is_gregorian(1582, 10, 14));
/// assert!(is_gregorian(1582, 10, 15));
/// ```
#[inline]
pub const fn is_gregorian(year: i32, month: u8, day: u8) -> bool {
    year > REFORM_YEAR
        || (year == REFORM_YEAR
            && (month > REFORM_MONTH
                || (month == REFORM_MONTH && day > LAST_JULIAN_DAY_OF_REFORM_MONTH)))
}
