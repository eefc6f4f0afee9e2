// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Positions within the three chronological cycles of the Julian Period.
//!
//! | Cycle | Length | Position at −4712 |
//! |-------|--------|-------------------|
//! | Solar | 28 | 1 |
//! | Lunar (Metonic / Golden Number) | 19 | 1 |
//! | Indiction | 15 | 1 |
//!
//! Scaliger chose the start of the Julian Period (4713 BCE, astronomical year
//! −4712) as the last year in which all three cycles were at position 1 at
//! once. Because 28, 19 and 15 are pairwise coprime, the triple recurs only
//! after `28 × 19 × 15 = 7980` years, and every year of the period carries a
//! distinct triple. All functions here take an astronomical year and are
//! total over `i32`, year 0 and negative years included.

use crate::arith::positive_mod;

/// Length of the Solar cycle in years.
pub const SOLAR_CYCLE: i64 = 28;

/// Length of the Metonic (Lunar) cycle in years.
pub const LUNAR_CYCLE: i64 = 19;

/// Length of the Indiction cycle in years.
pub const INDICTION_CYCLE: i64 = 15;

/// Length of the Julian Period in years.
pub const JULIAN_PERIOD: i64 = SOLAR_CYCLE * LUNAR_CYCLE * INDICTION_CYCLE;

/// First year of the Julian Period (4713 BCE).
pub const JULIAN_PERIOD_EPOCH_YEAR: i32 = -4712;

// Chinese-remainder weights: each is ≡ 1 modulo its own cycle and ≡ 0
// modulo the other two.
const INDICTION_WEIGHT: i64 = 6916;
const LUNAR_WEIGHT: i64 = 4200;
const SOLAR_WEIGHT: i64 = 4845;

/// Position of `year` in the 28-year Solar cycle, `1..=28`.
///
/// ```
/// assert_eq!(julian_period::solar_number(2025), 18);
/// ```
#[inline]
pub const fn solar_number(year: i32) -> u8 {
    (positive_mod(year as i64 + 8, SOLAR_CYCLE) + 1) as u8
}

/// Position of `year` in the 19-year Metonic cycle (the Golden Number), `1..=19`.
///
/// ```
/// assert_eq!(julian_period::lunar_number(2025), 12);
/// ```
#[inline]
pub const fn lunar_number(year: i32) -> u8 {
    (positive_mod(year as i64, LUNAR_CYCLE) + 1) as u8
}

/// Position of `year` in the 15-year Indiction cycle, `1..=15`.
///
/// ```
/// assert_eq!(julian_period::indiction_number(2025), 3);
/// ```
#[inline]
pub const fn indiction_number(year: i32) -> u8 {
    (positive_mod(year as i64 + 2, INDICTION_CYCLE) + 1) as u8
}

/// Year of the Julian Period, `1..=7980`, recombined from the three cycle
/// positions.
///
/// Equal to `positive_mod(year + 4712, 7980) + 1`; the cycle-based form is
/// what a chronologist computes by hand from the three numbers.
///
/// ```
/// assert_eq!(julian_period::julian_period_year_number(-4712), 1);
/// assert_eq!(julian_period::julian_period_year_number(2025), 6738);
/// ```
pub const fn julian_period_year_number(year: i32) -> u16 {
    let ind0 = indiction_number(year) as i64 - 1;
    let lun0 = lunar_number(year) as i64 - 1;
    let sol0 = solar_number(year) as i64 - 1;

    let combined = INDICTION_WEIGHT * ind0 + LUNAR_WEIGHT * lun0 + SOLAR_WEIGHT * sol0;
    (positive_mod(combined, JULIAN_PERIOD) + 1) as u16
}

/// The cycle positions of one year.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleIndex {
    /// Solar cycle position, `1..=28`.
    pub solar: u8,
    /// Metonic cycle position, `1..=19`.
    pub lunar: u8,
    /// Indiction cycle position, `1..=15`.
    pub indiction: u8,
    /// Year of the Julian Period, `1..=7980`.
    pub julian_period_year: u16,
}

impl CycleIndex {
    /// Computes all four positions for `year`.
    pub const fn of(year: i32) -> Self {
        Self {
            solar: solar_number(year),
            lunar: lunar_number(year),
            indiction: indiction_number(year),
            julian_period_year: julian_period_year_number(year),
        }
    }
}

impl std::fmt::Display for CycleIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "solar {}, lunar {}, indiction {}, Julian Period year {}",
            self.solar, self.lunar, self.indiction, self.julian_period_year
        )
    }
}
