// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Cycle numbers. All total over `i32` years, so no status is needed.

use julian_period::CycleIndex;

/// Positions of a year in the three cycles and the Julian Period.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpCycleIndex {
    /// `1..=28`.
    pub solar: u8,
    /// `1..=19`, the Golden Number.
    pub lunar: u8,
    /// `1..=15`.
    pub indiction: u8,
    /// `1..=7980`.
    pub julian_period_year: u16,
}

impl From<CycleIndex> for JpCycleIndex {
    fn from(c: CycleIndex) -> Self {
        Self {
            solar: c.solar,
            lunar: c.lunar,
            indiction: c.indiction,
            julian_period_year: c.julian_period_year,
        }
    }
}

/// Position of `year` in the 28-year Solar cycle.
#[no_mangle]
pub extern "C" fn jp_solar_number(year: i32) -> u8 {
    julian_period::solar_number(year)
}

/// Position of `year` in the 19-year Lunar cycle.
#[no_mangle]
pub extern "C" fn jp_lunar_number(year: i32) -> u8 {
    julian_period::lunar_number(year)
}

/// Position of `year` in the 15-year Indiction cycle.
#[no_mangle]
pub extern "C" fn jp_indiction_number(year: i32) -> u8 {
    julian_period::indiction_number(year)
}

/// Year of the 7980-year Julian Period containing `year`.
#[no_mangle]
pub extern "C" fn jp_julian_period_year_number(year: i32) -> u16 {
    julian_period::julian_period_year_number(year)
}

/// All four cycle positions of `year` at once.
#[no_mangle]
pub extern "C" fn jp_cycle_index(year: i32) -> JpCycleIndex {
    CycleIndex::of(year).into()
}
