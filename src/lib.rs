// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Period Module
//!
//! Conversion between civil dates and the astronomical Julian Day, and the
//! position of a year in the three cycles whose product is Scaliger's
//! 7980-year Julian Period.
//!
//! # Core types
//!
//! - [`CivilDateTime`]: validated proleptic Julian/Gregorian date and time of day.
//! - [`JulianDay`]: instant on the Julian Day axis (a [`qtty::Days`] newtype).
//! - [`JulianDayPair`]: Julian Day plus the Julian Day Number of the civil date.
//! - [`CycleIndex`]: Solar, Lunar, Indiction and Julian-Period positions of a year.
//! - [`UtcOffset`]: numeric offset from Universal Time, in hours.
//! - [`Calendar`]: which leap rule governs a date.
//!
//! # Operations
//!
//! | Function | Result |
//! |----------|--------|
//! | [`solar_number`] | `1..=28` |
//! | [`lunar_number`] | `1..=19` |
//! | [`indiction_number`] | `1..=15` |
//! | [`julian_period_year_number`] | `1..=7980` |
//! | [`gregorian_to_jd`] | [`JulianDayPair`] |
//! | [`jd_to_gregorian`] | [`CivilDateTime`] |
//!
//! The Gregorian calendar applies from 1582-10-15; earlier dates use the
//! Julian calendar. Years use astronomical numbering, so 1 BCE is year 0 and
//! the Julian Period starts in year −4712.
//!
//! ```
//! use julian_period::{jd_to_gregorian, CivilDateTime, CycleIndex, JulianDay, UtcOffset};
//!
//! let start = jd_to_gregorian(JulianDay::EPOCH, UtcOffset::UTC)?;
//! assert_eq!(start, CivilDateTime::new(-4712, 1, 1)?);
//! assert_eq!(CycleIndex::of(start.year()).julian_period_year, 1);
//! # Ok::<(), julian_period::Error>(())
//! ```
//!
//! # Logging
//!
//! Rejected inputs are reported at `debug` level and conversion details at
//! `trace` level through [`tracing`]; install a subscriber to see them.

mod arith;
mod calendar;
mod civil;
mod cycles;
mod error;
mod julian_day;
mod offset;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use arith::{floor_toward_neg_inf, positive_mod};
pub use calendar::{
    is_gregorian, Calendar, GREGORIAN_REFORM_JDN, LAST_JULIAN_DAY_OF_REFORM_MONTH, REFORM_MONTH,
    REFORM_YEAR,
};
pub use civil::{CivilDateTime, DEFAULT_HOUR};
pub use cycles::{
    indiction_number, julian_period_year_number, lunar_number, solar_number, CycleIndex,
    INDICTION_CYCLE, JULIAN_PERIOD, JULIAN_PERIOD_EPOCH_YEAR, LUNAR_CYCLE, SOLAR_CYCLE,
};
pub use error::{Error, ErrorKind, Result};
pub use julian_day::{gregorian_to_jd, jd_to_gregorian, JulianDay, JulianDayPair, MAX_JULIAN_DAY};
pub use offset::{UtcOffset, MAX_OFFSET_HOURS};
