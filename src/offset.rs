// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Fixed UTC offset, in hours.

use crate::error::{Error, Result};
use qtty::{Day, Days, Seconds};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Largest accepted offset magnitude, in hours.
pub const MAX_OFFSET_HOURS: f64 = 24.0;

/// A numeric offset from Universal Time: `local = UT + offset`.
///
/// There is no time-zone database behind it; `+5.5` is simply five and a half
/// hours east of Greenwich. The magnitude is limited to 24 hours.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct UtcOffset {
    hours: f64,
}

impl UtcOffset {
    /// Universal Time itself.
    pub const UTC: Self = Self { hours: 0.0 };

    /// Validates and wraps an offset given in hours.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRange`] if `hours` is not finite or `|hours| > 24`.
    pub fn from_hours(hours: f64) -> Result<Self> {
        if !hours.is_finite() || hours.abs() > MAX_OFFSET_HOURS {
            return Err(Error::invalid_range("tz_offset", hours, "-24.0..=24.0 hours"));
        }
        Ok(Self { hours })
    }

    /// The offset in hours.
    #[inline]
    pub const fn hours(self) -> f64 {
        self.hours
    }

    /// The offset as a signed number of seconds.
    #[inline]
    pub fn seconds(self) -> Seconds {
        Seconds::new(self.hours * 3_600.0)
    }

    /// The offset as a fraction of a day.
    #[inline]
    pub fn days(self) -> Days {
        self.seconds().to::<Day>()
    }
}

impl TryFrom<f64> for UtcOffset {
    type Error = Error;

    fn try_from(hours: f64) -> Result<Self> {
        Self::from_hours(hours)
    }
}

impl From<UtcOffset> for f64 {
    fn from(offset: UtcOffset) -> Self {
        offset.hours
    }
}

impl std::fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total_minutes = (self.seconds().value() / 60.0).round() as i64;
        let sign = if total_minutes < 0 { '-' } else { '+' };
        let total_minutes = total_minutes.abs();
        write!(f, "UTC{sign}{:02}:{:02}", total_minutes / 60, total_minutes % 60)
    }
}

#[cfg(feature = "serde")]
impl Serialize for UtcOffset {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.hours)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for UtcOffset {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hours = f64::deserialize(deserializer)?;
        Self::from_hours(hours).map_err(serde::de::Error::custom)
    }
}
