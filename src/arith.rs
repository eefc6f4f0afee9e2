// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Floor and modulo with mathematical (not truncating) semantics.
//!
//! Proleptic dates reach negative years and, further back, negative Julian
//! Days. Truncating division rounds those toward zero and shifts the result
//! by one day or one cycle position, so every calendar formula in this crate
//! goes through these two helpers instead.

/// Largest integer not greater than `x`, returned as `f64`.
///
/// Positive values are truncated, integral values are returned as-is, and
/// negative non-integers step one past their truncation:
///
/// ```
/// use julian_period::floor_toward_neg_inf;
///
/// assert_eq!(floor_toward_neg_inf(2.7), 2.0);
/// assert_eq!(floor_toward_neg_inf(-3.0), -3.0);
/// assert_eq!(floor_toward_neg_inf(-2.3), -3.0);
/// ```
#[inline]
pub fn floor_toward_neg_inf(x: f64) -> f64 {
    if x > 0.0 || x == x.trunc() {
        x.trunc()
    } else {
        x.trunc() - 1.0
    }
}

/// Remainder of `n / m` in `0..m` for any `n` and positive `m`.
///
/// ```
/// use julian_period::positive_mod;
///
/// assert_eq!(positive_mod(30, 28), 2);
/// assert_eq!(positive_mod(-4704, 28), 0);
/// assert_eq!(positive_mod(-1, 19), 18);
/// ```
#[inline]
pub const fn positive_mod(n: i64, m: i64) -> i64 {
    ((n % m) + m) % m
}
