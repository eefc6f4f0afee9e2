// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for conversions and civil date construction.
//!
//! Validation is eager: every public entry point checks all of its inputs
//! before doing any arithmetic, so an [`Error`] always names the first
//! violated constraint and no partial result is ever produced.

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The two classes of input failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The value is not finite, or not an integer where one is required.
    InvalidType,
    /// The value is well-formed but outside its declared domain.
    InvalidRange,
}

/// Error type for all fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A numeric input is non-finite or, for integer inputs, fractional.
    #[error("{field} must be a finite {expected}, got {value}")]
    InvalidType {
        /// Name of the offending input.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// What the input should have been (`"integer"`, `"number"`).
        expected: &'static str,
    },

    /// A numeric input lies outside its declared bounds.
    #[error("{field} must be in {expected}, got {value}")]
    InvalidRange {
        /// Name of the offending input.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },
}

impl Error {
    /// Which of the two error classes this is.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidType { .. } => ErrorKind::InvalidType,
            Self::InvalidRange { .. } => ErrorKind::InvalidRange,
        }
    }

    /// Name of the input that failed validation.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidType { field, .. } | Self::InvalidRange { field, .. } => field,
        }
    }

    pub(crate) fn invalid_type(field: &'static str, value: f64, expected: &'static str) -> Self {
        tracing::debug!(field, value, expected, "rejected input: invalid type");
        Self::InvalidType {
            field,
            value,
            expected,
        }
    }

    pub(crate) fn invalid_range(field: &'static str, value: f64, expected: &'static str) -> Self {
        tracing::debug!(field, value, expected, "rejected input: out of range");
        Self::InvalidRange {
            field,
            value,
            expected,
        }
    }
}
