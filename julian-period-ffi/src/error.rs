// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use julian_period::{Error, ErrorKind};

/// Status codes returned by julian-period-ffi functions.
///
/// cbindgen:prefix-with-name
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JpStatus {
    /// Success.
    Ok = 0,
    /// A required output pointer was null.
    NullPointer = 1,
    /// An argument was NaN, infinite or not a whole number where one is required.
    InvalidType = 2,
    /// An argument was outside its permitted range.
    InvalidRange = 3,
    /// The conversion panicked; the output was not written.
    Panic = 4,
}

impl From<&Error> for JpStatus {
    fn from(err: &Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidType => JpStatus::InvalidType,
            ErrorKind::InvalidRange => JpStatus::InvalidRange,
        }
    }
}

impl From<Error> for JpStatus {
    fn from(err: Error) -> Self {
        JpStatus::from(&err)
    }
}
