// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! C FFI bindings for **julian-period**.
//!
//! A flat C-compatible API over the civil date ↔ Julian Day converters and
//! the Solar, Lunar, Indiction and Julian Period cycle numbers. Fallible
//! functions return a [`JpStatus`] and write their result through an out
//! pointer; a panic never crosses the boundary.

/// Runs `$body`, mapping an unwinding panic to `$on_panic`.
macro_rules! catch_panic {
    ($on_panic:expr, $body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(status) => status,
            Err(_) => $on_panic,
        }
    };
}
pub(crate) use catch_panic;

mod convert;
mod cycles;
mod error;

pub use convert::*;
pub use cycles::*;
pub use error::*;

/// Returns the julian-period-ffi ABI version (semver-encoded: major*10000 + minor*100 + patch).
#[allow(clippy::erasing_op, clippy::identity_op)]
#[no_mangle]
pub extern "C" fn jp_ffi_version() -> u32 {
    0 * 10000 + 1 * 100 + 0 // 0.1.0
}
