// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! C FFI bindings for **soltime**: apparent solar time of civil timestamps.
//!
//! This crate exposes a flat C-compatible API over the calculator: a typed
//! entry point taking broken-down timestamps and numbers, and a literal
//! entry point taking the text a database host hands over.  Every function
//! reports a [`SoltimeStatus`] and never unwinds across the boundary.

mod config;
mod error;
mod time;

pub use config::*;
pub use error::*;
pub use time::*;

/// Run `$body`, turning a panic into `$on_panic`.
#[macro_export]
#[doc(hidden)]
macro_rules! catch_panic {
    ($on_panic:expr, $body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(status) => status,
            Err(_) => $on_panic,
        }
    };
}

/// Returns the soltime-ffi ABI version (semver-encoded: major*10000 + minor*100 + patch).
#[allow(clippy::erasing_op, clippy::identity_op)]
#[no_mangle]
pub extern "C" fn soltime_ffi_version() -> u32 {
    0 * 10000 + 1 * 100 + 0 // 0.1.0
}
