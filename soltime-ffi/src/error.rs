// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use soltime::SolarTimeError;
use std::ffi::{c_char, CStr};

/// Status codes returned by soltime-ffi functions.
///
/// cbindgen:prefix-with-name
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoltimeStatus {
    /// Success.
    Ok = 0,
    /// A required pointer was null.
    NullPointer = 1,
    /// Latitude outside [-90, 90].
    InvalidLatitude = 2,
    /// Longitude outside [-180, 180].
    InvalidLongitude = 3,
    /// Averaging interval outside [0, 28800] seconds.
    InvalidInterval = 4,
    /// Year outside the almanac range 1950–2050.
    UnsupportedYear = 5,
    /// Timestamp fields or literal could not be read.
    InvalidTimestamp = 6,
    /// Numeric literal could not be read.
    InvalidNumeric = 7,
    /// Configuration could not be read.
    InvalidConfig = 8,
    /// Result outside the representable date range.
    OutOfRange = 9,
    /// A Rust panic was caught at the boundary.
    Panic = 10,
}

impl From<&SolarTimeError> for SoltimeStatus {
    fn from(err: &SolarTimeError) -> Self {
        match err {
            SolarTimeError::InvalidLatitude(_) => Self::InvalidLatitude,
            SolarTimeError::InvalidLongitude(_) => Self::InvalidLongitude,
            SolarTimeError::InvalidInterval(_) => Self::InvalidInterval,
            SolarTimeError::UnsupportedYear(_) => Self::UnsupportedYear,
            SolarTimeError::InvalidTimestamp(_) => Self::InvalidTimestamp,
            SolarTimeError::InvalidNumeric(_) => Self::InvalidNumeric,
            SolarTimeError::OutOfRange => Self::OutOfRange,
        }
    }
}

impl SoltimeStatus {
    fn message(self) -> &'static CStr {
        match self {
            Self::Ok => c"ok",
            Self::NullPointer => c"null pointer",
            Self::InvalidLatitude => c"invalid latitude",
            Self::InvalidLongitude => c"invalid longitude",
            Self::InvalidInterval => c"invalid data_interval",
            Self::UnsupportedYear => c"unsupported year",
            Self::InvalidTimestamp => c"invalid timestamp",
            Self::InvalidNumeric => c"invalid numeric literal",
            Self::InvalidConfig => c"invalid configuration",
            Self::OutOfRange => c"solar time out of representable range",
            Self::Panic => c"internal panic",
        }
    }
}

/// Static, NUL-terminated description of `status`. Never null.
#[no_mangle]
pub extern "C" fn soltime_status_message(status: SoltimeStatus) -> *const c_char {
    status.message().as_ptr()
}

/// Copy `text` into a caller buffer of `capacity` bytes, truncating and
/// always NUL-terminating. A null buffer or zero capacity is a no-op.
///
/// # Safety
/// `buffer` must be null or valid for `capacity` writable bytes.
pub(crate) unsafe fn write_message(buffer: *mut c_char, capacity: usize, text: &str) {
    if buffer.is_null() || capacity == 0 {
        return;
    }
    let len = text.len().min(capacity - 1);
    unsafe {
        std::ptr::copy_nonoverlapping(text.as_ptr().cast::<c_char>(), buffer, len);
        *buffer.add(len) = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_has_a_status() {
        assert_eq!(
            SoltimeStatus::from(&SolarTimeError::InvalidInterval(-1)),
            SoltimeStatus::InvalidInterval
        );
        assert_eq!(
            SoltimeStatus::from(&SolarTimeError::OutOfRange),
            SoltimeStatus::OutOfRange
        );
    }

    #[test]
    fn message_is_truncated_and_terminated() {
        let mut buffer = [0x7f as c_char; 8];
        unsafe { write_message(buffer.as_mut_ptr(), buffer.len(), "Invalid latitude") };
        let text = unsafe { CStr::from_ptr(buffer.as_ptr()) };
        assert_eq!(text.to_str().unwrap(), "Invalid");
    }
}
