// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calculator configuration across the C boundary.
//!
//! Fields are plain `int32_t` so that an out-of-range value coming from C is
//! reported as [`SoltimeStatus::InvalidConfig`] rather than being undefined
//! behaviour.  The enums below name the accepted values.

#[cfg(feature = "serde")]
use crate::catch_panic;
use crate::error::SoltimeStatus;
use soltime::{EquationOfTime, IntervalAlignment, MeridianReference, SolarTimeConfig};

/// Values for [`SoltimeConfig::equation_of_time`].
///
/// cbindgen:prefix-with-name
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoltimeEquationOfTime {
    Almanac = 0,
    Harmonic = 1,
}

/// Values for [`SoltimeConfig::meridian`].
///
/// cbindgen:prefix-with-name
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoltimeMeridian {
    Greenwich = 0,
    Civil = 1,
}

/// Values for [`SoltimeConfig::alignment`].
///
/// cbindgen:prefix-with-name
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoltimeAlignment {
    Midpoint = 0,
    NearestBoundary = 1,
}

/// Calculator configuration. All zeroes is the default configuration.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SoltimeConfig {
    /// A `SoltimeEquationOfTime` value.
    pub equation_of_time: i32,
    /// A `SoltimeMeridian` value.
    pub meridian: i32,
    /// A `SoltimeAlignment` value.
    pub alignment: i32,
}

impl SoltimeConfig {
    pub(crate) fn to_rust(self) -> Option<SolarTimeConfig> {
        let equation_of_time = match self.equation_of_time {
            x if x == SoltimeEquationOfTime::Almanac as i32 => EquationOfTime::Almanac,
            x if x == SoltimeEquationOfTime::Harmonic as i32 => EquationOfTime::Harmonic,
            _ => return None,
        };
        let meridian = match self.meridian {
            x if x == SoltimeMeridian::Greenwich as i32 => MeridianReference::Greenwich,
            x if x == SoltimeMeridian::Civil as i32 => MeridianReference::Civil,
            _ => return None,
        };
        let alignment = match self.alignment {
            x if x == SoltimeAlignment::Midpoint as i32 => IntervalAlignment::Midpoint,
            x if x == SoltimeAlignment::NearestBoundary as i32 => {
                IntervalAlignment::NearestBoundary
            }
            _ => return None,
        };
        Some(SolarTimeConfig {
            equation_of_time,
            meridian,
            alignment,
        })
    }

    pub(crate) fn from_rust(config: &SolarTimeConfig) -> Self {
        Self {
            equation_of_time: match config.equation_of_time {
                EquationOfTime::Almanac => SoltimeEquationOfTime::Almanac,
                EquationOfTime::Harmonic => SoltimeEquationOfTime::Harmonic,
            } as i32,
            meridian: match config.meridian {
                MeridianReference::Greenwich => SoltimeMeridian::Greenwich,
                MeridianReference::Civil => SoltimeMeridian::Civil,
            } as i32,
            alignment: match config.alignment {
                IntervalAlignment::Midpoint => SoltimeAlignment::Midpoint,
                IntervalAlignment::NearestBoundary => SoltimeAlignment::NearestBoundary,
            } as i32,
        }
    }
}

/// Write the default configuration to `out`.
///
/// # Safety
/// `out` must be a valid, writable pointer to `SoltimeConfig`.
#[no_mangle]
pub unsafe extern "C" fn soltime_config_default(out: *mut SoltimeConfig) -> SoltimeStatus {
    if out.is_null() {
        return SoltimeStatus::NullPointer;
    }
    unsafe { *out = SoltimeConfig::from_rust(&SolarTimeConfig::default()) };
    SoltimeStatus::Ok
}

/// Parse a JSON configuration object such as
/// `{"equation_of_time":"harmonic","alignment":"nearest_boundary"}`.
/// Missing fields take their defaults.
///
/// # Safety
/// `json` must be a valid NUL-terminated string; `out` must be a valid,
/// writable pointer to `SoltimeConfig`.
#[cfg(feature = "serde")]
#[no_mangle]
pub unsafe extern "C" fn soltime_config_from_json(
    json: *const std::ffi::c_char,
    out: *mut SoltimeConfig,
) -> SoltimeStatus {
    catch_panic!(SoltimeStatus::Panic, {
        if json.is_null() || out.is_null() {
            return SoltimeStatus::NullPointer;
        }
        let Ok(text) = unsafe { std::ffi::CStr::from_ptr(json) }.to_str() else {
            return SoltimeStatus::InvalidConfig;
        };
        match serde_json::from_str::<SolarTimeConfig>(text) {
            Ok(config) => {
                unsafe { *out = SoltimeConfig::from_rust(&config) };
                SoltimeStatus::Ok
            }
            Err(_) => SoltimeStatus::InvalidConfig,
        }
    })
}
