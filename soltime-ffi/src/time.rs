// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI entry points for the solar-time conversion.

use crate::catch_panic;
use crate::config::SoltimeConfig;
use crate::error::{write_message, SoltimeStatus};
use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc,
};
use soltime::{CivilTimestamp, Numeric, SolarTimeCalculator, SolarTimeConfig, SolarTimeError};
use std::ffi::{c_char, CStr};

// ═══════════════════════════════════════════════════════════════════════════
// C-repr types
// ═══════════════════════════════════════════════════════════════════════════

/// Date-time breakdown for C interop.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SoltimeDateTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nanosecond: u32,
}

impl SoltimeDateTime {
    fn to_naive(self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month.into(), self.day.into())?.and_hms_nano_opt(
            self.hour.into(),
            self.minute.into(),
            self.second.into(),
            self.nanosecond,
        )
    }

    fn from_chrono(dt: &DateTime<Utc>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month() as u8,
            day: dt.day() as u8,
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            second: dt.second() as u8,
            nanosecond: dt.nanosecond(),
        }
    }
}

/// How the fields of a [`SoltimeTimestamp`] are read.
///
/// cbindgen:prefix-with-name
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoltimeTimestampKind {
    /// Wall clock at `offset_seconds` east of UTC.
    Aware = 0,
    /// Wall clock without offset, read as UTC.
    Naive = 1,
    /// Date only; clock fields are ignored.
    Date = 2,
}

/// A civil timestamp as supplied by the caller.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoltimeTimestamp {
    pub clock: SoltimeDateTime,
    /// Seconds east of UTC; only read for `Aware`.
    pub offset_seconds: i32,
    /// A `SoltimeTimestampKind` value.
    pub kind: i32,
}

impl SoltimeTimestamp {
    fn to_civil(self) -> Option<CivilTimestamp> {
        match self.kind {
            k if k == SoltimeTimestampKind::Aware as i32 => {
                let offset = FixedOffset::east_opt(self.offset_seconds)?;
                offset
                    .from_local_datetime(&self.clock.to_naive()?)
                    .single()
                    .map(CivilTimestamp::Aware)
            }
            k if k == SoltimeTimestampKind::Naive as i32 => {
                self.clock.to_naive().map(CivilTimestamp::Naive)
            }
            k if k == SoltimeTimestampKind::Date as i32 => {
                let (year, month, day) = (self.clock.year, self.clock.month, self.clock.day);
                NaiveDate::from_ymd_opt(year, month.into(), day.into()).map(CivilTimestamp::Date)
            }
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Conversion
// ═══════════════════════════════════════════════════════════════════════════

/// `config` may be null for the default configuration.
unsafe fn calculator(config: *const SoltimeConfig) -> Option<SolarTimeCalculator> {
    let config = if config.is_null() {
        SolarTimeConfig::default()
    } else {
        unsafe { *config }.to_rust()?
    };
    Some(SolarTimeCalculator::new(config))
}

/// # Safety
/// `out` must be a valid, writable pointer to `SoltimeDateTime`.
unsafe fn store(
    result: Result<DateTime<Utc>, SolarTimeError>,
    out: *mut SoltimeDateTime,
) -> SoltimeStatus {
    match result {
        Ok(solar) => {
            unsafe { *out = SoltimeDateTime::from_chrono(&solar) };
            SoltimeStatus::Ok
        }
        Err(err) => SoltimeStatus::from(&err),
    }
}

/// Apparent solar time for a broken-down timestamp. The result is UTC.
///
/// # Safety
/// `config` must be null or a valid pointer to `SoltimeConfig`; `out` must
/// be a valid, writable pointer to `SoltimeDateTime`.
#[no_mangle]
pub unsafe extern "C" fn soltime_solar_time(
    timestamp: SoltimeTimestamp,
    latitude: f64,
    longitude: f64,
    interval_seconds: i64,
    config: *const SoltimeConfig,
    out: *mut SoltimeDateTime,
) -> SoltimeStatus {
    catch_panic!(SoltimeStatus::Panic, {
        if out.is_null() {
            return SoltimeStatus::NullPointer;
        }
        let Some(calculator) = (unsafe { calculator(config) }) else {
            return SoltimeStatus::InvalidConfig;
        };
        let Some(timestamp) = timestamp.to_civil() else {
            return SoltimeStatus::InvalidTimestamp;
        };
        let result = calculator.solar_time(timestamp, latitude, longitude, interval_seconds);
        unsafe { store(result, out) }
    })
}

/// Apparent solar time for literal inputs, e.g. `"2023-10-06 15:30+02:00"`,
/// `"51.481"`, `"7.217"`.
///
/// On failure the error text (for validation errors, the exact message a
/// host should surface) is written to `message`, truncated to
/// `message_capacity` bytes including the terminating NUL.
///
/// # Safety
/// `timestamp`, `latitude` and `longitude` must be valid NUL-terminated
/// strings; `config` must be null or valid; `out` must be a valid, writable
/// pointer to `SoltimeDateTime`; `message` must be null or valid for
/// `message_capacity` writable bytes.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn soltime_solar_time_str(
    timestamp: *const c_char,
    latitude: *const c_char,
    longitude: *const c_char,
    interval_seconds: i64,
    config: *const SoltimeConfig,
    out: *mut SoltimeDateTime,
    message: *mut c_char,
    message_capacity: usize,
) -> SoltimeStatus {
    catch_panic!(SoltimeStatus::Panic, {
        if timestamp.is_null() || latitude.is_null() || longitude.is_null() || out.is_null() {
            return SoltimeStatus::NullPointer;
        }
        let Some(calculator) = (unsafe { calculator(config) }) else {
            return SoltimeStatus::InvalidConfig;
        };
        let text = |ptr: *const c_char| unsafe { CStr::from_ptr(ptr) }.to_string_lossy();

        let result = text(timestamp)
            .parse::<CivilTimestamp>()
            .and_then(|ts| Ok((ts, text(latitude).parse::<Numeric>()?)))
            .and_then(|(ts, lat)| Ok((ts, lat, text(longitude).parse::<Numeric>()?)))
            .and_then(|(ts, lat, lon)| calculator.solar_time(ts, lat, lon, interval_seconds));

        if let Err(err) = &result {
            unsafe { write_message(message, message_capacity, &err.to_string()) };
        }
        unsafe { store(result, out) }
    })
}
