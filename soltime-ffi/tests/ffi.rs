// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI boundary tests: exercises every exported C function through Rust.

use soltime_ffi::*;
use std::ffi::{c_char, CStr};

fn clock(hour: u8, minute: u8) -> SoltimeDateTime {
    SoltimeDateTime {
        year: 2023,
        month: 10,
        day: 6,
        hour,
        minute,
        second: 0,
        nanosecond: 0,
    }
}

fn naive(hour: u8, minute: u8) -> SoltimeTimestamp {
    SoltimeTimestamp {
        clock: clock(hour, minute),
        offset_seconds: 0,
        kind: SoltimeTimestampKind::Naive as i32,
    }
}

fn expected(hour: u8, minute: u8, second: u8, millis: u32) -> SoltimeDateTime {
    SoltimeDateTime {
        second,
        nanosecond: millis * 1_000_000,
        ..clock(hour, minute)
    }
}

// ─── Version / messages ───────────────────────────────────────────────────

#[test]
fn version_is_encoded() {
    assert_eq!(soltime_ffi_version(), 100);
}

#[test]
fn status_messages_are_static_strings() {
    let text = unsafe { CStr::from_ptr(soltime_status_message(SoltimeStatus::InvalidInterval)) };
    assert_eq!(text.to_str().unwrap(), "invalid data_interval");
}

// ─── Null-pointer guards ──────────────────────────────────────────────────

#[test]
fn solar_time_null_pointer() {
    let status = unsafe {
        soltime_solar_time(
            naive(15, 30),
            51.481,
            7.217,
            0,
            std::ptr::null(),
            std::ptr::null_mut(),
        )
    };
    assert_eq!(status, SoltimeStatus::NullPointer);
}

#[test]
fn solar_time_str_null_pointer() {
    let mut out = SoltimeDateTime::default();
    let status = unsafe {
        soltime_solar_time_str(
            std::ptr::null(),
            c"51.481".as_ptr(),
            c"7.217".as_ptr(),
            0,
            std::ptr::null(),
            &mut out,
            std::ptr::null_mut(),
            0,
        )
    };
    assert_eq!(status, SoltimeStatus::NullPointer);
}

#[test]
fn config_default_null_pointer() {
    let status = unsafe { soltime_config_default(std::ptr::null_mut()) };
    assert_eq!(status, SoltimeStatus::NullPointer);
}

// ─── Typed entry point ────────────────────────────────────────────────────

#[test]
fn naive_reading() {
    let mut out = SoltimeDateTime::default();
    let status = unsafe {
        soltime_solar_time(naive(15, 30), 51.481, 7.217, 0, std::ptr::null(), &mut out)
    };
    assert_eq!(status, SoltimeStatus::Ok);
    assert_eq!(out, expected(16, 10, 43, 700));
}

#[test]
fn aware_reading() {
    let ts = SoltimeTimestamp {
        clock: clock(15, 30),
        offset_seconds: 34_200,
        kind: SoltimeTimestampKind::Aware as i32,
    };
    let mut out = SoltimeDateTime::default();
    let status =
        unsafe { soltime_solar_time(ts, -34.885, 138.579, 0, std::ptr::null(), &mut out) };
    assert_eq!(status, SoltimeStatus::Ok);
    assert_eq!(out, expected(15, 26, 3, 484));
}

#[test]
fn date_reading_with_interval() {
    let ts = SoltimeTimestamp {
        clock: clock(0, 0),
        offset_seconds: 0,
        kind: SoltimeTimestampKind::Date as i32,
    };
    let mut out = SoltimeDateTime::default();
    let status = unsafe { soltime_solar_time(ts, 51.481, 7.217, 0, std::ptr::null(), &mut out) };
    assert_eq!(status, SoltimeStatus::Ok);
    assert_eq!(out, expected(0, 40, 32, 94));

    let status =
        unsafe { soltime_solar_time(naive(15, 30), 51.481, 7.217, 3_600, std::ptr::null(), &mut out) };
    assert_eq!(status, SoltimeStatus::Ok);
    assert_eq!(out, expected(16, 10, 43, 425));
}

#[test]
fn validation_statuses() {
    let mut out = SoltimeDateTime::default();
    let call = |lat: f64, lon: f64, interval: i64, out: &mut SoltimeDateTime| unsafe {
        soltime_solar_time(naive(15, 30), lat, lon, interval, std::ptr::null(), out)
    };
    assert_eq!(call(-91.0, 7.217, 0, &mut out), SoltimeStatus::InvalidLatitude);
    assert_eq!(call(51.481, 181.0, 0, &mut out), SoltimeStatus::InvalidLongitude);
    assert_eq!(call(51.481, 7.217, 28_801, &mut out), SoltimeStatus::InvalidInterval);
    assert_eq!(call(51.481, 7.217, -1, &mut out), SoltimeStatus::InvalidInterval);
}

#[test]
fn invalid_timestamp_fields() {
    let mut ts = naive(15, 30);
    ts.clock.month = 13;
    let mut out = SoltimeDateTime::default();
    let status = unsafe { soltime_solar_time(ts, 0.0, 0.0, 0, std::ptr::null(), &mut out) };
    assert_eq!(status, SoltimeStatus::InvalidTimestamp);
}

#[test]
fn year_outside_almanac() {
    let mut ts = naive(12, 0);
    ts.clock.year = 2077;
    let mut out = SoltimeDateTime::default();
    let status = unsafe { soltime_solar_time(ts, 0.0, 0.0, 0, std::ptr::null(), &mut out) };
    assert_eq!(status, SoltimeStatus::UnsupportedYear);
}

// ─── Configuration ────────────────────────────────────────────────────────

#[test]
fn default_config_is_all_zero() {
    let mut config = SoltimeConfig {
        equation_of_time: 9,
        meridian: 9,
        alignment: 9,
    };
    let status = unsafe { soltime_config_default(&mut config) };
    assert_eq!(status, SoltimeStatus::Ok);
    assert_eq!(config, SoltimeConfig::default());
}

#[test]
fn nearest_boundary_config() {
    let config = SoltimeConfig {
        alignment: SoltimeAlignment::NearestBoundary as i32,
        ..SoltimeConfig::default()
    };
    let mut out = SoltimeDateTime::default();
    let status = unsafe { soltime_solar_time(naive(15, 30), 51.481, 7.217, 3_600, &config, &mut out) };
    assert_eq!(status, SoltimeStatus::Ok);
    assert_eq!(out, expected(16, 0, 0, 0));
}

#[test]
fn invalid_config_is_reported() {
    let config = SoltimeConfig {
        equation_of_time: 42,
        ..SoltimeConfig::default()
    };
    let mut out = SoltimeDateTime::default();
    let status = unsafe { soltime_solar_time(naive(15, 30), 51.481, 7.217, 0, &config, &mut out) };
    assert_eq!(status, SoltimeStatus::InvalidConfig);
}

#[cfg(feature = "serde")]
#[test]
fn config_from_json() {
    let mut config = SoltimeConfig::default();
    let status = unsafe {
        soltime_config_from_json(
            cr#"{"equation_of_time":"harmonic","meridian":"civil"}"#.as_ptr(),
            &mut config,
        )
    };
    assert_eq!(status, SoltimeStatus::Ok);
    assert_eq!(config.equation_of_time, SoltimeEquationOfTime::Harmonic as i32);
    assert_eq!(config.meridian, SoltimeMeridian::Civil as i32);
    assert_eq!(config.alignment, SoltimeAlignment::Midpoint as i32);

    let status = unsafe { soltime_config_from_json(c"{\"meridian\":\"local\"}".as_ptr(), &mut config) };
    assert_eq!(status, SoltimeStatus::InvalidConfig);
}

// ─── Literal entry point ──────────────────────────────────────────────────

unsafe fn solar_time_str(
    timestamp: &CStr,
    latitude: &CStr,
    longitude: &CStr,
    interval: i64,
    out: &mut SoltimeDateTime,
    message: &mut [c_char],
) -> SoltimeStatus {
    unsafe {
        soltime_solar_time_str(
            timestamp.as_ptr(),
            latitude.as_ptr(),
            longitude.as_ptr(),
            interval,
            std::ptr::null(),
            out,
            message.as_mut_ptr(),
            message.len(),
        )
    }
}

#[test]
fn literal_reading_with_offset() {
    let mut out = SoltimeDateTime::default();
    let mut message = [0 as c_char; 128];
    let status = unsafe {
        solar_time_str(
            c"2023-10-06 15:30+02:00",
            c"51.481",
            c"7.217",
            0,
            &mut out,
            &mut message,
        )
    };
    assert_eq!(status, SoltimeStatus::Ok);
    assert_eq!(out, expected(14, 10, 42, 363));
}

#[test]
fn literal_integer_longitude() {
    let mut out = SoltimeDateTime::default();
    let mut message = [0 as c_char; 128];
    let status = unsafe {
        solar_time_str(c"2023-10-06 15:30", c"51.481", c"7", 0, &mut out, &mut message)
    };
    assert_eq!(status, SoltimeStatus::Ok);
    assert_eq!(out, expected(16, 9, 51, 621));
}

#[test]
fn literal_validation_messages() {
    let cases: [(&CStr, &CStr, i64, SoltimeStatus, &str); 3] = [
        (c"-91", c"7.217", 0, SoltimeStatus::InvalidLatitude, "Invalid latitude: -91.000000"),
        (c"51.481", c"181", 0, SoltimeStatus::InvalidLongitude, "Invalid longitude: 181.000000"),
        (
            c"51.481",
            c"7.217",
            28_801,
            SoltimeStatus::InvalidInterval,
            "Invalid data_interval: 28801 (allowed range: [0 - 28800])",
        ),
    ];
    for (lat, lon, interval, status, text) in cases {
        let mut out = SoltimeDateTime::default();
        let mut message = [0 as c_char; 128];
        let got = unsafe {
            solar_time_str(c"2023-10-06 15:30", lat, lon, interval, &mut out, &mut message)
        };
        assert_eq!(got, status);
        let written = unsafe { CStr::from_ptr(message.as_ptr()) };
        assert_eq!(written.to_str().unwrap(), text);
    }
}

#[test]
fn literal_parse_failures() {
    let mut out = SoltimeDateTime::default();
    let mut message = [0 as c_char; 128];
    let status = unsafe {
        solar_time_str(c"yesterday", c"51.481", c"7.217", 0, &mut out, &mut message)
    };
    assert_eq!(status, SoltimeStatus::InvalidTimestamp);

    let status = unsafe {
        solar_time_str(c"2023-10-06", c"north", c"7.217", 0, &mut out, &mut message)
    };
    assert_eq!(status, SoltimeStatus::InvalidNumeric);
    let written = unsafe { CStr::from_ptr(message.as_ptr()) };
    assert_eq!(written.to_str().unwrap(), "Invalid numeric literal: \"north\"");
}
