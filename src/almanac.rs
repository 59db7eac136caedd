// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Almanac true solar time
//!
//! Approximate solar coordinates after Michalsky (1988), the algorithm the
//! NREL SOLPOS package uses to derive *true solar time*.  The chain is:
//!
//! ```text
//! clock → Julian day → mean longitude / mean anomaly → ecliptic longitude
//!       → right ascension → sidereal time → hour angle → true solar time
//! ```
//!
//! ## Precision
//! SOLPOS stores every intermediate in single precision while evaluating the
//! expressions themselves in double precision.  The rounding pattern is
//! reproduced step by step here (each `as f32` marks a store), which keeps
//! the corrections identical to the millisecond with SOLPOS-based tooling.
//! The `f32` Julian day is only good to ~1/256 d; that imprecision is part
//! of the reference results.
//!
//! ## Valid Time Range
//! 1950–2050.  The Julian-day formula ignores the 1900/2100 century rule.
//!
//! ## References
//! * Michalsky, J. (1988). *The Astronomical Almanac's algorithm for
//!   approximate solar position (1950–2050)*. Solar Energy 40 (3), 227–235.
//! * Iqbal, M. (1983). *An Introduction to Solar Radiation*, p. 3.

use crate::error::{Result, SolarTimeError};
use crate::timestamp::ClockReading;

/// Degrees → radians, as a single-precision constant.
const RADDEG: f32 = 0.017_453_292_5_f64 as f32;
/// Radians → degrees, as a single-precision constant.
const DEGRAD: f32 = 57.295_779_513_f64 as f32;

/// First year the almanac is valid for.
pub const FIRST_YEAR: i32 = 1950;
/// Last year the almanac is valid for.
pub const LAST_YEAR: i32 = 2050;

/// True solar time for one clock reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TrueSolarTime {
    /// Hour angle, degrees in `[-180, 180]`.
    pub hour_angle: f32,
    /// True solar time, minutes after local solar midnight.
    pub tst: f32,
    /// Minutes to add to the clock to obtain true solar time, within ±720.
    pub correction: f32,
    /// Equation of time, minutes.
    pub equation_of_time: f32,
}

/// Evaluate true solar time at `longitude` (degrees east) for a UTC clock.
///
/// `interval` is the averaging period in seconds: the sun is placed at the
/// midpoint of the period ending at `clock`, and half of it is added back to
/// the correction so that it still applies to `clock` itself.
pub(crate) fn true_solar_time(
    clock: &ClockReading,
    longitude: f32,
    interval: u32,
) -> Result<TrueSolarTime> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&clock.year) {
        return Err(SolarTimeError::UnsupportedYear(clock.year));
    }
    // UTC clock: the zone term of the original formulation is always zero.
    let timezone = 0.0_f32;
    let hour = clock.hour as f32;
    let second = clock.second as f32;
    let interval = interval as f32;

    // Universal time, hours.
    let utime = (f64::from(clock.seconds_of_day()) - f64::from(interval) / 2.0) as f32;
    let utime = (f64::from(utime) / 3_600.0 - f64::from(timezone)) as f32;

    // Julian day minus 2 400 000.
    let delta = (clock.year - 1949) as f32;
    let leap = (f64::from(delta) / 4.0) as i32;
    let julday = (32_916.5
        + f64::from(delta) * 365.0
        + f64::from(leap)
        + f64::from(clock.ordinal)
        + f64::from(utime) / 24.0) as f32;

    // Days from noon, 1 Jan 2000.
    let ectime = (f64::from(julday) - 51_545.0) as f32;

    let mnlong = wrap((280.460 + 0.985_647_4 * f64::from(ectime)) as f32, 360.0);
    let mnanom = wrap((357.528 + 0.985_600_3 * f64::from(ectime)) as f32, 360.0);

    let eclong = wrap(
        (f64::from(mnlong)
            + 1.915 * f64::from(mnanom * RADDEG).sin()
            + 0.020 * (2.0 * f64::from(mnanom) * f64::from(RADDEG)).sin()) as f32,
        360.0,
    );

    // Obliquity of the ecliptic.
    let ecobli = (23.439 - 4.0e-07 * f64::from(ectime)) as f32;

    let top = (f64::from(RADDEG * ecobli).cos() * f64::from(RADDEG * eclong).sin()) as f32;
    let bottom = f64::from(RADDEG * eclong).cos() as f32;
    let mut rascen = (f64::from(DEGRAD) * f64::from(top).atan2(f64::from(bottom))) as f32;
    if rascen < 0.0 {
        rascen = (f64::from(rascen) + 360.0) as f32;
    }

    // Greenwich, then local, mean sidereal time.
    let gmst = wrap(
        (6.697_375 + 0.065_709_824_2 * f64::from(ectime) + f64::from(utime)) as f32,
        24.0,
    );
    let lmst = wrap((f64::from(gmst) * 15.0 + f64::from(longitude)) as f32, 360.0);

    let mut hour_angle = lmst - rascen;
    if hour_angle < -180.0 {
        hour_angle = (f64::from(hour_angle) + 360.0) as f32;
    } else if hour_angle > 180.0 {
        hour_angle = (f64::from(hour_angle) - 360.0) as f32;
    }

    let tst = ((180.0 + f64::from(hour_angle)) * 4.0) as f32;
    let mut correction = (f64::from(tst)
        - f64::from(hour) * 60.0
        - f64::from(clock.minute)
        - f64::from(second) / 60.0
        + f64::from(interval) / 120.0) as f32;
    while correction > 720.0 {
        correction = (f64::from(correction) - 1_440.0) as f32;
    }
    while correction < -720.0 {
        correction = (f64::from(correction) + 1_440.0) as f32;
    }

    let equation_of_time = (f64::from(correction) + 60.0 * f64::from(timezone)
        - 4.0 * f64::from(longitude)) as f32;

    Ok(TrueSolarTime {
        hour_angle,
        tst,
        correction,
        equation_of_time,
    })
}

/// Drop whole multiples of `period` and lift negatives into `[0, period)`.
#[inline]
fn wrap(value: f32, period: f64) -> f32 {
    let value = f64::from(value);
    let mut wrapped = (value - period * f64::from((value / period) as i32)) as f32;
    if wrapped < 0.0 {
        wrapped = (f64::from(wrapped) + period) as f32;
    }
    wrapped
}
