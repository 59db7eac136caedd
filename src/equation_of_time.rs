// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Equation-of-time models.
//!
//! The equation of time is the seasonal gap between apparent (sundial) and
//! mean solar time.  It has two periodic sources: the eccentricity of the
//! Earth's orbit (one cycle per year) and the obliquity of the ecliptic (two
//! cycles per year).
//!
//! | Model | Source | Accuracy | Years |
//! |-------|--------|----------|-------|
//! | [`Almanac`](EquationOfTime::Almanac) | Michalsky (1988) solar coordinates | seconds | 1950–2050 |
//! | [`Harmonic`](EquationOfTime::Harmonic) | three-term fit over day-of-year | ±1 min | any |

use crate::almanac;
use crate::error::{Result, SolarTimeError};
use crate::interval::DataInterval;
use crate::timestamp::ClockReading;
use chrono::{DateTime, Datelike, TimeDelta, Utc};
use qtty::{Degrees, Minutes};
use std::f64::consts::PI;
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minutes of time per degree of longitude.
const MINUTES_PER_DEGREE: f64 = 4.0;

/// Selects how the equation of time is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EquationOfTime {
    /// Solar coordinates from the almanac algorithm, single precision,
    /// millisecond output. Matches SOLPOS-derived reference data.
    #[default]
    Almanac,
    /// `9.87·sin 2B − 7.53·cos B − 1.5·sin B` with `B = 2π(N − 81)/364`,
    /// microsecond output.
    Harmonic,
}

impl EquationOfTime {
    /// Equation of time at `instant`, in minutes (apparent minus mean).
    ///
    /// `longitude` only matters for the almanac, whose sidereal-time chain
    /// is evaluated at the observer.
    pub fn minutes(&self, instant: &DateTime<Utc>, longitude: Degrees) -> Result<Minutes> {
        match self {
            Self::Almanac => {
                let clock = ClockReading::from_utc(instant);
                let solution = almanac::true_solar_time(&clock, longitude.value() as f32, 0)?;
                Ok(Minutes::new(f64::from(solution.equation_of_time)))
            }
            Self::Harmonic => Ok(harmonic_minutes(instant.ordinal())),
        }
    }

    /// Offset from the UTC clock at `instant` to apparent solar time at
    /// `longitude`, for a clock tied to `meridian`.
    ///
    /// With a non-zero `averaging` interval the sun is sampled at the
    /// midpoint of the period that ends at `instant`.
    pub(crate) fn correction(
        &self,
        instant: &DateTime<Utc>,
        longitude: Degrees,
        meridian: Degrees,
        averaging: DataInterval,
    ) -> Result<TimeDelta> {
        let shift = meridian_shift(meridian);
        match self {
            Self::Almanac => {
                let clock = ClockReading::from_utc(instant);
                let solution = almanac::true_solar_time(
                    &clock,
                    longitude.value() as f32,
                    averaging.seconds(),
                )?;
                trace!(
                    hour_angle = solution.hour_angle,
                    tst = solution.tst,
                    correction = solution.correction,
                    "almanac solution"
                );
                // Multiplied in single precision, then truncated toward zero.
                let millis = (solution.correction * 60_000.0_f32) as i64;
                let local =
                    TimeDelta::try_milliseconds(millis).ok_or(SolarTimeError::OutOfRange)?;
                local
                    .checked_sub(&shift)
                    .map(within_half_day)
                    .ok_or(SolarTimeError::OutOfRange)
            }
            Self::Harmonic => {
                let sample = instant
                    .checked_sub_signed(averaging.half())
                    .ok_or(SolarTimeError::OutOfRange)?;
                let minutes = harmonic_minutes(sample.ordinal()).value()
                    + MINUTES_PER_DEGREE * longitude.value();
                TimeDelta::microseconds((minutes * 60_000_000.0) as i64)
                    .checked_sub(&shift)
                    .ok_or(SolarTimeError::OutOfRange)
            }
        }
    }
}

/// Fold an almanac correction into `[-12 h, +12 h]`.
///
/// The almanac hour angle is only known modulo one day, so a meridian shift
/// can push the difference a whole day out.
fn within_half_day(mut delta: TimeDelta) -> TimeDelta {
    let day = TimeDelta::days(1);
    let half = TimeDelta::hours(12);
    while delta > half {
        delta -= day;
    }
    while delta < -half {
        delta += day;
    }
    delta
}

/// Clock offset of a standard meridian, rounded to the microsecond.
fn meridian_shift(meridian: Degrees) -> TimeDelta {
    TimeDelta::microseconds((MINUTES_PER_DEGREE * meridian.value() * 60_000_000.0).round() as i64)
}

/// Three-term harmonic equation of time for day-of-year `day_of_year`.
///
/// `B` is the fraction-of-year angle counted from the March equinox (day 81).
pub fn harmonic_minutes(day_of_year: u32) -> Minutes {
    let b = 2.0 * PI * (f64::from(day_of_year) - 81.0) / 364.0;
    Minutes::new(9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin())
}
