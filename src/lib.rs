// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Apparent Solar Time
//!
//! This crate converts civil timestamps into *apparent solar time*: the time
//! a sundial at the observer's longitude would show.  Solar noon (the sun on
//! the local meridian) lands on 12:00.
//!
//! # Core types
//!
//! - [`SolarTimeCalculator`]: the conversion, configured by [`SolarTimeConfig`].
//! - [`CivilTimestamp`]: offset-aware instant, naive clock reading or bare date.
//! - [`Numeric`]: integer, float or fixed-point decimal coordinate input.
//! - [`GeoCoordinate`]: a validated latitude/longitude pair.
//! - [`DataInterval`]: a validated averaging period, 0–8 h.
//! - [`SolarTimeError`]: every failure the conversion reports.
//!
//! # Configuration
//!
//! | Field | Options | Default |
//! |-------|---------|---------|
//! | [`equation_of_time`](SolarTimeConfig::equation_of_time) | [`Almanac`](EquationOfTime::Almanac), [`Harmonic`](EquationOfTime::Harmonic) | `Almanac` |
//! | [`meridian`](SolarTimeConfig::meridian) | [`Greenwich`](MeridianReference::Greenwich), [`Civil`](MeridianReference::Civil) | `Greenwich` |
//! | [`alignment`](SolarTimeConfig::alignment) | [`Midpoint`](IntervalAlignment::Midpoint), [`NearestBoundary`](IntervalAlignment::NearestBoundary) | `Midpoint` |
//!
//! The defaults reproduce SOLPOS-based reference tooling to the millisecond.
//!
//! # Naive input
//!
//! A timestamp without an offset is read as UTC; no local zone is consulted.
//!
//! ```
//! use chrono::NaiveDate;
//!
//! let reading = NaiveDate::from_ymd_opt(2023, 10, 6)
//!     .unwrap()
//!     .and_hms_opt(15, 30, 0)
//!     .unwrap();
//! let solar = soltime::solar_time(reading, 51.481, 7.217).unwrap();
//! assert_eq!(solar.to_rfc3339(), "2023-10-06T16:10:43.700+00:00");
//! ```

mod almanac;
pub mod calculator;
pub mod coordinate;
pub mod equation_of_time;
pub mod error;
pub mod interval;
pub mod timestamp;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use almanac::{FIRST_YEAR, LAST_YEAR};
pub use calculator::{MeridianReference, SolarTimeCalculator, SolarTimeConfig};
pub use coordinate::{GeoCoordinate, Numeric};
pub use equation_of_time::{harmonic_minutes, EquationOfTime};
pub use error::{Result, SolarTimeError};
pub use interval::{DataInterval, IntervalAlignment};
pub use timestamp::{CivilTimestamp, ClockReading};

use chrono::{DateTime, Utc};

/// Apparent solar time for an instantaneous reading, default configuration.
///
/// Shorthand for [`solar_time_with_interval`] with a zero interval.
pub fn solar_time<T, La, Lo>(timestamp: T, latitude: La, longitude: Lo) -> Result<DateTime<Utc>>
where
    T: Into<CivilTimestamp>,
    La: Into<Numeric>,
    Lo: Into<Numeric>,
{
    solar_time_with_interval(timestamp, latitude, longitude, 0)
}

/// Apparent solar time for a reading that closes an averaging period of
/// `interval_seconds`, default configuration.
pub fn solar_time_with_interval<T, La, Lo>(
    timestamp: T,
    latitude: La,
    longitude: Lo,
    interval_seconds: i64,
) -> Result<DateTime<Utc>>
where
    T: Into<CivilTimestamp>,
    La: Into<Numeric>,
    Lo: Into<Numeric>,
{
    SolarTimeCalculator::default().solar_time(timestamp, latitude, longitude, interval_seconds)
}
