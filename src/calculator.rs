// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil timestamp → apparent solar time.
//!
//! [`SolarTimeCalculator`] runs the whole pipeline for one reading:
//!
//! ```text
//! normalise to UTC → validate → whole seconds → meridian
//!     → correction (equation of time + longitude) → add → align
//! ```
//!
//! The calculator holds nothing but its [`SolarTimeConfig`]; it is `Copy`,
//! `Send` and `Sync`, and every call is independent of every other.

use crate::coordinate::{GeoCoordinate, Numeric};
use crate::equation_of_time::EquationOfTime;
use crate::error::{Result, SolarTimeError};
use crate::interval::{round_to_boundary, DataInterval, IntervalAlignment};
use crate::timestamp::CivilTimestamp;
use chrono::{DateTime, Utc};
use qtty::Degrees;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width of one civil time zone, degrees.
const ZONE_WIDTH_DEGREES: f64 = 15.0;

/// Seconds of UTC offset per degree of meridian.
const SECONDS_PER_DEGREE: f64 = 240.0;

/// The standard meridian the input clock is assumed to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MeridianReference {
    /// The normalised UTC instant is the clock: meridian 0°.
    #[default]
    Greenwich,
    /// The civil zone of the input: `offset × 15°/h` when an offset was
    /// supplied, otherwise the longitude rounded to the nearest 15°.
    Civil,
}

impl MeridianReference {
    /// Meridian for `timestamp` observed at `longitude`.
    pub fn resolve(&self, timestamp: &CivilTimestamp, longitude: Degrees) -> Degrees {
        match (self, timestamp.offset_seconds()) {
            (Self::Greenwich, _) => Degrees::new(0.0),
            (Self::Civil, Some(offset)) => Degrees::new(f64::from(offset) / SECONDS_PER_DEGREE),
            (Self::Civil, None) => Degrees::new(
                (longitude.value() / ZONE_WIDTH_DEGREES).round() * ZONE_WIDTH_DEGREES,
            ),
        }
    }
}

/// Calculator configuration. Every field has a default, so a partial JSON
/// object (or `{}`) deserialises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolarTimeConfig {
    pub equation_of_time: EquationOfTime,
    pub meridian: MeridianReference,
    pub alignment: IntervalAlignment,
}

/// Converts civil timestamps to apparent solar time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolarTimeCalculator {
    config: SolarTimeConfig,
}

impl SolarTimeCalculator {
    pub const fn new(config: SolarTimeConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub const fn config(&self) -> &SolarTimeConfig {
        &self.config
    }

    /// Apparent solar time at (`latitude`, `longitude`) for `timestamp`.
    ///
    /// Latitude is validated but takes no part in the result. A non-zero
    /// `interval_seconds` marks `timestamp` as the end of a measurement
    /// period; see [`IntervalAlignment`].
    ///
    /// # Errors
    ///
    /// * [`SolarTimeError::InvalidLatitude`], [`InvalidLongitude`] and
    ///   [`InvalidInterval`], checked in that order.
    /// * [`SolarTimeError::UnsupportedYear`] for the almanac model outside
    ///   1950–2050.
    /// * [`SolarTimeError::OutOfRange`] if the result does not fit in a
    ///   `DateTime<Utc>`.
    ///
    /// [`InvalidLongitude`]: SolarTimeError::InvalidLongitude
    /// [`InvalidInterval`]: SolarTimeError::InvalidInterval
    pub fn solar_time<T, La, Lo>(
        &self,
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
        let timestamp = timestamp.into();
        let site = GeoCoordinate::new(latitude, longitude)
            .inspect_err(|err| debug!(%timestamp, %err, "rejected coordinate"))?;
        let interval = DataInterval::new(interval_seconds)
            .inspect_err(|err| debug!(%timestamp, %err, "rejected interval"))?;

        let utc = timestamp.to_utc();
        let clock =
            DateTime::from_timestamp(utc.timestamp(), 0).ok_or(SolarTimeError::OutOfRange)?;
        let meridian = self.config.meridian.resolve(&timestamp, site.longitude());

        let averaging = match self.config.alignment {
            IntervalAlignment::Midpoint => interval,
            IntervalAlignment::NearestBoundary => DataInterval::NONE,
        };
        let correction = self.config.equation_of_time.correction(
            &clock,
            site.longitude(),
            meridian,
            averaging,
        )?;

        let mut solar = clock
            .checked_add_signed(correction)
            .ok_or(SolarTimeError::OutOfRange)?;
        if self.config.alignment == IntervalAlignment::NearestBoundary {
            solar = round_to_boundary(solar, interval)?;
        }

        debug!(
            %timestamp,
            naive = timestamp.is_naive(),
            model = ?self.config.equation_of_time,
            longitude = site.longitude().value(),
            meridian = meridian.value(),
            interval = interval.seconds(),
            correction_ms = correction.num_milliseconds(),
            %solar,
            "solar time"
        );
        Ok(solar)
    }
}
