// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Data-reporting intervals.
//!
//! Sensor readings are often logged once per interval, stamped at the end of
//! the period they cover.  A [`DataInterval`] carries that period length and
//! [`IntervalAlignment`] selects how it affects the corrected timestamp.

use crate::error::{Result, SolarTimeError};
use chrono::{DateTime, NaiveTime, TimeDelta, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A validated averaging interval in whole seconds, `0..=28_800`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DataInterval(u32);

impl DataInterval {
    /// Longest accepted interval: eight hours.
    pub const MAX_SECONDS: i64 = 28_800;

    /// No averaging.
    pub const NONE: Self = Self(0);

    /// Validate an interval given in seconds.
    pub fn new(seconds: i64) -> Result<Self> {
        u32::try_from(seconds)
            .ok()
            .filter(|_| seconds <= Self::MAX_SECONDS)
            .map(Self)
            .ok_or(SolarTimeError::InvalidInterval(seconds))
    }

    /// Length in seconds.
    #[inline]
    pub const fn seconds(&self) -> u32 {
        self.0
    }

    /// `true` for any non-zero interval.
    #[inline]
    pub const fn is_averaging(&self) -> bool {
        self.0 > 0
    }

    /// Half the interval, the offset from a period's end to its midpoint.
    #[inline]
    pub fn half(&self) -> TimeDelta {
        TimeDelta::milliseconds(i64::from(self.0) * 500)
    }
}

/// How a non-zero interval shapes the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IntervalAlignment {
    /// The timestamp closes a measurement period: the solar correction is
    /// taken at the period's midpoint and applied to the timestamp.
    #[default]
    Midpoint,
    /// The correction is taken at the timestamp and the corrected instant is
    /// rounded to the nearest interval boundary counted from its own midnight.
    /// Ties round up.
    NearestBoundary,
}

/// Round `instant` to the nearest multiple of `interval` after its midnight.
pub(crate) fn round_to_boundary(
    instant: DateTime<Utc>,
    interval: DataInterval,
) -> Result<DateTime<Utc>> {
    if !interval.is_averaging() {
        return Ok(instant);
    }
    let midnight = instant.date_naive().and_time(NaiveTime::MIN).and_utc();
    let elapsed = (instant - midnight)
        .num_microseconds()
        .ok_or(SolarTimeError::OutOfRange)?;
    let step = i64::from(interval.seconds()) * 1_000_000;
    let rounded = (elapsed + step / 2) / step * step;
    midnight
        .checked_add_signed(TimeDelta::microseconds(rounded))
        .ok_or(SolarTimeError::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn accepts_inclusive_bounds() {
        assert_eq!(DataInterval::new(0).unwrap(), DataInterval::NONE);
        assert_eq!(DataInterval::new(28_800).unwrap().seconds(), 28_800);
        assert!(DataInterval::new(60).unwrap().is_averaging());
        assert!(!DataInterval::NONE.is_averaging());
    }

    #[test]
    fn rejects_out_of_range() {
        for seconds in [-1, 28_801, i64::MIN, i64::MAX] {
            assert_eq!(
                DataInterval::new(seconds).unwrap_err(),
                SolarTimeError::InvalidInterval(seconds)
            );
        }
    }

    #[test]
    fn half_interval() {
        assert_eq!(DataInterval::new(3_600).unwrap().half(), TimeDelta::minutes(30));
        assert_eq!(DataInterval::new(1).unwrap().half(), TimeDelta::milliseconds(500));
    }

    #[test]
    fn rounds_to_nearest_boundary() {
        let hour = DataInterval::new(3_600).unwrap();
        let before_half = Utc.with_ymd_and_hms(2023, 10, 6, 16, 10, 43).unwrap();
        assert_eq!(
            round_to_boundary(before_half, hour).unwrap(),
            Utc.with_ymd_and_hms(2023, 10, 6, 16, 0, 0).unwrap()
        );

        let past_half = Utc.with_ymd_and_hms(2023, 10, 6, 16, 40, 0).unwrap();
        assert_eq!(
            round_to_boundary(past_half, hour).unwrap(),
            Utc.with_ymd_and_hms(2023, 10, 6, 17, 0, 0).unwrap()
        );
    }

    #[test]
    fn tie_rounds_up_and_may_cross_midnight() {
        let quarter = DataInterval::new(900).unwrap();
        let tie = Utc.with_ymd_and_hms(2023, 10, 6, 23, 52, 30).unwrap();
        assert_eq!(
            round_to_boundary(tie, quarter).unwrap(),
            Utc.with_ymd_and_hms(2023, 10, 7, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn zero_interval_leaves_instant_untouched() {
        let instant = Utc.with_ymd_and_hms(2023, 10, 6, 16, 10, 43).unwrap()
            + TimeDelta::milliseconds(700);
        assert_eq!(round_to_boundary(instant, DataInterval::NONE).unwrap(), instant);
    }
}
