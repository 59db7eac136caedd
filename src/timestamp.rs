// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil timestamps and their normalisation to UTC.
//!
//! A [`CivilTimestamp`] is whatever the caller had in hand: an instant with
//! an explicit offset, a naive clock reading, or a bare date.  Every variant
//! resolves to exactly one UTC instant:
//!
//! | Variant | UTC instant |
//! |---------|-------------|
//! | [`Aware`](CivilTimestamp::Aware) | wall clock minus its offset |
//! | [`Naive`](CivilTimestamp::Naive) | the clock reading itself, **read as UTC** |
//! | [`Date`](CivilTimestamp::Date) | midnight UTC of that date |
//!
//! No local-zone guess is ever made for naive input.

use crate::error::{Result, SolarTimeError};
use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc,
};
use std::fmt;
use std::str::FromStr;

/// Layouts accepted for the clock part of a timestamp literal.
const CLOCK_LAYOUTS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Layouts with a trailing numeric offset. `%#z` takes `±HH`, `±HHMM` and
/// `±HH:MM`, with or without a space before the sign.
const OFFSET_LAYOUTS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M%#z",
    "%Y-%m-%dT%H:%M%#z",
];

/// Suffixes that name UTC itself.
const UTC_DESIGNATORS: [&str; 4] = ["Z", "z", "UTC", "GMT"];

// ═══════════════════════════════════════════════════════════════════════════
// CivilTimestamp
// ═══════════════════════════════════════════════════════════════════════════

/// A timestamp as supplied by the caller, before normalisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CivilTimestamp {
    /// Absolute instant carrying its UTC offset.
    Aware(DateTime<FixedOffset>),
    /// Clock reading without offset; interpreted as UTC.
    Naive(NaiveDateTime),
    /// Date without a clock; interpreted as midnight UTC.
    Date(NaiveDate),
}

impl CivilTimestamp {
    /// Resolve to the UTC instant this timestamp denotes.
    pub fn to_utc(&self) -> DateTime<Utc> {
        match self {
            Self::Aware(datetime) => datetime.with_timezone(&Utc),
            // Naive readings are already UTC: no shift is applied.
            Self::Naive(naive) => naive.and_utc(),
            Self::Date(date) => date.and_time(NaiveTime::MIN).and_utc(),
        }
    }

    /// UTC offset in seconds, if the caller supplied one.
    pub fn offset_seconds(&self) -> Option<i32> {
        match self {
            Self::Aware(datetime) => Some(datetime.offset().local_minus_utc()),
            Self::Naive(_) | Self::Date(_) => None,
        }
    }

    /// `true` when no offset was attached to the input.
    #[inline]
    pub fn is_naive(&self) -> bool {
        self.offset_seconds().is_none()
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CivilTimestamp {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::Aware(datetime.fixed_offset())
    }
}

impl From<NaiveDateTime> for CivilTimestamp {
    fn from(naive: NaiveDateTime) -> Self {
        Self::Naive(naive)
    }
}

impl From<NaiveDate> for CivilTimestamp {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl fmt::Display for CivilTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aware(datetime) => write!(f, "{}", datetime.format("%Y-%m-%d %H:%M:%S%.f%:z")),
            Self::Naive(naive) => write!(f, "{}", naive.format("%Y-%m-%d %H:%M:%S%.f")),
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

/// Parses the literal layouts a SQL host typically hands over:
///
/// * `2023-10-06` (date)
/// * `2023-10-06 15:30`, `2023-10-06T15:30:00.250` (naive)
/// * any naive layout followed by `Z`, `UTC`, `GMT`, `±HH`, `±HHMM` or `±HH:MM`
///
/// Named zone abbreviations (`CEST`, `ACST`, …) are not resolved here.
impl FromStr for CivilTimestamp {
    type Err = SolarTimeError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SolarTimeError::InvalidTimestamp(s.to_owned());
        let text = s.trim();

        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return Ok(Self::Date(date));
        }

        if let Some(naive) = parse_clock(text) {
            return Ok(Self::Naive(naive));
        }
        if let Some(aware) = OFFSET_LAYOUTS
            .iter()
            .find_map(|layout| DateTime::parse_from_str(text, layout).ok())
        {
            return Ok(Self::Aware(aware));
        }
        UTC_DESIGNATORS
            .iter()
            .find_map(|designator| text.strip_suffix(designator))
            .and_then(|clock| parse_clock(clock.trim_end()))
            .map(|naive| Self::Aware(naive.and_utc().fixed_offset()))
            .ok_or_else(invalid)
    }
}

fn parse_clock(text: &str) -> Option<NaiveDateTime> {
    CLOCK_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(text, layout).ok())
}

// ═══════════════════════════════════════════════════════════════════════════
// ClockReading
// ═══════════════════════════════════════════════════════════════════════════

/// Calendar and clock fields of a UTC instant, at whole-second resolution.
///
/// This is the broken-down form the equation-of-time models consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Day of year, 1-based (1–365, or 366 in leap years).
    pub ordinal: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockReading {
    /// Break a UTC instant down into its fields. Sub-second parts are dropped.
    pub fn from_utc(instant: &DateTime<Utc>) -> Self {
        Self {
            year: instant.year(),
            month: instant.month(),
            day: instant.day(),
            ordinal: instant.ordinal(),
            hour: instant.hour(),
            minute: instant.minute(),
            // Leap seconds are folded into :59 by chrono.
            second: instant.second(),
        }
    }

    /// Seconds elapsed since midnight.
    #[inline]
    pub fn seconds_of_day(&self) -> u32 {
        self.hour * 3_600 + self.minute * 60 + self.second
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
