// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every solar-time operation.
//!
//! The `Display` text of the validation variants is part of the public
//! contract: hosts forward it to their users verbatim.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SolarTimeError>;

/// Failures reported by [`SolarTimeCalculator`](crate::SolarTimeCalculator).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolarTimeError {
    /// Latitude outside `[-90, 90]` degrees.
    #[error("Invalid latitude: {0:.6}")]
    InvalidLatitude(f64),

    /// Longitude outside `[-180, 180]` degrees.
    #[error("Invalid longitude: {0:.6}")]
    InvalidLongitude(f64),

    /// Averaging interval outside `[0, 28800]` seconds.
    #[error("Invalid data_interval: {0} (allowed range: [0 - 28800])")]
    InvalidInterval(i64),

    /// The almanac model is only defined for 1950–2050.
    #[error("Unsupported year: {0} (allowed range: [1950 - 2050])")]
    UnsupportedYear(i32),

    /// A timestamp literal that none of the accepted layouts match.
    #[error("Invalid timestamp literal: {0:?}")]
    InvalidTimestamp(String),

    /// A numeric literal that is neither an integer, a decimal nor a float.
    #[error("Invalid numeric literal: {0:?}")]
    InvalidNumeric(String),

    /// The corrected instant does not fit in `chrono::DateTime<Utc>`.
    #[error("Solar time out of representable range")]
    OutOfRange,
}
