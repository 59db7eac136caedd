// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Geographic inputs.
//!
//! Hosts hand coordinates over as integers, floats or fixed-point decimals
//! interchangeably.  [`Numeric`] makes that coercion explicit: every
//! representation is normalised to `f64` *before* validation, and
//! [`GeoCoordinate`] only exists once both axes are in range.

use crate::error::{Result, SolarTimeError};
use qtty::Degrees;
use std::str::FromStr;

// ═══════════════════════════════════════════════════════════════════════════
// Numeric
// ═══════════════════════════════════════════════════════════════════════════

/// A numeric value in any of the representations a host may pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Integer(i64),
    Float(f64),
    /// Fixed-point decimal: `mantissa × 10^-scale`.
    Decimal { mantissa: i128, scale: u32 },
}

impl Numeric {
    /// Fixed-point decimal `mantissa × 10^-scale`.
    #[inline]
    pub const fn decimal(mantissa: i128, scale: u32) -> Self {
        Self::Decimal { mantissa, scale }
    }

    /// Normalise to double precision.
    ///
    /// Decimals are converted through their exact decimal text so the result
    /// is the correctly rounded `f64`, identical to parsing the literal.
    pub fn to_f64(&self) -> f64 {
        match *self {
            Self::Integer(value) => value as f64,
            Self::Float(value) => value,
            // `<int>e-<u32>` always parses.
            Self::Decimal { mantissa, scale } => format!("{mantissa}e-{scale}")
                .parse::<f64>()
                .unwrap_or(f64::NAN),
        }
    }
}

macro_rules! impl_numeric_from_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Numeric {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_numeric_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Numeric {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Numeric {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// `"7"` is an integer, `"51.481"` a decimal, anything else `f64` accepts
/// (`"1e3"`, `"NaN"`) a float.
impl FromStr for Numeric {
    type Err = SolarTimeError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        if let Ok(value) = text.parse::<i64>() {
            return Ok(Self::Integer(value));
        }
        if let Some(decimal) = parse_decimal(text) {
            return Ok(decimal);
        }
        text.parse::<f64>()
            .map(Self::Float)
            .map_err(|_| SolarTimeError::InvalidNumeric(s.to_owned()))
    }
}

/// `[+-]digits.digits`, at least one digit on either side of the point.
fn parse_decimal(text: &str) -> Option<Numeric> {
    let unsigned = text.trim_start_matches(|c: char| c == '+' || c == '-');
    if text.len() - unsigned.len() > 1 {
        return None;
    }
    let (whole, fraction) = unsigned.split_once('.')?;
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if whole.len() + fraction.len() == 0 || !all_digits(whole) || !all_digits(fraction) {
        return None;
    }
    let negative = text.starts_with('-');
    let magnitude: i128 = format!("{whole}{fraction}").parse().ok()?;
    let scale = u32::try_from(fraction.len()).ok()?;
    Some(Numeric::decimal(
        if negative { -magnitude } else { magnitude },
        scale,
    ))
}

// ═══════════════════════════════════════════════════════════════════════════
// GeoCoordinate
// ═══════════════════════════════════════════════════════════════════════════

/// A validated observer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude: Degrees,
    longitude: Degrees,
}

impl GeoCoordinate {
    /// Largest accepted |latitude|, degrees.
    pub const LATITUDE_LIMIT: f64 = 90.0;
    /// Largest accepted |longitude|, degrees.
    pub const LONGITUDE_LIMIT: f64 = 180.0;

    /// Validate and build a coordinate. Latitude is checked first.
    ///
    /// NaN fails the range check like any other out-of-range value.
    pub fn new(latitude: impl Into<Numeric>, longitude: impl Into<Numeric>) -> Result<Self> {
        let latitude = latitude.into().to_f64();
        if !(-Self::LATITUDE_LIMIT..=Self::LATITUDE_LIMIT).contains(&latitude) {
            return Err(SolarTimeError::InvalidLatitude(latitude));
        }
        let longitude = longitude.into().to_f64();
        if !(-Self::LONGITUDE_LIMIT..=Self::LONGITUDE_LIMIT).contains(&longitude) {
            return Err(SolarTimeError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude: Degrees::new(latitude),
            longitude: Degrees::new(longitude),
        })
    }

    /// Latitude, positive north.
    #[inline]
    pub fn latitude(&self) -> Degrees {
        self.latitude
    }

    /// Longitude, positive east.
    #[inline]
    pub fn longitude(&self) -> Degrees {
        self.longitude
    }
}
