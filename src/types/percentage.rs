// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Percentage type for blind position and slat tilt.

use std::fmt;

use crate::error::ValueError;

/// A position in percent, `0.0` to `100.0` inclusive.
///
/// Blinds report and accept fractional positions (`94.96`), so unlike
/// [`Brightness`](super::Brightness) this wraps an `f64`.
///
/// # Examples
///
/// ```
/// use mygekko_lib::types::Percentage;
///
/// let p = Percentage::new(42.5).unwrap();
/// assert!((p.value() - 42.5).abs() < f64::EPSILON);
///
/// assert!(Percentage::new(0.0).is_ok());
/// assert!(Percentage::new(100.0).is_ok());
/// assert!(Percentage::new(100.1).is_err());
/// assert!(Percentage::new(-0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percentage(f64);

impl Percentage {
    /// Fully open / lowest value.
    pub const MIN: Self = Self(0.0);

    /// Fully closed / highest value.
    pub const MAX: Self = Self(100.0);

    /// Creates a new percentage.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NotFinite` for NaN or infinite input and
    /// `ValueError::OutOfRange` outside `[0, 100]`.
    pub fn new(value: f64) -> Result<Self, ValueError> {
        if !value.is_finite() {
            return Err(ValueError::NotFinite(value));
        }
        if !(0.0..=100.0).contains(&value) {
            return Err(ValueError::OutOfRange {
                min: 0.0,
                max: 100.0,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Returns the percentage value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Percentage {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
