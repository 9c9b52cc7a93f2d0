// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature set point type.

use std::fmt;

use crate::error::ValueError;

/// A temperature set point in degrees Celsius.
///
/// The controller enforces its own per-room limits, so the only local check
/// is that the number is finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Temperature(f64);

impl Temperature {
    /// Creates a new temperature.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NotFinite` for NaN or infinite input.
    pub fn new(celsius: f64) -> Result<Self, ValueError> {
        if !celsius.is_finite() {
            return Err(ValueError::NotFinite(celsius));
        }
        Ok(Self(celsius))
    }

    /// Returns the temperature in degrees Celsius.
    #[must_use]
    pub const fn celsius(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_finite() {
        assert!((Temperature::new(21.5).unwrap().celsius() - 21.5).abs() < f64::EPSILON);
        assert!(Temperature::new(-5.0).is_ok());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Temperature::new(f64::NAN).is_err());
        assert!(Temperature::new(f64::NEG_INFINITY).is_err());
    }
}
