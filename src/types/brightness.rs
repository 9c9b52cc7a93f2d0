// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness type for light dimming.

use std::fmt;

use crate::error::ValueError;

/// Light brightness as a whole percentage (0-100).
///
/// Sent to the controller as `D<value>`.
///
/// # Examples
///
/// ```
/// use mygekko_lib::types::Brightness;
///
/// let dim = Brightness::new(75).unwrap();
/// assert_eq!(dim.value(), 75);
///
/// assert_eq!(Brightness::MIN.value(), 0);
/// assert_eq!(Brightness::MAX.value(), 100);
///
/// assert!(Brightness::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Brightness(u8);

impl Brightness {
    /// Minimum brightness (0%).
    pub const MIN: Self = Self(0);

    /// Maximum brightness (100%).
    pub const MAX: Self = Self(100);

    /// Creates a new brightness value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0.0,
                max: 100.0,
                actual: f64::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a brightness from a decoded dim level.
    ///
    /// The controller reports fractional levels such as `43.2`; they are
    /// rounded up like the myGEKKO UI does, then clamped to 100.
    ///
    /// Returns `None` for negative or non-finite levels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_level(level: f64) -> Option<Self> {
        if !level.is_finite() || level < 0.0 {
            return None;
        }
        // Safe: level is finite, non-negative and clamped to 100 before the cast
        Some(Self(level.ceil().min(100.0) as u8))
    }

    /// Returns the brightness percentage.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the command string for this brightness.
    #[must_use]
    pub fn to_command(&self) -> String {
        format!("D{}", self.0)
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Brightness {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
