// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type with the myGEKKO packed decimal encoding.
//!
//! The controller reports and accepts colors as a single decimal integer,
//! `(R << 16) + (G << 8) + B`. A light reporting `16711719` is therefore
//! `(255, 0, 39)`.

use std::fmt;

use crate::error::ValueError;

/// RGB color with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use mygekko_lib::types::RgbColor;
///
/// let color = RgbColor::new(255, 0, 39);
/// assert_eq!(color.to_decimal(), 16_711_719);
/// assert_eq!(RgbColor::from_decimal(16_711_719), color);
/// assert_eq!(color.to_command(), "C16711719");
/// assert_eq!(color.to_string(), "#FF0027");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Creates a color from untyped channel values.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if any channel is outside `[0, 255]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mygekko_lib::types::RgbColor;
    ///
    /// assert!(RgbColor::try_from_channels(255, 0, 39).is_ok());
    /// assert!(RgbColor::try_from_channels(256, 0, 0).is_err());
    /// assert!(RgbColor::try_from_channels(0, -1, 0).is_err());
    /// ```
    pub fn try_from_channels(red: i32, green: i32, blue: i32) -> Result<Self, ValueError> {
        Ok(Self::new(channel(red)?, channel(green)?, channel(blue)?))
    }

    /// Decodes a packed decimal color.
    ///
    /// Bits above the lowest 24 are ignored.
    #[must_use]
    pub const fn from_decimal(decimal: u32) -> Self {
        Self::new(
            ((decimal >> 16) & 0xFF) as u8,
            ((decimal >> 8) & 0xFF) as u8,
            (decimal & 0xFF) as u8,
        )
    }

    /// Encodes the color as a packed decimal.
    #[must_use]
    pub const fn to_decimal(&self) -> u32 {
        ((self.red as u32) << 16) + ((self.green as u32) << 8) + self.blue as u32
    }

    /// Returns the command string for this color.
    #[must_use]
    pub fn to_command(&self) -> String {
        format!("C{}", self.to_decimal())
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the channels as a tuple.
    #[must_use]
    pub const fn as_tuple(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

fn channel(value: i32) -> Result<u8, ValueError> {
    u8::try_from(value).map_err(|_| ValueError::OutOfRange {
        min: 0.0,
        max: 255.0,
        actual: f64::from(value),
    })
}
