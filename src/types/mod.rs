// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for myGEKKO commands.
//!
//! Each type ensures values are within their valid ranges at construction
//! time, so an invalid write is rejected before any request is sent.
//!
//! # Types
//!
//! - [`Percentage`] - Blind position and tilt (0.0-100.0)
//! - [`Brightness`] - Light dim level (0-100)
//! - [`RgbColor`] - 8-bit RGB color, packed as `(R << 16) + (G << 8) + B` on the wire
//! - [`Temperature`] - Finite set point in °C

mod brightness;
mod percentage;
mod rgb_color;
mod temperature;

pub use brightness::Brightness;
pub use percentage::Percentage;
pub use rgb_color::RgbColor;
pub use temperature::Temperature;
