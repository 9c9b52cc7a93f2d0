// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lights: switched, dimmable and RGB.

use std::collections::BTreeSet;

use crate::accessor::Domain;
use crate::entity::EntityView;
use crate::error::Result;
use crate::protocol::DataSource;
use crate::types::{Brightness, RgbColor};

/// The `lights` payload domain.
#[derive(Debug)]
pub struct Lights;

impl Domain for Lights {
    const KEY: &'static str = "lights";
    const ITEM_FIELDS: &'static [&'static str] = &[
        "currentState",
        "dimLevel",
        "rgbColor",
        "tunableWhiteLevel",
        "elementInfo",
    ];
    const GROUP_FIELDS: Option<&'static [&'static str]> = Some(&["currentState"]);
}

vendor_code! {
    /// On/off state of a light.
    pub enum LightState {
        /// Off.
        Off = 0,
        /// On.
        On = 1,
    }
}

/// Capabilities of a light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LightFeature {
    /// Switch on and off.
    OnOff,
    /// Brightness control.
    Dimmable,
    /// RGB color control.
    RgbColor,
}

/// A light or light group.
pub type Light<'a, S> = EntityView<'a, Lights, S>;

impl<S: DataSource> EntityView<'_, Lights, S> {
    /// Returns the supported features. Groups only support on/off.
    #[must_use]
    pub fn supported_features(&self) -> BTreeSet<LightFeature> {
        let mut features = BTreeSet::new();
        if self.is_group() {
            features.insert(LightFeature::OnOff);
            return features;
        }
        if self.has("currentState") {
            features.insert(LightFeature::OnOff);
        }
        if self.has("dimLevel") {
            features.insert(LightFeature::Dimmable);
        }
        if self.has("rgbColor") {
            features.insert(LightFeature::RgbColor);
        }
        features
    }

    /// Returns the on/off state.
    #[must_use]
    pub fn state(&self) -> Option<LightState> {
        self.code("currentState")
    }

    /// Returns the brightness, rounded up to a whole percent.
    #[must_use]
    pub fn brightness(&self) -> Option<Brightness> {
        self.f64("dimLevel").and_then(Brightness::from_level)
    }

    /// Returns the RGB color.
    #[must_use]
    pub fn rgb_color(&self) -> Option<RgbColor> {
        self.code::<i64>("rgbColor")
            .and_then(|packed| u32::try_from(packed).ok())
            .map(RgbColor::from_decimal)
    }

    /// Returns the tunable white level.
    #[must_use]
    pub fn tunable_white_level(&self) -> Option<f64> {
        self.f64("tunableWhiteLevel")
    }

    /// Switches the light or group on or off.
    ///
    /// # Errors
    ///
    /// Returns the data source error.
    pub async fn set_state(&self, state: LightState) -> Result<()> {
        self.send(&state.to_string()).await
    }

    /// Sets the brightness (`0` to `100` inclusive).
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` above 100 and
    /// `DeviceError::UnsupportedFeature` for groups, without sending.
    pub async fn set_brightness(&self, brightness: u8) -> Result<()> {
        self.require_item("set brightness")?;
        let brightness = Brightness::new(brightness)?;
        self.send(&brightness.to_command()).await
    }

    /// Sets the RGB color from untyped channels (`0` to `255` each).
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` for any channel outside `[0, 255]`
    /// and `DeviceError::UnsupportedFeature` for groups, without sending.
    pub async fn set_rgb_color(&self, red: i32, green: i32, blue: i32) -> Result<()> {
        self.require_item("set rgb color")?;
        let color = RgbColor::try_from_channels(red, green, blue)?;
        self.send(&color.to_command()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ValueError};
    use crate::testing::{Fixture, accessor_with, sent};
    use serde_json::json;

    fn fixture() -> Fixture<Lights> {
        accessor_with(
            &json!({"lights": {
                "item0": {"name": "Living room"},
                "item1": {"name": "Hall"},
                "item2": {"name": "Porch"},
                "group3": {"name": "Ground floor"}
            }}),
            &json!({"lights": {
                "item0": {"sumstate": {"value": "1;43.2;16711719;;0;"}},
                "item1": {"sumstate": {"value": "0;;;;0"}},
                "item2": {"sumstate": {"value": "1;100.00;0;50;0"}},
                "group3": {"sumstate": {"value": "0"}}
            }}),
        )
    }

    #[test]
    fn rgb_light() {
        let (_, accessor) = fixture();
        let lights = accessor.views();
        let light = &lights[0];

        assert_eq!(light.state(), Some(LightState::On));
        assert_eq!(light.brightness().map(|b| b.value()), Some(44));
        assert_eq!(light.rgb_color(), Some(RgbColor::new(255, 0, 39)));
        assert_eq!(light.tunable_white_level(), None);
        assert_eq!(
            light.supported_features(),
            BTreeSet::from([LightFeature::OnOff, LightFeature::Dimmable, LightFeature::RgbColor])
        );
    }

    #[test]
    fn empty_rgb_field_is_absent() {
        let (_, accessor) = fixture();
        let lights = accessor.views();
        let light = &lights[1];

        assert_eq!(light.rgb_color(), None);
        assert_eq!(light.brightness(), None);
        assert_eq!(
            light.supported_features(),
            BTreeSet::from([LightFeature::OnOff])
        );
    }

    #[test]
    fn zero_color_is_a_value() {
        let (_, accessor) = fixture();
        let lights = accessor.views();
        assert_eq!(lights[2].rgb_color(), Some(RgbColor::new(0, 0, 0)));
        assert_eq!(lights[2].tunable_white_level(), Some(50.0));
    }

    #[test]
    fn group_features() {
        let (_, accessor) = fixture();
        let lights = accessor.views();
        let group = &lights[3];
        assert_eq!(group.state(), Some(LightState::Off));
        assert_eq!(
            group.supported_features(),
            BTreeSet::from([LightFeature::OnOff])
        );
    }

    #[tokio::test]
    async fn command_encoding() {
        let (source, accessor) = fixture();
        let lights = accessor.views();

        lights[0].set_state(LightState::Off).await.unwrap();
        lights[0].set_brightness(0).await.unwrap();
        lights[0].set_brightness(100).await.unwrap();
        lights[0].set_rgb_color(255, 0, 39).await.unwrap();
        lights[3].set_state(LightState::On).await.unwrap();

        assert_eq!(
            sent(&source),
            vec![
                "/lights/item0 0",
                "/lights/item0 D0",
                "/lights/item0 D100",
                "/lights/item0 C16711719",
                "/lights/group3 1",
            ]
        );
    }

    #[tokio::test]
    async fn rejected_writes_send_nothing() {
        let (source, accessor) = fixture();
        let lights = accessor.views();

        assert!(matches!(
            lights[0].set_brightness(101).await,
            Err(Error::Value(ValueError::OutOfRange { .. }))
        ));
        assert!(lights[0].set_rgb_color(256, 0, 0).await.is_err());
        assert!(lights[0].set_rgb_color(0, -1, 0).await.is_err());
        assert!(lights[3].set_brightness(50).await.is_err());
        assert!(lights[3].set_rgb_color(1, 2, 3).await.is_err());

        assert!(source.sent_commands().is_empty());
    }
}
