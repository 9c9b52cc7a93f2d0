// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hot water storage systems.

use std::collections::BTreeSet;

use crate::accessor::Domain;
use crate::entity::EntityView;
use crate::error::Result;
use crate::protocol::DataSource;
use crate::types::Temperature;

/// The `hotwater_systems` payload domain.
#[derive(Debug)]
pub struct HotWaterSystems;

impl Domain for HotWaterSystems {
    const KEY: &'static str = "hotwater_systems";
    const ITEM_FIELDS: &'static [&'static str] = &[
        "type",
        "cooling",
        "setpointTemp",
        "topTemp",
        "bottomTemp",
        "collectorTemp",
        "state",
        "sum",
    ];
}

vendor_code! {
    /// On/off state of a hot water system.
    pub enum HotWaterSystemState {
        /// Off.
        Off = 0,
        /// On.
        On = 1,
    }
}

/// Capabilities of a hot water system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HotWaterSystemFeature {
    /// Switch on and off.
    OnOff,
    /// Adjustable set point.
    TargetTemperature,
    /// Bottom sensor.
    BottomTemperature,
    /// Top sensor.
    TopTemperature,
}

/// A hot water system.
pub type HotWaterSystem<'a, S> = EntityView<'a, HotWaterSystems, S>;

impl<S: DataSource> EntityView<'_, HotWaterSystems, S> {
    /// Returns the supported features.
    #[must_use]
    pub fn supported_features(&self) -> BTreeSet<HotWaterSystemFeature> {
        [
            ("state", HotWaterSystemFeature::OnOff),
            ("setpointTemp", HotWaterSystemFeature::TargetTemperature),
            ("bottomTemp", HotWaterSystemFeature::BottomTemperature),
            ("topTemp", HotWaterSystemFeature::TopTemperature),
        ]
        .into_iter()
        .filter(|(field, _)| self.has(field))
        .map(|(_, feature)| feature)
        .collect()
    }

    /// Returns the on/off state.
    #[must_use]
    pub fn state(&self) -> Option<HotWaterSystemState> {
        self.code("state")
    }

    /// Returns the set point in °C.
    #[must_use]
    pub fn target_temperature(&self) -> Option<f64> {
        self.f64("setpointTemp")
    }

    /// Returns the top sensor temperature in °C.
    #[must_use]
    pub fn top_temperature(&self) -> Option<f64> {
        self.f64("topTemp")
    }

    /// Returns the bottom sensor temperature in °C.
    #[must_use]
    pub fn bottom_temperature(&self) -> Option<f64> {
        self.f64("bottomTemp")
    }

    /// Returns the solar collector temperature in °C.
    #[must_use]
    pub fn collector_temperature(&self) -> Option<f64> {
        self.f64("collectorTemp")
    }

    /// Switches the system on or off.
    ///
    /// # Errors
    ///
    /// Returns the data source error.
    pub async fn set_state(&self, state: HotWaterSystemState) -> Result<()> {
        self.send(&state.to_string()).await
    }

    /// Sets the target temperature in °C.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NotFinite` for NaN or infinite input without
    /// sending.
    pub async fn set_target_temperature(&self, celsius: f64) -> Result<()> {
        let temperature = Temperature::new(celsius)?;
        self.send(&format!("T{temperature}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{accessor_with, sent};
    use serde_json::json;

    #[tokio::test]
    async fn boiler() {
        let (source, accessor) = accessor_with::<HotWaterSystems>(
            &json!({"hotwater_systems": {"item0": {"name": "Boiler"}, "item1": {"name": "Buffer"}}}),
            &json!({"hotwater_systems": {
                "item0": {"sumstate": {"value": "1;0;55.00;52.30;41.80;;1;0"}},
                "item1": {"sumstate": {"value": "1;0;;48.00;;;;0"}}
            }}),
        );
        let systems = accessor.views();
        let boiler = &systems[0];

        assert_eq!(boiler.state(), Some(HotWaterSystemState::On));
        assert_eq!(boiler.target_temperature(), Some(55.0));
        assert_eq!(boiler.top_temperature(), Some(52.3));
        assert_eq!(boiler.bottom_temperature(), Some(41.8));
        assert_eq!(boiler.collector_temperature(), None);
        assert_eq!(boiler.supported_features().len(), 4);
        assert_eq!(
            systems[1].supported_features(),
            BTreeSet::from([HotWaterSystemFeature::TopTemperature])
        );

        boiler.set_target_temperature(60.0).await.unwrap();
        boiler.set_target_temperature(48.5).await.unwrap();
        boiler.set_state(HotWaterSystemState::Off).await.unwrap();
        assert!(boiler.set_target_temperature(f64::INFINITY).await.is_err());

        assert_eq!(
            sent(&source),
            vec![
                "/hotwater_systems/item0 T60",
                "/hotwater_systems/item0 T48.5",
                "/hotwater_systems/item0 0",
            ]
        );
    }
}
