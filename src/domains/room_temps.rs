// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room temperature controllers, exposed as thermostats.

use std::collections::BTreeSet;

use crate::accessor::Domain;
use crate::entity::EntityView;
use crate::error::Result;
use crate::protocol::DataSource;
use crate::types::Temperature;

/// The `roomtemps` payload domain.
#[derive(Debug)]
pub struct RoomTemps;

impl Domain for RoomTemps {
    const KEY: &'static str = "roomtemps";
    const ITEM_FIELDS: &'static [&'static str] = &[
        "temperatureValue",
        "temperatureSetPointValue",
        "valveOpeningLevel",
        "workingMode",
        "reserved",
        "temperatureAdjustmentValue",
        "coolingModeState",
        "elementInfo",
        "relativeHumidityLevel",
        "airQualityLevel",
        "floorTemperatureValue",
    ];
}

vendor_code! {
    /// Operating mode of a room controller.
    pub enum RoomTempMode {
        /// Off.
        Off = 1,
        /// Comfort set point.
        Comfort = 8,
        /// Reduced set point.
        Reduced = 16,
        /// Manual set point.
        Manual = 64,
        /// Standby.
        Standby = 256,
    }
}

/// Capabilities of a thermostat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThermostatFeature {
    /// Adjustable set point.
    TargetTemperature,
    /// Humidity sensor.
    Humidity,
    /// Air quality sensor.
    AirQuality,
}

/// A room temperature controller.
pub type Thermostat<'a, S> = EntityView<'a, RoomTemps, S>;

impl<S: DataSource> EntityView<'_, RoomTemps, S> {
    /// Returns the supported features.
    #[must_use]
    pub fn supported_features(&self) -> BTreeSet<ThermostatFeature> {
        let mut features = BTreeSet::new();
        if self.has("temperatureSetPointValue") {
            features.insert(ThermostatFeature::TargetTemperature);
        }
        if self.has("relativeHumidityLevel") {
            features.insert(ThermostatFeature::Humidity);
        }
        if self.has("airQualityLevel") {
            features.insert(ThermostatFeature::AirQuality);
        }
        features
    }

    /// Returns the measured room temperature in °C.
    #[must_use]
    pub fn current_temperature(&self) -> Option<f64> {
        self.f64("temperatureValue")
    }

    /// Returns the set point in °C.
    #[must_use]
    pub fn target_temperature(&self) -> Option<f64> {
        self.f64("temperatureSetPointValue")
    }

    /// Returns the valve opening in percent.
    #[must_use]
    pub fn valve_opening(&self) -> Option<f64> {
        self.f64("valveOpeningLevel")
    }

    /// Returns the set point adjustment in K.
    #[must_use]
    pub fn temperature_adjustment(&self) -> Option<f64> {
        self.f64("temperatureAdjustmentValue")
    }

    /// Returns the floor temperature in °C.
    #[must_use]
    pub fn floor_temperature(&self) -> Option<f64> {
        self.f64("floorTemperatureValue")
    }

    /// Returns the relative humidity in percent.
    #[must_use]
    pub fn humidity(&self) -> Option<f64> {
        self.f64("relativeHumidityLevel")
    }

    /// Returns the air quality level.
    #[must_use]
    pub fn air_quality(&self) -> Option<f64> {
        self.f64("airQualityLevel")
    }

    /// Returns the operating mode.
    #[must_use]
    pub fn working_mode(&self) -> Option<RoomTempMode> {
        self.code("workingMode")
    }

    /// Returns `true` while the controller is cooling.
    #[must_use]
    pub fn is_cooling(&self) -> Option<bool> {
        self.code::<i64>("coolingModeState").map(|state| state == 1)
    }

    /// Sets the target temperature in °C.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NotFinite` for NaN or infinite input without
    /// sending.
    pub async fn set_target_temperature(&self, celsius: f64) -> Result<()> {
        let temperature = Temperature::new(celsius)?;
        self.send(&format!("S{temperature}")).await
    }

    /// Sets the operating mode.
    ///
    /// # Errors
    ///
    /// Returns the data source error.
    pub async fn set_working_mode(&self, mode: RoomTempMode) -> Result<()> {
        self.send(&format!("M{mode}")).await
    }
}
