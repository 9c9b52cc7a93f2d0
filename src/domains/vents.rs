// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ventilation units.
//!
//! The meaning of the working mode and sub mode codes depends on the device
//! model: Zimmermann units use their own tables.

use std::collections::BTreeSet;
use std::fmt;

use crate::accessor::Domain;
use crate::entity::EntityView;
use crate::error::Result;
use crate::protocol::DataSource;

/// The `vents` payload domain.
#[derive(Debug)]
pub struct Vents;

impl Domain for Vents {
    const KEY: &'static str = "vents";
    const ITEM_FIELDS: &'static [&'static str] = &[
        "workingLevel",
        "deviceModel",
        "workingMode",
        "bypassState",
        "maximumWorkingLevel",
        "relativeHumidityLevel",
        "airQualityLevel",
        "co2Value",
        "supplyAirTemperatureValue",
        "exhaustAirTemperatureValue",
        "outsideAirTemperatureValue",
        "outgoingAirTemperatureValue",
        "supplyAirWorkingLevel",
        "exhaustAirWorkingLevel",
        "elementInfo",
        "subWorkingMode",
        "coolingModeState",
        "dehumidModeState",
        "bypassMode",
    ];
}

vendor_code! {
    /// Fan level.
    pub enum VentWorkingLevel {
        /// Fan off.
        Off = 0,
        /// Level 1.
        Level1 = 1,
        /// Level 2.
        Level2 = 2,
        /// Level 3.
        Level3 = 3,
        /// Level 4.
        Level4 = 4,
    }
}

vendor_code! {
    /// Ventilation unit model.
    pub enum VentDeviceModel {
        /// Generic unit.
        Standard = 0,
        /// Pluggit.
        Pluggit = 1,
        /// Zimmermann, first generation.
        ZimmermannV1 = 2,
        /// Westaflex.
        Westaflex = 3,
        /// Stiebel Eltron LWZ.
        StiebelLwz = 4,
        /// Zimmermann, second generation.
        ZimmermannV2 = 5,
    }
}

impl VentDeviceModel {
    /// Returns `true` for models using the Zimmermann mode tables.
    #[must_use]
    pub const fn is_zimmermann(self) -> bool {
        matches!(self, Self::ZimmermannV1 | Self::ZimmermannV2)
    }
}

vendor_code! {
    /// Working mode for non-Zimmermann units.
    pub enum VentWorkingMode {
        /// Automatic.
        Auto = 0,
        /// Manual.
        Manual = 1,
        /// Pluggit automatic.
        PluggitAuto = 2,
        /// Pluggit weekly program.
        PluggitWeek = 3,
    }
}

vendor_code! {
    /// Working mode for Zimmermann units.
    pub enum VentWorkingModeZimmermann {
        /// Off.
        Off = 0,
        /// Eco, summer.
        EcoSummer = 1,
        /// Eco, winter.
        EcoWinter = 2,
        /// Comfort.
        Comfort = 3,
        /// Stove.
        Stove = 4,
    }
}

vendor_code! {
    /// Sub mode for non-Zimmermann units.
    pub enum VentSubWorkingMode {
        /// Exhaust only.
        Exhaust = 0,
        /// Exhaust and supply.
        ExhaustSupply = 1,
        /// Exhaust and supply with heat recovery.
        ExhaustSupplyHeatRecovery = 2,
    }
}

vendor_code! {
    /// Sub mode for Zimmermann units.
    pub enum VentSubWorkingModeZimmermann {
        /// Middle temperature offset.
        MiddleTempOffset = 0,
        /// Offset only.
        OnlyOffset = 1,
    }
}

vendor_code! {
    /// Bypass flap mode.
    pub enum VentBypassMode {
        /// Automatic.
        Auto = 0,
        /// Manual.
        Manual = 1,
        /// Summer.
        Summer = 2,
    }
}

vendor_code! {
    /// Bypass flap state.
    pub enum VentBypassState {
        /// Automatic.
        Auto = 0,
        /// Manual.
        Manual = 1,
        /// Summer.
        Summer = 2,
    }
}

vendor_code! {
    /// On/off switch used by cooling and dehumidification.
    pub enum VentSwitch {
        /// Off.
        Off = 0,
        /// On.
        On = 1,
    }
}

vendor_code! {
    /// Element status reported by the controller.
    pub enum VentElementInfo {
        /// Normal operation.
        Ok = 0,
        /// Manually switched off.
        ManualOff = 1,
        /// Manually switched on.
        ManualOn = 2,
        /// Locked.
        Locked = 3,
        /// Alarm.
        Alarm = 4,
    }
}

/// Working mode, interpreted for the unit's model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VentMode {
    /// Standard table.
    Standard(VentWorkingMode),
    /// Zimmermann table.
    Zimmermann(VentWorkingModeZimmermann),
}

impl VentMode {
    /// Returns the vendor code.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Standard(mode) => mode.code(),
            Self::Zimmermann(mode) => mode.code(),
        }
    }
}

impl fmt::Display for VentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<VentWorkingMode> for VentMode {
    fn from(mode: VentWorkingMode) -> Self {
        Self::Standard(mode)
    }
}

impl From<VentWorkingModeZimmermann> for VentMode {
    fn from(mode: VentWorkingModeZimmermann) -> Self {
        Self::Zimmermann(mode)
    }
}

/// Sub mode, interpreted for the unit's model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VentSubMode {
    /// Standard table.
    Standard(VentSubWorkingMode),
    /// Zimmermann table.
    Zimmermann(VentSubWorkingModeZimmermann),
}

/// Capabilities of a ventilation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VentFeature {
    /// Adjustable fan level.
    WorkingLevel,
    /// CO2 sensor.
    Co2,
    /// Humidity sensor.
    Humidity,
    /// Air quality sensor.
    AirQuality,
}

/// A ventilation unit.
pub type Vent<'a, S> = EntityView<'a, Vents, S>;

impl<S: DataSource> EntityView<'_, Vents, S> {
    /// Returns the supported features.
    #[must_use]
    pub fn supported_features(&self) -> BTreeSet<VentFeature> {
        let mut features = BTreeSet::new();
        if self.has("workingLevel") {
            features.insert(VentFeature::WorkingLevel);
        }
        if self.has("airQualityLevel") {
            features.insert(VentFeature::AirQuality);
        }
        if self.has("co2Value") {
            features.insert(VentFeature::Co2);
        }
        if self.has("relativeHumidityLevel") {
            features.insert(VentFeature::Humidity);
        }
        features
    }

    /// Returns the current fan level.
    #[must_use]
    pub fn working_level(&self) -> Option<VentWorkingLevel> {
        self.code("workingLevel")
    }

    /// Returns the highest fan level the unit allows.
    #[must_use]
    pub fn maximum_working_level(&self) -> Option<VentWorkingLevel> {
        self.code("maximumWorkingLevel")
    }

    /// Returns the unit model.
    #[must_use]
    pub fn device_model(&self) -> Option<VentDeviceModel> {
        self.code("deviceModel")
    }

    /// Returns the working mode using the table for the unit's model.
    #[must_use]
    pub fn working_mode(&self) -> Option<VentMode> {
        if self.device_model().is_some_and(VentDeviceModel::is_zimmermann) {
            self.code("workingMode").map(VentMode::Zimmermann)
        } else {
            self.code("workingMode").map(VentMode::Standard)
        }
    }

    /// Returns the sub mode using the table for the unit's model.
    #[must_use]
    pub fn sub_working_mode(&self) -> Option<VentSubMode> {
        if self.device_model().is_some_and(VentDeviceModel::is_zimmermann) {
            self.code("subWorkingMode").map(VentSubMode::Zimmermann)
        } else {
            self.code("subWorkingMode").map(VentSubMode::Standard)
        }
    }

    /// Returns the bypass flap mode.
    #[must_use]
    pub fn bypass_mode(&self) -> Option<VentBypassMode> {
        self.code("bypassMode")
    }

    /// Returns the bypass flap state.
    #[must_use]
    pub fn bypass_state(&self) -> Option<VentBypassState> {
        self.code("bypassState")
    }

    /// Returns the cooling switch.
    #[must_use]
    pub fn cooling_mode(&self) -> Option<VentSwitch> {
        self.code("coolingModeState")
    }

    /// Returns the dehumidification switch.
    #[must_use]
    pub fn dehumid_mode(&self) -> Option<VentSwitch> {
        self.code("dehumidModeState")
    }

    /// Returns the element status.
    #[must_use]
    pub fn element_info(&self) -> Option<VentElementInfo> {
        self.code("elementInfo")
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

    /// Returns the CO2 concentration in ppm.
    #[must_use]
    pub fn co2(&self) -> Option<f64> {
        self.f64("co2Value")
    }

    /// Returns the supply air temperature in °C.
    #[must_use]
    pub fn supply_air_temperature(&self) -> Option<f64> {
        self.f64("supplyAirTemperatureValue")
    }

    /// Returns the exhaust air temperature in °C.
    #[must_use]
    pub fn exhaust_air_temperature(&self) -> Option<f64> {
        self.f64("exhaustAirTemperatureValue")
    }

    /// Returns the outside air temperature in °C.
    #[must_use]
    pub fn outside_air_temperature(&self) -> Option<f64> {
        self.f64("outsideAirTemperatureValue")
    }

    /// Returns the outgoing air temperature in °C.
    #[must_use]
    pub fn outgoing_air_temperature(&self) -> Option<f64> {
        self.f64("outgoingAirTemperatureValue")
    }

    /// Returns the supply fan level in percent.
    #[must_use]
    pub fn supply_air_working_level(&self) -> Option<f64> {
        self.f64("supplyAirWorkingLevel")
    }

    /// Returns the exhaust fan level in percent.
    #[must_use]
    pub fn exhaust_air_working_level(&self) -> Option<f64> {
        self.f64("exhaustAirWorkingLevel")
    }

    /// Sets the fan level.
    ///
    /// # Errors
    ///
    /// Returns the data source error.
    pub async fn set_working_level(&self, level: VentWorkingLevel) -> Result<()> {
        // The controller expects -1 to switch the fan off.
        let command = match level {
            VentWorkingLevel::Off => "-1".to_string(),
            level => level.to_string(),
        };
        self.send(&command).await
    }

    /// Sets the working mode.
    ///
    /// # Errors
    ///
    /// Returns the data source error.
    pub async fn set_working_mode(&self, mode: impl Into<VentMode>) -> Result<()> {
        self.send(&format!("M{}", mode.into())).await
    }

    /// Sets the bypass flap state.
    ///
    /// # Errors
    ///
    /// Returns the data source error.
    pub async fn set_bypass_state(&self, state: VentBypassState) -> Result<()> {
        self.send(&format!("BY{state}")).await
    }

    /// Switches cooling on or off.
    ///
    /// # Errors
    ///
    /// Returns the data source error.
    pub async fn set_cooling_mode(&self, mode: VentSwitch) -> Result<()> {
        self.send(&format!("C{mode}")).await
    }

    /// Switches dehumidification on or off.
    ///
    /// # Errors
    ///
    /// Returns the data source error.
    pub async fn set_dehumid_mode(&self, mode: VentSwitch) -> Result<()> {
        self.send(&format!("D{mode}")).await
    }
}
