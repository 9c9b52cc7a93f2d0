// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-domain schemas, typed getters and commands.
//!
//! Each domain module declares a marker type implementing
//! [`Domain`](crate::accessor::Domain) (payload key and `sumstate` field
//! tables), the vendor code enums it decodes, a feature enum, and an alias
//! over [`EntityView`](crate::entity::EntityView) carrying the domain's
//! getters and setters.
//!
//! | Payload key | Marker | View |
//! |---|---|---|
//! | `blinds` | [`Blinds`] | [`Blind`] |
//! | `lights` | [`Lights`] | [`Light`] |
//! | `roomtemps` | [`RoomTemps`] | [`Thermostat`] |
//! | `vents` | [`Vents`] | [`Vent`] |
//! | `loads` | [`Loads`] | [`Load`] |
//! | `actions` | [`Actions`] | [`Action`] |
//! | `alarms_logics` | [`AlarmsLogics`] | [`AlarmsLogic`] |
//! | `energycosts` | [`EnergyCosts`] | [`EnergyCost`] |
//! | `hotwater_systems` | [`HotWaterSystems`] | [`HotWaterSystem`] |
//! | `cams` | [`Cams`] | [`Cam`] |
//! | `accessdoors` | [`AccessDoors`] | [`AccessDoor`] |
//! | `door_intercom` | [`DoorIntercoms`] | [`DoorIntercom`] |
//!
//! `globals.network` and `globals.meteo` are key/value tables handled by
//! [`GlobalsAccessor`].

mod access_doors;
mod actions;
mod alarms_logics;
mod blinds;
mod cams;
mod door_intercoms;
mod energy_costs;
mod globals;
mod hotwater_systems;
mod lights;
mod loads;
mod room_temps;
mod vents;

pub use access_doors::{
    AccessDoor, AccessDoorAccessState, AccessDoorAccessType, AccessDoorCommand,
    AccessDoorElementInfo, AccessDoorFeature, AccessDoorState, AccessDoors,
};
pub use actions::{Action, ActionFeature, ActionState, Actions};
pub use alarms_logics::{AlarmsLogic, AlarmsLogics};
pub use blinds::{Blind, BlindElementInfo, BlindFeature, BlindState, Blinds};
pub use cams::{Cam, CamFeature, CamNewRecordAvailableState, Cams};
pub use door_intercoms::{
    DoorIntercom, DoorIntercomActionOnRingState, DoorIntercomCommand,
    DoorIntercomConnectionState, DoorIntercomFeature, DoorIntercomSoundMode, DoorIntercoms,
};
pub use energy_costs::{EnergyCost, EnergyCosts, EnergyReading, EnergyValue};
pub use globals::{GlobalValues, GlobalsAccessor};
pub use hotwater_systems::{
    HotWaterSystem, HotWaterSystemFeature, HotWaterSystemState, HotWaterSystems,
};
pub use lights::{Light, LightFeature, LightState, Lights};
pub use loads::{Load, LoadFeature, LoadState, Loads};
pub use room_temps::{RoomTempMode, RoomTemps, Thermostat, ThermostatFeature};
pub use vents::{
    Vent, VentBypassMode, VentBypassState, VentDeviceModel, VentElementInfo, VentFeature,
    VentMode, VentSubMode, VentSubWorkingMode, VentSubWorkingModeZimmermann, VentSwitch,
    VentWorkingLevel, VentWorkingMode, VentWorkingModeZimmermann, Vents,
};
