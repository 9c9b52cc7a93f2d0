// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The myGEKKO client facade.

use std::sync::Arc;

use crate::accessor::ValueAccessor;
use crate::domains::{
    AccessDoor, AccessDoors, Action, Actions, AlarmsLogic, AlarmsLogics, Blind, Blinds, Cam, Cams,
    DoorIntercom, DoorIntercoms, EnergyCost, EnergyCosts, GlobalValues, GlobalsAccessor,
    HotWaterSystem, HotWaterSystems, Light, Lights, Load, Loads, RoomTemps, Thermostat, Vent,
    Vents,
};
use crate::error::{DecodeError, Result};
use crate::protocol::{DataSource, StaticSource};
use crate::provider::DataProvider;

/// Client for one myGEKKO controller.
///
/// Owns the [`DataProvider`] and one accessor per domain. Call
/// [`read_data`](Self::read_data) to refresh, then list entities with the
/// `get_*` methods. Listed views borrow the client and always read the latest
/// decoded state.
///
/// # Examples
///
/// ```no_run
/// use mygekko_lib::ApiClient;
///
/// # async fn example() -> mygekko_lib::Result<()> {
/// let client = ApiClient::builder()
///     .cloud("user@example.com", "api-key", "K999-7UOZ-8ZYZ-6TH3")
///     .build()?;
///
/// client.read_data().await?;
/// for blind in client.get_blinds() {
///     println!("{}: {:?}", blind.name(), blind.position());
/// }
/// # Ok(())
/// # }
/// ```
pub struct ApiClient<S> {
    provider: DataProvider<S>,
    blinds: Arc<ValueAccessor<Blinds, S>>,
    lights: Arc<ValueAccessor<Lights, S>>,
    room_temps: Arc<ValueAccessor<RoomTemps, S>>,
    vents: Arc<ValueAccessor<Vents, S>>,
    loads: Arc<ValueAccessor<Loads, S>>,
    actions: Arc<ValueAccessor<Actions, S>>,
    alarms_logics: Arc<ValueAccessor<AlarmsLogics, S>>,
    energy_costs: Arc<ValueAccessor<EnergyCosts, S>>,
    hotwater_systems: Arc<ValueAccessor<HotWaterSystems, S>>,
    cams: Arc<ValueAccessor<Cams, S>>,
    access_doors: Arc<ValueAccessor<AccessDoors, S>>,
    door_intercoms: Arc<ValueAccessor<DoorIntercoms, S>>,
    globals: Arc<GlobalsAccessor>,
}

impl ApiClient<StaticSource> {
    /// Creates a client serving fixed payloads.
    ///
    /// Nothing is fetched over the network; writes are recorded by the
    /// [`StaticSource`] and can be inspected through
    /// [`source`](Self::source).
    #[must_use]
    pub fn demo(resources: impl Into<String>, status: impl Into<String>) -> Self {
        Self::with_source(Arc::new(StaticSource::new(resources, status)))
    }
}

impl<S: DataSource + 'static> ApiClient<S> {
    /// Creates a client over any data source.
    ///
    /// Accessors are subscribed in a fixed order, so decode issues and log
    /// lines are reported domain by domain.
    #[must_use]
    pub fn with_source(source: Arc<S>) -> Self {
        let provider = DataProvider::new(Arc::clone(&source));

        let client = Self {
            blinds: Arc::new(ValueAccessor::new(Arc::clone(&source))),
            lights: Arc::new(ValueAccessor::new(Arc::clone(&source))),
            room_temps: Arc::new(ValueAccessor::new(Arc::clone(&source))),
            vents: Arc::new(ValueAccessor::new(Arc::clone(&source))),
            loads: Arc::new(ValueAccessor::new(Arc::clone(&source))),
            actions: Arc::new(ValueAccessor::new(Arc::clone(&source))),
            alarms_logics: Arc::new(ValueAccessor::new(Arc::clone(&source))),
            energy_costs: Arc::new(ValueAccessor::new(Arc::clone(&source))),
            hotwater_systems: Arc::new(ValueAccessor::new(Arc::clone(&source))),
            cams: Arc::new(ValueAccessor::new(Arc::clone(&source))),
            access_doors: Arc::new(ValueAccessor::new(Arc::clone(&source))),
            door_intercoms: Arc::new(ValueAccessor::new(source)),
            globals: Arc::new(GlobalsAccessor::new()),
            provider,
        };

        client.provider.subscribe(client.blinds.clone());
        client.provider.subscribe(client.lights.clone());
        client.provider.subscribe(client.room_temps.clone());
        client.provider.subscribe(client.vents.clone());
        client.provider.subscribe(client.loads.clone());
        client.provider.subscribe(client.actions.clone());
        client.provider.subscribe(client.alarms_logics.clone());
        client.provider.subscribe(client.energy_costs.clone());
        client.provider.subscribe(client.hotwater_systems.clone());
        client.provider.subscribe(client.cams.clone());
        client.provider.subscribe(client.access_doors.clone());
        client.provider.subscribe(client.door_intercoms.clone());
        client.provider.subscribe(client.globals.clone());

        client
    }

    /// Returns the payload provider.
    #[must_use]
    pub fn provider(&self) -> &DataProvider<S> {
        &self.provider
    }

    /// Returns the data source.
    #[must_use]
    pub fn source(&self) -> &Arc<S> {
        self.provider.source()
    }

    /// Checks connectivity and credentials.
    ///
    /// Returns the HTTP status of a resources request: `200` when the API
    /// accepts the credentials, the raw error status otherwise.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if no response was received.
    pub async fn try_connect(&self) -> Result<u16> {
        let status = self.provider.probe().await?;
        tracing::debug!(status, "Connection probe finished");
        Ok(status)
    }

    /// Refreshes both payloads and every accessor.
    ///
    /// # Errors
    ///
    /// Returns the first fetch or parse failure. Accessors keep their
    /// previous state for any payload that was not replaced.
    pub async fn read_data(&self) -> Result<()> {
        self.provider.read_data().await
    }

    /// Returns the entity decode failures of the last refresh.
    #[must_use]
    pub fn decode_issues(&self) -> Arc<[DecodeError]> {
        self.provider.decode_issues()
    }

    /// Lists blinds and blind groups.
    #[must_use]
    pub fn get_blinds(&self) -> Vec<Blind<'_, S>> {
        self.blinds.views()
    }

    /// Lists lights and light groups.
    #[must_use]
    pub fn get_lights(&self) -> Vec<Light<'_, S>> {
        self.lights.views()
    }

    /// Lists room temperature controllers.
    #[must_use]
    pub fn get_thermostats(&self) -> Vec<Thermostat<'_, S>> {
        self.room_temps.views()
    }

    /// Lists ventilation units.
    #[must_use]
    pub fn get_vents(&self) -> Vec<Vent<'_, S>> {
        self.vents.views()
    }

    /// Lists switched loads.
    #[must_use]
    pub fn get_loads(&self) -> Vec<Load<'_, S>> {
        self.loads.views()
    }

    /// Lists programmed actions.
    #[must_use]
    pub fn get_actions(&self) -> Vec<Action<'_, S>> {
        self.actions.views()
    }

    /// Lists alarm logics.
    #[must_use]
    pub fn get_alarms_logics(&self) -> Vec<AlarmsLogic<'_, S>> {
        self.alarms_logics.views()
    }

    /// Lists energy cost counters.
    #[must_use]
    pub fn get_energy_costs(&self) -> Vec<EnergyCost<'_, S>> {
        self.energy_costs.views()
    }

    /// Lists hot water systems.
    #[must_use]
    pub fn get_hotwater_systems(&self) -> Vec<HotWaterSystem<'_, S>> {
        self.hotwater_systems.views()
    }

    /// Lists cameras.
    #[must_use]
    pub fn get_cams(&self) -> Vec<Cam<'_, S>> {
        self.cams.views()
    }

    /// Lists access doors.
    #[must_use]
    pub fn get_access_doors(&self) -> Vec<AccessDoor<'_, S>> {
        self.access_doors.views()
    }

    /// Lists door intercoms.
    #[must_use]
    pub fn get_door_intercoms(&self) -> Vec<DoorIntercom<'_, S>> {
        self.door_intercoms.views()
    }

    /// Returns the controller network settings, `None` before the first
    /// status payload.
    #[must_use]
    pub fn get_globals_network(&self) -> Option<GlobalValues> {
        self.globals.network()
    }

    /// Returns the weather station readings, `None` before the first status
    /// payload.
    #[must_use]
    pub fn get_meteo(&self) -> Option<GlobalValues> {
        self.globals.meteo()
    }
}

impl<S> std::fmt::Debug for ApiClient<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}
