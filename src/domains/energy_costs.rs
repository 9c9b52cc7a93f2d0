// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Energy cost counters. Read-only.
//!
//! Unlike the other domains, energy costs are consumed as a list of named
//! sensor values rather than through individual getters. Each field carries
//! an optional unit; fields measured in physical units parse as numbers,
//! the rest stay text.

use serde::Serialize;

use crate::accessor::Domain;
use crate::entity::EntityView;
use crate::protocol::DataSource;

/// The `energycosts` payload domain.
#[derive(Debug)]
pub struct EnergyCosts;

impl Domain for EnergyCosts {
    const KEY: &'static str = "energycosts";
    const ITEM_FIELDS: &'static [&'static str] = &[
        "actPower",
        "energyToday",
        "energyMonth",
        "energySum",
        "powerMax",
        "unitEnergy",
        "unitPower",
        "energyToday6",
        "energyToday12",
        "energyToday18",
        "energyToday24",
        "energyYesterd6",
        "energyYesterd12",
        "energyYesterd18",
        "energyYesterd24",
        "elementInfo",
        "energyYear",
        "energyPeriod",
        "energyPeriodFrom",
        "counterDirection",
    ];
}

/// Unit of each entry of [`EnergyCosts::ITEM_FIELDS`], by position.
const UNITS: &[Option<&str>] = &[
    Some("kW"),
    Some("kWh"),
    Some("kWh"),
    Some("kWh"),
    Some("kW"),
    Some("Unit"),
    Some("Unit"),
    Some("kWh"),
    Some("kWh"),
    Some("kWh"),
    Some("kWh"),
    Some("kWh"),
    Some("kWh"),
    Some("kWh"),
    Some("kWh"),
    None,
    Some("kWh"),
    Some("kWh"),
    Some("DateTime"),
    None,
];

/// Units whose values are labels rather than measurements.
const TEXT_UNITS: &[&str] = &["Unit", "DateTime"];

/// A typed energy reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EnergyReading {
    /// A measurement in the value's unit.
    Numeric(f64),
    /// A label, date or unit-less code, kept verbatim.
    Text(String),
}

/// One named energy value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyValue {
    /// Field name, e.g. `energyToday`.
    pub name: &'static str,
    /// Unit, e.g. `kWh`, if the field declares one.
    pub unit: Option<&'static str>,
    /// The reading, `None` if the field is empty or not a number.
    pub value: Option<EnergyReading>,
}

/// An energy cost counter.
pub type EnergyCost<'a, S> = EntityView<'a, EnergyCosts, S>;

impl<S: DataSource> EntityView<'_, EnergyCosts, S> {
    /// Returns every declared value in field order.
    #[must_use]
    pub fn sensor_values(&self) -> Vec<EnergyValue> {
        EnergyCosts::ITEM_FIELDS
            .iter()
            .zip(UNITS)
            .map(|(&name, &unit)| {
                let value = if unit.is_some_and(|u| !TEXT_UNITS.contains(&u)) {
                    self.f64(name).map(EnergyReading::Numeric)
                } else {
                    self.raw_value(name).map(EnergyReading::Text)
                };
                EnergyValue { name, unit, value }
            })
            .collect()
    }

    /// Returns the value named `name`.
    #[must_use]
    pub fn sensor_value(&self, name: &str) -> Option<EnergyValue> {
        self.sensor_values().into_iter().find(|v| v.name == name)
    }
}
