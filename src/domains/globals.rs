// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Controller-wide values from `status.globals`.
//!
//! These are plain key/value tables, not entities: `globals.network` holds
//! the controller's network settings and `globals.meteo` the weather
//! station readings. Each entry is an object whose `value` is kept as text.

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde_json::Value;

use crate::accessor::scalar_string;
use crate::error::DecodeError;
use crate::subscription::PayloadSubscriber;

/// Ordered key/value table.
pub type GlobalValues = IndexMap<String, String>;

/// Store for the `globals` tables of the status payload.
#[derive(Debug, Default)]
pub struct GlobalsAccessor {
    network: RwLock<Option<GlobalValues>>,
    meteo: RwLock<Option<GlobalValues>>,
}

impl GlobalsAccessor {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the network table, `None` before the first status payload.
    #[must_use]
    pub fn network(&self) -> Option<GlobalValues> {
        self.network.read().clone()
    }

    /// Returns the weather table, `None` before the first status payload.
    #[must_use]
    pub fn meteo(&self) -> Option<GlobalValues> {
        self.meteo.read().clone()
    }

    fn table(status: &Value, name: &str) -> GlobalValues {
        status
            .get("globals")
            .and_then(|globals| globals.get(name))
            .and_then(Value::as_object)
            .into_iter()
            .flatten()
            .filter_map(|(key, entry)| {
                let value = entry.get("value").and_then(scalar_string)?;
                Some((key.clone(), value))
            })
            .collect()
    }
}

impl PayloadSubscriber for GlobalsAccessor {
    fn on_resources(&self, _resources: &Value) -> Vec<DecodeError> {
        Vec::new()
    }

    fn on_status(&self, status: &Value) -> Vec<DecodeError> {
        let network = Self::table(status, "network");
        let meteo = Self::table(status, "meteo");
        tracing::trace!(network = network.len(), meteo = meteo.len(), "Updated globals");
        *self.network.write() = Some(network);
        *self.meteo.write() = Some(meteo);
        Vec::new()
    }
}
