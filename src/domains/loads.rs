// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Switched loads (sockets, pumps, relays).

use std::collections::BTreeSet;

use crate::accessor::Domain;
use crate::entity::EntityView;
use crate::error::Result;
use crate::protocol::DataSource;

/// The `loads` payload domain.
#[derive(Debug)]
pub struct Loads;

impl Domain for Loads {
    const KEY: &'static str = "loads";
    const ITEM_FIELDS: &'static [&'static str] = &["currentState", "elementInfo"];
}

vendor_code! {
    /// Switching state of a load.
    pub enum LoadState {
        /// Off.
        Off = 0,
        /// On for one impulse.
        OnImpulse = 1,
        /// On until switched off.
        OnPermanent = 2,
    }
}

/// Capabilities of a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LoadFeature {
    /// Switch on and off.
    OnOff,
}

/// A switched load.
pub type Load<'a, S> = EntityView<'a, Loads, S>;

impl<S: DataSource> EntityView<'_, Loads, S> {
    /// Returns the supported features.
    #[must_use]
    pub fn supported_features(&self) -> BTreeSet<LoadFeature> {
        let mut features = BTreeSet::new();
        if self.has("currentState") {
            features.insert(LoadFeature::OnOff);
        }
        features
    }

    /// Returns the switching state.
    #[must_use]
    pub fn state(&self) -> Option<LoadState> {
        self.code("currentState")
    }

    /// Switches the load.
    ///
    /// # Errors
    ///
    /// Returns the data source error.
    pub async fn set_state(&self, state: LoadState) -> Result<()> {
        self.send(&state.to_string()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{accessor_with, sent};
    use serde_json::json;

    #[tokio::test]
    async fn switch_load() {
        let (source, accessor) = accessor_with::<Loads>(
            &json!({"loads": {"item0": {"name": "Pump"}, "item1": {"name": "Socket"}}}),
            &json!({"loads": {
                "item0": {"sumstate": {"value": "2;0"}},
                "item1": {"sumstate": {"value": ";0"}}
            }}),
        );
        let loads = accessor.views();

        assert_eq!(loads[0].state(), Some(LoadState::OnPermanent));
        assert_eq!(loads[0].supported_features(), BTreeSet::from([LoadFeature::OnOff]));
        assert_eq!(loads[1].state(), None);
        assert!(loads[1].supported_features().is_empty());

        loads[0].set_state(LoadState::Off).await.unwrap();
        loads[1].set_state(LoadState::OnImpulse).await.unwrap();
        assert_eq!(sent(&source), vec!["/loads/item0 0", "/loads/item1 1"]);
    }
}
