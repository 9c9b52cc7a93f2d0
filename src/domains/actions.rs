// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Programmed actions.

use std::collections::BTreeSet;

use crate::accessor::Domain;
use crate::entity::EntityView;
use crate::error::Result;
use crate::protocol::DataSource;

/// The `actions` payload domain.
#[derive(Debug)]
pub struct Actions;

impl Domain for Actions {
    const KEY: &'static str = "actions";
    const ITEM_FIELDS: &'static [&'static str] =
        &["currentState", "startConditionState", "elementInfo"];
}

vendor_code! {
    /// Run state of an action.
    pub enum ActionState {
        /// Not running.
        Off = 0,
        /// Running.
        On = 1,
    }
}

/// Capabilities of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionFeature {
    /// Start and stop.
    OnOff,
}

/// A programmed action.
pub type Action<'a, S> = EntityView<'a, Actions, S>;

impl<S: DataSource> EntityView<'_, Actions, S> {
    /// Returns the supported features.
    #[must_use]
    pub fn supported_features(&self) -> BTreeSet<ActionFeature> {
        let mut features = BTreeSet::new();
        if self.has("currentState") {
            features.insert(ActionFeature::OnOff);
        }
        features
    }

    /// Returns the run state.
    #[must_use]
    pub fn state(&self) -> Option<ActionState> {
        self.code("currentState")
    }

    /// Returns `true` if the start condition is met.
    #[must_use]
    pub fn start_condition(&self) -> Option<bool> {
        self.code::<i64>("startConditionState").map(|state| state == 1)
    }

    /// Starts or stops the action.
    ///
    /// # Errors
    ///
    /// Returns the data source error.
    pub async fn set_state(&self, state: ActionState) -> Result<()> {
        self.send(&state.to_string()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{accessor_with, sent};
    use serde_json::json;

    #[tokio::test]
    async fn run_action() {
        let (source, accessor) = accessor_with::<Actions>(
            &json!({"actions": {"item0": {"name": "Leaving home"}}}),
            &json!({"actions": {"item0": {"sumstate": {"value": "1;0;0"}}}}),
        );
        let actions = accessor.views();
        let action = &actions[0];

        assert_eq!(action.name(), "Leaving home");
        assert_eq!(action.state(), Some(ActionState::On));
        assert_eq!(action.start_condition(), Some(false));
        assert_eq!(action.supported_features(), BTreeSet::from([ActionFeature::OnOff]));

        action.set_state(ActionState::Off).await.unwrap();
        assert_eq!(sent(&source), vec!["/actions/item0 0"]);
    }
}
