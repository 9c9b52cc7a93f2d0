// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Access control: doors, gates and barriers.

use std::collections::BTreeSet;

use crate::accessor::Domain;
use crate::entity::EntityView;
use crate::error::Result;
use crate::protocol::DataSource;

/// The `accessdoors` payload domain.
#[derive(Debug)]
pub struct AccessDoors;

impl Domain for AccessDoors {
    const KEY: &'static str = "accessdoors";
    const ITEM_FIELDS: &'static [&'static str] = &[
        "accessControllerActionState",
        "elementInfo",
        "accessState",
        "gateRuntimeLevel",
        "accessType",
    ];
}

vendor_code! {
    /// Whether the door is open.
    pub enum AccessDoorAccessState {
        /// Closed.
        Closed = 0,
        /// Open.
        Open = 1,
    }
}

vendor_code! {
    /// Kind of access point.
    pub enum AccessDoorAccessType {
        /// Door opener.
        Door = 0,
        /// Gate control.
        GateControl = 1,
        /// Barrier control.
        BarrierControl = 2,
        /// Gate operator.
        GateOperation = 3,
        /// Remote door over myGEKKO Net.
        MygekkoNetRemoteDoor = 10,
    }
}

vendor_code! {
    /// Current controller action.
    pub enum AccessDoorState {
        /// Closing or closed.
        Close = 0,
        /// Opening or open.
        Open = 1,
        /// Held.
        HoldDown = 2,
        /// Partially open.
        PartiallyOpen = 3,
        /// Partially open and held.
        PartiallyHoldOpen = 4,
    }
}

vendor_code! {
    /// Command accepted by an access controller.
    pub enum AccessDoorCommand {
        /// Stop the gate.
        Stop = -3,
        /// Close.
        Close = -2,
        /// Lock.
        Lock = -1,
        /// Open.
        Open = 1,
        /// Open and hold.
        HoldOpen = 2,
    }
}

vendor_code! {
    /// Element status reported by the controller.
    pub enum AccessDoorElementInfo {
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

/// Capabilities of an access door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AccessDoorFeature {
    /// Remotely openable.
    Open,
}

/// An access door.
pub type AccessDoor<'a, S> = EntityView<'a, AccessDoors, S>;

impl<S: DataSource> EntityView<'_, AccessDoors, S> {
    /// Returns the supported features.
    #[must_use]
    pub fn supported_features(&self) -> BTreeSet<AccessDoorFeature> {
        let mut features = BTreeSet::new();
        if self.has("accessControllerActionState") {
            features.insert(AccessDoorFeature::Open);
        }
        features
    }

    /// Returns the controller action state.
    #[must_use]
    pub fn action_state(&self) -> Option<AccessDoorState> {
        self.code("accessControllerActionState")
    }

    /// Returns whether the door is open.
    #[must_use]
    pub fn access_state(&self) -> Option<AccessDoorAccessState> {
        self.code("accessState")
    }

    /// Returns the kind of access point.
    #[must_use]
    pub fn access_type(&self) -> Option<AccessDoorAccessType> {
        self.code("accessType")
    }

    /// Returns the gate runtime in percent.
    #[must_use]
    pub fn gate_runtime_level(&self) -> Option<f64> {
        self.f64("gateRuntimeLevel")
    }

    /// Returns the element status.
    #[must_use]
    pub fn element_info(&self) -> Option<AccessDoorElementInfo> {
        self.code("elementInfo")
    }

    /// Sends a door command.
    ///
    /// # Errors
    ///
    /// Returns the data source error.
    pub async fn send_command(&self, command: AccessDoorCommand) -> Result<()> {
        self.send(&command.to_string()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{accessor_with, sent};
    use serde_json::json;

    #[tokio::test]
    async fn front_gate() {
        let (source, accessor) = accessor_with::<AccessDoors>(
            &json!({"accessdoors": {"item0": {"name": "Front gate"}, "item1": {"name": "Cellar"}}}),
            &json!({"accessdoors": {
                "item0": {"sumstate": {"value": "3;0;1;40.00;10"}},
                "item1": {"sumstate": {"value": ";4;0;;0"}}
            }}),
        );
        let doors = accessor.views();
        let gate = &doors[0];

        assert_eq!(gate.action_state(), Some(AccessDoorState::PartiallyOpen));
        assert_eq!(gate.access_state(), Some(AccessDoorAccessState::Open));
        assert_eq!(gate.access_type(), Some(AccessDoorAccessType::MygekkoNetRemoteDoor));
        assert_eq!(gate.gate_runtime_level(), Some(40.0));
        assert_eq!(gate.element_info(), Some(AccessDoorElementInfo::Ok));
        assert_eq!(gate.supported_features(), BTreeSet::from([AccessDoorFeature::Open]));

        assert_eq!(doors[1].element_info(), Some(AccessDoorElementInfo::Alarm));
        assert_eq!(doors[1].access_type(), Some(AccessDoorAccessType::Door));
        assert!(doors[1].supported_features().is_empty());

        gate.send_command(AccessDoorCommand::Stop).await.unwrap();
        gate.send_command(AccessDoorCommand::HoldOpen).await.unwrap();
        assert_eq!(sent(&source), vec!["/accessdoors/item0 -3", "/accessdoors/item0 2"]);
    }
}
