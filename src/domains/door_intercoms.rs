// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Door intercom stations.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDateTime;

use crate::accessor::Domain;
use crate::entity::EntityView;
use crate::error::Result;
use crate::protocol::DataSource;

/// Format of `lastMissedCallDate`, controller local time.
const CALL_DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// The `door_intercom` payload domain.
#[derive(Debug)]
pub struct DoorIntercoms;

impl Domain for DoorIntercoms {
    const KEY: &'static str = "door_intercom";
    const ITEM_FIELDS: &'static [&'static str] = &[
        "soundMode",
        "actionOnRingState",
        "connectionState",
        "missedCallsValue",
        "lastMissedCallDate",
    ];
    const RESOURCE_FIELDS: &'static [&'static str] = &["imagepath", "streampath"];
}

vendor_code! {
    /// Ringer mode.
    pub enum DoorIntercomSoundMode {
        /// Muted.
        Mute = 0,
        /// Ringing.
        Ringing = 1,
    }
}

vendor_code! {
    /// Whether the ring action is armed.
    pub enum DoorIntercomActionOnRingState {
        /// Disarmed.
        Off = 0,
        /// Armed.
        On = 1,
    }
}

vendor_code! {
    /// VoIP connection state.
    pub enum DoorIntercomConnectionState {
        /// Processing error.
        ErrorProcessing = -6,
        /// Authorization failed.
        ErrorAuthorization = -5,
        /// VoIP is disabled.
        VoipNotActive = -4,
        /// Favorite check failed.
        ErrorFavCheck = -3,
        /// Provisioning failed.
        ErrorProvisioning = -2,
        /// Connection failed.
        ErrorConnection = -1,
        /// Not configured.
        NotSetUp = 0,
        /// Connected.
        Ok = 1,
    }
}

/// Command accepted by a door intercom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoorIntercomCommand {
    /// Open the door.
    Open,
    /// Enable the ringer.
    Ringing,
    /// Mute the ringer.
    Mute,
    /// Arm the ring action.
    ActionOn,
    /// Disarm the ring action.
    ActionOff,
}

impl DoorIntercomCommand {
    /// Returns the wire encoding.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "O",
            Self::Ringing => "M1",
            Self::Mute => "M0",
            Self::ActionOn => "A1",
            Self::ActionOff => "A0",
        }
    }
}

impl fmt::Display for DoorIntercomCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capabilities of a door intercom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DoorIntercomFeature {
    /// Live stream URL available.
    Stream,
}

/// A door intercom station.
pub type DoorIntercom<'a, S> = EntityView<'a, DoorIntercoms, S>;

impl<S: DataSource> EntityView<'_, DoorIntercoms, S> {
    /// Returns the supported features.
    #[must_use]
    pub fn supported_features(&self) -> BTreeSet<DoorIntercomFeature> {
        let mut features = BTreeSet::new();
        if self.has("streampath") {
            features.insert(DoorIntercomFeature::Stream);
        }
        features
    }

    /// Returns the camera still image URL.
    #[must_use]
    pub fn image_url(&self) -> Option<String> {
        self.raw_value("imagepath")
    }

    /// Returns the camera stream URL.
    #[must_use]
    pub fn stream_url(&self) -> Option<String> {
        self.raw_value("streampath")
    }

    /// Returns the ringer mode.
    #[must_use]
    pub fn sound_mode(&self) -> Option<DoorIntercomSoundMode> {
        self.code("soundMode")
    }

    /// Returns the ring action state.
    #[must_use]
    pub fn action_on_ring_state(&self) -> Option<DoorIntercomActionOnRingState> {
        self.code("actionOnRingState")
    }

    /// Returns the connection state.
    #[must_use]
    pub fn connection_state(&self) -> Option<DoorIntercomConnectionState> {
        self.code("connectionState")
    }

    /// Returns the number of missed calls.
    #[must_use]
    pub fn missed_calls(&self) -> Option<u32> {
        self.code("missedCallsValue")
    }

    /// Returns the time of the last missed call.
    #[must_use]
    pub fn last_missed_call_date(&self) -> Option<NaiveDateTime> {
        let raw = self.raw_value("lastMissedCallDate")?;
        match NaiveDateTime::parse_from_str(raw.trim(), CALL_DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(err) => {
                tracing::trace!(id = self.id(), raw = %raw, error = %err, "Ignoring unparseable call date");
                None
            }
        }
    }

    /// Sends an intercom command.
    ///
    /// # Errors
    ///
    /// Returns the data source error.
    pub async fn send_command(&self, command: DoorIntercomCommand) -> Result<()> {
        self.send(command.as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{accessor_with, sent};
    use chrono::NaiveDate;
    use serde_json::json;

    #[tokio::test]
    async fn front_door_station() {
        let (source, accessor) = accessor_with::<DoorIntercoms>(
            &json!({"door_intercom": {
                "item0": {"name": "Front door", "imagepath": "http://10.0.0.9/img", "streampath": "rtsp://10.0.0.9"},
                "item1": {"name": "Side door"}
            }}),
            &json!({"door_intercom": {
                "item0": {"sumstate": {"value": "1;0;1;3;17.10.2026 18:42:05"}},
                "item1": {"sumstate": {"value": "0;1;-5;0;"}}
            }}),
        );
        let stations = accessor.views();
        let front = &stations[0];

        assert_eq!(front.sound_mode(), Some(DoorIntercomSoundMode::Ringing));
        assert_eq!(front.action_on_ring_state(), Some(DoorIntercomActionOnRingState::Off));
        assert_eq!(front.connection_state(), Some(DoorIntercomConnectionState::Ok));
        assert_eq!(front.missed_calls(), Some(3));
        assert_eq!(
            front.last_missed_call_date(),
            NaiveDate::from_ymd_opt(2026, 10, 17).and_then(|d| d.and_hms_opt(18, 42, 5))
        );
        assert_eq!(front.image_url().as_deref(), Some("http://10.0.0.9/img"));
        assert_eq!(front.supported_features(), BTreeSet::from([DoorIntercomFeature::Stream]));

        let side = &stations[1];
        assert_eq!(
            side.connection_state(),
            Some(DoorIntercomConnectionState::ErrorAuthorization)
        );
        assert_eq!(side.missed_calls(), Some(0));
        assert_eq!(side.last_missed_call_date(), None);
        assert_eq!(side.stream_url(), None);
        assert!(side.supported_features().is_empty());

        front.send_command(DoorIntercomCommand::Open).await.unwrap();
        front.send_command(DoorIntercomCommand::Mute).await.unwrap();
        front.send_command(DoorIntercomCommand::ActionOn).await.unwrap();
        assert_eq!(
            sent(&source),
            vec!["/door_intercom/item0 O", "/door_intercom/item0 M0", "/door_intercom/item0 A1"]
        );
    }

    #[test]
    fn malformed_call_date_is_absent() {
        let (_, accessor) = accessor_with::<DoorIntercoms>(
            &json!({"door_intercom": {"item0": {"name": "Door"}}}),
            &json!({"door_intercom": {"item0": {"sumstate": {"value": "1;1;1;1;2026-10-17"}}}}),
        );
        assert_eq!(accessor.views()[0].last_missed_call_date(), None);
    }
}
