// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Blinds and shutters.

use std::collections::BTreeSet;

use crate::accessor::Domain;
use crate::entity::EntityView;
use crate::error::Result;
use crate::protocol::DataSource;
use crate::types::Percentage;

/// The `blinds` payload domain.
#[derive(Debug)]
pub struct Blinds;

impl Domain for Blinds {
    const KEY: &'static str = "blinds";
    const ITEM_FIELDS: &'static [&'static str] = &[
        "currentState",
        "positionLevel",
        "rotationLevel",
        "elementInfo",
        "rotationRange",
    ];
    const GROUP_FIELDS: Option<&'static [&'static str]> = Some(&["currentState"]);
}

vendor_code! {
    /// Movement state of a blind.
    pub enum BlindState {
        /// Moving down while held.
        HoldDown = -2,
        /// Moving down.
        Down = -1,
        /// Stopped.
        Stop = 0,
        /// Moving up.
        Up = 1,
        /// Moving up while held.
        HoldUp = 2,
    }
}

vendor_code! {
    /// Element status reported by the controller.
    pub enum BlindElementInfo {
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

/// Capabilities of a blind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlindFeature {
    /// Open, close and stop.
    OpenCloseStop,
    /// Absolute position.
    SetPosition,
    /// Slat tilt.
    SetTiltPosition,
    /// Open and close only, for groups.
    OpenClose,
}

/// A blind or blind group.
pub type Blind<'a, S> = EntityView<'a, Blinds, S>;

impl<S: DataSource> EntityView<'_, Blinds, S> {
    /// Returns the supported features.
    ///
    /// Groups only ever support [`BlindFeature::OpenClose`]. Tilt requires
    /// both a tilt level and a non-zero tilt range.
    #[must_use]
    pub fn supported_features(&self) -> BTreeSet<BlindFeature> {
        let mut features = BTreeSet::new();
        if self.is_group() {
            features.insert(BlindFeature::OpenClose);
            return features;
        }
        if self.has("currentState") {
            features.insert(BlindFeature::OpenCloseStop);
        }
        if self.has("positionLevel") {
            features.insert(BlindFeature::SetPosition);
        }
        if self.has("rotationLevel") && self.f64("rotationRange").is_some_and(|r| r != 0.0) {
            features.insert(BlindFeature::SetTiltPosition);
        }
        features
    }

    /// Returns the movement state.
    #[must_use]
    pub fn state(&self) -> Option<BlindState> {
        self.code("currentState")
    }

    /// Returns the position in percent.
    #[must_use]
    pub fn position(&self) -> Option<f64> {
        self.f64("positionLevel")
    }

    /// Returns the slat tilt in percent.
    #[must_use]
    pub fn tilt_position(&self) -> Option<f64> {
        self.f64("rotationLevel")
    }

    /// Returns the element status.
    #[must_use]
    pub fn element_info(&self) -> Option<BlindElementInfo> {
        self.code("elementInfo")
    }

    /// Starts or stops a movement.
    ///
    /// # Errors
    ///
    /// Returns the data source error.
    pub async fn set_state(&self, state: BlindState) -> Result<()> {
        self.send(&state.to_string()).await
    }

    /// Moves to `position` percent (`0` to `100` inclusive).
    ///
    /// # Errors
    ///
    /// Returns `ValueError` for an out-of-range position and
    /// `DeviceError::UnsupportedFeature` for groups; no request is sent in
    /// either case.
    pub async fn set_position(&self, position: f64) -> Result<()> {
        self.require_item("set position")?;
        let position = Percentage::new(position)?;
        self.send(&format!("P{position}")).await
    }

    /// Tilts the slats to `position` percent (`0` to `100` inclusive).
    ///
    /// # Errors
    ///
    /// Same as [`set_position`](Self::set_position).
    pub async fn set_tilt_position(&self, position: f64) -> Result<()> {
        self.require_item("set tilt position")?;
        let position = Percentage::new(position)?;
        self.send(&format!("S{position}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DeviceError, Error, ValueError};
    use crate::testing::{Fixture, accessor_with, sent};
    use serde_json::json;

    fn fixture() -> Fixture<Blinds> {
        accessor_with(
            &json!({"blinds": {
                "item0": {"name": "Terrace"},
                "item1": {"name": "Kitchen"},
                "group0": {"name": "All blinds"}
            }}),
            &json!({"blinds": {
                "item0": {"sumstate": {"value": "0;100.00;0.00;0;0"}},
                "item1": {"sumstate": {"value": "-1;42.00;30.00;3;90;"}},
                "group0": {"sumstate": {"value": "1"}}
            }}),
        )
    }

    #[test]
    fn terrace_blind() {
        let (_, accessor) = fixture();
        let blinds = accessor.views();
        let blind = &blinds[0];

        assert_eq!(blind.name(), "Terrace");
        assert_eq!(blind.position(), Some(100.0));
        assert_eq!(blind.state(), Some(BlindState::Stop));
        assert_eq!(blind.element_info(), Some(BlindElementInfo::Ok));
        assert_eq!(
            blind.supported_features(),
            BTreeSet::from([BlindFeature::OpenCloseStop, BlindFeature::SetPosition])
        );
    }

    #[test]
    fn tilt_requires_range() {
        let (_, accessor) = fixture();
        let blinds = accessor.views();
        let blind = &blinds[1];

        assert_eq!(blind.state(), Some(BlindState::Down));
        assert_eq!(blind.tilt_position(), Some(30.0));
        assert_eq!(blind.element_info(), Some(BlindElementInfo::Locked));
        assert!(blind.supported_features().contains(&BlindFeature::SetTiltPosition));
    }

    #[test]
    fn group_features_are_limited() {
        let (_, accessor) = fixture();
        let blinds = accessor.views();
        let group = &blinds[2];

        assert!(group.is_group());
        assert_eq!(group.state(), Some(BlindState::Up));
        assert_eq!(group.position(), None);
        assert_eq!(
            group.supported_features(),
            BTreeSet::from([BlindFeature::OpenClose])
        );
    }

    #[test]
    fn features_are_stable() {
        let (_, accessor) = fixture();
        for blind in accessor.views() {
            assert_eq!(blind.supported_features(), blind.supported_features());
        }
    }

    #[tokio::test]
    async fn command_encoding() {
        let (source, accessor) = fixture();
        let blinds = accessor.views();

        blinds[0].set_position(50.0).await.unwrap();
        blinds[0].set_position(12.5).await.unwrap();
        blinds[1].set_tilt_position(0.0).await.unwrap();
        blinds[1].set_state(BlindState::HoldDown).await.unwrap();
        blinds[2].set_state(BlindState::Stop).await.unwrap();

        assert_eq!(
            sent(&source),
            vec![
                "/blinds/item0 P50",
                "/blinds/item0 P12.5",
                "/blinds/item1 S0",
                "/blinds/item1 -2",
                "/blinds/group0 0",
            ]
        );
    }

    #[tokio::test]
    async fn rejected_writes_send_nothing() {
        let (source, accessor) = fixture();
        let blinds = accessor.views();

        assert!(blinds[0].set_position(100.0).await.is_ok());
        assert!(matches!(
            blinds[0].set_position(100.5).await,
            Err(Error::Value(ValueError::OutOfRange { .. }))
        ));
        assert!(blinds[0].set_tilt_position(-0.1).await.is_err());
        assert!(matches!(
            blinds[2].set_position(10.0).await,
            Err(Error::Device(DeviceError::UnsupportedFeature { .. }))
        ));

        assert_eq!(source.sent_commands().len(), 1);
    }
}
