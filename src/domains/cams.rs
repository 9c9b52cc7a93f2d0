// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cameras.

use std::collections::BTreeSet;

use crate::accessor::Domain;
use crate::entity::EntityView;
use crate::protocol::DataSource;

/// The `cams` payload domain.
#[derive(Debug)]
pub struct Cams;

impl Domain for Cams {
    const KEY: &'static str = "cams";
    const ITEM_FIELDS: &'static [&'static str] = &["newRecordsAvailableState"];
    const RESOURCE_FIELDS: &'static [&'static str] = &["imagepath", "streampath"];
}

vendor_code! {
    /// Whether the camera has unseen recordings.
    pub enum CamNewRecordAvailableState {
        /// No new recordings.
        No = 0,
        /// New recordings available.
        Yes = 1,
    }
}

/// Capabilities of a camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CamFeature {
    /// Live stream URL available.
    Stream,
}

/// A camera.
pub type Cam<'a, S> = EntityView<'a, Cams, S>;

impl<S: DataSource> EntityView<'_, Cams, S> {
    /// Returns the supported features.
    #[must_use]
    pub fn supported_features(&self) -> BTreeSet<CamFeature> {
        let mut features = BTreeSet::new();
        if self.has("streampath") {
            features.insert(CamFeature::Stream);
        }
        features
    }

    /// Returns the still image URL.
    #[must_use]
    pub fn image_url(&self) -> Option<String> {
        self.raw_value("imagepath")
    }

    /// Returns the live stream URL.
    #[must_use]
    pub fn stream_url(&self) -> Option<String> {
        self.raw_value("streampath")
    }

    /// Returns whether new recordings are available.
    #[must_use]
    pub fn new_record_available(&self) -> Option<CamNewRecordAvailableState> {
        self.code("newRecordsAvailableState")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::accessor_with;
    use serde_json::json;

    #[test]
    fn urls_and_records() {
        let (_, accessor) = accessor_with::<Cams>(
            &json!({"cams": {
                "item0": {
                    "name": "Entrance",
                    "imagepath": "http://10.0.0.5/snap.jpg",
                    "streampath": "rtsp://10.0.0.5/live"
                },
                "item1": {"name": "Garden", "imagepath": "http://10.0.0.6/snap.jpg", "streampath": ""}
            }}),
            &json!({"cams": {
                "item0": {"sumstate": {"value": "1"}},
                "item1": {"sumstate": {"value": "0;"}}
            }}),
        );
        let cams = accessor.views();

        assert_eq!(cams[0].image_url().as_deref(), Some("http://10.0.0.5/snap.jpg"));
        assert_eq!(cams[0].stream_url().as_deref(), Some("rtsp://10.0.0.5/live"));
        assert_eq!(cams[0].new_record_available(), Some(CamNewRecordAvailableState::Yes));
        assert_eq!(cams[0].supported_features(), BTreeSet::from([CamFeature::Stream]));

        assert_eq!(cams[1].stream_url(), None);
        assert_eq!(cams[1].new_record_available(), Some(CamNewRecordAvailableState::No));
        assert!(cams[1].supported_features().is_empty());
    }
}
