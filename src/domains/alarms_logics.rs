// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Alarm logic values. Read-only.

use crate::accessor::Domain;
use crate::entity::EntityView;
use crate::protocol::DataSource;

/// The `alarms_logics` payload domain.
#[derive(Debug)]
pub struct AlarmsLogics;

impl Domain for AlarmsLogics {
    const KEY: &'static str = "alarms_logics";
    const ITEM_FIELDS: &'static [&'static str] = &["currentValue"];
}

/// An alarm logic.
pub type AlarmsLogic<'a, S> = EntityView<'a, AlarmsLogics, S>;

impl<S: DataSource> EntityView<'_, AlarmsLogics, S> {
    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.f64("currentValue")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::accessor_with;
    use serde_json::json;

    #[test]
    fn current_value() {
        let (_, accessor) = accessor_with::<AlarmsLogics>(
            &json!({"alarms_logics": {"item0": {"name": "Frost"}, "item1": {"name": "Wind"}}}),
            &json!({"alarms_logics": {
                "item0": {"sumstate": {"value": "-3.50"}},
                "item1": {"sumstate": {"value": "n/a"}}
            }}),
        );
        let logics = accessor.views();
        assert_eq!(logics[0].value(), Some(-3.5));
        assert_eq!(logics[1].value(), None);
        assert_eq!(logics[1].raw_value("currentValue").as_deref(), Some("n/a"));
    }
}
