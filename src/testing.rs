// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared helpers for unit tests.

use std::sync::Arc;

use serde_json::Value;

use crate::accessor::{Domain, ValueAccessor};
use crate::protocol::StaticSource;
use crate::subscription::PayloadSubscriber;

/// A recording source and an accessor writing through it.
pub(crate) type Fixture<D> = (Arc<StaticSource>, ValueAccessor<D, StaticSource>);

/// Builds an accessor and feeds it one resources and one status payload.
///
/// Panics if the status payload produced decode issues.
pub(crate) fn accessor_with<D: Domain>(resources: &Value, status: &Value) -> Fixture<D> {
    let source = Arc::new(StaticSource::default());
    let accessor = ValueAccessor::new(Arc::clone(&source));
    accessor.on_resources(resources);
    let issues = accessor.on_status(status);
    assert!(issues.is_empty(), "unexpected decode issues: {issues:?}");
    (source, accessor)
}

/// Returns the commands sent so far as `"<resource_path> <command>"`.
pub(crate) fn sent(source: &StaticSource) -> Vec<String> {
    source
        .sent_commands()
        .into_iter()
        .map(|c| format!("{} {}", c.resource_path, c.command))
        .collect()
}
