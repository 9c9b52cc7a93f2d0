// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Payload subscription.
//!
//! The [`DataProvider`](crate::provider::DataProvider) keeps a list of
//! [`PayloadSubscriber`]s. Whenever one of the two payloads is replaced, every
//! subscriber is called once for that payload kind, synchronously and in
//! registration order. Resources are always delivered before status within a
//! single read cycle.
//!
//! There is no unsubscribe and no deduplication: subscribing the same
//! accessor twice delivers every payload to it twice.

use serde_json::Value;

use crate::error::DecodeError;

/// Receives payload replacement notifications.
///
/// Implemented by every per-domain accessor. Implementations must not block:
/// they run while `read_data()` is in progress.
pub trait PayloadSubscriber: Send + Sync {
    /// Called after a new resources payload was stored.
    ///
    /// Returns the per-entity decode failures that were skipped.
    fn on_resources(&self, resources: &Value) -> Vec<DecodeError>;

    /// Called after a new status payload was stored.
    ///
    /// Returns the per-entity decode failures that were skipped.
    fn on_status(&self, status: &Value) -> Vec<DecodeError>;
}
