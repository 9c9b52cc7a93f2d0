// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Generic per-domain record store.
//!
//! A [`ValueAccessor`] turns one domain subtree of the two payloads into a
//! queryable map of [`Record`]s keyed by entity id. The domain supplies its
//! field tables through the [`Domain`] trait; everything else is shared.
//!
//! # Update rules
//!
//! - Resources: every `item*`/`group*` id gets a record with its name and the
//!   domain's static resource fields. Ids missing from the new subtree are
//!   removed.
//! - Status: each id's `sumstate.value` is split against the field table for
//!   its id kind and replaces the previous fields. An entry without a
//!   `sumstate` keeps its previous fields. A string with too few fields is
//!   reported and the previous fields are kept.

mod record;

pub use record::{IdKind, Record, decode_sumstate};
pub(crate) use record::scalar_string;

use std::collections::HashSet;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde_json::Value;

use crate::entity::{Entity, EntityView};
use crate::error::{DecodeError, DeviceError, Result};
use crate::protocol::DataSource;
use crate::subscription::PayloadSubscriber;

/// Static description of one payload domain.
pub trait Domain: Send + Sync + 'static {
    /// Top-level payload key, e.g. `blinds`.
    const KEY: &'static str;

    /// Field table for `item*` ids.
    const ITEM_FIELDS: &'static [&'static str];

    /// Field table for `group*` ids, `None` if the domain has no groups.
    const GROUP_FIELDS: Option<&'static [&'static str]> = None;

    /// Fields copied verbatim from the resources payload.
    const RESOURCE_FIELDS: &'static [&'static str] = &[];

    /// Returns the field table for `kind`, `None` if the kind is not part of
    /// this domain.
    #[must_use]
    fn table(kind: IdKind) -> Option<&'static [&'static str]> {
        match kind {
            IdKind::Item => Some(Self::ITEM_FIELDS),
            IdKind::Group => Self::GROUP_FIELDS,
        }
    }
}

/// Record store for one domain.
pub struct ValueAccessor<D, S> {
    source: Arc<S>,
    records: RwLock<IndexMap<String, Record>>,
    _domain: PhantomData<fn() -> D>,
}

impl<D: Domain, S: DataSource> ValueAccessor<D, S> {
    /// Creates an empty accessor writing through `source`.
    #[must_use]
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            records: RwLock::new(IndexMap::new()),
            _domain: PhantomData,
        }
    }

    /// Returns `true` if the id's prefix belongs to this domain.
    #[must_use]
    pub fn recognizes(id: &str) -> bool {
        IdKind::of(id).and_then(D::table).is_some()
    }

    /// Returns the known ids in payload order.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.records.read().keys().cloned().collect()
    }

    /// Returns the number of known entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns `true` until the first notification created a record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Returns a copy of the record for `id`.
    #[must_use]
    pub fn record(&self, id: &str) -> Option<Record> {
        self.records.read().get(id).cloned()
    }

    /// Returns the entity descriptor for `id`.
    #[must_use]
    pub fn entity(&self, id: &str) -> Option<Entity> {
        let records = self.records.read();
        let record = records.get(id)?;
        Some(Entity::new(D::KEY, id, record.name.as_deref()))
    }

    /// Returns the name given by the resources payload for `id`.
    #[must_use]
    pub fn name(&self, id: &str) -> Option<String> {
        self.records.read().get(id)?.name.clone()
    }

    /// Returns one view per known entity, in payload order.
    #[must_use]
    pub fn views(&self) -> Vec<EntityView<'_, D, S>> {
        self.records
            .read()
            .keys()
            .map(|id| EntityView::new(id.clone(), self))
            .collect()
    }

    /// Returns the raw value of `field` for `id`.
    ///
    /// `None` if the id is unknown, the field was never decoded, or the value
    /// is empty.
    #[must_use]
    pub fn get_value(&self, id: &str, field: &str) -> Option<String> {
        self.records
            .read()
            .get(id)
            .and_then(|record| record.get(field))
            .map(str::to_owned)
    }

    /// Returns `true` if `field` holds a non-empty value for `id`.
    #[must_use]
    pub fn has_value(&self, id: &str, field: &str) -> bool {
        self.records
            .read()
            .get(id)
            .is_some_and(|record| record.has(field))
    }

    /// Parses `field` for `id`. Unparseable values read as absent.
    #[must_use]
    pub fn get_parsed<T: FromStr>(&self, id: &str, field: &str) -> Option<T> {
        let raw = self.get_value(id, field)?;
        let parsed = raw.trim().parse().ok();
        if parsed.is_none() {
            tracing::trace!(domain = D::KEY, id, field, raw = %raw, "Ignoring unparseable value");
        }
        parsed
    }

    /// Reads `field` as a decimal number.
    #[must_use]
    pub fn get_f64(&self, id: &str, field: &str) -> Option<f64> {
        self.get_parsed::<f64>(id, field).filter(|v| v.is_finite())
    }

    /// Reads `field` as a vendor code and maps it through `T`.
    ///
    /// Codes are sometimes reported with decimals (`"1.00"`), so the value is
    /// parsed as a number first and must be integral.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    pub fn get_code<T: TryFrom<i64>>(&self, id: &str, field: &str) -> Option<T> {
        let number = self.get_f64(id, field)?;
        if number.fract() != 0.0 || number.abs() > 9.0e15 {
            tracing::trace!(domain = D::KEY, id, field, number, "Ignoring non-integral code");
            return None;
        }
        // Safe: integral and well inside the i64 range
        let code = number as i64;
        match T::try_from(code) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::trace!(domain = D::KEY, id, field, code, "Ignoring unknown code");
                None
            }
        }
    }

    /// Sends `command` to the entity `id`.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::UnknownEntity` if `id` is not in the store, or
    /// the data source error.
    pub async fn write(&self, id: &str, command: &str) -> Result<()> {
        let Some(entity) = self.entity(id) else {
            return Err(DeviceError::UnknownEntity { id: id.to_string() }.into());
        };
        tracing::debug!(domain = D::KEY, id, command, "Writing value");
        self.source.send(entity.resource_path(), command).await
    }

    fn subtree(payload: &Value) -> Option<&serde_json::Map<String, Value>> {
        payload.get(D::KEY).and_then(Value::as_object)
    }
}

impl<D: Domain, S: DataSource> PayloadSubscriber for ValueAccessor<D, S> {
    fn on_resources(&self, resources: &Value) -> Vec<DecodeError> {
        let mut records = self.records.write();
        let mut seen = HashSet::new();

        for (id, entry) in Self::subtree(resources).into_iter().flatten() {
            if !Self::recognizes(id) {
                continue;
            }
            let record = records.entry(id.clone()).or_default();
            record.name = entry.get("name").and_then(Value::as_str).map(str::to_owned);
            for &field in D::RESOURCE_FIELDS {
                match entry.get(field).and_then(record::scalar_string) {
                    Some(value) => {
                        record.extras.insert(field, value);
                    }
                    None => {
                        record.extras.shift_remove(field);
                    }
                }
            }
            seen.insert(id.as_str());
        }

        let before = records.len();
        records.retain(|id, _| seen.contains(id.as_str()));
        if records.len() != before {
            tracing::debug!(domain = D::KEY, removed = before - records.len(), "Pruned stale entities");
        }

        Vec::new()
    }

    fn on_status(&self, status: &Value) -> Vec<DecodeError> {
        let Some(subtree) = Self::subtree(status) else {
            return Vec::new();
        };

        let mut records = self.records.write();
        let mut issues = Vec::new();

        for (id, entry) in subtree {
            let Some(table) = IdKind::of(id).and_then(D::table) else {
                continue;
            };
            let Some(raw) = record::sumstate_value(entry) else {
                continue;
            };
            match decode_sumstate(D::KEY, id, raw, table) {
                Ok(fields) => records.entry(id.clone()).or_default().fields = fields,
                Err(err) => {
                    tracing::warn!(domain = D::KEY, id = %id, error = %err, "Keeping previous state");
                    issues.push(err);
                }
            }
        }

        issues
    }
}
