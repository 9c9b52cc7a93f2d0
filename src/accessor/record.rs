// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoded per-entity records and the `sumstate` decoder.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::DecodeError;

/// Kind of an entity id, derived from its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    /// A single element, `item<N>`.
    Item,
    /// An aggregate of elements, `group<N>`.
    Group,
}

impl IdKind {
    /// Classifies a raw payload key. Returns `None` for unrecognized keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use mygekko_lib::accessor::IdKind;
    ///
    /// assert_eq!(IdKind::of("item12"), Some(IdKind::Item));
    /// assert_eq!(IdKind::of("group0"), Some(IdKind::Group));
    /// assert_eq!(IdKind::of("sumstate"), None);
    /// ```
    #[must_use]
    pub fn of(id: &str) -> Option<Self> {
        if id.starts_with("item") {
            Some(Self::Item)
        } else if id.starts_with("group") {
            Some(Self::Group)
        } else {
            None
        }
    }
}

/// Decoded state of one entity.
///
/// Every value is kept as the raw string; typed conversion happens in the
/// domain getters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Display name from the resources payload.
    pub name: Option<String>,
    /// Positional fields decoded from the last `sumstate` value.
    pub fields: IndexMap<&'static str, String>,
    /// Static fields copied from the resources payload.
    pub extras: IndexMap<&'static str, String>,
}

impl Record {
    /// Returns a field value, looking at decoded fields first, then at
    /// resource extras. Empty strings read as absent.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .or_else(|| self.extras.get(field))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Returns `true` if `field` holds a non-empty value.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some()
    }
}

/// Splits a `sumstate` string positionally against `table`.
///
/// The string must hold at least `table.len()` fields; extra trailing fields
/// are ignored.
///
/// # Errors
///
/// Returns `DecodeError::FieldCount` if fewer fields are present than the
/// table declares.
///
/// # Examples
///
/// ```
/// use mygekko_lib::accessor::decode_sumstate;
///
/// let fields = decode_sumstate("blinds", "item0", "0;100.00;0.00;0;0;9", &[
///     "currentState", "positionLevel", "rotationLevel", "elementInfo", "rotationRange",
/// ]).unwrap();
/// assert_eq!(fields.len(), 5);
/// assert_eq!(fields["positionLevel"], "100.00");
/// ```
pub fn decode_sumstate(
    domain: &'static str,
    id: &str,
    raw: &str,
    table: &[&'static str],
) -> Result<IndexMap<&'static str, String>, DecodeError> {
    let parts: Vec<&str> = raw.split(';').collect();
    if parts.len() < table.len() {
        return Err(DecodeError::FieldCount {
            domain,
            id: id.to_string(),
            expected: table.len(),
            actual: parts.len(),
        });
    }

    Ok(table
        .iter()
        .zip(parts)
        .map(|(name, value)| (*name, value.to_string()))
        .collect())
}

/// Returns the `sumstate.value` string of a status entry, if any.
pub(crate) fn sumstate_value(entry: &Value) -> Option<&str> {
    entry.get("sumstate")?.get("value")?.as_str()
}

/// Renders a scalar JSON value as the string the accessors store.
pub(crate) fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
