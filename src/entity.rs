// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity identity and read-through views.

use std::fmt;

use serde::Serialize;

use crate::accessor::{Domain, IdKind, ValueAccessor};
use crate::error::{DeviceError, Result};
use crate::protocol::DataSource;

/// Identity of one myGEKKO element.
///
/// # Examples
///
/// ```
/// use mygekko_lib::Entity;
///
/// let entity = Entity::new("blinds", "item0", Some("Terrace"));
/// assert_eq!(entity.name(), "Terrace");
/// assert_eq!(entity.resource_path(), "/blinds/item0");
///
/// // Without a name the id is used
/// assert_eq!(Entity::new("blinds", "item1", None).name(), "item1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entity {
    id: String,
    name: String,
    resource_path: String,
}

impl Entity {
    /// Creates an entity of `domain`.
    #[must_use]
    pub fn new(domain: &str, id: &str, name: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            name: name.unwrap_or(id).to_string(),
            resource_path: format!("/{domain}/{id}"),
        }
    }

    /// Returns the raw id, e.g. `item3`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the write target, `/<domain>/<id>`.
    #[must_use]
    pub fn resource_path(&self) -> &str {
        &self.resource_path
    }

    /// Returns `true` for `group*` ids.
    #[must_use]
    pub fn is_group(&self) -> bool {
        IdKind::of(&self.id) == Some(IdKind::Group)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// A view of one entity bound to its accessor.
///
/// Holds only the entity id: every getter, the name included, reads the
/// accessor's current record, so a view always reflects the latest decoded
/// payload. Domain modules add typed getters and setters through inherent
/// impls on the aliases ([`Blind`](crate::domains::Blind),
/// [`Light`](crate::domains::Light), ...).
pub struct EntityView<'a, D, S> {
    id: String,
    accessor: &'a ValueAccessor<D, S>,
}

impl<'a, D: Domain, S: DataSource> EntityView<'a, D, S> {
    pub(crate) fn new(id: String, accessor: &'a ValueAccessor<D, S>) -> Self {
        Self { id, accessor }
    }

    /// Returns the entity identity as currently known.
    #[must_use]
    pub fn entity(&self) -> Entity {
        self.accessor
            .entity(&self.id)
            .unwrap_or_else(|| Entity::new(D::KEY, &self.id, None))
    }

    /// Returns the raw id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the current display name, the id if none is known.
    #[must_use]
    pub fn name(&self) -> String {
        self.accessor
            .name(&self.id)
            .unwrap_or_else(|| self.id.clone())
    }

    /// Returns the write target path.
    #[must_use]
    pub fn resource_path(&self) -> String {
        format!("/{}/{}", D::KEY, self.id)
    }

    /// Returns `true` for `group*` ids.
    #[must_use]
    pub fn is_group(&self) -> bool {
        IdKind::of(&self.id) == Some(IdKind::Group)
    }

    /// Returns the raw value of `field`, `None` if absent or empty.
    #[must_use]
    pub fn raw_value(&self, field: &str) -> Option<String> {
        self.accessor.get_value(self.id(), field)
    }

    pub(crate) fn has(&self, field: &str) -> bool {
        self.accessor.has_value(self.id(), field)
    }

    pub(crate) fn f64(&self, field: &str) -> Option<f64> {
        self.accessor.get_f64(self.id(), field)
    }

    pub(crate) fn code<T: TryFrom<i64>>(&self, field: &str) -> Option<T> {
        self.accessor.get_code(self.id(), field)
    }

    pub(crate) async fn send(&self, command: &str) -> Result<()> {
        self.accessor.write(self.id(), command).await
    }

    /// Fails for group ids; used to guard analog writes.
    pub(crate) fn require_item(&self, feature: &'static str) -> Result<()> {
        if self.is_group() {
            return Err(DeviceError::UnsupportedFeature {
                id: self.id().to_string(),
                feature,
            }
            .into());
        }
        Ok(())
    }
}

impl<D, S> fmt::Debug for EntityView<'_, D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityView")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_detection() {
        assert!(Entity::new("lights", "group2", None).is_group());
        assert!(!Entity::new("lights", "item2", None).is_group());
    }

    #[test]
    fn display() {
        let entity = Entity::new("loads", "item4", Some("Pump"));
        assert_eq!(entity.to_string(), "Pump (item4)");
    }
}
