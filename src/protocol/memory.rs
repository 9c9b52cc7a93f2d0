// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory data source.

use parking_lot::{Mutex, RwLock};

use crate::error::{ApiError, Result};
use crate::protocol::{DataSource, PayloadKind};

/// A command recorded by [`StaticSource::send`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentCommand {
    /// Target resource path, e.g. `/lights/item0`.
    pub resource_path: String,
    /// Command string, e.g. `D50`.
    pub command: String,
}

/// A data source serving fixed payloads.
///
/// Used for demo mode and tests. Writes are not applied to the payloads;
/// they are logged and recorded so callers can inspect them.
///
/// # Examples
///
/// ```
/// use mygekko_lib::protocol::{DataSource, PayloadKind, StaticSource};
///
/// # async fn example() -> mygekko_lib::Result<()> {
/// let source = StaticSource::new(r#"{"lights":{}}"#, r#"{"lights":{}}"#);
/// assert_eq!(source.fetch(PayloadKind::Status).await?, r#"{"lights":{}}"#);
///
/// source.send("/lights/item0", "1").await?;
/// assert_eq!(source.sent_commands()[0].command, "1");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct StaticSource {
    resources: RwLock<String>,
    status: RwLock<String>,
    failures: RwLock<Vec<(PayloadKind, ApiError)>>,
    sent: Mutex<Vec<SentCommand>>,
}

impl StaticSource {
    /// Creates a source serving the given payload bodies.
    #[must_use]
    pub fn new(resources: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            resources: RwLock::new(resources.into()),
            status: RwLock::new(status.into()),
            ..Self::default()
        }
    }

    /// Replaces the body served for `kind`.
    pub fn set_payload(&self, kind: PayloadKind, body: impl Into<String>) {
        *self.slot(kind).write() = body.into();
    }

    /// Makes every later fetch of `kind` fail with `error`.
    pub fn fail_with(&self, kind: PayloadKind, error: ApiError) {
        let mut failures = self.failures.write();
        failures.retain(|(k, _)| *k != kind);
        failures.push((kind, error));
    }

    /// Clears all injected failures.
    pub fn clear_failures(&self) {
        self.failures.write().clear();
    }

    /// Returns the commands sent so far, oldest first.
    #[must_use]
    pub fn sent_commands(&self) -> Vec<SentCommand> {
        self.sent.lock().clone()
    }

    fn slot(&self, kind: PayloadKind) -> &RwLock<String> {
        match kind {
            PayloadKind::Resources => &self.resources,
            PayloadKind::Status => &self.status,
        }
    }
}

impl DataSource for StaticSource {
    async fn fetch(&self, kind: PayloadKind) -> Result<String> {
        if let Some((_, err)) = self.failures.read().iter().find(|(k, _)| *k == kind) {
            return Err((*err).into());
        }
        Ok(self.slot(kind).read().clone())
    }

    async fn send(&self, resource_path: &str, command: &str) -> Result<()> {
        tracing::info!(resource_path = %resource_path, command = %command, "Recording command");
        self.sent.lock().push(SentCommand {
            resource_path: resource_path.to_string(),
            command: command.to_string(),
        });
        Ok(())
    }

    async fn probe(&self) -> Result<u16> {
        Ok(200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn serves_payloads() {
        let source = StaticSource::new("{\"a\":1}", "{\"b\":2}");
        assert_eq!(source.fetch(PayloadKind::Resources).await.unwrap(), "{\"a\":1}");
        assert_eq!(source.fetch(PayloadKind::Status).await.unwrap(), "{\"b\":2}");

        source.set_payload(PayloadKind::Status, "{}");
        assert_eq!(source.fetch(PayloadKind::Status).await.unwrap(), "{}");
    }

    #[tokio::test]
    async fn injected_failure() {
        let source = StaticSource::new("{}", "{}");
        source.fail_with(PayloadKind::Status, ApiError::NotFound);

        assert!(source.fetch(PayloadKind::Resources).await.is_ok());
        assert!(matches!(
            source.fetch(PayloadKind::Status).await,
            Err(Error::Api(ApiError::NotFound))
        ));

        source.clear_failures();
        assert!(source.fetch(PayloadKind::Status).await.is_ok());
    }

    #[tokio::test]
    async fn records_commands_and_probes_ok() {
        let source = StaticSource::default();
        source.send("/blinds/item0", "P50").await.unwrap();
        source.send("/blinds/item0", "0").await.unwrap();

        let sent = source.sent_commands();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].resource_path, "/blinds/item0");
        assert_eq!(sent[0].command, "P50");
        assert_eq!(source.probe().await.unwrap(), 200);
    }
}
