// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Payload storage and change notification.

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use crate::error::{DecodeError, Result};
use crate::protocol::{DataSource, PayloadKind};
use crate::subscription::PayloadSubscriber;

/// Owns the two raw payloads and notifies subscribers when they change.
///
/// `read_data()` is single-flight: concurrent callers are serialized, so the
/// resources/status pair of one call never interleaves with another call.
pub struct DataProvider<S> {
    source: Arc<S>,
    resources: RwLock<Option<Arc<Value>>>,
    status: RwLock<Option<Arc<Value>>>,
    subscribers: RwLock<Vec<Arc<dyn PayloadSubscriber>>>,
    issues: RwLock<Arc<[DecodeError]>>,
    read_lock: tokio::sync::Mutex<()>,
}

impl<S: DataSource> DataProvider<S> {
    /// Creates a provider over `source` with no subscribers and no payloads.
    #[must_use]
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            resources: RwLock::new(None),
            status: RwLock::new(None),
            subscribers: RwLock::new(Vec::new()),
            issues: RwLock::new(Arc::from(Vec::new())),
            read_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Returns the underlying data source.
    #[must_use]
    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// Registers a subscriber for future payload replacements.
    pub fn subscribe(&self, subscriber: Arc<dyn PayloadSubscriber>) {
        self.subscribers.write().push(subscriber);
    }

    /// Returns the number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Fetches resources then status, then stores both and notifies
    /// subscribers, resources first.
    ///
    /// # Errors
    ///
    /// Returns the first fetch or parse failure. On failure nothing is
    /// stored and no subscriber is notified.
    pub async fn read_data(&self) -> Result<()> {
        let _guard = self.read_lock.lock().await;

        tracing::debug!("Reading myGEKKO payloads");

        let resources = self.load(PayloadKind::Resources).await?;
        let status = self.load(PayloadKind::Status).await?;

        let mut issues = self.replace(PayloadKind::Resources, resources);
        issues.extend(self.replace(PayloadKind::Status, status));

        if !issues.is_empty() {
            tracing::warn!(count = issues.len(), "Some entities could not be decoded");
        }
        *self.issues.write() = Arc::from(issues);

        Ok(())
    }

    /// Sends a command for the entity at `resource_path`.
    ///
    /// # Errors
    ///
    /// Propagates the data source error. Nothing is retried.
    pub async fn write_data(&self, resource_path: &str, command: &str) -> Result<()> {
        tracing::debug!(resource_path = %resource_path, command = %command, "Writing myGEKKO value");
        self.source.send(resource_path, command).await
    }

    /// Probes the API and returns the raw HTTP status.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if no response was received.
    pub async fn probe(&self) -> Result<u16> {
        self.source.probe().await
    }

    /// Returns the last stored resources payload.
    #[must_use]
    pub fn resources(&self) -> Option<Arc<Value>> {
        self.resources.read().clone()
    }

    /// Returns the last stored status payload.
    #[must_use]
    pub fn status(&self) -> Option<Arc<Value>> {
        self.status.read().clone()
    }

    /// Returns the entity decode failures of the last notification round.
    #[must_use]
    pub fn decode_issues(&self) -> Arc<[DecodeError]> {
        Arc::clone(&self.issues.read())
    }

    async fn load(&self, kind: PayloadKind) -> Result<Value> {
        let body = self.source.fetch(kind).await?;
        let value: Value = serde_json::from_str(&body).map_err(DecodeError::from)?;
        if !value.is_object() {
            return Err(DecodeError::NotAnObject {
                payload: kind.name(),
            }
            .into());
        }
        Ok(value)
    }

    /// Stores `payload` and notifies every subscriber.
    fn replace(&self, kind: PayloadKind, payload: Value) -> Vec<DecodeError> {
        let payload = Arc::new(payload);
        {
            let mut slot = match kind {
                PayloadKind::Resources => self.resources.write(),
                PayloadKind::Status => self.status.write(),
            };
            *slot = Some(Arc::clone(&payload));
        }

        // Subscribers are called without holding any provider lock.
        let subscribers = self.subscribers.read().clone();
        let mut issues = Vec::new();
        for subscriber in &subscribers {
            issues.extend(match kind {
                PayloadKind::Resources => subscriber.on_resources(&payload),
                PayloadKind::Status => subscriber.on_status(&payload),
            });
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, Error};
    use crate::protocol::StaticSource;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<String>>,
    }

    impl PayloadSubscriber for Recorder {
        fn on_resources(&self, resources: &Value) -> Vec<DecodeError> {
            self.calls.lock().push(format!("resources:{resources}"));
            Vec::new()
        }

        fn on_status(&self, status: &Value) -> Vec<DecodeError> {
            self.calls.lock().push(format!("status:{status}"));
            Vec::new()
        }
    }

    fn provider(resources: &str, status: &str) -> DataProvider<StaticSource> {
        DataProvider::new(Arc::new(StaticSource::new(resources, status)))
    }

    #[tokio::test]
    async fn notifies_resources_before_status() {
        let provider = provider(r#"{"r":1}"#, r#"{"s":2}"#);
        let recorder = Arc::new(Recorder::default());
        provider.subscribe(recorder.clone());

        provider.read_data().await.unwrap();

        assert_eq!(
            *recorder.calls.lock(),
            vec![r#"resources:{"r":1}"#.to_string(), r#"status:{"s":2}"#.to_string()]
        );
        assert!(provider.resources().is_some());
        assert!(provider.status().is_some());
    }

    #[tokio::test]
    async fn duplicate_subscription_is_notified_twice() {
        let provider = provider("{}", "{}");
        let recorder = Arc::new(Recorder::default());
        provider.subscribe(recorder.clone());
        provider.subscribe(recorder.clone());
        assert_eq!(provider.subscriber_count(), 2);

        provider.read_data().await.unwrap();
        assert_eq!(recorder.calls.lock().len(), 4);
    }

    #[tokio::test]
    async fn invalid_json_keeps_previous_payloads() {
        let provider = provider(r#"{"r":1}"#, r#"{"s":1}"#);
        provider.read_data().await.unwrap();

        provider
            .source()
            .set_payload(PayloadKind::Resources, "not json");
        let err = provider.read_data().await.unwrap_err();
        assert!(matches!(err, Error::Decode(DecodeError::Json(_))));
        assert_eq!(*provider.resources().unwrap(), serde_json::json!({"r": 1}));
        assert_eq!(*provider.status().unwrap(), serde_json::json!({"s": 1}));
    }

    #[tokio::test]
    async fn non_object_payload_is_rejected() {
        let provider = provider("{}", "[1, 2]");
        let err = provider.read_data().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Decode(DecodeError::NotAnObject { payload: "status" })
        ));
        assert!(provider.status().is_none());
    }

    #[tokio::test]
    async fn status_failure_skips_all_notifications() {
        let provider = provider("{}", "{}");
        let recorder = Arc::new(Recorder::default());
        provider.subscribe(recorder.clone());
        provider
            .source()
            .fail_with(PayloadKind::Status, ApiError::TooManyRequests);

        let err = provider.read_data().await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::TooManyRequests)));
        assert!(recorder.calls.lock().is_empty());
        assert!(provider.resources().is_none());
        assert!(provider.status().is_none());
    }

    #[tokio::test]
    async fn status_failure_keeps_previous_resources() {
        let provider = provider(r#"{"r":1}"#, r#"{"s":1}"#);
        provider.read_data().await.unwrap();

        provider.source().set_payload(PayloadKind::Resources, r#"{"r":2}"#);
        provider
            .source()
            .fail_with(PayloadKind::Status, ApiError::NotFound);

        let err = provider.read_data().await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::NotFound)));
        assert_eq!(*provider.resources().unwrap(), serde_json::json!({"r": 1}));
        assert_eq!(*provider.status().unwrap(), serde_json::json!({"s": 1}));
    }

    #[tokio::test]
    async fn write_data_delegates_to_source() {
        let provider = provider("{}", "{}");
        provider.write_data("/loads/item1", "2").await.unwrap();

        let sent = provider.source().sent_commands();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].resource_path, "/loads/item1");
        assert_eq!(sent[0].command, "2");
    }
}
