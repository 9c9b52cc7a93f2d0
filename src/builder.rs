// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client builder.

use std::sync::Arc;
use std::time::Duration;

use crate::client::ApiClient;
use crate::error::{Error, ProtocolError, Result};
use crate::protocol::{HttpClient, HttpConfig, StaticSource};

impl ApiClient<HttpClient> {
    /// Returns a builder for an HTTP client.
    #[must_use]
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }
}

/// Builder for [`ApiClient`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use mygekko_lib::ApiClient;
///
/// let client = ApiClient::builder()
///     .local("192.168.1.20", "admin", "secret")
///     .with_timeout(Duration::from_secs(3))
///     .build()
///     .unwrap();
/// assert_eq!(client.source().base_url(), "http://192.168.1.20");
/// ```
#[derive(Debug, Default)]
pub struct ApiClientBuilder {
    config: Option<HttpConfig>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    /// Connects through the myGEKKO cloud relay.
    #[must_use]
    pub fn cloud(
        mut self,
        username: impl Into<String>,
        key: impl Into<String>,
        gekko_id: impl Into<String>,
    ) -> Self {
        self.config = Some(HttpConfig::cloud(username, key, gekko_id));
        self
    }

    /// Connects to a controller on the local network.
    #[must_use]
    pub fn local(
        mut self,
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.config = Some(HttpConfig::local(host, username, password));
        self
    }

    /// Uses a fully prepared configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: HttpConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Overrides the base URL of the connection.
    ///
    /// Applied at [`build`](Self::build), so it may be called in any order.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Overrides the request timeout of the connection.
    ///
    /// Applied at [`build`](Self::build), so it may be called in any order.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds an HTTP client. No request is made.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` if no connection was
    /// configured or the base URL is empty, and `ProtocolError::Http` if the
    /// HTTP client cannot be created.
    pub fn build(self) -> Result<ApiClient<HttpClient>> {
        let mut config = self.config.ok_or_else(|| {
            ProtocolError::InvalidAddress("no cloud or local connection configured".to_string())
        })?;
        if let Some(base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        let client = config.into_client().map_err(Error::Protocol)?;
        Ok(ApiClient::with_source(Arc::new(client)))
    }

    /// Builds a client serving fixed payloads instead of the network.
    ///
    /// Any connection settings are ignored.
    #[must_use]
    pub fn demo(
        self,
        resources: impl Into<String>,
        status: impl Into<String>,
    ) -> ApiClient<StaticSource> {
        ApiClient::demo(resources, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_connection() {
        let err = ApiClient::builder().build().unwrap_err();
        assert!(matches!(err, Error::Protocol(ProtocolError::InvalidAddress(_))));
    }

    #[test]
    fn builder_overrides() {
        let client = ApiClient::builder()
            .cloud("user", "key", "K1")
            .with_base_url("http://127.0.0.1:9000/")
            .build()
            .unwrap();
        assert_eq!(client.source().base_url(), "http://127.0.0.1:9000");
    }

    #[test]
    fn overrides_before_connection_apply() {
        let client = ApiClient::builder()
            .with_base_url("http://127.0.0.1:9001")
            .with_timeout(Duration::from_millis(250))
            .local("192.168.1.20", "admin", "secret")
            .build()
            .unwrap();
        assert_eq!(client.source().base_url(), "http://127.0.0.1:9001");
        assert_eq!(client.source().timeout(), Duration::from_millis(250));
    }
}
