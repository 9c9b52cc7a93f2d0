// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the myGEKKO REST API.

use std::time::Duration;

use reqwest::Client;

use crate::error::{ApiError, ProtocolError, Result};
use crate::protocol::{DataSource, PayloadKind};

// ============================================================================
// HttpConfig
// ============================================================================

/// Authentication parameters appended to every request.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthMode {
    /// Access through the myGEKKO cloud relay (query API).
    Cloud {
        /// myGEKKO account user name.
        username: String,
        /// API key generated in the myGEKKO portal.
        key: String,
        /// Identifier of the controller behind the relay.
        gekko_id: String,
    },
    /// Direct access to a controller on the local network.
    Local {
        /// Controller user name.
        username: String,
        /// Controller password.
        password: String,
    },
}

impl AuthMode {
    /// Returns the query parameters for this mode, in request order.
    fn query_params(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Cloud {
                username,
                key,
                gekko_id,
            } => vec![
                ("username", username),
                ("key", key),
                ("gekkoid", gekko_id),
            ],
            Self::Local { username, password } => {
                vec![("username", username), ("password", password)]
            }
        }
    }
}

// Secrets stay out of logs and panic messages.
impl std::fmt::Debug for AuthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cloud {
                username, gekko_id, ..
            } => f
                .debug_struct("Cloud")
                .field("username", username)
                .field("key", &"***")
                .field("gekko_id", gekko_id)
                .finish(),
            Self::Local { username, .. } => f
                .debug_struct("Local")
                .field("username", username)
                .field("password", &"***")
                .finish(),
        }
    }
}

/// Configuration for the HTTP transport.
///
/// # Examples
///
/// ```
/// use mygekko_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Cloud relay
/// let config = HttpConfig::cloud("user@example.com", "api-key", "K999-7UOZ-8ZYZ-6TH3");
/// assert_eq!(config.base_url(), "https://live.my-gekko.com");
///
/// // Controller on the local network
/// let config = HttpConfig::local("192.168.1.50", "admin", "secret")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "http://192.168.1.50");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    base_url: String,
    auth: AuthMode,
    timeout: Duration,
}

impl HttpConfig {
    /// Base URL of the myGEKKO cloud relay.
    pub const CLOUD_BASE_URL: &'static str = "https://live.my-gekko.com";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for the cloud relay.
    #[must_use]
    pub fn cloud(
        username: impl Into<String>,
        key: impl Into<String>,
        gekko_id: impl Into<String>,
    ) -> Self {
        Self {
            base_url: Self::CLOUD_BASE_URL.to_string(),
            auth: AuthMode::Cloud {
                username: username.into(),
                key: key.into(),
                gekko_id: gekko_id.into(),
            },
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Creates a configuration for a controller on the local network.
    ///
    /// `host` may carry a scheme and port; plain HTTP is assumed otherwise.
    #[must_use]
    pub fn local(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: normalize_base_url(&host.into()),
            auth: AuthMode::Local {
                username: username.into(),
                password: password.into(),
            },
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the base URL, e.g. to point at a proxy or a test server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(&base_url.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the authentication mode.
    #[must_use]
    pub fn auth(&self) -> &AuthMode {
        &self.auth
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` for an empty base URL and
    /// `ProtocolError::Http` if the HTTP client cannot be created.
    pub fn into_client(self) -> std::result::Result<HttpClient, ProtocolError> {
        if self.base_url.is_empty() {
            return Err(ProtocolError::InvalidAddress(
                "base URL is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url: self.base_url,
            client,
            auth: self.auth,
            timeout: self.timeout,
        })
    }
}

fn normalize_base_url(host: &str) -> String {
    let host = host.trim_end_matches('/');
    if host.is_empty() || host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{host}")
    }
}

// ============================================================================
// HttpClient
// ============================================================================

/// HTTP client for the myGEKKO API.
///
/// Reads `GET /api/v1/var` and `GET /api/v1/var/status`, and writes through
/// `GET /api/v1/var/<domain>/<id>/scmd/set?value=<command>`. The API reports
/// `text/plain` for its JSON bodies, so bodies are always read as text.
///
/// # Examples
///
/// ```no_run
/// use mygekko_lib::protocol::{DataSource, HttpConfig, PayloadKind};
///
/// # async fn example() -> mygekko_lib::Result<()> {
/// let client = HttpConfig::local("192.168.1.50", "admin", "secret").into_client()?;
/// let body = client.fetch(PayloadKind::Status).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    auth: AuthMode,
    timeout: Duration,
}

impl HttpClient {
    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the request URL for `path` with the auth parameters and an
    /// optional command value.
    fn build_url(&self, path: &str, value: Option<&str>) -> String {
        let mut url = format!("{}{path}", self.base_url);
        let mut separator = '?';
        let value = value.map(|value| ("value", value));

        for (name, param) in self.auth.query_params().into_iter().chain(value) {
            url.push(separator);
            url.push_str(name);
            url.push('=');
            url.push_str(&urlencoding::encode(param));
            separator = '&';
        }
        url
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    fn transport_error(&self, err: reqwest::Error) -> ProtocolError {
        if err.is_timeout() {
            ProtocolError::Timeout(self.timeout_ms())
        } else {
            ProtocolError::Http(err)
        }
    }

    /// Performs a GET and returns the status code with the body.
    async fn get(&self, path: &str, value: Option<&str>) -> Result<(u16, String)> {
        let url = self.build_url(path, value);

        tracing::debug!(path = %path, value = ?value, "Sending myGEKKO request");

        let request = async {
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| self.transport_error(e))?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(|e| self.transport_error(e))?;
            Ok::<_, ProtocolError>((status, body))
        };

        let (status, body) = tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| ProtocolError::Timeout(self.timeout_ms()))??;

        tracing::debug!(path = %path, status, len = body.len(), "Received myGEKKO response");

        Ok((status, body))
    }

    async fn get_checked(&self, path: &str, value: Option<&str>) -> Result<String> {
        let (status, body) = self.get(path, value).await?;
        if let Some(err) = ApiError::from_status(status) {
            tracing::warn!(path = %path, status, "myGEKKO API returned an error status");
            return Err(err.into());
        }
        Ok(body)
    }
}

impl DataSource for HttpClient {
    async fn fetch(&self, kind: PayloadKind) -> Result<String> {
        self.get_checked(kind.path(), None).await
    }

    async fn send(&self, resource_path: &str, command: &str) -> Result<()> {
        let path = format!("{}{resource_path}/scmd/set", PayloadKind::Resources.path());
        self.get_checked(&path, Some(command)).await.map(|_| ())
    }

    async fn probe(&self) -> Result<u16> {
        let (status, _) = self.get(PayloadKind::Resources.path(), None).await?;
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cloud_client() -> HttpClient {
        HttpConfig::cloud("user", "k3y", "K999-1")
            .into_client()
            .unwrap()
    }

    #[test]
    fn cloud_defaults() {
        let config = HttpConfig::cloud("user", "key", "id");
        assert_eq!(config.base_url(), "https://live.my-gekko.com");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(matches!(config.auth(), AuthMode::Cloud { .. }));
    }

    #[test]
    fn local_base_url() {
        assert_eq!(
            HttpConfig::local("192.168.1.50", "u", "p").base_url(),
            "http://192.168.1.50"
        );
        assert_eq!(
            HttpConfig::local("https://gekko.lan:8443/", "u", "p").base_url(),
            "https://gekko.lan:8443"
        );
    }

    #[test]
    fn cloud_payload_urls() {
        let client = cloud_client();
        assert_eq!(
            client.build_url(PayloadKind::Resources.path(), None),
            "https://live.my-gekko.com/api/v1/var?username=user&key=k3y&gekkoid=K999-1"
        );
        assert_eq!(
            client.build_url(PayloadKind::Status.path(), None),
            "https://live.my-gekko.com/api/v1/var/status?username=user&key=k3y&gekkoid=K999-1"
        );
    }

    #[test]
    fn local_write_url() {
        let client = HttpConfig::local("10.0.0.2", "admin", "p@ss word")
            .into_client()
            .unwrap();
        assert_eq!(
            client.build_url("/api/v1/var/blinds/item0/scmd/set", Some("P50")),
            "http://10.0.0.2/api/v1/var/blinds/item0/scmd/set?username=admin&password=p%40ss%20word&value=P50"
        );
    }

    #[test]
    fn command_value_is_encoded() {
        let client = cloud_client();
        let url = client.build_url("/x", Some("-1"));
        assert!(url.ends_with("&value=-1"));
    }

    #[test]
    fn debug_redacts_secrets() {
        let config = HttpConfig::cloud("user", "super-secret", "id");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));

        let config = HttpConfig::local("host", "admin", "hunter2");
        assert!(!format!("{config:?}").contains("hunter2"));
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let result = HttpConfig::cloud("u", "k", "g").with_base_url("").into_client();
        assert!(matches!(result, Err(ProtocolError::InvalidAddress(_))));
    }
}
