// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Data sources for the myGEKKO API.
//!
//! A [`DataSource`] fetches the two JSON payloads and forwards write commands.
//! Two implementations are provided:
//!
//! - [`HttpClient`]: the myGEKKO REST API, either through the cloud relay or a
//!   controller on the local network
//! - [`StaticSource`]: fixed in-memory payloads, used for demo mode and tests

#[cfg(feature = "http")]
mod http;
mod memory;

#[cfg(feature = "http")]
pub use http::{AuthMode, HttpClient, HttpConfig};
pub use memory::{SentCommand, StaticSource};

use crate::error::Result;

/// The two payloads served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    /// The static resource catalog (names, stream paths, ...).
    Resources,
    /// The live status feed carrying the `sumstate` strings.
    Status,
}

impl PayloadKind {
    /// Returns the API path serving this payload.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Resources => "/api/v1/var",
            Self::Status => "/api/v1/var/status",
        }
    }

    /// Returns a short name for logs and errors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Resources => "resources",
            Self::Status => "status",
        }
    }
}

/// Trait for transports that can read payloads and send commands.
#[allow(async_fn_in_trait)]
pub trait DataSource: Send + Sync {
    /// Fetches one payload and returns its raw body.
    ///
    /// # Errors
    ///
    /// Returns `Error::Api` for a non-200 status and `Error::Protocol` if the
    /// request could not complete.
    async fn fetch(&self, kind: PayloadKind) -> Result<String>;

    /// Sends a command string to the entity at `resource_path`
    /// (e.g. `/blinds/item0`).
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`fetch`](Self::fetch). Nothing is retried.
    async fn send(&self, resource_path: &str, command: &str) -> Result<()>;

    /// Requests the resource catalog and returns the raw HTTP status.
    ///
    /// A non-200 status is returned as a value, not an error.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if no response was received.
    async fn probe(&self) -> Result<u16>;
}
