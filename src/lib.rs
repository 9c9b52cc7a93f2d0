// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `myGEKKO` Lib - A Rust client for the myGEKKO home automation REST API.
//!
//! The library reads the controller's two JSON payloads (the resource
//! catalog and the live status feed), decodes the per-entity `sumstate`
//! strings into typed values, and sends write commands back.
//!
//! # Supported Domains
//!
//! - **Blinds**: position, tilt, movement state (items and groups)
//! - **Lights**: on/off, brightness, RGB color (items and groups)
//! - **Thermostats**: room temperature, set point, working mode
//! - **Vents**: fan level, bypass, cooling, air sensors
//! - **Loads, actions**: switching
//! - **Hot water systems**: state and set point
//! - **Access doors, door intercoms, cams**: commands, stream URLs
//! - **Read-only**: alarm logics, energy costs, network and weather globals
//!
//! # Quick Start
//!
//! ## Cloud Connection
//!
//! ```no_run
//! use mygekko_lib::ApiClient;
//! use mygekko_lib::domains::BlindFeature;
//!
//! #[tokio::main]
//! async fn main() -> mygekko_lib::Result<()> {
//!     let client = ApiClient::builder()
//!         .cloud("user@example.com", "api-key", "K999-7UOZ-8ZYZ-6TH3")
//!         .build()?;
//!
//!     // Returns the raw HTTP status, 200 when the credentials are accepted
//!     if client.try_connect().await? != 200 {
//!         return Ok(());
//!     }
//!
//!     client.read_data().await?;
//!
//!     for blind in client.get_blinds() {
//!         if blind.supported_features().contains(&BlindFeature::SetPosition) {
//!             blind.set_position(50.0).await?;
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Local Connection
//!
//! ```no_run
//! use mygekko_lib::ApiClient;
//!
//! #[tokio::main]
//! async fn main() -> mygekko_lib::Result<()> {
//!     let client = ApiClient::builder()
//!         .local("192.168.1.20", "admin", "secret")
//!         .build()?;
//!
//!     client.read_data().await?;
//!     for light in client.get_lights() {
//!         println!("{}: {:?}", light.name(), light.brightness());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Demo Mode
//!
//! A client can serve fixed payloads instead of talking to a controller.
//! Writes are recorded instead of sent.
//!
//! ```
//! use mygekko_lib::ApiClient;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> mygekko_lib::Result<()> {
//! let client = ApiClient::demo(
//!     r#"{"blinds": {"item0": {"name": "Terrace"}}}"#,
//!     r#"{"blinds": {"item0": {"sumstate": {"value": "0;100.00;0.00;0;0"}}}}"#,
//! );
//! client.read_data().await?;
//!
//! let blinds = client.get_blinds();
//! assert_eq!(blinds[0].name(), "Terrace");
//! assert_eq!(blinds[0].position(), Some(100.0));
//!
//! blinds[0].set_position(50.0).await?;
//! assert_eq!(client.source().sent_commands()[0].command, "P50");
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

pub mod accessor;
#[cfg(feature = "http")]
mod builder;
mod client;
pub mod domains;
pub mod entity;
pub mod error;
pub mod protocol;
pub mod provider;
pub mod subscription;
pub mod types;

#[cfg(test)]
mod testing;

#[cfg(feature = "http")]
pub use builder::ApiClientBuilder;
pub use client::ApiClient;
pub use entity::{Entity, EntityView};
pub use error::{ApiError, DecodeError, DeviceError, Error, ProtocolError, Result, ValueError};
pub use protocol::{DataSource, PayloadKind, StaticSource};
#[cfg(feature = "http")]
pub use protocol::{AuthMode, HttpClient, HttpConfig};
pub use provider::DataProvider;
pub use types::{Brightness, Percentage, RgbColor, Temperature};
