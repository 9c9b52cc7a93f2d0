// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the myGEKKO client.
//!
//! This module provides the error hierarchy used across the library: HTTP
//! status classification, transport failures, payload decoding, local value
//! validation and entity-level checks.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The API answered with a non-success status code.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The request could not be sent or the response could not be read.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// A payload or a field string could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A value was rejected before any request was made.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The operation does not apply to the addressed entity.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
}

/// Non-success HTTP status codes returned by the myGEKKO API.
///
/// Each documented status maps to its own variant so callers can match on
/// the failure kind instead of the raw code.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// 400: the request was malformed.
    #[error("bad request (400)")]
    BadRequest,

    /// 403: the credentials were rejected.
    #[error("forbidden (403)")]
    Forbidden,

    /// 404: the resource or the controller does not exist.
    #[error("not found (404)")]
    NotFound,

    /// 405: the method is not allowed for this resource.
    #[error("method not allowed (405)")]
    MethodNotAllowed,

    /// 410: the resource is gone.
    #[error("gone (410)")]
    Gone,

    /// 429: the request quota was exceeded.
    #[error("too many requests (429)")]
    TooManyRequests,

    /// 444: the controller closed the connection without answering.
    #[error("no response (444)")]
    NoResponse,

    /// Any other non-200 status.
    #[error("unexpected status {status}")]
    Generic {
        /// The raw HTTP status code.
        status: u16,
    },
}

impl ApiError {
    /// Classifies an HTTP status code.
    ///
    /// Returns `None` for `200`, which is the only status the API uses for
    /// success.
    ///
    /// # Examples
    ///
    /// ```
    /// use mygekko_lib::ApiError;
    ///
    /// assert_eq!(ApiError::from_status(200), None);
    /// assert_eq!(ApiError::from_status(404), Some(ApiError::NotFound));
    /// assert_eq!(ApiError::from_status(500), Some(ApiError::Generic { status: 500 }));
    /// ```
    #[must_use]
    pub const fn from_status(status: u16) -> Option<Self> {
        match status {
            200 => None,
            400 => Some(Self::BadRequest),
            403 => Some(Self::Forbidden),
            404 => Some(Self::NotFound),
            405 => Some(Self::MethodNotAllowed),
            410 => Some(Self::Gone),
            429 => Some(Self::TooManyRequests),
            444 => Some(Self::NoResponse),
            status => Some(Self::Generic { status }),
        }
    }

    /// Returns the HTTP status code this error was built from.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::Gone => 410,
            Self::TooManyRequests => 429,
            Self::NoResponse => 444,
            Self::Generic { status } => *status,
        }
    }
}

/// Errors related to the HTTP transport.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timed out or was cancelled.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors raised while decoding payloads.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload body is not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload is valid JSON but not an object keyed by domain.
    #[error("{payload} payload is not a JSON object")]
    NotAnObject {
        /// Which payload was malformed.
        payload: &'static str,
    },

    /// A `sumstate` string has fewer fields than the domain declares.
    #[error("{domain}/{id}: expected at least {expected} fields, got {actual}")]
    FieldCount {
        /// Domain key, e.g. `blinds`.
        domain: &'static str,
        /// Entity id, e.g. `item3`.
        id: String,
        /// Number of fields the domain table declares.
        expected: usize,
        /// Number of fields found in the string.
        actual: usize,
    },
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types with
/// invalid values. They are raised locally, no request is sent.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
        /// The actual value that was provided.
        actual: f64,
    },

    /// A numeric value is NaN or infinite.
    #[error("value {0} is not a finite number")]
    NotFinite(f64),

    /// A vendor code does not map to any known variant.
    #[error("unknown {kind} code: {code}")]
    UnknownCode {
        /// Name of the enum the code was decoded into.
        kind: &'static str,
        /// The raw code.
        code: i64,
    },
}

/// Errors related to the addressed entity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The id is not present in the accessor's current snapshot.
    #[error("unknown entity: {id}")]
    UnknownEntity {
        /// The entity id that was looked up.
        id: String,
    },

    /// The entity does not support the requested operation.
    #[error("{id} does not support {feature}")]
    UnsupportedFeature {
        /// The entity id.
        id: String,
        /// The operation that was refused.
        feature: &'static str,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        let table = [
            (400, ApiError::BadRequest),
            (403, ApiError::Forbidden),
            (404, ApiError::NotFound),
            (405, ApiError::MethodNotAllowed),
            (410, ApiError::Gone),
            (429, ApiError::TooManyRequests),
            (444, ApiError::NoResponse),
            (401, ApiError::Generic { status: 401 }),
            (503, ApiError::Generic { status: 503 }),
        ];
        for (status, expected) in table {
            let err = ApiError::from_status(status).unwrap();
            assert_eq!(err, expected);
            assert_eq!(err.status(), status);
        }
        assert!(ApiError::from_status(200).is_none());
    }

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 0.0,
            max: 100.0,
            actual: 150.0,
        };
        assert_eq!(err.to_string(), "value 150 is out of range [0, 100]");
    }

    #[test]
    fn field_count_display() {
        let err = DecodeError::FieldCount {
            domain: "blinds",
            id: "item0".to_string(),
            expected: 5,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "blinds/item0: expected at least 5 fields, got 2"
        );
    }

    #[test]
    fn error_from_api_error() {
        let err: Error = ApiError::NotFound.into();
        assert!(matches!(err, Error::Api(ApiError::NotFound)));
    }

    #[test]
    fn device_error_display() {
        let err = DeviceError::UnsupportedFeature {
            id: "group1".to_string(),
            feature: "set position",
        };
        assert_eq!(err.to_string(), "group1 does not support set position");
    }
}
