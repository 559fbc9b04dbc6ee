//! Result envelopes for handing outcomes back to API callers.

use serde::{Deserialize, Serialize};

pub const SUCCESS_MESSAGE: &str = "success";
pub const FAILURE_MESSAGE: &str = "failure";

const fn default_message(success: bool) -> &'static str {
    if success { SUCCESS_MESSAGE } else { FAILURE_MESSAGE }
}

/// Outcome of an operation with a human-readable message and optional payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response<T> {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<T>,
}

impl<T> Response<T> {
    /// Create a response without payload, using the default message for `success`.
    #[must_use]
    pub fn new(success: bool) -> Self {
        Self {
            success,
            message: default_message(success).to_string(),
            payload: None,
        }
    }

    /// A successful response carrying `payload`.
    #[must_use]
    pub fn success(payload: T) -> Self {
        Self::new(true).with_payload(payload)
    }

    /// A failed response with the given message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(false).with_message(message)
    }

    /// Successful iff a payload is present.
    #[must_use]
    pub fn from_option(payload: Option<T>) -> Self {
        let success = payload.is_some();
        Self {
            payload,
            ..Self::new(success)
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn with_payload(mut self, payload: T) -> Self {
        self.payload = Some(payload);
        self
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for Response<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(payload) => Self::success(payload),
            Err(err) => Self::failure(err.to_string()),
        }
    }
}

/// Outcome whose kind and message are translation keys rather than text.
///
/// `K` and `M` are typically caller-defined enums; a missing message key
/// means there is nothing beyond the kind to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatableResponse<K, M, T = ()> {
    pub success: bool,
    pub kind: K,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<T>,
}

impl<K, M, T> TranslatableResponse<K, M, T> {
    #[must_use]
    pub const fn new(success: bool, kind: K) -> Self {
        Self {
            success,
            kind,
            message: None,
            payload: None,
        }
    }

    /// Successful iff a payload is present, with `success_kind` or `error_kind` to match.
    #[must_use]
    pub fn from_option(payload: Option<T>, success_kind: K, error_kind: K) -> Self {
        let success = payload.is_some();
        Self {
            success,
            kind: if success { success_kind } else { error_kind },
            message: None,
            payload,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: M) -> Self {
        self.message = Some(message);
        self
    }

    #[must_use]
    pub fn with_payload(mut self, payload: T) -> Self {
        self.payload = Some(payload);
        self
    }
}
