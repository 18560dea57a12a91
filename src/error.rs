//
//  nosto-sdk
//  error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Error types for Nosto API operations.
//!
//! Every use-case either returns its typed value or one of the variants of
//! [`Error`]. Nothing is downgraded to a default: a call that fails never
//! yields a partially populated result.
//!
//! | Variant | Raised when | Retry? |
//! |---------|-------------|--------|
//! | [`Error::Configuration`] | missing token, unresolved placeholder, bad header, bad base URL | never |
//! | [`Error::Transport`] | connection failure, timeout | caller may retry |
//! | [`Error::Http`] | non-2xx response without a recognised error body | no |
//! | [`Error::Api`] | the platform returned a structured error envelope | no |
//! | [`Error::Serialization`] | a body could not be encoded or decoded | no |
//!
//! # Example
//!
//! ```rust
//! use nosto_sdk::{ConfigurationError, Error};
//! use nosto_sdk::auth::TokenKind;
//!
//! let err = Error::from(ConfigurationError::MissingToken(TokenKind::Email));
//! assert!(err.is_configuration());
//! assert_eq!(err.status(), None);
//! ```

use thiserror::Error;

use crate::auth::TokenKind;

/// Convenience alias used throughout the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Unified error type for every Nosto API operation.
#[derive(Error, Debug)]
pub enum Error {
    /// The caller or its configuration is wrong; surfaced before any network call.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The transport could not complete the exchange.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Non-success status with a body that carries no recognisable error envelope.
    #[error("HTTP error ({status}): {body}")]
    Http {
        /// The HTTP status code
        status: u16,
        /// The raw response body, possibly empty
        body: String,
    },

    /// The platform answered with a structured error envelope.
    #[error("API error ({status}){}: {message}", code_suffix(.code))]
    Api {
        /// The HTTP status code
        status: u16,
        /// Server-provided error code, such as `invalid_grant`
        code: Option<String>,
        /// Server-provided human readable message
        message: String,
    },

    /// A request or response body could not be (de)serialized.
    #[error("Serialization error ({context}): {source}")]
    Serialization {
        /// What was being encoded or decoded
        context: String,
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
    },
}

/// Errors caused by the caller or its configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The account carries no token of the kind the operation requires.
    #[error("account has no API token of kind '{0}'")]
    MissingToken(TokenKind),

    /// A `{placeholder}` in the path template has no replacement value.
    #[error("no replacement for placeholder '{placeholder}' in '{template}'")]
    UnresolvedPlaceholder {
        /// The marker that remained, braces included
        placeholder: String,
        /// The template that was being resolved
        template: String,
    },

    /// A header name or value cannot be sent over HTTP, such as a token or
    /// active domain containing a control character.
    #[error("invalid HTTP header '{name}'")]
    InvalidHeader {
        /// The offending header name
        name: String,
    },

    /// A configured base URL is not an absolute URL.
    #[error("invalid base URL for {name}: '{value}'")]
    InvalidBaseUrl {
        /// Which endpoint the value was meant for
        name: String,
        /// The rejected value
        value: String,
    },
}

/// Failure reported by a [`Transport`](crate::api::Transport) implementation.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The `reqwest` client failed (connect, timeout, TLS, body read).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_deref().map(|c| format!(" [{c}]")).unwrap_or_default()
}

impl Error {
    /// Wraps a serde error with a short description of what was being processed.
    pub fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }

    /// Returns the HTTP status for errors that came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } | Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` for configuration errors.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Returns `true` when retrying the same call could succeed.
    ///
    /// Only transport failures qualify; the SDK itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
