// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Recova call orchestrator.

use thiserror::Error;

/// The primary error type used across all Recova crates.
///
/// The first four variants map directly onto HTTP status codes at the
/// gateway boundary: `Validation` -> 400, `NotFound` -> 404, `Upstream`
/// and `Template` -> 500.
#[derive(Debug, Error)]
pub enum RecovaError {
    /// Configuration errors (invalid TOML, missing credentials, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// A required request input was missing or malformed.
    #[error("validation error: {0}")]
    Validation(String),

    /// The CRM has no record matching the requested customer.
    #[error("not found: {0}")]
    NotFound(String),

    /// A CRM, voice-provider, or telephony-provider call failed.
    #[error("upstream error from {provider}: {message}")]
    Upstream {
        provider: String,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Call-script rendering left a placeholder unresolved.
    #[error("template error: {message}")]
    Template { message: String },

    /// Local transcript persistence failed.
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RecovaError {
    /// Shorthand for an [`RecovaError::Upstream`] without a source error.
    pub fn upstream(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Upstream {
            provider: provider.into(),
            message: message.into(),
            source: None,
        }
    }
}
