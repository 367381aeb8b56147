// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./recova.toml` > `~/.config/recova/recova.toml` > `/etc/recova/recova.toml`
//! with environment variable overrides via `RECOVA_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::RecovaConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/recova/recova.toml` (system-wide)
/// 3. `~/.config/recova/recova.toml` (user XDG config)
/// 4. `./recova.toml` (local directory)
/// 5. `RECOVA_*` environment variables
pub fn load_config() -> Result<RecovaConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a specific TOML string only (no XDG lookup).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<RecovaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RecovaConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<RecovaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RecovaConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(RecovaConfig::default()))
        .merge(Toml::file("/etc/recova/recova.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("recova/recova.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("recova.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. For example, `RECOVA_TELEPHONY_ACCOUNT_SID`
/// must map to `telephony.account_sid`, not `telephony.account.sid`.
fn env_provider() -> Env {
    Env::prefixed("RECOVA_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: RECOVA_VOICE_API_KEY -> "voice_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("server_", "server.", 1)
            .replacen("telephony_", "telephony.", 1)
            .replacen("voice_", "voice.", 1)
            .replacen("crm_", "crm.", 1)
            .replacen("defaults_", "defaults.", 1)
            .replacen("transcripts_", "transcripts.", 1);
        mapped.into()
    })
}
