// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Enforces the required-credential startup contract: the service refuses
//! to start without telephony credentials, a voice-provider API key, and a
//! CRM access token. Also validates semantic constraints serde cannot
//! express, such as bind addresses and the temperature range.

use crate::diagnostic::ConfigError;
use crate::model::RecovaConfig;

/// Keys that must be present (and non-empty) for the service to start.
///
/// Each entry pairs the dotted config key with an accessor into the config.
fn required_credentials(config: &RecovaConfig) -> [(&'static str, Option<&str>); 5] {
    [
        ("telephony.account_sid", config.telephony.account_sid.as_deref()),
        ("telephony.auth_token", config.telephony.auth_token.as_deref()),
        ("telephony.from_number", config.telephony.from_number.as_deref()),
        ("voice.api_key", config.voice.api_key.as_deref()),
        ("crm.access_token", config.crm.access_token.as_deref()),
    ]
}

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &RecovaConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    for (key, value) in required_credentials(config) {
        match value {
            None => errors.push(ConfigError::MissingKey {
                key: key.to_string(),
            }),
            Some(v) if v.trim().is_empty() => errors.push(ConfigError::Validation {
                message: format!("{key} must not be empty"),
            }),
            Some(_) => {}
        }
    }

    // Validate host looks like a valid IP or hostname
    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    // public_url must be absolute when set -- the telephony provider dials it back
    if let Some(url) = &config.server.public_url
        && !url.starts_with("http://")
        && !url.starts_with("https://")
    {
        errors.push(ConfigError::Validation {
            message: format!("server.public_url `{url}` must start with http:// or https://"),
        });
    }

    for (key, url) in [
        ("voice.api_url", &config.voice.api_url),
        ("crm.api_url", &config.crm.api_url),
        ("telephony.api_url", &config.telephony.api_url),
    ] {
        if url.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("{key} must not be empty"),
            });
        }
    }

    if !(0.0..=1.0).contains(&config.voice.temperature) {
        errors.push(ConfigError::Validation {
            message: format!(
                "voice.temperature must be within 0.0..=1.0, got {}",
                config.voice.temperature
            ),
        });
    }

    if config.transcripts.dir.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "transcripts.dir must not be empty".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
