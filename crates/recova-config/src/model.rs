// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Recova call orchestrator.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Recova configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional at parse time; required provider
/// credentials are enforced by post-deserialization validation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RecovaConfig {
    /// Voice-agent identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Telephony provider (Twilio-wire) settings.
    #[serde(default)]
    pub telephony: TelephonyConfig,

    /// Voice-AI provider settings.
    #[serde(default)]
    pub voice: VoiceConfig,

    /// CRM access settings.
    #[serde(default)]
    pub crm: CrmConfig,

    /// Fallback values used when a CRM record omits a property.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Transcript persistence settings.
    #[serde(default)]
    pub transcripts: TranscriptsConfig,
}

/// Voice-agent identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Name the agent introduces itself with on calls.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "Yaswanth".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind the server to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Publicly reachable base URL of this service. The telephony provider
    /// delivers status callbacks to `{public_url}/call-status`, so this must
    /// resolve from the provider's network (e.g. an ngrok tunnel in dev).
    #[serde(default)]
    pub public_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_url: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Telephony provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TelephonyConfig {
    /// Provider account SID. Required.
    #[serde(default)]
    pub account_sid: Option<String>,

    /// Provider auth token. Required.
    #[serde(default)]
    pub auth_token: Option<String>,

    /// Caller number outbound calls are placed from. Required.
    #[serde(default)]
    pub from_number: Option<String>,

    /// Destination dialed when a CRM record has no phone number.
    #[serde(default = "default_destination")]
    pub default_destination: String,

    /// Provider REST API base URL.
    #[serde(default = "default_telephony_api_url")]
    pub api_url: String,
}

impl Default for TelephonyConfig {
    fn default() -> Self {
        Self {
            account_sid: None,
            auth_token: None,
            from_number: None,
            default_destination: default_destination(),
            api_url: default_telephony_api_url(),
        }
    }
}

fn default_destination() -> String {
    "+918919025218".to_string()
}

fn default_telephony_api_url() -> String {
    "https://api.twilio.com".to_string()
}

/// Voice-AI provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VoiceConfig {
    /// Provider API key. Required.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base endpoint for call-session provisioning.
    #[serde(default = "default_voice_api_url")]
    pub api_url: String,

    /// Model identifier submitted with each session.
    #[serde(default = "default_voice_model")]
    pub model: String,

    /// Voice identity the agent speaks with.
    #[serde(default = "default_voice_name")]
    pub voice: String,

    /// Sampling temperature for the conversational model.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_voice_api_url(),
            model: default_voice_model(),
            voice: default_voice_name(),
            temperature: default_temperature(),
        }
    }
}

fn default_voice_api_url() -> String {
    "https://api.ultravox.ai/api/calls".to_string()
}

fn default_voice_model() -> String {
    "fixie-ai/ultravox".to_string()
}

fn default_voice_name() -> String {
    "Yaswanth".to_string()
}

fn default_temperature() -> f64 {
    0.3
}

/// CRM access configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CrmConfig {
    /// CRM private-app access token. Required.
    #[serde(default)]
    pub access_token: Option<String>,

    /// CRM API base URL.
    #[serde(default = "default_crm_api_url")]
    pub api_url: String,
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            api_url: default_crm_api_url(),
        }
    }
}

fn default_crm_api_url() -> String {
    "https://api.hubapi.com".to_string()
}

/// Fallback values for absent CRM record properties.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Institution name used when the record carries none.
    #[serde(default = "default_bank_name")]
    pub bank_name: String,

    /// Secure payment link used when the record carries none.
    #[serde(default = "default_payment_link")]
    pub payment_link: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            bank_name: default_bank_name(),
            payment_link: default_payment_link(),
        }
    }
}

fn default_bank_name() -> String {
    "Example Bank".to_string()
}

fn default_payment_link() -> String {
    "https://example.com/payment".to_string()
}

/// Transcript persistence configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TranscriptsConfig {
    /// Directory conversation transcripts are written to. Created if absent.
    #[serde(default = "default_transcripts_dir")]
    pub dir: String,
}

impl Default for TranscriptsConfig {
    fn default() -> Self {
        Self {
            dir: default_transcripts_dir(),
        }
    }
}

fn default_transcripts_dir() -> String {
    "conversations".to_string()
}
