// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `serve` subcommand: wires configuration into provider clients and
//! runs the gateway HTTP server until shutdown.

use std::sync::Arc;

use recova_config::RecovaConfig;
use recova_core::RecovaError;
use recova_crm::{CrmClient, NormalizerDefaults};
use recova_gateway::{GatewayState, ServerConfig, SessionRegistry, start_server};
use recova_telephony::TelephonyClient;
use recova_voice::{TranscriptStore, VoiceClient, VoiceSettings};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub async fn run(config: RecovaConfig) -> Result<(), RecovaError> {
    init_tracing(&config.agent.log_level);

    let account_sid = required(config.telephony.account_sid.clone(), "telephony.account_sid")?;
    let auth_token = required(config.telephony.auth_token.clone(), "telephony.auth_token")?;
    let from_number = required(config.telephony.from_number.clone(), "telephony.from_number")?;
    let voice_api_key = required(config.voice.api_key.clone(), "voice.api_key")?;
    let crm_token = required(config.crm.access_token.clone(), "crm.access_token")?;

    let state = GatewayState {
        crm: CrmClient::new(&crm_token, config.crm.api_url.clone())?,
        voice: VoiceClient::new(&voice_api_key, config.voice.api_url.clone())?,
        telephony: TelephonyClient::new(
            account_sid,
            auth_token,
            from_number,
            config.telephony.api_url.clone(),
        )?,
        store: TranscriptStore::new(config.transcripts.dir.clone()),
        registry: Arc::new(SessionRegistry::new()),
        defaults: NormalizerDefaults {
            bank_name: config.defaults.bank_name.clone(),
            payment_link: config.defaults.payment_link.clone(),
            destination_number: config.telephony.default_destination.clone(),
            agent_name: config.agent.name.clone(),
        },
        voice_settings: VoiceSettings {
            model: config.voice.model.clone(),
            voice: config.voice.voice.clone(),
            temperature: config.voice.temperature,
        },
        status_callback_url: status_callback_url(&config),
    };

    info!(
        agent = %config.agent.name,
        transcripts_dir = %config.transcripts.dir,
        "starting call orchestrator"
    );

    let server = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    start_server(&server, state).await
}

/// Where the telephony provider delivers status callbacks.
///
/// Falls back to the bind address when no public URL is configured; that
/// only works when the provider can reach this host directly.
fn status_callback_url(config: &RecovaConfig) -> String {
    let base = match &config.server.public_url {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => {
            warn!("server.public_url is not set; status callbacks will target the bind address");
            format!("http://{}:{}", config.server.host, config.server.port)
        }
    };
    format!("{base}/call-status")
}

fn required(value: Option<String>, key: &'static str) -> Result<String, RecovaError> {
    value.ok_or_else(|| RecovaError::Config(format!("{key} is required")))
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("recova={log_level},warn")));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
