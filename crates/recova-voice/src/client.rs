// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the voice-AI provider.
//!
//! Provisions agent-led voice sessions and fetches their transcripts.
//! No retries: any upstream failure is terminal for the request.

use std::time::Duration;

use recova_core::{RecovaError, VoiceSessionId};
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::types::{
    CreateSessionRequest, CreateSessionResponse, Transcript, VoiceSessionHandle, VoiceSettings,
};

/// HTTP client for the voice-session API.
#[derive(Debug, Clone)]
pub struct VoiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl VoiceClient {
    /// Creates a new voice client.
    ///
    /// # Arguments
    /// * `api_key` - provider API key, sent as `X-API-Key` on every request
    /// * `base_url` - session endpoint (e.g. "https://api.ultravox.ai/api/calls")
    pub fn new(api_key: &str, base_url: String) -> Result<Self, RecovaError> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|e| RecovaError::Config(format!("invalid voice API key: {e}")))?;
        key.set_sensitive(true);
        headers.insert("x-api-key", key);
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| RecovaError::Upstream {
                provider: "voice".into(),
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self { client, base_url })
    }

    /// Provisions one voice session carrying the rendered call script.
    ///
    /// Returns the session identifier plus the join URL the telephony leg
    /// streams audio to. A success response without a join URL is an
    /// upstream error: the session is unusable without one.
    pub async fn create_session(
        &self,
        script: String,
        settings: &VoiceSettings,
    ) -> Result<VoiceSessionHandle, RecovaError> {
        debug!(model = %settings.model, voice = %settings.voice, "provisioning voice session");

        let request = CreateSessionRequest::new(script, settings);

        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| RecovaError::Upstream {
                provider: "voice".into(),
                message: format!("session provisioning request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "voice provisioning response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecovaError::upstream(
                "voice",
                format!("session provisioning returned {status}: {body}"),
            ));
        }

        let body = response.text().await.map_err(|e| RecovaError::Upstream {
            provider: "voice".into(),
            message: format!("failed to read provisioning response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        let created: CreateSessionResponse =
            serde_json::from_str(&body).map_err(|e| RecovaError::Upstream {
                provider: "voice".into(),
                message: format!("failed to parse provisioning response: {e}"),
                source: Some(Box::new(e)),
            })?;

        let join_url = created.join_url.ok_or_else(|| {
            RecovaError::upstream(
                "voice",
                format!("session {} has no join URL", created.call_id),
            )
        })?;

        debug!(session_id = %created.call_id, "voice session provisioned");
        Ok(VoiceSessionHandle {
            session_id: VoiceSessionId(created.call_id),
            join_url,
        })
    }

    /// Fetches the message log of a completed session.
    ///
    /// An empty transcript is a valid result, not an error.
    pub async fn fetch_transcript(
        &self,
        session_id: &VoiceSessionId,
    ) -> Result<Transcript, RecovaError> {
        debug!(session_id = %session_id, "fetching voice transcript");

        let url = format!("{}/{}/messages", self.base_url, session_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RecovaError::Upstream {
                provider: "voice".into(),
                message: format!("transcript request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "voice transcript response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecovaError::upstream(
                "voice",
                format!("transcript fetch returned {status}: {body}"),
            ));
        }

        let body = response.text().await.map_err(|e| RecovaError::Upstream {
            provider: "voice".into(),
            message: format!("failed to read transcript body: {e}"),
            source: Some(Box::new(e)),
        })?;
        let transcript: Transcript =
            serde_json::from_str(&body).map_err(|e| RecovaError::Upstream {
                provider: "voice".into(),
                message: format!("failed to parse transcript: {e}"),
                source: Some(Box::new(e)),
            })?;

        debug!(
            session_id = %session_id,
            turns = transcript.results.len(),
            "voice transcript fetched"
        );
        Ok(transcript)
    }
}
