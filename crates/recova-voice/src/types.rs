// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Voice-provider request/response types.

use recova_core::VoiceSessionId;
use serde::{Deserialize, Serialize};

/// Session settings submitted with every provisioning request.
///
/// Model, voice identity, and temperature come from configuration; the
/// speaker-initiative and telephony-bridging flags are fixed by the
/// provisioning request itself.
#[derive(Debug, Clone)]
pub struct VoiceSettings {
    /// Conversational model identifier.
    pub model: String,
    /// Voice identity the agent speaks with.
    pub voice: String,
    /// Sampling temperature.
    pub temperature: f64,
}

/// Body for `POST {api_url}` (session provisioning).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    /// The rendered call script, consumed verbatim by the voice agent.
    pub system_prompt: String,
    pub model: String,
    pub voice: String,
    pub temperature: f64,
    /// Who opens the conversation. The callee speaks first on a phone call.
    pub first_speaker: String,
    /// Bridging medium; `{"twilio": {}}` streams audio over the telephony leg.
    pub medium: Medium,
}

impl CreateSessionRequest {
    pub fn new(system_prompt: String, settings: &VoiceSettings) -> Self {
        Self {
            system_prompt,
            model: settings.model.clone(),
            voice: settings.voice.clone(),
            temperature: settings.temperature,
            first_speaker: "FIRST_SPEAKER_USER".to_string(),
            medium: Medium::default(),
        }
    }
}

/// Bridging medium flags.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Medium {
    pub twilio: TwilioMedium,
}

/// Empty marker object; its presence selects telephony bridging.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TwilioMedium {}

/// Response body of a provisioning request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub call_id: String,
    #[serde(default)]
    pub join_url: Option<String>,
}

/// One provisioned voice session.
#[derive(Debug, Clone)]
pub struct VoiceSessionHandle {
    /// Identifier used later to fetch the session's transcript.
    pub session_id: VoiceSessionId,
    /// Endpoint the telephony provider streams call audio to.
    pub join_url: String,
}

/// The message log of one voice session.
///
/// An empty `results` list is a valid, representable outcome (e.g. the
/// callee hung up before the agent spoke).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    #[serde(default)]
    pub results: Vec<TranscriptTurn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

impl Transcript {
    /// True when the session produced no conversation turns.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// A single conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptTurn {
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
