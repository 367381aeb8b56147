// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Voice-session provisioning, call-script rendering, and transcript
//! persistence.
//!
//! [`VoiceClient`] talks to the external voice-AI provider,
//! [`render_script`] substitutes a [`recova_core::CallContext`] into the
//! fixed five-step call script, and [`TranscriptStore`] writes fetched
//! transcripts to local JSON files.

pub mod client;
pub mod script;
pub mod store;
pub mod types;

pub use client::VoiceClient;
pub use script::{SCRIPT_TEMPLATE, render_script};
pub use store::TranscriptStore;
pub use types::{Transcript, TranscriptTurn, VoiceSessionHandle, VoiceSettings};
