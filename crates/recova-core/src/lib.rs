// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Recova outbound call orchestrator.
//!
//! This crate provides the error type and common types shared by the
//! CRM, voice, telephony, and gateway crates.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::RecovaError;
pub use types::{CallContext, CallSid, VoiceSessionId};
