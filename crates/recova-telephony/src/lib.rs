// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telephony-provider client and status-callback events.
//!
//! [`TelephonyClient`] places outbound calls bridged to a voice session
//! and terminates them; [`CallStatusEvent`] is the form-encoded payload the
//! provider POSTs back as a call progresses.

pub mod client;
pub mod events;

pub use client::TelephonyClient;
pub use events::{CallStatus, CallStatusEvent};
