// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session registry.
//!
//! The telephony provider's status callbacks carry only a call SID; the
//! transcript lives under a voice-session id. The registry is the single
//! re-association point between the two identifier spaces. Entries are
//! inserted once the telephony id is known (at call initiation, never at
//! session provisioning), so concurrent calls cannot race on a shared
//! "current session" slot.

use dashmap::DashMap;
use recova_core::{CallSid, VoiceSessionId};

/// What the webhook needs to recover about an in-flight call.
#[derive(Debug, Clone)]
pub struct CallSession {
    pub voice_session_id: VoiceSessionId,
    pub customer_name: String,
}

/// Concurrent map from telephony call SID to its voice session.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: DashMap<CallSid, CallSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an in-flight call. A re-used SID overwrites the old entry.
    pub fn insert(&self, call_sid: CallSid, session: CallSession) {
        self.sessions.insert(call_sid, session);
    }

    /// Looks up a call without removing it.
    pub fn get(&self, call_sid: &CallSid) -> Option<CallSession> {
        self.sessions.get(call_sid).map(|entry| entry.clone())
    }

    /// Removes and returns a call's session, once the call is terminal.
    pub fn take(&self, call_sid: &CallSid) -> Option<CallSession> {
        self.sessions.remove(call_sid).map(|(_, session)| session)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
