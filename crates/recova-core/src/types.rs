// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Recova workspace.

use serde::{Deserialize, Serialize};

/// Unique identifier for a provisioned voice-AI session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoiceSessionId(pub String);

/// Unique identifier assigned by the telephony provider to a phone call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallSid(pub String);

impl std::fmt::Display for VoiceSessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for CallSid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The canonical, fully-resolved representation of one collection attempt.
///
/// Built fresh per call attempt from a raw CRM record by the normalizer in
/// `recova-crm`, immutable thereafter. Every field carries a non-empty
/// default from configuration or an empty-string fallback; the struct is
/// never partially constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallContext {
    pub bank_name: String,
    pub customer_name: String,
    pub loan_type: String,
    pub outstanding_amount: String,
    pub missed_emi_count: String,
    pub emi_amount: String,
    pub due_date: String,
    pub proposed_months: String,
    pub amount: String,
    pub months: String,
    pub phone_number: String,
    pub call_status: String,
    pub number_of_call_attempts: String,
    pub call_lifted_time: String,
    pub secure_payment_link: String,
    pub preferred_callback_time: String,
    /// Composed collection message, derived by the normalizer (not stored in the CRM).
    pub main_message: String,
    pub dpd_days: String,
    /// Lookup date, set to "today" at construction time.
    pub date: String,
    /// Fixed agent identity from configuration.
    pub agent_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_context() -> CallContext {
        CallContext {
            bank_name: "Example Bank".into(),
            customer_name: "Asha Rao".into(),
            loan_type: "personal loan".into(),
            outstanding_amount: "45000".into(),
            missed_emi_count: "3".into(),
            emi_amount: "5000".into(),
            due_date: "2026-06-22".into(),
            proposed_months: "".into(),
            amount: "".into(),
            months: "".into(),
            phone_number: "+918919025218".into(),
            call_status: "".into(),
            number_of_call_attempts: "".into(),
            call_lifted_time: "".into(),
            secure_payment_link: "https://example.com/payment".into(),
            preferred_callback_time: "".into(),
            main_message: "Hello Asha Rao".into(),
            dpd_days: "45".into(),
            date: "2026-08-29".into(),
            agent_name: "Yaswanth".into(),
        }
    }

    #[test]
    fn call_context_serializes_all_fields() {
        let json = serde_json::to_value(sample_context()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 20);
        assert_eq!(obj["customer_name"], "Asha Rao");
        assert_eq!(obj["outstanding_amount"], "45000");
    }

    #[test]
    fn ids_round_trip() {
        let sid = CallSid("CA123".into());
        let vid = VoiceSessionId("sess-1".into());
        assert_eq!(sid.to_string(), "CA123");
        assert_eq!(vid.to_string(), "sess-1");

        let json = serde_json::to_string(&sid).unwrap();
        let parsed: CallSid = serde_json::from_str(&json).unwrap();
        assert_eq!(sid, parsed);
    }
}
