// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Status-callback event types.
//!
//! The telephony provider POSTs these as form-encoded bodies to the
//! gateway's status webhook as the call progresses.

use recova_core::CallSid;
use serde::Deserialize;
use strum::Display;

/// One status-callback delivery for a call leg.
#[derive(Debug, Clone, Deserialize)]
pub struct CallStatusEvent {
    #[serde(rename = "CallSid")]
    pub call_sid: CallSid,
    #[serde(rename = "CallStatus")]
    pub call_status: CallStatus,
    #[serde(rename = "AccountSid", default)]
    pub account_sid: Option<String>,
    #[serde(rename = "To", default)]
    pub to: Option<String>,
    #[serde(rename = "From", default)]
    pub from: Option<String>,
    #[serde(rename = "CallDuration", default)]
    pub call_duration: Option<String>,
    #[serde(rename = "Direction", default)]
    pub direction: Option<String>,
}

/// Call lifecycle states the webhook subscribes to.
///
/// Statuses outside the subscribed set (providers add new ones without
/// notice) deserialize to [`CallStatus::Unknown`] instead of failing the
/// webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CallStatus {
    Answered,
    Completed,
    Busy,
    NoAnswer,
    Failed,
    #[serde(other)]
    Unknown,
}

impl CallStatus {
    /// True once the call leg can produce no further events.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Busy | Self::NoAnswer | Self::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_provider_form_body() {
        let body = "CallSid=CA123&CallStatus=completed&To=%2B918919025218&From=%2B15550100\
                    &CallDuration=42&Direction=outbound-api&AccountSid=AC9";
        let event: CallStatusEvent = serde_urlencoded::from_str(body).unwrap();

        assert_eq!(event.call_sid.0, "CA123");
        assert_eq!(event.call_status, CallStatus::Completed);
        assert_eq!(event.to.as_deref(), Some("+918919025218"));
        assert_eq!(event.call_duration.as_deref(), Some("42"));
    }

    #[test]
    fn minimal_body_needs_only_sid_and_status() {
        let event: CallStatusEvent =
            serde_urlencoded::from_str("CallSid=CA456&CallStatus=no-answer").unwrap();
        assert_eq!(event.call_status, CallStatus::NoAnswer);
        assert!(event.to.is_none());
    }

    #[test]
    fn unsubscribed_status_maps_to_unknown() {
        let event: CallStatusEvent =
            serde_urlencoded::from_str("CallSid=CA789&CallStatus=ringing").unwrap();
        assert_eq!(event.call_status, CallStatus::Unknown);
        assert!(!event.call_status.is_terminal());
    }

    #[test]
    fn terminal_statuses() {
        assert!(CallStatus::Completed.is_terminal());
        assert!(CallStatus::Busy.is_terminal());
        assert!(CallStatus::NoAnswer.is_terminal());
        assert!(CallStatus::Failed.is_terminal());
        assert!(!CallStatus::Answered.is_terminal());
    }

    #[test]
    fn status_displays_kebab_case() {
        assert_eq!(CallStatus::NoAnswer.to_string(), "no-answer");
        assert_eq!(CallStatus::Completed.to_string(), "completed");
    }
}
