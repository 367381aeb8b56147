// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The end-to-end call workflow.
//!
//! [`initiate_collection_call`] sequences CRM lookup, normalization, script
//! rendering, voice-session provisioning, and telephony dial-out;
//! [`process_status_event`] handles the asynchronous status callback that
//! triggers transcript retrieval. Any step failing fails the whole request;
//! nothing is rolled back. A voice session whose telephony leg never got
//! placed is left orphaned at the provider.

use recova_core::{CallSid, RecovaError, VoiceSessionId};
use recova_crm::normalize_contact;
use recova_telephony::{CallStatus, CallStatusEvent};
use recova_voice::render_script;
use tracing::{info, warn};

use crate::registry::CallSession;
use crate::server::GatewayState;

/// Everything a successful initiation returns to the caller.
#[derive(Debug, Clone)]
pub struct CallOutcome {
    pub call_sid: CallSid,
    pub voice_session_id: VoiceSessionId,
    pub join_url: String,
}

/// Runs one collection attempt for `customer_name`, end to end.
///
/// On success the call SID is registered in the session registry so the
/// status webhook can re-associate it with its voice session.
pub async fn initiate_collection_call(
    state: &GatewayState,
    customer_name: &str,
) -> Result<CallOutcome, RecovaError> {
    let customer_name = customer_name.trim();
    if customer_name.is_empty() {
        return Err(RecovaError::Validation(
            "customer_name must not be empty".into(),
        ));
    }

    let props = state.crm.search_contact(customer_name).await?;
    let context = normalize_contact(&props, &state.defaults);
    let script = render_script(&context)?;

    let session = state
        .voice
        .create_session(script, &state.voice_settings)
        .await?;

    let call_sid = state
        .telephony
        .initiate_call(
            &context.phone_number,
            &session.join_url,
            &state.status_callback_url,
        )
        .await?;

    state.registry.insert(
        call_sid.clone(),
        CallSession {
            voice_session_id: session.session_id.clone(),
            customer_name: context.customer_name.clone(),
        },
    );

    info!(
        call_sid = %call_sid,
        voice_session_id = %session.session_id,
        customer_name = %context.customer_name,
        "collection call initiated"
    );

    Ok(CallOutcome {
        call_sid,
        voice_session_id: session.session_id,
        join_url: session.join_url,
    })
}

/// Dispatches one telephony status event.
///
/// `completed` triggers the transcript fetch; the fetched transcript is
/// persisted only when it has at least one turn, and a failed write is
/// logged rather than propagated. Every other status only logs. Terminal
/// statuses drop the call's registry entry.
pub async fn process_status_event(
    state: &GatewayState,
    event: &CallStatusEvent,
) -> Result<(), RecovaError> {
    info!(call_sid = %event.call_sid, status = %event.call_status, "call status received");

    match event.call_status {
        CallStatus::Completed => {
            let Some(session) = state.registry.take(&event.call_sid) else {
                warn!(call_sid = %event.call_sid, "completed call has no registered session");
                return Ok(());
            };

            let transcript = state.voice.fetch_transcript(&session.voice_session_id).await?;
            if transcript.is_empty() {
                info!(
                    voice_session_id = %session.voice_session_id,
                    "transcript is empty, nothing to persist"
                );
                return Ok(());
            }

            // Best-effort persistence: a write failure never fails the webhook.
            if let Err(e) = state.store.save(
                &transcript,
                &session.customer_name,
                &session.voice_session_id,
            ) {
                warn!(
                    voice_session_id = %session.voice_session_id,
                    error = %e,
                    "failed to persist transcript"
                );
            }
            Ok(())
        }
        CallStatus::Busy | CallStatus::NoAnswer | CallStatus::Failed => {
            state.registry.take(&event.call_sid);
            info!(call_sid = %event.call_sid, status = %event.call_status, "call ended without completion");
            Ok(())
        }
        CallStatus::Answered => {
            info!(call_sid = %event.call_sid, "call answered");
            Ok(())
        }
        CallStatus::Unknown => {
            info!(call_sid = %event.call_sid, "ignoring unrecognized call status");
            Ok(())
        }
    }
}
