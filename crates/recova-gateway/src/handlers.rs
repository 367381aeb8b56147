// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use recova_core::{CallSid, RecovaError, VoiceSessionId};
use recova_crm::normalize_contact;
use recova_telephony::CallStatusEvent;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::orchestrator;
use crate::server::GatewayState;

/// Maps an error to the gateway's HTTP contract.
///
/// `Validation` -> 400, `NotFound` -> 404, everything else -> 500. The
/// status webhook never goes through this mapping; it converts failures
/// into 200 responses itself.
fn error_response(err: &RecovaError) -> Response {
    let status = match err {
        RecovaError::Validation(_) => StatusCode::BAD_REQUEST,
        RecovaError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        error!(error = %err, "request failed");
    }
    (status, Json(json!({"error": err.to_string()}))).into_response()
}

/// GET /health
pub async fn get_health() -> Response {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
    .into_response()
}

#[derive(Debug, Deserialize)]
pub struct FetchContactParams {
    #[serde(default)]
    pub customer_name: Option<String>,
}

/// GET /fetch-contact?customer_name=<name>
///
/// Returns the fully-normalized call context for the named customer.
pub async fn get_fetch_contact(
    State(state): State<GatewayState>,
    Query(params): Query<FetchContactParams>,
) -> Response {
    let Some(name) = params
        .customer_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
    else {
        return error_response(&RecovaError::Validation(
            "customer_name query parameter is required".into(),
        ));
    };

    match state.crm.search_contact(name).await {
        Ok(props) => Json(normalize_contact(&props, &state.defaults)).into_response(),
        Err(err) => error_response(&err),
    }
}

#[derive(Debug, Deserialize)]
pub struct InitiateCallRequest {
    #[serde(default)]
    pub customer_name: String,
}

/// POST /initiate-call
pub async fn post_initiate_call(
    State(state): State<GatewayState>,
    Json(request): Json<InitiateCallRequest>,
) -> Response {
    match orchestrator::initiate_collection_call(&state, &request.customer_name).await {
        Ok(outcome) => Json(json!({
            "call_sid": outcome.call_sid.0,
            "join_url": outcome.join_url,
            "call_id": outcome.voice_session_id.0,
            "message": "Call initiated successfully",
        }))
        .into_response(),
        Err(err) => error_response(&err),
    }
}

/// POST /call-status
///
/// The telephony provider's status webhook. Always answers 200: the body
/// is parsed by hand so a malformed delivery is reported in the response
/// payload instead of bouncing with a 4xx and triggering provider retries.
pub async fn post_call_status(State(state): State<GatewayState>, body: String) -> Response {
    let event: CallStatusEvent = match serde_urlencoded::from_str(&body) {
        Ok(event) => event,
        Err(e) => {
            error!(error = %e, "malformed status callback");
            return Json(json!({
                "message": "Error processing status",
                "error": format!("malformed status callback: {e}"),
            }))
            .into_response();
        }
    };

    match orchestrator::process_status_event(&state, &event).await {
        Ok(()) => Json(json!({"message": "Status received", "status": "ok"})).into_response(),
        Err(err) => {
            error!(call_sid = %event.call_sid, error = %err, "status processing failed");
            Json(json!({
                "message": "Error processing status",
                "error": err.to_string(),
            }))
            .into_response()
        }
    }
}

/// POST /end-call
///
/// Acknowledgement only; terminating a call requires its SID.
pub async fn post_end_call() -> Response {
    Json(json!({
        "message": "No call SID provided; nothing to end",
        "status": "ok",
    }))
    .into_response()
}

/// POST /end-call/{call_sid}
///
/// Always answers 200; a provider rejection is reported in the body.
pub async fn post_end_call_sid(
    State(state): State<GatewayState>,
    Path(call_sid): Path<String>,
) -> Response {
    let call_sid = CallSid(call_sid);
    match state.telephony.end_call(&call_sid).await {
        Ok(()) => {
            info!(call_sid = %call_sid, "call terminated on request");
            Json(json!({
                "message": format!("Call {call_sid} ended"),
                "status": "ok",
            }))
            .into_response()
        }
        Err(err) => Json(json!({
            "message": format!("Failed to end call {call_sid}"),
            "error": err.to_string(),
        }))
        .into_response(),
    }
}

/// GET /fetch-transcript/{call_id}
pub async fn get_fetch_transcript(
    State(state): State<GatewayState>,
    Path(call_id): Path<String>,
) -> Response {
    let session_id = VoiceSessionId(call_id);
    match state.voice.fetch_transcript(&session_id).await {
        Ok(transcript) => Json(json!({
            "call_id": session_id.0,
            "transcript": transcript,
            "message": "Transcript fetched successfully",
        }))
        .into_response(),
        Err(err) => error_response(&err),
    }
}
