// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the call orchestrator.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use recova_core::RecovaError;
use recova_crm::{CrmClient, NormalizerDefaults};
use recova_telephony::TelephonyClient;
use recova_voice::{TranscriptStore, VoiceClient, VoiceSettings};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::registry::SessionRegistry;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    pub crm: CrmClient,
    pub voice: VoiceClient,
    pub telephony: TelephonyClient,
    pub store: TranscriptStore,
    pub registry: Arc<SessionRegistry>,
    /// Fallbacks applied while normalizing CRM records.
    pub defaults: NormalizerDefaults,
    /// Fixed session settings submitted with every voice provisioning request.
    pub voice_settings: VoiceSettings,
    /// Public URL the telephony provider POSTs status events to.
    pub status_callback_url: String,
}

/// Gateway server configuration (mirrors ServerConfig from recova-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Builds the gateway router over the shared state.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .route("/fetch-contact", get(handlers::get_fetch_contact))
        .route("/initiate-call", post(handlers::post_initiate_call))
        .route("/call-status", post(handlers::post_call_status))
        .route("/end-call", post(handlers::post_end_call))
        .route("/end-call/{call_sid}", post(handlers::post_end_call_sid))
        .route(
            "/fetch-transcript/{call_id}",
            get(handlers::get_fetch_transcript),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the gateway HTTP server.
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), RecovaError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener =
        tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| RecovaError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| RecovaError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}
