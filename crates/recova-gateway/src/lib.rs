// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Recova call orchestrator.
//!
//! Exposes the call-initiation pipeline, the telephony status webhook, and
//! transcript retrieval over axum, with the session registry linking the
//! telephony and voice-session identifier spaces.

pub mod handlers;
pub mod orchestrator;
pub mod registry;
pub mod server;

pub use orchestrator::{CallOutcome, initiate_collection_call, process_status_event};
pub use registry::{CallSession, SessionRegistry};
pub use server::{GatewayState, ServerConfig, build_router, start_server};
