//! Interaction endpoint handlers.
//!
//! Each request is handled independently and synchronously within one
//! request/response cycle:
//! 1. Verify the Ed25519 signature over the raw body
//! 2. Dispatch on interaction type and command
//! 3. Reply with the composed interaction response
//!
//! No interaction or firewall state survives the request.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use ed25519_dalek::VerifyingKey;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::firewall::{add_address, DoClient};
use crate::interaction::response::{greeting, whitelist_failure, whitelist_reply};
use crate::interaction::{Command, Interaction, InteractionResponse, InteractionType};
use crate::web::signature::{verify_signature, SIGNATURE_HEADER, TIMESTAMP_HEADER};
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub verifying_key: VerifyingKey,
    pub do_client: Arc<DoClient>,
    /// Serializes the firewall fetch-check-update sequence across requests
    pub update_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(config: Config, verifying_key: VerifyingKey, do_client: DoClient) -> Self {
        Self {
            config: Arc::new(config),
            verifying_key,
            do_client: Arc::new(do_client),
            update_lock: Arc::new(Mutex::new(())),
        }
    }
}

/// Error body for rejected requests.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// Liveness response for `GET /bot/test`.
#[derive(Serialize)]
pub struct TestResponse {
    pub data: TestContent,
}

#[derive(Serialize)]
pub struct TestContent {
    pub content: &'static str,
}

/// Liveness endpoint.
pub async fn test() -> Json<TestResponse> {
    Json(TestResponse {
        data: TestContent {
            content: "Hello world!",
        },
    })
}

/// Interaction endpoint: `POST /bot/interactions`.
///
/// The raw body is required for signature verification, so the payload is
/// parsed only after the signature gate passes.
pub async fn interactions(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    // Signature gate; the dispatcher never runs on an unverified request
    let signature = header_str(&headers, SIGNATURE_HEADER);
    let timestamp = header_str(&headers, TIMESTAMP_HEADER);

    let verified = match (signature, timestamp) {
        (Some(signature), Some(timestamp)) => {
            verify_signature(&state.verifying_key, signature, timestamp, &body)
        }
        _ => {
            warn!("interaction_signature_headers_missing");
            false
        }
    };

    if !verified {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorBody {
                error: "invalid request signature",
            }),
        )
            .into_response();
    }

    let interaction: Interaction = match serde_json::from_slice(&body) {
        Ok(interaction) => interaction,
        Err(e) => {
            warn!(error = %e, "interaction_body_malformed");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "malformed interaction",
                }),
            )
                .into_response();
        }
    };

    match interaction.kind {
        InteractionType::Ping => {
            info!("interaction_ping");
            Json(InteractionResponse::pong()).into_response()
        }
        InteractionType::ApplicationCommand => dispatch_command(&state, interaction).await,
        other => {
            error!(interaction_type = ?other, "interaction_type_unknown");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "unknown interaction type",
                }),
            )
                .into_response()
        }
    }
}

/// Route an application-command interaction to its handler.
async fn dispatch_command(state: &AppState, interaction: Interaction) -> Response {
    let data = match interaction.data {
        Some(data) => data,
        None => {
            error!("interaction_command_without_data");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "unknown command",
                }),
            )
                .into_response();
        }
    };

    let command = match Command::parse(&data.name) {
        Some(command) => command,
        None => {
            error!(command = %data.name, "interaction_command_unknown");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "unknown command",
                }),
            )
                .into_response();
        }
    };

    info!(command = command.name(), "interaction_command_received");

    match command {
        Command::Test => Json(greeting()).into_response(),
        Command::AddMinecraftIp => {
            // A missing option falls through validation as an empty string
            let raw_address = data
                .options
                .first()
                .map(|option| option.value.as_str())
                .unwrap_or_default();

            let outcome = add_address(
                &state.do_client,
                &state.config.firewall_name,
                raw_address,
                &state.update_lock,
            )
            .await;

            let reply = match outcome {
                Ok(outcome) => {
                    whitelist_reply(&outcome, state.config.admin_mention.as_deref())
                }
                Err(e) => {
                    // Detail stays server-side; the channel gets a generic reply
                    error!(error = %e, "whitelist_command_failed");
                    whitelist_failure()
                }
            };

            Json(reply).into_response()
        }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
