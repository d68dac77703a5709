//! Twilio-compatible SMS/WhatsApp webhook.
//!
//! Every inbound POST is one message. The reply is always a 200 TwiML
//! envelope, except when signature validation is enabled and fails.

use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::{OriginalUri, State, rejection::FormRejection},
    http::{HeaderMap, StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use secrecy::ExposeSecret;
use tracing::{debug, warn};

use super::codec;
use super::twilio;
use crate::config::TwilioConfig;
use crate::dialog::DialogEngine;

/// Header carrying Twilio's request signature.
pub const SIGNATURE_HEADER: &str = "x-twilio-signature";

/// Scheme of the original request when behind a TLS-terminating proxy.
const FORWARDED_PROTO_HEADER: &str = "x-forwarded-proto";

/// Application state shared across handlers.
#[derive(Clone)]
pub struct WebhookState {
    pub engine: Arc<DialogEngine>,
    pub max_message_len: usize,
    pub twilio: TwilioConfig,
}

/// Build the Axum router with webhook and health routes.
pub fn webhook_routes(state: WebhookState) -> Router {
    Router::new()
        .route("/webhook", post(inbound))
        .route("/api/whatsapp/webhook", post(inbound))
        .route("/health", get(health))
        .with_state(state)
}

// ── Health ──────────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "agri-assist"
    }))
}

// ── Inbound messages ────────────────────────────────────────────────────

/// The fields the dialog needs from a Twilio form post.
#[derive(Debug, Default, PartialEq, Eq)]
struct InboundMessage {
    sender: String,
    text: String,
}

impl InboundMessage {
    /// `ButtonPayload` wins over `Body` when both are present.
    fn from_params(params: &[(String, String)]) -> Self {
        let field = |name: &str| {
            params
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
        };
        let text = field("ButtonPayload")
            .filter(|v| !v.trim().is_empty())
            .or_else(|| field("Body"))
            .unwrap_or("")
            .to_string();
        Self {
            sender: twilio::normalize_address(field("From")),
            text,
        }
    }
}

fn twiml(body: String) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/xml; charset=utf-8")],
        body,
    )
        .into_response()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// URLs Twilio may have signed for this request.
///
/// A configured public URL is authoritative. Otherwise the URL is rebuilt
/// from the `Host` header and the request path and query. Without
/// `X-Forwarded-Proto` the scheme is unknown, so `https` and `http` are
/// both tried.
fn signed_url_candidates(config: &TwilioConfig, headers: &HeaderMap, uri: &Uri) -> Vec<String> {
    if let Some(url) = &config.webhook_url {
        return vec![url.clone()];
    }
    let Some(host) = header_str(headers, header::HOST.as_str()).or_else(|| uri.authority().map(|a| a.as_str())) else {
        return Vec::new();
    };
    let path = uri.path_and_query().map_or("/", |p| p.as_str());
    let schemes = match header_str(headers, FORWARDED_PROTO_HEADER) {
        Some(proto) => vec![proto.split(',').next().unwrap_or(proto).trim()],
        None => vec!["https", "http"],
    };
    schemes
        .into_iter()
        .map(|scheme| format!("{scheme}://{host}{path}"))
        .collect()
}

fn signature_ok(config: &TwilioConfig, headers: &HeaderMap, uri: &Uri, params: &[(String, String)]) -> bool {
    let Some(token) = config.auth_token.as_ref() else {
        return false;
    };
    let signature = header_str(headers, SIGNATURE_HEADER);
    signed_url_candidates(config, headers, uri)
        .iter()
        .any(|url| twilio::is_valid_signature(token.expose_secret(), url, params, signature))
}

async fn inbound(
    State(state): State<WebhookState>,
    headers: HeaderMap,
    OriginalUri(uri): OriginalUri,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Response {
    let params = match form {
        Ok(Form(params)) => params,
        Err(e) => {
            debug!(error = %e, "Unreadable webhook body, treating as empty message");
            Vec::new()
        }
    };

    if state.twilio.validate_signature && !signature_ok(&state.twilio, &headers, &uri, &params) {
        warn!(uri = %uri, "Rejected webhook with invalid signature");
        return (StatusCode::FORBIDDEN, "Invalid signature").into_response();
    }

    let message = InboundMessage::from_params(&params);
    debug!(sender = %message.sender, "Inbound message");

    let reply = state.engine.handle(&message.sender, &message.text).await;
    twiml(codec::encode_reply(&reply.text, state.max_message_len))
}
