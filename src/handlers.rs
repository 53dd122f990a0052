use crate::config::Config;
use crate::contact_link::ContactLinkBuilder;
use crate::errors::AppError;
use crate::models::{LeadForm, LeadSubmission, LEAD_SUCCESS_LOCATION};
use crate::sink::LeadSink;
use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Request, State},
    http::{header, HeaderMap, StatusCode},
    response::Redirect,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

/// Header carrying the original client address when behind a proxy.
pub const FORWARDED_FOR: &str = "x-forwarded-for";

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// WhatsApp link for call-to-action elements, resolved once from `config`.
    pub contact_link: ContactLinkBuilder,
    /// Where captured leads are recorded.
    pub sink: Arc<dyn LeadSink>,
}

impl AppState {
    pub fn new(config: Config, sink: Arc<dyn LeadSink>) -> Self {
        let contact_link = ContactLinkBuilder::from_config(&config);
        Self {
            config,
            contact_link,
            sink,
        }
    }
}

/// Health check endpoint.
///
/// Returns the service status and version.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "fucsia-leads-api",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// POST /api/lead
///
/// Receives the landing page contact form, either URL-encoded (plain `<form>`
/// post) or `multipart/form-data` (`fetch` with a `FormData` body). Fields are
/// taken as-is (missing ones become empty strings), stamped with the receipt time
/// and client headers, and recorded once in the sink. The browser is always sent
/// back to `/?ok=1` with a 303 so it reloads the page with a GET.
///
/// Only a failure to read the body itself fails the request; nothing is recorded
/// in that case.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `request` - The raw request; headers are read before the body is consumed.
pub async fn submit_lead(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Redirect, AppError> {
    let user_agent = header_text(request.headers(), header::USER_AGENT.as_str());
    let source_address = header_text(request.headers(), FORWARDED_FOR);

    let form = if is_multipart(request.headers()) {
        let multipart = Multipart::from_request(request, &state).await?;
        LeadForm::from_multipart(multipart).await?
    } else {
        let body = Bytes::from_request(request, &state).await?;
        LeadForm::from_urlencoded(&body)
    };

    let lead = LeadSubmission::new(form, user_agent, source_address, Utc::now());

    // The visitor is redirected even if the sink is down.
    if let Err(e) = state.sink.record(&lead) {
        tracing::warn!("Failed to record lead from {:?}: {}", lead.source_address(), e);
    }

    Ok(Redirect::to(LEAD_SUCCESS_LOCATION))
}

/// Response body for `GET /api/contact-link`.
#[derive(Debug, Serialize)]
pub struct ContactLinkResponse {
    /// WhatsApp deep link, or `None` when no number is configured.
    pub href: Option<String>,
    pub has_destination: bool,
}

/// GET /api/contact-link
///
/// Exposes the WhatsApp link for client-rendered call-to-action buttons.
pub async fn contact_link(State(state): State<Arc<AppState>>) -> Json<ContactLinkResponse> {
    let has_destination = state.contact_link.has_destination();
    Json(ContactLinkResponse {
        href: has_destination.then(|| state.contact_link.build_contact_link()),
        has_destination,
    })
}

/// Header value as text, lossily decoded; empty when the header is absent.
///
/// Repeated header lines are joined with `", "`, so every proxy hop in
/// `X-Forwarded-For` is kept.
fn header_text(headers: &HeaderMap, name: &str) -> String {
    headers
        .get_all(name)
        .iter()
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            value
                .trim_start()
                .to_ascii_lowercase()
                .starts_with("multipart/form-data")
        })
        .unwrap_or(false)
}
