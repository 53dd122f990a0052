use std::sync::Arc;

use fucsia_leads_api::config::Config;
use fucsia_leads_api::handlers::AppState;
use fucsia_leads_api::routes::build_router;
use fucsia_leads_api::sink::TracingSink;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the application.
///
/// Initializes tracing, loads the configuration, wires the tracing-backed lead
/// sink into the application state and starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fucsia_leads_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    if config.destination_number.is_empty() {
        tracing::warn!("WHATSAPP_NUMBER not set; call-to-action buttons will point at the form");
    }

    let port = config.port;
    let app_state = Arc::new(AppState::new(config, Arc::new(TracingSink)));
    tracing::info!(
        "WhatsApp link: {}",
        app_state.contact_link.href_or(fucsia_leads_api::api::landing::CONTACT_ANCHOR)
    );

    let app = build_router(app_state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
