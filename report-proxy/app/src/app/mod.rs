pub mod router;
pub mod server;
pub mod state;
pub mod tracing;

use crate::config;
use crate::error::ProxyError;
use tokio_util::sync::CancellationToken;

/// Application entry point. Initializes tracing, configuration, and starts the server.
pub async fn run() -> Result<(), ProxyError> {
    // Handle healthcheck subcommand (for Docker healthcheck in distroless image)
    if std::env::args().nth(1).as_deref() == Some("healthcheck") {
        match crate::healthcheck().await {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("Healthcheck failed: {e}");
                std::process::exit(1)
            }
        }
    }

    tracing::init_tracing();

    let settings = config::get_configuration()?;
    ::tracing::info!(
        port = settings.http_port,
        model = %settings.gemini_model,
        api_key_configured = settings.has_api_key(),
        "Loaded settings"
    );
    if !settings.has_api_key() {
        ::tracing::warn!("GEMINI_API_KEY is not set; generate-report requests will fail");
    }

    let shutdown_token = CancellationToken::new();

    let app_state = state::AppState::from_settings(&settings)?;
    let app = router::main_router(app_state.report_service, &settings.static_dir);

    server::serve(app, settings.http_port, shutdown_token).await
}
