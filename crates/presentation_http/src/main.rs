//! Skycast HTTP server
//!
//! Main entry point for the dashboard API server.

use std::{sync::Arc, time::Duration};

use ai_core::OllamaInferenceEngine;
use application::{ConditionStylist, SuggestionService, WeatherService};
use infrastructure::{AppConfig, GeocodingAdapter, InferenceAdapter, WeatherAdapter};
use integration_openweather::OpenWeatherClient;
use presentation_http::{routes, set_expose_internal_errors, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skycast_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Skycast v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        environment = %config.environment,
        "Configuration loaded"
    );

    set_expose_internal_errors(config.environment.expose_error_details());

    // Initialize the OpenWeatherMap client shared by weather and geocoding
    let openweather = Arc::new(
        OpenWeatherClient::new(config.openweather.to_client_config())
            .map_err(|e| anyhow::anyhow!("Failed to initialize weather client: {e}"))?,
    );

    // Initialize the inference engine for condition phrasing
    let inference_engine = OllamaInferenceEngine::new(config.inference.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize inference: {e}"))?;

    // Initialize services behind their ports
    let weather_service = WeatherService::new(Arc::new(WeatherAdapter::new(Arc::clone(
        &openweather,
    ))));
    let suggestion_service = SuggestionService::new(Arc::new(GeocodingAdapter::new(Arc::clone(
        &openweather,
    ))))
    .with_limit(config.openweather.suggestion_limit);
    let condition_stylist =
        ConditionStylist::new(Arc::new(InferenceAdapter::new(Arc::new(inference_engine))));

    let config = Arc::new(config);
    let state = AppState {
        weather_service: Arc::new(weather_service),
        suggestion_service: Arc::new(suggestion_service),
        condition_stylist: Arc::new(condition_stylist),
        config: Arc::clone(&config),
    };

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production mode: restrict to configured origins
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    };

    // Add middleware (order matters: first added = outermost)
    let app = app.layer(TraceLayer::new_for_http()).layer(cors_layer);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    // Graceful shutdown configuration
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
    // The actual connection draining is handled by axum's graceful_shutdown
}
