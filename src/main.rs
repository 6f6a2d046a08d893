//! OKIT Boost server binary.
//!
//! Loads configuration from the environment, wires the REST adapters for the
//! hosted backend and serves the storefront routes.

use std::sync::Arc;

use http::Method;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use okit_boost::adapters::http::{app_router, AppState};
use okit_boost::adapters::rest::{
    RestAuthClient, RestCatalogRepository, RestClient, RestProfileReader,
    RestTrialRequestRepository,
};
use okit_boost::config::{AppConfig, ServerConfig, ValidationError};

fn init_logging(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(server.log_filter()));

    let registry = tracing_subscriber::registry().with(filter);
    if server.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).compact())
            .init();
    }
}

fn cors_layer(server: &ServerConfig) -> Result<CorsLayer, ValidationError> {
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(server.allowed_origins()?))
        .allow_methods([Method::GET, Method::PATCH, Method::DELETE])
        .allow_headers([http::header::AUTHORIZATION, http::header::CONTENT_TYPE])
        .allow_credentials(true))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_logging(&config.server);
    config.validate()?;

    let client = RestClient::new(&config.backend)?;
    let auth_client = Arc::new(RestAuthClient::new(client.clone()));

    let state = AppState {
        catalog: Arc::new(RestCatalogRepository::new(client.clone())),
        trial_requests: Arc::new(RestTrialRequestRepository::new(client.clone())),
        profiles: Arc::new(RestProfileReader::new(client)),
        session_validator: auth_client.clone(),
        auth_exchanger: auth_client,
        auth: config.auth.clone(),
    };

    let app = app_router(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server)?)
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        backend = config.backend.base_url(),
        "OKIT Boost listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
