use axum::{Router, http::header, routing::get};
use pollenhive::api::{handlers::api_routes, openapi::ApiDoc};
use pollenhive::config::CONFIG;
use pollenhive::infrastructure::sms::arkesel::ArkeselClient;
use pollenhive::{InMemoryLogging, InMemoryStorage, PollenHiveService};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&CONFIG.log_level)))
        .init();
    info!(config = ?*CONFIG, "Starting PollenHive");

    if CONFIG.uses_default_jwt_secret() {
        tracing::warn!("SUPABASE_JWT_SECRET is not set; bearer tokens are checked against an insecure default secret");
    }
    if CONFIG.arkesel_api_key.is_empty() {
        tracing::warn!("ARKESEL_API_KEY is not set; OTP requests will be rejected by the provider");
    }

    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    let otp = ArkeselClient::new(
        CONFIG.arkesel_api_key.clone(),
        CONFIG.arkesel_sender_id.clone(),
        CONFIG.arkesel_base_url.clone(),
    )?;
    let service = Arc::new(PollenHiveService::new(
        storage,
        logging,
        otp,
        CONFIG.otp_settings(),
        CONFIG.jwt_secret.clone(),
    ));

    let app = Router::new()
        .route("/", get(|| async { "OK" }))
        .nest("/api", api_routes(service))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(CONFIG.request_timeout_secs)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    http::Method::GET,
                    http::Method::POST,
                    http::Method::PUT,
                    http::Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
