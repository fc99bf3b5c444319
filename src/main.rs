use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use practika::server::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let identity = startup::build_identity_client(&config).unwrap();
    let db = startup::connect_to_database(&config).await.unwrap();

    let routes = router::routes(AppState { db, identity }).layer(CorsLayer::permissive());

    let address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&address).await.unwrap();

    tracing::info!("Listening on {}", address);

    axum::serve(listener, routes).await.unwrap();
}
