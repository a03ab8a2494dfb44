#![recursion_limit = "256"]

mod config;
mod db;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    if config.auth_bypass {
        tracing::warn!("CHEMINV_AUTH_BYPASS is on; every sign-in uses the testing profile");
    } else if config.oidc.is_none() {
        tracing::warn!("OIDC not configured; sign-in disabled");
    }

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    let http = reqwest::Client::builder()
        .user_agent(concat!("chemical-inventory/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("http client init failed");

    let port = config.port;
    let state = state::AppState::new(pool, config, http);

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "chemical inventory listening");
    axum::serve(listener, app).await.expect("server failed");
}
