mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to read .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let port = config.port;
    if config.maptiler_key.is_none() {
        tracing::warn!("MAPTILER_KEY not set, map view disabled");
    }

    let state = state::AppState::new(config);
    let _sweeper = services::session::spawn_sweeper(state.sessions.clone());

    let app = routes::leptos_app(state).expect("leptos configuration failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "fleet dashboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
