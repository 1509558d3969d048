mod config;
mod db;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env is normal in production; real env vars still apply.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    if config.github.is_none() {
        tracing::warn!("GitHub OAuth not configured; sign-in disabled");
    }

    let pool = db::init_pool(&config.database_url, &config.db)
        .await
        .expect("database init failed");
    tracing::info!(max_connections = config.db.max_connections, "database ready");

    let state = state::AppState::new(pool, config.github.clone(), config.cookie_secure);

    let _sweeper = services::session::spawn_session_sweeper(state.pool.clone(), config.session_sweep_interval);

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "barberia listening");
    axum::serve(listener, app).await.expect("server failed");
}
