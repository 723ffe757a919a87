mod colormode;
mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let config = config::AppConfig::from_env().expect("invalid configuration");
    match config.default_mode {
        Some(mode) => tracing::info!(%mode, "default color mode configured"),
        None => tracing::info!("no default color mode — first-time clients stay unset"),
    }

    let state = state::AppState::new(config);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "dusk listening");
    axum::serve(listener, app).await.expect("server failed");
}
