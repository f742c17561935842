mod routes;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");
    let data_file = std::env::var("POKEDEX_DATA").unwrap_or_else(|_| "data/pokedex.json".into());

    let catalog = pokedex::Pokedex::load(&data_file).expect("catalog load failed");
    tracing::info!(entries = catalog.len(), %data_file, "catalog loaded");

    let state = state::AppState::new(catalog);

    let app = routes::leptos_app(state).expect("router build failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "pokedex listening");
    axum::serve(listener, app).await.expect("server failed");
}
