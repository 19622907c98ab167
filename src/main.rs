use item_store_rust::item::AppState;
use item_store_rust::router::create_app_router;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt().init();

    // Initialize application state
    let state = Arc::new(AppState::new());

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Configure the server address
    let addr = SocketAddr::from(([0, 0, 0, 0], 5000));
    info!("Server running on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
