//! Tienda Web Server
//!
//! Axum-based HTTP gateway over the store graph: each route translates one
//! request into one parameterized Cypher statement and passes the result
//! set through as JSON.

pub mod routes;
pub mod state;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Front end
        .route("/", get(routes::frontend::index))
        .route("/app.js", get(routes::frontend::app_js))
        // Usuarios
        .route("/usuarios", get(routes::usuarios::listar))
        .route("/usuarios", post(routes::usuarios::crear))
        .route("/usuarios/{id}", get(routes::usuarios::obtener))
        .route("/usuarios/{id}", put(routes::usuarios::actualizar))
        .route("/usuarios/{id}", delete(routes::usuarios::eliminar))
        // Productos
        .route("/productos", get(routes::productos::listar))
        .route("/productos", post(routes::productos::crear))
        .route("/buscar-productos", get(routes::productos::buscar))
        .route("/productos/{id}", get(routes::productos::obtener))
        .route("/productos/{id}", put(routes::productos::actualizar))
        .route("/productos/{id}", delete(routes::productos::eliminar))
        // Pedidos
        .route("/pedidos", get(routes::pedidos::listar))
        .route("/pedidos", post(routes::pedidos::crear))
        .route("/pedidos/{id}", get(routes::pedidos::obtener))
        .route("/pedidos/{id}", put(routes::pedidos::actualizar_estado))
        .route(
            "/pedidos/{id}/actualizar-estado",
            post(routes::pedidos::actualizar_estado_con_rol),
        )
        .route("/pedidos/{id}", delete(routes::pedidos::eliminar))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    tracing::info!("API listening on http://{host}:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}
