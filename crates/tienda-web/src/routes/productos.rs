//! Product route handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use tienda_graph::queries::productos;

use super::{keyed, query_error, ApiError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CrearProductoRequest {
    pub id: i64,
    pub nombre: String,
    pub precio: f64,
    pub stock: i64,
}

#[derive(Deserialize)]
pub struct ActualizarProductoRequest {
    pub nombre: String,
    pub precio: f64,
    pub stock: i64,
}

#[derive(Deserialize)]
pub struct BuscarParams {
    #[serde(default)]
    pub nombre: String,
}

/// GET /productos
pub async fn listar(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    let productos = productos::listar(&state.graph).await.map_err(query_error)?;
    Ok(Json(keyed("p", productos)))
}

/// GET /buscar-productos?nombre= — case-sensitive substring match.
pub async fn buscar(
    State(state): State<AppState>,
    Query(params): Query<BuscarParams>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let productos = productos::buscar(
        &state.graph,
        &params.nombre,
        state.config.busqueda_interpolada,
    )
    .await
    .map_err(query_error)?;
    Ok(Json(keyed("p", productos)))
}

/// GET /productos/{id} — an unknown id is an empty 200 list.
pub async fn obtener(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let productos = productos::obtener(&state.graph, id)
        .await
        .map_err(query_error)?;
    Ok(Json(keyed("p", productos)))
}

/// POST /productos — 201 with the created node.
pub async fn crear(
    State(state): State<AppState>,
    Json(req): Json<CrearProductoRequest>,
) -> Result<(StatusCode, Json<Vec<Value>>), ApiError> {
    let productos = productos::crear(&state.graph, req.id, &req.nombre, req.precio, req.stock)
        .await
        .map_err(query_error)?;
    Ok((StatusCode::CREATED, Json(keyed("p", productos))))
}

/// PUT /productos/{id} — full overwrite; unknown ids are an empty 200.
pub async fn actualizar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<ActualizarProductoRequest>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let productos = productos::actualizar(&state.graph, id, &req.nombre, req.precio, req.stock)
        .await
        .map_err(query_error)?;
    Ok(Json(keyed("p", productos)))
}

/// DELETE /productos/{id} — 204 whether or not a node existed.
pub async fn eliminar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    productos::eliminar(&state.graph, id)
        .await
        .map_err(query_error)?;
    Ok(StatusCode::NO_CONTENT)
}
