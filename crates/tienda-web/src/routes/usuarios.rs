//! User route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use tienda_graph::queries::usuarios;

use super::{keyed, query_error, ApiError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CrearUsuarioRequest {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    pub rol: String,
}

#[derive(Deserialize)]
pub struct ActualizarUsuarioRequest {
    pub nombre: String,
    pub email: String,
    pub rol: String,
}

/// GET /usuarios
pub async fn listar(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    let usuarios = usuarios::listar(&state.graph).await.map_err(query_error)?;
    Ok(Json(keyed("u", usuarios)))
}

/// GET /usuarios/{id} — an unknown id is an empty 200 list, never a 404.
pub async fn obtener(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let usuarios = usuarios::obtener(&state.graph, id)
        .await
        .map_err(query_error)?;
    Ok(Json(keyed("u", usuarios)))
}

/// POST /usuarios — 201 with the created node.
pub async fn crear(
    State(state): State<AppState>,
    Json(req): Json<CrearUsuarioRequest>,
) -> Result<(StatusCode, Json<Vec<Value>>), ApiError> {
    let usuarios = usuarios::crear(&state.graph, req.id, &req.nombre, &req.email, &req.rol)
        .await
        .map_err(query_error)?;
    Ok((StatusCode::CREATED, Json(keyed("u", usuarios))))
}

/// PUT /usuarios/{id} — full overwrite of the mutable fields; an unknown
/// id is a silent no-op returning an empty 200.
pub async fn actualizar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<ActualizarUsuarioRequest>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let usuarios = usuarios::actualizar(&state.graph, id, &req.nombre, &req.email, &req.rol)
        .await
        .map_err(query_error)?;
    Ok(Json(keyed("u", usuarios)))
}

/// DELETE /usuarios/{id} — detach-delete; 204 whether or not a node existed.
pub async fn eliminar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    usuarios::eliminar(&state.graph, id)
        .await
        .map_err(query_error)?;
    Ok(StatusCode::NO_CONTENT)
}
