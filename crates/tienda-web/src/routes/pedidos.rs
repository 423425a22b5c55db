//! Order route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use tienda_core::{puede_actualizar_estado, LineaPedidoInput, PedidoExpandido};
use tienda_graph::queries::pedidos;

use super::{keyed, query_error, ApiError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CrearPedidoRequest {
    pub id: i64,
    #[serde(rename = "clienteId")]
    pub cliente_id: i64,
    pub productos: Vec<LineaPedidoInput>,
}

#[derive(Deserialize)]
pub struct ActualizarEstadoRequest {
    pub estado: String,
}

#[derive(Deserialize)]
pub struct ActualizarEstadoConRolRequest {
    pub estado: String,
    pub rol: String,
}

/// GET /pedidos — every order joined with its user and line items.
pub async fn listar(State(state): State<AppState>) -> Result<Json<Vec<PedidoExpandido>>, ApiError> {
    let filas = pedidos::listar(&state.graph).await.map_err(query_error)?;
    Ok(Json(filas))
}

/// GET /pedidos/{id} — an unknown id is an empty 200 list.
pub async fn obtener(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<PedidoExpandido>>, ApiError> {
    let filas = pedidos::obtener(&state.graph, id)
        .await
        .map_err(query_error)?;
    Ok(Json(filas))
}

/// POST /pedidos — one atomic statement anchored on the user match. Line
/// items whose product id does not resolve are dropped silently; a missing
/// user creates nothing at all.
pub async fn crear(
    State(state): State<AppState>,
    Json(req): Json<CrearPedidoRequest>,
) -> Result<(StatusCode, Json<Vec<Value>>), ApiError> {
    let creados = pedidos::crear(&state.graph, req.id, req.cliente_id, &req.productos)
        .await
        .map_err(query_error)?;
    Ok((StatusCode::CREATED, Json(keyed("o", creados))))
}

/// PUT /pedidos/{id} — set the order status, no role gate on this route.
pub async fn actualizar_estado(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<ActualizarEstadoRequest>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let actualizados = pedidos::actualizar_estado(&state.graph, id, &req.estado)
        .await
        .map_err(query_error)?;
    Ok(Json(keyed("o", actualizados)))
}

/// POST /pedidos/{id}/actualizar-estado — the one authorization check in
/// the gateway: the caller-supplied role string must be the privileged
/// value, rejected with 403 before any query runs.
pub async fn actualizar_estado_con_rol(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<ActualizarEstadoConRolRequest>,
) -> Result<Json<Vec<Value>>, ApiError> {
    if !puede_actualizar_estado(&req.rol) {
        return Err((
            StatusCode::FORBIDDEN,
            Json(json!({ "error": "Solo vendedores pueden actualizar pedidos" })),
        ));
    }

    let actualizados = pedidos::actualizar_estado(&state.graph, id, &req.estado)
        .await
        .map_err(query_error)?;
    Ok(Json(keyed("o", actualizados)))
}

/// DELETE /pedidos/{id} — 204 whether or not a node existed.
pub async fn eliminar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    pedidos::eliminar(&state.graph, id)
        .await
        .map_err(query_error)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crear_request_uses_camel_case_cliente_id() {
        let req: CrearPedidoRequest = serde_json::from_str(
            r#"{"id": 1, "clienteId": 7, "productos": [{"id": 3, "cantidad": 2, "precio_unitario": 9.99}]}"#,
        )
        .unwrap();
        assert_eq!(req.cliente_id, 7);
        assert_eq!(req.productos.len(), 1);
        assert_eq!(req.productos[0].cantidad, 2);
    }

    #[test]
    fn test_estado_con_rol_request_requires_both_fields() {
        let req: ActualizarEstadoConRolRequest =
            serde_json::from_str(r#"{"estado": "enviado", "rol": "cliente"}"#).unwrap();
        assert!(!puede_actualizar_estado(&req.rol));

        let missing: Result<ActualizarEstadoConRolRequest, _> =
            serde_json::from_str(r#"{"estado": "enviado"}"#);
        assert!(missing.is_err());
    }
}
