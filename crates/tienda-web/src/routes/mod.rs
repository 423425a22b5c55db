//! Route handlers.

pub mod frontend;
pub mod pedidos;
pub mod productos;
pub mod usuarios;

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// Error tuple every handler returns on failure.
pub(crate) type ApiError = (StatusCode, Json<Value>);

/// Convert a query-execution failure into the 500 contract: the failure
/// message is passed through verbatim in the JSON body. The alternate
/// format renders the whole context chain — the driver's own message must
/// survive, not just the outermost wrapper. Not-found never takes this
/// path; it is an empty success result.
pub(crate) fn query_error(err: anyhow::Error) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": format!("{err:#}") })),
    )
}

/// Wrap each entity under its Cypher return variable, the record shape the
/// front end unwraps (`[{"u": {...}}, ...]`).
pub(crate) fn keyed<T: serde::Serialize>(var: &str, entities: Vec<T>) -> Vec<Value> {
    entities
        .into_iter()
        .map(|entity| json!({ var: entity }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_exposes_message_verbatim() {
        let (status, Json(body)) = query_error(anyhow::anyhow!("Neo4j query failed: boom"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Neo4j query failed: boom");
    }

    #[test]
    fn test_query_error_keeps_driver_message_through_context_wrapping() {
        use anyhow::Context;

        let err = Err::<(), _>(anyhow::anyhow!("ConnectionError: broken pipe"))
            .context("Neo4j query failed")
            .unwrap_err();
        let (status, Json(body)) = query_error(err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let message = body["error"].as_str().unwrap();
        assert!(message.contains("Neo4j query failed"));
        assert!(message.contains("ConnectionError: broken pipe"));
    }

    #[test]
    fn test_keyed_wraps_each_entity_under_the_variable() {
        let records = keyed("p", vec![json!({"id": 1}), json!({"id": 2})]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["p"]["id"], 1);
        assert_eq!(records[1]["p"]["id"], 2);
    }

    #[test]
    fn test_keyed_of_nothing_is_an_empty_list() {
        let records = keyed("u", Vec::<Value>::new());
        assert!(records.is_empty());
    }
}
