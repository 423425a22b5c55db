//! Cypher statements for the store entities.
//!
//! Every HTTP operation maps to exactly one statement here. Missing ids are
//! never an error at this layer: a MATCH that finds nothing simply yields
//! zero rows, and deletes succeed whether or not a node existed.

pub mod pedidos;
pub mod productos;
pub mod usuarios;

use anyhow::Result;
use neo4rs::{Node, Query};
use serde::de::DeserializeOwned;

use crate::GraphClient;

/// Run a statement and decode the node bound to `var` in each row.
pub(crate) async fn collect_nodes<T: DeserializeOwned>(
    client: &GraphClient,
    var: &str,
    query: Query,
) -> Result<Vec<T>> {
    let rows = client.query(query).await?;
    let mut entities = Vec::with_capacity(rows.len());
    for row in rows {
        let node: Node = row
            .get(var)
            .map_err(|e| anyhow::anyhow!("missing return variable '{}': {}", var, e))?;
        let entity = node
            .to::<T>()
            .map_err(|e| anyhow::anyhow!("failed to decode '{}' node: {}", var, e))?;
        entities.push(entity);
    }
    Ok(entities)
}
