//! Cypher statements for `:Pedido` nodes and their relationships.
//!
//! Orders hang off users via `REALIZA` and reference products via
//! `CONTIENTE` edges carrying `cantidad` and `precio_unitario`.

use anyhow::Result;
use neo4rs::{BoltMap, BoltString, BoltType, Node, Query, Relation};
use tracing::debug;

use tienda_core::{LineaPedido, LineaPedidoInput, Pedido, PedidoExpandido, Producto, Usuario};

use super::collect_nodes;
use crate::GraphClient;

pub(crate) const LISTAR: &str = "MATCH (c:Usuario)-[:REALIZA]->(o:Pedido)-[r:CONTIENTE]->(p:Producto)
RETURN c, o, r, p";

pub(crate) const OBTENER: &str = "MATCH (c:Usuario)-[:REALIZA]->(o:Pedido {id: $id})-[r:CONTIENTE]->(p:Producto)
RETURN c, o, r, p";

/// Order creation is one multi-part statement so the order node, its
/// `REALIZA` edge and the `CONTIENTE` edges commit together. The leading
/// MATCH anchors everything on the user: no matching user, nothing created.
/// The per-item MATCH inside the UNWIND silently drops line items whose
/// product id does not resolve — the order is still created with the rest.
/// Both behaviors are part of the contract, not accidents.
pub(crate) const CREAR: &str = "MATCH (c:Usuario {id: $clienteId})
CREATE (o:Pedido {
    id: $id,
    estado: 'pendiente',
    fecha_pedido: date()
})
CREATE (c)-[:REALIZA]->(o)
WITH o
UNWIND $productos AS prod
MATCH (p:Producto {id: prod.id})
CREATE (o)-[:CONTIENTE {
    cantidad: prod.cantidad,
    precio_unitario: prod.precio_unitario
}]->(p)
RETURN o";

pub(crate) const ACTUALIZAR_ESTADO: &str = "MATCH (o:Pedido {id: $id})
SET o.estado = $estado
RETURN o";

pub(crate) const ELIMINAR: &str = "MATCH (o:Pedido {id: $id}) DETACH DELETE o";

/// List every order joined with its placing user and all line items.
pub async fn listar(client: &GraphClient) -> Result<Vec<PedidoExpandido>> {
    collect_expandido(client, Query::new(LISTAR.to_string())).await
}

/// Fetch one order with its relations; a missing id yields an empty vec.
pub async fn obtener(client: &GraphClient, id: i64) -> Result<Vec<PedidoExpandido>> {
    collect_expandido(client, Query::new(OBTENER.to_string()).param("id", id)).await
}

/// Create an order for a user with the given line items.
///
/// Returns one row per resolved line item. Note that an order created with
/// zero resolvable products comes back as an empty vec even though the
/// order node exists.
pub async fn crear(
    client: &GraphClient,
    id: i64,
    cliente_id: i64,
    productos: &[LineaPedidoInput],
) -> Result<Vec<Pedido>> {
    let query = Query::new(CREAR.to_string())
        .param("id", id)
        .param("clienteId", cliente_id)
        .param("productos", lineas_param(productos));

    let pedidos = collect_nodes(client, "o", query).await?;
    debug!(id, cliente_id, lineas = productos.len(), "created order");
    Ok(pedidos)
}

/// Set the order status; unknown ids yield zero rows.
pub async fn actualizar_estado(client: &GraphClient, id: i64, estado: &str) -> Result<Vec<Pedido>> {
    let query = Query::new(ACTUALIZAR_ESTADO.to_string())
        .param("id", id)
        .param("estado", estado);

    collect_nodes(client, "o", query).await
}

/// Detach-delete an order. Succeeds whether or not the node existed.
pub async fn eliminar(client: &GraphClient, id: i64) -> Result<()> {
    client
        .execute(Query::new(ELIMINAR.to_string()).param("id", id))
        .await?;
    debug!(id, "deleted order");
    Ok(())
}

/// Convert the line items into the bolt list-of-maps the UNWIND consumes.
fn lineas_param(productos: &[LineaPedidoInput]) -> Vec<BoltType> {
    productos
        .iter()
        .map(|linea| {
            BoltType::Map(BoltMap::from_iter(vec![
                (BoltString::from("id"), linea.id.into()),
                (BoltString::from("cantidad"), linea.cantidad.into()),
                (
                    BoltString::from("precio_unitario"),
                    linea.precio_unitario.into(),
                ),
            ]))
        })
        .collect()
}

async fn collect_expandido(client: &GraphClient, query: Query) -> Result<Vec<PedidoExpandido>> {
    let rows = client.query(query).await?;
    let mut pedidos = Vec::with_capacity(rows.len());
    for row in rows {
        let cliente: Node = row
            .get("c")
            .map_err(|e| anyhow::anyhow!("missing return variable 'c': {}", e))?;
        let pedido: Node = row
            .get("o")
            .map_err(|e| anyhow::anyhow!("missing return variable 'o': {}", e))?;
        let linea: Relation = row
            .get("r")
            .map_err(|e| anyhow::anyhow!("missing return variable 'r': {}", e))?;
        let producto: Node = row
            .get("p")
            .map_err(|e| anyhow::anyhow!("missing return variable 'p': {}", e))?;

        pedidos.push(PedidoExpandido {
            c: cliente
                .to::<Usuario>()
                .map_err(|e| anyhow::anyhow!("failed to decode 'c' node: {}", e))?,
            o: pedido
                .to::<Pedido>()
                .map_err(|e| anyhow::anyhow!("failed to decode 'o' node: {}", e))?,
            r: linea
                .to::<LineaPedido>()
                .map_err(|e| anyhow::anyhow!("failed to decode 'r' relationship: {}", e))?,
            p: producto
                .to::<Producto>()
                .map_err(|e| anyhow::anyhow!("failed to decode 'p' node: {}", e))?,
        });
    }
    Ok(pedidos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crear_anchors_on_user_match_before_any_create() {
        let match_pos = CREAR.find("MATCH (c:Usuario {id: $clienteId})").unwrap();
        let create_pos = CREAR.find("CREATE (o:Pedido").unwrap();
        assert!(match_pos < create_pos);
    }

    #[test]
    fn test_crear_is_a_single_statement_with_per_item_match() {
        // One statement: order node, REALIZA edge and line-item edges are
        // atomic. The MATCH inside the UNWIND is what drops unresolvable
        // line items without failing the order.
        assert!(CREAR.contains("UNWIND $productos AS prod"));
        let unwind_pos = CREAR.find("UNWIND").unwrap();
        let item_match_pos = CREAR.find("MATCH (p:Producto {id: prod.id})").unwrap();
        assert!(unwind_pos < item_match_pos);
        assert!(CREAR.contains("estado: 'pendiente'"));
        assert!(CREAR.contains("fecha_pedido: date()"));
    }

    #[test]
    fn test_crear_sets_line_item_edge_properties() {
        assert!(CREAR.contains("cantidad: prod.cantidad"));
        assert!(CREAR.contains("precio_unitario: prod.precio_unitario"));
    }

    #[test]
    fn test_lineas_param_builds_one_map_per_item() {
        let lineas = vec![
            LineaPedidoInput {
                id: 1,
                cantidad: 2,
                precio_unitario: 9.99,
            },
            LineaPedidoInput {
                id: 2,
                cantidad: 1,
                precio_unitario: 4.5,
            },
        ];
        let param = lineas_param(&lineas);
        assert_eq!(param.len(), 2);
        assert!(matches!(param[0], BoltType::Map(_)));
    }

    #[test]
    fn test_eliminar_detaches_relationships() {
        assert!(ELIMINAR.contains("DETACH DELETE o"));
    }
}
