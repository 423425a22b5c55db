//! Cypher statements for `:Producto` nodes.

use anyhow::Result;
use neo4rs::Query;
use tracing::debug;

use tienda_core::Producto;

use super::collect_nodes;
use crate::GraphClient;

pub(crate) const LISTAR: &str = "MATCH (p:Producto) RETURN p";

pub(crate) const OBTENER: &str = "MATCH (p:Producto {id: $id}) RETURN p";

pub(crate) const BUSCAR: &str = "MATCH (p:Producto) WHERE p.nombre CONTAINS $nombre RETURN p";

pub(crate) const CREAR: &str = "CREATE (p:Producto {
    id: $id,
    nombre: $nombre,
    precio: $precio,
    stock: $stock,
    fecha_publicacion: date()
}) RETURN p";

pub(crate) const ACTUALIZAR: &str = "MATCH (p:Producto {id: $id})
SET p.nombre = $nombre,
    p.precio = $precio,
    p.stock = $stock
RETURN p";

pub(crate) const ELIMINAR: &str = "MATCH (p:Producto {id: $id}) DETACH DELETE p";

/// Build the name-search statement.
///
/// The interpolated form reproduces the store's historical injectable
/// statement verbatim and is only reachable through the explicit
/// `busqueda_interpolada` opt-in; the default is a parameterized CONTAINS.
pub(crate) fn buscar_cypher(nombre: &str, interpolada: bool) -> String {
    if interpolada {
        format!("MATCH (p:Producto) WHERE p.nombre CONTAINS '{nombre}' RETURN p")
    } else {
        BUSCAR.to_string()
    }
}

/// List every product node.
pub async fn listar(client: &GraphClient) -> Result<Vec<Producto>> {
    collect_nodes(client, "p", Query::new(LISTAR.to_string())).await
}

/// Fetch a product by id. A missing id yields an empty vec.
pub async fn obtener(client: &GraphClient, id: i64) -> Result<Vec<Producto>> {
    collect_nodes(client, "p", Query::new(OBTENER.to_string()).param("id", id)).await
}

/// Case-sensitive substring search on `nombre`.
pub async fn buscar(client: &GraphClient, nombre: &str, interpolada: bool) -> Result<Vec<Producto>> {
    let mut query = Query::new(buscar_cypher(nombre, interpolada));
    if !interpolada {
        query = query.param("nombre", nombre);
    }
    collect_nodes(client, "p", query).await
}

/// Create a product; `fecha_publicacion` is assigned by the database.
pub async fn crear(
    client: &GraphClient,
    id: i64,
    nombre: &str,
    precio: f64,
    stock: i64,
) -> Result<Vec<Producto>> {
    let query = Query::new(CREAR.to_string())
        .param("id", id)
        .param("nombre", nombre)
        .param("precio", precio)
        .param("stock", stock);

    let productos = collect_nodes(client, "p", query).await?;
    debug!(id, nombre, "created product");
    Ok(productos)
}

/// Overwrite the mutable product fields; unknown ids yield zero rows.
pub async fn actualizar(
    client: &GraphClient,
    id: i64,
    nombre: &str,
    precio: f64,
    stock: i64,
) -> Result<Vec<Producto>> {
    let query = Query::new(ACTUALIZAR.to_string())
        .param("id", id)
        .param("nombre", nombre)
        .param("precio", precio)
        .param("stock", stock);

    collect_nodes(client, "p", query).await
}

/// Detach-delete a product. Succeeds whether or not the node existed.
pub async fn eliminar(client: &GraphClient, id: i64) -> Result<()> {
    client
        .execute(Query::new(ELIMINAR.to_string()).param("id", id))
        .await?;
    debug!(id, "deleted product");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buscar_default_is_parameterized() {
        let cypher = buscar_cypher("Tel", false);
        assert!(cypher.contains("CONTAINS $nombre"));
        assert!(!cypher.contains("Tel"));
    }

    #[test]
    fn test_buscar_legacy_interpolates_caller_input() {
        // The opt-in legacy statement splices the input into the query
        // text, injection included. It exists for migration fidelity only.
        let cypher = buscar_cypher("Tel", true);
        assert!(cypher.contains("CONTAINS 'Tel'"));

        let hostile = buscar_cypher("' RETURN p //", true);
        assert!(hostile.contains("' RETURN p //"));
    }

    #[test]
    fn test_crear_assigns_publication_date_server_side() {
        assert!(CREAR.contains("fecha_publicacion: date()"));
        assert!(CREAR.contains("$precio"));
        assert!(CREAR.contains("$stock"));
    }

    #[test]
    fn test_eliminar_detaches_relationships() {
        assert!(ELIMINAR.contains("DETACH DELETE p"));
    }
}
