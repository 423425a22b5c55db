//! Cypher statements for `:Usuario` nodes.

use anyhow::Result;
use neo4rs::Query;
use tracing::debug;

use tienda_core::Usuario;

use super::collect_nodes;
use crate::GraphClient;

pub(crate) const LISTAR: &str = "MATCH (u:Usuario) RETURN u";

pub(crate) const OBTENER: &str = "MATCH (u:Usuario {id: $id}) RETURN u";

pub(crate) const CREAR: &str = "CREATE (u:Usuario {
    id: $id,
    nombre: $nombre,
    email: $email,
    rol: $rol,
    fecha_registro: date()
}) RETURN u";

pub(crate) const ACTUALIZAR: &str = "MATCH (u:Usuario {id: $id})
SET u.nombre = $nombre,
    u.email = $email,
    u.rol = $rol
RETURN u";

pub(crate) const ELIMINAR: &str = "MATCH (u:Usuario {id: $id}) DETACH DELETE u";

/// List every user node.
pub async fn listar(client: &GraphClient) -> Result<Vec<Usuario>> {
    collect_nodes(client, "u", Query::new(LISTAR.to_string())).await
}

/// Fetch a user by id. A missing id yields an empty vec, not an error.
pub async fn obtener(client: &GraphClient, id: i64) -> Result<Vec<Usuario>> {
    collect_nodes(client, "u", Query::new(OBTENER.to_string()).param("id", id)).await
}

/// Create a user; `fecha_registro` is assigned by the database. Ids are
/// caller-supplied and not constraint-checked, so a duplicate id creates a
/// second node.
pub async fn crear(
    client: &GraphClient,
    id: i64,
    nombre: &str,
    email: &str,
    rol: &str,
) -> Result<Vec<Usuario>> {
    let query = Query::new(CREAR.to_string())
        .param("id", id)
        .param("nombre", nombre)
        .param("email", email)
        .param("rol", rol);

    let usuarios = collect_nodes(client, "u", query).await?;
    debug!(id, nombre, "created user");
    Ok(usuarios)
}

/// Overwrite the mutable user fields. No matching id means zero rows back,
/// which the HTTP layer reports as an empty success.
pub async fn actualizar(
    client: &GraphClient,
    id: i64,
    nombre: &str,
    email: &str,
    rol: &str,
) -> Result<Vec<Usuario>> {
    let query = Query::new(ACTUALIZAR.to_string())
        .param("id", id)
        .param("nombre", nombre)
        .param("email", email)
        .param("rol", rol);

    collect_nodes(client, "u", query).await
}

/// Detach-delete a user. Succeeds whether or not the node existed.
pub async fn eliminar(client: &GraphClient, id: i64) -> Result<()> {
    client
        .execute(Query::new(ELIMINAR.to_string()).param("id", id))
        .await?;
    debug!(id, "deleted user");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crear_assigns_registration_date_server_side() {
        assert!(CREAR.contains("fecha_registro: date()"));
        assert!(CREAR.contains("RETURN u"));
        // All caller fields are parameters, never interpolated.
        for param in ["$id", "$nombre", "$email", "$rol"] {
            assert!(CREAR.contains(param));
        }
    }

    #[test]
    fn test_actualizar_is_match_then_set() {
        // MATCH-then-SET means an unknown id updates nothing and returns
        // zero rows instead of failing.
        assert!(ACTUALIZAR.starts_with("MATCH (u:Usuario {id: $id})"));
        assert!(ACTUALIZAR.contains("SET u.nombre = $nombre"));
    }

    #[test]
    fn test_eliminar_detaches_relationships() {
        assert!(ELIMINAR.contains("DETACH DELETE u"));
    }
}
