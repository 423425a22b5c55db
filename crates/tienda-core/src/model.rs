//! Store entity models.
//!
//! Field names match the graph property names (the store schema uses
//! Spanish vocabulary), so nodes deserialize directly and JSON responses
//! expose the same names the front end expects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Role allowed to change an order's `estado`.
pub const ROL_VENDEDOR: &str = "vendedor";

/// Status assigned to every freshly created order.
pub const ESTADO_INICIAL: &str = "pendiente";

/// A registered user (`:Usuario` node).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usuario {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    pub rol: String,
    /// Assigned by the database with Cypher `date()` at creation.
    pub fecha_registro: NaiveDate,
}

/// A catalog product (`:Producto` node).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Producto {
    pub id: i64,
    pub nombre: String,
    pub precio: f64,
    pub stock: i64,
    pub fecha_publicacion: NaiveDate,
}

/// An order (`:Pedido` node).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pedido {
    pub id: i64,
    pub estado: String,
    pub fecha_pedido: NaiveDate,
}

/// Properties of one `CONTIENTE` edge: a single order line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineaPedido {
    pub cantidad: i64,
    pub precio_unitario: f64,
}

/// A line item as supplied by the order-creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineaPedidoInput {
    pub id: i64,
    pub cantidad: i64,
    pub precio_unitario: f64,
}

/// One row of the expanded order listing. Field names are the return
/// variables of `(c)-[:REALIZA]->(o)-[r:CONTIENTE]->(p)`, so each row
/// serializes straight into the keyed record shape of the HTTP contract.
#[derive(Debug, Clone, Serialize)]
pub struct PedidoExpandido {
    pub c: Usuario,
    pub o: Pedido,
    pub r: LineaPedido,
    pub p: Producto,
}

/// The order-status gate: a plain string comparison against a fixed role.
/// Whatever the request body claims is trusted; there is no authenticated
/// identity behind it.
pub fn puede_actualizar_estado(rol: &str) -> bool {
    rol == ROL_VENDEDOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usuario_serializes_graph_property_names() {
        let usuario = Usuario {
            id: 7,
            nombre: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            rol: "cliente".to_string(),
            fecha_registro: NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(),
        };
        let json = serde_json::to_value(&usuario).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["nombre"], "Ana");
        assert_eq!(json["fecha_registro"], "2026-08-23");
    }

    #[test]
    fn test_pedido_expandido_keys_match_return_variables() {
        let row = PedidoExpandido {
            c: Usuario {
                id: 1,
                nombre: "Luis".to_string(),
                email: "luis@example.com".to_string(),
                rol: "cliente".to_string(),
                fecha_registro: NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
            },
            o: Pedido {
                id: 10,
                estado: ESTADO_INICIAL.to_string(),
                fecha_pedido: NaiveDate::from_ymd_opt(2026, 1, 3).unwrap(),
            },
            r: LineaPedido {
                cantidad: 2,
                precio_unitario: 9.99,
            },
            p: Producto {
                id: 5,
                nombre: "Televisor".to_string(),
                precio: 9.99,
                stock: 3,
                fecha_publicacion: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            },
        };
        let json = serde_json::to_value(&row).unwrap();
        assert!(json.get("c").is_some());
        assert!(json.get("o").is_some());
        assert_eq!(json["r"]["cantidad"], 2);
        assert_eq!(json["p"]["nombre"], "Televisor");
    }

    #[test]
    fn test_linea_pedido_input_field_names() {
        let linea: LineaPedidoInput =
            serde_json::from_str(r#"{"id": 3, "cantidad": 2, "precio_unitario": 4.5}"#).unwrap();
        assert_eq!(linea.id, 3);
        assert_eq!(linea.cantidad, 2);
    }

    #[test]
    fn test_solo_vendedor_actualiza_estado() {
        assert!(puede_actualizar_estado("vendedor"));
        assert!(!puede_actualizar_estado("cliente"));
        assert!(!puede_actualizar_estado("Vendedor"));
        assert!(!puede_actualizar_estado(""));
    }
}
