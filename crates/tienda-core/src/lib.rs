//! Tienda Core Library
//!
//! Shared entity models for the graph-backed store.

pub mod model;

pub use model::{LineaPedido, LineaPedidoInput, Pedido, PedidoExpandido, Producto, Usuario};
pub use model::{puede_actualizar_estado, ESTADO_INICIAL, ROL_VENDEDOR};
