//! Product card rendering.
//!
//! Mirrors the browser page: one `<article>` card per product with name,
//! price, id and stock, substituting placeholders for missing fields.

use serde_json::Value;

use crate::record::unwrap_entity;

/// Placeholder for a missing id or stock.
pub const SIN_DATO: &str = "N/D";

/// Placeholder for a missing price.
pub const SIN_PRECIO: &str = "—";

/// Fallback product name.
pub const SIN_NOMBRE: &str = "Producto sin nombre";

/// Render one product record as an HTML card fragment.
pub fn render_product_card(record: &Value) -> String {
    let props = unwrap_entity(record);

    let nombre = match props.get("nombre") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => SIN_NOMBRE.to_string(),
    };
    let precio = scalar_or(&props, "precio", SIN_PRECIO);
    let id = scalar_or(&props, "id", SIN_DATO);
    let stock = scalar_or(&props, "stock", SIN_DATO);

    format!(
        "<article class=\"product-card\">\n  \
         <div class=\"product-main\">\n    \
         <h3 class=\"product-name\">{nombre}</h3>\n    \
         <p class=\"product-price\">${precio}</p>\n  \
         </div>\n  \
         <p class=\"product-meta\">ID: {id} · Stock: {stock}</p>\n\
         </article>"
    )
}

/// Render a list of records, or the empty-state fragment.
pub fn render_product_cards(records: &[Value]) -> String {
    if records.is_empty() {
        return "<span class=\"empty\">No se encontraron productos.</span>".to_string();
    }
    records
        .iter()
        .map(render_product_card)
        .collect::<Vec<_>>()
        .join("\n")
}

fn scalar_or(props: &Value, name: &str, placeholder: &str) -> String {
    match props.get(name) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => placeholder.to_string(),
        Some(other) => other.to_string(),
    }
}
