//! Catalog listing through the gateway.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde_json::Value;

use tienda_client::{cards, record, ApiClient};

#[derive(Args)]
pub struct CatalogoArgs {
    /// Emit the HTML card fragments instead of text
    #[arg(long)]
    pub html: bool,
}

pub async fn execute(args: CatalogoArgs) -> Result<()> {
    let client = ApiClient::from_env()?;
    let records = client.catalogo().await?;
    print_products(&records, args.html);
    Ok(())
}

/// Shared product printer for `catalogo` and `buscar`.
pub(crate) fn print_products(records: &[Value], html: bool) {
    if html {
        println!("{}", cards::render_product_cards(records));
        return;
    }

    if records.is_empty() {
        println!("{}", "No se encontraron productos.".dimmed());
        return;
    }

    for rec in records {
        let props = record::unwrap_entity(rec);
        let nombre = props
            .get("nombre")
            .and_then(|v| v.as_str())
            .unwrap_or(cards::SIN_NOMBRE)
            .to_string();
        let precio = props
            .get("precio")
            .map(|v| v.to_string())
            .unwrap_or_else(|| cards::SIN_PRECIO.to_string());
        let id = props
            .get("id")
            .map(|v| v.to_string())
            .unwrap_or_else(|| cards::SIN_DATO.to_string());
        let stock = props
            .get("stock")
            .map(|v| v.to_string())
            .unwrap_or_else(|| cards::SIN_DATO.to_string());

        println!(
            "  {} {} {}",
            nombre.bold(),
            format!("${precio}").green(),
            format!("(id {id}, stock {stock})").dimmed()
        );
    }
}
