//! Product search through the gateway.

use anyhow::Result;
use clap::Args;

use tienda_client::ApiClient;

use super::catalogo::print_products;

#[derive(Args)]
pub struct BuscarArgs {
    /// Substring to match against product names (case-sensitive)
    pub nombre: String,

    /// Emit the HTML card fragments instead of text
    #[arg(long)]
    pub html: bool,
}

pub async fn execute(args: BuscarArgs) -> Result<()> {
    let client = ApiClient::from_env()?;
    let records = client.buscar_productos(&args.nombre).await?;
    print_products(&records, args.html);
    Ok(())
}
