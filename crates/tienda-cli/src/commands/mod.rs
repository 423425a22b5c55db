//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod buscar;
pub mod catalogo;
pub mod serve;
pub mod status;

/// Tienda - graph-backed store API
#[derive(Parser)]
#[command(name = "tienda")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP gateway
    Serve(serve::ServeArgs),

    /// Show graph node/relationship counts
    Status,

    /// Load the product catalog through the gateway
    Catalogo(catalogo::CatalogoArgs),

    /// Search products by name substring
    Buscar(buscar::BuscarArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Status => status::execute().await,
            Commands::Catalogo(args) => catalogo::execute(args).await,
            Commands::Buscar(args) => buscar::execute(args).await,
        }
    }
}
