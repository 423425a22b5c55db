//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use tienda_graph::{GraphClient, GraphConfig};
use tienda_web::state::{AppState, GatewayConfig};

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let graph = GraphClient::connect(&GraphConfig::from_env()).await?;
    let state = AppState::new(graph, GatewayConfig::from_env());

    println!();
    println!("  {} {}", "Tienda".cyan().bold(), "API".bold());
    println!();
    println!("  {}  http://{}:{}", "Front end".green(), args.host, args.port);
    println!(
        "  {}        http://{}:{}/productos",
        "API".green(),
        args.host,
        args.port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    tienda_web::run_server(state, &args.host, args.port).await
}
