//! Graph status command.

use anyhow::Result;
use colored::Colorize;

use tienda_graph::GraphClient;

pub async fn execute() -> Result<()> {
    let client = GraphClient::connect_env().await?;
    let counts = client.get_counts().await?;

    println!("{}", "Store Graph Status".bold());
    println!("{}", "─".repeat(40));
    println!("  Nodes:         {}", counts.nodes.to_string().cyan());
    println!("  Relationships: {}", counts.relationships.to_string().cyan());
    println!("{}", "─".repeat(40));

    Ok(())
}
