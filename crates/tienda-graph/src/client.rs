//! Neo4j connection client.

use anyhow::{Context, Result};
use neo4rs::{ConfigBuilder, Graph, Query};
use serde::de::DeserializeOwned;

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://neo4jserver:7687".to_string(),
            user: "neo4j".to_string(),
            password: "tienda_dev_2026".to_string(),
        }
    }
}

impl GraphConfig {
    /// Read configuration from the environment, falling back to the fixed
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup, so
    /// the fallback behavior is testable without touching process env.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            uri: get("NEO4J_URI").unwrap_or(defaults.uri),
            user: get("NEO4J_USER").unwrap_or(defaults.user),
            password: get("NEO4J_PASSWORD").unwrap_or(defaults.password),
        }
    }
}

/// Client for the store graph. Cheap to clone; wraps the neo4rs pool.
///
/// The pool is opened once at process startup and handed to every request
/// handler. Each executed statement checks a connection out of the pool and
/// returns it when the row stream is dropped, on every exit path, which is
/// the per-request session scope.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Create a new GraphClient from config.
    ///
    /// Note: neo4rs uses a lazy deadpool — `Graph::connect` only creates the
    /// pool object and does NOT establish a real bolt connection yet. We run
    /// a cheap `RETURN 1` ping immediately so that callers can wrap this in
    /// a timeout and get a fast failure when Neo4j is unreachable.
    pub async fn connect(config: &GraphConfig) -> Result<Self> {
        let neo4j_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .db("neo4j")
            .max_connections(8)
            .fetch_size(200)
            .build()
            .context("Failed to build Neo4j config")?;

        let graph = Graph::connect(neo4j_config)
            .await
            .context("Failed to create Neo4j connection pool")?;

        graph
            .run(Query::new("RETURN 1".to_string()))
            .await
            .context("Neo4j is not responding to queries")?;

        Ok(Self { graph })
    }

    /// Create a new GraphClient from the environment.
    pub async fn connect_env() -> Result<Self> {
        Self::connect(&GraphConfig::from_env()).await
    }

    /// Execute a Cypher statement that returns no results.
    pub async fn execute(&self, query: Query) -> Result<()> {
        self.graph
            .run(query)
            .await
            .context("Neo4j query execution failed")?;
        Ok(())
    }

    /// Execute a Cypher statement and collect all result rows.
    ///
    /// A fetch failure mid-stream (possible once a result set exceeds the
    /// pool's fetch size and needs further bolt pulls) propagates as an
    /// error rather than silently truncating the rows collected so far.
    pub async fn query(&self, query: Query) -> Result<Vec<neo4rs::Row>> {
        let mut result = self
            .graph
            .execute(query)
            .await
            .context("Neo4j query failed")?;

        let mut rows = Vec::new();
        while let Some(row) = result.next().await.context("Neo4j result fetch failed")? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Execute a Cypher statement and return a single scalar value.
    pub async fn query_scalar<T: DeserializeOwned>(
        &self,
        query: Query,
        field: &str,
    ) -> Result<Option<T>> {
        let rows = self.query(query).await?;
        if let Some(row) = rows.into_iter().next() {
            let val: T = row
                .get(field)
                .map_err(|e| anyhow::anyhow!("Failed to get field '{}': {:?}", field, e))?;
            Ok(Some(val))
        } else {
            Ok(None)
        }
    }

    /// Get node and relationship counts for status display.
    pub async fn get_counts(&self) -> Result<GraphCounts> {
        let node_query = Query::new("MATCH (n) RETURN count(n) as count".to_string());
        let rel_query = Query::new("MATCH ()-[r]->() RETURN count(r) as count".to_string());

        let node_count: i64 = self.query_scalar(node_query, "count").await?.unwrap_or(0);
        let rel_count: i64 = self.query_scalar(rel_query, "count").await?.unwrap_or(0);

        Ok(GraphCounts {
            nodes: node_count as usize,
            relationships: rel_count as usize,
        })
    }
}

/// Node and relationship counts.
#[derive(Debug, Clone)]
pub struct GraphCounts {
    pub nodes: usize,
    pub relationships: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_the_fixed_fallback() {
        let config = GraphConfig::default();
        assert_eq!(config.uri, "bolt://neo4jserver:7687");
        assert_eq!(config.user, "neo4j");
    }

    #[test]
    fn test_from_lookup_prefers_env_values() {
        let config = GraphConfig::from_lookup(|key| match key {
            "NEO4J_URI" => Some("bolt://db.internal:7687".to_string()),
            "NEO4J_PASSWORD" => Some("s3cret".to_string()),
            _ => None,
        });
        assert_eq!(config.uri, "bolt://db.internal:7687");
        assert_eq!(config.user, "neo4j");
        assert_eq!(config.password, "s3cret");
    }
}
