//! # Tienda Graph
//!
//! Neo4j access layer for the store API.
//!
//! One module per entity kind under `queries/`; every operation builds
//! exactly one parameterized Cypher statement and maps the result rows to
//! the shared models.

pub mod client;
pub mod queries;

pub use client::{GraphClient, GraphConfig, GraphCounts};
