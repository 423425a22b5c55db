//! # Tienda Client
//!
//! Typed client for the store gateway: drives the HTTP API, unwraps the
//! heterogeneous result-record shapes, and renders product cards as HTML
//! fragments. This is the native counterpart of the browser page served at
//! the gateway root.

pub mod api;
pub mod cards;
pub mod record;

pub use api::{ApiClient, ClientError, DEFAULT_BASE};
pub use record::{unwrap_entity, RecordShape};
