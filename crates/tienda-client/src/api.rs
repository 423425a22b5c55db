//! HTTP access to the gateway.

use reqwest::header::CONTENT_TYPE;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use thiserror::Error;

/// Default gateway address: loopback, matching the server's default port.
pub const DEFAULT_BASE: &str = "http://localhost:3000";

/// Failures surfaced by the client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base address '{0}'")]
    BaseUrl(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status, carrying the parsed body (JSON when the
    /// response declares it, raw text otherwise).
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: Value },
}

/// Client for the store gateway.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client against an explicit base address.
    pub fn new(base: &str) -> Result<Self, ClientError> {
        let base = Url::parse(base).map_err(|_| ClientError::BaseUrl(base.to_string()))?;
        Ok(Self {
            base,
            http: reqwest::Client::new(),
        })
    }

    /// Base address from `TIENDA_API_BASE`, falling back to loopback. The
    /// browser page persists the same setting in local storage instead.
    pub fn from_env() -> Result<Self, ClientError> {
        let base = std::env::var("TIENDA_API_BASE").unwrap_or_else(|_| DEFAULT_BASE.to_string());
        Self::new(&base)
    }

    /// GET /productos — the full catalog.
    pub async fn catalogo(&self) -> Result<Vec<Value>, ClientError> {
        self.get_records("/productos", &[]).await
    }

    /// GET /buscar-productos?nombre= — substring search.
    pub async fn buscar_productos(&self, nombre: &str) -> Result<Vec<Value>, ClientError> {
        self.get_records("/buscar-productos", &[("nombre", nombre)])
            .await
    }

    /// GET a path, expecting the gateway's list-of-records shape.
    pub async fn get_records(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<Value>, ClientError> {
        match self.get(path, params).await? {
            Value::Array(records) => Ok(records),
            other => Ok(vec![other]),
        }
    }

    /// GET a path and parse the body. Non-success statuses become a typed
    /// failure carrying the status code and the parsed body.
    pub async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, ClientError> {
        let url = self.build_url(path, params)?;
        let response = self.http.get(url).send().await?;

        let status = response.status();
        let declares_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("application/json"))
            .unwrap_or(false);

        if !status.is_success() {
            let body = if declares_json {
                response.json().await.unwrap_or(Value::Null)
            } else {
                Value::String(response.text().await.unwrap_or_default())
            };
            return Err(ClientError::Status { status, body });
        }

        if declares_json {
            Ok(response.json().await?)
        } else {
            Ok(Value::String(response.text().await?))
        }
    }

    /// Build the request URL, attaching only non-empty query parameters.
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, ClientError> {
        let mut url = self
            .base
            .join(path)
            .map_err(|_| ClientError::BaseUrl(format!("{}{path}", self.base)))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                if !value.is_empty() {
                    pairs.append_pair(key, value);
                }
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params_are_not_attached() {
        let client = ApiClient::new(DEFAULT_BASE).unwrap();
        let url = client
            .build_url("/buscar-productos", &[("nombre", "")])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/buscar-productos");
    }

    #[test]
    fn test_non_empty_params_are_attached() {
        let client = ApiClient::new(DEFAULT_BASE).unwrap();
        let url = client
            .build_url("/buscar-productos", &[("nombre", "Tel"), ("vacio", "")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/buscar-productos?nombre=Tel"
        );
    }

    #[test]
    fn test_invalid_base_is_a_typed_error() {
        let err = ApiClient::new("not a url").unwrap_err();
        assert!(matches!(err, ClientError::BaseUrl(_)));
    }

    #[test]
    fn test_status_error_displays_code_and_body() {
        let err = ClientError::Status {
            status: StatusCode::FORBIDDEN,
            body: serde_json::json!({ "error": "Solo vendedores pueden actualizar pedidos" }),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("403"));
        assert!(rendered.contains("Solo vendedores"));
    }
}
