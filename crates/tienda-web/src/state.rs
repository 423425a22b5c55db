//! Application state.

use tienda_graph::GraphClient;

/// Gateway behavior toggles.
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    /// Reproduce the historical string-interpolated name search, which is
    /// injectable. Off by default; enable with TIENDA_BUSQUEDA_INTERPOLADA=1
    /// only when migration fidelity requires it.
    pub busqueda_interpolada: bool,
}

impl GatewayConfig {
    /// Read the toggles from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Injectable-lookup variant for tests.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let busqueda_interpolada = get("TIENDA_BUSQUEDA_INTERPOLADA")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self {
            busqueda_interpolada,
        }
    }
}

/// Application state shared across handlers. The graph client is the
/// process-wide pool; each handler execution is its own scoped session.
#[derive(Clone)]
pub struct AppState {
    pub graph: GraphClient,
    pub config: GatewayConfig,
}

impl AppState {
    pub fn new(graph: GraphClient, config: GatewayConfig) -> Self {
        Self { graph, config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolated_search_is_off_by_default() {
        let config = GatewayConfig::from_lookup(|_| None);
        assert!(!config.busqueda_interpolada);
    }

    #[test]
    fn test_interpolated_search_requires_explicit_opt_in() {
        let on = GatewayConfig::from_lookup(|_| Some("1".to_string()));
        assert!(on.busqueda_interpolada);

        let on_true = GatewayConfig::from_lookup(|_| Some("TRUE".to_string()));
        assert!(on_true.busqueda_interpolada);

        let off = GatewayConfig::from_lookup(|_| Some("0".to_string()));
        assert!(!off.busqueda_interpolada);
    }
}
