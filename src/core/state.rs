//! Application State - Stato condiviso dell'applicazione
//!
//! Contiene il repository dei fornitori e le impostazioni necessarie
//! per costruire i link restituiti ai client.

use crate::repositories::{PoolType, SupplierRepository};
use axum::http::{HeaderMap, header};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Stato condiviso tra tutte le route (passato come `Arc<AppState>`)
pub struct AppState {
    /// Repository per la gestione dei fornitori
    pub supplier: SupplierRepository,

    /// Prefisso assoluto per i link generati, es. `http://localhost:8080`
    pub public_base_url: Option<String>,
}

impl AppState {
    /// Crea una nuova istanza di AppState a partire dal pool di connessioni
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni condiviso
    /// * `public_base_url` - Prefisso opzionale per i link assoluti
    pub fn new(pool: PoolType, public_base_url: Option<String>) -> Self {
        Self {
            supplier: SupplierRepository::new(pool),
            public_base_url,
        }
    }

    /// Costruisce il link assoluto per un path dell'API.
    ///
    /// Usa `public_base_url` se configurato, altrimenti l'header `Host` della richiesta
    /// (schema da `X-Forwarded-Proto`, default `http`). Senza `Host` il link resta relativo.
    pub fn url_for(&self, headers: &HeaderMap, path: &str) -> String {
        if let Some(base) = &self.public_base_url {
            return format!("{}{}", base, path);
        }

        let host = headers
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .filter(|host| !host.is_empty());

        match host {
            Some(host) => {
                let scheme = headers
                    .get(FORWARDED_PROTO)
                    .and_then(|value| value.to_str().ok())
                    .and_then(|value| value.split(',').next())
                    .map(str::trim)
                    .filter(|scheme| !scheme.is_empty())
                    .unwrap_or("http");
                format!("{}://{}{}", scheme, host, path)
            }
            None => path.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::create_pool;
    use axum::http::HeaderValue;
    use std::time::Duration;

    async fn state(public_base_url: Option<&str>) -> AppState {
        let pool = create_pool("sqlite::memory:", 1, Duration::from_secs(5))
            .await
            .expect("Failed to open in-memory database");
        AppState::new(pool, public_base_url.map(String::from))
    }

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.insert(*name, HeaderValue::from_static(*value));
        }
        headers
    }

    #[tokio::test]
    async fn test_url_for_uses_host_header() {
        let state = state(None).await;
        let url = state.url_for(&headers(&[("host", "suppliers.local:8080")]), "/suppliers/3");
        assert_eq!(url, "http://suppliers.local:8080/suppliers/3");
    }

    #[tokio::test]
    async fn test_url_for_honours_forwarded_proto() {
        let state = state(None).await;
        let url = state.url_for(
            &headers(&[("host", "api.example.com"), (FORWARDED_PROTO, "https, http")]),
            "/suppliers",
        );
        assert_eq!(url, "https://api.example.com/suppliers");
    }

    #[tokio::test]
    async fn test_url_for_prefers_public_base_url() {
        let state = state(Some("http://localhost:8080")).await;
        let url = state.url_for(&headers(&[("host", "internal:9000")]), "/suppliers");
        assert_eq!(url, "http://localhost:8080/suppliers");
    }

    #[tokio::test]
    async fn test_url_for_without_host_is_relative() {
        let state = state(None).await;
        assert_eq!(state.url_for(&HeaderMap::new(), "/suppliers"), "/suppliers");
    }
}
