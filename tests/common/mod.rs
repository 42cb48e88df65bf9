use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use supplier_service::core::AppState;
use supplier_service::repositories::create_pool;

pub const BASE_URL: &str = "/suppliers";

/// Crea un AppState per i test su un database SQLite in memoria
///
/// # Arguments
/// * `public_base_url` - Prefisso opzionale per i link assoluti
///
/// # Returns
/// Arc<AppState> con lo schema già inizializzato
pub async fn create_test_state(public_base_url: Option<&str>) -> Arc<AppState> {
    let pool = create_pool("sqlite::memory:", 1, Duration::from_secs(5))
        .await
        .expect("Failed to open in-memory database");
    let state = Arc::new(AppState::new(pool, public_base_url.map(String::from)));
    state
        .supplier
        .init_schema()
        .await
        .expect("Failed to initialize schema");
    state
}

/// Crea un TestServer per i test
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = supplier_service::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Server pronto all'uso con database vuoto
pub async fn setup() -> TestServer {
    create_test_server(create_test_state(None).await)
}

/// Body JSON di un fornitore
pub fn supplier_json(name: &str, category: &str, available: bool, status: &str) -> Value {
    json!({
        "name": name,
        "category": category,
        "available": available,
        "status": status
    })
}

/// Genera `count` fornitori diversi, con categorie che si ripetono
pub fn supplier_fixtures(count: usize) -> Vec<Value> {
    const NAMES: [&str; 6] = ["amazon", "walmart", "target", "costco", "kroger", "aldi"];
    const CATEGORIES: [&str; 3] = ["drugs", "food", "cosmetics"];

    (0..count)
        .map(|i| {
            let name = format!("{}-{}", NAMES[i % NAMES.len()], i);
            supplier_json(&name, CATEGORIES[i % CATEGORIES.len()], i % 2 == 0, "active")
        })
        .collect()
}

/// Crea `count` fornitori via POST e restituisce i body delle risposte (con id)
pub async fn create_suppliers(server: &TestServer, count: usize) -> Vec<Value> {
    let mut created = Vec::with_capacity(count);
    for body in supplier_fixtures(count) {
        let response = server.post(BASE_URL).json(&body).await;
        response.assert_status(axum::http::StatusCode::CREATED);
        created.push(response.json::<Value>());
    }
    created
}
