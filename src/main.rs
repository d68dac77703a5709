use std::sync::Arc;

use agri_assist::catalog::Catalog;
use agri_assist::channels::{WebhookState, webhook_routes};
use agri_assist::config::{BotConfig, SessionBackend};
use agri_assist::dialog::DialogEngine;
use agri_assist::session::{self, InMemorySessionStore, SessionStore};
use agri_assist::store::{DocumentStore, LibSqlBackend, MemoryDocumentStore};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = BotConfig::from_env()?;

    eprintln!("🌾 AgriIndia Assistant v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Webhook: http://0.0.0.0:{}/webhook", config.port);
    eprintln!("   Datasets: {}", config.dataset_dir.display());

    // ── Database ─────────────────────────────────────────────────────────
    let db = match (&config.db_path, config.session_backend) {
        (Some(path), _) => {
            eprintln!("   Database: {}", path.display());
            Some(Arc::new(LibSqlBackend::new_local(path).await?))
        }
        (None, SessionBackend::Database) => {
            eprintln!("   Database: in-memory");
            Some(Arc::new(LibSqlBackend::new_memory().await?))
        }
        (None, SessionBackend::Memory) => None,
    };

    let documents: Arc<dyn DocumentStore> = match &db {
        Some(db) => Arc::clone(db) as Arc<dyn DocumentStore>,
        None => Arc::new(MemoryDocumentStore::new()) as Arc<dyn DocumentStore>,
    };

    // ── Sessions ─────────────────────────────────────────────────────────
    let sessions: Arc<dyn SessionStore> = match (&db, config.session_backend) {
        (Some(db), SessionBackend::Database) => Arc::clone(db) as Arc<dyn SessionStore>,
        _ => {
            let store = InMemorySessionStore::new(config.session_idle_ttl);
            if config.session_idle_ttl.is_some() {
                let _expiry_handle =
                    session::spawn_expiry_task(Arc::clone(&store), config.session_sweep_interval);
            }
            store as Arc<dyn SessionStore>
        }
    };

    // ── Catalog ──────────────────────────────────────────────────────────
    let catalog = Arc::new(Catalog::new(&config.dataset_dir, documents));
    match catalog.load_all().await {
        Ok(snapshot) => {
            for (category, entries) in &snapshot {
                info!(category = %category, count = entries.len(), "Catalog category loaded");
            }
        }
        Err(e) => warn!(error = %e, "Catalog unavailable at startup"),
    }

    // ── HTTP server ──────────────────────────────────────────────────────
    let state = WebhookState {
        engine: Arc::new(DialogEngine::new(catalog, sessions)),
        max_message_len: config.max_message_len,
        twilio: config.twilio.clone(),
    };
    let app = webhook_routes(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    info!(port = config.port, "Webhook server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
