//! Ticklist API server binary.
//!
//! # Usage
//!
//! ```bash
//! TICKLIST_PORT=4000 TICKLIST_DB_PATH=db.json cargo run --bin ticklist-server
//! ```
//!
//! # Example requests
//!
//! ```bash
//! curl http://localhost:4000/todos
//!
//! curl -X POST http://localhost:4000/todos \
//!   -H "Content-Type: application/json" \
//!   -d '{"title": "Buy milk"}'
//!
//! curl -X PATCH http://localhost:4000/todos/<id> \
//!   -H "Content-Type: application/json" \
//!   -d '{"done": true}'
//!
//! curl -X DELETE http://localhost:4000/todos/<id>
//! ```

use ticklist_server::{app_router, AppState, ServerConfig};
use ticklist_store::TodoStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();

    let store = TodoStore::new(&config.db_path);
    store.ensure_exists()?;
    info!(db_path = %config.db_path.display(), "backing document ready");

    let app = app_router(AppState::new(store));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
