use axum::{
    Router,
    routing::{delete, get, post, put},
};

use std::sync::Arc;

use crate::expenses;
use engine::Engine;

/// Base path every expense route is mounted under.
pub const COLLECTION: &str = "/api/expenses";

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// Build the HTTP routing table on top of `engine`.
///
/// Several paths lead to the same operation: `""`, `"/"` and `"/all"` list,
/// `""`, `"/"` and `"/add"` create, `"/update"` and `"/{id}"` update,
/// `"/delete/{id}"` and `"/{id}"` delete.
pub fn router(engine: Engine) -> Router {
    let state = ServerState {
        engine: Arc::new(engine),
    };

    Router::new()
        .route("/", get(expenses::home))
        .route(COLLECTION, get(expenses::list).post(expenses::create))
        .route(
            &format!("{COLLECTION}/"),
            get(expenses::list).post(expenses::create),
        )
        .route(&format!("{COLLECTION}/all"), get(expenses::list))
        .route(&format!("{COLLECTION}/get/{{id}}"), get(expenses::get))
        .route(&format!("{COLLECTION}/add"), post(expenses::create))
        .route(&format!("{COLLECTION}/update"), put(expenses::update))
        .route(
            &format!("{COLLECTION}/delete/{{id}}"),
            delete(expenses::delete),
        )
        .route(
            &format!("{COLLECTION}/{{id}}"),
            put(expenses::update_by_id).delete(expenses::delete),
        )
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(engine)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
