use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{self, IntoResponse},
    routing::get,
};
use tokio::net::TcpListener;

use super::CrmqlSchema;
use crate::error::Result;

/// Routes: `POST /graphql` executes, `GET /graphql` and `GET /` serve GraphiQL,
/// `GET /health` answers `ok`.
pub fn router(schema: CrmqlSchema) -> Router {
    Router::new()
        .route("/graphql", get(graphiql).post_service(GraphQL::new(schema)))
        .route("/", get(graphiql))
        .route("/health", get(|| async { "ok" }))
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn run_server(schema: CrmqlSchema, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve(listener, schema).await
}

pub async fn serve(listener: TcpListener, schema: CrmqlSchema) -> Result<()> {
    tracing::info!(addr = %listener.local_addr()?, "GraphQL server listening");
    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("GraphQL server stopped");
    Ok(())
}

async fn graphiql() -> impl IntoResponse {
    response::Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
