//! HTTP layer - axum router, shared state and request handlers
//!
//! Routes are served both at the root and under `/api`.

/// Conversion of application errors into JSON error responses
pub mod error;
/// Translation history endpoints
pub mod history;
/// Translation proxy endpoint
pub mod translate;

use crate::{
    errors::{Error, Result},
    providers::TextGenerator,
};
use axum::{
    Json, Router,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use error::ApiError;

/// Dependencies injected into every handler.
///
/// Either handle may be missing; handlers that need it then fail with a
/// configuration error instead of the server refusing to start.
#[derive(Debug, Default)]
pub struct AppState {
    /// Database connection for history operations
    pub database: Option<DatabaseConnection>,
    /// Generative text service for translations
    pub generator: Option<Arc<dyn TextGenerator>>,
}

impl AppState {
    /// Creates the state from its two handles.
    #[must_use]
    pub fn new(
        database: Option<DatabaseConnection>,
        generator: Option<Arc<dyn TextGenerator>>,
    ) -> Self {
        Self {
            database,
            generator,
        }
    }

    /// The bound database, or [`Error::StoreUnavailable`].
    pub fn database(&self) -> Result<&DatabaseConnection> {
        self.database.as_ref().ok_or(Error::StoreUnavailable)
    }

    /// The configured generator, or [`Error::MissingApiKey`].
    pub fn generator(&self) -> Result<&dyn TextGenerator> {
        self.generator.as_deref().ok_or(Error::MissingApiKey)
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/translate", post(translate::translate))
        .route(
            "/history",
            post(history::save)
                .get(history::list)
                .delete(history::delete),
        )
        .route("/history/export", get(history::export))
        .route("/health", get(health));

    Router::new()
        .merge(routes.clone())
        .nest("/api", routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Request helpers for router tests.
    #![allow(clippy::unwrap_used)]

    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    /// Sends a request and returns the status and raw body.
    pub async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Vec<u8>) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    /// Sends a request and parses the response body as JSON.
    pub async fn send_json(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let (status, bytes) = send(app, method, uri, body).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}
