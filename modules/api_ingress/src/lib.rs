//! HTTP host: owns the listener, the shared middleware stack and the
//! service endpoints (`/health`, `/openapi.json`, `/docs`). Business modules
//! hand over their routes as a plain [`axum::Router`].

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{http::StatusCode, middleware::from_fn, response::Json, routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
};
use utoipa::openapi::OpenApi;

mod config;
pub mod request_id;
mod web;

pub use config::ApiIngressConfig;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const BODY_LIMIT_BYTES: usize = 16 * 1024 * 1024;

pub struct ApiIngress {
    config: ApiIngressConfig,
    openapi: Option<Arc<OpenApi>>,
    request_timeout: Duration,
}

impl ApiIngress {
    pub fn new(config: ApiIngressConfig) -> Self {
        Self {
            config,
            openapi: None,
            request_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Publish `doc` at `/openapi.json` (and `/docs` when enabled).
    pub fn with_openapi(mut self, doc: OpenApi) -> Self {
        self.openapi = Some(Arc::new(doc));
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn config(&self) -> &ApiIngressConfig {
        &self.config
    }

    /// `bind_addr` from the module section, or `fallback` when unset.
    pub fn bind_addr(&self, fallback: &str) -> String {
        self.config
            .bind_addr
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Merge module routes with the service endpoints and wrap everything
    /// in the shared middleware stack.
    pub fn build_router(&self, routes: Router) -> Router {
        let mut router = routes.route("/health", get(web::health_check));

        if let Some(doc) = &self.openapi {
            let doc = doc.clone();
            router = router.route(
                "/openapi.json",
                get(move || {
                    let doc = doc.clone();
                    async move { Json(doc.as_ref().clone()) }
                }),
            );
            if self.config.enable_docs {
                router = router.route("/docs", get(web::serve_docs));
            }
        }

        // Layers added last run first. Request path:
        // SetRequestId -> PropagateRequestId -> Trace -> push_req_id -> CORS -> Timeout -> BodyLimit
        router = router.layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES));
        router = router.layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            self.request_timeout,
        ));
        if self.config.cors_enabled {
            router = router.layer(CorsLayer::permissive());
        }
        router = router.layer(from_fn(request_id::push_req_id_to_extensions));
        router = router.layer(request_id::create_trace_layer());

        let x_request_id = request_id::header();
        router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));
        router.layer(SetRequestIdLayer::new(x_request_id, request_id::MakeReqId))
    }

    /// Bind `addr` and serve `router` until `shutdown` resolves.
    pub async fn serve<F>(&self, router: Router, addr: &str, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = addr
            .parse()
            .with_context(|| format!("invalid bind address '{addr}'"))?;

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        tracing::info!("HTTP server bound on {}", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                tracing::info!("HTTP server shutting down gracefully");
            })
            .await
            .map_err(|e| anyhow::anyhow!(e))
    }
}
