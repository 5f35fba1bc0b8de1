pub mod cafes;

use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use service::cafe::{CafeService, SeaOrmCafeRepository};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use common::types::Health;

use crate::metrics;

/// Shared handler state; the store is built once at startup and injected here.
#[derive(Clone)]
pub struct ServerState {
    pub cafes: CafeService<SeaOrmCafeRepository>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { cafes: CafeService::new(Arc::new(SeaOrmCafeRepository::new(db))) }
    }
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics_handler() -> (StatusCode, String) {
    metrics::encode_metrics()
}

/// Build the full application router: pages, form, delete, and probes.
pub fn build_router(state: ServerState) -> Router {
    metrics::init();

    Router::new()
        .route("/", get(cafes::home))
        .route("/all", get(cafes::all_cafes))
        .route("/add", get(cafes::add_form).post(cafes::add_cafe))
        .route("/delete/:id", get(cafes::delete_cafe))
        .route("/health", get(health))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
