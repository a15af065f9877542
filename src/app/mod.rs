//! 应用层

pub mod checkout;
pub mod feed;

use std::{sync::Arc, time::Duration};

use axum::{
    http::Uri,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::core::{error::CoreError, middleware::request_logging_middleware};
use checkout::{ClickReporter, EventSink};
use feed::{ProductFeed, ProductSource};

#[derive(Clone)]
pub struct AppState {
    pub feed: ProductFeed,
    pub checkout: ClickReporter,
}

impl AppState {
    pub fn new(
        source: Arc<dyn ProductSource>,
        sink: Arc<dyn EventSink>,
        display_limit: usize,
        payment_base: impl Into<String>,
    ) -> Self {
        Self {
            feed: ProductFeed::new(source, display_limit),
            checkout: ClickReporter::new(sink, payment_base),
        }
    }
}

async fn not_found(uri: Uri) -> CoreError {
    CoreError::NotFound(format!("路径不存在: {}", uri.path()))
}

/// 组装路由与中间件
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    let api = Router::new()
        .route("/products", get(feed::handler::list_products))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    Router::new()
        .route("/", get(feed::handler::storefront_page))
        .route("/checkout", post(checkout::handler::checkout))
        .nest("/api", api)
        .fallback(not_found)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}
