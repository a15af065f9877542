//! 商品流处理器

use axum::{extract::State, response::Html};

use super::{model::FeedResolution, view};
use crate::{app::AppState, core::response::ApiResponse};

/// 店面首页，每次请求即一次激活
pub async fn storefront_page(State(state): State<AppState>) -> Html<String> {
    let render_state = state.feed.activate().await;
    Html(view::render_page(render_state.products()))
}

pub async fn list_products(State(state): State<AppState>) -> ApiResponse<FeedResolution> {
    ApiResponse::success(state.feed.resolve().await)
}
