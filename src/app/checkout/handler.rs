//! 结算处理器

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Form,
};
use tracing::{info, warn};

use super::model::CheckoutForm;
use crate::app::AppState;

/// "Buy Now"：上报点击后 303 跳转到支付页
pub async fn checkout(State(state): State<AppState>, Form(form): Form<CheckoutForm>) -> Response {
    let url = state.checkout.select(form);

    match HeaderValue::try_from(url.as_str()) {
        Ok(location) => {
            info!(target_url = %url, "跳转支付");
            (StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response()
        }
        Err(e) => {
            warn!(target_url = ?url, error = %e, "支付地址无法作为 Location 头");
            (StatusCode::BAD_GATEWAY, "支付地址无效").into_response()
        }
    }
}
