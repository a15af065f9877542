//! 结算数据模型

use serde::{Deserialize, Serialize};

/// 点击上报事件，`product` 缺失时不出现在 JSON 中
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickEvent {
    pub event: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
}

impl ClickEvent {
    pub fn click(product: Option<String>) -> Self {
        Self {
            event: "click".to_string(),
            product,
        }
    }
}

/// "Buy Now" 表单
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub stripe_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_event_body() {
        let body = serde_json::to_value(ClickEvent::click(Some("sample1".to_string()))).unwrap();
        assert_eq!(body, serde_json::json!({"event": "click", "product": "sample1"}));
    }

    #[test]
    fn click_event_without_product_omits_key() {
        let body = serde_json::to_string(&ClickEvent::click(None)).unwrap();
        assert_eq!(body, r#"{"event":"click"}"#);
    }
}
