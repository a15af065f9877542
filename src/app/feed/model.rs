//! 商品数据模型

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 文本字段：字符串原样保留，数字与布尔转为文本，其余类型视为缺失
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// 热度：数字或可解析为数字的字符串，其余视为缺失
fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// 商品
///
/// 远端返回的记录不做逐字段校验：缺失或类型不符的字段为 `None`，未知字段被忽略。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient_score")]
    pub trending_score: Option<f64>,
    #[serde(deserialize_with = "lenient_text")]
    pub upsell_hint: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub stripe_id: Option<String>,
}

impl Product {
    /// 把 vault 返回的任意一条记录转为商品，非对象记录得到全空商品
    pub fn from_record(record: Value) -> Self {
        serde_json::from_value(record).unwrap_or_default()
    }

    fn sample(
        id: &str,
        name: &str,
        description: &str,
        image: &str,
        trending_score: f64,
        upsell_hint: &str,
        stripe_id: &str,
    ) -> Self {
        Self {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            image: Some(image.to_string()),
            trending_score: Some(trending_score),
            upsell_hint: Some(upsell_hint.to_string()),
            stripe_id: Some(stripe_id.to_string()),
        }
    }
}

/// 内置的回退商品，远端为空或不可用时展示
pub fn fallback_products() -> Vec<Product> {
    vec![
        Product::sample(
            "sample1",
            "AI Hoodie",
            "Neural thread.",
            "https://via.placeholder.com/300x200.png?text=AI+Hoodie",
            92.0,
            "Bundle with Impala sneakers",
            "sample_stripe_1",
        ),
        Product::sample(
            "sample2",
            "Chrome Shades",
            "Lowrider-coded eyewear.",
            "https://via.placeholder.com/300x200.png?text=Chrome+Shades",
            88.0,
            "Add neon glow filter",
            "sample_stripe_2",
        ),
    ]
}

/// 展示集合的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedOrigin {
    Remote,
    Fallback,
}

/// 一次激活的解析结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedResolution {
    pub origin: FeedOrigin,
    pub products: Vec<Product>,
}

impl FeedResolution {
    pub fn fallback() -> Self {
        Self {
            origin: FeedOrigin::Fallback,
            products: fallback_products(),
        }
    }
}

/// 页面本地的渲染状态
///
/// 初始为空（隐式的加载中），每次解析整体替换，不做增量修改。
#[derive(Debug, Default)]
pub struct RenderState {
    products: Vec<Product>,
    origin: Option<FeedOrigin>,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, resolution: FeedResolution) {
        self.products = resolution.products;
        self.origin = Some(resolution.origin);
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// `None` 表示尚未解析
    pub fn origin(&self) -> Option<FeedOrigin> {
        self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_two_known_items() {
        let products = fallback_products();
        let names: Vec<_> = products.iter().filter_map(|p| p.name.as_deref()).collect();
        assert_eq!(names, vec!["AI Hoodie", "Chrome Shades"]);
        assert_eq!(products[0].stripe_id.as_deref(), Some("sample_stripe_1"));
        assert_eq!(products[1].trending_score, Some(88.0));
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let product: Product =
            serde_json::from_str(r#"{"id": "p1", "extra": true}"#).unwrap();
        assert_eq!(product.id.as_deref(), Some("p1"));
        assert!(product.name.is_none());
        assert!(product.trending_score.is_none());
    }

    #[test]
    fn scalar_fields_of_other_types_are_kept() {
        let product = Product::from_record(serde_json::json!({
            "id": 1,
            "name": "Remote Tee",
            "trending_score": "95",
            "upsell_hint": null,
            "stripe_id": ["nested"],
        }));
        assert_eq!(product.id.as_deref(), Some("1"));
        assert_eq!(product.name.as_deref(), Some("Remote Tee"));
        assert_eq!(product.trending_score, Some(95.0));
        assert!(product.upsell_hint.is_none());
        assert!(product.stripe_id.is_none());
    }

    #[test]
    fn non_object_record_becomes_empty_product() {
        assert_eq!(Product::from_record(serde_json::json!(42)), Product::default());
        assert_eq!(Product::from_record(serde_json::json!("x")), Product::default());
    }

    #[test]
    fn render_state_starts_empty_and_is_replaced_wholesale() {
        let mut state = RenderState::new();
        assert!(state.products().is_empty());
        assert_eq!(state.origin(), None);

        state.replace(FeedResolution::fallback());
        assert_eq!(state.products().len(), 2);

        state.replace(FeedResolution {
            origin: FeedOrigin::Remote,
            products: vec![Product {
                id: Some("x".to_string()),
                ..Default::default()
            }],
        });
        assert_eq!(state.products().len(), 1);
        assert_eq!(state.origin(), Some(FeedOrigin::Remote));
    }
}
