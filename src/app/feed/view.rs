//! 店面页面渲染

use super::model::Product;

const STYLE: &str = "\
body{margin:0;min-height:100vh;background:#0f172a;color:#d1d5db;font-family:Orbitron,sans-serif;padding:1.5rem}\
h1{font-size:2.25rem;margin-bottom:1rem}\
.neon-glow{color:#00ffff;margin-bottom:1.5rem}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(320px,1fr));gap:1.5rem}\
.card{background:#1e293b;border-radius:.5rem;padding:1rem}\
.card img{border-radius:.25rem;margin:.5rem 0;max-width:100%}\
.hint{font-size:.875rem;color:#64748b;margin-top:.25rem}";

/// HTML 转义
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn field(value: &Option<String>) -> String {
    value.as_deref().map(escape).unwrap_or_default()
}

fn render_card(html: &mut String, product: &Product) {
    let score = product
        .trending_score
        .map(|s| s.to_string())
        .unwrap_or_default();

    html.push_str(&format!(
        r#"<div class="card">
<h2>{name}</h2>
<img src="{image}" alt="{name}">
<p>{description}</p>
<p class="hint">🔁 Trending: {score} | 💡 AI Suggests: {hint}</p>
<form method="post" action="/checkout">
<input type="hidden" name="product" value="{id}">
<input type="hidden" name="stripe_id" value="{stripe_id}">
<button type="submit">Buy Now</button>
</form>
</div>
"#,
        name = field(&product.name),
        image = field(&product.image),
        description = field(&product.description),
        score = score,
        hint = field(&product.upsell_hint),
        id = field(&product.id),
        stripe_id = field(&product.stripe_id),
    ));
}

/// 渲染整页
pub fn render_page(products: &[Product]) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Keystone AI Storefront</title>\n<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n<main>\n");
    html.push_str("<h1 class=\"chrome-text\">🧬 Keystone AI Storefront</h1>\n");
    html.push_str(
        "<p class=\"neon-glow\">Vault ingestion online. Mutation engine active.</p>\n",
    );
    html.push_str("<div class=\"grid\">\n");
    for product in products {
        render_card(&mut html, product);
    }
    html.push_str("</div>\n</main>\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::feed::model::fallback_products;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<b a="1">&'"#),
            "&lt;b a=&quot;1&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn renders_one_card_per_product() {
        let html = render_page(&fallback_products());
        assert_eq!(html.matches(r#"<div class="card">"#).count(), 2);
        assert!(html.contains("AI Hoodie"));
        assert!(html.contains("Trending: 92 | 💡 AI Suggests: Bundle with Impala sneakers"));
        assert!(html.contains(r#"name="stripe_id" value="sample_stripe_2""#));
    }

    #[test]
    fn missing_fields_render_blank() {
        let html = render_page(&[Product::default()]);
        assert!(html.contains("<h2></h2>"));
        assert!(html.contains(r#"name="product" value="""#));
    }

    #[test]
    fn empty_collection_renders_no_cards() {
        let html = render_page(&[]);
        assert!(!html.contains(r#"<div class="card">"#));
        assert!(html.contains("Keystone AI Storefront"));
    }
}
