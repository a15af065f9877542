//! 点击上报与支付跳转

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};
use url::{form_urlencoded, Url};

use super::model::{CheckoutForm, ClickEvent};
use crate::core::error::ReportError;

/// 点击事件的去向
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn record(&self, event: ClickEvent) -> Result<(), ReportError>;
}

/// 支付地址：前缀与 stripe_id 拼接后按 URL 规则规范化
///
/// 与浏览器给 `location.href` 赋值一致：制表符与换行被去掉，其余控制字符和
/// 非 ASCII 字符被百分号编码，结果总能作为 `Location` 头。
pub fn payment_url(base: &str, stripe_id: Option<&str>) -> String {
    let stripe_id = stripe_id.unwrap_or_default();
    match Url::parse(&format!("{}{}", base, stripe_id)) {
        Ok(url) => url.into(),
        // 拼接结果不是合法 URL（如落入了端口位置）时整体编码 stripe_id
        Err(_) => {
            let encoded: String = form_urlencoded::byte_serialize(stripe_id.as_bytes()).collect();
            format!("{}{}", base, encoded)
        }
    }
}

#[derive(Clone)]
pub struct ClickReporter {
    sink: Arc<dyn EventSink>,
    payment_base: String,
}

impl ClickReporter {
    pub fn new(sink: Arc<dyn EventSink>, payment_base: impl Into<String>) -> Self {
        Self {
            sink,
            payment_base: payment_base.into(),
        }
    }

    /// 后台上报，不等待也不向调用方传递结果
    pub fn report(&self, event: ClickEvent) {
        let sink = Arc::clone(&self.sink);
        tokio::spawn(async move {
            let product = event.product.clone();
            match sink.record(event).await {
                Ok(()) => debug!(product = ?product, "点击已上报"),
                Err(e) => warn!(product = ?product, error = %e, "点击上报失败"),
            }
        });
    }

    /// 用户选中商品：先发起上报，再无条件返回跳转地址
    ///
    /// 页面把缺失的 id 渲染为空字符串，这里还原为缺失。
    pub fn select(&self, form: CheckoutForm) -> String {
        let product = form.product.filter(|id| !id.is_empty());
        self.report(ClickEvent::click(product));
        payment_url(&self.payment_base, form.stripe_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc;

    struct ChannelSink {
        tx: mpsc::UnboundedSender<ClickEvent>,
        fail: bool,
    }

    #[async_trait]
    impl EventSink for ChannelSink {
        async fn record(&self, event: ClickEvent) -> Result<(), ReportError> {
            let _ = self.tx.send(event);
            if self.fail {
                Err(ReportError::Rejected("503".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn reporter(fail: bool) -> (ClickReporter, mpsc::UnboundedReceiver<ClickEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let sink = Arc::new(ChannelSink { tx, fail });
        (ClickReporter::new(sink, "https://checkout.stripe.com/pay/"), rx)
    }

    #[test]
    fn payment_url_concatenates() {
        assert_eq!(
            payment_url("https://checkout.stripe.com/pay/", Some("sample_stripe_1")),
            "https://checkout.stripe.com/pay/sample_stripe_1"
        );
        assert_eq!(
            payment_url("https://checkout.stripe.com/pay/", None),
            "https://checkout.stripe.com/pay/"
        );
    }

    #[test]
    fn payment_url_is_always_a_valid_header() {
        let base = "https://checkout.stripe.com/pay/";
        assert_eq!(
            payment_url(base, Some("abc\ndef")),
            "https://checkout.stripe.com/pay/abcdef"
        );
        assert_eq!(
            payment_url(base, Some("a\0b c")),
            "https://checkout.stripe.com/pay/a%00b%20c"
        );

        for id in ["abc\r\ndef", "x\u{7f}y", "é\u{1}", "../../etc"] {
            let url = payment_url(base, Some(id));
            assert!(axum::http::HeaderValue::try_from(url.as_str()).is_ok(), "{:?}", url);
        }
    }

    #[test]
    fn payment_url_encodes_when_concatenation_is_not_a_url() {
        let url = payment_url("https://checkout.stripe.com", Some(":99999999\n"));
        assert_eq!(url, "https://checkout.stripe.com%3A99999999%0A");
        assert!(axum::http::HeaderValue::try_from(url.as_str()).is_ok());
    }

    #[tokio::test]
    async fn select_reports_once_and_redirects() {
        let (reporter, mut rx) = reporter(false);
        let url = reporter.select(CheckoutForm {
            product: Some("sample2".to_string()),
            stripe_id: Some("sample_stripe_2".to_string()),
        });
        assert_eq!(url, "https://checkout.stripe.com/pay/sample_stripe_2");

        let event = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(event, ClickEvent::click(Some("sample2".to_string())));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn failing_sink_does_not_block_navigation() {
        let (reporter, mut rx) = reporter(true);
        let url = reporter.select(CheckoutForm {
            product: Some("p9".to_string()),
            stripe_id: Some("s9".to_string()),
        });
        assert_eq!(url, "https://checkout.stripe.com/pay/s9");

        let event = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(event.product.as_deref(), Some("p9"));
    }
}
