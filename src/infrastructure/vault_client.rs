//! vault 远端客户端
//!
//! 同一个 `reqwest::Client` 同时负责商品拉取（`GET /vault`）与点击上报（`POST /log`）。

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::{
    app::{
        checkout::{ClickEvent, EventSink},
        feed::{Product, ProductSource},
    },
    config::VaultConfig,
    core::error::{FeedError, ReportError},
};

#[derive(Clone)]
pub struct VaultClient {
    http: Client,
    base_url: String,
}

impl VaultClient {
    pub fn new(config: &VaultConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .user_agent(concat!("keystone-storefront/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl ProductSource for VaultClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, FeedError> {
        let url = self.endpoint("vault");
        // 不检查状态码，只看响应体能否解析
        let response = self.http.get(&url).send().await?;
        debug!(url = %url, status = response.status().as_u16(), "vault 响应");

        // 只有响应体不是 JSON 数组才算解析失败，单条记录按字段宽松转换
        let body = response.bytes().await?;
        let records: Vec<Value> = serde_json::from_slice(&body)?;
        Ok(records.into_iter().map(Product::from_record).collect())
    }
}

#[async_trait]
impl EventSink for VaultClient {
    async fn record(&self, event: ClickEvent) -> Result<(), ReportError> {
        let response = self
            .http
            .post(self.endpoint("log"))
            .json(&event)
            .send()
            .await?;

        if response.status().is_server_error() {
            return Err(ReportError::Rejected(response.status().to_string()));
        }
        Ok(())
    }
}
