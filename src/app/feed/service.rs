//! 商品流业务服务

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::model::{FeedOrigin, FeedResolution, Product, RenderState};
use crate::core::error::FeedError;

/// 远端商品来源
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, FeedError>;
}

/// 非空取前 `limit` 个（保持来源顺序），为空则回退
pub fn select_products(remote: Vec<Product>, limit: usize) -> FeedResolution {
    if remote.is_empty() {
        return FeedResolution::fallback();
    }

    let mut products = remote;
    products.truncate(limit);
    FeedResolution {
        origin: FeedOrigin::Remote,
        products,
    }
}

#[derive(Clone)]
pub struct ProductFeed {
    source: Arc<dyn ProductSource>,
    limit: usize,
}

impl ProductFeed {
    pub fn new(source: Arc<dyn ProductSource>, limit: usize) -> Self {
        Self { source, limit }
    }

    /// 发起一次拉取并决定展示集合，不重试
    pub async fn resolve(&self) -> FeedResolution {
        match self.source.fetch_products().await {
            Ok(remote) => {
                debug!(count = remote.len(), "vault 返回商品");
                select_products(remote, self.limit)
            }
            Err(e) => {
                warn!(error = %e, "vault 不可用，使用回退商品");
                FeedResolution::fallback()
            }
        }
    }

    /// 页面激活：新建渲染状态并恰好替换一次
    pub async fn activate(&self) -> RenderState {
        let mut state = RenderState::new();
        state.replace(self.resolve().await);
        state
    }
}
