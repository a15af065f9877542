use std::{sync::Arc, time::Duration};

use anyhow::Context;
use keystone_storefront::{config, infrastructure::logger, infrastructure::VaultClient, router, AppState};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config()?;
    config.validate()?;

    let _log_guard = logger::init_logging(&config.logging)?;

    let client = Arc::new(VaultClient::new(&config.vault).context("创建 vault 客户端失败")?);
    let state = AppState::new(
        client.clone(),
        client,
        config.vault.display_limit,
        config.checkout.payment_base.clone(),
    );
    let app = router(state, Duration::from_secs(config.http.timeout_seconds));

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 店面服务运行在 http://{}", addr);
    info!("   vault: {}", config.vault.base_url);
    info!("   GET  /              - 店面页面");
    info!("   GET  /api/products  - 商品 JSON");
    info!("   POST /checkout      - 点击上报并跳转支付");

    axum::serve(listener, app).await.context("服务器运行失败")?;
    Ok(())
}
