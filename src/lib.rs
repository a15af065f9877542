//! # Keystone AI 店面
//!
//! 服务端渲染的店面页面：
//! - 每次访问首页拉取一次远端商品库，最多展示 10 个
//! - 远端为空或失败时展示内置的两个回退商品
//! - "Buy Now" 后台上报点击并跳转到支付页

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{router, AppState};
pub use config::Config;
