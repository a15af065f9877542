//! 商品流：拉取 vault、失败回退、渲染店面

pub mod handler;
pub mod model;
pub mod service;
pub mod view;

pub use model::{fallback_products, FeedOrigin, FeedResolution, Product, RenderState};
pub use service::{select_products, ProductFeed, ProductSource};
