//! 结算：点击上报与支付跳转

pub mod handler;
pub mod model;
pub mod service;

pub use model::{CheckoutForm, ClickEvent};
pub use service::{payment_url, ClickReporter, EventSink};
