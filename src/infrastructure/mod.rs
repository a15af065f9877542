//! 基础设施层：日志与出站 HTTP

pub mod logger;
pub mod vault_client;

pub use vault_client::VaultClient;
