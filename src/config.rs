//! 店面配置
//!
//! 默认值即原始页面中写死的端点，配置文件只用于覆盖。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 店面系统配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 商品库（vault）配置
    pub vault: VaultConfig,
    /// 支付跳转配置
    pub checkout: CheckoutConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 商品库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// 远端根地址，`/vault` 与 `/log` 都挂在它下面
    pub base_url: String,
    /// 出站请求超时（秒）
    pub request_timeout_seconds: u64,
    /// 最多展示的商品数
    pub display_limit: usize,
}

/// 支付跳转配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    /// 支付地址前缀，直接与 stripe_id 拼接
    pub payment_base: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
    /// 文件日志目录，不设置则只输出到控制台
    pub log_dir: Option<PathBuf>,
    /// 日志文件名前缀
    pub file_prefix: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            timeout_seconds: 30,
        }
    }
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            base_url: "https://wiring-suspension-dat-cons.trycloudflare.com".to_string(),
            request_timeout_seconds: 10,
            display_limit: 10,
        }
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            payment_base: "https://checkout.stripe.com/pay/".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
            file_prefix: "storefront".to_string(),
        }
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::Validation("请求超时必须大于0".to_string()));
        }

        if !self.vault.base_url.starts_with("http://") && !self.vault.base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(format!(
                "vault 地址必须是 http(s) URL: {}",
                self.vault.base_url
            )));
        }
        if self.vault.display_limit == 0 {
            return Err(ConfigError::Validation("展示数量必须大于0".to_string()));
        }

        if url::Url::parse(&self.checkout.payment_base).is_err() {
            return Err(ConfigError::Validation(format!(
                "支付地址前缀必须是合法 URL: {:?}",
                self.checkout.payment_base
            )));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }

    /// 监听地址，形如 `0.0.0.0:3000`
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.http.bind_address, self.http.port)
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 从文件或默认值加载配置
///
/// 依次尝试 `config.toml` 与 `./config/config.toml`，都不存在时使用默认配置。
pub fn load_config() -> Result<Config, ConfigError> {
    let config_paths = ["config.toml", "./config/config.toml"];

    for path in &config_paths {
        if Path::new(path).exists() {
            println!("从配置文件加载: {}", path);
            return Config::load_from_file(path);
        }
    }

    println!("未找到配置文件，使用默认配置");
    Ok(Config::default())
}
