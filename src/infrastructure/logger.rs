//! 日志基础设施

use anyhow::Result;
use std::io;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// 初始化日志系统
///
/// 控制台始终输出；配置了 `log_dir` 时额外写入按日期分割的文件。
/// `RUST_LOG` 存在时覆盖配置中的级别。返回的 guard 需要持有到进程退出。
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = rolling::daily(dir, &config.file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            let console = fmt::layer().with_writer(io::stdout).with_ansi(true);

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false)
                        .with_target(false)
                        .with_thread_names(true),
                )
                .with(console)
                .try_init()?;

            Ok(Some(guard))
        }
        None => {
            let console = fmt::layer().with_writer(io::stdout).with_ansi(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .try_init()?;

            Ok(None)
        }
    }
}
