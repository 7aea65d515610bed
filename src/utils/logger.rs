//! 日志初始化
//!
//! 日志只用于诊断，写到 stderr；面向用户的提示仍由 CLI 直接打印

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 默认过滤规则：`verbose` 时打开 debug
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "go_scaffold=debug,warn"
    } else {
        "go_scaffold=warn"
    }
}

/// 初始化 CLI 日志（`RUST_LOG` 优先）
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
