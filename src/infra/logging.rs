//! # Logging Module / 日志模块
//!
//! Installs the `tracing` subscriber. Events go to stderr so that stdout
//! only ever carries the lookup result.
//!
//! 安装 `tracing` 订阅者。事件写入 stderr，使 stdout 只包含查询结果。

use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::core::config::Settings;

/// Initializes logging at the level selected by `-v` flags.
/// The environment is not consulted. Calling this more than once is a no-op.
pub fn init(settings: &Settings) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(settings.log_level()).into())
        .parse_lossy("");

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
