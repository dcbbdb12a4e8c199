//! # Console Reporting Module / 控制台报告模块
//!
//! This module writes the lookup result to stdout and diagnostics to stderr,
//! with a colored, localized error prefix.
//!
//! 此模块将查询结果写入 stdout，将诊断信息写入 stderr，
//! 错误前缀带有颜色并已本地化。

use colored::*;
use std::io::{self, IsTerminal};

use crate::infra::t;

/// Prints the single output line of a lookup.
pub fn print_line(line: &str) {
    println!("{}", line);
}

/// Prints an error and its causes to stderr.
///
/// # Arguments / 参数
/// * `error` - The error that aborted the lookup
///             中止查询的错误
/// * `locale` - The language locale to use for messages
///              用于消息的语言区域设置
pub fn print_error(error: &anyhow::Error, locale: &str) {
    eprintln!("{}", format_error(error, locale, io::stderr().is_terminal()));
}

/// Formats an error as `<prefix> <message>: <cause>...`.
pub fn format_error(error: &anyhow::Error, locale: &str, colorize: bool) -> String {
    let prefix = t!("error_prefix", locale = locale);
    if colorize {
        format!("{} {:#}", prefix.red().bold(), error)
    } else {
        format!("{} {:#}", prefix, error)
    }
}
