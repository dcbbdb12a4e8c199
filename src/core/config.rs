//! # Settings Module / 设置模块
//!
//! Process-wide settings, built once at start-up from the command line and
//! passed explicitly to the dispatcher.
//!
//! 进程级设置，在启动时根据命令行构建一次，并显式传递给调度器。

use tracing::Level;

/// How JSON output is laid out.
/// JSON 输出的排版方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonStyle {
    /// Spaces per nesting level; `None` keeps the output on one line.
    pub indent: Option<usize>,
    /// Sort object keys instead of keeping insertion order.
    pub sort_keys: bool,
    /// Escape every non-ASCII character as `\uXXXX`.
    pub ensure_ascii: bool,
}

impl Default for JsonStyle {
    fn default() -> Self {
        Self {
            indent: None,
            sort_keys: false,
            ensure_ascii: true,
        }
    }
}

impl JsonStyle {
    /// One-line output with non-ASCII characters written as-is.
    pub fn raw_unicode() -> Self {
        Self {
            ensure_ascii: false,
            ..Self::default()
        }
    }
}

/// Settings shared by every part of a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Locale of help and diagnostic text, e.g. "en" or "pt".
    pub ui_locale: String,
    pub json: JsonStyle,
    /// Number of `-v` flags given.
    pub verbosity: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ui_locale: "en".to_string(),
            json: JsonStyle::default(),
            verbosity: 0,
        }
    }
}

impl Settings {
    /// Maximum log level for the configured verbosity.
    pub fn log_level(&self) -> Level {
        match self.verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
