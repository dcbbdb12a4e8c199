//! # Langcodex Library / Langcodex 库
//!
//! This library provides the core functionality for the langcodex tool, a
//! single-shot command line to standardize, validate and describe BCP47
//! language tags.
//!
//! 此库为 langcodex 工具提供核心功能，
//! 这是一个用于规范化、校验和描述 BCP47 语言标签的单次命令行工具。
//!
//! ## Modules / 模块
//!
//! - `core` - Language tags, the metadata collaborator, data models and settings
//! - `infra` - The embedded dataset, logging and i18n support
//! - `reporting` - JSON rendering and console output
//! - `commands` - The lookup dispatcher
//! - `cli` - Command-line interface
//!
//! - `core` - 语言标签、元数据协作者、数据模型和设置
//! - `infra` - 内嵌数据集、日志和国际化支持
//! - `reporting` - JSON 渲染和控制台输出
//! - `commands` - 查询调度器
//! - `cli` - 命令行接口

pub mod cli;
pub mod commands;
pub mod core;
pub mod errors;
pub mod infra;
pub mod reporting;
pub mod status;

// Re-export commonly used items
pub use crate::core::metadata::{EmbeddedMetadata, LanguageMetadata};
pub use crate::core::models::{Mode, Options};
pub use errors::LookupError;

/// Resolves the locale used for help and diagnostic text.
///
/// The requested locale (from `--ui-lang`) wins over the system locale. It
/// attempts to match the full locale (e.g., "pt-BR"), then just the language
/// code (e.g., "pt"), and finally falls back to the default language ("en").
pub fn resolve_ui_locale(requested: Option<&str>) -> String {
    let locale = requested
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string())
        .replace('_', "-");
    let available_locales = rust_i18n::available_locales!();

    let lang = if available_locales.contains(&locale.as_str()) {
        locale.as_str()
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    lang.to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
