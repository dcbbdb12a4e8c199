//! # Error Types / 错误类型
//!
//! Typed failures raised by the language-metadata lookups. A tag that cannot
//! be interpreted at all is an error; a well-formed tag that is merely
//! invalid is a data result and never reaches this type.
//!
//! 语言元数据查询产生的类型化错误。完全无法解析的标签是错误；
//! 而格式正确但无效的标签只是数据结果，不会使用此类型。

use thiserror::Error;

/// Main error type for language-tag lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("'{tag}' is not a recognizable language tag: {reason}")]
    Unparseable { tag: String, reason: String },

    #[error("'{tag}' is not a recognizable display language: {reason}")]
    DisplayLanguage { tag: String, reason: String },

    #[error("Language tag is empty")]
    Empty,
}

pub type Result<T> = std::result::Result<T, LookupError>;
