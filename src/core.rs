//! # Core Module / 核心模块
//!
//! This module contains the core functionality of langcodex, including
//! language-tag parsing, the language-metadata collaborator, data models and
//! settings.
//!
//! 此模块包含 langcodex 的核心功能，
//! 包括语言标签解析、语言元数据协作者、数据模型和设置。

pub mod config;
pub mod metadata;
pub mod models;
pub mod tag;

// Re-exports
pub use config::Settings;
pub use metadata::{Description, EmbeddedMetadata, LanguageMetadata};
pub use tag::LanguageTag;
