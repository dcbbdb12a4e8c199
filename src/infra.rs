//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for langcodex,
//! including the embedded language dataset, logging and i18n support.
//!
//! 此模块为 langcodex 提供基础设施服务，
//! 包括内嵌语言数据集、日志和国际化支持。

pub mod dataset;
pub mod logging;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
