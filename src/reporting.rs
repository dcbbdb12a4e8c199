//! # Reporting Module / 报告模块
//!
//! This module handles rendering lookup results as JSON and writing them,
//! or diagnostics, to the console.
//!
//! 此模块负责将查询结果渲染为 JSON，并将其或诊断信息输出到控制台。

pub mod console;
pub mod json;

// Re-export common reporting functions
pub use console::{print_error, print_line};
pub use json::render;
