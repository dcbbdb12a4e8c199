//! # Commands Module / 命令模块
//!
//! Command handlers invoked by the CLI once arguments are parsed.
//!
//! CLI 在参数解析完成后调用的命令处理程序。

pub mod lookup;
