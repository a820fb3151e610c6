//! # 数据模型模块
//!
//! 定义运行配置与格式化器选项的数据模型。
//!
//! ## 依赖关系
//! - 被 `cli/`, `config/`, `convert/`, `batch/` 使用
//! - 子模块: options

pub mod options;

pub use options::{ArrowParens, FormatterConfig, RunConfig, TrailingComma};
