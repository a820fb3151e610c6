//! # 配置模块
//!
//! 运行配置的组装与 prettier 配置文件发现。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 子模块: locator, resolver

pub mod locator;
pub mod resolver;

pub use locator::PrettierConfigLocator;
pub use resolver::resolve;
