//! # 批量处理模块
//!
//! 提供统一的文件批量转换流程。
//!
//! ## 功能
//! - 展开 glob 模式并去重（collector）
//! - 单文件读取、转换、分类（processor）
//! - 输出路由与源文件删除（router）
//! - 顺序执行、失败隔离与汇总（runner）
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 使用
//! - 使用 `convert/` 的协作者接口
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod processor;
pub mod router;
pub mod runner;

pub use collector::FileCollector;
pub use processor::process_file;
pub use router::route;
pub use runner::{print_summary, BatchReport, BatchRunner};
