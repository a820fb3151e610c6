//! # flow2ts - Flow 到 TypeScript 批量转换工具
//!
//! 按 glob 模式收集 `.js` / `.jsx` 文件，逐个转换为 TypeScript，
//! 输出到标准输出或写回磁盘（`.ts` / `.tsx`），可选删除源文件、
//! 可选使用 prettier 格式化。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── config/   (运行配置与 prettier 配置发现)
//!   │     ├── batch/    (收集、处理、输出路由、批量执行)
//!   │     ├── convert/  (转换器与 JSX 检测)
//!   │     └── models/   (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod config;
mod convert;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&e.detail());
        std::process::exit(1);
    }
}
