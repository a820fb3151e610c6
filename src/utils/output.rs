//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! 标准输出保留给转换结果，所有状态信息都写到标准错误。
//!
//! ## 依赖关系
//! - 被 `commands/`, `batch/runner.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    eprintln!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    eprintln!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印多行错误详情（缩进、弱化）
pub fn print_detail(detail: &str) {
    for line in detail.lines() {
        eprintln!("      {}", line.dimmed());
    }
}

/// 打印表格
pub fn print_table(table: &str) {
    eprintln!("{}", table);
}

/// 打印分隔线
pub fn print_separator() {
    eprintln!("{}", "─".repeat(60).dimmed());
}
