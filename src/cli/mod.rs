//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 参数结构
//! - 位置参数：一个或多个 glob 模式（缺省时打印帮助并以非零状态退出）
//! - 转换选项：`--inline-utility-types`
//! - 格式化选项：`--prettier` 及其依赖的 `--semi`, `--tab-width` 等
//! - 输出选项：`--write`, `--delete-source`
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `config/resolver.rs` 和 `commands/`

use crate::models::{ArrowParens, TrailingComma};

use clap::Parser;

/// flow2ts - Flow 到 TypeScript 批量转换工具
#[derive(Parser, Debug)]
#[command(name = "flow2ts")]
#[command(version)]
#[command(about = "Convert Flow-annotated JavaScript files to TypeScript", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Glob patterns of files to convert (e.g. "src/**/*.js")
    #[arg(value_name = "PATTERNS", required = true)]
    pub patterns: Vec<String>,

    /// Inline utility types when possible
    #[arg(long, default_value_t = false)]
    pub inline_utility_types: bool,

    /// Use prettier for formatting
    #[arg(long, default_value_t = false)]
    pub prettier: bool,

    /// Add semi-colons (depends on --prettier)
    #[arg(long, default_value_t = false)]
    pub semi: bool,

    /// Use single quotes instead of double quotes (depends on --prettier)
    #[arg(long, default_value_t = false)]
    pub single_quote: bool,

    /// Size of tabs: 2 or 4 (depends on --prettier)
    #[arg(long, value_name = "WIDTH", default_value_t = 4, value_parser = parse_tab_width)]
    pub tab_width: u32,

    /// Where to put trailing commas (depends on --prettier)
    #[arg(long, value_enum, default_value_t = TrailingComma::All)]
    pub trailing_comma: TrailingComma,

    /// Put spaces between braces and contents (depends on --prettier)
    #[arg(long, default_value_t = false)]
    pub bracket_spacing: bool,

    /// Arrow function param list parens (depends on --prettier)
    #[arg(long, value_enum, default_value_t = ArrowParens::Avoid)]
    pub arrow_parens: ArrowParens,

    /// Line width (depends on --prettier)
    #[arg(long, value_name = "WIDTH", default_value_t = 80)]
    pub print_width: u32,

    /// Write output to disk instead of STDOUT
    #[arg(long, default_value_t = false)]
    pub write: bool,

    /// Delete the source file after a successful write (requires --write)
    #[arg(long, default_value_t = false)]
    pub delete_source: bool,
}

/// 解析缩进宽度（仅接受 2 或 4）
pub fn parse_tab_width(input: &str) -> Result<u32, String> {
    match input.trim() {
        "2" => Ok(2),
        "4" => Ok(4),
        other => Err(format!("Invalid tab width '{}'. Use 2 or 4", other)),
    }
}
