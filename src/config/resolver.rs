//! # 运行配置解析
//!
//! 将命令行参数整理为不可变的 `RunConfig`。
//!
//! 启用 `--prettier` 时查找 prettier 配置文件；找到则整体替换
//! 由命令行构造的格式化选项，并记录配置文件路径。无法获取工作目录
//! 或查找失败均为致命错误。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `config/locator.rs` 查找配置文件

use crate::cli::Cli;
use crate::config::locator::ConfigLocator;
use crate::error::{Flow2TsError, Result};
use crate::models::{FormatterConfig, RunConfig};

use std::io;
use std::path::PathBuf;

/// 解析运行配置
///
/// `cwd` 仅在启用 `--prettier` 时调用。
pub fn resolve<F>(cli: &Cli, cwd: F, locator: &dyn ConfigLocator) -> Result<RunConfig>
where
    F: FnOnce() -> io::Result<PathBuf>,
{
    let mut formatter = formatter_from_cli(cli);
    let mut formatter_source = None;

    if cli.prettier {
        let cwd = cwd().map_err(|e| Flow2TsError::ConfigDiscovery {
            path: ".".to_string(),
            reason: format!("cannot determine working directory: {}", e),
        })?;
        if let Some(discovered) = locator.locate(&cwd)? {
            formatter = discovered.config;
            formatter_source = Some(discovered.path);
        }
    }

    Ok(RunConfig {
        inline_utility_types: cli.inline_utility_types,
        prettier: cli.prettier,
        write: cli.write,
        delete_source: cli.delete_source,
        formatter,
        formatter_source,
    })
}

/// 由命令行参数构造格式化选项
fn formatter_from_cli(cli: &Cli) -> FormatterConfig {
    FormatterConfig {
        semi: Some(cli.semi),
        single_quote: Some(cli.single_quote),
        tab_width: Some(cli.tab_width),
        trailing_comma: Some(cli.trailing_comma),
        bracket_spacing: Some(cli.bracket_spacing),
        arrow_parens: Some(cli.arrow_parens),
        print_width: Some(cli.print_width),
        other: Default::default(),
    }
}
