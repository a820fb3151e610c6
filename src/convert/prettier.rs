//! # 外部 prettier 格式化
//!
//! 通过标准输入/输出调用 `prettier` 命令格式化转换结果。
//!
//! 选项来源有两种：
//! - 发现的配置文件：以 `--config <path>` 交给 prettier 自己读取，
//!   `useTabs`, `overrides` 等所有键都生效
//! - 命令行参数：使用 `--no-config`，只传递值为 `Some` 且与
//!   prettier 默认值不同的字段
//!
//! ## 依赖关系
//! - 被 `convert/mod.rs` 使用
//! - 外部依赖 `prettier` 可执行文件

use crate::error::{Flow2TsError, Result};
use crate::models::FormatterConfig;

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// prettier 命令封装
#[derive(Debug, Clone)]
pub struct PrettierCommand {
    program: String,
}

impl Default for PrettierCommand {
    fn default() -> Self {
        Self::new("prettier")
    }
}

impl PrettierCommand {
    pub fn new(program: impl Into<String>) -> Self {
        PrettierCommand {
            program: program.into(),
        }
    }

    /// 格式化一段 TypeScript 代码
    pub fn format(
        &self,
        code: &str,
        options: &FormatterConfig,
        config_path: Option<&Path>,
    ) -> Result<String> {
        let args = build_args(options, config_path);
        log::debug!("Running {} {}", self.program, args.join(" "));

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|_| Flow2TsError::CommandNotFound {
                command: self.program.clone(),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(code.as_bytes())
                .map_err(|e| Flow2TsError::CommandFailed {
                    command: self.program.clone(),
                    stderr: e.to_string(),
                })?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| Flow2TsError::CommandFailed {
                command: self.program.clone(),
                stderr: e.to_string(),
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).to_string())
        } else {
            Err(Flow2TsError::CommandFailed {
                command: format!("{} {}", self.program, args.join(" ")),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            })
        }
    }
}

/// 由格式化选项构造 prettier 命令行参数
///
/// `config_path` 为发现的配置文件路径；给出时由 prettier 直接读取该文件。
pub fn build_args(options: &FormatterConfig, config_path: Option<&Path>) -> Vec<String> {
    if let Some(path) = config_path {
        return vec![
            "--config".to_string(),
            path.display().to_string(),
            "--parser".to_string(),
            "typescript".to_string(),
        ];
    }

    let mut args = vec![
        "--no-config".to_string(),
        "--parser".to_string(),
        "typescript".to_string(),
    ];

    if options.semi == Some(false) {
        args.push("--no-semi".to_string());
    }
    if options.single_quote == Some(true) {
        args.push("--single-quote".to_string());
    }
    if let Some(width) = options.tab_width {
        args.push("--tab-width".to_string());
        args.push(width.to_string());
    }
    if let Some(policy) = options.trailing_comma {
        args.push("--trailing-comma".to_string());
        args.push(policy.to_string());
    }
    if options.bracket_spacing == Some(false) {
        args.push("--no-bracket-spacing".to_string());
    }
    if let Some(style) = options.arrow_parens {
        args.push("--arrow-parens".to_string());
        args.push(style.to_string());
    }
    if let Some(width) = options.print_width {
        args.push("--print-width".to_string());
        args.push(width.to_string());
    }

    if !options.other.is_empty() {
        log::debug!(
            "Prettier options without a CLI flag are not forwarded: {:?}",
            options.other.keys().collect::<Vec<_>>()
        );
    }

    args
}
