//! # 输出路由
//!
//! 决定转换结果写到标准输出还是磁盘，并在写入成功后可选地删除源文件。
//!
//! ## 规则
//! - 未启用 `--write`：输出到标准输出，从不删除源文件
//! - 启用 `--write`：`.js`/`.jsx` 替换为 `.ts`（无 JSX）或 `.tsx`（有 JSX），
//!   写入成功后再按 `--delete-source` 删除源文件
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 的处理闭包调用
//! - 使用 `batch/processor.rs` 的处理结果

use crate::batch::processor::ProcessedFile;
use crate::error::{Flow2TsError, Result};
use crate::models::RunConfig;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// 输出目的地
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// 标准输出
    Stdout,
    /// 磁盘文件
    File(PathBuf),
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Stdout => write!(f, "<stdout>"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// 计算输出路径：替换末尾的 `.jsx` / `.js`
pub fn output_path(input: &Path, has_markup: bool) -> PathBuf {
    let extension = if has_markup { ".tsx" } else { ".ts" };
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name
        .strip_suffix(".jsx")
        .or_else(|| name.strip_suffix(".js"))
        .unwrap_or(name.as_str());

    input.with_file_name(format!("{}{}", stem, extension))
}

/// 路由单个文件的输出
pub fn route(
    input: &Path,
    processed: &ProcessedFile,
    config: &RunConfig,
    stdout: &mut dyn Write,
) -> Result<Destination> {
    if !config.write {
        writeln!(stdout, "{}", processed.output).map_err(Flow2TsError::StdoutError)?;
        return Ok(Destination::Stdout);
    }

    let target = output_path(input, processed.has_markup);
    fs::write(&target, &processed.output).map_err(|e| Flow2TsError::FileWriteError {
        path: target.display().to_string(),
        source: e,
    })?;
    log::debug!(
        "{} ({} bytes) -> {} ({} bytes)",
        input.display(),
        processed.source.len(),
        target.display(),
        processed.output.len()
    );

    if config.delete_source {
        fs::remove_file(input).map_err(|e| Flow2TsError::FileDeleteError {
            path: input.display().to_string(),
            source: e,
        })?;
    }

    Ok(Destination::File(target))
}
