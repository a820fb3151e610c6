//! # 单文件处理
//!
//! 读取源文件、调用转换器、调用 JSX 分类器。
//! 不做任何错误恢复，错误原样返回给调用方。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 的处理闭包调用（见 `commands/mod.rs`）
//! - 使用 `convert/` 定义的协作者接口

use crate::convert::{Converter, ExtensionClassifier};
use crate::error::{Flow2TsError, Result};
use crate::models::RunConfig;

use std::fs;
use std::path::Path;

/// 单文件处理结果
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedFile {
    /// 转换后的代码
    pub output: String,
    /// 原始源码
    pub source: String,
    /// 源码是否包含 JSX
    pub has_markup: bool,
}

/// 处理单个文件：读取 → 转换 → 分类
pub fn process_file(
    path: &Path,
    config: &RunConfig,
    converter: &dyn Converter,
    classifier: &dyn ExtensionClassifier,
) -> Result<ProcessedFile> {
    let source = fs::read_to_string(path).map_err(|e| Flow2TsError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let output = converter.convert(&source, config)?;
    let has_markup = classifier.has_markup(&source);

    Ok(ProcessedFile {
        output,
        source,
        has_markup,
    })
}
