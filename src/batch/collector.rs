//! # 文件收集器
//!
//! 将命令行给出的 glob 模式展开为待处理文件列表。
//!
//! ## 功能
//! - 按模式顺序展开，保持发现顺序
//! - 多个模式匹配到同一路径时只保留第一次出现
//! - 只保留 `.js` / `.jsx` 文件（区分大小写），其余静默丢弃
//! - 模式无匹配不是错误；模式语法错误是致命错误
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `glob` 展开模式

use crate::error::{Flow2TsError, Result};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// 可识别的源文件后缀
pub const SOURCE_EXTENSIONS: &[&str] = &[".js", ".jsx"];

/// 文件收集器
pub struct FileCollector {
    /// 匹配模式列表
    patterns: Vec<String>,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(patterns: &[String]) -> Self {
        Self {
            patterns: patterns.to_vec(),
        }
    }

    /// 收集所有匹配的源文件（去重，保持发现顺序）
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let mut seen = HashSet::new();
        let mut files = Vec::new();

        for pattern in &self.patterns {
            let paths = glob::glob(pattern).map_err(|e| Flow2TsError::InvalidPattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?;

            let mut matched = 0usize;
            for path in paths.filter_map(|p| p.ok()) {
                matched += 1;
                if is_source_file(&path) && seen.insert(path.clone()) {
                    files.push(path);
                }
            }
            log::debug!("Pattern '{}' matched {} path(s)", pattern, matched);
        }

        Ok(files)
    }
}

/// 文件名是否以可识别的源文件后缀结尾
pub fn is_source_file(path: &Path) -> bool {
    match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => SOURCE_EXTENSIONS.iter().any(|ext| name.ends_with(ext)),
        None => false,
    }
}
