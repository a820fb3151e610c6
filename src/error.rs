//! # 统一错误处理模块
//!
//! 定义 flow2ts 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 致命错误：`InvalidPattern`, `ConfigDiscovery`，在任何文件处理前终止
//! - 单文件错误：其余变体，由 `batch::runner` 捕获并记录，不中断批处理
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// flow2ts 统一错误类型
#[derive(Error, Debug)]
pub enum Flow2TsError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to delete file: {path}")]
    FileDeleteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to standard output")]
    StdoutError(#[source] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数与配置错误（致命）
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Error parsing prettier config file: {path}\nReason: {reason}")]
    ConfigDiscovery { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 转换错误
    // ─────────────────────────────────────────────────────────────
    #[error("Conversion failed: {0}")]
    ConversionError(String),

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error("External command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },
}

impl Flow2TsError {
    /// 包含 source 链的完整错误描述
    pub fn detail(&self) -> String {
        let mut msg = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            msg.push_str(&format!(": {}", err));
            source = std::error::Error::source(err);
        }
        msg
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, Flow2TsError>;
