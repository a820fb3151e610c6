//! # 批量执行器
//!
//! 按发现顺序逐个处理文件。
//!
//! ## 功能
//! - 严格顺序执行，一个文件处理完成后才开始下一个
//! - 单文件失败被捕获、立即报告并记录，不中断批处理
//! - 进度条显示（每个文件处理期间挂起，避免与输出交错）
//! - 汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `utils/output.rs` 报告错误与汇总

use crate::batch::router::Destination;
use crate::error::Result;
use crate::utils::{output, progress};

use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum FileOutcome {
    /// 处理成功
    Success(PathBuf, Destination),
    /// 处理失败
    Failed(PathBuf, String), // (文件路径, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchReport {
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情（按处理顺序）
    pub failures: Vec<(String, String)>,
}

impl BatchReport {
    /// 合并处理结果
    pub fn merge(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Success(path, dest) => {
                log::debug!("{} -> {}", path.display(), dest);
                self.success += 1;
            }
            FileOutcome::Failed(path, err) => {
                self.failed += 1;
                self.failures.push((path.display().to_string(), err));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.failed
    }

    /// 失败文件路径（按处理顺序）
    #[cfg(test)]
    pub fn failed_paths(&self) -> Vec<&str> {
        self.failures.iter().map(|(path, _)| path.as_str()).collect()
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 是否显示进度条
    show_progress: bool,
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new() -> Self {
        Self {
            show_progress: true,
        }
    }

    /// 设置是否显示进度条
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// 顺序处理文件列表
    pub fn run<F>(&self, files: &[PathBuf], mut processor: F) -> BatchReport
    where
        F: FnMut(&Path) -> Result<Destination>,
    {
        let pb = if self.show_progress {
            progress::create_progress_bar(files.len() as u64, "Converting")
        } else {
            ProgressBar::hidden()
        };

        let mut report = BatchReport::default();

        for file in files {
            let outcome = match pb.suspend(|| processor(file.as_path())) {
                Ok(dest) => FileOutcome::Success(file.clone(), dest),
                Err(e) => {
                    let detail = e.detail();
                    pb.suspend(|| {
                        output::print_error(&format!("error processing {}:", file.display()));
                        output::print_detail(&detail);
                    });
                    FileOutcome::Failed(file.clone(), detail)
                }
            };
            report.merge(outcome);
            pb.inc(1);
        }

        pb.finish_and_clear();
        report
    }
}

/// 失败汇总表格行
#[derive(Tabled)]
struct FailureRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Error")]
    error: String,
}

/// 打印汇总报告
pub fn print_summary(report: &BatchReport) {
    output::print_separator();
    output::print_done(&format!("{} files processed", report.total()));

    if report.failures.is_empty() {
        return;
    }

    output::print_warning(&format!(
        "{}/{} files were skipped due to an error",
        report.failed,
        report.total()
    ));

    let rows: Vec<FailureRow> = report
        .failures
        .iter()
        .map(|(file, error)| FailureRow {
            file: file.clone(),
            error: error.clone(),
        })
        .collect();
    output::print_table(&Table::new(&rows).to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Flow2TsError;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_report_merge() {
        let mut report = BatchReport::default();
        report.merge(FileOutcome::Success(PathBuf::from("a.js"), Destination::Stdout));
        report.merge(FileOutcome::Failed(PathBuf::from("b.js"), "boom".to_string()));

        assert_eq!(report.total(), 2);
        assert_eq!(report.success, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.failed_paths(), vec!["b.js"]);
    }

    #[test]
    fn test_failure_does_not_abort_batch() {
        let files = paths(&["a.js", "b.js", "c.js", "d.js"]);
        let mut visited = Vec::new();

        let report = BatchRunner::new().with_progress(false).run(&files, |file| {
            visited.push(file.to_path_buf());
            if file == Path::new("b.js") || file == Path::new("d.js") {
                Err(Flow2TsError::ConversionError("unexpected token".to_string()))
            } else {
                Ok(Destination::Stdout)
            }
        });

        assert_eq!(visited, files);
        assert_eq!(report.total(), 4);
        assert_eq!(report.success, 2);
        assert_eq!(report.failed_paths(), vec!["b.js", "d.js"]);
        assert!(report.failures[0].1.contains("unexpected token"));
    }

    #[test]
    fn test_empty_batch() {
        let report = BatchRunner::new()
            .with_progress(false)
            .run(&[], |_| Ok(Destination::Stdout));
        assert_eq!(report.total(), 0);
        assert!(report.failures.is_empty());
    }
}
