//! # convert 命令实现
//!
//! 批量将 Flow 源文件转换为 TypeScript。
//!
//! ## 流程
//! 1. 解析运行配置（可能查找 prettier 配置，失败即终止）
//! 2. 展开 glob 模式，收集 `.js` / `.jsx` 文件
//! 3. 逐个文件：读取 → 转换 → 分类 → 输出 →（可选）删除源文件
//! 4. 打印汇总
//!
//! 部分文件失败时仍以成功状态退出，失败列表见汇总。
//!
//! ## 依赖关系
//! - 使用 `cli/` 定义的参数
//! - 使用 `config/`, `batch/`, `convert/`
//! - 使用 `utils/output.rs`

use crate::batch::{self, BatchReport, BatchRunner, FileCollector};
use crate::cli::Cli;
use crate::config::{self, PrettierConfigLocator};
use crate::convert::{Converter, ExtensionClassifier, JsxDetector, TypeScriptConverter};
use crate::error::Result;
use crate::models::RunConfig;
use crate::utils::output;

use std::io::{self, Write};
use std::path::PathBuf;

/// 执行 convert 命令
pub fn execute(cli: Cli) -> Result<()> {
    let config = config::resolve(&cli, std::env::current_dir, &PrettierConfigLocator)?;

    if config.delete_source && !config.write {
        output::print_warning("--delete-source has no effect without --write; no files will be deleted");
    }

    let files = FileCollector::new(&cli.patterns).collect()?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No .js/.jsx files matched {}",
            cli.patterns.join(", ")
        ));
    } else {
        output::print_info(&format!("Found {} files to convert", files.len()));
    }

    let converter = TypeScriptConverter::default();
    let classifier = JsxDetector::new();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = run_batch(
        &files,
        &config,
        &converter,
        &classifier,
        &mut out,
        BatchRunner::new(),
    );
    out.flush().ok();

    batch::print_summary(&report);

    Ok(())
}

/// 对文件列表执行完整的单文件流程
pub fn run_batch(
    files: &[PathBuf],
    config: &RunConfig,
    converter: &dyn Converter,
    classifier: &dyn ExtensionClassifier,
    out: &mut dyn Write,
    runner: BatchRunner,
) -> BatchReport {
    runner.run(files, |path| {
        let processed = batch::process_file(path, config, converter, classifier)?;
        batch::route(path, &processed, config, out)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Flow2TsError;
    use crate::models::FormatterConfig;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// 在源码前加标记；遇到 `FAIL` 报错
    struct Tagging;

    impl Converter for Tagging {
        fn convert(&self, source: &str, _config: &RunConfig) -> Result<String> {
            if source.contains("FAIL") {
                return Err(Flow2TsError::ConversionError("unsupported syntax".to_string()));
            }
            Ok(format!("/* ts */ {}", source))
        }
    }

    /// 含 `<` 即视为 JSX
    struct AngleBracket;

    impl ExtensionClassifier for AngleBracket {
        fn has_markup(&self, source: &str) -> bool {
            source.contains('<')
        }
    }

    fn config(write: bool, delete_source: bool) -> RunConfig {
        RunConfig {
            inline_utility_types: false,
            prettier: false,
            write,
            delete_source,
            formatter: FormatterConfig::default(),
            formatter_source: None,
        }
    }

    fn source(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn run(files: &[PathBuf], config: &RunConfig, out: &mut Vec<u8>) -> BatchReport {
        run_batch(
            files,
            config,
            &Tagging,
            &AngleBracket,
            out,
            BatchRunner::new().with_progress(false),
        )
    }

    #[test]
    fn test_stdout_mode_in_order_without_deletion() {
        let dir = TempDir::new().unwrap();
        let files = vec![
            source(dir.path(), "b.js", "let b;"),
            source(dir.path(), "a.js", "let a;"),
        ];

        let mut out = Vec::new();
        let report = run(&files, &config(false, true), &mut out);

        assert_eq!(report.success, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "/* ts */ let b;\n/* ts */ let a;\n"
        );
        assert!(files.iter().all(|f| f.exists()));
        assert!(!dir.path().join("a.ts").exists());
    }

    #[test]
    fn test_write_plain_file() {
        let dir = TempDir::new().unwrap();
        let files = vec![source(dir.path(), "a.js", "let a;")];

        let mut out = Vec::new();
        let report = run(&files, &config(true, false), &mut out);

        assert_eq!(report.success, 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("a.ts")).unwrap(),
            "/* ts */ let a;"
        );
        assert!(dir.path().join("a.js").exists());
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_markup_file() {
        let dir = TempDir::new().unwrap();
        let files = vec![source(dir.path(), "a.js", "const x = <App />;")];

        let mut out = Vec::new();
        run(&files, &config(true, false), &mut out);

        assert!(dir.path().join("a.tsx").exists());
        assert!(!dir.path().join("a.ts").exists());
    }

    #[test]
    fn test_write_and_delete_source() {
        let dir = TempDir::new().unwrap();
        let files = vec![source(dir.path(), "a.jsx", "let a;")];

        let mut out = Vec::new();
        run(&files, &config(true, true), &mut out);

        assert!(!dir.path().join("a.jsx").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("a.ts")).unwrap(),
            "/* ts */ let a;"
        );
    }

    #[test]
    fn test_conversion_failure_isolated() {
        let dir = TempDir::new().unwrap();
        let files = vec![
            source(dir.path(), "a.js", "let a;"),
            source(dir.path(), "b.js", "FAIL"),
            source(dir.path(), "c.js", "let c;"),
        ];

        let mut out = Vec::new();
        let report = run(&files, &config(true, true), &mut out);

        assert_eq!(report.total(), 3);
        assert_eq!(report.success, 2);
        assert_eq!(report.failed_paths(), vec![files[1].display().to_string()]);
        // 失败文件保留，且没有输出文件
        assert!(files[1].exists());
        assert!(!dir.path().join("b.ts").exists());
        assert!(dir.path().join("a.ts").exists());
        assert!(dir.path().join("c.ts").exists());
    }

    #[test]
    fn test_write_failure_keeps_source() {
        let dir = TempDir::new().unwrap();
        let files = vec![source(dir.path(), "a.js", "let a;")];
        fs::create_dir(dir.path().join("a.ts")).unwrap();

        let mut out = Vec::new();
        let report = run(&files, &config(true, true), &mut out);

        assert_eq!(report.failed, 1);
        assert!(files[0].exists());
    }
}
