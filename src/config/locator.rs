//! # prettier 配置文件定位
//!
//! 从工作目录开始逐级向上查找 prettier 配置文件。
//!
//! ## 查找顺序（每一级目录内，与 prettier 一致）
//! 1. `package.json` / `package.yaml` 中的 `"prettier"` 键
//! 2. `.prettierrc`（先按 JSON 解析，失败再按 YAML 解析）
//! 3. `.prettierrc.json`, `.prettierrc.yaml`, `.prettierrc.yml`
//! 4. `.prettierrc.json5` 与 JS 配置文件：可识别但无法求值，报错
//! 5. `.prettierrc.toml`
//!
//! 第一个命中的配置即为结果。除"文件不存在"外的任何 I/O 错误都是致命错误。
//!
//! ## 依赖关系
//! - 被 `config/resolver.rs` 调用
//! - 使用 `serde_json`, `serde_yaml`, `toml` 解析配置

use crate::error::{Flow2TsError, Result};
use crate::models::FormatterConfig;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 无法在没有 JS 运行时的情况下求值的配置文件名
const UNSUPPORTED_CONFIG_NAMES: &[&str] = &[
    ".prettierrc.json5",
    ".prettierrc.js",
    "prettier.config.js",
    ".prettierrc.mjs",
    "prettier.config.mjs",
    ".prettierrc.cjs",
    "prettier.config.cjs",
];

/// 配置文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Yaml,
    /// JSON 或 YAML（无扩展名的 `.prettierrc`）
    JsonOrYaml,
    Toml,
}

/// 发现的配置及其来源文件
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredConfig {
    /// 配置文件路径
    pub path: PathBuf,
    /// 原样反序列化的配置
    pub config: FormatterConfig,
}

/// 格式化器配置定位器
pub trait ConfigLocator {
    /// 从 `cwd` 开始查找配置；未找到时返回 `Ok(None)`
    fn locate(&self, cwd: &Path) -> Result<Option<DiscoveredConfig>>;
}

/// prettier 配置定位器
#[derive(Debug, Default, Clone, Copy)]
pub struct PrettierConfigLocator;

impl ConfigLocator for PrettierConfigLocator {
    fn locate(&self, cwd: &Path) -> Result<Option<DiscoveredConfig>> {
        for dir in cwd.ancestors() {
            if let Some(found) = locate_in_dir(dir)? {
                log::debug!("Using prettier config {}", found.path.display());
                return Ok(Some(found));
            }
        }
        Ok(None)
    }
}

/// 在单个目录中查找配置
fn locate_in_dir(dir: &Path) -> Result<Option<DiscoveredConfig>> {
    for (name, format) in [("package.json", ConfigFormat::Json), ("package.yaml", ConfigFormat::Yaml)] {
        let path = dir.join(name);
        if is_file(&path)? {
            if let Some(config) = read_package_manifest(&path, format)? {
                return Ok(Some(DiscoveredConfig { path, config }));
            }
        }
    }

    let rc_files = [
        (".prettierrc", ConfigFormat::JsonOrYaml),
        (".prettierrc.json", ConfigFormat::Json),
        (".prettierrc.yaml", ConfigFormat::Yaml),
        (".prettierrc.yml", ConfigFormat::Yaml),
    ];
    for (name, format) in rc_files {
        let path = dir.join(name);
        if is_file(&path)? {
            let config = parse_config(&path, &read_config(&path)?, format)?;
            return Ok(Some(DiscoveredConfig { path, config }));
        }
    }

    for name in UNSUPPORTED_CONFIG_NAMES {
        let path = dir.join(name);
        if is_file(&path)? {
            return Err(discovery_error(
                &path,
                "this config format is not supported; use .prettierrc (JSON/YAML) or .prettierrc.toml",
            ));
        }
    }

    let toml_path = dir.join(".prettierrc.toml");
    if is_file(&toml_path)? {
        let config = parse_config(&toml_path, &read_config(&toml_path)?, ConfigFormat::Toml)?;
        return Ok(Some(DiscoveredConfig {
            path: toml_path,
            config,
        }));
    }

    Ok(None)
}

/// 路径是否为普通文件；不存在返回 `false`，其余错误向上传递
fn is_file(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(discovery_error(path, e)),
    }
}

/// 读取 `package.json` / `package.yaml` 中的 `"prettier"` 键
fn read_package_manifest(path: &Path, format: ConfigFormat) -> Result<Option<FormatterConfig>> {
    let content = read_config(path)?;
    let manifest: serde_json::Value = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(&content).map_err(|e| discovery_error(path, e))?,
        _ => serde_json::from_str(&content).map_err(|e| discovery_error(path, e))?,
    };

    match manifest.get("prettier") {
        None => Ok(None),
        Some(serde_json::Value::String(shared)) => Err(discovery_error(
            path,
            format!("shared config reference '{}' is not supported", shared),
        )),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| discovery_error(path, e)),
    }
}

/// 按格式解析配置内容
fn parse_config(path: &Path, content: &str, format: ConfigFormat) -> Result<FormatterConfig> {
    match format {
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| discovery_error(path, e)),
        ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| discovery_error(path, e)),
        ConfigFormat::JsonOrYaml => serde_json::from_str(content)
            .or_else(|_| serde_yaml::from_str(content))
            .map_err(|e| discovery_error(path, e)),
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| discovery_error(path, e)),
    }
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| discovery_error(path, e))
}

fn discovery_error(path: &Path, reason: impl std::fmt::Display) -> Flow2TsError {
    Flow2TsError::ConfigDiscovery {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
