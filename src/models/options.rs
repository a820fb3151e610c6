//! # 运行配置数据模型
//!
//! 一次调用内共享的只读配置：转换选项 + 格式化器选项。
//!
//! `FormatterConfig` 有两种来源：
//! - 由命令行参数构造，所有字段均为 `Some`
//! - 由发现的 prettier 配置文件原样反序列化，未设置的键保持 `None`，
//!   未识别的键保存在 `other` 中
//!
//! 两种来源之间不做字段级合并。
//!
//! ## 依赖关系
//! - 被 `config/`, `convert/`, `batch/` 使用
//! - 使用 `serde` 反序列化配置文件，`clap` 解析枚举参数

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// 尾逗号策略
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingComma {
    /// Trailing commas wherever possible
    #[default]
    All,
    /// Trailing commas where valid in ES5 (objects, arrays)
    Es5,
    /// No trailing commas
    None,
}

impl std::fmt::Display for TrailingComma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrailingComma::All => write!(f, "all"),
            TrailingComma::Es5 => write!(f, "es5"),
            TrailingComma::None => write!(f, "none"),
        }
    }
}

/// 箭头函数参数括号策略
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowParens {
    /// Omit parens when possible
    #[default]
    Avoid,
    /// Always include parens
    Always,
}

impl std::fmt::Display for ArrowParens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArrowParens::Avoid => write!(f, "avoid"),
            ArrowParens::Always => write!(f, "always"),
        }
    }
}

/// 格式化器（prettier）选项
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatterConfig {
    /// 语句末尾分号
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semi: Option<bool>,

    /// 单引号字符串
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_quote: Option<bool>,

    /// 缩进宽度
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_comma: Option<TrailingComma>,

    /// 大括号内侧空格
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bracket_spacing: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrow_parens: Option<ArrowParens>,

    /// 行宽
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_width: Option<u32>,

    /// 配置文件中的其余键（overrides, plugins 等）
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

/// 一次调用的运行配置
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// 尽可能内联工具类型
    pub inline_utility_types: bool,
    /// 使用 prettier 格式化输出
    pub prettier: bool,
    /// 写入磁盘而非标准输出
    pub write: bool,
    /// 写入成功后删除源文件
    pub delete_source: bool,
    /// 格式化器选项
    pub formatter: FormatterConfig,
    /// `formatter` 来自发现的配置文件时，该文件的路径
    pub formatter_source: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_config_from_json() {
        let json = r#"{
            "semi": true,
            "singleQuote": true,
            "trailingComma": "es5",
            "overrides": [{ "files": "*.md", "options": { "tabWidth": 2 } }]
        }"#;
        let config: FormatterConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.semi, Some(true));
        assert_eq!(config.single_quote, Some(true));
        assert_eq!(config.trailing_comma, Some(TrailingComma::Es5));
        assert_eq!(config.tab_width, None);
        assert_eq!(config.arrow_parens, None);
        assert!(config.other.contains_key("overrides"));
    }

    #[test]
    fn test_formatter_config_rejects_unknown_enum_value() {
        let json = r#"{ "arrowParens": "sometimes" }"#;
        assert!(serde_json::from_str::<FormatterConfig>(json).is_err());
    }

    #[test]
    fn test_enum_display_matches_flag_values() {
        assert_eq!(TrailingComma::Es5.to_string(), "es5");
        assert_eq!(ArrowParens::Always.to_string(), "always");
    }
}
