//! # Flow → TypeScript 文本改写
//!
//! 基于正则的轻量改写规则，只处理常见的 Flow 专有语法：
//! - 删除 `@flow` / `@noflow` 注释
//! - `import typeof` → `import type`
//! - `opaque type` → `type`
//! - `mixed` → `unknown`
//! - `?T` → `T | null | undefined`
//! - `$Keys<T>`, `$ReadOnly<T>`, `$Shape<T>`, `$Exact<T>`
//! - 启用 `inline_utility_types` 时：`$ReadOnlyArray<T>`, `$Values<T>`
//!
//! ## 依赖关系
//! - 被 `convert/mod.rs` 使用
//! - 使用 `regex` crate

use crate::error::{Flow2TsError, Result};
use crate::models::RunConfig;

use regex::{Captures, Regex};

/// 单条改写规则
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Rule {
            pattern: Regex::new(pattern).expect("rewrite rule pattern is valid"),
            replacement,
        }
    }

    fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.replacement).into_owned()
    }
}

/// Flow 语法改写器
pub struct FlowConverter {
    /// 始终应用的规则
    rules: Vec<Rule>,
    /// 内联工具类型规则
    utility_rules: Vec<Rule>,
    /// `?T` 可空类型前缀
    maybe_type: Regex,
    /// `%checks` 谓词函数
    checks: Regex,
}

impl Default for FlowConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowConverter {
    pub fn new() -> Self {
        let rules = vec![
            Rule::new(
                r"(?m)^[ \t]*(?://[ \t]*@(?:no)?flow\b[^\n]*|/\*+[ \t]*@(?:no)?flow[ \t]*\*/)[ \t]*\n?",
                "",
            ),
            Rule::new(r"\bimport\s+typeof\b", "import type"),
            Rule::new(r"\bopaque\s+type\b", "type"),
            Rule::new(r"([:<,|&(]\s*)mixed\b", "${1}unknown"),
            Rule::new(r"\$Keys<([^<>]+)>", "keyof $1"),
            Rule::new(r"\$ReadOnly<", "Readonly<"),
            Rule::new(r"\$Shape<", "Partial<"),
            Rule::new(r"\$Exact<([^<>]+)>", "$1"),
        ];

        let utility_rules = vec![
            Rule::new(r"\$ReadOnlyArray<", "ReadonlyArray<"),
            Rule::new(r"\$Values<([^<>]+)>", "${1}[keyof $1]"),
        ];

        FlowConverter {
            rules,
            utility_rules,
            maybe_type: Regex::new(r"([:<,]\s*)\?([A-Za-z_][\w.]*)").expect("maybe type pattern is valid"),
            checks: Regex::new(r"%checks\b").expect("checks pattern is valid"),
        }
    }

    /// 改写一段源码
    pub fn convert(&self, source: &str, config: &RunConfig) -> Result<String> {
        if self.checks.is_match(source) {
            return Err(Flow2TsError::ConversionError(
                "%checks predicate functions have no TypeScript equivalent".to_string(),
            ));
        }

        let mut text = source.to_string();
        for rule in &self.rules {
            text = rule.apply(&text);
        }
        if config.inline_utility_types {
            for rule in &self.utility_rules {
                text = rule.apply(&text);
            }
        }

        Ok(self.rewrite_maybe_types(&text))
    }

    /// `?T` → `T | null | undefined`，泛型类型（如 `?Array<T>`）保持不变
    fn rewrite_maybe_types(&self, text: &str) -> String {
        self.maybe_type
            .replace_all(text, |caps: &Captures| {
                let end = caps.get(0).map_or(0, |m| m.end());
                if text[end..].starts_with('<') {
                    return caps[0].to_string();
                }
                format!("{}{} | null | undefined", &caps[1], &caps[2])
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormatterConfig;

    fn config(inline_utility_types: bool) -> RunConfig {
        RunConfig {
            inline_utility_types,
            prettier: false,
            write: false,
            delete_source: false,
            formatter: FormatterConfig::default(),
            formatter_source: None,
        }
    }

    #[test]
    fn test_strips_flow_pragma() {
        let converter = FlowConverter::new();
        let out = converter
            .convert("// @flow\nconst a = 1;\n", &config(false))
            .unwrap();
        assert_eq!(out, "const a = 1;\n");

        let out = converter
            .convert("/* @flow */\nconst b = 2;\n", &config(false))
            .unwrap();
        assert_eq!(out, "const b = 2;\n");
    }

    #[test]
    fn test_basic_type_rewrites() {
        let converter = FlowConverter::new();
        let source = "import typeof Foo from './foo';\n\
                      opaque type Id = string;\n\
                      type K = $Keys<Props>;\n\
                      type R = $ReadOnly<Props>;\n\
                      type P = $Shape<Props>;\n\
                      type E = $Exact<Props>;\n\
                      let x: mixed = 1;\n";
        let out = converter.convert(source, &config(false)).unwrap();

        assert!(out.contains("import type Foo from './foo';"));
        assert!(out.contains("type Id = string;"));
        assert!(!out.contains("opaque"));
        assert!(out.contains("type K = keyof Props;"));
        assert!(out.contains("type R = Readonly<Props>;"));
        assert!(out.contains("type P = Partial<Props>;"));
        assert!(out.contains("type E = Props;"));
        assert!(out.contains("let x: unknown = 1;"));
    }

    #[test]
    fn test_maybe_types() {
        let converter = FlowConverter::new();
        let out = converter
            .convert("function f(a: ?string, b: Array<?number>): ?Node {}", &config(false))
            .unwrap();
        assert_eq!(
            out,
            "function f(a: string | null | undefined, b: Array<number | null | undefined>): Node | null | undefined {}"
        );

        // 泛型可空类型不改写
        let out = converter.convert("let a: ?Array<string>;", &config(false)).unwrap();
        assert_eq!(out, "let a: ?Array<string>;");
    }

    #[test]
    fn test_utility_types_depend_on_flag() {
        let converter = FlowConverter::new();
        let source = "type A = $ReadOnlyArray<string>;\ntype V = $Values<Obj>;\n";

        let plain = converter.convert(source, &config(false)).unwrap();
        assert_eq!(plain, source);

        let inlined = converter.convert(source, &config(true)).unwrap();
        assert!(inlined.contains("type A = ReadonlyArray<string>;"));
        assert!(inlined.contains("type V = Obj[keyof Obj];"));
    }

    #[test]
    fn test_checks_predicate_is_error() {
        let converter = FlowConverter::new();
        let err = converter
            .convert("function isStr(x: mixed): boolean %checks { return typeof x === 'string'; }", &config(false))
            .unwrap_err();
        assert!(matches!(err, Flow2TsError::ConversionError(_)));
    }
}
