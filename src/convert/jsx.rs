//! # JSX 检测
//!
//! 判断源码是否包含 JSX，用于决定输出扩展名（`.tsx` / `.ts`）。
//! 纯函数，无副作用。
//!
//! 只有闭合标签、自闭合标签或 Fragment 才视为 JSX，
//! 避免把 `Array<string>` 这类泛型参数误判为标签。
//!
//! ## 依赖关系
//! - 被 `convert/mod.rs` 使用
//! - 使用 `regex` crate

use regex::Regex;

/// JSX 检测器
pub struct JsxDetector {
    patterns: Vec<Regex>,
}

impl Default for JsxDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl JsxDetector {
    pub fn new() -> Self {
        let patterns = [
            // <Foo /> 或 <div className="x"/>
            r#"<[A-Za-z][\w.:-]*(?:\s+[^<>]*)?/>"#,
            // </div>
            r"</[A-Za-z][\w.:-]*\s*>",
            // <> ... </>
            r"<>|</>",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("jsx pattern is valid"))
        .collect();

        JsxDetector { patterns }
    }

    /// 源码中是否包含 JSX
    pub fn detect(&self, source: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(source))
    }
}
