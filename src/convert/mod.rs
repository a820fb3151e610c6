//! # 转换协作者模块
//!
//! 定义批处理流程依赖的两个协作者接口及其默认实现：
//! - `Converter`: 源码 → 转换后的代码，可失败
//! - `ExtensionClassifier`: 源码是否包含 JSX，纯函数，不可失败
//!
//! 默认实现 `TypeScriptConverter` 先做 Flow 语法改写，
//! 启用 `--prettier` 时再交给外部 prettier 格式化。
//!
//! ## 依赖关系
//! - 被 `batch/processor.rs` 调用
//! - 子模块: flow, jsx, prettier

pub mod flow;
pub mod jsx;
pub mod prettier;

use crate::error::Result;
use crate::models::RunConfig;

pub use flow::FlowConverter;
pub use jsx::JsxDetector;
pub use prettier::PrettierCommand;

/// 代码转换器
pub trait Converter {
    fn convert(&self, source: &str, config: &RunConfig) -> Result<String>;
}

/// 输出扩展名分类器
pub trait ExtensionClassifier {
    /// 源码是否包含内嵌标记（JSX）
    fn has_markup(&self, source: &str) -> bool;
}

/// 默认转换器：Flow 改写 + 可选 prettier 格式化
#[derive(Default)]
pub struct TypeScriptConverter {
    flow: FlowConverter,
    formatter: PrettierCommand,
}

impl Converter for TypeScriptConverter {
    fn convert(&self, source: &str, config: &RunConfig) -> Result<String> {
        let code = self.flow.convert(source, config)?;
        if config.prettier {
            self.formatter
                .format(&code, &config.formatter, config.formatter_source.as_deref())
        } else {
            Ok(code)
        }
    }
}

impl ExtensionClassifier for JsxDetector {
    fn has_markup(&self, source: &str) -> bool {
        self.detect(source)
    }
}
