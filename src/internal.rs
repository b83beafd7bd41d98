//! 内部实现：按领域划分为范围解析、分段成帧、分隔符扫描、编码器与解码器。
//!
//! 对外导出以 `lib.rs` 中的门面模块为准，此处仅做模块划分。

pub mod decoder;
pub mod encoder;
pub mod framing;
pub mod range;
pub mod scanner;

/// 跨模块传递的通用错误类型：拉取器与上游数据源的错误都装箱为它。
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
