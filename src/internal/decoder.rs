//! 解码器领域模块：从按块到达的原始字节中还原各个分段。
//!
//! - 同步核心 [`MultipartByteRangeDecoder`](structs::MultipartByteRangeDecoder)：逐块 `push`，返回本块闭合的分段；
//! - 流适配器 [`DecodeStream`](structs::DecodeStream)：包装任意字节流，产出分段流；
//! - 辅助函数：从 `Content-Type` 提取分隔符、解析分段头部、直接解码 `reqwest::Response`。

pub mod functions;
pub mod structs;
