//! 字节范围领域模块：范围描述、解析为绝对范围、`Content-Range` 的格式化与解析。

pub mod functions;
pub mod structs;
