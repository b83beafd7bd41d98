//! 分段成帧领域模块：生成分隔符、计算每个分段的头部/尾部字节及整个响应的长度。

pub mod functions;
pub mod structs;
