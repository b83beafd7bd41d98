//! 分隔符扫描领域模块：在按块到达的字节流中增量查找多字节分隔符。

pub mod structs;
