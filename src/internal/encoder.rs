//! 编码器领域模块：把一组范围与字节拉取器组合成按需拉取的 `multipart/byteranges` 响应体。
//!
//! 使用方式：`MultipartByteRangeEncoder::new(&ranges, fetcher, options)?`，
//! 先读取 [`headers`](structs::MultipartByteRangeEncoder::headers) 写出响应头，再把编码器当作 `Stream` 拉取字节。

pub mod structs;
pub mod traits;
