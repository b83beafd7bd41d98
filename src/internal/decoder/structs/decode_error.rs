//! 解码相关错误类型。

use thiserror::Error;

use crate::internal::BoxError;

#[derive(Debug, Error)]
pub enum DecodeError {
    /// 分段闭合时找不到头部与内容之间的空行；整个解码会话随之终止。
    #[error("分段缺少头部与内容之间的空行分隔")]
    MalformedPart,

    #[error("分段大小超过上限 {limit} 字节")]
    PartTooLarge { limit: usize },

    #[error("无法解析的分段头部行: {0}")]
    InvalidPartHeader(String),

    #[error("Content-Type 中缺少 boundary 参数")]
    MissingBoundary,

    #[error("读取上游数据失败: {0}")]
    Source(#[source] BoxError),

    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),
}
