//! 编码相关错误类型。

use thiserror::Error;

use crate::internal::BoxError;
use crate::internal::range::structs::{AbsoluteRange, RangeError};

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error(transparent)]
    Range(#[from] RangeError),

    /// 打开内容流失败，或内容流中途出错；编码流随之终止，不做重试。
    #[error("拉取范围 {range} 的内容失败: {source}")]
    Fetch {
        range: AbsoluteRange,
        #[source]
        source: BoxError,
    },

    #[error("写出编码数据失败: {0}")]
    Write(#[from] std::io::Error),

    #[error("无效的响应头: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}
