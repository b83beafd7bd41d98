//! 字节拉取器接口：编码器通过它按范围打开每个分段的内容流。

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::BoxStream;

use crate::internal::BoxError;
use crate::internal::range::structs::AbsoluteRange;

/// 单个分段的内容流。
pub type ContentStream = BoxStream<'static, Result<Bytes, BoxError>>;

/// 按绝对范围提供内容的拉取器。
///
/// 编码器按范围顺序逐个调用 [`fetch`](Self::fetch)，同一时刻只有一个内容流处于打开状态。
/// 返回数据的长度不做校验，由实现方保证与范围一致；重试策略也由实现方决定。
#[async_trait]
pub trait ByteRangeFetcher: Send + Sync {
    async fn fetch(&self, range: AbsoluteRange) -> Result<ContentStream, BoxError>;
}
