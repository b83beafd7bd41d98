//! 拉取器适配器：将闭包或内存中的字节包装成 [`ByteRangeFetcher`]。

use std::future::Future;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::StreamExt;
use futures_util::stream;

use crate::internal::BoxError;
use crate::internal::encoder::traits::{ByteRangeFetcher, ContentStream};
use crate::internal::range::structs::AbsoluteRange;

/// 内存拉取器默认的单块大小：64KB
pub const DEFAULT_MEMORY_CHUNK_SIZE: usize = 64 * 1024;

/// 将 `Fn(AbsoluteRange) -> Future` 闭包包装成拉取器。
pub struct FnFetcher<F>(pub F);

#[async_trait]
impl<F, Fut> ByteRangeFetcher for FnFetcher<F>
where
    F: Fn(AbsoluteRange) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<ContentStream, BoxError>> + Send + 'static,
{
    async fn fetch(&self, range: AbsoluteRange) -> Result<ContentStream, BoxError> {
        (self.0)(range).await
    }
}

/// 从内存中的整份数据按范围切片，按固定块大小输出。切片不复制底层数据。
#[derive(Debug, Clone)]
pub struct MemoryFetcher {
    data: Bytes,
    chunk_size: usize,
}

impl MemoryFetcher {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            chunk_size: DEFAULT_MEMORY_CHUNK_SIZE,
        }
    }

    /// 设置单块大小；小于 1 时按 1 处理。
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }
}

#[async_trait]
impl ByteRangeFetcher for MemoryFetcher {
    async fn fetch(&self, range: AbsoluteRange) -> Result<ContentStream, BoxError> {
        let out_of_bounds =
            || BoxError::from(format!("范围 {} 超出数据长度 {}", range, self.data.len()));
        let end = usize::try_from(range.end_exclusive())
            .ok()
            .filter(|end| *end <= self.data.len())
            .ok_or_else(out_of_bounds)?;
        let start = usize::try_from(range.first()).map_err(|_| out_of_bounds())?;

        let slice = self.data.slice(start..end);
        let chunk_size = self.chunk_size;
        let chunks: Vec<Result<Bytes, BoxError>> = (0..slice.len())
            .step_by(chunk_size)
            .map(|i| Ok(slice.slice(i..(i + chunk_size).min(slice.len()))))
            .collect();

        Ok(stream::iter(chunks).boxed())
    }
}
