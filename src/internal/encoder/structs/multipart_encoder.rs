//! `multipart/byteranges` 编码器。
//!
//! 构建时解析全部范围、生成全部分段的头部与尾部并算出 `Content-Length`，此时不读取任何内容。
//! 之后作为 `Stream` 被下游按需拉取，内部状态机：
//!
//! - `BeforePart`：取出下一个分段，输出头部，准备打开其内容流；没有分段时结束；
//! - `Opening`：等待拉取器打开内容流；
//! - `StreamingPart`：逐块转发内容，内容结束后输出尾部并回到 `BeforePart`；
//! - `Done`：终态，出错后也进入此状态。
//!
//! 同一时刻只有一个内容流处于打开状态；编码器被丢弃时，正在打开或读取的内容流随之释放。

use std::collections::VecDeque;
use std::mem;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures_util::future::BoxFuture;
use futures_util::{FutureExt, Stream, StreamExt};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, trace};

use crate::internal::BoxError;
use crate::internal::encoder::traits::{ByteRangeFetcher, ContentStream};
use crate::internal::framing::functions::{
    frame_parts, framed_length, multipart_content_type, random_boundary,
};
use crate::internal::framing::structs::{EncodeOptions, FramedPart};
use crate::internal::range::functions::resolve_ranges;
use crate::internal::range::structs::{AbsoluteRange, RangeError, RangeSpec};

use super::encode_error::EncodeError;
use super::encoded_headers::EncodedHeaders;

enum EncodeState {
    BeforePart,
    Opening {
        range: AbsoluteRange,
        footer: Bytes,
        content: BoxFuture<'static, Result<ContentStream, BoxError>>,
    },
    StreamingPart {
        range: AbsoluteRange,
        footer: Bytes,
        content: ContentStream,
        /// 已从内容流取出、尚未完全交给下游的字节（按单块上限切分时使用）
        pending: Bytes,
    },
    Done,
}

/// `multipart/byteranges` 编码器，不实现 Clone：每个实例独占自己的分隔符、分段队列与内容流。
pub struct MultipartByteRangeEncoder {
    parts: VecDeque<FramedPart>,
    fetcher: Arc<dyn ByteRangeFetcher>,
    headers: EncodedHeaders,
    boundary: String,
    max_chunk_size: Option<usize>,
    state: EncodeState,
}

impl MultipartByteRangeEncoder {
    /// 构建编码器。任一范围无法解析（如总大小未知却请求了后缀范围）时立即返回错误，不会调用拉取器。
    pub fn new(
        ranges: &[RangeSpec],
        fetcher: impl ByteRangeFetcher + 'static,
        options: EncodeOptions,
    ) -> Result<Self, RangeError> {
        let resolved = resolve_ranges(ranges, options.total_size)?;

        let boundary = options
            .boundary
            .clone()
            .filter(|b| !b.is_empty())
            .unwrap_or_else(random_boundary);
        let parts = frame_parts(&boundary, &resolved, &options);
        let content_length = framed_length(&parts)?;

        debug!(
            boundary = %boundary,
            parts = parts.len(),
            content_length,
            "构建 multipart/byteranges 编码器"
        );

        Ok(Self {
            parts: parts.into(),
            fetcher: Arc::new(fetcher),
            headers: EncodedHeaders {
                content_length,
                content_type: multipart_content_type(&boundary),
            },
            boundary,
            max_chunk_size: options.max_chunk_size,
            state: EncodeState::BeforePart,
        })
    }

    /// 需要随响应发送的 `Content-Length` 与 `Content-Type`。
    pub fn headers(&self) -> &EncodedHeaders {
        &self.headers
    }

    /// 响应体的总字节数。
    pub fn length(&self) -> u64 {
        self.headers.content_length
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// 将整个响应体写入 `writer`，返回写出的字节数。
    pub async fn write_to<W>(mut self, writer: &mut W) -> Result<u64, EncodeError>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let mut written: u64 = 0;
        while let Some(chunk) = self.next().await {
            let chunk = chunk?;
            writer.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        writer.flush().await?;
        Ok(written)
    }

    fn fail(
        &mut self,
        range: AbsoluteRange,
        source: BoxError,
    ) -> Poll<Option<Result<Bytes, EncodeError>>> {
        debug!(%range, error = %source, "拉取分段内容失败，终止编码");
        self.parts.clear();
        self.state = EncodeState::Done;
        Poll::Ready(Some(Err(EncodeError::Fetch { range, source })))
    }
}

/// 按单块上限从 `pending` 中取出下一块。
fn split_chunk(pending: &mut Bytes, max_chunk_size: Option<usize>) -> Bytes {
    match max_chunk_size {
        Some(n) if pending.len() > n => pending.split_to(n),
        _ => mem::take(pending),
    }
}

impl Stream for MultipartByteRangeEncoder {
    type Item = Result<Bytes, EncodeError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            match mem::replace(&mut this.state, EncodeState::Done) {
                EncodeState::BeforePart => {
                    let Some(part) = this.parts.pop_front() else {
                        debug!(boundary = %this.boundary, "所有分段已输出");
                        return Poll::Ready(None);
                    };

                    let range = part.range;
                    let fetcher = Arc::clone(&this.fetcher);
                    debug!(%range, "开始输出分段");
                    this.state = EncodeState::Opening {
                        range,
                        footer: part.footer,
                        content: async move { fetcher.fetch(range).await }.boxed(),
                    };
                    return Poll::Ready(Some(Ok(part.header)));
                }
                EncodeState::Opening {
                    range,
                    footer,
                    mut content,
                } => match content.poll_unpin(cx) {
                    Poll::Pending => {
                        this.state = EncodeState::Opening {
                            range,
                            footer,
                            content,
                        };
                        return Poll::Pending;
                    }
                    Poll::Ready(Ok(content)) => {
                        this.state = EncodeState::StreamingPart {
                            range,
                            footer,
                            content,
                            pending: Bytes::new(),
                        };
                    }
                    Poll::Ready(Err(source)) => return this.fail(range, source),
                },
                EncodeState::StreamingPart {
                    range,
                    footer,
                    mut content,
                    mut pending,
                } => {
                    if !pending.is_empty() {
                        let chunk = split_chunk(&mut pending, this.max_chunk_size);
                        this.state = EncodeState::StreamingPart {
                            range,
                            footer,
                            content,
                            pending,
                        };
                        return Poll::Ready(Some(Ok(chunk)));
                    }

                    match content.poll_next_unpin(cx) {
                        Poll::Pending => {
                            this.state = EncodeState::StreamingPart {
                                range,
                                footer,
                                content,
                                pending,
                            };
                            return Poll::Pending;
                        }
                        Poll::Ready(Some(Ok(chunk))) => {
                            trace!(%range, len = chunk.len(), "收到内容块");
                            this.state = EncodeState::StreamingPart {
                                range,
                                footer,
                                content,
                                pending: chunk,
                            };
                        }
                        Poll::Ready(Some(Err(source))) => return this.fail(range, source),
                        Poll::Ready(None) => {
                            this.state = EncodeState::BeforePart;
                            return Poll::Ready(Some(Ok(footer)));
                        }
                    }
                }
                EncodeState::Done => return Poll::Ready(None),
            }
        }
    }
}
