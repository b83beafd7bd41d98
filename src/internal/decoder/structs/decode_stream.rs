use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use tracing::debug;

use crate::internal::BoxError;

use super::decode_error::DecodeError;
use super::decoded_part::DecodedPart;
use super::multipart_decoder::MultipartByteRangeDecoder;

/// 把原始字节流转换为分段流。
///
/// 上游每到达一块就推入解码器；出错后先交出错误之前已闭合的分段，再交出错误，然后结束。
pub struct DecodeStream<S> {
    inner: S,
    decoder: MultipartByteRangeDecoder,
    ready: VecDeque<DecodedPart>,
    failed: Option<DecodeError>,
    finished: bool,
}

impl<S> DecodeStream<S> {
    pub fn new(decoder: MultipartByteRangeDecoder, inner: S) -> Self {
        Self {
            inner,
            decoder,
            ready: VecDeque::new(),
            failed: None,
            finished: false,
        }
    }

    pub fn decoder(&self) -> &MultipartByteRangeDecoder {
        &self.decoder
    }
}

impl<S, E> Stream for DecodeStream<S>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
    E: Into<BoxError>,
{
    type Item = Result<DecodedPart, DecodeError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            if let Some(part) = this.ready.pop_front() {
                return Poll::Ready(Some(Ok(part)));
            }
            if let Some(err) = this.failed.take() {
                return Poll::Ready(Some(Err(err)));
            }
            if this.finished {
                return Poll::Ready(None);
            }

            match ready!(this.inner.poll_next_unpin(cx)) {
                Some(Ok(chunk)) => {
                    let queue = &mut this.ready;
                    if let Err(err) = this.decoder.push_with(&chunk, |part| queue.push_back(part)) {
                        this.failed = Some(err);
                        this.finished = true;
                    }
                }
                Some(Err(err)) => {
                    this.failed = Some(DecodeError::Source(err.into()));
                    this.finished = true;
                }
                None => {
                    if let Err(err) = this.decoder.finish() {
                        this.failed = Some(err);
                    } else if !this.decoder.is_closed() {
                        debug!(
                            parts = this.decoder.parts_emitted(),
                            buffered = this.decoder.buffered_len(),
                            "输入在结束分隔符之前终止"
                        );
                    }
                    this.finished = true;
                }
            }
        }
    }
}
