//! `multipart/byteranges` 解码器的同步核心。
//!
//! 状态机：
//!
//! - `AwaitingFirstBoundary`：第一个分隔符之前的前导数据全部丢弃；
//! - `AccumulatingPart`：非分隔符字节追加到当前分段缓冲；遇到分隔符时按第一个空行切出头部与内容并输出；
//! - `Closed`：缓冲以 `--` 开头说明遇到了结束分隔符 `--{boundary}--`，之后的数据全部忽略。
//!
//! 缓冲中最多只有一个尚未闭合的分段，内存占用取决于最大的单个分段，而不是整个响应体。

use bytes::BytesMut;
use tracing::{debug, trace};

use crate::internal::scanner::structs::{BoundaryScanner, ScanEvent};

use super::decode_error::DecodeError;
use super::decoded_part::DecodedPart;
use super::decoder_options::DecoderOptions;

const LINE_BREAK: &[u8] = b"\r\n";
const DOUBLE_LINE_BREAK: &[u8] = b"\r\n\r\n";
const CLOSE_DELIMITER: &[u8] = b"--";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    AwaitingFirstBoundary,
    AccumulatingPart,
    Closed,
}

#[derive(Debug)]
pub struct MultipartByteRangeDecoder {
    scanner: BoundaryScanner,
    state: DecodeState,
    /// 当前分段的累积缓冲
    part: BytesMut,
    options: DecoderOptions,
    emitted: usize,
}

impl MultipartByteRangeDecoder {
    pub fn new(boundary: &str) -> Result<Self, DecodeError> {
        Self::with_options(boundary, DecoderOptions::default())
    }

    /// 分隔符为空时返回 [`DecodeError::MissingBoundary`]。
    pub fn with_options(boundary: &str, options: DecoderOptions) -> Result<Self, DecodeError> {
        if boundary.is_empty() {
            return Err(DecodeError::MissingBoundary);
        }
        let scanner = BoundaryScanner::new(format!("--{boundary}").into_bytes())
            .ok_or(DecodeError::MissingBoundary)?;

        Ok(Self {
            scanner,
            state: DecodeState::AwaitingFirstBoundary,
            part: BytesMut::new(),
            options,
            emitted: 0,
        })
    }

    /// 推入一块原始字节，返回本块中闭合的分段（按线上顺序）。
    pub fn push(&mut self, chunk: &[u8]) -> Result<Vec<DecodedPart>, DecodeError> {
        let mut parts = Vec::new();
        self.push_with(chunk, |part| parts.push(part))?;
        Ok(parts)
    }

    /// 推入一块原始字节，每闭合一个分段就调用一次 `on_part`。
    pub fn push_with(
        &mut self,
        chunk: &[u8],
        mut on_part: impl FnMut(DecodedPart),
    ) -> Result<(), DecodeError> {
        let Self {
            scanner,
            state,
            part,
            options,
            emitted,
        } = self;
        scanner.push(chunk, |event| {
            apply_event(event, state, part, options, emitted, &mut on_part)
        })
    }

    /// 输入结束时调用：交出扫描器暂存的字节。
    ///
    /// 结束分隔符恰好位于输入末尾（没有结尾换行）时，只有在这里才能确认已闭合。
    /// 暂存字节不会构成新的分隔符，因此不会再输出分段。
    pub fn finish(&mut self) -> Result<(), DecodeError> {
        let Self {
            scanner,
            state,
            part,
            options,
            emitted,
        } = self;
        scanner.finish(|event| apply_event(event, state, part, options, emitted, &mut |_| {}))
    }

    /// 当前分段缓冲中的字节数。
    pub fn buffered_len(&self) -> usize {
        self.part.len()
    }

    /// 已输出的分段数。
    pub fn parts_emitted(&self) -> usize {
        self.emitted
    }

    /// 是否已遇到结束分隔符。
    pub fn is_closed(&self) -> bool {
        self.state == DecodeState::Closed
    }
}

fn apply_event(
    event: ScanEvent<'_>,
    state: &mut DecodeState,
    part: &mut BytesMut,
    options: &DecoderOptions,
    emitted: &mut usize,
    on_part: &mut impl FnMut(DecodedPart),
) -> Result<(), DecodeError> {
    match (event, *state) {
        (_, DecodeState::Closed) => {}
        (ScanEvent::Data(_), DecodeState::AwaitingFirstBoundary) => {}
        (ScanEvent::Match, DecodeState::AwaitingFirstBoundary) => {
            trace!("找到第一个分隔符，丢弃前导数据");
            *state = DecodeState::AccumulatingPart;
        }
        (ScanEvent::Data(bytes), DecodeState::AccumulatingPart) => {
            if let Some(limit) = options.max_part_size {
                if part.len() + bytes.len() > limit {
                    return Err(DecodeError::PartTooLarge { limit });
                }
            }
            part.extend_from_slice(bytes);
            if part.starts_with(CLOSE_DELIMITER) {
                debug!(parts = *emitted, "遇到结束分隔符");
                part.clear();
                *state = DecodeState::Closed;
            }
        }
        (ScanEvent::Match, DecodeState::AccumulatingPart) => {
            let decoded = split_part(part)?;
            *emitted += 1;
            debug!(
                index = *emitted - 1,
                header_len = decoded.header.len(),
                content_len = decoded.content.len(),
                "解码出一个分段"
            );
            on_part(decoded);
        }
    }
    Ok(())
}

/// 取走整个缓冲，按第一个空行切分：空行之前（去掉首行换行）为头部，之后（去掉结尾换行）为内容。
fn split_part(part: &mut BytesMut) -> Result<DecodedPart, DecodeError> {
    let raw = part.split().freeze();
    let index = raw
        .windows(DOUBLE_LINE_BREAK.len())
        .position(|w| w == DOUBLE_LINE_BREAK)
        .ok_or(DecodeError::MalformedPart)?;

    let header_start = LINE_BREAK.len().min(index);
    let content_start = index + DOUBLE_LINE_BREAK.len();
    let content_end = raw
        .len()
        .saturating_sub(LINE_BREAK.len())
        .max(content_start);

    Ok(DecodedPart {
        header: raw.slice(header_start..index),
        content: raw.slice(content_start..content_end),
    })
}
