//! 单个分段的线上字节：
//!
//! ```text
//! --{boundary}\r\n
//! Content-Type: {type}\r\n
//! Content-Range: bytes {first}-{last}/{total|*}\r\n
//! \r\n
//! {content}\r\n
//! ```
//!
//! 最后一个分段的尾部额外带上 `--{boundary}--\r\n`。

use bytes::Bytes;

use crate::internal::framing::structs::{EncodeOptions, FramedPart};
use crate::internal::range::functions::format_content_range;
use crate::internal::range::structs::{AbsoluteRange, RangeError};

const LINE_BREAK: &str = "\r\n";

pub fn encode_part_header(boundary: &str, range: AbsoluteRange, options: &EncodeOptions) -> Bytes {
    let content_range = format_content_range(range, options.total_size);
    Bytes::from(format!(
        "--{boundary}{LINE_BREAK}Content-Type: {}{LINE_BREAK}Content-Range: {content_range}{LINE_BREAK}{LINE_BREAK}",
        options.content_type
    ))
}

pub fn encode_part_footer(boundary: &str, is_last: bool) -> Bytes {
    if is_last {
        Bytes::from(format!("{LINE_BREAK}--{boundary}--{LINE_BREAK}"))
    } else {
        Bytes::from_static(LINE_BREAK.as_bytes())
    }
}

/// 按范围顺序为每个分段生成头部与尾部，仅最后一个分段带结束分隔符。
pub fn frame_parts(
    boundary: &str,
    ranges: &[AbsoluteRange],
    options: &EncodeOptions,
) -> Vec<FramedPart> {
    let count = ranges.len();
    ranges
        .iter()
        .enumerate()
        .map(|(i, range)| FramedPart {
            header: encode_part_header(boundary, *range, options),
            range: *range,
            footer: encode_part_footer(boundary, i + 1 == count),
        })
        .collect()
}

/// 整个响应体的字节数，即 `Content-Length`；超出 `u64` 时返回 [`RangeError::TooLarge`]。
pub fn framed_length(parts: &[FramedPart]) -> Result<u64, RangeError> {
    parts.iter().try_fold(0u64, |total, part| {
        part.encoded_len()
            .and_then(|len| total.checked_add(len))
            .ok_or(RangeError::TooLarge)
    })
}
