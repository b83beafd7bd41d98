//! `Content-Range: bytes {first}-{last}/{total|*}` 的格式化与解析。

use crate::internal::range::structs::{AbsoluteRange, ContentRange};

pub fn format_content_range(range: AbsoluteRange, total_size: Option<u64>) -> String {
    match total_size {
        Some(total) => format!("bytes {}-{}/{}", range.first(), range.last(), total),
        None => format!("bytes {}-{}/*", range.first(), range.last()),
    }
}

/// 解析 `Content-Range` 值；格式不符或起点大于终点时返回 `None`。
pub fn parse_content_range(value: &str) -> Option<ContentRange> {
    let rest = value.trim().strip_prefix("bytes")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let (span, total) = rest.trim_start().split_once('/')?;
    let (first, last) = span.trim().split_once('-')?;

    let range = AbsoluteRange::new(first.trim().parse().ok()?, last.trim().parse().ok()?).ok()?;
    let total_size = match total.trim() {
        "*" => None,
        t => Some(t.parse().ok()?),
    };

    Some(ContentRange { range, total_size })
}
