//! 调用方请求的字节范围描述。

use super::absolute_range::AbsoluteRange;

/// 请求的一个字节范围。
///
/// - `Absolute`：`[first, last]`，两端都包含；
/// - `Suffix(offset)`：`offset >= 0` 表示从第 `offset` 字节到末尾，`offset < 0` 表示资源最后 `|offset|` 个字节。
///
/// 后缀形式需要已知资源总大小才能解析为 [`AbsoluteRange`]。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeSpec {
    Absolute { first: u64, last: u64 },
    Suffix(i64),
}

impl RangeSpec {
    pub fn absolute(first: u64, last: u64) -> Self {
        Self::Absolute { first, last }
    }

    pub fn suffix(offset: i64) -> Self {
        Self::Suffix(offset)
    }

    /// 是否为后缀形式（解析时需要总大小）。
    pub fn is_suffix(&self) -> bool {
        matches!(self, Self::Suffix(_))
    }
}

impl From<AbsoluteRange> for RangeSpec {
    fn from(range: AbsoluteRange) -> Self {
        Self::Absolute {
            first: range.first(),
            last: range.last(),
        }
    }
}
