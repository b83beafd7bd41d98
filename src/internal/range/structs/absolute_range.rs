use std::fmt;

use super::range_error::RangeError;

/// 已解析的绝对字节范围 `[first, last]`，两端都包含，且 `first <= last`。
///
/// 由范围解析得到，交给拉取器读取内容，也用于生成分段的 `Content-Range`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AbsoluteRange {
    first: u64,
    last: u64,
}

impl AbsoluteRange {
    /// 构建绝对范围；`first > last` 时返回 [`RangeError::Inverted`]。
    pub fn new(first: u64, last: u64) -> Result<Self, RangeError> {
        if first > last {
            return Err(RangeError::Inverted { first, last });
        }
        Ok(Self { first, last })
    }

    /// 起始字节（包含）。
    pub fn first(&self) -> u64 {
        self.first
    }

    /// 结束字节（包含）。
    pub fn last(&self) -> u64 {
        self.last
    }

    /// 范围覆盖的字节数，至少为 1；`0-u64::MAX` 覆盖 2^64 个字节，无法表示，返回 `None`。
    pub fn len(&self) -> Option<u64> {
        (self.last - self.first).checked_add(1)
    }

    /// 不含上界的结束偏移，即 `last + 1`；溢出时饱和。
    pub fn end_exclusive(&self) -> u64 {
        self.last.saturating_add(1)
    }
}

impl fmt::Display for AbsoluteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}
