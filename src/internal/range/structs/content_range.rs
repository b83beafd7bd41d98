use super::absolute_range::AbsoluteRange;

/// 解析后的 `Content-Range` 值：分段对应的绝对范围及资源总大小（`*` 时为 `None`）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentRange {
    pub range: AbsoluteRange,
    pub total_size: Option<u64>,
}
