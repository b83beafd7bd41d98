//! 将范围描述解析为绝对范围。纯函数，无副作用、无 I/O。

use crate::internal::range::structs::{AbsoluteRange, RangeError, RangeSpec};

/// 解析单个范围。
///
/// - 绝对范围原样返回，不与总大小比对（越界由拉取器自行报错）；
/// - 后缀范围要求 `total_size` 已知，否则返回 [`RangeError::Unresolvable`]；
/// - 负后缀长于资源时取整个资源。
pub fn resolve_range(
    spec: RangeSpec,
    total_size: Option<u64>,
) -> Result<AbsoluteRange, RangeError> {
    let offset = match spec {
        RangeSpec::Absolute { first, last } => return AbsoluteRange::new(first, last),
        RangeSpec::Suffix(offset) => offset,
    };

    let total = total_size.ok_or(RangeError::Unresolvable)?;
    let unsatisfiable = RangeError::Unsatisfiable { offset, total };
    let last = total.checked_sub(1).ok_or_else(|| unsatisfiable.clone())?;

    let first = if offset >= 0 {
        let first = offset.unsigned_abs();
        if first > last {
            return Err(unsatisfiable);
        }
        first
    } else {
        total.saturating_sub(offset.unsigned_abs())
    };

    AbsoluteRange::new(first, last)
}

/// 按输入顺序解析一组范围；任一范围失败即整体失败。
pub fn resolve_ranges(
    specs: &[RangeSpec],
    total_size: Option<u64>,
) -> Result<Vec<AbsoluteRange>, RangeError> {
    specs
        .iter()
        .map(|spec| resolve_range(*spec, total_size))
        .collect()
}
