//! 范围解析相关错误类型。

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// 后缀范围需要已知资源总大小。
    #[error("请求了后缀范围，但资源总大小未知")]
    Unresolvable,

    #[error("范围起点大于终点: {first}-{last}")]
    Inverted { first: u64, last: u64 },

    #[error("后缀范围 {offset} 无法满足，资源总大小为 {total}")]
    Unsatisfiable { offset: i64, total: u64 },

    /// 范围长度或响应体总长度超出 `u64`。
    #[error("范围过大，响应体长度超出 u64 可表示范围")]
    TooLarge,
}
