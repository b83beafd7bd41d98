//! 从 `Content-Type` 中提取 `boundary` 参数。

use reqwest::header::{CONTENT_TYPE, HeaderMap};

const BOUNDARY_PARAM: &str = "boundary=";

/// 在 `Content-Type` 值中查找 `boundary=`（大小写不敏感）并返回其值。
///
/// 支持引号包裹的值；未加引号时取到第一个非 `[A-Za-z0-9_-]` 字符为止。
pub fn get_boundary(content_type: &str) -> Option<String> {
    // 只做 ASCII 小写转换，字节下标与原串一致
    let lower = content_type.to_ascii_lowercase();
    let start = lower.find(BOUNDARY_PARAM)? + BOUNDARY_PARAM.len();
    let rest = &content_type[start..];

    let token = match rest.strip_prefix('"') {
        Some(quoted) => &quoted[..quoted.find('"')?],
        None => {
            let end = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
                .unwrap_or(rest.len());
            &rest[..end]
        }
    };

    (!token.is_empty()).then(|| token.to_string())
}

pub fn get_boundary_from_headers(headers: &HeaderMap) -> Option<String> {
    get_boundary(headers.get(CONTENT_TYPE)?.to_str().ok()?)
}
