//! 分段头部解析。

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::internal::decoder::structs::DecodeError;

const LINE_BREAK: &str = "\r\n";

/// 将头部块按行拆分，每行以第一个冒号分为名称与值，值去掉首尾空白。
///
/// 名称大小写不敏感（`HeaderMap` 统一为小写）；空行忽略，无冒号或名称非法的行返回错误。
pub fn decode_part_header(bytes: &[u8]) -> Result<HeaderMap, DecodeError> {
    let text = String::from_utf8_lossy(bytes);
    let mut headers = HeaderMap::new();

    for line in text.split(LINE_BREAK) {
        if line.trim().is_empty() {
            continue;
        }
        let invalid = || DecodeError::InvalidPartHeader(line.to_string());
        let (name, value) = line.split_once(':').ok_or_else(invalid)?;
        let name = HeaderName::from_bytes(name.trim().as_bytes()).map_err(|_| invalid())?;
        let value = HeaderValue::from_str(value.trim()).map_err(|_| invalid())?;
        headers.append(name, value);
    }

    Ok(headers)
}
