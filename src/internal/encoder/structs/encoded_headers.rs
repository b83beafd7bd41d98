use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderMap, HeaderValue};

use super::encode_error::EncodeError;

/// 编码器在构建时就确定的响应头。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedHeaders {
    /// 整个响应体的精确字节数
    pub content_length: u64,
    /// `multipart/byteranges; boundary=...`
    pub content_type: String,
}

impl EncodedHeaders {
    /// 以 `(名称, 值)` 形式返回，便于直接写出 HTTP/1.1 报文。
    pub fn to_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("Content-Length", self.content_length.to_string()),
            ("Content-Type", self.content_type.clone()),
        ]
    }

    pub fn to_header_map(&self) -> Result<HeaderMap, EncodeError> {
        let mut map = HeaderMap::new();
        map.insert(CONTENT_LENGTH, HeaderValue::from(self.content_length));
        map.insert(CONTENT_TYPE, HeaderValue::from_str(&self.content_type)?);
        Ok(map)
    }
}
