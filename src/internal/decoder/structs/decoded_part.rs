use bytes::Bytes;
use reqwest::header::{CONTENT_RANGE, HeaderMap};

use crate::internal::decoder::functions::decode_part_header;
use crate::internal::range::functions::parse_content_range;
use crate::internal::range::structs::ContentRange;

use super::decode_error::DecodeError;

/// 解码得到的一个分段。两部分都是独立持有的 `Bytes`，可在后续解码中继续使用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPart {
    /// 头部块，不含首行换行与结尾空行
    pub header: Bytes,
    /// 内容块，不含结尾换行
    pub content: Bytes,
}

impl DecodedPart {
    /// 解析头部块，见 [`decode_part_header`]。
    pub fn headers(&self) -> Result<HeaderMap, DecodeError> {
        decode_part_header(&self.header)
    }

    /// 读取并解析 `Content-Range` 头；缺失或格式不符时为 `None`。
    pub fn content_range(&self) -> Option<ContentRange> {
        let headers = self.headers().ok()?;
        parse_content_range(headers.get(CONTENT_RANGE)?.to_str().ok()?)
    }
}
