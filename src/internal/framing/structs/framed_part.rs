use bytes::Bytes;

use crate::internal::range::structs::AbsoluteRange;

/// 已成帧的分段：头部、对应的绝对范围与尾部。内容在编码时才向拉取器请求。
#[derive(Debug, Clone)]
pub struct FramedPart {
    pub header: Bytes,
    pub range: AbsoluteRange,
    pub footer: Bytes,
}

impl FramedPart {
    /// 该分段在响应体中占用的字节数：头部 + 内容 + 尾部；溢出时为 `None`。
    pub fn encoded_len(&self) -> Option<u64> {
        self.range
            .len()?
            .checked_add(self.header.len() as u64)?
            .checked_add(self.footer.len() as u64)
    }
}
