//! 解码入口：包装任意字节流，或直接解码一个 HTTP 响应。

use bytes::Bytes;
use futures_util::stream::BoxStream;
use futures_util::{Stream, StreamExt};

use crate::internal::BoxError;
use crate::internal::decoder::structs::{DecodeError, DecodeStream, MultipartByteRangeDecoder};

use super::boundary_param::get_boundary_from_headers;

/// `reqwest` 响应体对应的字节流。
pub type ResponseStream = BoxStream<'static, Result<Bytes, reqwest::Error>>;

pub fn decode_stream<S, E>(boundary: &str, stream: S) -> Result<DecodeStream<S>, DecodeError>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
    E: Into<BoxError>,
{
    Ok(DecodeStream::new(MultipartByteRangeDecoder::new(boundary)?, stream))
}

/// 从响应的 `Content-Type` 取出分隔符并解码响应体；缺少分隔符时返回 [`DecodeError::MissingBoundary`]。
pub fn decode_response(
    response: reqwest::Response,
) -> Result<DecodeStream<ResponseStream>, DecodeError> {
    let boundary =
        get_boundary_from_headers(response.headers()).ok_or(DecodeError::MissingBoundary)?;
    decode_stream(&boundary, response.bytes_stream().boxed())
}
