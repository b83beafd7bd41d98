//! 解码器测试：前导数据丢弃、逐字节输入、结束分隔符之后的数据、缺少空行的分段、分段上限、
//! 分隔符提取、头部解析、流适配器的错误传播、内存占用只取决于最大分段。

use bytes::Bytes;
use futures_util::stream;
use futures_util::StreamExt;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_RANGE, CONTENT_TYPE};

use crate::decoder::{
    decode_part_header, decode_stream, get_boundary, get_boundary_from_headers, DecodeError,
    DecoderOptions, MultipartByteRangeDecoder,
};
use crate::encoder::{EncodeOptions, MemoryFetcher, MultipartByteRangeEncoder, RangeSpec};
use crate::range::AbsoluteRange;
use crate::tests::{chunked, collect_body, decode_all, random_data};
use crate::BoxError;

const BODY: &[u8] = b"this is preamble\r\n\
--xyz\r\n\
Content-Type: text/plain\r\n\
Content-Range: bytes 0-2/10\r\n\
\r\n\
abc\r\n\
--xyz\r\n\
Content-Type: text/plain\r\n\
Content-Range: bytes 7-9/10\r\n\
\r\n\
hij\r\n\
--xyz--\r\n";

// ═══════════════════════════ 同步核心 ═══════════════════════════

#[test]
fn decodes_parts_and_discards_preamble() {
    let mut decoder = MultipartByteRangeDecoder::new("xyz").unwrap();
    let parts = decoder.push(BODY).unwrap();

    assert_eq!(parts.len(), 2);
    assert_eq!(
        &parts[0].header[..],
        b"Content-Type: text/plain\r\nContent-Range: bytes 0-2/10"
    );
    assert_eq!(&parts[0].content[..], b"abc");
    assert_eq!(&parts[1].content[..], b"hij");
    assert!(decoder.is_closed());
    assert_eq!(decoder.parts_emitted(), 2);
    assert_eq!(decoder.buffered_len(), 0);
}

#[test]
fn byte_at_a_time_matches_single_push() {
    let whole = decode_all("xyz", BODY, BODY.len());
    for size in [1, 2, 3, 5, 8, 13] {
        assert_eq!(decode_all("xyz", BODY, size), whole, "chunk size {size}");
    }
}

#[test]
fn parts_are_emitted_as_soon_as_next_boundary_arrives() {
    let split = BODY.windows(12).position(|w| w == b"abc\r\n--xyz\r\n").unwrap() + 12;
    let mut decoder = MultipartByteRangeDecoder::new("xyz").unwrap();

    let first = decoder.push(&BODY[..split]).unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(&first[0].content[..], b"abc");

    let rest = decoder.push(&BODY[split..]).unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(&rest[0].content[..], b"hij");
}

#[test]
fn data_after_close_delimiter_is_ignored() {
    let mut body = BODY.to_vec();
    body.extend_from_slice(b"epilogue --xyz\r\nnot a part\r\n--xyz");

    let mut decoder = MultipartByteRangeDecoder::new("xyz").unwrap();
    let parts = decoder.push(&body).unwrap();
    assert_eq!(parts.len(), 2);
    assert!(decoder.is_closed());
}

#[test]
fn truncated_input_keeps_partial_part_buffered() {
    let cut = BODY.len() - 12;
    let mut decoder = MultipartByteRangeDecoder::new("xyz").unwrap();
    let parts = decoder.push(&BODY[..cut]).unwrap();

    assert_eq!(parts.len(), 1);
    assert!(!decoder.is_closed());
    assert!(decoder.buffered_len() > 0);

    decoder.finish().unwrap();
    assert!(!decoder.is_closed());
    assert_eq!(decoder.parts_emitted(), 1);
}

#[test]
fn close_delimiter_at_end_of_input_is_confirmed_by_finish() {
    let body: &[u8] = b"--xyz\r\nContent-Type: a\r\n\r\nabc\r\n--xyz--";
    let mut decoder = MultipartByteRangeDecoder::new("xyz").unwrap();

    let parts = decoder.push(body).unwrap();
    assert_eq!(parts.len(), 1);
    assert_eq!(&parts[0].content[..], b"abc");
    // 末尾的 `--` 仍可能是下一个分隔符的开头
    assert!(!decoder.is_closed());

    decoder.finish().unwrap();
    assert!(decoder.is_closed());
    assert_eq!(decoder.parts_emitted(), 1);
    assert_eq!(decoder.buffered_len(), 0);
}

#[test]
fn part_without_blank_line_is_malformed() {
    let mut decoder = MultipartByteRangeDecoder::new("b").unwrap();
    let result = decoder.push(b"--b\r\nContent-Type: text/plain\r\nno separator\r\n--b--\r\n");
    assert!(matches!(result, Err(DecodeError::MalformedPart)));
}

#[test]
fn empty_boundary_is_rejected() {
    assert!(matches!(
        MultipartByteRangeDecoder::new(""),
        Err(DecodeError::MissingBoundary)
    ));
}

#[test]
fn part_size_limit_is_enforced() {
    let options = DecoderOptions::new().max_part_size(32);
    let mut decoder = MultipartByteRangeDecoder::with_options("xyz", options).unwrap();
    let result = decoder.push(BODY);
    assert!(matches!(result, Err(DecodeError::PartTooLarge { limit: 32 })));

    let options = DecoderOptions::new().max_part_size(128);
    let mut decoder = MultipartByteRangeDecoder::with_options("xyz", options).unwrap();
    assert_eq!(decoder.push(BODY).unwrap().len(), 2);
}

#[test]
fn content_range_accessor() {
    let parts = decode_all("xyz", BODY, 4);
    let range = parts[1].content_range().unwrap();
    assert_eq!(range.range, AbsoluteRange::new(7, 9).unwrap());
    assert_eq!(range.total_size, Some(10));
}

// ═══════════════════════════ 辅助函数 ═══════════════════════════

#[test]
fn boundary_is_extracted_from_content_type() {
    assert_eq!(
        get_boundary("multipart/byteranges; boundary=abc-123_x").as_deref(),
        Some("abc-123_x")
    );
    assert_eq!(
        get_boundary("multipart/byteranges; BOUNDARY=Abc; charset=utf-8").as_deref(),
        Some("Abc")
    );
    assert_eq!(
        get_boundary("multipart/byteranges; boundary=\"quoted value\"").as_deref(),
        Some("quoted value")
    );
    assert_eq!(get_boundary("multipart/byteranges"), None);
    assert_eq!(get_boundary("multipart/byteranges; boundary="), None);
}

#[test]
fn boundary_is_extracted_from_header_map() {
    let mut headers = HeaderMap::new();
    assert_eq!(get_boundary_from_headers(&headers), None);

    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("multipart/byteranges; boundary=-----123"),
    );
    assert_eq!(get_boundary_from_headers(&headers).as_deref(), Some("-----123"));
}

#[test]
fn part_header_is_parsed_case_insensitively() {
    let headers =
        decode_part_header(b"Content-Type:  text/plain \r\nContent-Range: bytes 0-2/10").unwrap();
    assert_eq!(headers.get("content-type").unwrap(), "text/plain");
    assert_eq!(headers.get(CONTENT_RANGE).unwrap(), "bytes 0-2/10");
    assert_eq!(headers.len(), 2);
}

#[test]
fn part_header_line_without_colon_is_rejected() {
    let result = decode_part_header(b"Content-Type: text/plain\r\ngarbage");
    assert!(matches!(result, Err(DecodeError::InvalidPartHeader(line)) if line == "garbage"));
}

// ═══════════════════════════ 流适配器 ═══════════════════════════

#[tokio::test]
async fn decode_stream_yields_parts_in_order() {
    let parts: Vec<_> = decode_stream("xyz", chunked(BODY, 7))
        .unwrap()
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(parts, decode_all("xyz", BODY, BODY.len()));
}

#[tokio::test]
async fn source_error_is_reported_after_closed_parts() {
    let split = BODY.windows(12).position(|w| w == b"abc\r\n--xyz\r\n").unwrap() + 12;
    let chunks: Vec<Result<Bytes, BoxError>> = vec![
        Ok(Bytes::copy_from_slice(&BODY[..split])),
        Err(BoxError::from("上游断开")),
        Ok(Bytes::copy_from_slice(&BODY[split..])),
    ];
    let mut parts = decode_stream("xyz", stream::iter(chunks)).unwrap();

    let first = parts.next().await.unwrap().unwrap();
    assert_eq!(&first.content[..], b"abc");
    assert!(matches!(parts.next().await, Some(Err(DecodeError::Source(_)))));
    assert!(parts.next().await.is_none());
}

#[tokio::test]
async fn malformed_part_is_reported_after_earlier_parts() {
    let body: &[u8] = b"--b\r\nContent-Type: x\r\n\r\nok\r\n--b\r\nbroken\r\n--b--\r\n";
    let mut parts = decode_stream("b", chunked(body, body.len())).unwrap();

    assert_eq!(&parts.next().await.unwrap().unwrap().content[..], b"ok");
    assert!(matches!(parts.next().await, Some(Err(DecodeError::MalformedPart))));
    assert!(parts.next().await.is_none());
}

#[tokio::test]
async fn decode_stream_finishes_on_close_without_trailing_line_break() {
    let body: &[u8] = b"--xyz\r\nContent-Type: a\r\n\r\nabc\r\n--xyz--";
    let mut parts = decode_stream("xyz", chunked(body, 4)).unwrap();

    assert_eq!(&parts.next().await.unwrap().unwrap().content[..], b"abc");
    assert!(parts.next().await.is_none());
    assert!(parts.decoder().is_closed());
    assert_eq!(parts.decoder().parts_emitted(), 1);
}

// ═══════════════════════════ 内存占用 ═══════════════════════════

#[tokio::test]
async fn buffered_bytes_track_largest_part_not_total() {
    const LARGE: u64 = 1024 * 1024;
    let total = LARGE + 64 * 1024;
    let data = random_data(total as usize, 12);
    let ranges = [
        RangeSpec::absolute(0, 99),
        RangeSpec::absolute(1000, LARGE + 999),
        RangeSpec::absolute(LARGE + 2000, LARGE + 2099),
        RangeSpec::suffix(-200_000),
        RangeSpec::absolute(10, 19),
    ];
    let encoder = MultipartByteRangeEncoder::new(
        &ranges,
        MemoryFetcher::new(data),
        EncodeOptions::new().total_size(total),
    )
    .unwrap();
    let boundary = encoder.boundary().to_string();
    let (body, _) = collect_body(encoder).await.unwrap();

    let mut decoder = MultipartByteRangeDecoder::new(&boundary).unwrap();
    let mut peak = 0;
    let mut content_sum = 0;
    let mut count = 0;
    for chunk in body.chunks(4096) {
        for part in decoder.push(chunk).unwrap() {
            content_sum += part.content.len();
            count += 1;
        }
        peak = peak.max(decoder.buffered_len());
    }

    assert_eq!(count, ranges.len());
    // 峰值接近最大分段，而不是所有分段之和
    assert!(peak >= LARGE as usize - 4096, "peak {peak}");
    assert!(peak < LARGE as usize + 4096, "peak {peak}");
    assert!(content_sum > peak + 100_000);
}
