pub mod decode_error;
pub mod decode_stream;
pub mod decoded_part;
pub mod decoder_options;
pub mod multipart_decoder;

// 重导出公共类型
pub use decode_error::DecodeError;
pub use decode_stream::DecodeStream;
pub use decoded_part::DecodedPart;
pub use decoder_options::DecoderOptions;
pub use multipart_decoder::MultipartByteRangeDecoder;
