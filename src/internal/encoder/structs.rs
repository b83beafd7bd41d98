pub mod encode_error;
pub mod encoded_headers;
pub mod fetcher_adapters;
pub mod multipart_encoder;

// 重导出公共类型
pub use encode_error::EncodeError;
pub use encoded_headers::EncodedHeaders;
pub use fetcher_adapters::{FnFetcher, MemoryFetcher};
pub use multipart_encoder::MultipartByteRangeEncoder;
