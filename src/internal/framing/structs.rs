pub mod encode_options;
pub mod framed_part;

// 重导出公共类型
pub use encode_options::{DEFAULT_CONTENT_TYPE, EncodeOptions};
pub use framed_part::FramedPart;
