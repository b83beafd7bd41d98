pub mod absolute_range;
pub mod content_range;
pub mod range_error;
pub mod range_spec;

// 重导出公共类型
pub use absolute_range::AbsoluteRange;
pub use content_range::ContentRange;
pub use range_error::RangeError;
pub use range_spec::RangeSpec;
