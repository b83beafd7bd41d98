pub mod content_range_codec;
pub mod resolve_range;

pub use content_range_codec::{format_content_range, parse_content_range};
pub use resolve_range::{resolve_range, resolve_ranges};
