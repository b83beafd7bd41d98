pub mod fetcher;

pub use fetcher::{ByteRangeFetcher, ContentStream};
