/// 内部实现模块
mod internal;


pub use internal::BoxError;

/// 字节范围：范围描述、解析与 `Content-Range` 处理
pub mod range {
    use crate::internal;
    pub use internal::range::functions::*;
    pub use internal::range::structs::*;
}

/// 分段成帧：分隔符与每个分段的头部/尾部字节，编码器与需要自行拼装响应的调用方都可以使用
pub mod framing {
    use crate::internal;
    pub use internal::framing::functions::*;
    pub use internal::framing::structs::*;
}

/// 增量分隔符扫描
pub mod scanner {
    use crate::internal;
    pub use internal::scanner::structs::*;
}

pub mod encoder {
    use crate::internal;
    // 结构体与适配器
    pub use internal::encoder::structs::*;
    pub use internal::encoder::structs::fetcher_adapters::DEFAULT_MEMORY_CHUNK_SIZE;
    // 拉取器接口
    pub use internal::encoder::traits::*;
    // 编码配置与范围类型，方便单独引入编码器时使用
    pub use internal::framing::structs::{DEFAULT_CONTENT_TYPE, EncodeOptions};
    pub use internal::range::structs::{AbsoluteRange, RangeError, RangeSpec};
}

pub mod decoder {
    use crate::internal;
    pub use internal::decoder::functions::*;
    pub use internal::decoder::structs::*;
}
