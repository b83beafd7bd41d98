/// 解码配置。
#[derive(Debug, Clone, Default)]
pub struct DecoderOptions {
    /// 单个分段（含头部）累积缓冲的上限；为 `None` 时不限制
    pub max_part_size: Option<usize>,
}

impl DecoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_part_size(mut self, limit: usize) -> Self {
        self.max_part_size = Some(limit);
        self
    }
}
