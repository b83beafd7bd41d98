/// 分段默认的 MIME 类型
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// 本次编码的配置。
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// 每个分段的 MIME 类型
    pub content_type: String,
    /// 资源总大小；未知时为 `None`，此时只允许绝对范围，`Content-Range` 分母写作 `*`
    pub total_size: Option<u64>,
    /// 指定分隔符；为 `None` 时每次编码随机生成
    pub boundary: Option<String>,
    /// 向下游输出的单块最大字节数；超出的内容块会被切分，不会合并
    pub max_chunk_size: Option<usize>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            total_size: None,
            boundary: None,
            max_chunk_size: None,
        }
    }
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn total_size(mut self, total_size: u64) -> Self {
        self.total_size = Some(total_size);
        self
    }

    /// 使用固定分隔符（测试或需要可复现输出时使用）。
    pub fn boundary(mut self, boundary: impl Into<String>) -> Self {
        self.boundary = Some(boundary.into());
        self
    }

    /// 设置单块输出上限；传 0 表示不限制。
    pub fn max_chunk_size(mut self, n: usize) -> Self {
        self.max_chunk_size = (n > 0).then_some(n);
        self
    }
}
