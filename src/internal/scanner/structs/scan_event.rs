/// 扫描一块输入时产生的事件。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent<'a> {
    /// 不属于分隔符的字节。视图只在回调期间有效，需要保留时由调用方复制。
    Data(&'a [u8]),
    /// 找到一个完整的分隔符。
    Match,
}
