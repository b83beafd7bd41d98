//! 增量分隔符扫描器（Horspool 变体）。
//!
//! 分隔符可能横跨两块输入：块末尾可能构成分隔符前缀的字节暂存在 `lookbehind` 中，
//! 等下一块到达后再判定是匹配还是普通数据。状态严格按块到达顺序推进。

use super::scan_event::ScanEvent;

/// 对暂存字节的判定结果。
enum Lookbehind {
    /// 从暂存字节的 `start` 处开始匹配成功，消耗了新块的前 `consumed` 个字节。
    Matched { start: usize, consumed: usize },
    /// 从 `start` 处起与新块拼接后仍只是分隔符的前缀，需要等待更多输入。
    Pending { start: usize },
    /// 暂存字节都不可能属于分隔符。
    Released,
}

#[derive(Debug, Clone)]
pub struct BoundaryScanner {
    pattern: Vec<u8>,
    /// Horspool 跳跃表：按窗口末字节决定右移距离
    skip: [usize; 256],
    /// 上一块末尾未判定的字节，长度始终小于 `pattern.len()`
    lookbehind: Vec<u8>,
    matches: u64,
}

impl BoundaryScanner {
    /// 创建扫描器；分隔符为空时返回 `None`。
    pub fn new(pattern: impl Into<Vec<u8>>) -> Option<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return None;
        }

        let n = pattern.len();
        let mut skip = [n; 256];
        for (i, b) in pattern[..n - 1].iter().enumerate() {
            skip[*b as usize] = n - 1 - i;
        }

        Some(Self {
            pattern,
            skip,
            lookbehind: Vec::with_capacity(n),
            matches: 0,
        })
    }

    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    /// 目前为止找到的分隔符数量。
    pub fn matches(&self) -> u64 {
        self.matches
    }

    /// 暂存、尚未判定的字节数。
    pub fn pending_len(&self) -> usize {
        self.lookbehind.len()
    }

    /// 推入一块输入，按顺序对每段非匹配数据与每次匹配调用 `on_event`。
    ///
    /// `on_event` 返回错误时立即停止并返回该错误，此后扫描器状态不再可靠。
    pub fn push<E>(
        &mut self,
        chunk: &[u8],
        mut on_event: impl FnMut(ScanEvent<'_>) -> Result<(), E>,
    ) -> Result<(), E> {
        if chunk.is_empty() {
            return Ok(());
        }

        let n = self.pattern.len();
        let mut pos = 0;

        if !self.lookbehind.is_empty() {
            match self.resolve_lookbehind(chunk) {
                Lookbehind::Matched { start, consumed } => {
                    if start > 0 {
                        on_event(ScanEvent::Data(&self.lookbehind[..start]))?;
                    }
                    self.lookbehind.clear();
                    self.matches += 1;
                    on_event(ScanEvent::Match)?;
                    pos = consumed;
                }
                Lookbehind::Pending { start } => {
                    if start > 0 {
                        on_event(ScanEvent::Data(&self.lookbehind[..start]))?;
                    }
                    self.lookbehind.drain(..start);
                    self.lookbehind.extend_from_slice(chunk);
                    return Ok(());
                }
                Lookbehind::Released => {
                    on_event(ScanEvent::Data(&self.lookbehind))?;
                    self.lookbehind.clear();
                }
            }
        }

        let mut i = pos;
        while i + n <= chunk.len() {
            if chunk[i..i + n] == self.pattern[..] {
                if i > pos {
                    on_event(ScanEvent::Data(&chunk[pos..i]))?;
                }
                self.matches += 1;
                on_event(ScanEvent::Match)?;
                i += n;
                pos = i;
            } else {
                i += self.skip[chunk[i + n - 1] as usize];
            }
        }

        // 末尾不足一个完整窗口的部分：找最早一个仍可能是分隔符前缀的位置
        let tail_from = pos.max(chunk.len().saturating_sub(n - 1));
        let tail = (tail_from..chunk.len())
            .find(|&t| self.pattern.starts_with(&chunk[t..]))
            .unwrap_or(chunk.len());

        if tail > pos {
            on_event(ScanEvent::Data(&chunk[pos..tail]))?;
        }
        self.lookbehind.extend_from_slice(&chunk[tail..]);
        Ok(())
    }

    /// 输入结束：暂存的字节不会再构成分隔符，作为普通数据交出。
    pub fn finish<E>(
        &mut self,
        mut on_event: impl FnMut(ScanEvent<'_>) -> Result<(), E>,
    ) -> Result<(), E> {
        if !self.lookbehind.is_empty() {
            on_event(ScanEvent::Data(&self.lookbehind))?;
            self.lookbehind.clear();
        }
        Ok(())
    }

    fn resolve_lookbehind(&self, chunk: &[u8]) -> Lookbehind {
        let n = self.pattern.len();
        for start in 0..self.lookbehind.len() {
            let held = &self.lookbehind[start..];
            if !self.pattern.starts_with(held) {
                continue;
            }
            let need = n - held.len();
            let take = need.min(chunk.len());
            if chunk[..take] != self.pattern[held.len()..held.len() + take] {
                continue;
            }
            return if take == need {
                Lookbehind::Matched {
                    start,
                    consumed: need,
                }
            } else {
                Lookbehind::Pending { start }
            };
        }
        Lookbehind::Released
    }
}
