//! 焦点状态定义

/// 当前聚焦的分区
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionFocus {
    index: usize,
    count: usize,
}

impl SectionFocus {
    /// 焦点落在第一个分区
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is(&self, index: usize) -> bool {
        self.index == index
    }

    /// 切换到下一个分区（末尾回到开头）
    pub fn next(&mut self) {
        if self.count > 0 {
            self.index = (self.index + 1) % self.count;
        }
    }

    /// 切换到上一个分区（开头回到末尾）
    pub fn previous(&mut self) {
        if self.count > 0 {
            self.index = (self.index + self.count - 1) % self.count;
        }
    }
}
