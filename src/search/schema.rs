//! Search output types / 搜索结果结构

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Category, Record};

/// Per-bucket match counts, independent of tab visibility / 各分类匹配数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub all: usize,
    pub files: usize,
    pub people: usize,
    pub chats: usize,
    pub lists: usize,
}

impl CategoryCounts {
    /// Count matched records per bucket / 统计匹配记录
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut counts = Self::default();
        for record in records {
            counts.all += 1;
            match record.category() {
                Category::Files => counts.files += 1,
                Category::People => counts.people += 1,
                Category::Chats => counts.chats += 1,
                Category::Lists => counts.lists += 1,
                Category::All => {}
            }
        }
        counts
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::All => self.all,
            Category::Files => self.files,
            Category::People => self.people,
            Category::Chats => self.chats,
            Category::Lists => self.lists,
        }
    }
}

/// Result of one search / 搜索结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchOutcome {
    /// Matched records restricted to the selected category / 当前分类下的结果
    pub filtered: Vec<Record>,
    /// Count per visible tab / 可见标签的计数
    pub counts: BTreeMap<Category, usize>,
    /// Counts for every bucket / 所有分类的计数
    pub totals: CategoryCounts,
    /// Visible tabs in display order / 可见标签
    pub tabs: Vec<Category>,
}

impl SearchOutcome {
    pub fn count(&self, category: Category) -> Option<usize> {
        self.counts.get(&category).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}
