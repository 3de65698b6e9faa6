//! Record and query state models / 数据模型
//!
//! Records are produced once by the generator and never mutated afterwards.
//! Query state is an immutable snapshot handed to the pure search functions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Status text that marks a person as active / 活跃状态文本
pub const ACTIVE_STATUS: &str = "Active recently";

/// One searchable entity / 可搜索的记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub link: String,
    #[serde(flatten)]
    pub kind: RecordKind,
}

/// Record type tag / 记录类型
///
/// Only `Person` carries extra data (the avatar URL).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecordKind {
    Person { avatar: String },
    File,
    Image,
    Video,
    Folder,
    Chat,
    List,
}

impl RecordKind {
    /// Type name as used in the `type` field / 类型名
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person { .. } => "person",
            Self::File => "file",
            Self::Image => "image",
            Self::Video => "video",
            Self::Folder => "folder",
            Self::Chat => "chat",
            Self::List => "list",
        }
    }

    /// Bucket this type is grouped under / 所属分类
    pub fn category(&self) -> Category {
        match self {
            Self::Person { .. } => Category::People,
            Self::File | Self::Image | Self::Video | Self::Folder => Category::Files,
            Self::Chat => Category::Chats,
            Self::List => Category::Lists,
        }
    }
}

impl Record {
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    pub fn avatar(&self) -> Option<&str> {
        match &self.kind {
            RecordKind::Person { avatar } => Some(avatar),
            _ => None,
        }
    }

    /// Activity flag, only meaningful for people / 是否活跃（仅人员）
    pub fn is_active(&self) -> bool {
        matches!(self.kind, RecordKind::Person { .. }) && self.status == ACTIVE_STATUS
    }
}

/// Category tab / 分类标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    All,
    Files,
    People,
    Chats,
    Lists,
}

impl Category {
    /// Every tab in display order / 所有标签（显示顺序）
    pub const ALL_TABS: [Category; 5] = [
        Category::All,
        Category::Files,
        Category::People,
        Category::Chats,
        Category::Lists,
    ];

    /// Tabs that can be switched on and off / 可开关的标签
    pub const TOGGLEABLE: [Category; 4] = [
        Category::Files,
        Category::People,
        Category::Chats,
        Category::Lists,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Files => "Files",
            Self::People => "People",
            Self::Chats => "Chats",
            Self::Lists => "Lists",
        }
    }

    /// Whether a record falls into this tab / 记录是否属于该分类
    pub fn contains(&self, record: &Record) -> bool {
        match self {
            Self::All => true,
            other => record.category() == *other,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL_TABS
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::invalid_argument(format!("unknown category: {}", s)))
    }
}

/// Enabled-category flags from the settings panel / 分类开关设置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CategorySettings {
    pub files: bool,
    pub people: bool,
    pub chats: bool,
    pub lists: bool,
}

impl Default for CategorySettings {
    fn default() -> Self {
        Self {
            files: true,
            people: true,
            chats: false,
            lists: false,
        }
    }
}

impl CategorySettings {
    /// All toggleable tabs switched on / 全部开启
    pub fn all_enabled() -> Self {
        Self {
            files: true,
            people: true,
            chats: true,
            lists: true,
        }
    }

    /// `All` is always enabled / `All` 始终可见
    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::All => true,
            Category::Files => self.files,
            Category::People => self.people,
            Category::Chats => self.chats,
            Category::Lists => self.lists,
        }
    }

    /// Flip one flag; toggling `All` is a no-op / 切换开关
    pub fn toggle(&mut self, category: Category) {
        match category {
            Category::All => {}
            Category::Files => self.files = !self.files,
            Category::People => self.people = !self.people,
            Category::Chats => self.chats = !self.chats,
            Category::Lists => self.lists = !self.lists,
        }
    }

    /// Visible tabs, `All` first / 可见标签
    pub fn visible_tabs(&self) -> Vec<Category> {
        Category::ALL_TABS
            .into_iter()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }
}

/// Snapshot of what the user asked for / 查询状态快照
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    pub query: String,
    pub category: Category,
    pub settings: CategorySettings,
}

impl QueryState {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_settings(mut self, settings: CategorySettings) -> Self {
        self.settings = settings;
        self
    }
}
