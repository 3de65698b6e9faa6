//! Search module - matching, filtering and highlighting primitives / 搜索模块
//!
//! Architecture principles / 架构原则：
//! - Search module only exposes pure operations: match_records, apply_view, search, highlight
//! - The session (debounce, state) decides when to call them / 会话控制调用时机
//! - Call direction: Session → Search (unidirectional) / 调用方向
//!
//! Matching features / 匹配特性：
//! - Case-insensitive substring match on the display name
//! - Full-string lowercase folding, mapped back to original offsets for highlighting
//! - No index: every query is a linear scan

pub mod engine;
pub mod highlight;
pub mod schema;
pub mod tokenizer;

pub use engine::{apply_view, match_records, search};
pub use highlight::{highlight, join_spans, Span};
pub use schema::{CategoryCounts, SearchOutcome};
