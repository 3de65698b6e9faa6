//! Search engine - linear scan over an in-memory record list / 搜索引擎
//!
//! Pure functions only; callers pass an immutable `QueryState` snapshot.
//! - match_records: substring match on the display name / 名称匹配
//! - apply_view: category filter + tab counts over matched records / 分类过滤与计数
//! - search: both steps at once / 完整搜索

use std::collections::BTreeMap;

use crate::models::{QueryState, Record};

use super::schema::{CategoryCounts, SearchOutcome};
use super::tokenizer::contains_ignore_case;

/// Records whose name contains `query`, ignoring case / 匹配记录
///
/// An empty query matches nothing; the widget shows no results until the user types.
pub fn match_records(records: &[Record], query: &str) -> Vec<Record> {
    if query.is_empty() {
        return Vec::new();
    }

    let matched: Vec<Record> = records
        .iter()
        .filter(|r| contains_ignore_case(&r.name, query))
        .cloned()
        .collect();

    tracing::debug!(
        "Matched {} of {} records for {:?}",
        matched.len(),
        records.len(),
        query
    );
    matched
}

/// Filter already-matched records by the selected tab and count buckets / 分类过滤与计数
///
/// Counts cover every matched record; the selected category only narrows `filtered`.
/// `All` is never restricted by the settings panel.
pub fn apply_view(matched: &[Record], state: &QueryState) -> SearchOutcome {
    let totals = CategoryCounts::from_records(matched);
    let tabs = state.settings.visible_tabs();
    let counts: BTreeMap<_, _> = tabs.iter().map(|c| (*c, totals.get(*c))).collect();

    let filtered = matched
        .iter()
        .filter(|r| state.category.contains(r))
        .cloned()
        .collect();

    SearchOutcome {
        filtered,
        counts,
        totals,
        tabs,
    }
}

/// Full search: match, then filter and count / 完整搜索
pub fn search(records: &[Record], state: &QueryState) -> SearchOutcome {
    let matched = match_records(records, &state.query);
    apply_view(&matched, state)
}
