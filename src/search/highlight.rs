//! Match highlighting / 匹配高亮
//!
//! Splits a name into ordered spans; joining the span texts always gives back
//! the original string.

use serde::Serialize;

use super::tokenizer::FoldedText;

/// One piece of highlighted text / 高亮片段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span<'a> {
    pub text: &'a str,
    pub is_match: bool,
}

impl<'a> Span<'a> {
    fn plain(text: &'a str) -> Self {
        Self { text, is_match: false }
    }

    fn matched(text: &'a str) -> Self {
        Self { text, is_match: true }
    }
}

/// Split `text` on case-insensitive occurrences of `query` / 按查询词切分文本
///
/// The query is taken literally. Matches are leftmost and non-overlapping.
/// An empty query yields the whole text as one plain span.
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Span<'a>> {
    let folded = FoldedText::new(text);
    let query = query.to_lowercase();
    let mut spans = Vec::new();
    let mut cursor = 0;

    while let Some((start, end)) = folded.find(&query, cursor) {
        if start > cursor {
            spans.push(Span::plain(&text[cursor..start]));
        }
        spans.push(Span::matched(&text[start..end]));
        cursor = end;
    }

    if cursor < text.len() {
        spans.push(Span::plain(&text[cursor..]));
    }
    spans
}

/// Join spans back into a string / 拼接片段
pub fn join_spans(spans: &[Span<'_>]) -> String {
    spans.iter().map(|s| s.text).collect()
}
