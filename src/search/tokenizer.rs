//! Case-insensitive text matching / 大小写不敏感的文本匹配
//!
//! Matching runs on the full-string lowercase forms (`str::to_lowercase`), so
//! context rules such as the final sigma and multi-char expansions like 'İ'
//! behave the same as lowercasing both sides and calling `contains`.
//! `FoldedText` keeps a map from the folded string back to the original so a
//! match can be cut out of the original text on character boundaries.

/// Whether `text` contains `query` ignoring case / 是否包含（忽略大小写）
///
/// An empty query never matches.
pub fn contains_ignore_case(text: &str, query: &str) -> bool {
    !query.is_empty() && text.to_lowercase().contains(&query.to_lowercase())
}

/// Lowercased text with offsets back into the original / 小写文本及原文偏移映射
pub struct FoldedText {
    folded: String,
    /// (folded_start, original_start) per original char, plus an end sentinel
    starts: Vec<(usize, usize)>,
}

impl FoldedText {
    pub fn new(text: &str) -> Self {
        let folded = text.to_lowercase();
        let mut starts = Vec::with_capacity(text.len() + 1);
        let mut offset = 0;
        for (orig, c) in text.char_indices() {
            starts.push((offset, orig));
            // the final-sigma rule swaps σ for ς, both two bytes
            offset += c.to_lowercase().map(char::len_utf8).sum::<usize>();
        }
        debug_assert_eq!(offset, folded.len());
        starts.push((folded.len(), text.len()));

        Self { folded, starts }
    }

    /// Leftmost match of an already-lowercased query at or after original offset `from` / 查找匹配
    ///
    /// Returns the original byte range, widened to whole characters when the
    /// match starts or ends inside a character's lowercase expansion.
    pub fn find(&self, folded_query: &str, from: usize) -> Option<(usize, usize)> {
        if folded_query.is_empty() {
            return None;
        }

        let from_idx = self.starts.partition_point(|&(_, orig)| orig < from);
        let &(folded_from, _) = self.starts.get(from_idx)?;
        let start = folded_from + self.folded[folded_from..].find(folded_query)?;
        let end = start + folded_query.len();

        let start_idx = self.starts.partition_point(|&(f, _)| f <= start) - 1;
        let end_idx = self.starts.partition_point(|&(f, _)| f < end);
        Some((self.starts[start_idx].1, self.starts[end_idx].1))
    }
}

/// Leftmost case-insensitive occurrence of `query` at or after `from` / 查找匹配位置
///
/// Returns the byte range in `text`. An empty query never matches.
pub fn find_ignore_case(text: &str, query: &str, from: usize) -> Option<(usize, usize)> {
    FoldedText::new(text).find(&query.to_lowercase(), from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Alice Johnson", "ali"));
        assert!(contains_ignore_case("Alice Johnson", "JOHN"));
        assert!(contains_ignore_case("Alice Johnson", "e J"));
        assert!(!contains_ignore_case("Alice Johnson", "bob"));
        assert!(!contains_ignore_case("Alice Johnson", ""));
        assert!(!contains_ignore_case("", "a"));
    }

    #[test]
    fn test_find_offsets() {
        assert_eq!(find_ignore_case("Bug Fixes", "fix", 0), Some((4, 7)));
        assert_eq!(find_ignore_case("reel.mp4", "e", 2), Some((2, 3)));
        assert_eq!(find_ignore_case("reel.mp4", "e", 3), None);
        assert_eq!(find_ignore_case("reel.mp4", "e", 100), None);
        assert_eq!(find_ignore_case("abc", "abcd", 0), None);
    }

    #[test]
    fn test_non_ascii() {
        assert!(!contains_ignore_case("İstanbul", "x"));
        assert_eq!(find_ignore_case("Ärger", "är", 0), Some((0, 3)));
        assert!(contains_ignore_case("测试文件", "试"));
    }

    #[test]
    fn test_full_string_folding() {
        // 'İ' lowercases to "i\u{307}", final 'Σ' lowercases to 'ς'
        for (name, query) in [("İstanbul", "i"), ("ΟΔΟΣ", "ς")] {
            assert_eq!(
                contains_ignore_case(name, query),
                name.to_lowercase().contains(&query.to_lowercase()),
                "{name:?} / {query:?}"
            );
            assert!(contains_ignore_case(name, query));
        }

        // a match inside an expansion covers the whole original char
        assert_eq!(find_ignore_case("İstanbul", "i", 0), Some((0, 2)));
        assert_eq!(find_ignore_case("ΟΔΟΣ", "ς", 0), Some((6, 8)));
        assert_eq!(find_ignore_case("ΟΔΟΣ", "σ", 0), None);
    }
}
