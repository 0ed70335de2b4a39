//! Block extraction
//!
//! Single-pass scanner that cuts delimiter-bounded blocks out of a source string.
//! Nesting is not supported: only the most recent unmatched left delimiter is
//! tracked, so `"[a[b]"` yields the single block `"b"`.

/// Text found between a matched delimiter pair, delimiters excluded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock(String);

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        TextBlock(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Extract all non-empty blocks from `text`, in order of their closing delimiter.
///
/// A right delimiter closes a block only when a start is pending; otherwise it
/// is ignored. When both delimiters are the same character, successive
/// occurrences toggle between opening and closing.
pub fn extract_blocks(text: &str, left: char, right: char) -> Vec<TextBlock> {
    let mut blocks = Vec::new();
    // Byte offset just past the pending left delimiter
    let mut pending_start: Option<usize> = None;

    for (i, ch) in text.char_indices() {
        match pending_start {
            Some(start) if ch == right => {
                if start < i {
                    blocks.push(TextBlock::new(&text[start..i]));
                }
                pending_start = None;
            }
            _ if ch == left => {
                pending_start = Some(i + ch.len_utf8());
            }
            _ => {}
        }
    }

    log::debug!(
        "Extracted {} block(s) from {} chars (left={:?}, right={:?})",
        blocks.len(),
        text.chars().count(),
        left,
        right
    );

    blocks
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod extract_tests;
