use serde::{Deserialize, Serialize};

/// One per-line edit in a rewrite batch.
///
/// Replaces byte columns `[0, range_end)` of `line` with `new_text`. A
/// `range_end` of zero is a pure insertion at the start of the line. Offsets
/// are byte offsets into the line's UTF-8 text.
///
/// Ops in a batch are independent of each other (at most one op per line), so
/// the host may apply them in any order, ideally as one atomic buffer edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOp {
    /// Zero-based line index in the document.
    pub line: usize,
    /// End of the replaced byte span at the start of the line.
    pub range_end: usize,
    /// Replacement text for the span.
    pub new_text: String,
}

impl EditOp {
    /// Insertion at column 0, consuming no existing text.
    pub fn insert(line: usize, new_text: impl Into<String>) -> Self {
        Self {
            line,
            range_end: 0,
            new_text: new_text.into(),
        }
    }

    /// Replacement of the line's leading `range_end` bytes.
    pub fn replace_prefix(line: usize, range_end: usize, new_text: impl Into<String>) -> Self {
        Self {
            line,
            range_end,
            new_text: new_text.into(),
        }
    }

    pub fn is_insert(&self) -> bool {
        self.range_end == 0
    }

    /// Applies this op to a single line's text, returning the new line.
    pub fn apply_to(&self, line_text: &str) -> String {
        let tail = line_text.get(self.range_end..).unwrap_or("");
        format!("{}{}", self.new_text, tail)
    }
}
